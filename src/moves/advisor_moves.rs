//! Raw advisor movement geometry.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::xiangqi_rules::in_palace;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::push_step;

const ADVISOR_STEPS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Raw destinations for an advisor at `(x, y)`: one diagonal step, confined
/// to the 3x3 palace.
pub fn advisor_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (dx, dy) in ADVISOR_STEPS {
        let (nx, ny) = (x + dx, y + dy);
        if in_palace(color, nx, ny) {
            push_step(board, color, nx, ny, &mut moves);
        }
    }
    moves
}
