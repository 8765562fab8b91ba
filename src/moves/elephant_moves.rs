//! Raw elephant movement geometry.

use crate::board_location::{is_valid_position, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_rules::stays_own_side;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::push_step;

const ELEPHANT_STEPS: [(i8, i8); 4] = [(2, 2), (2, -2), (-2, 2), (-2, -2)];

/// Raw destinations for an elephant at `(x, y)`: two-square diagonal leaps,
/// blocked by an occupied midpoint (the "eye") and confined to the owner's
/// side of the river.
pub fn elephant_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (dx, dy) in ELEPHANT_STEPS {
        let (nx, ny) = (x + dx, y + dy);
        let (eye_x, eye_y) = (x + dx / 2, y + dy / 2);
        if is_valid_position(nx, ny)
            && stays_own_side(color, ny)
            && board.get(eye_x, eye_y).is_none()
        {
            push_step(board, color, nx, ny, &mut moves);
        }
    }
    moves
}
