//! Raw soldier movement geometry.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::xiangqi_rules::has_crossed_river;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::push_step;

/// Raw destinations for a soldier at `(x, y)`: one step toward the opponent,
/// plus sideways steps once the river is crossed. Never backward.
pub fn soldier_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    let forward = match color {
        Color::Red => -1,
        Color::Black => 1,
    };
    push_step(board, color, x, y + forward, &mut moves);
    if has_crossed_river(color, y) {
        push_step(board, color, x - 1, y, &mut moves);
        push_step(board, color, x + 1, y, &mut moves);
    }
    moves
}
