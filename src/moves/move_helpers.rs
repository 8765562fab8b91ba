//! Shared helpers for the per-piece raw move modules.

use crate::board_location::{is_valid_position, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::Color;

/// The four orthogonal ray directions used by chariot, cannon, and general.
pub(crate) const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Appends `(x, y)` when it is on the board and not occupied by a friendly
/// piece. Raw-move semantics: an enemy occupant is a capture destination.
pub(crate) fn push_step(
    board: &Board,
    color: Color,
    x: i8,
    y: i8,
    moves: &mut Vec<BoardLocation>,
) {
    if !is_valid_position(x, y) {
        return;
    }
    match board.get(x, y) {
        Some(occupant) if occupant.color == color => {}
        _ => moves.push((x, y)),
    }
}
