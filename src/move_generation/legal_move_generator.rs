//! Legality filtering: raw moves minus self-check outcomes.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::move_generation::check_detection::is_king_in_check;
use crate::move_generation::raw_move_generator::raw_moves;

/// Legal destinations for the piece at `(x, y)`: every raw move that does
/// not leave the mover's own general in check.
///
/// Each candidate is applied to a scratch clone of the board before the
/// check probe, so no caller can ever observe the speculative position and
/// no hand-written cell restoration is needed.
pub fn legal_moves(board: &Board, x: i8, y: i8) -> Vec<BoardLocation> {
    let Some(piece) = board.get(x, y) else {
        return Vec::new();
    };
    raw_moves(board, x, y)
        .into_iter()
        .filter(|&(to_x, to_y)| {
            let mut scratch = board.clone();
            let moved = scratch.take(x, y);
            scratch.set(to_x, to_y, moved);
            !is_king_in_check(&scratch, piece.color)
        })
        .collect()
}
