//! General safety: check, the flying-general rule, and checkmate.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::Color;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::move_generation::raw_move_generator::raw_moves;

/// Locates the unique general of `color`; `None` if absent.
#[inline]
pub fn find_general(board: &Board, color: Color) -> Option<BoardLocation> {
    board.find_general(color)
}

/// True when both generals share a file with no piece strictly between them.
/// Such a confrontation counts as mutual check even though neither general's
/// raw geometry reaches the other.
pub fn generals_face_each_other(board: &Board) -> bool {
    let (Some(red), Some(black)) = (
        board.find_general(Color::Red),
        board.find_general(Color::Black),
    ) else {
        return false;
    };
    if red.0 != black.0 {
        return false;
    }
    let (low, high) = (red.1.min(black.1), red.1.max(black.1));
    ((low + 1)..high).all(|y| board.get(red.0, y).is_none())
}

/// True when any enemy piece's raw moves reach `color`'s general, or when
/// the generals confront each other on an open file. Raw moves are used here
/// deliberately: probing legal moves would recurse through this function.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(general) = board.find_general(color) else {
        return false;
    };
    let enemy = color.opposite();
    for ((x, y), piece) in board.iter_pieces() {
        if piece.color == enemy && raw_moves(board, x, y).contains(&general) {
            return true;
        }
    }
    generals_face_each_other(board)
}

/// True when `color` is in check and none of its pieces has a legal move.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_king_in_check(board, color) {
        return false;
    }
    for ((x, y), piece) in board.iter_pieces() {
        if piece.color == color && !legal_moves(board, x, y).is_empty() {
            return false;
        }
    }
    true
}
