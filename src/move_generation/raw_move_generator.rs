//! Piece-kind dispatch over the raw move modules.
//!
//! Raw moves satisfy a piece's movement geometry only; they ignore whether
//! the mover's own general is left exposed. Check detection relies on this
//! to avoid recursing through the legality filter.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::PieceKind;
use crate::moves::advisor_moves::advisor_moves;
use crate::moves::cannon_moves::cannon_moves;
use crate::moves::chariot_moves::chariot_moves;
use crate::moves::elephant_moves::elephant_moves;
use crate::moves::general_moves::general_moves;
use crate::moves::horse_moves::horse_moves;
use crate::moves::soldier_moves::soldier_moves;

/// Raw destinations for the piece at `(x, y)`; empty for a vacant or
/// out-of-range square.
pub fn raw_moves(board: &Board, x: i8, y: i8) -> Vec<BoardLocation> {
    let Some(piece) = board.get(x, y) else {
        return Vec::new();
    };
    match piece.kind {
        PieceKind::Soldier => soldier_moves(board, x, y, piece.color),
        PieceKind::Cannon => cannon_moves(board, x, y, piece.color),
        PieceKind::Chariot => chariot_moves(board, x, y, piece.color),
        PieceKind::Horse => horse_moves(board, x, y, piece.color),
        PieceKind::Elephant => elephant_moves(board, x, y, piece.color),
        PieceKind::Advisor => advisor_moves(board, x, y, piece.color),
        PieceKind::General => general_moves(board, x, y, piece.color),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vacant_and_out_of_range_squares_yield_no_moves() {
        let board = Board::new_opening();
        assert!(raw_moves(&board, 4, 4).is_empty());
        assert!(raw_moves(&board, -1, 0).is_empty());
    }

    #[test]
    fn dispatch_reaches_every_kind_in_the_opening() {
        let board = Board::new_opening();
        // Chariot boxed in except along its file.
        assert_eq!(raw_moves(&board, 0, 9), vec![(0, 8), (0, 7)]);
        // Cannon has open rank squares and the screen capture on the horse.
        assert!(raw_moves(&board, 1, 7).contains(&(1, 0)));
        // Soldier advances one step.
        assert_eq!(raw_moves(&board, 0, 6), vec![(0, 5)]);
    }
}
