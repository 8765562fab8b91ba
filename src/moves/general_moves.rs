//! Raw general movement geometry.
//!
//! The flying-general confrontation rule is not part of raw geometry; it is
//! evaluated by check detection.

use crate::board_location::BoardLocation;
use crate::game_state::board::Board;
use crate::game_state::xiangqi_rules::in_palace;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::{push_step, ORTHOGONAL_DIRECTIONS};

/// Raw destinations for a general at `(x, y)`: one orthogonal step, confined
/// to the 3x3 palace.
pub fn general_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (dx, dy) in ORTHOGONAL_DIRECTIONS {
        let (nx, ny) = (x + dx, y + dy);
        if in_palace(color, nx, ny) {
            push_step(board, color, nx, ny, &mut moves);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::xiangqi_types::{Piece, PieceKind};

    #[test]
    fn general_steps_orthogonally_inside_the_palace() {
        let mut board = Board::new_empty();
        board.set(4, 8, Some(Piece::new(PieceKind::General, Color::Red)));
        let mut moves = general_moves(&board, 4, 8, Color::Red);
        moves.sort();
        assert_eq!(moves, vec![(3, 8), (4, 7), (4, 9), (5, 8)]);
    }

    #[test]
    fn general_cannot_step_out_of_the_palace() {
        let mut board = Board::new_empty();
        board.set(3, 7, Some(Piece::new(PieceKind::General, Color::Red)));
        let moves = general_moves(&board, 3, 7, Color::Red);
        assert!(!moves.contains(&(2, 7)));
        assert!(!moves.contains(&(3, 6)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn friendly_advisor_blocks_a_palace_square() {
        let board = Board::new_opening();
        let moves = general_moves(&board, 4, 9, Color::Red);
        assert_eq!(moves, vec![(4, 8)]);
    }
}
