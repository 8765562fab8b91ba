//! Raw cannon movement geometry.
//!
//! A cannon slides like a chariot onto empty squares, but capturing requires
//! exactly one intervening screen piece: the first occupied square along the
//! ray becomes the screen (never a landing square), and only the next
//! occupied square beyond it may be captured, if hostile.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::ORTHOGONAL_DIRECTIONS;

/// Raw destinations for a cannon at `(x, y)`.
pub fn cannon_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (dx, dy) in ORTHOGONAL_DIRECTIONS {
        let mut cursor = (x, y);
        let mut passed_screen = false;
        while let Ok(next) = move_board_location(&cursor, dx, dy) {
            cursor = next;
            let occupant = board.get(cursor.0, cursor.1);
            if !passed_screen {
                match occupant {
                    None => moves.push(cursor),
                    Some(_) => passed_screen = true,
                }
            } else if let Some(target) = occupant {
                if target.color != color {
                    moves.push(cursor);
                }
                break;
            }
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::xiangqi_types::{Piece, PieceKind};

    fn place(board: &mut Board, kind: PieceKind, color: Color, x: i8, y: i8) {
        board.set(x, y, Some(Piece::new(kind, color)));
    }

    #[test]
    fn cannon_on_an_empty_ray_slides_freely() {
        let mut board = Board::new_empty();
        place(&mut board, PieceKind::Cannon, Color::Red, 4, 5);
        let moves = cannon_moves(&board, 4, 5, Color::Red);
        // 9 squares along the file plus 8 along the rank.
        assert_eq!(moves.len(), 17);
        assert!(moves.contains(&(4, 0)));
        assert!(moves.contains(&(0, 5)));
    }

    #[test]
    fn cannon_captures_across_exactly_one_screen() {
        let mut board = Board::new_empty();
        place(&mut board, PieceKind::Cannon, Color::Red, 4, 9);
        place(&mut board, PieceKind::Soldier, Color::Red, 4, 6); // screen
        place(&mut board, PieceKind::Horse, Color::Black, 4, 3); // target
        let moves = cannon_moves(&board, 4, 9, Color::Red);
        assert!(moves.contains(&(4, 3)), "one screen enables the capture");
        assert!(!moves.contains(&(4, 6)), "the screen square is never a landing square");
        assert!(moves.contains(&(4, 7)) && moves.contains(&(4, 8)));
        assert!(!moves.contains(&(4, 4)), "no landing between screen and target");
    }

    #[test]
    fn cannon_cannot_capture_with_zero_or_two_screens() {
        let mut board = Board::new_empty();
        place(&mut board, PieceKind::Cannon, Color::Red, 4, 9);
        place(&mut board, PieceKind::Horse, Color::Black, 4, 3);
        // Zero screens: the enemy piece is the first occupied square.
        assert!(!cannon_moves(&board, 4, 9, Color::Red).contains(&(4, 3)));
        // Two screens: a second piece before the target blocks the capture.
        place(&mut board, PieceKind::Soldier, Color::Red, 4, 6);
        place(&mut board, PieceKind::Soldier, Color::Black, 4, 5);
        assert!(!cannon_moves(&board, 4, 9, Color::Red).contains(&(4, 3)));
    }

    #[test]
    fn cannon_never_captures_a_friendly_piece_beyond_the_screen() {
        let mut board = Board::new_empty();
        place(&mut board, PieceKind::Cannon, Color::Red, 4, 9);
        place(&mut board, PieceKind::Soldier, Color::Black, 4, 6);
        place(&mut board, PieceKind::Horse, Color::Red, 4, 3);
        assert!(!cannon_moves(&board, 4, 9, Color::Red).contains(&(4, 3)));
    }
}
