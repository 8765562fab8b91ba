//! Position-to-FEN export.
//!
//! Ranks are emitted top (Black's back rank) to bottom with run-length
//! encoded empty squares; uppercase letters are Red, lowercase Black.

use std::fmt;

use crate::board_location::{COLS, ROWS};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind};

/// Lowercase FEN letter for a piece kind.
pub const fn piece_fen_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Chariot => 'r',
        PieceKind::Horse => 'n',
        PieceKind::Elephant => 'b',
        PieceKind::Advisor => 'a',
        PieceKind::General => 'k',
        PieceKind::Cannon => 'c',
        PieceKind::Soldier => 'p',
    }
}

/// FEN character for a piece: uppercase Red, lowercase Black.
pub const fn piece_to_fen_char(piece: Piece) -> char {
    let letter = piece_fen_letter(piece.kind);
    match piece.color {
        Color::Red => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}

impl fmt::Display for Piece {
    /// A piece prints as its FEN character.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", piece_to_fen_char(*self))
    }
}

/// Export `<10 ranks> <w|b> - - 0 <fullmove>`.
pub fn generate_fen(board: &Board, turn: Color, move_count: u16) -> String {
    let mut out = String::new();

    for y in 0..ROWS {
        let mut empty_count = 0u8;

        for x in 0..COLS {
            match board.get(x, y) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if y < ROWS - 1 {
            out.push('/');
        }
    }

    let side = match turn {
        Color::Red => 'w',
        Color::Black => 'b',
    };
    out.push_str(&format!(" {side} - - 0 {move_count}"));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::xiangqi_rules::STARTING_POSITION_FEN;

    #[test]
    fn opening_position_exports_the_canonical_fen() {
        let board = Board::new_opening();
        assert_eq!(generate_fen(&board, Color::Red, 1), STARTING_POSITION_FEN);
    }

    #[test]
    fn side_to_move_and_fullmove_fields_follow_the_state() {
        let board = Board::new_opening();
        let fen = generate_fen(&board, Color::Black, 12);
        assert!(fen.ends_with(" b - - 0 12"));
    }

    #[test]
    fn pieces_display_as_their_fen_characters() {
        assert_eq!(
            Piece::new(PieceKind::General, Color::Red).to_string(),
            "K"
        );
        assert_eq!(
            Piece::new(PieceKind::Horse, Color::Black).to_string(),
            "n"
        );
    }

    #[test]
    fn empty_board_is_ten_nines() {
        let board = Board::new_empty();
        let fen = generate_fen(&board, Color::Red, 1);
        assert!(fen.starts_with("9/9/9/9/9/9/9/9/9/9 "));
    }
}
