//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments. Red and Black use their traditional glyph sets.

use crate::board_location::{COLS, ROWS};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind};

/// Render the board to a string for terminal output, rank 0 (Black's back
/// rank) at the top. A marker row shows the river.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7 8\n");

    for y in 0..ROWS {
        out.push(char::from(b'0' + y as u8));
        out.push(' ');

        for x in 0..COLS {
            match board.get(x, y) {
                Some(piece) => out.push(piece_glyph(piece)),
                None => out.push('·'),
            }
            if x < COLS - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
        if y == 4 {
            out.push_str("  ~~~~~~~~~~~~~~~~~\n");
        }
    }

    out.push_str("  0 1 2 3 4 5 6 7 8");
    out
}

fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Red, PieceKind::Chariot) => '俥',
        (Color::Red, PieceKind::Horse) => '傌',
        (Color::Red, PieceKind::Elephant) => '相',
        (Color::Red, PieceKind::Advisor) => '仕',
        (Color::Red, PieceKind::General) => '帥',
        (Color::Red, PieceKind::Cannon) => '炮',
        (Color::Red, PieceKind::Soldier) => '兵',
        (Color::Black, PieceKind::Chariot) => '車',
        (Color::Black, PieceKind::Horse) => '馬',
        (Color::Black, PieceKind::Elephant) => '象',
        (Color::Black, PieceKind::Advisor) => '士',
        (Color::Black, PieceKind::General) => '將',
        (Color::Black, PieceKind::Cannon) => '砲',
        (Color::Black, PieceKind::Soldier) => '卒',
    }
}
