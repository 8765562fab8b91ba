//! FEN-to-position parser.
//!
//! Parses into a candidate position that the caller commits only on full
//! success, so a malformed string never disturbs live state.

use crate::board_location::{COLS, ROWS};
use crate::errors::Errors;
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind};

/// Board, side to move, and fullmove number recovered from a FEN string.
#[derive(Debug, Clone)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Color,
    pub move_count: u16,
}

/// Reverse letter table. Color-symmetric by construction: a letter names the
/// same kind in either case, and case carries only the color.
fn piece_kind_from_fen_letter(letter: char) -> Option<PieceKind> {
    match letter.to_ascii_lowercase() {
        'r' => Some(PieceKind::Chariot),
        'n' => Some(PieceKind::Horse),
        'b' => Some(PieceKind::Elephant),
        'a' => Some(PieceKind::Advisor),
        'k' => Some(PieceKind::General),
        'c' => Some(PieceKind::Cannon),
        'p' => Some(PieceKind::Soldier),
        _ => None,
    }
}

pub fn parse_fen(fen: &str) -> Result<ParsedFen, Errors> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 6 {
        return Err(Errors::MalformedFen(format!(
            "expected at least 6 fields, got {}",
            fields.len()
        )));
    }

    let ranks: Vec<&str> = fields[0].split('/').collect();
    if ranks.len() != ROWS as usize {
        return Err(Errors::MalformedFen(format!(
            "expected {ROWS} ranks, got {}",
            ranks.len()
        )));
    }

    let mut board = Board::new_empty();
    let mut red_generals = 0u8;
    let mut black_generals = 0u8;

    for (y, rank) in ranks.iter().enumerate() {
        let mut x: i8 = 0;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                x += skip as i8;
                continue;
            }
            if x >= COLS {
                return Err(Errors::MalformedFen(format!(
                    "rank {y} overflows {COLS} files"
                )));
            }
            let kind = piece_kind_from_fen_letter(ch).ok_or_else(|| {
                Errors::MalformedFen(format!("unknown piece letter '{ch}' in rank {y}"))
            })?;
            let color = if ch.is_ascii_uppercase() {
                Color::Red
            } else {
                Color::Black
            };
            if kind == PieceKind::General {
                match color {
                    Color::Red => red_generals += 1,
                    Color::Black => black_generals += 1,
                }
            }
            board.set(x, y as i8, Some(Piece::new(kind, color)));
            x += 1;
        }
    }

    if red_generals != 1 || black_generals != 1 {
        return Err(Errors::MalformedFen(format!(
            "expected exactly one general per side, got red={red_generals} black={black_generals}"
        )));
    }

    let turn = match fields[1] {
        "w" => Color::Red,
        "b" => Color::Black,
        other => {
            return Err(Errors::MalformedFen(format!(
                "invalid side-to-move field '{other}'"
            )))
        }
    };

    // An unparsable fullmove field falls back to 1 rather than rejecting
    // the whole string.
    let move_count = fields[5].parse::<u16>().unwrap_or(1);

    Ok(ParsedFen {
        board,
        turn,
        move_count,
    })
}
