//! Traditional xiangqi move notation.
//!
//! Columns are numbered 1-9 from each player's own right edge, so the two
//! colors count in opposite directions. Advance/retreat symbols are
//! color-relative, and like pieces sharing a file are disambiguated with a
//! numeric marker: a prefix for Red, a suffix for Black.

use crate::board_location::ROWS;
use crate::game_state::board::Board;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind};

/// Notation letter for a piece kind.
pub const fn piece_notation_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Soldier => 'P',
        PieceKind::Cannon => 'C',
        PieceKind::Horse => 'N',
        PieceKind::Elephant => 'B',
        PieceKind::Chariot => 'R',
        PieceKind::Advisor => 'A',
        PieceKind::General => 'K',
    }
}

/// Column number from the player's own right edge.
#[inline]
const fn column_number(color: Color, x: i8) -> i8 {
    match color {
        Color::Red => 9 - x,
        Color::Black => x + 1,
    }
}

/// Ranks of like-colored pieces of `kind` on file `x`, ordered with the one
/// nearest that color's own back rank first.
fn ranks_in_column(board: &Board, kind: PieceKind, x: i8, color: Color) -> Vec<i8> {
    let mut ranks: Vec<i8> = (0..ROWS)
        .filter(|&y| board.get(x, y) == Some(Piece::new(kind, color)))
        .collect();
    match color {
        Color::Red => ranks.sort_by(|a, b| b.cmp(a)),
        Color::Black => ranks.sort_unstable(),
    }
    ranks
}

/// Notation for a recorded move. The acting piece comes from the record; the
/// supplied board (a historical snapshot when the live board has moved on)
/// is consulted for same-file disambiguation.
pub fn move_notation(board: &Board, record: &MoveRecord) -> String {
    notation_for(
        board,
        record.from_x,
        record.from_y,
        record.to_x,
        record.to_y,
        Some(record.piece),
    )
    .unwrap_or_else(|| "unknown move".to_owned())
}

/// Notation for a raw from/to pair. When `piece` is `None` the acting piece
/// is looked up at the origin on the supplied board snapshot; an empty
/// origin yields `None`.
pub fn notation_for(
    board: &Board,
    from_x: i8,
    from_y: i8,
    to_x: i8,
    to_y: i8,
    piece: Option<Piece>,
) -> Option<String> {
    let piece = piece.or_else(|| board.get(from_x, from_y))?;

    let from_col = column_number(piece.color, from_x);
    let to_col = column_number(piece.color, to_x);
    let delta_y = to_y - from_y;
    // Advance means moving toward the opponent's back rank.
    let advancing = match piece.color {
        Color::Red => delta_y < 0,
        Color::Black => delta_y > 0,
    };

    let (symbol, trailing) = match piece.kind {
        // These pieces change rank and file together, so the target file is
        // the only useful trailing value.
        PieceKind::Horse | PieceKind::Elephant | PieceKind::Advisor => {
            (if advancing { '+' } else { '-' }, to_col)
        }
        _ => {
            if delta_y == 0 {
                ('=', to_col)
            } else {
                (if advancing { '+' } else { '-' }, delta_y.abs())
            }
        }
    };

    let letter = piece_notation_letter(piece.kind);
    let ranks = ranks_in_column(board, piece.kind, from_x, piece.color);
    let marked = if ranks.len() > 1 {
        match ranks.iter().position(|&y| y == from_y) {
            Some(index) => {
                let ordinal = index + 1;
                match piece.color {
                    Color::Red => format!("{ordinal}{letter}"),
                    Color::Black => format!("{letter}{ordinal}"),
                }
            }
            None => letter.to_string(),
        }
    } else {
        letter.to_string()
    };

    Some(format!("{marked}{from_col}{symbol}{trailing}"))
}
