//! Canonical xiangqi rule constants.
//!
//! This module stores static rule literals: the 32-piece opening layout,
//! palace and river geometry, and the starting-position FEN used to
//! initialize and validate game state setup.

use crate::game_state::xiangqi_types::{Color, PieceKind};

/// Standard xiangqi starting position in the engine's FEN dialect.
pub const STARTING_POSITION_FEN: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

/// Palace file bounds, shared by both sides.
pub const PALACE_MIN_X: i8 = 3;
/// Palace file bounds, shared by both sides.
pub const PALACE_MAX_X: i8 = 5;

/// The canonical opening layout as `(kind, color, x, y)` entries.
pub const OPENING_LAYOUT: &[(PieceKind, Color, i8, i8)] = &[
    (PieceKind::Chariot, Color::Red, 0, 9),
    (PieceKind::Chariot, Color::Red, 8, 9),
    (PieceKind::Horse, Color::Red, 1, 9),
    (PieceKind::Horse, Color::Red, 7, 9),
    (PieceKind::Elephant, Color::Red, 2, 9),
    (PieceKind::Elephant, Color::Red, 6, 9),
    (PieceKind::Advisor, Color::Red, 3, 9),
    (PieceKind::Advisor, Color::Red, 5, 9),
    (PieceKind::General, Color::Red, 4, 9),
    (PieceKind::Cannon, Color::Red, 1, 7),
    (PieceKind::Cannon, Color::Red, 7, 7),
    (PieceKind::Soldier, Color::Red, 0, 6),
    (PieceKind::Soldier, Color::Red, 2, 6),
    (PieceKind::Soldier, Color::Red, 4, 6),
    (PieceKind::Soldier, Color::Red, 6, 6),
    (PieceKind::Soldier, Color::Red, 8, 6),
    (PieceKind::Chariot, Color::Black, 0, 0),
    (PieceKind::Chariot, Color::Black, 8, 0),
    (PieceKind::Horse, Color::Black, 1, 0),
    (PieceKind::Horse, Color::Black, 7, 0),
    (PieceKind::Elephant, Color::Black, 2, 0),
    (PieceKind::Elephant, Color::Black, 6, 0),
    (PieceKind::Advisor, Color::Black, 3, 0),
    (PieceKind::Advisor, Color::Black, 5, 0),
    (PieceKind::General, Color::Black, 4, 0),
    (PieceKind::Cannon, Color::Black, 1, 2),
    (PieceKind::Cannon, Color::Black, 7, 2),
    (PieceKind::Soldier, Color::Black, 0, 3),
    (PieceKind::Soldier, Color::Black, 2, 3),
    (PieceKind::Soldier, Color::Black, 4, 3),
    (PieceKind::Soldier, Color::Black, 6, 3),
    (PieceKind::Soldier, Color::Black, 8, 3),
];

/// True when `(x, y)` lies inside `color`'s 3x3 palace.
#[inline]
pub const fn in_palace(color: Color, x: i8, y: i8) -> bool {
    if x < PALACE_MIN_X || x > PALACE_MAX_X {
        return false;
    }
    match color {
        Color::Red => y >= 7 && y <= 9,
        Color::Black => y >= 0 && y <= 2,
    }
}

/// True once a soldier of `color` standing on rank `y` has crossed the river
/// and may therefore step sideways.
#[inline]
pub const fn has_crossed_river(color: Color, y: i8) -> bool {
    match color {
        Color::Red => y <= 4,
        Color::Black => y >= 5,
    }
}

/// True when rank `y` is on `color`'s own side of the river. Elephants may
/// never land past this boundary.
#[inline]
pub const fn stays_own_side(color: Color, y: i8) -> bool {
    match color {
        Color::Red => y > 4,
        Color::Black => y < 5,
    }
}
