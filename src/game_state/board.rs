//! The 10x9 mailbox board.
//!
//! Cells hold `Option<Piece>` values indexed `squares[y][x]`. Because every
//! cell is a `Copy` value, `Clone` yields an independent deep snapshot with
//! no aliasing into the live board.

use serde::{Deserialize, Serialize};

use crate::board_location::{is_valid_position, BoardLocation, COLS, ROWS};
use crate::game_state::xiangqi_rules::OPENING_LAYOUT;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind};

/// The playing surface: ranks 0 (Black's back rank) through 9 (Red's).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; COLS as usize]; ROWS as usize],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_opening()
    }
}

impl Board {
    /// An empty board.
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; COLS as usize]; ROWS as usize],
        }
    }

    /// The canonical 32-piece opening layout.
    pub fn new_opening() -> Self {
        let mut board = Self::new_empty();
        for &(kind, color, x, y) in OPENING_LAYOUT {
            board.squares[y as usize][x as usize] = Some(Piece::new(kind, color));
        }
        board
    }

    /// The occupant of `(x, y)`, or `None` for an empty square or an
    /// out-of-range coordinate. Never panics.
    #[inline]
    pub fn get(&self, x: i8, y: i8) -> Option<Piece> {
        if !is_valid_position(x, y) {
            return None;
        }
        self.squares[y as usize][x as usize]
    }

    /// Overwrites the cell at `(x, y)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn set(&mut self, x: i8, y: i8, piece: Option<Piece>) {
        if is_valid_position(x, y) {
            self.squares[y as usize][x as usize] = piece;
        }
    }

    /// Removes and returns the occupant of `(x, y)`.
    #[inline]
    pub fn take(&mut self, x: i8, y: i8) -> Option<Piece> {
        if !is_valid_position(x, y) {
            return None;
        }
        self.squares[y as usize][x as usize].take()
    }

    /// Pure bounds check.
    #[inline]
    pub const fn is_valid_position(&self, x: i8, y: i8) -> bool {
        is_valid_position(x, y)
    }

    /// Iterates over every occupied square as `((x, y), piece)`.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(y, rank)| {
            rank.iter().enumerate().filter_map(move |(x, cell)| {
                cell.map(|piece| ((x as i8, y as i8), piece))
            })
        })
    }

    /// Linear scan for the unique general of `color`. Absence yields `None`
    /// rather than failing.
    pub fn find_general(&self, color: Color) -> Option<BoardLocation> {
        self.iter_pieces()
            .find(|&(_, piece)| piece.kind == PieceKind::General && piece.color == color)
            .map(|(loc, _)| loc)
    }
}
