use crate::errors::Errors;

/// Board coordinates as `(x, y)`: file `x` in `0..=8`, rank `y` in `0..=9`.
/// Rank 0 is Black's back rank, rank 9 is Red's back rank.
pub type BoardLocation = (i8, i8);

/// Number of files on the board.
pub const COLS: i8 = 9;
/// Number of ranks on the board.
pub const ROWS: i8 = 10;

/// Pure bounds check for a coordinate pair.
#[inline]
pub const fn is_valid_position(x: i8, y: i8) -> bool {
    x >= 0 && x < COLS && y >= 0 && y < ROWS
}

/// Moves a board location by a specified file and rank offset.
///
/// Returns `Errors::InvalidPosition` when the step leaves the board.
pub fn move_board_location(
    loc: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, Errors> {
    let next: BoardLocation = (loc.0 + d_file, loc.1 + d_rank);
    if is_valid_position(next.0, next.1) {
        Ok(next)
    } else {
        Err(Errors::InvalidPosition(next.0, next.1))
    }
}
