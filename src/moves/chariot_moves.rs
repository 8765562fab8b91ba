//! Raw chariot movement geometry.

use crate::board_location::{move_board_location, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::ORTHOGONAL_DIRECTIONS;

/// Raw destinations for a chariot at `(x, y)`: orthogonal slides until
/// blocked, capturing the first enemy piece encountered.
pub fn chariot_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (dx, dy) in ORTHOGONAL_DIRECTIONS {
        let mut cursor = (x, y);
        while let Ok(next) = move_board_location(&cursor, dx, dy) {
            cursor = next;
            match board.get(cursor.0, cursor.1) {
                Some(target) => {
                    if target.color != color {
                        moves.push(cursor);
                    }
                    break;
                }
                None => moves.push(cursor),
            }
        }
    }
    moves
}
