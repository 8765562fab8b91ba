//! Raw horse movement geometry.
//!
//! Unlike a Western knight, the horse does not jump: each L-move is blocked
//! when the adjacent square in the long direction (the "leg") is occupied.

use crate::board_location::{is_valid_position, BoardLocation};
use crate::game_state::board::Board;
use crate::game_state::xiangqi_types::Color;
use crate::moves::move_helpers::push_step;

const HORSE_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// Raw destinations for a horse at `(x, y)`.
pub fn horse_moves(board: &Board, x: i8, y: i8, color: Color) -> Vec<BoardLocation> {
    let mut moves = Vec::new();
    for (dx, dy) in HORSE_JUMPS {
        let (nx, ny) = (x + dx, y + dy);
        // Integer halving maps the +/-2 component to the leg square and the
        // +/-1 component to zero.
        let (leg_x, leg_y) = (x + dx / 2, y + dy / 2);
        if is_valid_position(nx, ny) && board.get(leg_x, leg_y).is_none() {
            push_step(board, color, nx, ny, &mut moves);
        }
    }
    moves
}
