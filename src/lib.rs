//! Crate root module declarations for the Lychee Xiangqi rules engine.
//!
//! This file exposes all top-level subsystems (game state, per-piece raw
//! moves, move generation, and utility helpers) so tests, benches, and
//! external tooling can import stable module paths.

pub mod board_location;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod game_state;
    pub mod move_record;
    pub mod xiangqi_rules;
    pub mod xiangqi_types;
}

pub mod moves {
    pub mod advisor_moves;
    pub mod cannon_moves;
    pub mod chariot_moves;
    pub mod elephant_moves;
    pub mod general_moves;
    pub mod horse_moves;
    pub(crate) mod move_helpers;
    pub mod soldier_moves;
}

pub mod move_generation {
    pub mod check_detection;
    pub mod legal_move_generator;
    pub mod raw_move_generator;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod game_record;
    pub mod move_notation;
    pub mod render_game_state;
}
