//! Serialized game interchange.
//!
//! The wire shape is `{ moveHistory, currentMoveIndex, initialBoard }` as
//! JSON. Import never trusts a stored final position: the engine replays the
//! recorded moves against the initial board, so corrupted history surfaces
//! as a replay failure instead of silently loading a broken position.

use serde::{Deserialize, Serialize};

use crate::errors::Errors;
use crate::game_state::board::Board;
use crate::game_state::move_record::MoveRecord;

/// A complete serialized game: history, the undo/redo cursor, and the
/// position the history starts from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub move_history: Vec<MoveRecord>,
    pub current_move_index: i32,
    pub initial_board: Board,
}

/// Serializes a game record to JSON text.
pub fn write_game_record(record: &GameRecord) -> Result<String, Errors> {
    serde_json::to_string(record).map_err(|err| Errors::MalformedGameRecord(err.to_string()))
}

/// Parses JSON text into a game record. Replay validation is the caller's
/// job; this only checks the wire shape.
pub fn parse_game_record(data: &str) -> Result<GameRecord, Errors> {
    serde_json::from_str(data).map_err(|err| Errors::MalformedGameRecord(err.to_string()))
}
