use thiserror::Error;

/// Represents all failure modes of the rules engine.
/// Every mutating operation is all-or-nothing: when one of these is raised
/// the prior state is completely intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Errors {
    /// Coordinates outside the 9-file by 10-rank board.
    #[error("position ({0}, {1}) is off the board")]
    InvalidPosition(i8, i8),
    /// Wrong turn, empty source square, a destination outside the legal-move
    /// set, or a move that would leave the mover's own general in check.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// FEN text with missing fields, a bad rank count, an unknown piece
    /// letter, or a general count other than exactly one per side.
    #[error("malformed FEN: {0}")]
    MalformedFen(String),
    /// Unparsable serialized game data, or recorded history that replays
    /// illegally against its own initial board.
    #[error("malformed game record: {0}")]
    MalformedGameRecord(String),
    /// Undo before the first move or redo past the last.
    #[error("history boundary reached")]
    EmptyHistory,
}
