//! Single history record for `make_move` / `undo` / `redo`.

use serde::{Deserialize, Serialize};

use crate::game_state::xiangqi_types::{Color, Piece};

/// One applied move, carrying everything undo/redo and notation need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from_x: i8,
    pub from_y: i8,
    pub to_x: i8,
    pub to_y: i8,
    /// The piece that moved.
    pub piece: Piece,
    /// Occupant of the destination before the move; restored by `undo`.
    pub captured: Option<Piece>,
    /// Side that made the move, i.e. the turn value before the move was
    /// applied. `undo` restores the turn from this field.
    pub mover: Color,
    /// FEN of the position immediately after the move, kept for diagnostics.
    pub fen_after: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::xiangqi_types::PieceKind;

    #[test]
    fn record_round_trips_through_json_with_camel_case_keys() {
        let record = MoveRecord {
            from_x: 0,
            from_y: 6,
            to_x: 0,
            to_y: 5,
            piece: Piece::new(PieceKind::Soldier, Color::Red),
            captured: None,
            mover: Color::Red,
            fen_after: String::new(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"fromX\":0"));
        assert!(json.contains("\"fenAfter\""));
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
