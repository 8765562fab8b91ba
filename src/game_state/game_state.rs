//! Core mutable engine state.
//!
//! `GameState` is the single owner of the board, the side to move, the move
//! counters, and the undo/redo history. Every public mutating operation is
//! all-or-nothing: it either fully applies and is recorded, or the prior
//! state is left completely intact and `false` is returned.

use log::{debug, warn};

use crate::board_location::BoardLocation;
use crate::errors::Errors;
use crate::game_state::board::Board;
use crate::game_state::move_record::MoveRecord;
use crate::game_state::xiangqi_types::{Color, Piece, PieceKind};
use crate::move_generation::check_detection::{is_checkmate, is_king_in_check};
use crate::move_generation::legal_move_generator::legal_moves;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::game_record::{parse_game_record, write_game_record, GameRecord};
use crate::utils::move_notation::move_notation;

/// A full game: position, turn, counters, and history.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Color,
    /// Fullmove number, incremented each time the turn returns to Red.
    move_count: u16,
    /// Deep snapshot taken at construction and on every successful import;
    /// `reset_to_initial` restores from here.
    initial_board: Board,
    move_history: Vec<MoveRecord>,
    /// Cursor into `move_history`; -1 before the first move. Always within
    /// `[-1, move_history.len() - 1]`.
    current_move_index: i32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// A fresh game with the canonical opening layout, Red to move.
    pub fn new_game() -> Self {
        let board = Board::new_opening();
        let initial_board = board.clone();
        Self {
            board,
            turn: Color::Red,
            move_count: 1,
            initial_board,
            move_history: Vec::new(),
            current_move_index: -1,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn move_count(&self) -> u16 {
        self.move_count
    }

    #[inline]
    pub fn current_move_index(&self) -> i32 {
        self.current_move_index
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    /// The occupant of `(x, y)`, or `None` for an empty square or an
    /// out-of-range coordinate.
    #[inline]
    pub fn get_piece(&self, x: i8, y: i8) -> Option<Piece> {
        self.board.get(x, y)
    }

    /// Legal destinations for the piece at `(x, y)`.
    #[inline]
    pub fn get_legal_moves(&self, x: i8, y: i8) -> Vec<BoardLocation> {
        legal_moves(&self.board, x, y)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    #[inline]
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, color)
    }

    /// Applies a move if legal; `false` (state untouched) otherwise.
    pub fn make_move(&mut self, from_x: i8, from_y: i8, to_x: i8, to_y: i8) -> bool {
        match self.try_make_move(from_x, from_y, to_x, to_y) {
            Ok(()) => true,
            Err(err) => {
                debug!("move ({from_x},{from_y}) -> ({to_x},{to_y}) rejected: {err}");
                false
            }
        }
    }

    fn try_make_move(&mut self, from_x: i8, from_y: i8, to_x: i8, to_y: i8) -> Result<(), Errors> {
        let piece = self
            .board
            .get(from_x, from_y)
            .ok_or_else(|| Errors::IllegalMove(format!("no piece at ({from_x}, {from_y})")))?;

        if piece.color != self.turn {
            return Err(Errors::IllegalMove(format!(
                "it is {}'s turn",
                self.turn.as_str()
            )));
        }

        if !legal_moves(&self.board, from_x, from_y).contains(&(to_x, to_y)) {
            return Err(Errors::IllegalMove(
                "destination is not in the legal-move set".to_owned(),
            ));
        }

        let captured = self.board.get(to_x, to_y);
        if let Some(target) = captured {
            // The legality filter alone would admit this: capturing the
            // opposing general does not expose the mover's own general.
            if target.kind == PieceKind::General {
                return Err(Errors::IllegalMove(
                    "direct capture of the opposing general".to_owned(),
                ));
            }
        }

        self.board.set(to_x, to_y, Some(piece));
        self.board.set(from_x, from_y, None);

        // Defensive re-validation of what the legality filter guarantees.
        if is_king_in_check(&self.board, piece.color) {
            self.board.set(from_x, from_y, Some(piece));
            self.board.set(to_x, to_y, captured);
            return Err(Errors::IllegalMove(
                "own general left in check".to_owned(),
            ));
        }

        // Accepted: discard any redo tail, record, and advance.
        self.move_history
            .truncate((self.current_move_index + 1) as usize);

        let mover = self.turn;
        self.turn = self.turn.opposite();
        if mover == Color::Black {
            self.move_count += 1;
        }

        let fen_after = generate_fen(&self.board, self.turn, self.move_count);
        self.move_history.push(MoveRecord {
            from_x,
            from_y,
            to_x,
            to_y,
            piece,
            captured,
            mover,
            fen_after,
        });
        self.current_move_index += 1;
        debug!(
            "applied ({from_x},{from_y}) -> ({to_x},{to_y}), {} to move",
            self.turn.as_str()
        );
        Ok(())
    }

    /// Reverts the move under the history cursor; `false` at the boundary.
    pub fn undo(&mut self) -> bool {
        match self.try_undo() {
            Ok(()) => true,
            Err(err) => {
                debug!("undo rejected: {err}");
                false
            }
        }
    }

    fn try_undo(&mut self) -> Result<(), Errors> {
        if self.current_move_index < 0 {
            return Err(Errors::EmptyHistory);
        }
        let record = self
            .move_history
            .get(self.current_move_index as usize)
            .cloned()
            .ok_or(Errors::EmptyHistory)?;

        let piece = self.board.get(record.to_x, record.to_y);
        self.board.set(record.from_x, record.from_y, piece);
        self.board.set(record.to_x, record.to_y, record.captured);
        self.turn = record.mover;
        // Mirror of redo's increment rule: a Black move cycled the fullmove
        // counter forward, so undoing one cycles it back.
        if record.mover == Color::Black {
            self.move_count = self.move_count.saturating_sub(1);
        }
        self.current_move_index -= 1;
        Ok(())
    }

    /// Re-applies the move after the history cursor; `false` at the tail.
    pub fn redo(&mut self) -> bool {
        match self.try_redo() {
            Ok(()) => true,
            Err(err) => {
                debug!("redo rejected: {err}");
                false
            }
        }
    }

    fn try_redo(&mut self) -> Result<(), Errors> {
        if self.current_move_index >= self.move_history.len() as i32 - 1 {
            return Err(Errors::EmptyHistory);
        }
        let record = self.move_history[(self.current_move_index + 1) as usize].clone();

        // Tail records loaded by `import_game` are never replay-validated,
        // so an empty source square must fail here instead of erasing the
        // destination occupant.
        let piece = self.board.get(record.from_x, record.from_y).ok_or_else(|| {
            Errors::IllegalMove(format!(
                "no piece at ({}, {}) to redo",
                record.from_x, record.from_y
            ))
        })?;
        self.board.set(record.to_x, record.to_y, Some(piece));
        self.board.set(record.from_x, record.from_y, None);

        let previous = self.turn;
        self.turn = self.turn.opposite();
        if previous == Color::Black {
            self.move_count += 1;
        }
        self.current_move_index += 1;
        Ok(())
    }

    /// Restores the position captured at construction or last import and
    /// clears all history.
    pub fn reset_to_initial(&mut self) -> bool {
        self.board = self.initial_board.clone();
        self.turn = Color::Red;
        self.move_history.clear();
        self.current_move_index = -1;
        self.move_count = 1;
        true
    }

    /// Re-seeds the canonical opening layout regardless of any prior import
    /// and clears all history.
    pub fn reset_game(&mut self) -> bool {
        self.board = Board::new_opening();
        self.initial_board = self.board.clone();
        self.turn = Color::Red;
        self.move_history.clear();
        self.current_move_index = -1;
        self.move_count = 1;
        true
    }

    /// Current position as FEN text.
    pub fn export_fen(&self) -> String {
        generate_fen(&self.board, self.turn, self.move_count)
    }

    /// Replaces the position from FEN text; `false` (state untouched) when
    /// the text is malformed. History is cleared and the imported position
    /// becomes the new initial board.
    pub fn import_fen(&mut self, fen: &str) -> bool {
        match parse_fen(fen) {
            Ok(parsed) => {
                self.board = parsed.board;
                self.initial_board = self.board.clone();
                self.turn = parsed.turn;
                self.move_count = parsed.move_count;
                self.move_history.clear();
                self.current_move_index = -1;
                debug!("imported FEN: {fen}");
                true
            }
            Err(err) => {
                warn!("FEN import rejected: {err}");
                false
            }
        }
    }

    /// Notation strings for every recorded move, including any redo tail.
    pub fn get_move_history(&self) -> Vec<String> {
        self.move_history
            .iter()
            .map(|record| move_notation(&self.board, record))
            .collect()
    }

    /// Traditional notation for one record, resolved against the live board
    /// for disambiguation.
    pub fn get_move_notation(&self, record: &MoveRecord) -> String {
        move_notation(&self.board, record)
    }

    /// Serializes history, cursor, and initial board to JSON text.
    pub fn export_game(&self) -> String {
        let record = GameRecord {
            move_history: self.move_history.clone(),
            current_move_index: self.current_move_index,
            initial_board: self.initial_board.clone(),
        };
        match write_game_record(&record) {
            Ok(text) => text,
            Err(err) => {
                warn!("game export failed: {err}");
                String::new()
            }
        }
    }

    /// Loads a serialized game and replays it up to its cursor; `false`
    /// (state untouched) when the data is unparsable or any recorded move
    /// replays illegally against the stored initial board.
    pub fn import_game(&mut self, data: &str) -> bool {
        match self.try_import_game(data) {
            Ok(()) => true,
            Err(err) => {
                warn!("game import rejected: {err}");
                false
            }
        }
    }

    fn try_import_game(&mut self, data: &str) -> Result<(), Errors> {
        let record = parse_game_record(data)?;
        if record.current_move_index < -1
            || record.current_move_index >= record.move_history.len() as i32
        {
            return Err(Errors::MalformedGameRecord(format!(
                "cursor {} out of range for {} moves",
                record.current_move_index,
                record.move_history.len()
            )));
        }

        // Replay on a scratch state so a corrupt record cannot leave this
        // engine half-imported. The record stores no side-to-move field, so
        // the starting turn is recovered from the first recorded mover; a
        // history-less record can only default to Red.
        let start_turn = record
            .move_history
            .first()
            .map(|recorded| recorded.mover)
            .unwrap_or(Color::Red);
        let mut replay = GameState {
            board: record.initial_board.clone(),
            turn: start_turn,
            move_count: 1,
            initial_board: record.initial_board.clone(),
            move_history: Vec::new(),
            current_move_index: -1,
        };
        let applied = (record.current_move_index + 1) as usize;
        for (index, recorded) in record.move_history.iter().take(applied).enumerate() {
            replay
                .try_make_move(recorded.from_x, recorded.from_y, recorded.to_x, recorded.to_y)
                .map_err(|err| {
                    Errors::MalformedGameRecord(format!("replaying move {index} failed: {err}"))
                })?;
        }

        // Adopt the replayed position but keep the imported records: the
        // tail beyond the cursor stays available for redo.
        self.board = replay.board;
        self.turn = replay.turn;
        self.move_count = replay.move_count;
        self.initial_board = record.initial_board;
        self.move_history = record.move_history;
        self.current_move_index = record.current_move_index;
        Ok(())
    }
}
