//! Stateful game controller wrapping `Board`.
//!
//! `GameState` owns the board, side to move, check flag, terminal result and
//! move log. `attempt_move` is its only mutator: it validates, applies,
//! classifies the new position and records the move, or refuses without
//! touching anything.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::GameConfig;
use crate::engine::attacks;
use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::notation::{self, CheckMarker, MoveFacts};
use crate::engine::types::{Color, MoveError, Piece, PieceKind, Square, Terminal};

// =========================================================================
// MoveRecord
// =========================================================================

/// One entry of the move log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub color: Color,
    pub capture: bool,
    pub promotion: bool,
    pub marker: CheckMarker,
    /// Reduced algebraic string, e.g. `♕h5xf7#`.
    pub notation: String,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation)
    }
}

// =========================================================================
// Collaborator seams
// =========================================================================

/// Notified after every successful move.
pub trait GameObserver {
    fn on_state_changed(&mut self, state: &GameState);
}

impl<F: FnMut(&GameState)> GameObserver for F {
    fn on_state_changed(&mut self, state: &GameState) {
        self(state)
    }
}

/// Chooses moves for the side not driven by direct input.
pub trait MoveSelector {
    /// Pick a `(from, to)` pair for the side to move, or `None` to pass.
    fn select_move(&mut self, state: &GameState) -> Option<(Square, Square)>;
}

impl<F: FnMut(&GameState) -> Option<(Square, Square)>> MoveSelector for F {
    fn select_move(&mut self, state: &GameState) -> Option<(Square, Square)> {
        self(state)
    }
}

// =========================================================================
// GameState
// =========================================================================

/// A game in progress (or finished) with its full move log.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    /// King square of the side to move while it is in check.
    in_check: Option<Square>,
    result: Terminal,
    history: Vec<MoveRecord>,
    human_color: Color,

    // Metadata
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl GameState {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// A new game from the standard starting position, White to move.
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    /// A new game from the starting position using `config`.
    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            board: Board::starting(),
            turn: Color::White,
            in_check: None,
            result: Terminal::InProgress,
            history: Vec::new(),
            human_color: config.human_color,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    /// A game starting from an arbitrary position.
    ///
    /// The position is classified immediately, so a board that is already
    /// mate or stalemate for `turn` yields a finished game.
    pub fn from_board(board: Board, turn: Color, human_color: Color) -> Self {
        let (in_check, result) = classify(&board, turn);
        Self {
            board,
            turn,
            in_check,
            result,
            history: Vec::new(),
            human_color,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// King square of the side to move if it is in check.
    pub fn current_check(&self) -> Option<Square> {
        self.in_check
    }

    /// Current result.
    pub fn result(&self) -> Terminal {
        self.result
    }

    /// Completed moves in play order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Side driven by direct input.
    pub fn human_color(&self) -> Color {
        self.human_color
    }

    pub fn is_game_over(&self) -> bool {
        self.result.is_over()
    }

    /// True while the game runs and the side to move belongs to the external
    /// move selector.
    pub fn awaiting_external_move(&self) -> bool {
        !self.is_game_over() && self.turn != self.human_color
    }

    /// Legal targets for the piece on `from`, for move highlighting.
    ///
    /// Empty when the game is over or `from` does not hold a piece of the
    /// side to move.
    pub fn legal_moves_from(&self, from: Square) -> Vec<Square> {
        match self.board.piece_at(from) {
            Some(piece) if piece.color == self.turn && !self.is_game_over() => {
                movegen::legal_moves(&self.board, from, self.turn)
            }
            _ => Vec::new(),
        }
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves_for_turn(&self) -> Vec<(Square, Square)> {
        if self.is_game_over() {
            return Vec::new();
        }
        movegen::all_legal_moves(&self.board, self.turn)
    }

    // -----------------------------------------------------------------
    // Make move
    // -----------------------------------------------------------------

    /// Play `from` -> `to` for the side to move.
    ///
    /// On success the turn passes, the check flag and result are recomputed
    /// for the new side to move, and the record is appended to the history.
    /// Any error leaves the state exactly as it was.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        let piece = self.validate(from, to).inspect_err(|err| {
            debug!(game_id = %self.id, %from, %to, %err, "move rejected");
        })?;

        let capture = self
            .board
            .piece_at(to)
            .is_some_and(|p| p.color != piece.color);
        let promotion = self.board.is_promotion(from, to);

        self.board = self.board.after_move(from, to);
        self.turn = !self.turn;

        let (in_check, result) = classify(&self.board, self.turn);
        self.in_check = in_check;
        self.result = result;

        let marker = match (result, in_check) {
            (Terminal::Checkmate { .. }, _) => CheckMarker::Checkmate,
            (_, Some(_)) => CheckMarker::Check,
            _ => CheckMarker::None,
        };
        let facts = MoveFacts {
            kind: piece.kind,
            from,
            to,
            capture,
            promotion,
            marker,
        };
        let record = MoveRecord {
            from,
            to,
            piece: piece.kind,
            color: piece.color,
            capture,
            promotion,
            marker,
            notation: notation::format_move(&facts),
        };
        self.history.push(record.clone());

        debug!(game_id = %self.id, notation = %record.notation, "move applied");
        if self.result.is_over() {
            info!(game_id = %self.id, result = %self.result, moves = self.history.len(), "game over");
        }

        Ok(record)
    }

    /// [`attempt_move`](Self::attempt_move), then notify `observer` if the
    /// move was applied.
    pub fn attempt_move_notify(
        &mut self,
        from: Square,
        to: Square,
        observer: &mut impl GameObserver,
    ) -> Result<MoveRecord, MoveError> {
        let record = self.attempt_move(from, to)?;
        observer.on_state_changed(self);
        Ok(record)
    }

    /// Let `selector` move for the external side.
    ///
    /// Returns `Ok(None)` without asking the selector when it is not the
    /// external side's turn, and `Ok(None)` when the selector passes.
    pub fn play_external(
        &mut self,
        selector: &mut impl MoveSelector,
    ) -> Result<Option<MoveRecord>, MoveError> {
        if !self.awaiting_external_move() {
            return Ok(None);
        }
        match selector.select_move(self) {
            Some((from, to)) => self.attempt_move(from, to).map(Some),
            None => Ok(None),
        }
    }

    fn validate(&self, from: Square, to: Square) -> Result<Piece, MoveError> {
        if self.result.is_over() {
            return Err(MoveError::GameOver(self.result));
        }
        let piece = self.board.piece_at(from).ok_or(MoveError::NoPiece(from))?;
        if piece.color != self.turn {
            return Err(MoveError::NotYourPiece(from));
        }
        if !movegen::legal_moves(&self.board, from, self.turn).contains(&to) {
            return Err(MoveError::IllegalMove { from, to });
        }
        Ok(piece)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------
// Status detection
// -----------------------------------------------------------------

/// Check flag and result for `side` to move on `board`.
fn classify(board: &Board, side: Color) -> (Option<Square>, Terminal) {
    let in_check = attacks::attacking_square(side, board).and(board.king_square(side));

    if movegen::has_legal_move(board, side) {
        return (in_check, Terminal::InProgress);
    }

    match in_check {
        Some(_) => (in_check, Terminal::Checkmate { winner: !side }),
        None => (None, Terminal::Stalemate),
    }
}

// =========================================================================
// Tests
// =========================================================================
