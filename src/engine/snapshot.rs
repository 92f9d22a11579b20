//! Serializable view of a game for rendering and transport collaborators.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::game::GameState;
use crate::engine::types::{Color, Square, Terminal};

/// Read-only picture of a `GameState`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: String,
    /// Row 0 is rank 8. Pieces are coded like "wP" or "bK".
    pub board: Vec<Vec<Option<String>>>,
    pub placement: String,
    pub turn: Color,
    /// King square of the side to move while in check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<Square>,
    pub result: Terminal,
    pub history: Vec<String>,
    pub human_color: Color,
    pub created_at: DateTime<Utc>,
}

impl GameState {
    /// Capture the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let board: Vec<Vec<Option<String>>> = (0..8u8)
            .map(|rank| {
                (0..8u8)
                    .map(|file| {
                        Square::new(rank, file)
                            .and_then(|sq| self.board().piece_at(sq))
                            .map(|p| p.code())
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        GameSnapshot {
            id: self.id.clone(),
            board,
            placement: self.board().to_placement(),
            turn: self.turn(),
            check: self.current_check(),
            result: self.result(),
            history: self.history().iter().map(|r| r.notation.clone()).collect(),
            human_color: self.human_color(),
            created_at: self.created_at,
        }
    }
}
