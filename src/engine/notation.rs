//! Reduced algebraic notation for the move log.
//!
//! A record reads `<glyph><from><x?><to><=Q?><+|#?>`, for example `e2e4`,
//! `♘g1f3`, `♕d1xf7#` or `e7e8=Q+`. Both squares are always spelled out, so
//! no disambiguation is needed.

use serde::Serialize;

use crate::engine::types::{PieceKind, Square};

/// Check marker appended to a record, decided after the move is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMarker {
    #[default]
    None,
    Check,
    Checkmate,
}

impl CheckMarker {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckMarker::None => "",
            CheckMarker::Check => "+",
            CheckMarker::Checkmate => "#",
        }
    }
}

/// Everything the formatter needs to know about one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveFacts {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    /// The destination held an opposing piece before the move.
    pub capture: bool,
    /// A pawn was auto-promoted to a queen.
    pub promotion: bool,
    pub marker: CheckMarker,
}

/// Render a move record.
pub fn format_move(facts: &MoveFacts) -> String {
    let mut s = String::with_capacity(12);
    s.push_str(facts.kind.glyph());
    s.push_str(&facts.from.to_algebraic());
    if facts.capture {
        s.push('x');
    }
    s.push_str(&facts.to.to_algebraic());
    if facts.promotion {
        s.push_str("=Q");
    }
    s.push_str(facts.marker.as_str());
    s
}

// =========================================================================
// Tests
// =========================================================================
