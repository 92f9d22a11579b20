//! Reduced-rule chess engine.
//!
//! Legal move generation, check detection and a turn state machine that
//! drives a two-player game to checkmate or stalemate. Castling and
//! en-passant are not part of the rule set; pawns always promote to a queen.

pub mod config;
pub mod engine;

pub use config::GameConfig;
pub use engine::{Board, Color, GameState, MoveError, MoveRecord, Piece, PieceKind, Square, Terminal};
