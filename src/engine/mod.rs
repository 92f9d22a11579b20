pub mod attacks;
pub mod board;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod snapshot;
pub mod types;

pub use attacks::{attacking_square, is_in_check};
pub use board::{Board, board_after_move};
pub use game::{GameObserver, GameState, MoveRecord, MoveSelector};
pub use movegen::{all_legal_moves, geometric_moves, legal_moves};
pub use types::*;
