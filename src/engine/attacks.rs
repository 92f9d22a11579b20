//! Check detection.
//!
//! Attacks are read off the opponent's *geometric* moves. Using the filtered
//! legal set here would recurse back into [`movegen::legal_moves`], which
//! itself asks whether a king is attacked.

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{Color, Square};

/// Square of the first opposing piece (in scan order) that attacks
/// `defender`'s king, or `None` when the king is safe or absent.
pub fn attacking_square(defender: Color, board: &Board) -> Option<Square> {
    let king = board.king_square(defender)?;
    board
        .squares_of(!defender)
        .find(|&from| movegen::geometric_moves(board, from).contains(&king))
}

/// Is `defender`'s king attacked on `board`?
#[inline]
pub fn is_in_check(defender: Color, board: &Board) -> bool {
    attacking_square(defender, board).is_some()
}

// =========================================================================
// Tests
// =========================================================================
