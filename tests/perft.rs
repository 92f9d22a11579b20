//! Perft (PERFormance Test): leaf-node counts of the move tree.
//!
//! Castling, en-passant and promotion cannot occur within the depths used
//! here, so the counts match the published values for standard chess even
//! though this rule set omits those moves.
//!
//! Reference: <https://www.chessprogramming.org/Perft_Results>

use chess_rules::engine::board::Board;
use chess_rules::engine::movegen::all_legal_moves;
use chess_rules::engine::types::Color;

/// Recursive perft: count leaf nodes at `depth`.
fn perft(board: &Board, side: Color, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = all_legal_moves(board, side);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .into_iter()
        .map(|(from, to)| perft(&board.after_move(from, to), !side, depth - 1))
        .sum()
}

// =====================================================================
// Position 1: starting position
// =====================================================================

#[test]
fn perft_start_depth_1() {
    assert_eq!(perft(&Board::starting(), Color::White, 1), 20);
}

#[test]
fn perft_start_depth_2() {
    assert_eq!(perft(&Board::starting(), Color::White, 2), 400);
}

#[test]
fn perft_start_depth_3() {
    assert_eq!(perft(&Board::starting(), Color::White, 3), 8_902);
}

// =====================================================================
// Position 3: rook and pawn endgame (checks and pins)
// =====================================================================

fn position_3() -> Board {
    Board::from_placement("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8").unwrap()
}

#[test]
fn perft_position_3_depth_1() {
    assert_eq!(perft(&position_3(), Color::White, 1), 14);
}

#[test]
fn perft_position_3_depth_2() {
    assert_eq!(perft(&position_3(), Color::White, 2), 191);
}
