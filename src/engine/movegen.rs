//! Move generation.
//!
//! Pipeline:
//!   1. Generate geometric (pseudo-legal) targets for one piece, ignoring
//!      whether its own king is left attacked.
//!   2. Filter: build the board after each target and drop it if the mover's
//!      king is attacked there.
//!
//! There is no pin detection. Step 2 re-evaluates every enemy attack on the
//! resulting board, which is the only thing that makes a move legal.

use crate::engine::attacks;
use crate::engine::board::Board;
use crate::engine::types::{Color, Piece, PieceKind, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (1, -2),
    (-1, -2),
    (-1, 2),
    (2, 1),
    (2, -1),
    (-2, -1),
    (-2, 1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

const DIAGONALS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

// =========================================================================
// Public API
// =========================================================================

/// Every square the piece on `from` could reach in one move, ignoring the
/// safety of its own king. Empty when `from` is empty.
pub fn geometric_moves(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut targets = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.color, &mut targets),
        PieceKind::Knight => leaper_moves(board, from, piece, &KNIGHT_OFFSETS, &mut targets),
        PieceKind::Bishop => slider_moves(board, from, piece, &DIAGONALS, &mut targets),
        PieceKind::Rook => slider_moves(board, from, piece, &ORTHOGONALS, &mut targets),
        PieceKind::Queen => {
            slider_moves(board, from, piece, &DIAGONALS, &mut targets);
            slider_moves(board, from, piece, &ORTHOGONALS, &mut targets);
        }
        PieceKind::King => leaper_moves(board, from, piece, &KING_OFFSETS, &mut targets),
    }
    targets
}

/// Targets of the piece on `from` that do not leave `color`'s king attacked.
pub fn legal_moves(board: &Board, from: Square, color: Color) -> Vec<Square> {
    geometric_moves(board, from)
        .into_iter()
        .filter(|&to| !attacks::is_in_check(color, &board.after_move(from, to)))
        .collect()
}

/// Every legal `(from, to)` pair for `color`, scanning the board rank by rank.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    board
        .squares_of(color)
        .flat_map(|from| {
            legal_moves(board, from, color)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .squares_of(color)
        .any(|from| !legal_moves(board, from, color).is_empty())
}

// =========================================================================
// Per-piece generation (internal)
// =========================================================================

fn pawn_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    let dir = color.pawn_direction();

    // --- Single and double advance ---
    if let Some(one) = from.offset(dir, 0)
        && board.piece_at(one).is_none()
    {
        out.push(one);
        if from.rank() == color.pawn_start_rank()
            && let Some(two) = from.offset(2 * dir, 0)
            && board.piece_at(two).is_none()
        {
            out.push(two);
        }
    }

    // --- Diagonal captures ---
    for d_file in [1, -1] {
        if let Some(to) = from.offset(dir, d_file)
            && board.piece_at(to).is_some_and(|p| p.color != color)
        {
            out.push(to);
        }
    }
}

fn leaper_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_rank, d_file) in offsets {
        if let Some(to) = from.offset(d_rank, d_file)
            && board.piece_at(to).is_none_or(|p| p.color != piece.color)
        {
            out.push(to);
        }
    }
}

fn slider_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_rank, d_file) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_rank, d_file) {
            match board.piece_at(to) {
                None => out.push(to),
                Some(p) => {
                    if p.color != piece.color {
                        out.push(to);
                    }
                    break;
                }
            }
            cursor = to;
        }
    }
}

// =========================================================================
// Tests
// =========================================================================
