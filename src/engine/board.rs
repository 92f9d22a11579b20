//! Mailbox board representation.
//!
//! `Board` is a plain 8×8 grid of optional pieces with value semantics, so a
//! hypothetical position is produced by copying the grid and editing the copy.
//! Rank 0 holds Black's back rank; rank 7 holds White's.

use std::fmt;

use crate::engine::types::{BoardError, Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 board. At most one piece per square by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

impl Board {
    /// A board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(kind, Color::Black));
            board.squares[1][file] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][file] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][file] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Parse the piece-placement field of a FEN string.
    ///
    /// The first `/`-separated group describes rank 0 (printed "8"), matching
    /// the board's own orientation.
    pub fn from_placement(placement: &str) -> Result<Self, BoardError> {
        let ranks: Vec<&str> = placement.trim().split('/').collect();
        if ranks.len() != 8 {
            return Err(BoardError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (rank, row) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    file += skip as usize;
                    continue;
                }
                let (color, kind) = PieceKind::from_char(c).ok_or(BoardError::InvalidPiece(c))?;
                if file >= 8 {
                    return Err(BoardError::RankLength {
                        rank,
                        files: file + 1,
                    });
                }
                board.squares[rank][file] = Some(Piece::new(kind, color));
                file += 1;
            }
            if file != 8 {
                return Err(BoardError::RankLength { rank, files: file });
            }
        }
        Ok(board)
    }

    /// Render the board as a FEN piece-placement field.
    pub fn to_placement(&self) -> String {
        let mut out = String::with_capacity(64);
        for (rank, row) in self.squares.iter().enumerate() {
            if rank > 0 {
                out.push('/');
            }
            let mut gap = 0u8;
            for cell in row {
                match cell {
                    Some(piece) => {
                        if gap > 0 {
                            out.push((b'0' + gap) as char);
                            gap = 0;
                        }
                        out.push(piece.kind.to_char(piece.color));
                    }
                    None => gap += 1,
                }
            }
            if gap > 0 {
                out.push((b'0' + gap) as char);
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// Queries and edits
// ---------------------------------------------------------------------------

impl Board {
    /// What piece (if any) is on a given square?
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize]
    }

    /// Place a piece, replacing whatever stood there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.rank() as usize][sq.file() as usize] = Some(piece);
    }

    /// Empty a square, returning its previous occupant.
    #[inline]
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.rank() as usize][sq.file() as usize].take()
    }

    /// Every occupied square with its piece, in rank-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Squares holding pieces of `color`, in rank-major order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, p)| p.color == color)
            .map(|(sq, _)| sq)
    }

    /// First king of `color` in scan order, if any.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Would moving the piece on `from` to `to` promote a pawn?
    pub fn is_promotion(&self, from: Square, to: Square) -> bool {
        self.piece_at(from).is_some_and(|p| {
            p.kind == PieceKind::Pawn && to.rank() == p.color.promotion_rank()
        })
    }

    /// A copy of this board with the piece on `from` relocated to `to`.
    ///
    /// Whatever stood on `to` is replaced. A pawn reaching its last rank
    /// becomes a queen of its colour. `self` is left untouched.
    pub fn after_move(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        let promotes = self.is_promotion(from, to);
        let moving = next.clear(from);
        next.squares[to.rank() as usize][to.file() as usize] = match moving {
            Some(piece) if promotes => Some(Piece::new(PieceKind::Queen, piece.color)),
            other => other,
        };
        next
    }

    /// White material minus Black material, in pawns.
    pub fn material_balance(&self) -> i32 {
        self.pieces()
            .map(|(_, p)| match p.color {
                Color::White => p.kind.value(),
                Color::Black => -p.kind.value(),
            })
            .sum()
    }

    /// Human-readable board with rank numbers and file letters.
    pub fn board_string(&self) -> String {
        let mut s = String::with_capacity(200);
        for (rank, row) in self.squares.iter().enumerate() {
            s.push_str(&format!("{} ", 8 - rank));
            for (file, cell) in row.iter().enumerate() {
                s.push(cell.map_or('.', |p| p.kind.to_char(p.color)));
                if file < 7 {
                    s.push(' ');
                }
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h\n");
        s
    }
}

/// Free-function form of [`Board::after_move`].
#[inline]
pub fn board_after_move(board: &Board, from: Square, to: Square) -> Board {
    board.after_move(from, to)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.board_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
