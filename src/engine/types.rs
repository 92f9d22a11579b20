use std::fmt;

use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Index for array lookups: White=0, Black=1.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rank step a pawn of this colour advances by.
    ///
    /// White starts on the high ranks and walks toward rank 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Rank from which a pawn may advance two squares.
    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Rank on which a pawn of this colour promotes.
    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Parse from string (case-insensitive, "w"/"b" accepted).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "white" | "w" => Some(Color::White),
            "black" | "b" => Some(Color::Black),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

// ---------------------------------------------------------------------------
// PieceKind
// ---------------------------------------------------------------------------

/// The six piece kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All piece kinds in order.
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Material value in pawns. The king is weighted so that losing it
    /// dominates any other material count.
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 1000,
        }
    }

    /// Figurine used in move records. Pawns have none.
    pub fn glyph(self) -> &'static str {
        match self {
            PieceKind::Pawn => "",
            PieceKind::Knight => "♘",
            PieceKind::Bishop => "♗",
            PieceKind::Rook => "♖",
            PieceKind::Queen => "♕",
            PieceKind::King => "♔",
        }
    }

    /// Single uppercase letter for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parse a placement character; case selects the colour.
    pub fn from_char(c: char) -> Option<(Color, PieceKind)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((color, kind))
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn"),
            PieceKind::Knight => write!(f, "knight"),
            PieceKind::Bishop => write!(f, "bishop"),
            PieceKind::Rook => write!(f, "rook"),
            PieceKind::Queen => write!(f, "queen"),
            PieceKind::King => write!(f, "king"),
        }
    }
}

// ---------------------------------------------------------------------------
// Piece
// ---------------------------------------------------------------------------

/// A coloured piece standing on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Two-letter code such as "wP" or "bK".
    pub fn code(self) -> String {
        let c = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        format!("{c}{}", self.kind.to_char(Color::White))
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A square on the board as `(rank, file)`.
///
/// Rank 0 is Black's back rank (printed as "8"), file 0 is the a-file.
/// Both coordinates are always in `0..8`; the only constructors are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    pub const NUM: usize = 64;

    /// Build a square, or `None` if either coordinate is off the board.
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Step by `(d_rank, d_file)`, returning `None` when leaving the board.
    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares, rank 0 first, files a..h within each rank.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }

    /// Parse algebraic notation like "e2".
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = bytes[0].wrapping_sub(b'a');
        let number = bytes[1].wrapping_sub(b'0');
        if file < 8 && (1..=8).contains(&number) {
            Square::new(8 - number, file)
        } else {
            None
        }
    }

    /// File letter, 'a'..'h'.
    #[inline]
    pub fn file_char(self) -> char {
        (b'a' + self.file) as char
    }

    /// Printed rank number, 1..8.
    #[inline]
    pub fn rank_number(self) -> u8 {
        8 - self.rank
    }

    /// Convert to algebraic notation like "e2".
    pub fn to_algebraic(self) -> String {
        format!("{}{}", self.file_char(), self.rank_number())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_number())
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ---------------------------------------------------------------------------
// Terminal
// ---------------------------------------------------------------------------

/// Where a game stands. Anything other than `InProgress` is final.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Terminal {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl Terminal {
    pub fn as_str(&self) -> &str {
        match self {
            Terminal::InProgress => "in_progress",
            Terminal::Checkmate { .. } => "checkmate",
            Terminal::Stalemate => "stalemate",
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Terminal::InProgress)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Reasons a requested move is refused. None of them touch the game state.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is already over: {0}")]
    GameOver(Terminal),

    #[error("no piece on {0}")]
    NoPiece(Square),

    #[error("piece on {0} belongs to the other side")]
    NotYourPiece(Square),

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },
}

/// Errors from parsing a piece-placement string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected 8 ranks, found {0}")]
    RankCount(usize),

    #[error("rank {rank} describes {files} files")]
    RankLength { rank: usize, files: usize },

    #[error("invalid piece character: {0:?}")]
    InvalidPiece(char),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
