//! Core value types: colors, piece kinds, squares, moves, and errors.
//!
//! Everything here is a small `Copy` value with no identity: two pieces of
//! the same color and kind are interchangeable, and a `Move` is just a pair
//! of squares. Legality is never a property of these values alone; it is
//! decided by the move generator and the game engine against a concrete
//! board and turn.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The two sides in a chess game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Self;

    /// The opposing side.
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
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
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

    /// Single letter for board display: uppercase for white, lowercase for black.
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

/// A piece: a color and a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// A board coordinate: `(rank, file)`, each valid in `0..8`.
///
/// Rank 0 is the top of the board (black's back rank), rank 7 the bottom
/// (white's back rank); file 0 is the a-file. Coordinates are signed so that
/// shifted candidates produced during move generation, negative ones
/// included, are representable and can be rejected explicitly rather than
/// silently clamped. [`Square::is_on_board`] reports validity; the board
/// access methods reject anything outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Square { rank, file }
    }

    /// Both coordinates inside `0..8`?
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    /// The square shifted by `(d_rank, d_file)`. May land off the board.
    #[inline]
    pub const fn offset(self, d_rank: i8, d_file: i8) -> Self {
        Square {
            rank: self.rank + d_rank,
            file: self.file + d_file,
        }
    }
}

impl fmt::Display for Square {
    /// Algebraic name (`e2`) for on-board squares, raw coordinates otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = (b'a' + self.file as u8) as char;
            let rank = (b'8' - self.rank as u8) as char;
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.rank, self.file)
        }
    }
}

// ---------------------------------------------------------------------------
// Move
// ---------------------------------------------------------------------------

/// A proposed move: origin and destination square.
///
/// Carries no piece identity and no legality; both are resolved by the game
/// engine against the board it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

// ---------------------------------------------------------------------------
// ChessError
// ---------------------------------------------------------------------------

/// Domain errors for the rules engine.
///
/// All variants are recoverable caller-input conditions; the engine's state
/// is unchanged whenever one is returned.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    #[error("coordinates ({rank}, {file}) are outside the board")]
    OutOfBounds { rank: i8, file: i8 },

    #[error("no piece on {0}")]
    EmptyOrigin(Square),

    #[error("the piece on {square} belongs to the opponent; it is {turn}'s turn")]
    WrongSide { square: Square, turn: Color },

    #[error("illegal move: {from} -> {to}")]
    IllegalMove { from: Square, to: Square },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_toggle() {
        assert_eq!(!Color::White, Color::Black);
        assert_eq!(!Color::Black, Color::White);
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::White.to_string(), "white");
        assert_eq!(Color::Black.to_string(), "black");
    }

    #[test]
    fn piece_kind_chars() {
        assert_eq!(PieceKind::Knight.to_char(Color::White), 'N');
        assert_eq!(PieceKind::Knight.to_char(Color::Black), 'n');
        for kind in PieceKind::ALL {
            assert!(kind.to_char(Color::White).is_ascii_uppercase());
            assert!(kind.to_char(Color::Black).is_ascii_lowercase());
        }
    }

    #[test]
    fn piece_display() {
        let p = Piece::new(Color::Black, PieceKind::Queen);
        assert_eq!(p.to_string(), "black queen");
    }

    #[test]
    fn pieces_compare_by_value() {
        let a = Piece::new(Color::White, PieceKind::Rook);
        let b = Piece::new(Color::White, PieceKind::Rook);
        assert_eq!(a, b);
        assert_ne!(a, Piece::new(Color::Black, PieceKind::Rook));
        assert_ne!(a, Piece::new(Color::White, PieceKind::Queen));
    }

    #[test]
    fn square_bounds() {
        assert!(Square::new(0, 0).is_on_board());
        assert!(Square::new(7, 7).is_on_board());
        assert!(!Square::new(-1, 0).is_on_board());
        assert!(!Square::new(0, 8).is_on_board());
        assert!(!Square::new(8, 3).is_on_board());
        assert!(!Square::new(2, -3).is_on_board());
    }

    #[test]
    fn square_offset() {
        let sq = Square::new(6, 4);
        assert_eq!(sq.offset(-2, 0), Square::new(4, 4));
        assert_eq!(sq.offset(1, -1), Square::new(7, 3));
        assert!(!sq.offset(2, 0).is_on_board());
    }

    #[test]
    fn square_display_algebraic() {
        // Rank index 6 is the second rank from the bottom, i.e. "2".
        assert_eq!(Square::new(6, 4).to_string(), "e2");
        assert_eq!(Square::new(0, 0).to_string(), "a8");
        assert_eq!(Square::new(7, 7).to_string(), "h1");
    }

    #[test]
    fn square_display_off_board() {
        assert_eq!(Square::new(-1, 9).to_string(), "(-1, 9)");
    }

    #[test]
    fn move_display() {
        let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn error_messages() {
        let err = ChessError::OutOfBounds { rank: 9, file: -1 };
        assert_eq!(err.to_string(), "coordinates (9, -1) are outside the board");

        let err = ChessError::IllegalMove {
            from: Square::new(6, 4),
            to: Square::new(3, 4),
        };
        assert_eq!(err.to_string(), "illegal move: e2 -> e5");
    }

    #[test]
    fn square_serde_round_trip() {
        let sq = Square::new(4, 2);
        let json = serde_json::to_string(&sq).unwrap();
        assert_eq!(serde_json::from_str::<Square>(&json).unwrap(), sq);
    }

    #[test]
    fn piece_serde_uses_lowercase_names() {
        let p = Piece::new(Color::White, PieceKind::Knight);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"color":"white","kind":"knight"}"#);
    }
}
