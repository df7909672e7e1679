//! Board model: an 8×8 grid of optional pieces.
//!
//! `Board` is a dumb container: it owns piece placement and validates
//! coordinates, nothing more. Chess semantics (whose turn it is, which moves
//! are allowed) live in [`crate::engine::movegen`] and
//! [`crate::engine::game`]. Cloning produces an independent deep copy; no two
//! boards ever share storage, which is what makes simulation against a clone
//! safe.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::types::{ChessError, Color, Piece, PieceKind, Square};

/// Board width and height in squares.
pub const BOARD_SIZE: usize = 8;

/// Back-rank piece kinds from the a-file to the h-file, for both colors.
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

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// 8×8 grid of optional pieces, indexed `[rank][file]` with rank 0 at the
/// top (black's back rank) and white at the bottom.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// An empty board. Useful for building test positions square by square.
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard starting arrangement: back ranks of rook, knight, bishop,
    /// queen, king, bishop, knight, rook; pawns on the adjacent ranks; black
    /// on ranks 0–1, white on ranks 6–7.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Some(Piece::new(Color::Black, kind));
            board.squares[1][file] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][file] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][file] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// The content of `sq`: a piece or `None` for an empty square.
    ///
    /// Rejects out-of-range coordinates before touching storage.
    pub fn get(&self, sq: Square) -> Result<Option<Piece>, ChessError> {
        let (rank, file) = Self::index(sq)?;
        Ok(self.squares[rank][file])
    }

    /// Overwrite the content of `sq`, placing a piece or clearing the square.
    ///
    /// Rejects out-of-range coordinates before touching storage.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) -> Result<(), ChessError> {
        let (rank, file) = Self::index(sq)?;
        self.squares[rank][file] = piece;
        Ok(())
    }

    /// Infallible read: the piece on `sq`, or `None` when the square is empty
    /// *or* off the board. The move generator's occupancy probe; callers that
    /// need to distinguish the two cases use [`Board::get`].
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if sq.is_on_board() {
            self.squares[sq.rank as usize][sq.file as usize]
        } else {
            None
        }
    }

    fn index(sq: Square) -> Result<(usize, usize), ChessError> {
        if sq.is_on_board() {
            Ok((sq.rank as usize, sq.file as usize))
        } else {
            Err(ChessError::OutOfBounds {
                rank: sq.rank,
                file: sq.file,
            })
        }
    }

    // -----------------------------------------------------------------------
    // Scans
    // -----------------------------------------------------------------------

    /// Iterate over every occupied square as `(Square, Piece)`, rank by rank.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, piece)| {
                piece.map(|p| (Square::new(rank as i8, file as i8), p))
            })
        })
    }

    /// The square holding `color`'s king, or `None` if absent.
    ///
    /// Legal play never removes a king, but positions built by hand may lack
    /// one; callers treat that case defensively rather than panicking.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, p)| p.color == color && p.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

// ---------------------------------------------------------------------------
// Display (8×8 text grid, rank 8 at the top)
// ---------------------------------------------------------------------------

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, row) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - rank)?;
            for (file, piece) in row.iter().enumerate() {
                let ch = match piece {
                    Some(p) => p.kind.to_char(p.color),
                    None => '.',
                };
                write!(f, "{ch}")?;
                if file < BOARD_SIZE - 1 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_has_32_pieces_16_per_color() {
        let board = Board::starting();
        assert_eq!(board.pieces().count(), 32);
        for color in [Color::White, Color::Black] {
            assert_eq!(board.pieces().filter(|&(_, p)| p.color == color).count(), 16);
        }
    }

    #[test]
    fn starting_back_ranks() {
        let board = Board::starting();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as i8;
            assert_eq!(
                board.get(Square::new(0, file)).unwrap(),
                Some(Piece::new(Color::Black, kind)),
                "black back rank, file {file}"
            );
            assert_eq!(
                board.get(Square::new(7, file)).unwrap(),
                Some(Piece::new(Color::White, kind)),
                "white back rank, file {file}"
            );
        }
    }

    #[test]
    fn starting_pawn_ranks() {
        let board = Board::starting();
        for file in 0..8 {
            assert_eq!(
                board.get(Square::new(1, file)).unwrap(),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
            assert_eq!(
                board.get(Square::new(6, file)).unwrap(),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
        }
    }

    #[test]
    fn starting_middle_is_empty() {
        let board = Board::starting();
        for rank in 2..6 {
            for file in 0..8 {
                assert_eq!(board.get(Square::new(rank, file)).unwrap(), None);
            }
        }
    }

    #[test]
    fn get_out_of_bounds() {
        let board = Board::starting();
        for sq in [
            Square::new(-1, 0),
            Square::new(0, -1),
            Square::new(8, 0),
            Square::new(0, 8),
            Square::new(-3, 11),
        ] {
            assert!(matches!(
                board.get(sq),
                Err(ChessError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn set_out_of_bounds_leaves_board_untouched() {
        let mut board = Board::starting();
        let before = board.clone();
        let err = board.set(Square::new(8, 8), Some(Piece::new(Color::White, PieceKind::Queen)));
        assert!(matches!(err, Err(ChessError::OutOfBounds { .. })));
        assert_eq!(board, before);
    }

    #[test]
    fn set_places_and_clears() {
        let mut board = Board::empty();
        let sq = Square::new(4, 4);
        let knight = Piece::new(Color::White, PieceKind::Knight);

        board.set(sq, Some(knight)).unwrap();
        assert_eq!(board.get(sq).unwrap(), Some(knight));

        board.set(sq, None).unwrap();
        assert_eq!(board.get(sq).unwrap(), None);
    }

    #[test]
    fn set_overwrites_occupied_square() {
        let mut board = Board::empty();
        let sq = Square::new(3, 3);
        board
            .set(sq, Some(Piece::new(Color::Black, PieceKind::Pawn)))
            .unwrap();
        board
            .set(sq, Some(Piece::new(Color::White, PieceKind::Queen)))
            .unwrap();
        assert_eq!(
            board.get(sq).unwrap(),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn clone_is_independent() {
        let original = Board::starting();
        let mut copy = original.clone();
        copy.set(Square::new(6, 4), None).unwrap();
        copy.set(
            Square::new(4, 4),
            Some(Piece::new(Color::White, PieceKind::Pawn)),
        )
        .unwrap();

        // The original still has its pawn on e2 and nothing on e4.
        assert_eq!(
            original.get(Square::new(6, 4)).unwrap(),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(original.get(Square::new(4, 4)).unwrap(), None);
    }

    #[test]
    fn piece_at_off_board_is_none() {
        let board = Board::starting();
        assert_eq!(board.piece_at(Square::new(-1, 4)), None);
        assert_eq!(board.piece_at(Square::new(4, 9)), None);
        assert_eq!(
            board.piece_at(Square::new(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
    }

    #[test]
    fn king_square_starting() {
        let board = Board::starting();
        assert_eq!(board.king_square(Color::White), Some(Square::new(7, 4)));
        assert_eq!(board.king_square(Color::Black), Some(Square::new(0, 4)));
    }

    #[test]
    fn king_square_absent() {
        let board = Board::empty();
        assert_eq!(board.king_square(Color::White), None);
    }

    #[test]
    fn display_starting() {
        let board = Board::starting();
        let s = board.to_string();
        assert!(s.starts_with("8 r n b q k b n r"));
        assert!(s.contains("1 R N B Q K B N R"));
        assert!(s.ends_with("a b c d e f g h"));
    }

    #[test]
    fn serde_round_trip() {
        let board = Board::starting();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
