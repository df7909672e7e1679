//! Stateful game engine: turn tracking, move validation, check and
//! checkmate detection.
//!
//! `Game` is the only stateful, turn-aware component and the single
//! authority on "is this move allowed right now." It owns the live board;
//! every check/checkmate evaluation works on clones or read-only scans, so
//! simulated moves can never leak into live game state.
//!
//! There is no terminal state: checkmate is a queryable condition, not a
//! transition. The engine keeps accepting [`Game::make_move`] after mate;
//! callers consult [`Game::is_in_checkmate`] after each successful move and
//! stop driving the engine themselves.

use tracing::{debug, warn};

use crate::engine::board::Board;
use crate::engine::movegen;
use crate::engine::types::{ChessError, Color, Move, Piece, Square};

// =========================================================================
// Game
// =========================================================================

/// A chess game: the live board plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
}

impl Game {
    // -----------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------

    /// A new game: standard starting arrangement, white to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting(),
            turn: Color::White,
        }
    }

    /// A game over an arbitrary position: the entry point for test
    /// harnesses and analysis callers that build positions by hand.
    pub fn from_position(board: Board, turn: Color) -> Self {
        Game { board, turn }
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// The live board. Mutation happens only through [`Game::make_move`];
    /// references must not be assumed valid across it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    // -----------------------------------------------------------------
    // Move application
    // -----------------------------------------------------------------

    /// Validate and apply a move for the side to move.
    ///
    /// Fails with [`ChessError::EmptyOrigin`] when no piece sits on the
    /// origin, [`ChessError::WrongSide`] when the piece belongs to the
    /// opponent, and [`ChessError::IllegalMove`] when the destination is not
    /// in the piece's generated destination set. On success the origin is
    /// cleared, the destination overwritten (captures are implicit; the
    /// captured piece is discarded), and the turn flips. On every error the
    /// board and turn are left untouched.
    pub fn make_move(&mut self, mv: Move) -> Result<(), ChessError> {
        let piece = self
            .board
            .get(mv.from)?
            .ok_or(ChessError::EmptyOrigin(mv.from))?;

        if piece.color != self.turn {
            debug!(%mv, %piece, turn = %self.turn, "move rejected: wrong side");
            return Err(ChessError::WrongSide {
                square: mv.from,
                turn: self.turn,
            });
        }

        let destinations = movegen::generate_moves(&self.board, mv.from, piece);
        if !destinations.contains(&mv.to) {
            debug!(%mv, %piece, "move rejected: destination not reachable");
            return Err(ChessError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        apply_unchecked(&mut self.board, mv, piece);
        self.turn = !self.turn;
        debug!(%mv, %piece, next = %self.turn, "move applied");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Check / checkmate
    // -----------------------------------------------------------------

    /// Is `color`'s king currently attacked?
    ///
    /// A missing king is unreachable through this engine's own move path
    /// (no generated move ever lands on a king that is not there), but
    /// hand-built positions may lack one; that case reports `false` rather
    /// than failing.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.board.king_square(color) {
            Some(king) => movegen::is_square_attacked(&self.board, king, !color),
            None => {
                warn!(%color, "no king on the board; reporting not in check");
                false
            }
        }
    }

    /// Is `color` checkmated?
    ///
    /// False when not in check. Otherwise every candidate move of every one
    /// of `color`'s pieces is simulated on a cloned board (never the live
    /// one) and mate is reported only if each simulation leaves the king
    /// attacked. This is the standard "legal = pseudo-legal minus self-check"
    /// layering, done by simulation instead of a second move generator.
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        if !self.is_in_check(color) {
            return false;
        }

        for (from, piece) in self.board.pieces().filter(|&(_, p)| p.color == color) {
            for to in movegen::generate_moves(&self.board, from, piece) {
                let mut simulation = self.board.clone();
                apply_unchecked(&mut simulation, Move::new(from, to), piece);
                let escaped = match simulation.king_square(color) {
                    Some(king) => !movegen::is_square_attacked(&simulation, king, !color),
                    // A move by `color` never removes its own king.
                    None => false,
                };
                if escaped {
                    return false;
                }
            }
        }
        true
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Clear the origin and overwrite the destination. Both squares have already
/// been validated (the origin by `get`, the destination by the generator,
/// which only produces on-board squares).
fn apply_unchecked(board: &mut Board, mv: Move, piece: Piece) {
    board
        .set(mv.from, None)
        .expect("validated origin is on the board");
    board
        .set(mv.to, Some(piece))
        .expect("generated destination is on the board");
}

// =========================================================================
// Tests
// =========================================================================
