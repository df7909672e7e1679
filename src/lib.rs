//! A chess rules engine.
//!
//! This crate is the single source of truth for "is this move allowed" and
//! "is the game over," independent of how a move was proposed: a UI drag, a
//! network message, an AI search, or a test harness. It contains no
//! rendering, input handling, timers, networking, or persistence; callers
//! own all of that.
//!
//! Three layers, each depending only on the one before it:
//!
//! - [`engine::board`]: the 8×8 grid of optional pieces. Pure data.
//! - [`engine::movegen`]: pseudo-legal destination generation. Pure
//!   functions over a board.
//! - [`engine::game`]: turn tracking, move validation and application,
//!   check and checkmate queries.
//!
//! ```
//! use chess_rules::engine::{Color, Game, Move, Square};
//!
//! let mut game = Game::new();
//! // White pushes the e-pawn two squares.
//! game.make_move(Move::new(Square::new(6, 4), Square::new(4, 4)))?;
//! assert_eq!(game.turn(), Color::Black);
//! assert!(!game.is_in_checkmate(Color::Black));
//! # Ok::<(), chess_rules::engine::ChessError>(())
//! ```

pub mod engine;

pub use engine::{Board, ChessError, Color, Game, Move, Piece, PieceKind, Square};
