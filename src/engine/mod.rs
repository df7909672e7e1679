pub mod board;
pub mod game;
pub mod movegen;
pub mod types;

pub use board::{Board, BOARD_SIZE};
pub use game::Game;
pub use movegen::{generate_moves, is_square_attacked};
pub use types::*;
