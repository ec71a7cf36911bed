//! Core game logic: gravity-drop board, win/draw detection, player pieces,
//! and the game state the turn driver owns.

mod board;
mod player;
mod rules;
mod state;

pub use board::{Board, Cell, Position, DEFAULT_COLS, DEFAULT_ROWS, MAX_DIMENSION};
pub use player::Player;
pub use rules::CONNECT;
pub use state::{GameOutcome, GameState};
