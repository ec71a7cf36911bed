//! # Connect Four Minimax
//!
//! The decision-making core of a gravity-drop four-in-a-row game, with three
//! automated opponents of increasing strength.
//!
//! ## Modules
//!
//! - [`game`]: Board, gravity drops, win/draw detection, game state
//! - [`ai`]: Window evaluator, alpha-beta minimax, random/greedy/search tiers
//! - [`session`]: Turn driver binding a human or an AI tier to each piece
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
