//! Automated players: the evaluator, the alpha-beta search, and the three
//! difficulty tiers built on them.

mod agent;
mod greedy;
mod heuristic;
mod minimax;
mod random;
mod selector;

pub use agent::Agent;
pub use greedy::GreedyAgent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, Search, SearchResult, DEFAULT_DEPTH, WIN_SCORE};
pub use random::RandomAgent;
pub use selector::{select_move, Difficulty};
