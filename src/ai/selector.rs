use crate::game::{Board, Player};

use super::agent::Agent;
use super::greedy::GreedyAgent;
use super::minimax::{MinimaxAgent, DEFAULT_DEPTH};
use super::random::RandomAgent;

/// Selection strategy of an automated participant.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform choice among open columns.
    Random,
    /// Win now, else block, else random.
    Heuristic,
    /// Alpha-beta minimax.
    Search,
}

impl Difficulty {
    /// Build the agent for this tier. `depth` only matters for `Search`;
    /// `seed` makes the agent's random choices reproducible.
    pub fn build_agent(self, depth: usize, seed: Option<u64>) -> Box<dyn Agent> {
        match (self, seed) {
            (Difficulty::Random, Some(seed)) => Box::new(RandomAgent::with_seed(seed)),
            (Difficulty::Random, None) => Box::new(RandomAgent::new()),
            (Difficulty::Heuristic, Some(seed)) => Box::new(GreedyAgent::with_seed(seed)),
            (Difficulty::Heuristic, None) => Box::new(GreedyAgent::new()),
            (Difficulty::Search, Some(seed)) => Box::new(MinimaxAgent::with_seed(depth, seed)),
            (Difficulty::Search, None) => Box::new(MinimaxAgent::new(depth)),
        }
    }
}

/// One-shot move selection with fresh randomness and the default search depth.
/// Returns `None` when the board has no open column.
pub fn select_move(board: &Board, player: Player, difficulty: Difficulty) -> Option<usize> {
    difficulty
        .build_agent(DEFAULT_DEPTH, None)
        .select_action(board, player)
}
