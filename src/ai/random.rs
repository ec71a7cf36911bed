use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub(crate) fn pick(&mut self, board: &Board) -> Option<usize> {
        choose_column(&mut self.rng, &board.valid_columns())
    }
}

/// Uniform pick from `columns`, `None` when empty.
pub(crate) fn choose_column(rng: &mut StdRng, columns: &[usize]) -> Option<usize> {
    if columns.is_empty() {
        return None;
    }
    Some(columns[rng.random_range(0..columns.len())])
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board, _player: Player) -> Option<usize> {
        self.pick(board)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
