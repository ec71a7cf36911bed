use log::debug;

use crate::game::{Board, Player};

use super::agent::Agent;
use super::random::RandomAgent;

/// One-ply agent: take an immediate win, otherwise block the opponent's
/// immediate win, otherwise play randomly.
pub struct GreedyAgent {
    fallback: RandomAgent,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            fallback: RandomAgent::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        GreedyAgent {
            fallback: RandomAgent::with_seed(seed),
        }
    }

    /// First open column (ascending) where dropping `piece` completes four.
    /// Each probe works on a copy of `board`.
    pub fn winning_column(board: &Board, piece: Player) -> Option<usize> {
        board.valid_columns().into_iter().find(|&col| {
            let mut probe = board.clone();
            probe
                .drop_piece(col, piece)
                .is_ok_and(|pos| probe.wins_from(pos.row, pos.col, piece))
        })
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, board: &Board, player: Player) -> Option<usize> {
        if let Some(col) = Self::winning_column(board, player) {
            debug!("greedy: {player} wins in column {col}");
            return Some(col);
        }
        if let Some(col) = Self::winning_column(board, player.other()) {
            debug!("greedy: {player} blocks column {col}");
            return Some(col);
        }
        self.fallback.pick(board)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}
