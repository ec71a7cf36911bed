use crate::game::{GameOutcome, Player};

/// Tally of finished games between the same two participants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    wins: [usize; 2],
    draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameOutcome, game_length: usize) {
        match outcome {
            GameOutcome::Winner(player) => self.wins[player.index()] += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_moves += game_length;
    }

    pub fn games(&self) -> usize {
        self.wins[0] + self.wins[1] + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        self.wins[player.index()]
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Fraction of games won by `player`; 0 before any game.
    pub fn win_rate(&self, player: Player) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(player) as f64 / games as f64
    }

    pub fn average_length(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f64 / games as f64
    }
}
