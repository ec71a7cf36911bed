use crate::game::{Board, Cell, Player, CONNECT};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i64;
}

pub const CENTER_WEIGHT: i64 = 3;
pub const FOUR_SCORE: i64 = 100;
pub const THREE_SCORE: i64 = 5;
pub const TWO_SCORE: i64 = 2;
pub const OPPONENT_THREE_PENALTY: i64 = -4;

/// Default heuristic: a center-column bonus plus a score for every window of
/// four on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    /// Score one window for `player`. The opponent check is independent of the
    /// `player` branches.
    pub fn evaluate_window(window: &[Cell; CONNECT], player: Player) -> i64 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();
        let own = window.iter().filter(|&&c| c == own_cell).count();
        let opp = window.iter().filter(|&&c| c == opp_cell).count();
        let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

        let mut score = 0;
        if own == 4 {
            score += FOUR_SCORE;
        } else if own == 3 && empty == 1 {
            score += THREE_SCORE;
        } else if own == 2 && empty == 2 {
            score += TWO_SCORE;
        }
        if opp == 3 && empty == 1 {
            score += OPPONENT_THREE_PENALTY;
        }
        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i64 {
        let own_cell = player.to_cell();

        // Center column bonus
        let center = board.cols() / 2;
        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count() as i64;

        let windows: i64 = board
            .windows()
            .map(|window| Self::evaluate_window(&window, player))
            .sum();

        CENTER_WEIGHT * center_count + windows
    }
}
