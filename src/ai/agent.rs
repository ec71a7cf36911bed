use crate::game::{Board, Player};

/// Universal interface for all automated players.
pub trait Agent {
    /// Choose a column for `player` to drop into. Returns `None` only when the
    /// board has no open column. Implementations must not assume they may
    /// keep or mutate `board`.
    fn select_action(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
