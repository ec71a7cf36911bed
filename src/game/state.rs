use crate::error::{BoardError, MoveError};

use super::board::{Board, Position};
use super::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Board plus the side to move. Owned by whoever drives the turns; search
/// code only ever sees `&Board` and works on its own copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    outcome: Option<GameOutcome>,
    history: Vec<Position>,
}

impl GameState {
    /// Create an empty game on a rows x cols board.
    pub fn new(rows: usize, cols: usize, first_player: Player) -> Result<Self, BoardError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            first_player,
            current_player: first_player,
            outcome: None,
            history: Vec::new(),
        })
    }

    /// Create initial game state on the standard board, Player One to move.
    pub fn initial() -> Self {
        GameState {
            board: Board::standard(),
            first_player: Player::One,
            current_player: Player::One,
            outcome: None,
            history: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Cells filled so far, in play order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move in place. The win check is bound to the piece that was just
    /// placed, not to whatever `current_player` becomes afterwards.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Position, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mover = self.current_player;
        let pos = self.board.drop_piece(column, mover)?;
        self.history.push(pos);

        if self.board.wins_from(pos.row, pos.col, mover) {
            self.outcome = Some(GameOutcome::Winner(mover));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = mover.other();
        }

        Ok(pos)
    }

    /// Clear the board and hand the move back to the first player.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = self.first_player;
        self.outcome = None;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
