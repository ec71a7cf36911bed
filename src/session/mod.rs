//! Turn driver: a game plus the participant bound to each piece.

mod stats;

pub use stats::MatchStats;

use log::{debug, info};

use crate::ai::{Agent, Difficulty};
use crate::config::AppConfig;
use crate::error::{BoardError, MoveError, SessionError};
use crate::game::{GameOutcome, GameState, Player, Position};

/// Who controls a piece.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Human,
    Random,
    Heuristic,
    Search,
}

impl Role {
    /// The selection strategy for automated roles; `None` for humans.
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            Role::Human => None,
            Role::Random => Some(Difficulty::Random),
            Role::Heuristic => Some(Difficulty::Heuristic),
            Role::Search => Some(Difficulty::Search),
        }
    }

    pub fn is_human(self) -> bool {
        self == Role::Human
    }
}

/// A committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub position: Position,
    pub outcome: Option<GameOutcome>,
}

pub struct Session {
    state: GameState,
    roles: [Role; 2],
    agents: [Option<Box<dyn Agent>>; 2],
}

impl Session {
    /// Set up a game from configuration. Each automated player gets its own
    /// agent; with a configured seed the two agents draw from distinct seeds.
    pub fn new(config: &AppConfig) -> Result<Self, BoardError> {
        let state = GameState::new(config.board.rows, config.board.cols, config.players.first)?;
        let roles = [config.players.one, config.players.two];
        let agents = [Player::One, Player::Two].map(|player| {
            let seed = config
                .seed
                .map(|seed| seed.wrapping_add(player.index() as u64));
            roles[player.index()]
                .difficulty()
                .map(|difficulty| difficulty.build_agent(config.search.depth, seed))
        });
        Ok(Session {
            state,
            roles,
            agents,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn role(&self, player: Player) -> Role {
        self.roles[player.index()]
    }

    /// Display name of the participant playing `player`.
    pub fn participant_name(&self, player: Player) -> &str {
        match &self.agents[player.index()] {
            Some(agent) => agent.name(),
            None => "Human",
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.role(self.state.current_player()).is_human()
    }

    /// Commit a human move in `column`.
    pub fn play_human(&mut self, column: usize) -> Result<Turn, SessionError> {
        let player = self.state.current_player();
        if !self.role(player).is_human() {
            return Err(SessionError::NotHumanTurn { player });
        }
        self.commit(player, column)
    }

    /// Ask the automated participant to move, then commit its choice.
    pub fn play_automated(&mut self) -> Result<Turn, SessionError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver.into());
        }
        let player = self.state.current_player();
        let agent = self.agents[player.index()]
            .as_mut()
            .ok_or(SessionError::NotAutomatedTurn { player })?;
        let column = agent
            .select_action(self.state.board(), player)
            .ok_or(SessionError::NoValidMove { player })?;
        debug!("{} ({player}) picked column {column}", agent.name());
        self.commit(player, column)
    }

    /// Play automated turns until the game ends or a human has to move.
    pub fn play_until_human(&mut self) -> Result<Vec<Turn>, SessionError> {
        let mut turns = Vec::new();
        while !self.state.is_terminal() && !self.is_human_turn() {
            turns.push(self.play_automated()?);
        }
        Ok(turns)
    }

    /// Play a game between two automated participants to the end.
    pub fn play_out(&mut self) -> Result<GameOutcome, SessionError> {
        loop {
            if let Some(outcome) = self.state.outcome() {
                return Ok(outcome);
            }
            self.play_automated()?;
        }
    }

    /// Start a new game with the same participants.
    pub fn reset(&mut self) {
        self.state.reset();
        info!("new game, {} to move", self.state.current_player());
    }

    fn commit(&mut self, player: Player, column: usize) -> Result<Turn, SessionError> {
        let position = self.state.apply_move_mut(column)?;
        let outcome = self.state.outcome();
        match outcome {
            Some(GameOutcome::Winner(winner)) => info!(
                "{winner} ({}) wins after {} moves",
                self.participant_name(winner),
                self.state.history().len()
            ),
            Some(GameOutcome::Draw) => info!("draw after {} moves", self.state.history().len()),
            None => {}
        }
        Ok(Turn {
            player,
            position,
            outcome,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BoardConfig, PlayersConfig, SearchConfig};

    fn config(one: Role, two: Role, first: Player) -> AppConfig {
        AppConfig {
            board: BoardConfig { rows: 6, cols: 7 },
            players: PlayersConfig { one, two, first },
            search: SearchConfig { depth: 3 },
            seed: Some(11),
        }
    }

    #[test]
    fn human_and_automated_turns_alternate() {
        let mut session = Session::new(&config(Role::Human, Role::Search, Player::One)).unwrap();
        assert!(session.is_human_turn());
        assert_eq!(
            session.play_automated(),
            Err(SessionError::NotAutomatedTurn { player: Player::One })
        );

        let turn = session.play_human(3).unwrap();
        assert_eq!(turn.player, Player::One);
        assert_eq!(turn.position, Position { row: 5, col: 3 });
        assert!(!session.is_human_turn());
        assert_eq!(
            session.play_human(3),
            Err(SessionError::NotHumanTurn { player: Player::Two })
        );

        let turns = session.play_until_human().unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].player, Player::Two);
        assert!(session.is_human_turn());
    }

    #[test]
    fn rejected_human_move_keeps_turn() {
        let mut session = Session::new(&config(Role::Human, Role::Human, Player::One)).unwrap();
        assert_eq!(
            session.play_human(7),
            Err(SessionError::Move(MoveError::InvalidColumn { column: 7, cols: 7 }))
        );
        for _ in 0..6 {
            session.play_human(0).unwrap();
        }
        assert_eq!(
            session.play_human(0),
            Err(SessionError::Move(MoveError::ColumnFull { column: 0 }))
        );
        assert_eq!(session.state().current_player(), Player::One);
    }

    #[test]
    fn automated_player_can_move_first() {
        let mut session = Session::new(&config(Role::Human, Role::Heuristic, Player::Two)).unwrap();
        assert_eq!(session.state().current_player(), Player::Two);
        let turns = session.play_until_human().unwrap();
        assert_eq!(turns.len(), 1);
        assert_eq!(turns[0].player, Player::Two);
        assert_eq!(session.state().board().count(Player::Two), 1);
    }

    #[test]
    fn automated_game_plays_out_and_resets() {
        let mut session = Session::new(&config(Role::Random, Role::Search, Player::One)).unwrap();
        let outcome = session.play_out().unwrap();
        assert!(session.state().is_terminal());
        assert_eq!(session.state().outcome(), Some(outcome));
        assert_eq!(session.play_automated(), Err(SessionError::Move(MoveError::GameOver)));

        session.reset();
        assert!(!session.state().is_terminal());
        assert!(session.state().history().is_empty());
        assert_eq!(session.state().current_player(), Player::One);
    }

    #[test]
    fn play_out_stops_at_human() {
        let mut session = Session::new(&config(Role::Random, Role::Human, Player::One)).unwrap();
        assert_eq!(
            session.play_out(),
            Err(SessionError::NotAutomatedTurn { player: Player::Two })
        );
        assert_eq!(session.state().history().len(), 1);
    }

    #[test]
    fn zero_search_depth_still_produces_moves() {
        let mut cfg = config(Role::Search, Role::Search, Player::One);
        cfg.search.depth = 0;
        let mut session = Session::new(&cfg).unwrap();
        let turn = session.play_automated().unwrap();
        assert_eq!(turn.player, Player::One);
        assert!(session.play_out().is_ok());
    }

    #[test]
    fn oversized_board_is_rejected() {
        let mut cfg = config(Role::Human, Role::Search, Player::One);
        cfg.board.cols = usize::MAX;
        assert!(matches!(Session::new(&cfg), Err(BoardError::TooLarge { .. })));
    }

    #[test]
    fn participant_names() {
        let session = Session::new(&config(Role::Human, Role::Heuristic, Player::One)).unwrap();
        assert_eq!(session.participant_name(Player::One), "Human");
        assert_eq!(session.participant_name(Player::Two), "Greedy");
        assert_eq!(session.role(Player::Two), Role::Heuristic);
        assert_eq!(Role::Search.difficulty(), Some(Difficulty::Search));
        assert_eq!(Role::Human.difficulty(), None);
    }
}
