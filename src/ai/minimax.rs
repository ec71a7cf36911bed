use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;
use super::greedy::GreedyAgent;
use super::heuristic::{Heuristic, WindowHeuristic};
use super::random::choose_column;

/// Value of a position the maximizing side has already won.
pub const WIN_SCORE: i64 = 9_999_999;

/// Search depth used by the strongest difficulty tier.
pub const DEFAULT_DEPTH: usize = 4;

/// Outcome of one search call: the column to play (none at terminal or
/// depth-exhausted nodes) and the minimax value of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub value: i64,
}

impl SearchResult {
    fn leaf(value: i64) -> Self {
        SearchResult {
            column: None,
            value,
        }
    }
}

/// Depth-limited minimax with alpha-beta pruning, scored from `maximizer`'s
/// point of view. Holds no state between calls other than the node counter.
pub struct Search<'a> {
    maximizer: Player,
    heuristic: &'a dyn Heuristic,
    rng: &'a mut StdRng,
    nodes: u64,
}

impl<'a> Search<'a> {
    pub fn new(maximizer: Player, heuristic: &'a dyn Heuristic, rng: &'a mut StdRng) -> Self {
        Search {
            maximizer,
            heuristic,
            rng,
            nodes: 0,
        }
    }

    /// Nodes visited since this `Search` was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Top-level call: full window, maximizer to move.
    pub fn best_move(&mut self, board: &Board, depth: usize) -> SearchResult {
        self.search(board, depth, -WIN_SCORE, WIN_SCORE, true)
    }

    /// Search `board` to `depth` plies. Children are built on copies, so
    /// `board` is never modified.
    ///
    /// Ties keep the earliest column in ascending order: a candidate replaces
    /// the incumbent only when strictly better. The incumbent starts as a
    /// random open column so a legal move is always returned.
    pub fn search(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        self.nodes += 1;
        let minimizer = self.maximizer.other();

        if board.has_four_in_a_row(self.maximizer) {
            return SearchResult::leaf(WIN_SCORE);
        }
        if board.has_four_in_a_row(minimizer) {
            return SearchResult::leaf(-WIN_SCORE);
        }
        if board.is_full() {
            return SearchResult::leaf(0);
        }
        if depth == 0 {
            return SearchResult::leaf(self.heuristic.evaluate(board, self.maximizer));
        }

        let valid_columns = board.valid_columns();
        let Some(fallback) = choose_column(self.rng, &valid_columns) else {
            return SearchResult::leaf(0);
        };

        let (mover, mut value) = if maximizing {
            (self.maximizer, i64::MIN)
        } else {
            (minimizer, i64::MAX)
        };
        let mut column = fallback;

        for col in valid_columns {
            let mut child = board.clone();
            if child.drop_piece(col, mover).is_err() {
                continue;
            }
            let score = self.search(&child, depth - 1, alpha, beta, !maximizing).value;

            if maximizing {
                if score > value {
                    value = score;
                    column = col;
                }
                alpha = alpha.max(value);
            } else {
                if score < value {
                    value = score;
                    column = col;
                }
                beta = beta.min(value);
            }
            if alpha >= beta {
                break;
            }
        }

        SearchResult {
            column: Some(column),
            value,
        }
    }
}

/// Minimax agent with alpha-beta pruning. Plays for whichever player it is
/// asked to move for. Searches at least one ply.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
    rng: StdRng,
    last_nodes: u64,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_rng(depth, StdRng::from_os_rng())
    }

    pub fn with_seed(depth: usize, seed: u64) -> Self {
        Self::with_rng(depth, StdRng::seed_from_u64(seed))
    }

    fn with_rng(depth: usize, rng: StdRng) -> Self {
        MinimaxAgent {
            depth: depth.max(1),
            heuristic: Box::new(WindowHeuristic),
            rng,
            last_nodes: 0,
        }
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Nodes visited by the most recent search.
    pub fn last_nodes(&self) -> u64 {
        self.last_nodes
    }

    /// Run a top-level search for `player` on `board`. An immediate win is
    /// played directly: deeper forced wins score the same and would otherwise
    /// win the tie-break when they sit in an earlier column.
    pub fn analyse(&mut self, board: &Board, player: Player) -> SearchResult {
        if !board.has_four_in_a_row(player) && !board.has_four_in_a_row(player.other()) {
            if let Some(column) = GreedyAgent::winning_column(board, player) {
                self.last_nodes = 0;
                debug!("minimax for {player}: immediate win in column {column}");
                return SearchResult {
                    column: Some(column),
                    value: WIN_SCORE,
                };
            }
        }
        let mut search = Search::new(player, self.heuristic.as_ref(), &mut self.rng);
        let result = search.best_move(board, self.depth);
        self.last_nodes = search.nodes();
        debug!(
            "minimax depth {} for {player}: column {:?}, value {} ({} nodes)",
            self.depth, result.column, result.value, self.last_nodes
        );
        result
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board, player: Player) -> Option<usize> {
        self.analyse(board, player).column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
