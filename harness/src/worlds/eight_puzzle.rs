//! `EightPuzzle`: the sliding 8-puzzle as a [`SearchProblem`].
//!
//! Successors follow [`Board::legal_moves`] order (up, down, left, right),
//! each with unit cost. A blank move never maps a board to itself, so there
//! are no self-loops.

use octile_kernel::board::{Board, Move};
use octile_kernel::heuristic::HeuristicKind;
use octile_search::contract::{SearchProblem, Successor};
use octile_search::error::SearchError;
use octile_search::policy::SearchPolicy;
use octile_search::search::{search, SearchResult};

/// Uniform step cost of a blank move.
pub const STEP_COST: f64 = 1.0;

/// An 8-puzzle instance rooted at a start board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightPuzzle {
    start: Board,
}

impl EightPuzzle {
    /// Wrap a start board.
    #[must_use]
    pub const fn new(start: Board) -> Self {
        Self { start }
    }

    /// The start board.
    #[must_use]
    pub const fn start_board(&self) -> Board {
        self.start
    }

    /// Search this instance with one of the enumerated heuristics.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] if `policy` fails pre-flight validation.
    pub fn solve(
        &self,
        heuristic: HeuristicKind,
        policy: &SearchPolicy,
    ) -> Result<SearchResult<Move>, SearchError> {
        search(self, &heuristic.as_fn(), policy)
    }
}

impl SearchProblem for EightPuzzle {
    type State = Board;
    type Action = Move;

    fn start(&self) -> Board {
        self.start
    }

    fn is_goal(&self, state: &Board) -> bool {
        state.is_goal()
    }

    fn successors(&self, state: &Board) -> Vec<Successor<Board, Move>> {
        state
            .legal_moves()
            .into_iter()
            .map(|action| Successor {
                state: state
                    .result(action)
                    .expect("legal_moves yields only legal moves"),
                action,
                step_cost: STEP_COST,
            })
            .collect()
    }

    #[allow(clippy::cast_precision_loss)]
    fn path_cost(&self, actions: &[Move]) -> f64 {
        actions.len() as f64 * STEP_COST
    }
}
