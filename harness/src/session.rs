//! Interactive solve session.
//!
//! Prompts for a heuristic, solves, prints the path, then replays it one
//! move per line of input. Generic over the reader and writer so tests can
//! drive it with in-memory buffers.

use std::fmt;
use std::io::{self, BufRead, Write};

use octile_kernel::board::{Board, IllegalMove, Move};
use octile_kernel::heuristic::HeuristicKind;
use octile_search::error::{SearchError, SearchFailed};
use octile_search::policy::SearchPolicy;

use crate::worlds::eight_puzzle::EightPuzzle;

const CHOICE_PROMPT: &str = "Enter your choice (e.g., h1, h2, ...): ";

/// Typed failure for a session.
#[derive(Debug)]
pub enum SessionError {
    Io(io::Error),
    /// Replaying the solution hit an illegal move.
    IllegalMove(IllegalMove),
    /// The search could not be started.
    Search(SearchError),
    /// Input ended while a heuristic choice was still required.
    InputClosed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "session I/O failed: {e}"),
            Self::IllegalMove(e) => write!(f, "replay failed: {e}"),
            Self::Search(e) => write!(f, "search failed to start: {e}"),
            Self::InputClosed => f.write_str("input closed before a heuristic was chosen"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::IllegalMove(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::InputClosed => None,
        }
    }
}

impl From<io::Error> for SessionError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<IllegalMove> for SessionError {
    fn from(e: IllegalMove) -> Self {
        Self::IllegalMove(e)
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub heuristic: HeuristicKind,
    pub result: Result<Vec<Move>, SearchFailed>,
}

/// An interactive session over `input` and `output`.
pub struct Session<R, W> {
    input: R,
    output: W,
    policy: SearchPolicy,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            policy: SearchPolicy::default(),
        }
    }

    /// Use `policy` for the search.
    #[must_use]
    pub fn with_policy(mut self, policy: SearchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Give back the writer, e.g. to inspect a buffer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Ask until the user names one of `h1`..`h4`.
    ///
    /// # Errors
    ///
    /// [`SessionError::InputClosed`] if input ends first, or an I/O error.
    pub fn choose_heuristic(&mut self) -> Result<HeuristicKind, SessionError> {
        writeln!(self.output, "Please choose a heuristic:")?;
        for kind in HeuristicKind::ALL {
            writeln!(self.output, "{}: {}", kind.key(), kind.description())?;
        }
        loop {
            write!(self.output, "{CHOICE_PROMPT}")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Err(SessionError::InputClosed);
            };
            let choice = line.trim();
            if let Some(kind) = HeuristicKind::ALL.into_iter().find(|k| k.key() == choice) {
                return Ok(kind);
            }
            tracing::warn!(input = choice, "invalid heuristic choice");
            writeln!(self.output, "Invalid choice. Please choose again.")?;
        }
    }

    /// Print `start`, ask for a heuristic, solve and replay.
    ///
    /// # Errors
    ///
    /// See [`SessionError`]. A search that finds no path is not an error; it
    /// is reported in the returned outcome.
    pub fn run(&mut self, start: Board) -> Result<SessionOutcome, SessionError> {
        writeln!(self.output, "A random puzzle:")?;
        writeln!(self.output, "{start}")?;
        let heuristic = self.choose_heuristic()?;
        self.run_with(start, heuristic)
    }

    /// Solve `start` with `heuristic` and replay the path.
    ///
    /// # Errors
    ///
    /// See [`SessionError`].
    pub fn run_with(
        &mut self,
        start: Board,
        heuristic: HeuristicKind,
    ) -> Result<SessionOutcome, SessionError> {
        let result = EightPuzzle::new(start).solve(heuristic, &self.policy)?;
        match result.outcome {
            Ok(solution) => {
                let names: Vec<&str> = solution.actions.iter().map(|m| m.name()).collect();
                writeln!(
                    self.output,
                    "A* found a path of {} moves using {}: {:?}",
                    solution.depth(),
                    heuristic.description(),
                    names
                )?;
                self.replay(start, &solution.actions)?;
                Ok(SessionOutcome {
                    heuristic,
                    result: Ok(solution.actions),
                })
            }
            Err(failed) => {
                writeln!(
                    self.output,
                    "A* found no path using {}: {failed}",
                    heuristic.description()
                )?;
                Ok(SessionOutcome {
                    heuristic,
                    result: Err(failed),
                })
            }
        }
    }

    /// Apply `actions` one at a time, printing each board and waiting for a
    /// line of input. End of input does not stop the replay.
    ///
    /// # Errors
    ///
    /// [`SessionError::IllegalMove`] if an action does not apply, or an I/O
    /// error.
    pub fn replay(&mut self, start: Board, actions: &[Move]) -> Result<Board, SessionError> {
        let mut current = start;
        for (i, &action) in actions.iter().enumerate() {
            current = current.result(action)?;
            let step = i + 1;
            let plural = if step > 1 { "s" } else { "" };
            writeln!(self.output, "After {step} move{plural}: {action}")?;
            writeln!(self.output, "{current}")?;
            write!(self.output, "Press return for the next state..")?;
            self.output.flush()?;
            self.read_line()?;
            writeln!(self.output)?;
        }
        Ok(current)
    }

    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
