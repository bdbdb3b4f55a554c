//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! without a solution (exhaustion, budget, contract violations) are
//! [`SearchFailed`] values carried by [`crate::search::SearchResult`] and
//! never panics.

use std::fmt;

/// Typed failure for pre-flight search validation.
///
/// Returned before the engine takes any step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy cannot drive a search (e.g. a zero expansion budget).
    InvalidPolicy { detail: String },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Why a search ended without a solution.
///
/// A normal outcome: callers decide whether it is an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchFailed {
    /// The reachable state space was exhausted without meeting the goal.
    Exhausted,
    /// The expansion budget ran out first.
    BudgetExhausted { limit: u64 },
    /// The problem or heuristic broke its contract (negative or NaN estimate,
    /// negative or non-finite step cost).
    ContractViolation { detail: String },
}

impl fmt::Display for SearchFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => f.write_str("no path to the goal: search space exhausted"),
            Self::BudgetExhausted { limit } => {
                write!(f, "expansion budget of {limit} exhausted before reaching the goal")
            }
            Self::ContractViolation { detail } => write!(f, "search contract violated: {detail}"),
        }
    }
}

impl std::error::Error for SearchFailed {}

/// Popping from an empty frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontierError {
    Empty,
}

impl fmt::Display for FrontierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("pop from empty frontier"),
        }
    }
}

impl std::error::Error for FrontierError {}
