//! Octile Search: deterministic A* over any [`SearchProblem`].
//!
//! This crate is domain-agnostic. It does not depend on `octile_kernel`;
//! puzzle instances live in `octile_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! octile_kernel      octile_search
//! (board, heuristics) (contract, frontier, engine)
//!        ↖              ↗
//!         octile_harness
//!        (worlds, scenarios, benchmark, session)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`]: start state, goal test, successors, path cost
//! - [`Heuristic`]: non-negative cost-to-goal estimate (any `Fn(&S) -> f64`)
//! - [`BestFirstFrontier`]: min-priority queue with FIFO tie-breaking
//! - [`SearchPolicy`]: optional expansion budget
//! - [`search`] / [`astar`]: the engine entry points
//!
//! [`SearchProblem`]: contract::SearchProblem
//! [`Heuristic`]: contract::Heuristic
//! [`BestFirstFrontier`]: frontier::BestFirstFrontier
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`search`]: search::search
//! [`astar`]: search::astar

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod policy;
pub mod search;
