//! Octile Kernel: the 8-puzzle model and its heuristics.
//!
//! # API Surface
//!
//! - [`board::Board`] -- immutable puzzle state with typed, atomic transitions
//! - [`heuristic`] -- the four admissible evaluators and [`heuristic::HeuristicKind`]
//! - [`digest`] -- domain-separated SHA-256 content hashes
//!
//! # Module Dependency Direction
//!
//! `board` ← `heuristic`; `digest` depends on nothing internal.
//!
//! The kernel knows nothing about search. `octile_search` is generic and the
//! harness wires the two together.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod digest;
pub mod heuristic;
