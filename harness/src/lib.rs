//! Octile Harness: problem instances and everything around a search call.
//!
//! The harness does NOT implement search logic; it delegates to
//! `octile_search`. Worlds provide domain data only. The harness owns
//! scenarios, benchmarking, the interactive session and configuration.
//!
//! # Crate dependency graph
//!
//! ```text
//! octile_kernel  ←  octile_harness  →  octile_search
//! (board, moves,    (worlds, scenarios,  (A*, frontier,
//!  heuristics)       benchmark, session)  closed set)
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod benchmark;
pub mod config;
pub mod scenario;
pub mod session;
pub mod worlds;
