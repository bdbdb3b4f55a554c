//! Search problem instances.

pub mod eight_puzzle;
pub mod weighted_graph;
