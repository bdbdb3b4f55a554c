//! Search node and frontier ordering key.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

/// A node owned by the frontier until it is popped.
///
/// The path to the node is not stored here: `node_id` indexes the engine's
/// path arena, which holds `(parent, action)` links only.
#[derive(Debug, Clone)]
pub struct SearchNode<S> {
    /// Index into the engine's path arena.
    pub node_id: usize,
    /// The state at this node.
    pub state: S,
    /// Accumulated path cost from the start.
    pub g_cost: f64,
    /// Heuristic estimate at `state`.
    pub h_cost: f64,
    /// Number of actions from the start (root = 0).
    pub depth: u32,
}

impl<S> SearchNode<S> {
    /// `f = g + h`, the A* priority.
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

/// The frontier ordering key: `(priority, insertion_order)`.
///
/// Lower priority first; equal priorities pop in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: OrderedFloat<f64>,
    pub insertion_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.insertion_order.cmp(&other.insertion_order))
    }
}
