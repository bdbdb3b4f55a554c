//! Search problem contract.

use std::hash::Hash;

/// One transition out of a state.
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A> {
    /// The state reached.
    pub state: S,
    /// The action that reaches it.
    pub action: A,
    /// Cost of this single step. Must be finite and non-negative.
    pub step_cost: f64,
}

/// Trait for domains that can be searched.
///
/// # Contract
///
/// - `successors` enumerates every legal transition exactly once, never
///   includes a self-loop, and is deterministic: same state → same
///   successors in the same order.
/// - Step costs are finite and non-negative. The engine stops with
///   [`crate::error::SearchFailed::ContractViolation`] otherwise.
/// - `path_cost` agrees with the sum of step costs along the same actions
///   taken from `start`.
pub trait SearchProblem {
    /// State type. Equality and hashing must be by content: the engine keys
    /// its closed set on it.
    type State: Clone + Eq + Hash;

    /// Action type.
    type Action: Clone;

    /// The initial state.
    fn start(&self) -> Self::State;

    /// Whether `state` satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All transitions out of `state`, deterministically ordered.
    fn successors(&self, state: &Self::State) -> Vec<Successor<Self::State, Self::Action>>;

    /// Total cost of applying `actions` in order from [`SearchProblem::start`].
    fn path_cost(&self, actions: &[Self::Action]) -> f64;
}

/// Cost-to-goal estimator.
///
/// Values must be non-negative and not NaN. For optimal results the estimate
/// must be admissible (never above the true remaining cost).
///
/// Implemented for every `Fn(&S) -> f64`, so plain function pointers and
/// closures can be passed directly.
pub trait Heuristic<S: ?Sized> {
    /// Estimate the remaining cost from `state` to a goal.
    fn estimate(&self, state: &S) -> f64;
}

impl<S: ?Sized, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// The zero heuristic. Turns A* into uniform-cost search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl<S: ?Sized> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f64 {
        0.0
    }
}
