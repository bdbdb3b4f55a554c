//! A* entry point and expansion loop.
//!
//! # Phases
//!
//! ```text
//! Initializing ──(start is goal)──────────────────────▶ Succeeded
//!      │
//!      ▼
//!  Expanding ──(goal popped)──▶ Succeeded
//!      │
//!      └──(frontier empty / budget / contract)──▶ Failed
//! ```
//!
//! # Closed set
//!
//! The engine keeps `State → best g settled so far`. A popped node whose state
//! is already settled at an equal or lower cost is stale and discarded; a
//! child is only pushed if it improves on the settled cost. This guarantees
//! termination on cyclic spaces and re-opens states when an inconsistent (but
//! admissible) heuristic settled them too early, so the returned path stays
//! optimal.
//!
//! # Paths
//!
//! Nodes carry an index into a path arena of `(parent, action)` links. The
//! action sequence is rebuilt once, when the goal is popped.
//!
//! # Budget
//!
//! `max_expansions` caps real expansions only. It is checked just before a
//! node is settled, so a search that needs exactly `n` expansions succeeds
//! under a budget of `n`.

use rustc_hash::FxHashMap;

use crate::contract::{Heuristic, SearchProblem};
use crate::error::{FrontierError, SearchError, SearchFailed};
use crate::frontier::BestFirstFrontier;
use crate::node::SearchNode;
use crate::policy::SearchPolicy;

/// Engine phases, in the order the engine may visit them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnginePhase {
    Initializing,
    Expanding,
    Succeeded,
    Failed,
}

/// A solved search: the actions from start to goal and their total cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    pub actions: Vec<A>,
    pub cost: f64,
}

impl<A> Solution<A> {
    /// Number of actions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.actions.len()
    }
}

/// Counters observed during one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes whose successors were generated.
    pub expansions: u64,
    /// Child nodes pushed onto the frontier (the root is not counted).
    pub generated: u64,
    /// Popped nodes discarded because their state was already settled
    /// at an equal or lower cost.
    pub stale_discarded: u64,
    /// Largest frontier size seen.
    pub frontier_high_water: usize,
    /// Frontier size when the search stopped.
    pub frontier_final: usize,
    /// Number of settled states.
    pub closed: usize,
    /// Deepest node popped.
    pub max_depth: u32,
}

/// Result of a search execution.
///
/// Always carries the counters, whatever the outcome.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// The solution, or why there is none.
    pub outcome: Result<Solution<A>, SearchFailed>,
    /// Counters for benchmarking.
    pub stats: SearchStats,
    /// Phases visited, in order.
    pub phases: Vec<EnginePhase>,
}

impl<A> SearchResult<A> {
    /// Returns `true` if the search reached a goal.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The action sequence, discarding the counters.
    ///
    /// # Errors
    ///
    /// Returns the [`SearchFailed`] reason if no goal was reached.
    pub fn into_actions(self) -> Result<Vec<A>, SearchFailed> {
        self.outcome.map(|s| s.actions)
    }
}

/// Path arena entry: how a node was reached.
struct PathLink<A> {
    parent_id: Option<usize>,
    action: Option<A>,
}

/// Run A* from `problem.start()`.
///
/// Every runtime termination (goal, exhaustion, budget, contract violation)
/// returns `Ok(SearchResult)`; check [`SearchResult::outcome`].
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. No search step is taken in this case.
#[allow(clippy::too_many_lines)]
pub fn search<P, H>(
    problem: &P,
    heuristic: &H,
    policy: &SearchPolicy,
) -> Result<SearchResult<P::Action>, SearchError>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    policy.validate()?;

    let mut phases = vec![EnginePhase::Initializing];
    let mut stats = SearchStats::default();

    let start = problem.start();
    if problem.is_goal(&start) {
        phases.push(EnginePhase::Succeeded);
        tracing::debug!("start state is a goal; no expansion needed");
        return Ok(SearchResult {
            outcome: Ok(Solution {
                actions: Vec::new(),
                cost: 0.0,
            }),
            stats,
            phases,
        });
    }

    let mut frontier: BestFirstFrontier<SearchNode<P::State>> = BestFirstFrontier::new();
    let mut closed: FxHashMap<P::State, f64> = FxHashMap::default();
    let mut links: Vec<PathLink<P::Action>> = Vec::new();

    let outcome = 'search: {
        let h_start = match checked_estimate(heuristic, &start) {
            Ok(h) => h,
            Err(failed) => break 'search Err(failed),
        };
        links.push(PathLink {
            parent_id: None,
            action: None,
        });
        frontier.push(
            SearchNode {
                node_id: 0,
                state: start,
                g_cost: 0.0,
                h_cost: h_start,
                depth: 0,
            },
            h_start,
        );
        phases.push(EnginePhase::Expanding);

        loop {
            let current = match frontier.pop_min() {
                Ok(node) => node,
                Err(FrontierError::Empty) => break 'search Err(SearchFailed::Exhausted),
            };
            stats.max_depth = stats.max_depth.max(current.depth);

            if problem.is_goal(&current.state) {
                let actions = take_path(&mut links, current.node_id);
                break 'search Ok(Solution {
                    actions,
                    cost: current.g_cost,
                });
            }

            if closed
                .get(&current.state)
                .is_some_and(|&settled| settled <= current.g_cost)
            {
                stats.stale_discarded += 1;
                continue;
            }
            // Goal pops and stale discards are not expansions.
            if let Some(limit) = policy.max_expansions {
                if stats.expansions >= limit {
                    break 'search Err(SearchFailed::BudgetExhausted { limit });
                }
            }
            closed.insert(current.state.clone(), current.g_cost);
            stats.expansions += 1;

            for successor in problem.successors(&current.state) {
                let step = successor.step_cost;
                if !step.is_finite() || step < 0.0 {
                    break 'search Err(SearchFailed::ContractViolation {
                        detail: format!("step cost {step} is not a finite non-negative number"),
                    });
                }
                let child_g = current.g_cost + step;
                if closed
                    .get(&successor.state)
                    .is_some_and(|&settled| settled <= child_g)
                {
                    continue;
                }
                let child_h = match checked_estimate(heuristic, &successor.state) {
                    Ok(h) => h,
                    Err(failed) => break 'search Err(failed),
                };

                let child_id = links.len();
                links.push(PathLink {
                    parent_id: Some(current.node_id),
                    action: Some(successor.action),
                });
                frontier.push(
                    SearchNode {
                        node_id: child_id,
                        state: successor.state,
                        g_cost: child_g,
                        h_cost: child_h,
                        depth: current.depth + 1,
                    },
                    child_g + child_h,
                );
                stats.generated += 1;
            }
        }
    };

    stats.frontier_high_water = frontier.high_water();
    stats.frontier_final = frontier.len();
    stats.closed = closed.len();

    match &outcome {
        Ok(solution) => {
            phases.push(EnginePhase::Succeeded);
            tracing::debug!(
                depth = solution.depth(),
                cost = solution.cost,
                expansions = stats.expansions,
                generated = stats.generated,
                frontier_high_water = stats.frontier_high_water,
                "search succeeded"
            );
        }
        Err(failed) => {
            phases.push(EnginePhase::Failed);
            tracing::debug!(
                reason = %failed,
                expansions = stats.expansions,
                generated = stats.generated,
                "search failed"
            );
        }
    }

    Ok(SearchResult {
        outcome,
        stats,
        phases,
    })
}

/// Run unbounded A* and return only the solution.
///
/// # Errors
///
/// Returns [`SearchFailed`] if no goal is reachable or the problem or
/// heuristic breaks its contract.
pub fn astar<P, H>(problem: &P, heuristic: &H) -> Result<Solution<P::Action>, SearchFailed>
where
    P: SearchProblem + ?Sized,
    H: Heuristic<P::State> + ?Sized,
{
    match search(problem, heuristic, &SearchPolicy::unbounded()) {
        Ok(result) => result.outcome,
        // The unbounded policy always validates.
        Err(err) => Err(SearchFailed::ContractViolation {
            detail: err.to_string(),
        }),
    }
}

fn checked_estimate<S, H>(heuristic: &H, state: &S) -> Result<f64, SearchFailed>
where
    H: Heuristic<S> + ?Sized,
{
    let h = heuristic.estimate(state);
    if h.is_nan() || h < 0.0 {
        return Err(SearchFailed::ContractViolation {
            detail: format!("heuristic returned {h}; estimates must be non-negative"),
        });
    }
    Ok(h)
}

/// Rebuild the action sequence ending at `node_id`, moving actions out of
/// the arena.
fn take_path<A>(links: &mut [PathLink<A>], node_id: usize) -> Vec<A> {
    let mut actions = Vec::new();
    let mut current = Some(node_id);
    while let Some(id) = current {
        let link = &mut links[id];
        if let Some(action) = link.action.take() {
            actions.push(action);
        }
        current = link.parent_id;
    }
    actions.reverse();
    actions
}
