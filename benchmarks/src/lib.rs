//! Shared helpers for octile benchmark suites.

use octile_harness::scenario::ScenarioSet;
use octile_harness::worlds::eight_puzzle::EightPuzzle;
use octile_kernel::board::Board;
use octile_kernel::heuristic::HeuristicKind;
use octile_search::policy::SearchPolicy;
use octile_search::search::SearchStats;

/// A named scenario set for macro benchmarks.
pub struct Workload {
    pub name: &'static str,
    pub scenarios: ScenarioSet,
}

/// Fixed workloads: the demonstration boards plus shallow and deep
/// random-walk sets with fixed seeds.
#[must_use]
pub fn workloads() -> Vec<Workload> {
    vec![
        Workload {
            name: "builtin",
            scenarios: ScenarioSet::builtin(),
        },
        Workload {
            name: "walk_10",
            scenarios: ScenarioSet::random_walks(16, 10, 1),
        },
        Workload {
            name: "walk_40",
            scenarios: ScenarioSet::random_walks(16, 40, 2),
        },
    ]
}

/// Boards sampled along one seeded walk, for heuristic micro benchmarks.
#[must_use]
pub fn sample_boards(count: usize) -> Vec<Board> {
    ScenarioSet::random_walks(count, 30, 9).boards().to_vec()
}

/// Solve every board of `scenarios` sequentially and sum the expansions.
///
/// # Panics
///
/// Panics if the unbounded policy is rejected. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn solve_all(scenarios: &ScenarioSet, heuristic: HeuristicKind) -> u64 {
    let policy = SearchPolicy::unbounded();
    scenarios
        .boards()
        .iter()
        .map(|board| {
            let result = EightPuzzle::new(*board)
                .solve(heuristic, &policy)
                .expect("unbounded policy is valid");
            result.stats.expansions
        })
        .sum()
}

/// Engine counters for one board, for sanity output alongside timings.
///
/// # Panics
///
/// As [`solve_all`].
#[must_use]
pub fn stats_for(board: Board, heuristic: HeuristicKind) -> SearchStats {
    EightPuzzle::new(board)
        .solve(heuristic, &SearchPolicy::unbounded())
        .expect("unbounded policy is valid")
        .stats
}
