//! Heuristic benchmark: every heuristic over every scenario.
//!
//! Counts come from the engine's [`SearchStats`], not from the solution
//! depth: "expanded" is the number of nodes whose successors were generated,
//! "frontier" is the frontier size when the search stopped, and "peak
//! frontier" is its high-water mark.
//!
//! Averages of expansion and frontier counts are taken over all scenarios,
//! solved or not. Average depth is taken over solved scenarios only.

use std::fmt;

use rayon::prelude::*;
use serde::Serialize;

use octile_kernel::heuristic::HeuristicKind;
use octile_search::error::SearchError;
use octile_search::policy::SearchPolicy;
use octile_search::search::SearchStats;

use crate::scenario::ScenarioSet;
use crate::worlds::eight_puzzle::EightPuzzle;

/// One search run, reduced to what the report needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenarioRun {
    /// Solution length, `None` if the search failed.
    pub depth: Option<usize>,
    pub stats: SearchStats,
}

/// Aggregates for one heuristic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeuristicSummary {
    pub heuristic: HeuristicKind,
    pub name: String,
    pub description: String,
    pub scenarios: usize,
    pub solved: usize,
    pub failed: usize,
    pub average_depth: Option<f64>,
    pub average_expanded: f64,
    pub average_frontier: f64,
    pub average_peak_frontier: f64,
}

/// The full benchmark report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    /// Digest of the scenario set the report was computed from.
    pub scenario_digest: String,
    pub scenario_count: usize,
    pub max_expansions: Option<u64>,
    pub summaries: Vec<HeuristicSummary>,
}

impl BenchmarkReport {
    /// Summary for one heuristic, if it was benchmarked.
    #[must_use]
    pub fn summary(&self, heuristic: HeuristicKind) -> Option<&HeuristicSummary> {
        self.summaries.iter().find(|s| s.heuristic == heuristic)
    }

    /// Pretty JSON rendering.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Solve every scenario with one heuristic.
///
/// Scenarios run in parallel; results come back in scenario order.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails pre-flight validation.
pub fn run_heuristic(
    scenarios: &ScenarioSet,
    heuristic: HeuristicKind,
    policy: &SearchPolicy,
) -> Result<Vec<ScenarioRun>, SearchError> {
    scenarios
        .boards()
        .par_iter()
        .map(|&board| {
            let result = EightPuzzle::new(board).solve(heuristic, policy)?;
            Ok(ScenarioRun {
                depth: result.outcome.as_ref().ok().map(|s| s.depth()),
                stats: result.stats,
            })
        })
        .collect()
}

/// Reduce the runs of one heuristic to averages.
#[must_use]
pub fn summarize(heuristic: HeuristicKind, runs: &[ScenarioRun]) -> HeuristicSummary {
    let depths: Vec<usize> = runs.iter().filter_map(|r| r.depth).collect();
    let solved = depths.len();
    HeuristicSummary {
        heuristic,
        name: heuristic.name().to_string(),
        description: heuristic.description().to_string(),
        scenarios: runs.len(),
        solved,
        failed: runs.len() - solved,
        average_depth: (solved > 0).then(|| mean(depths.iter().map(|&d| d as u64))),
        average_expanded: mean(runs.iter().map(|r| r.stats.expansions)),
        average_frontier: mean(runs.iter().map(|r| r.stats.frontier_final as u64)),
        average_peak_frontier: mean(runs.iter().map(|r| r.stats.frontier_high_water as u64)),
    }
}

/// Benchmark `heuristics` over `scenarios`.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails pre-flight validation.
pub fn run_benchmark(
    scenarios: &ScenarioSet,
    heuristics: &[HeuristicKind],
    policy: &SearchPolicy,
) -> Result<BenchmarkReport, SearchError> {
    let mut summaries = Vec::with_capacity(heuristics.len());
    for &heuristic in heuristics {
        let runs = run_heuristic(scenarios, heuristic, policy)?;
        let summary = summarize(heuristic, &runs);
        tracing::info!(
            heuristic = %heuristic,
            solved = summary.solved,
            failed = summary.failed,
            average_expanded = summary.average_expanded,
            "benchmarked heuristic"
        );
        summaries.push(summary);
    }
    Ok(BenchmarkReport {
        scenario_digest: scenarios.digest().as_str().to_string(),
        scenario_count: scenarios.len(),
        max_expansions: policy.max_expansions,
        summaries,
    })
}

#[allow(clippy::cast_precision_loss)]
fn mean<I: Iterator<Item = u64>>(values: I) -> f64 {
    let (sum, count) = values.fold((0u64, 0u64), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenarios: {} ({})", self.scenario_count, self.scenario_digest)?;
        writeln!(f, "-------------------------------")?;
        for s in &self.summaries {
            writeln!(f, "Heuristic: {}", s.name)?;
            writeln!(f, "Solved: {}/{}", s.solved, s.scenarios)?;
            match s.average_depth {
                Some(depth) => writeln!(f, "Average Depth: {depth:.2}")?,
                None => writeln!(f, "Average Depth: n/a")?,
            }
            writeln!(f, "Average Expanded Nodes: {:.2}", s.average_expanded)?;
            writeln!(f, "Average Fringe Size: {:.2}", s.average_frontier)?;
            writeln!(f, "Average Peak Fringe Size: {:.2}", s.average_peak_frontier)?;
            writeln!(f, "-------------------------------")?;
        }
        Ok(())
    }
}
