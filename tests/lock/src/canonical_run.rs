//! Single source of truth for the canonical determinism run.
//!
//! Used by both the `solve_fixture` binary and the in-process determinism
//! tests, so the cross-process check and the in-process check cannot drift
//! apart.
//!
//! The run solves one fixed board with every heuristic and also generates a
//! seeded scenario set. Each observation is one `key=value` line.

use octile_harness::scenario::ScenarioSet;
use octile_harness::worlds::eight_puzzle::EightPuzzle;
use octile_kernel::board::Board;
use octile_kernel::digest::{canonical_hash, DOMAIN_BOARD};
use octile_kernel::heuristic::HeuristicKind;
use octile_search::policy::SearchPolicy;

/// Start board of the canonical run (the last demonstration board).
pub const CANONICAL_TILES: [u8; 9] = [0, 3, 1, 6, 8, 2, 7, 5, 4];

/// Scenario generation parameters of the canonical run.
pub const CANONICAL_SEED: u64 = 7;
pub const CANONICAL_SCENARIOS: usize = 20;
pub const CANONICAL_WALK: usize = 25;

/// Build the canonical board.
///
/// # Panics
///
/// Panics if [`CANONICAL_TILES`] is not a permutation (a fixture bug).
#[must_use]
pub fn canonical_board() -> Board {
    Board::from_tiles(&CANONICAL_TILES).expect("canonical tiles are a permutation")
}

/// Run the canonical workload and render it as `key=value` lines.
///
/// # Panics
///
/// Panics if the default policy is rejected or a solution cannot be
/// serialized (both indicate bugs, not usage errors).
#[must_use]
pub fn canonical_lines() -> Vec<String> {
    let board = canonical_board();
    let mut lines = vec![format!(
        "start_digest={}",
        canonical_hash(DOMAIN_BOARD, &board.identity_bytes())
    )];

    let puzzle = EightPuzzle::new(board);
    for kind in HeuristicKind::ALL {
        let result = puzzle
            .solve(kind, &SearchPolicy::default())
            .expect("default policy is valid");
        let key = kind.key();
        match &result.outcome {
            Ok(solution) => {
                let actions =
                    serde_json::to_string(&solution.actions).expect("moves serialize");
                lines.push(format!("{key}.actions={actions}"));
                lines.push(format!("{key}.cost={}", solution.cost));
            }
            Err(failed) => lines.push(format!("{key}.failed={failed}")),
        }
        let stats = result.stats;
        lines.push(format!("{key}.expansions={}", stats.expansions));
        lines.push(format!("{key}.generated={}", stats.generated));
        lines.push(format!("{key}.stale_discarded={}", stats.stale_discarded));
        lines.push(format!("{key}.frontier_final={}", stats.frontier_final));
        lines.push(format!(
            "{key}.frontier_high_water={}",
            stats.frontier_high_water
        ));
    }

    let scenarios =
        ScenarioSet::random_walks(CANONICAL_SCENARIOS, CANONICAL_WALK, CANONICAL_SEED);
    lines.push(format!("scenario_digest={}", scenarios.digest()));
    lines
}
