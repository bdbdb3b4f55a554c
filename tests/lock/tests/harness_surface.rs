//! Harness lock tests: benchmark counters come from the engine, scenario
//! files survive a write/load cycle, and the session replays to the goal.

use std::io::Cursor;

use octile_harness::benchmark::{run_benchmark, run_heuristic};
use octile_harness::scenario::{ScenarioError, ScenarioSet};
use octile_harness::session::Session;
use octile_harness::worlds::eight_puzzle::EightPuzzle;
use octile_kernel::board::Board;
use octile_kernel::heuristic::HeuristicKind;
use octile_search::policy::SearchPolicy;

#[test]
fn benchmark_averages_match_direct_engine_stats() {
    let scenarios = ScenarioSet::random_walks(10, 20, 3);
    let policy = SearchPolicy::default();
    let report = run_benchmark(&scenarios, &HeuristicKind::ALL, &policy).unwrap();
    assert_eq!(report.scenario_count, 10);
    assert_eq!(report.scenario_digest, scenarios.digest().as_str());

    for kind in HeuristicKind::ALL {
        let direct: Vec<_> = scenarios
            .boards()
            .iter()
            .map(|b| EightPuzzle::new(*b).solve(kind, &policy).unwrap())
            .collect();
        #[allow(clippy::cast_precision_loss)]
        let expanded = direct.iter().map(|r| r.stats.expansions).sum::<u64>() as f64 / 10.0;
        #[allow(clippy::cast_precision_loss)]
        let frontier = direct.iter().map(|r| r.stats.frontier_final).sum::<usize>() as f64 / 10.0;

        let summary = report.summary(kind).unwrap();
        assert_eq!(summary.solved, 10);
        assert!((summary.average_expanded - expanded).abs() < 1e-9, "{kind}");
        assert!((summary.average_frontier - frontier).abs() < 1e-9, "{kind}");
    }
}

#[test]
fn parallel_runs_keep_scenario_order() {
    let scenarios = ScenarioSet::builtin();
    let runs = run_heuristic(&scenarios, HeuristicKind::Manhattan, &SearchPolicy::default())
        .unwrap();
    assert_eq!(runs.len(), scenarios.len());
    assert_eq!(runs[0].depth, Some(1));
    for (run, board) in runs.iter().zip(scenarios.boards()) {
        let direct = EightPuzzle::new(*board)
            .solve(HeuristicKind::Manhattan, &SearchPolicy::default())
            .unwrap();
        assert_eq!(run.stats, direct.stats);
    }
}

#[test]
fn zero_budget_is_rejected_before_benchmarking() {
    let err = run_benchmark(
        &ScenarioSet::builtin(),
        &[HeuristicKind::Misplaced],
        &SearchPolicy::with_max_expansions(0),
    );
    assert!(err.is_err());
}

#[test]
fn scenario_file_write_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenarios.csv");
    let set = ScenarioSet::random_walks(5, 30, 42);
    set.write_csv(&path).unwrap();
    let loaded = ScenarioSet::load_csv(&path).unwrap();
    assert_eq!(loaded, set);
    assert_eq!(loaded.digest(), set.digest());
}

#[test]
fn scenario_file_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let missing = ScenarioSet::load_csv(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(missing, ScenarioError::Io { .. }));

    let path = dir.path().join("bad.csv");
    std::fs::write(&path, "t0,t1,t2,t3,t4,t5,t6,t7,t8\n1,0,2,3,4,5,6,7,x\n").unwrap();
    let bad = ScenarioSet::load_csv(&path).unwrap_err();
    assert!(matches!(bad, ScenarioError::InvalidRow { line: 2, .. }), "{bad:?}");
}

#[test]
fn session_replays_to_goal_after_reprompt() {
    let start: Board = "1,2,0,3,4,5,6,7,8".parse().unwrap();
    let input = Cursor::new(b"x\nh4\n\n\n".to_vec());
    let mut session = Session::new(input, Vec::new());
    let outcome = session.run(start).unwrap();
    assert_eq!(outcome.heuristic, HeuristicKind::RowColumn);
    let actions = outcome.result.unwrap();
    assert_eq!(actions.len(), 2);
    assert!(start.apply_all(&actions).unwrap().is_goal());

    let out = String::from_utf8(session.into_output()).unwrap();
    assert_eq!(out.matches("Invalid choice. Please choose again.").count(), 1);
    assert!(out.contains("After 2 moves: left"));
}
