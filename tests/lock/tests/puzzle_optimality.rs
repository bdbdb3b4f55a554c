//! A* on the 8-puzzle: optimal path lengths against BFS, valid paths, and
//! the fixed scenarios (one move, already solved, unsolvable).

use lock_tests::goal_distance::{distance, REACHABLE_BOARDS};
use octile_harness::scenario::ScenarioSet;
use octile_harness::worlds::eight_puzzle::EightPuzzle;
use octile_kernel::board::{Board, Move};
use octile_kernel::heuristic::HeuristicKind;
use octile_search::contract::SearchProblem;
use octile_search::error::SearchFailed;
use octile_search::policy::SearchPolicy;
use octile_search::search::EnginePhase;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

fn assert_optimal(start: Board) {
    let expected = distance(&start).expect("start is solvable");
    let puzzle = EightPuzzle::new(start);
    for kind in HeuristicKind::ALL {
        let result = puzzle.solve(kind, &SearchPolicy::default()).unwrap();
        let solution = result.outcome.unwrap();
        assert_eq!(
            solution.depth(),
            expected as usize,
            "{kind} is not optimal on {start:?}"
        );
        assert!(start.apply_all(&solution.actions).unwrap().is_goal());
        assert!((puzzle.path_cost(&solution.actions) - solution.cost).abs() < 1e-9);
    }
}

#[test]
fn demonstration_boards_solved_optimally() {
    for start in ScenarioSet::builtin().boards() {
        assert_optimal(*start);
    }
}

#[test]
fn random_walk_boards_solved_optimally() {
    for start in ScenarioSet::random_walks(12, 40, 11).boards() {
        assert_optimal(*start);
    }
}

#[test]
fn one_move_board_solved_by_left() {
    let puzzle = EightPuzzle::new(board("1,0,2,3,4,5,6,7,8"));
    for kind in HeuristicKind::ALL {
        let result = puzzle.solve(kind, &SearchPolicy::default()).unwrap();
        assert_eq!(result.into_actions().unwrap(), vec![Move::Left]);
    }
}

#[test]
fn solved_board_needs_no_moves() {
    let puzzle = EightPuzzle::new(Board::goal());
    for kind in HeuristicKind::ALL {
        let result = puzzle.solve(kind, &SearchPolicy::default()).unwrap();
        assert_eq!(result.stats.expansions, 0);
        assert_eq!(
            result.phases,
            vec![EnginePhase::Initializing, EnginePhase::Succeeded]
        );
        assert!(result.into_actions().unwrap().is_empty());
    }
}

#[test]
fn unsolvable_board_terminates_after_exhausting_its_component() {
    let start = board("0,2,1,3,4,5,6,7,8");
    let result = EightPuzzle::new(start)
        .solve(HeuristicKind::Manhattan, &SearchPolicy::default())
        .unwrap();
    assert_eq!(result.outcome, Err(SearchFailed::Exhausted));
    assert_eq!(result.stats.closed, REACHABLE_BOARDS);
    assert_eq!(result.stats.expansions, REACHABLE_BOARDS as u64);
    assert_eq!(result.stats.frontier_final, 0);
    assert_eq!(result.phases.last(), Some(&EnginePhase::Failed));
}

#[test]
fn budget_stops_unsolvable_search_early() {
    let start = board("0,2,1,3,4,5,6,7,8");
    let result = EightPuzzle::new(start)
        .solve(
            HeuristicKind::Misplaced,
            &SearchPolicy::with_max_expansions(1_000),
        )
        .unwrap();
    assert_eq!(
        result.outcome,
        Err(SearchFailed::BudgetExhausted { limit: 1_000 })
    );
    assert_eq!(result.stats.expansions, 1_000);
}

#[test]
fn exact_expansion_budget_is_enough() {
    let one_move = EightPuzzle::new(board("1,0,2,3,4,5,6,7,8"));
    let result = one_move
        .solve(HeuristicKind::Manhattan, &SearchPolicy::with_max_expansions(1))
        .unwrap();
    assert_eq!(result.stats.expansions, 1);
    assert_eq!(result.into_actions().unwrap(), vec![Move::Left]);

    for start in ScenarioSet::builtin().boards() {
        let puzzle = EightPuzzle::new(*start);
        for kind in HeuristicKind::ALL {
            let unbounded = puzzle.solve(kind, &SearchPolicy::default()).unwrap();
            let needed = unbounded.stats.expansions;
            let capped = puzzle
                .solve(kind, &SearchPolicy::with_max_expansions(needed.max(1)))
                .unwrap();
            assert_eq!(capped.outcome, unbounded.outcome, "{kind} on {start:?}");
            assert_eq!(capped.stats, unbounded.stats, "{kind} on {start:?}");
        }
    }
}

#[test]
fn better_informed_heuristic_expands_no_more_on_demonstration_boards() {
    let scenarios = ScenarioSet::builtin();
    let total = |kind: HeuristicKind| -> u64 {
        scenarios
            .boards()
            .iter()
            .map(|b| {
                EightPuzzle::new(*b)
                    .solve(kind, &SearchPolicy::default())
                    .unwrap()
                    .stats
                    .expansions
            })
            .sum()
    };
    assert!(total(HeuristicKind::Manhattan) <= total(HeuristicKind::Misplaced));
}
