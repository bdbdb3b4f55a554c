//! Heuristic lock tests against exact BFS distances over all reachable
//! boards: admissibility, zero at the goal, and Manhattan dominance.

use lock_tests::goal_distance::goal_distances;
use octile_kernel::board::Board;
use octile_kernel::heuristic::{manhattan, HeuristicKind};

const EPS: f64 = 1e-9;

#[test]
fn every_heuristic_is_zero_at_goal() {
    for kind in HeuristicKind::ALL {
        assert!(kind.evaluate(&Board::goal()).abs() < EPS, "{kind}");
    }
}

#[test]
fn every_heuristic_is_admissible_on_every_board() {
    for (board, &distance) in goal_distances() {
        for kind in HeuristicKind::ALL {
            let h = kind.evaluate(board);
            assert!(
                h >= 0.0 && h <= f64::from(distance) + EPS,
                "{kind} overestimates {board:?}: h={h}, distance={distance}"
            );
        }
    }
}

#[test]
fn manhattan_dominates_the_others() {
    for board in goal_distances().keys() {
        let h3 = manhattan(board);
        for kind in [
            HeuristicKind::Misplaced,
            HeuristicKind::Euclidean,
            HeuristicKind::RowColumn,
        ] {
            assert!(
                h3 + EPS >= kind.evaluate(board),
                "{kind} exceeds manhattan on {board:?}"
            );
        }
    }
}

#[test]
fn manhattan_is_consistent_across_single_moves() {
    for board in goal_distances().keys() {
        let h = manhattan(board);
        for action in board.legal_moves() {
            let next = board.result(action).unwrap();
            assert!((h - manhattan(&next)).abs() <= 1.0 + EPS);
        }
    }
}
