//! Board lock tests: reversibility, legal-move counts, goal predicate and
//! illegal-move errors, checked over every reachable board.

use lock_tests::goal_distance::{goal_distances, REACHABLE_BOARDS};
use octile_kernel::board::{Board, Move};

#[test]
fn reachable_space_has_half_of_all_permutations() {
    assert_eq!(goal_distances().len(), REACHABLE_BOARDS);
}

#[test]
fn every_legal_move_is_undone_by_its_inverse() {
    for board in goal_distances().keys() {
        for action in board.legal_moves() {
            let next = board.result(action).unwrap();
            assert_ne!(&next, board);
            assert_eq!(&next.result(action.inverse()).unwrap(), board);
        }
    }
}

#[test]
fn legal_move_count_depends_on_blank_position() {
    for board in goal_distances().keys() {
        let (row, col) = board.blank();
        let on_edge = usize::from(row == 0 || row == 2) + usize::from(col == 0 || col == 2);
        let expected = match on_edge {
            2 => 2,
            1 => 3,
            _ => 4,
        };
        assert_eq!(board.legal_moves().len(), expected, "{board:?}");
    }
}

#[test]
fn legal_moves_come_in_canonical_order() {
    let center: Board = "1,2,3,4,0,5,6,7,8".parse().unwrap();
    assert_eq!(
        center.legal_moves(),
        vec![Move::Up, Move::Down, Move::Left, Move::Right]
    );
    assert_eq!(Board::goal().legal_moves(), vec![Move::Down, Move::Right]);
}

#[test]
fn goal_predicate_holds_for_exactly_one_board() {
    let goals: Vec<&Board> = goal_distances().keys().filter(|b| b.is_goal()).collect();
    assert_eq!(goals, vec![&Board::goal()]);
    assert_eq!(Board::goal().to_compact_string(), "0,1,2,3,4,5,6,7,8");
}

#[test]
fn illegal_move_carries_action_and_board() {
    let corner: Board = "1,2,3,4,5,6,7,8,0".parse().unwrap();
    let err = corner.result(Move::Down).unwrap_err();
    assert_eq!(err.action, Move::Down);
    assert_eq!(err.board, corner);
    assert!(corner.result(Move::Right).is_err());
    assert!(corner.result(Move::Up).is_ok());
}

#[test]
fn solvability_matches_reachability() {
    assert!(goal_distances().keys().all(Board::is_solvable));
    let swapped: Board = "0,2,1,3,4,5,6,7,8".parse().unwrap();
    assert!(!swapped.is_solvable());
    assert!(!goal_distances().contains_key(&swapped));
}
