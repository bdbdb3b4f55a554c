//! Exact goal distances by breadth-first search from the goal.
//!
//! Moves are reversible and cost 1, so the BFS layer of a board is its
//! optimal solution length. This is the oracle for admissibility and
//! optimality checks.

use std::collections::VecDeque;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use octile_kernel::board::Board;

/// Number of boards reachable from the goal (9! / 2).
pub const REACHABLE_BOARDS: usize = 181_440;

/// Distance to the goal for every solvable board.
///
/// Computed once per process.
pub fn goal_distances() -> &'static FxHashMap<Board, u32> {
    static TABLE: OnceLock<FxHashMap<Board, u32>> = OnceLock::new();
    TABLE.get_or_init(build)
}

/// Optimal solution length, `None` for unsolvable boards.
#[must_use]
pub fn distance(board: &Board) -> Option<u32> {
    goal_distances().get(board).copied()
}

fn build() -> FxHashMap<Board, u32> {
    let mut table = FxHashMap::default();
    table.reserve(REACHABLE_BOARDS);
    let goal = Board::goal();
    table.insert(goal, 0);
    let mut queue = VecDeque::from([goal]);
    while let Some(board) = queue.pop_front() {
        let next_depth = table[&board] + 1;
        for action in board.legal_moves() {
            let Ok(next) = board.result(action) else {
                continue;
            };
            if !table.contains_key(&next) {
                table.insert(next, next_depth);
                queue.push_back(next);
            }
        }
    }
    table
}
