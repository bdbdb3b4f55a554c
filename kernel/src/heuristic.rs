//! Heuristic evaluators for the 8-puzzle.
//!
//! Each evaluator is a pure function from a [`Board`] to a non-negative
//! estimate of the remaining number of moves. All four are zero exactly at
//! the goal and never exceed the true distance.
//!
//! | key | kind | estimate |
//! |-----|------|----------|
//! | h1 | [`HeuristicKind::Misplaced`] | non-blank tiles off their goal cell |
//! | h2 | [`HeuristicKind::Euclidean`] | sum of straight-line distances |
//! | h3 | [`HeuristicKind::Manhattan`] | sum of row + column distances |
//! | h4 | [`HeuristicKind::RowColumn`] | tiles in wrong row + tiles in wrong column |
//!
//! Ordering: `h3 >= h1`, `h3 >= h2`, `h3 >= h4` on every board.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::{Board, BLANK, SIDE};

/// Row/column displacement of every non-blank tile from its goal cell.
fn displacements(board: &Board) -> impl Iterator<Item = (usize, usize)> + '_ {
    board
        .tiles()
        .iter()
        .enumerate()
        .filter(|(_, &tile)| tile != BLANK)
        .map(|(idx, &tile)| {
            let goal = usize::from(tile);
            let (row, col) = (idx / SIDE, idx % SIDE);
            let (goal_row, goal_col) = (goal / SIDE, goal % SIDE);
            (row.abs_diff(goal_row), col.abs_diff(goal_col))
        })
}

/// h1: number of non-blank tiles not in their goal cell.
#[must_use]
pub fn misplaced(board: &Board) -> f64 {
    let count = displacements(board)
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .count();
    to_f64(count)
}

/// h2: sum of Euclidean distances of the non-blank tiles.
#[must_use]
pub fn euclidean(board: &Board) -> f64 {
    displacements(board)
        .map(|(dr, dc)| to_f64(dr).hypot(to_f64(dc)))
        .sum()
}

/// h3: sum of Manhattan distances of the non-blank tiles.
#[must_use]
pub fn manhattan(board: &Board) -> f64 {
    to_f64(displacements(board).map(|(dr, dc)| dr + dc).sum())
}

/// h4: tiles out of row plus tiles out of column.
///
/// A tile misplaced in both dimensions counts twice.
#[must_use]
pub fn row_column(board: &Board) -> f64 {
    let count: usize = displacements(board)
        .map(|(dr, dc)| usize::from(dr != 0) + usize::from(dc != 0))
        .sum();
    to_f64(count)
}

/// Grid distances are tiny, so the conversion is exact.
#[allow(clippy::cast_precision_loss)]
fn to_f64(n: usize) -> f64 {
    n as f64
}

/// Enumerated heuristic selection.
///
/// Resolved once per search into a plain function pointer via
/// [`HeuristicKind::as_fn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// h1.
    Misplaced,
    /// h2.
    Euclidean,
    /// h3.
    Manhattan,
    /// h4.
    RowColumn,
}

impl HeuristicKind {
    /// All kinds in `h1..h4` order.
    pub const ALL: [Self; 4] = [
        Self::Misplaced,
        Self::Euclidean,
        Self::Manhattan,
        Self::RowColumn,
    ];

    /// Short selection key (`"h1"` .. `"h4"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Misplaced => "h1",
            Self::Euclidean => "h2",
            Self::Manhattan => "h3",
            Self::RowColumn => "h4",
        }
    }

    /// Display name used in benchmark reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Misplaced => "Misplaced Tiles",
            Self::Euclidean => "Euclidean Distance",
            Self::Manhattan => "Manhattan Distance",
            Self::RowColumn => "Tiles out of Row/Column",
        }
    }

    /// One-line description used in the interactive prompt.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Misplaced => "Number of misplaced tiles",
            Self::Euclidean => "Sum of Euclidean distances of the tiles from their goal positions",
            Self::Manhattan => "Sum of Manhattan distances of the tiles from their goal positions",
            Self::RowColumn => "Number of tiles out of row + Number of tiles out of column",
        }
    }

    /// The evaluator as a function pointer.
    #[must_use]
    pub fn as_fn(self) -> fn(&Board) -> f64 {
        match self {
            Self::Misplaced => misplaced,
            Self::Euclidean => euclidean,
            Self::Manhattan => manhattan,
            Self::RowColumn => row_column,
        }
    }

    /// Evaluate this heuristic on `board`.
    #[must_use]
    pub fn evaluate(self, board: &Board) -> f64 {
        (self.as_fn())(board)
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Failure to parse a [`HeuristicKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic {
    pub input: String,
}

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heuristic {:?} (expected h1, h2, h3 or h4)", self.input)
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for HeuristicKind {
    type Err = UnknownHeuristic;

    /// Accepts the short keys (`h1`..`h4`) and the snake-case variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" | "misplaced" => Ok(Self::Misplaced),
            "h2" | "euclidean" => Ok(Self::Euclidean),
            "h3" | "manhattan" => Ok(Self::Manhattan),
            "h4" | "row_column" => Ok(Self::RowColumn),
            _ => Err(UnknownHeuristic {
                input: s.to_string(),
            }),
        }
    }
}
