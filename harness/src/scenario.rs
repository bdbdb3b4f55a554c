//! Scenario sets: ordered lists of start boards.
//!
//! # CSV format
//!
//! ```text
//! t0,t1,t2,t3,t4,t5,t6,t7,t8
//! 1,0,2,3,4,5,6,7,8
//! 4,3,2,7,0,5,1,6,8
//! ```
//!
//! The first non-blank line is a header and is skipped. Every following
//! non-blank line must be a permutation of `0..=8`; anything else is a
//! [`ScenarioError::InvalidRow`] naming the 1-based line number. Rows are
//! never skipped silently.

use std::fmt;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use octile_kernel::board::Board;
use octile_kernel::digest::{canonical_hash, ContentHash, DOMAIN_SCENARIO_SET};

/// Header written by [`ScenarioSet::to_csv`].
pub const CSV_HEADER: &str = "t0,t1,t2,t3,t4,t5,t6,t7,t8";

/// Demonstration boards shipped with the tool.
const BUILTIN_BOARDS: [[u8; 9]; 6] = [
    [1, 0, 2, 3, 4, 5, 6, 7, 8],
    [1, 7, 8, 2, 3, 4, 5, 6, 0],
    [4, 3, 2, 7, 0, 5, 1, 6, 8],
    [5, 1, 3, 4, 0, 2, 6, 7, 8],
    [1, 2, 5, 7, 6, 8, 0, 4, 3],
    [0, 3, 1, 6, 8, 2, 7, 5, 4],
];

/// Typed failure for scenario loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    /// Reading or writing the file failed.
    Io { path: String, detail: String },
    /// A data row is not a permutation of `0..=8`.
    InvalidRow { line: usize, detail: String },
    /// The input held a header but no data rows.
    Empty,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, detail } => write!(f, "scenario file {path}: {detail}"),
            Self::InvalidRow { line, detail } => {
                write!(f, "invalid scenario row at line {line}: {detail}")
            }
            Self::Empty => f.write_str("scenario input contains no rows"),
        }
    }
}

impl std::error::Error for ScenarioError {}

/// An ordered set of start boards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScenarioSet {
    boards: Vec<Board>,
}

impl ScenarioSet {
    /// Wrap an explicit list of boards.
    #[must_use]
    pub fn new(boards: Vec<Board>) -> Self {
        Self { boards }
    }

    /// The six demonstration boards.
    ///
    /// # Panics
    ///
    /// Panics if a demonstration board is not a permutation of `0..9`.
    #[must_use]
    pub fn builtin() -> Self {
        let boards = BUILTIN_BOARDS
            .iter()
            .map(|tiles| Board::from_tiles(tiles).expect("demonstration boards are permutations"))
            .collect();
        Self { boards }
    }

    /// `count` boards, each produced by a `moves`-step random walk from the
    /// goal. Walks use uniformly chosen legal moves and may backtrack.
    ///
    /// The same `seed` always yields the same set.
    #[must_use]
    pub fn random_walks(count: usize, moves: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let boards = (0..count).map(|_| random_walk(&mut rng, moves)).collect();
        Self { boards }
    }

    /// Parse CSV text.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::InvalidRow`] for the first bad row, or
    /// [`ScenarioError::Empty`] if there are no data rows.
    pub fn from_csv_str(text: &str) -> Result<Self, ScenarioError> {
        let mut rows = text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        // Header.
        if rows.next().is_none() {
            return Err(ScenarioError::Empty);
        }

        let mut boards = Vec::new();
        for (line, row) in rows {
            let board = Board::parse_tokens(row.split(',')).map_err(|e| {
                ScenarioError::InvalidRow {
                    line,
                    detail: e.to_string(),
                }
            })?;
            boards.push(board);
        }
        if boards.is_empty() {
            return Err(ScenarioError::Empty);
        }
        Ok(Self { boards })
    }

    /// Load a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be read, otherwise
    /// as [`ScenarioSet::from_csv_str`].
    pub fn load_csv(path: &Path) -> Result<Self, ScenarioError> {
        let text = std::fs::read_to_string(path).map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })?;
        let set = Self::from_csv_str(&text)?;
        tracing::info!(path = %path.display(), scenarios = set.len(), "loaded scenarios");
        Ok(set)
    }

    /// Render as CSV with [`CSV_HEADER`].
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + self.boards.len() * 18);
        out.push_str(CSV_HEADER);
        out.push('\n');
        for board in &self.boards {
            out.push_str(&board.to_compact_string());
            out.push('\n');
        }
        out
    }

    /// Write as CSV to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ScenarioError::Io`] if the file cannot be written.
    pub fn write_csv(&self, path: &Path) -> Result<(), ScenarioError> {
        std::fs::write(path, self.to_csv()).map_err(|e| ScenarioError::Io {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }

    /// Content digest over the boards, in order.
    #[must_use]
    pub fn digest(&self) -> ContentHash {
        let bytes: Vec<u8> = self
            .boards
            .iter()
            .flat_map(Board::identity_bytes)
            .collect();
        canonical_hash(DOMAIN_SCENARIO_SET, &bytes)
    }

    /// The boards, in order.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Number of boards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Whether there are no boards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

/// Walk `moves` uniformly random legal moves from the goal.
///
/// # Panics
///
/// Panics if the kernel offers no legal move or rejects one it offered.
pub fn random_walk<R: Rng + ?Sized>(rng: &mut R, moves: usize) -> Board {
    let mut board = Board::goal();
    for _ in 0..moves {
        let &m = board
            .legal_moves()
            .choose(rng)
            .expect("every board has at least two legal moves");
        board = board.result(m).expect("move chosen from legal_moves");
    }
    board
}
