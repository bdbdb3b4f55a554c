//! `Board`: an immutable 3x3 sliding-puzzle configuration.
//!
//! # Layout
//!
//! Cells are stored row-major as tile values `0..=8`; `0` is the blank.
//! The blank's cell index is cached so move enumeration is O(1).
//!
//! # Equality semantics
//!
//! Two boards are equal iff their cells are equal. The cached blank index is
//! a pure function of the cells, so deriving `Eq`/`Hash` over both fields is
//! equivalent to comparing cells alone. This makes `Board` usable directly as
//! a closed-set key.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::moves::Move;

/// Side length of the grid.
pub const SIDE: usize = 3;

/// Number of cells in the grid.
pub const CELLS: usize = SIDE * SIDE;

/// Value denoting the blank cell.
pub const BLANK: u8 = 0;

/// The solved configuration: blank top-left, then 1..=8 row-major.
const GOAL_CELLS: [u8; CELLS] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// Typed failure for board construction. Fail-closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Input did not contain exactly [`CELLS`] values.
    WrongLength { len: usize },
    /// A value outside `0..=8`.
    OutOfRange { value: i64 },
    /// A value appeared more than once.
    Duplicate { value: u8 },
    /// A token could not be read as an integer.
    NotAnInteger { token: String },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { len } => {
                write!(f, "expected {CELLS} tiles, got {len}")
            }
            Self::OutOfRange { value } => {
                write!(f, "tile value {value} is outside 0..=8")
            }
            Self::Duplicate { value } => write!(f, "tile value {value} appears more than once"),
            Self::NotAnInteger { token } => write!(f, "tile {token:?} is not an integer"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A move that is not legal for the board it was applied to.
///
/// Raised before any new board is built: either a valid successor exists or
/// nothing was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalMove {
    /// The rejected move.
    pub action: Move,
    /// The board the move was attempted on.
    pub board: Board,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.board.blank();
        write!(
            f,
            "illegal move {} with blank at row {row}, column {col} (board {})",
            self.action,
            self.board.to_compact_string()
        )
    }
}

impl std::error::Error for IllegalMove {}

/// An 8-puzzle configuration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "[u8; 9]", try_from = "[u8; 9]")]
pub struct Board {
    cells: [u8; CELLS],
    /// Row-major index of the blank.
    blank: u8,
}

impl Board {
    /// The solved board.
    #[must_use]
    pub const fn goal() -> Self {
        Self {
            cells: GOAL_CELLS,
            blank: 0,
        }
    }

    /// Build a board from a flat row-major permutation of `0..=8`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if `tiles` is not exactly a permutation of
    /// `0..=8`.
    pub fn from_tiles(tiles: &[u8]) -> Result<Self, BoardError> {
        if tiles.len() != CELLS {
            return Err(BoardError::WrongLength { len: tiles.len() });
        }
        let mut seen = [false; CELLS];
        let mut cells = [0u8; CELLS];
        let mut blank = 0u8;
        for (idx, &value) in tiles.iter().enumerate() {
            let slot = seen
                .get_mut(usize::from(value))
                .ok_or(BoardError::OutOfRange {
                    value: i64::from(value),
                })?;
            if *slot {
                return Err(BoardError::Duplicate { value });
            }
            *slot = true;
            cells[idx] = value;
            if value == BLANK {
                #[allow(clippy::cast_possible_truncation)]
                let idx = idx as u8;
                blank = idx;
            }
        }
        Ok(Self { cells, blank })
    }

    /// Parse a board from integer tokens separated by commas and/or whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] on non-integer tokens, out-of-range values,
    /// wrong length, or duplicates.
    pub fn parse_tokens<'a, I>(tokens: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut tiles = Vec::with_capacity(CELLS);
        for token in tokens {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            let value: i64 = token.parse().map_err(|_| BoardError::NotAnInteger {
                token: token.to_string(),
            })?;
            let value = u8::try_from(value)
                .ok()
                .filter(|v| usize::from(*v) < CELLS)
                .ok_or(BoardError::OutOfRange { value })?;
            tiles.push(value);
        }
        Self::from_tiles(&tiles)
    }

    /// Row-major tile values.
    #[must_use]
    pub const fn tiles(&self) -> &[u8; CELLS] {
        &self.cells
    }

    /// Tile value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..3`.
    #[must_use]
    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        assert!(row < SIDE && col < SIDE, "cell ({row}, {col}) out of bounds");
        self.cells[row * SIDE + col]
    }

    /// `(row, col)` of the blank.
    #[must_use]
    pub const fn blank(&self) -> (usize, usize) {
        let idx = self.blank as usize;
        (idx / SIDE, idx % SIDE)
    }

    /// Canonical identity bytes (the nine tile values, row-major).
    #[must_use]
    pub const fn identity_bytes(&self) -> [u8; CELLS] {
        self.cells
    }

    /// Whether `action` is legal from this board.
    #[must_use]
    pub const fn is_legal(&self, action: Move) -> bool {
        let (row, col) = self.blank();
        match action {
            Move::Up => row != 0,
            Move::Down => row != SIDE - 1,
            Move::Left => col != 0,
            Move::Right => col != SIDE - 1,
        }
    }

    /// Legal moves in canonical order (up, down, left, right).
    ///
    /// Two for a corner blank, three for an edge, four for the center.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|m| self.is_legal(*m))
            .collect()
    }

    /// Apply `action`, returning the successor board.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMove`] if the blank cannot move in that direction.
    pub fn result(&self, action: Move) -> Result<Self, IllegalMove> {
        if !self.is_legal(action) {
            return Err(IllegalMove {
                action,
                board: *self,
            });
        }
        let (row, col) = self.blank();
        let (dr, dc) = action.delta();
        // Legality guarantees the target stays on the grid.
        let target_row = row.wrapping_add_signed(isize::from(dr));
        let target_col = col.wrapping_add_signed(isize::from(dc));
        let target = target_row * SIDE + target_col;

        let mut cells = self.cells;
        cells.swap(self.blank as usize, target);
        #[allow(clippy::cast_possible_truncation)]
        let blank = target as u8;
        Ok(Self { cells, blank })
    }

    /// Apply a sequence of moves in order.
    ///
    /// # Errors
    ///
    /// Returns the first [`IllegalMove`] encountered; earlier moves are
    /// discarded along with the partial board.
    pub fn apply_all(&self, actions: &[Move]) -> Result<Self, IllegalMove> {
        actions.iter().try_fold(*self, |board, &m| board.result(m))
    }

    /// Whether this board is the solved configuration.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.cells == GOAL_CELLS
    }

    /// Whether the goal is reachable from this board.
    ///
    /// On a 3-wide grid a blank move preserves the parity of inversions
    /// among the non-blank tiles, and the goal has zero inversions.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let tiles: Vec<u8> = self.cells.iter().copied().filter(|&t| t != BLANK).collect();
        let mut inversions = 0usize;
        for (i, &a) in tiles.iter().enumerate() {
            inversions += tiles[i + 1..].iter().filter(|&&b| b < a).count();
        }
        inversions % 2 == 0
    }

    /// Tiles as a comma-separated string (e.g. `"1,0,2,3,4,5,6,7,8"`).
    #[must_use]
    pub fn to_compact_string(&self) -> String {
        self.cells
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::goal()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board[{}]", self.to_compact_string())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_tokens(s.split(|c: char| c == ',' || c.is_whitespace()))
    }
}

impl From<Board> for [u8; CELLS] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl TryFrom<[u8; CELLS]> for Board {
    type Error = BoardError;

    fn try_from(tiles: [u8; CELLS]) -> Result<Self, Self::Error> {
        Self::from_tiles(&tiles)
    }
}
