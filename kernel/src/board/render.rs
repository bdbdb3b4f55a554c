//! Human-readable grid rendering.

use std::fmt;

use crate::board::state::{Board, BLANK, SIDE};

/// Width of the horizontal rule: `SIDE` cells of `"| x "` plus the closing `|`.
const RULE_WIDTH: usize = SIDE * 4 + 1;

impl fmt::Display for Board {
    /// Boxed ASCII grid with the blank shown as a space:
    ///
    /// ```text
    /// -------------
    /// | 1 |   | 2 |
    /// -------------
    /// | 3 | 4 | 5 |
    /// -------------
    /// | 6 | 7 | 8 |
    /// -------------
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "-".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        for row in 0..SIDE {
            f.write_str("|")?;
            for col in 0..SIDE {
                match self.tile_at(row, col) {
                    BLANK => f.write_str("   |")?,
                    tile => write!(f, " {tile} |")?,
                }
            }
            writeln!(f)?;
            if row + 1 < SIDE {
                writeln!(f, "{rule}")?;
            } else {
                write!(f, "{rule}")?;
            }
        }
        Ok(())
    }
}
