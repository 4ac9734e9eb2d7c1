//! Plaintext pattern reader.
//!
//! Accepts the common plaintext layout: one line per row, `.` for dead and
//! `O`, `#` or `*` for alive. Lines starting with `!` are comments. Leading
//! and trailing blank lines and surrounding whitespace are ignored.

use std::error::Error;
use std::fmt;

use lifegrid_core::{Grid, GridError};

/// Errors from [`parse_plaintext`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaintextError {
    /// A character that is neither a dead nor a live marker.
    UnknownChar {
        /// Pattern row (after comments and leading blank lines).
        row: usize,
        /// Character column within the row.
        col: usize,
        /// The character found.
        found: char,
    },
    /// The rows do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for PlaintextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownChar { row, col, found } => {
                write!(f, "unknown cell marker {found:?} at ({row}, {col})")
            }
            Self::Grid(e) => write!(f, "invalid pattern: {e}"),
        }
    }
}

impl Error for PlaintextError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownChar { .. } => None,
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<GridError> for PlaintextError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse a plaintext pattern into a grid.
pub fn parse_plaintext(text: &str) -> Result<Grid, PlaintextError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('!'))
        .collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(start, |i| i + 1);

    let mut rows = Vec::with_capacity(end.saturating_sub(start));
    for (r, line) in lines[start..end].iter().enumerate() {
        let mut row: Vec<u8> = Vec::with_capacity(line.len());
        for (c, ch) in line.chars().enumerate() {
            row.push(match ch {
                '.' => 0,
                'O' | '#' | '*' => 1,
                found => return Err(PlaintextError::UnknownChar { row: r, col: c, found }),
            });
        }
        rows.push(row);
    }
    Ok(Grid::from_rows(rows)?)
}
