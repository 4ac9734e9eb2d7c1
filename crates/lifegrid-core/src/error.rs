//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors arising when building a [`Grid`](crate::Grid) from caller data.
///
/// Every variant is a caller-input error: the offending data is rejected
/// before a grid exists, so no grid value is ever malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    Empty,
    /// A row's length differs from the first row's length.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell holds a value other than 0 (dead) or 1 (alive).
    NonBinary {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The value found.
        value: u8,
    },
    /// A flat cell buffer does not hold `rows * cols` values.
    LengthMismatch {
        /// `rows * cols`.
        expected: usize,
        /// Actual buffer length.
        found: usize,
    },
    /// A live-cell coordinate lies outside the grid.
    CellOutOfBounds {
        /// Row of the coordinate.
        row: u32,
        /// Column of the coordinate.
        col: u32,
        /// Grid height.
        rows: u32,
        /// Grid width.
        cols: u32,
    },
    /// A dimension exceeds [`Grid::MAX_DIM`](crate::Grid::MAX_DIM).
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The largest accepted size.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::NonBinary { row, col, value } => {
                write!(f, "cell ({row}, {col}) holds {value}, expected 0 or 1")
            }
            Self::LengthMismatch { expected, found } => {
                write!(f, "cell buffer holds {found} values, expected {expected}")
            }
            Self::CellOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "cell ({row}, {col}) out of bounds: [0, {rows}) x [0, {cols})"
            ),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}
