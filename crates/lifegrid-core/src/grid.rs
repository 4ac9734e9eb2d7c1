//! The immutable binary cell grid.

use crate::error::GridError;
use crate::hash;
use std::fmt;

/// Cell value for a dead cell.
pub const DEAD: u8 = 0;
/// Cell value for a live cell.
pub const LIVE: u8 = 1;

/// A fixed-size two-dimensional grid of binary cells, stored row-major.
///
/// Cells are addressed as `(row, col)`. A `Grid` is never mutated after
/// construction; evolution produces a fresh value via
/// [`map_cells`](Grid::map_cells), so a grid handed to a caller stays a
/// valid snapshot of its generation forever.
///
/// Every constructor validates its input, which means any `Grid` value is
/// rectangular, non-empty and binary.
///
/// # Examples
///
/// ```
/// use lifegrid_core::Grid;
///
/// let grid = Grid::from_rows(vec![vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// assert_eq!(grid.population(), 2);
/// assert!(Grid::from_rows(vec![vec![0, 1], vec![0]]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<u8>,
}

impl Grid {
    /// Maximum size of either dimension.
    ///
    /// Neighbour resolution offsets coordinates as `i32`, so each axis
    /// must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a grid from nested rows of 0/1 values.
    ///
    /// Returns `Err(GridError::Empty)` for zero rows or zero-width rows,
    /// `Err(GridError::Ragged)` if row lengths differ, and
    /// `Err(GridError::NonBinary)` for any value other than 0 or 1.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;

        for (r, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(GridError::Ragged {
                        row: r,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            for (c, &value) in row.iter().enumerate() {
                if value > LIVE {
                    return Err(GridError::NonBinary {
                        row: r,
                        col: c,
                        value,
                    });
                }
            }
            cells.extend_from_slice(row);
            height += 1;
        }

        let width = width.unwrap_or(0);
        let (rows, cols) = check_dims(height, width)?;
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from a row-major buffer of `rows * cols` 0/1 values.
    pub fn from_flat(rows: u32, cols: u32, cells: Vec<u8>) -> Result<Self, GridError> {
        let (rows, cols) = check_dims(rows as usize, cols as usize)?;
        let expected = rows as usize * cols as usize;
        if cells.len() != expected {
            return Err(GridError::LengthMismatch {
                expected,
                found: cells.len(),
            });
        }
        if let Some(i) = cells.iter().position(|&v| v > LIVE) {
            return Err(GridError::NonBinary {
                row: i / cols as usize,
                col: i % cols as usize,
                value: cells[i],
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build an all-dead grid.
    pub fn dead(rows: u32, cols: u32) -> Result<Self, GridError> {
        let (rows, cols) = check_dims(rows as usize, cols as usize)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![DEAD; rows as usize * cols as usize],
        })
    }

    /// Build a grid whose only live cells are the given `(row, col)` pairs.
    ///
    /// Duplicates are harmless. Returns `Err(GridError::CellOutOfBounds)`
    /// for any coordinate outside the grid.
    pub fn from_live_cells(rows: u32, cols: u32, live: &[(u32, u32)]) -> Result<Self, GridError> {
        let mut grid = Self::dead(rows, cols)?;
        for &(r, c) in live {
            if r >= grid.rows || c >= grid.cols {
                return Err(GridError::CellOutOfBounds {
                    row: r,
                    col: c,
                    rows: grid.rows,
                    cols: grid.cols,
                });
            }
            let idx = grid.index_of(r, c);
            grid.cells[idx] = LIVE;
        }
        Ok(grid)
    }

    /// Number of rows (height).
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns (width).
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells, `rows * cols`.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of `(r, c)`. Caller guarantees bounds.
    #[inline]
    pub fn index_of(&self, r: u32, c: u32) -> usize {
        r as usize * self.cols as usize + c as usize
    }

    /// Cell value at `(r, c)`, or `None` if out of bounds.
    pub fn get(&self, r: u32, c: u32) -> Option<u8> {
        if r < self.rows && c < self.cols {
            Some(self.cells[self.index_of(r, c)])
        } else {
            None
        }
    }

    /// `true` if `(r, c)` is in bounds and alive.
    pub fn is_alive(&self, r: u32, c: u32) -> bool {
        self.get(r, c) == Some(LIVE)
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// One row as a slice, or `None` if `r` is out of bounds.
    pub fn row(&self, r: u32) -> Option<&[u8]> {
        if r >= self.rows {
            return None;
        }
        let start = r as usize * self.cols as usize;
        Some(&self.cells[start..start + self.cols as usize])
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// Copy the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows().map(<[u8]>::to_vec).collect()
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v == LIVE).count()
    }

    /// `true` if no cell is alive.
    pub fn is_empty_population(&self) -> bool {
        self.cells.iter().all(|&v| v == DEAD)
    }

    /// Derive a same-shaped grid by deciding each cell's liveness.
    ///
    /// `f` receives `(row, col, current_value)` and is only ever shown the
    /// cells of `self`; the result is written to a separate buffer, so no
    /// decision can observe another decision.
    pub fn map_cells(&self, mut f: impl FnMut(u32, u32, u8) -> bool) -> Grid {
        let mut next = Vec::with_capacity(self.cells.len());
        for r in 0..self.rows {
            for c in 0..self.cols {
                let alive = f(r, c, self.cells[self.index_of(r, c)]);
                next.push(if alive { LIVE } else { DEAD });
            }
        }
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: next,
        }
    }

    /// FNV-1a hash over the dimensions and cells.
    ///
    /// Equal grids always share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        hash::cells_hash(self.rows, self.cols, &self.cells)
    }
}

/// Validate a `(height, width)` pair and narrow it to `u32`.
fn check_dims(rows: usize, cols: usize) -> Result<(u32, u32), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::Empty);
    }
    let narrow = |name: &'static str, value: usize| -> Result<u32, GridError> {
        u32::try_from(value)
            .ok()
            .filter(|&v| v <= Grid::MAX_DIM)
            .ok_or(GridError::DimensionTooLarge {
                name,
                value,
                max: Grid::MAX_DIM,
            })
    };
    Ok((narrow("rows", rows)?, narrow("cols", cols)?))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                f.write_str(if cell == LIVE { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{} (population {})", self.rows, self.cols, self.population())?;
        write!(f, "{self}")
    }
}
