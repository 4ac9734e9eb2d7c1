//! Well-known pattern fixtures.
//!
//! Each fixture places a pattern on an otherwise dead `rows * cols` board
//! with its bounding box's top-left corner at `(top, left)`:
//!
//! - [`blinker`]: period-2 oscillator, horizontal phase (1x3).
//! - [`block`]: 2x2 still life.
//! - [`beehive`]: 3x4 still life.
//! - [`glider`]: 3x3 spaceship travelling towards increasing row and column.

use lifegrid_core::Grid;

/// Place live offsets relative to `(top, left)` on a dead board.
///
/// # Panics
///
/// Panics if the pattern does not fit on the board.
pub fn place(rows: u32, cols: u32, top: u32, left: u32, offsets: &[(u32, u32)]) -> Grid {
    let live: Vec<(u32, u32)> = offsets
        .iter()
        .map(|&(dr, dc)| (top + dr, left + dc))
        .collect();
    Grid::from_live_cells(rows, cols, &live).expect("pattern must fit on the board")
}

pub fn blinker(rows: u32, cols: u32, top: u32, left: u32) -> Grid {
    place(rows, cols, top, left, &[(0, 0), (0, 1), (0, 2)])
}

pub fn block(rows: u32, cols: u32, top: u32, left: u32) -> Grid {
    place(rows, cols, top, left, &[(0, 0), (0, 1), (1, 0), (1, 1)])
}

pub fn beehive(rows: u32, cols: u32, top: u32, left: u32) -> Grid {
    place(
        rows,
        cols,
        top,
        left,
        &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    )
}

/// ```text
/// .O.
/// ..O
/// OOO
/// ```
pub fn glider(rows: u32, cols: u32, top: u32, left: u32) -> Grid {
    place(
        rows,
        cols,
        top,
        left,
        &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_have_expected_population() {
        assert_eq!(blinker(5, 5, 2, 1).population(), 3);
        assert_eq!(block(4, 4, 1, 1).population(), 4);
        assert_eq!(beehive(5, 6, 1, 1).population(), 6);
        assert_eq!(glider(5, 5, 0, 0).population(), 5);
    }

    #[test]
    fn glider_shape() {
        assert_eq!(glider(3, 3, 0, 0).to_string(), ".#.\n..#\n###");
    }

    #[test]
    #[should_panic(expected = "pattern must fit")]
    fn place_panics_when_pattern_overflows() {
        block(2, 2, 1, 1);
    }
}
