//! 8-connected (Moore) neighbourhood resolution and counting.
//!
//! Counting is a direct 8-slot summation per cell, equivalent to convolving
//! the grid with a 3x3 all-ones kernel whose centre is zero. Boundary
//! handling follows the [`Topology`]: zero fill for bounded grids,
//! wrap-around for toroidal ones.

use crate::topology::Topology;
use lifegrid_core::{Grid, GridError};
use smallvec::SmallVec;

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
pub const OFFSETS_8: [(i64, i64); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// The Moore neighbourhood of a `rows * cols` grid under a [`Topology`].
///
/// A toroidal grid narrower than 3 cells on some axis maps several of a
/// cell's 8 slots onto the same cell (on a 1x1 torus all 8 slots are the
/// cell itself). Slots are never deduplicated: a live cell is counted once
/// per slot it occupies, exactly as a wrap-around convolution would.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighbourhood {
    rows: u32,
    cols: u32,
    topology: Topology,
}

impl MooreNeighbourhood {
    /// Create a neighbourhood for a `rows * cols` grid.
    ///
    /// Returns `Err(GridError::Empty)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`Grid::MAX_DIM`].
    pub fn new(rows: u32, cols: u32, topology: Topology) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        for (name, value) in [("rows", rows), ("cols", cols)] {
            if value > Grid::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value: value as usize,
                    max: Grid::MAX_DIM,
                });
            }
        }
        Ok(Self {
            rows,
            cols,
            topology,
        })
    }

    /// The neighbourhood matching an existing grid's shape.
    pub fn for_grid(grid: &Grid, topology: Topology) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            topology,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge topology.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// `true` if `grid` has this neighbourhood's shape.
    pub fn fits(&self, grid: &Grid) -> bool {
        grid.rows() == self.rows && grid.cols() == self.cols
    }

    /// Resolve the neighbour slots of `(r, c)` as `(row, col)` pairs.
    ///
    /// Bounded slots beyond the edge are omitted; toroidal slots may repeat.
    pub fn neighbours(&self, r: u32, c: u32) -> SmallVec<[(u32, u32); 8]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS_8 {
            let nr = self.topology.resolve_axis(i64::from(r) + dr, self.rows);
            let nc = self.topology.resolve_axis(i64::from(c) + dc, self.cols);
            if let (Some(nr), Some(nc)) = (nr, nc) {
                result.push((nr, nc));
            }
        }
        result
    }

    /// Count live cells among the 8 neighbour slots of `(r, c)`.
    pub fn count(&self, grid: &Grid, r: u32, c: u32) -> u8 {
        debug_assert!(self.fits(grid), "grid shape does not match neighbourhood");
        let cells = grid.cells();
        self.neighbours(r, c)
            .into_iter()
            .map(|(nr, nc)| cells[grid.index_of(nr, nc)])
            .sum()
    }

    /// Live-neighbour counts for every cell, row-major.
    ///
    /// Same result as calling [`count`](Self::count) per cell, but resolves
    /// each axis once up front instead of once per slot.
    pub fn counts(&self, grid: &Grid) -> Vec<u8> {
        debug_assert!(self.fits(grid), "grid shape does not match neighbourhood");
        let row_slots = axis_slots(self.rows, self.topology);
        let col_slots = axis_slots(self.cols, self.topology);
        let cells = grid.cells();
        let width = self.cols as usize;

        let mut out = Vec::with_capacity(cells.len());
        for rs in &row_slots {
            for cs in &col_slots {
                let mut n = 0u8;
                for (i, nr) in rs.iter().enumerate() {
                    let Some(nr) = nr else { continue };
                    let base = *nr as usize * width;
                    for (j, nc) in cs.iter().enumerate() {
                        if i == 1 && j == 1 {
                            continue;
                        }
                        if let Some(nc) = nc {
                            n += cells[base + *nc as usize];
                        }
                    }
                }
                out.push(n);
            }
        }
        out
    }
}

/// For each index on an axis, its `[prev, self, next]` resolved positions.
fn axis_slots(len: u32, topology: Topology) -> Vec<[Option<u32>; 3]> {
    (0..len)
        .map(|i| {
            let i = i64::from(i);
            [
                topology.resolve_axis(i - 1, len),
                topology.resolve_axis(i, len),
                topology.resolve_axis(i + 1, len),
            ]
        })
        .collect()
}

/// Count live neighbours of `(r, c)` in `grid` under `topology`.
pub fn neighbour_count(grid: &Grid, r: u32, c: u32, topology: Topology) -> u8 {
    MooreNeighbourhood::for_grid(grid, topology).count(grid, r, c)
}

/// Live-neighbour counts for every cell of `grid`, row-major.
pub fn neighbour_counts(grid: &Grid, topology: Topology) -> Vec<u8> {
    MooreNeighbourhood::for_grid(grid, topology).counts(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn single(rows: u32, cols: u32, r: u32, c: u32) -> Grid {
        Grid::from_live_cells(rows, cols, &[(r, c)]).unwrap()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_bounded_interior() {
        let n = MooreNeighbourhood::new(5, 5, Topology::Bounded).unwrap();
        assert_eq!(n.neighbours(2, 2).len(), 8);
    }

    #[test]
    fn neighbours_bounded_corner() {
        let n = MooreNeighbourhood::new(5, 5, Topology::Bounded).unwrap();
        let nb = n.neighbours(0, 0);
        assert_eq!(nb.len(), 3);
        assert!(nb.contains(&(1, 0)));
        assert!(nb.contains(&(0, 1)));
        assert!(nb.contains(&(1, 1)));
    }

    #[test]
    fn neighbours_bounded_edge() {
        let n = MooreNeighbourhood::new(5, 5, Topology::Bounded).unwrap();
        assert_eq!(n.neighbours(0, 2).len(), 5);
    }

    #[test]
    fn neighbours_toroidal_corner() {
        let n = MooreNeighbourhood::new(5, 5, Topology::Toroidal).unwrap();
        let nb = n.neighbours(0, 0);
        assert_eq!(nb.len(), 8);
        assert!(nb.contains(&(4, 4))); // NW wraps on both axes
        assert!(nb.contains(&(4, 0))); // N wraps
        assert!(nb.contains(&(0, 4))); // W wraps
    }

    #[test]
    fn single_cell_bounded_has_no_neighbours() {
        let n = MooreNeighbourhood::new(1, 1, Topology::Bounded).unwrap();
        assert!(n.neighbours(0, 0).is_empty());
    }

    #[test]
    fn single_cell_toroidal_is_its_own_neighbour_eight_times() {
        let n = MooreNeighbourhood::new(1, 1, Topology::Toroidal).unwrap();
        let nb = n.neighbours(0, 0);
        assert_eq!(nb.len(), 8);
        assert!(nb.iter().all(|&p| p == (0, 0)));

        let g = single(1, 1, 0, 0);
        assert_eq!(n.count(&g, 0, 0), 8);
    }

    // ── Counting tests ──────────────────────────────────────────

    #[test]
    fn toroidal_3x3_centre_gives_every_other_cell_one() {
        let g = single(3, 3, 1, 1);
        let counts = neighbour_counts(&g, Topology::Toroidal);
        for (i, &n) in counts.iter().enumerate() {
            if i == 4 {
                assert_eq!(n, 0, "centre must not count itself");
            } else {
                assert_eq!(n, 1, "cell {i}");
            }
        }
    }

    #[test]
    fn toroidal_2x2_counts_each_occupied_slot() {
        let g = single(2, 2, 0, 0);
        let counts = neighbour_counts(&g, Topology::Toroidal);
        // (0,1): W and E slots both land on (0,0).
        // (1,0): N and S slots both land on (0,0).
        // (1,1): all four diagonal slots land on (0,0).
        // (0,0): on a 2-wide torus no slot maps a cell onto itself.
        assert_eq!(counts, vec![0, 2, 2, 4]);
    }

    #[test]
    fn bounded_5x5_corner_does_not_wrap() {
        let g = single(5, 5, 0, 0);
        let counts = neighbour_counts(&g, Topology::Bounded);
        let idx = |r: usize, c: usize| r * 5 + c;
        assert_eq!(counts[idx(0, 1)], 1);
        assert_eq!(counts[idx(1, 0)], 1);
        assert_eq!(counts[idx(1, 1)], 1);
        assert_eq!(counts[idx(4, 4)], 0);
        assert_eq!(counts[idx(0, 4)], 0);
        assert_eq!(counts[idx(4, 0)], 0);
        assert_eq!(counts.iter().map(|&n| n as usize).sum::<usize>(), 3);
    }

    #[test]
    fn toroidal_5x5_corner_wraps() {
        let g = single(5, 5, 0, 0);
        let counts = neighbour_counts(&g, Topology::Toroidal);
        let idx = |r: usize, c: usize| r * 5 + c;
        assert_eq!(counts[idx(4, 4)], 1);
        assert_eq!(counts[idx(0, 4)], 1);
        assert_eq!(counts[idx(4, 0)], 1);
        assert_eq!(counts.iter().map(|&n| n as usize).sum::<usize>(), 8);
    }

    #[test]
    fn fully_alive_interior_counts_eight() {
        let g = Grid::from_rows(vec![vec![1u8; 3]; 3]).unwrap();
        assert_eq!(neighbour_count(&g, 1, 1, Topology::Bounded), 8);
        assert_eq!(neighbour_count(&g, 0, 0, Topology::Bounded), 3);
        assert_eq!(neighbour_count(&g, 0, 0, Topology::Toroidal), 8);
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert!(matches!(
            MooreNeighbourhood::new(0, 5, Topology::Bounded),
            Err(GridError::Empty)
        ));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            MooreNeighbourhood::new(big, 5, Topology::Bounded),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            MooreNeighbourhood::new(5, big, Topology::Toroidal),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_topology() -> impl Strategy<Value = Topology> {
        prop_oneof![Just(Topology::Bounded), Just(Topology::Toroidal)]
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1u32..9, 1u32..9).prop_flat_map(|(rows, cols)| {
            proptest::collection::vec(0u8..2, (rows * cols) as usize)
                .prop_map(move |cells| Grid::from_flat(rows, cols, cells).unwrap())
        })
    }

    proptest! {
        #[test]
        fn counts_plane_matches_per_cell_count(grid in arb_grid(), topology in arb_topology()) {
            let n = MooreNeighbourhood::for_grid(&grid, topology);
            let plane = n.counts(&grid);
            for r in 0..grid.rows() {
                for c in 0..grid.cols() {
                    prop_assert_eq!(plane[grid.index_of(r, c)], n.count(&grid, r, c));
                }
            }
        }

        #[test]
        fn counts_never_exceed_eight(grid in arb_grid(), topology in arb_topology()) {
            prop_assert!(neighbour_counts(&grid, topology).iter().all(|&n| n <= 8));
        }

        #[test]
        fn toroidal_total_is_eight_per_live_cell(grid in arb_grid()) {
            // Every live cell fills exactly 8 slots on a torus.
            let total: usize = neighbour_counts(&grid, Topology::Toroidal)
                .iter()
                .map(|&n| n as usize)
                .sum();
            prop_assert_eq!(total, grid.population() * 8);
        }

        #[test]
        fn bounded_neighbours_symmetric(
            rows in 2u32..10,
            cols in 2u32..10,
            r in 0u32..10, c in 0u32..10,
        ) {
            let r = r % rows;
            let c = c % cols;
            let n = MooreNeighbourhood::new(rows, cols, Topology::Bounded).unwrap();
            for nb in n.neighbours(r, c) {
                prop_assert!(
                    n.neighbours(nb.0, nb.1).contains(&(r, c)),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb, (r, c),
                );
            }
        }
    }
}
