//! The pure generation function.
//!
//! Neighbour counts for the whole plane are computed from the previous
//! grid first, then every cell's next state is decided from those counts
//! into a fresh grid. The previous grid is never written.

use lifegrid_core::{Grid, LIVE};
use lifegrid_rule::Rule;
use lifegrid_space::{MooreNeighbourhood, Topology};

/// Compute the generation that follows `grid` under `rule` and `topology`.
///
/// The result has the same dimensions as `grid`. A dead cell becomes
/// alive iff its live-neighbour count is in the rule's birth set; a live
/// cell stays alive iff its count is in the survival set.
///
/// ```
/// use lifegrid_core::Grid;
/// use lifegrid_engine::next_generation;
/// use lifegrid_rule::Rule;
/// use lifegrid_space::Topology;
///
/// let blinker = Grid::from_rows([[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
/// let next = next_generation(&blinker, &Rule::conway(), Topology::Bounded);
/// assert_eq!(next.to_rows(), vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]]);
/// ```
pub fn next_generation(grid: &Grid, rule: &Rule, topology: Topology) -> Grid {
    evolve(grid, rule, &MooreNeighbourhood::for_grid(grid, topology))
}

/// [`next_generation`] with a prebuilt neighbourhood.
pub(crate) fn evolve(grid: &Grid, rule: &Rule, neighbourhood: &MooreNeighbourhood) -> Grid {
    debug_assert!(neighbourhood.fits(grid), "neighbourhood shape mismatch");
    let counts = neighbourhood.counts(grid);
    grid.map_cells(|r, c, value| rule.next_state(value == LIVE, counts[grid.index_of(r, c)]))
}
