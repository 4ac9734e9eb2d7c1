//! Deterministic random soups.
//!
//! Uses a seeded ChaCha8 RNG, so the same arguments always produce the
//! same grid on every platform.

use lifegrid_core::{Grid, DEAD, LIVE};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A `rows * cols` grid where each cell is alive with probability
/// `density_percent / 100`. Same arguments, same grid.
///
/// Densities above 100 are treated as 100.
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn random_soup(rows: u32, cols: u32, density_percent: u8, seed: u64) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let density = u32::from(density_percent.min(100));
    let cells = (0..rows as usize * cols as usize)
        .map(|_| {
            if rng.random_ratio(density, 100) {
                LIVE
            } else {
                DEAD
            }
        })
        .collect();
    Grid::from_flat(rows, cols, cells).expect("soup dimensions must be non-zero")
}
