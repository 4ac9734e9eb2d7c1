//! Benchmark profiles for the lifegrid engine.
//!
//! Provides pre-built [`EngineConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 100x100 torus (10K cells) seeded with a 35% soup
//! - [`stress_profile`]: 316x316 torus (~100K cells) for stress testing

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_engine::{EngineConfig, RuleSpec};
use lifegrid_rule::Rule;
use lifegrid_space::Topology;
use lifegrid_test_utils::random_soup;

/// Live-cell density of the benchmark soups, in percent.
pub const SOUP_DENSITY: u8 = 35;

/// Build a reference benchmark profile: 100x100 torus (10K cells).
pub fn reference_profile(seed: u64) -> EngineConfig {
    soup_profile(100, 100, seed)
}

/// Build a stress benchmark profile: 316x316 torus (~100K cells).
///
/// Same rule and density as [`reference_profile`] at 10x the cell count.
pub fn stress_profile(seed: u64) -> EngineConfig {
    soup_profile(316, 316, seed)
}

fn soup_profile(rows: u32, cols: u32, seed: u64) -> EngineConfig {
    EngineConfig {
        initial: random_soup(rows, cols, SOUP_DENSITY, seed).to_rows(),
        rule: RuleSpec::Rule(Rule::conway()),
        topology: Topology::Toroidal,
    }
}
