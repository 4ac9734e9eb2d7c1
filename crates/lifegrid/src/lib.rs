//! Lifegrid: life-like cellular automata on finite two-dimensional grids.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! lifegrid sub-crates. For most users, adding `lifegrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lifegrid::prelude::*;
//!
//! // A glider on a 10×10 torus under Conway's rules.
//! let config = EngineConfig {
//!     initial: vec![
//!         vec![0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
//!         vec![0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
//!         vec![1, 1, 1, 0, 0, 0, 0, 0, 0, 0],
//!         vec![0; 10],
//!         vec![0; 10],
//!         vec![0; 10],
//!         vec![0; 10],
//!         vec![0; 10],
//!         vec![0; 10],
//!         vec![0; 10],
//!     ],
//!     rule: RuleSpec::Text("B3/S23".into()),
//!     topology: Topology::Toroidal,
//! };
//! let engine = Engine::from_config(config).unwrap();
//!
//! // Generation 0 is the initial grid; each later element is one step.
//! let grids: Vec<_> = engine.generations().take(5).collect();
//! assert_eq!(grids[4].population(), 5);
//! assert!(grids[4].is_alive(3, 1) && grids[4].is_alive(3, 2) && grids[4].is_alive(3, 3));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `lifegrid-core` | `Grid` storage and validation errors |
//! | [`space`] | `lifegrid-space` | Topologies and Moore-neighbour counting |
//! | [`rule`] | `lifegrid-rule` | Birth/survival rules, rule strings, presets |
//! | [`engine`] | `lifegrid-engine` | Stepping engine, lazy generations, config |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage and validation (`lifegrid-core`).
pub use lifegrid_core as grid;

/// Topologies and neighbour counting (`lifegrid-space`).
///
/// [`space::Topology`] decides what lies past the grid edge;
/// [`space::MooreNeighbourhood`] counts live neighbours.
pub use lifegrid_space as space;

/// Birth/survival rules (`lifegrid-rule`).
///
/// Build a [`rule::Rule`] from count sets, parse one from a
/// `B<digits>/S<digits>` string, or look one up in [`rule::RulePresets`].
pub use lifegrid_rule as rule;

/// Stepping engine (`lifegrid-engine`).
///
/// [`engine::Engine`] advances one generation at a time;
/// [`engine::Generations`] turns it into a lazy sequence.
pub use lifegrid_engine as engine;

/// Common imports for typical lifegrid usage.
///
/// ```rust
/// use lifegrid::prelude::*;
/// ```
pub mod prelude {
    // Grid
    pub use lifegrid_core::{Grid, GridError, DEAD, LIVE};

    // Space
    pub use lifegrid_space::{MooreNeighbourhood, Topology};

    // Rule
    pub use lifegrid_rule::{parse_rule, Rule, RuleError, RuleParseError, RulePresets};

    // Engine
    pub use lifegrid_engine::{
        next_generation, ConfigError, Engine, EngineConfig, Generations, RuleSpec, StepMetrics,
    };
}
