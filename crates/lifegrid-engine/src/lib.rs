//! Stepping engine for lifegrid automata.
//!
//! Provides the [`Engine`] that owns the current [`Grid`](lifegrid_core::Grid)
//! together with a fixed [`Rule`](lifegrid_rule::Rule) and
//! [`Topology`](lifegrid_space::Topology), and the [`Generations`] iterator
//! that turns an engine into a lazy, unbounded sequence of grids.
//!
//! Every generation is computed from a read-only snapshot of the previous
//! one into a fresh grid, so all cells transition simultaneously and
//! grids already handed out never change.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod generations;
pub mod metrics;
pub mod step;

pub use config::{ConfigError, EngineConfig, RuleSpec};
pub use engine::Engine;
pub use generations::Generations;
pub use metrics::StepMetrics;
pub use step::next_generation;
