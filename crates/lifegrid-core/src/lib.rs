//! Core types for the lifegrid cellular automaton workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! immutable [`Grid`] snapshot that every other crate reads and produces,
//! the [`GridError`] raised when caller-supplied cells are malformed, and
//! the FNV-1a [`fingerprint`](Grid::fingerprint) used to compare states.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod hash;

pub use error::GridError;
pub use grid::{Grid, DEAD, LIVE};
