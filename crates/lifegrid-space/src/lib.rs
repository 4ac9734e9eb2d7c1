//! Neighbour topology for lifegrid automata.
//!
//! This crate answers one question for the stepping engine: how many live
//! cells surround a given cell? It defines the [`Topology`] that decides
//! what lies beyond the grid's edges and the [`MooreNeighbourhood`] that
//! resolves and counts the 8 surrounding slots of every cell.
//!
//! # Topologies
//!
//! - [`Topology::Bounded`]: cells beyond the edge are permanently dead
//! - [`Topology::Toroidal`]: opposite edges are glued together (torus)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod moore;
pub mod topology;

pub use moore::{neighbour_count, neighbour_counts, MooreNeighbourhood, OFFSETS_8};
pub use topology::Topology;
