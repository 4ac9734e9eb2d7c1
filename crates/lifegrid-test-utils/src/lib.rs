//! Test utilities for lifegrid development.
//!
//! Provides well-known pattern fixtures ([`blinker`], [`block`],
//! [`glider`], [`beehive`]), a plaintext pattern reader
//! ([`parse_plaintext`]) and deterministic random soups
//! ([`random_soup`]) for property tests and benchmarks.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod plaintext;
pub mod soup;

pub use fixtures::{beehive, blinker, block, glider, place};
pub use plaintext::{parse_plaintext, PlaintextError};
pub use soup::random_soup;
