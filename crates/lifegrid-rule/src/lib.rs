//! Life-like birth/survival rules.
//!
//! A [`Rule`] is a pair of neighbour-count sets drawn from `0..=8`: the
//! counts at which a dead cell is born and the counts at which a live cell
//! survives. Rules are built from explicit sets ([`Rule::new`]), parsed
//! from the compact `B<digits>/S<digits>` notation ([`parse_rule`]), or
//! looked up by name in [`RulePresets`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod parse;
pub mod presets;
pub mod rule;

pub use error::{RuleError, RuleParseError, RuleSet};
pub use parse::parse_rule;
pub use presets::RulePresets;
pub use rule::{Rule, MAX_COUNT};
