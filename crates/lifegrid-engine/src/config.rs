//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder-input for constructing an [`Engine`]
//! from raw caller data. [`validate()`](EngineConfig::validate) checks every
//! input up front; [`Engine::from_config`] performs the same checks and
//! builds. Nothing is deferred: once an engine exists, stepping cannot fail.

use std::error::Error;
use std::fmt;

use lifegrid_core::{Grid, GridError};
use lifegrid_rule::{parse_rule, Rule, RuleError, RuleParseError, RulePresets};
use lifegrid_space::Topology;

use crate::engine::Engine;

// ── RuleSpec ───────────────────────────────────────────────────────

/// How a rule is supplied to [`EngineConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleSpec {
    /// Explicit birth and survival count sets.
    Sets {
        /// Counts that bring a dead cell to life.
        birth: Vec<u8>,
        /// Counts that keep a live cell alive.
        survive: Vec<u8>,
    },
    /// A `B<digits>/S<digits>` rule string.
    Text(String),
    /// A name from [`RulePresets::standard`] (case-insensitive).
    Named(String),
    /// An already-built rule.
    Rule(Rule),
}

impl RuleSpec {
    /// Resolve to a [`Rule`].
    pub fn resolve(&self) -> Result<Rule, ConfigError> {
        match self {
            Self::Sets { birth, survive } => {
                Ok(Rule::new(birth.iter().copied(), survive.iter().copied())?)
            }
            Self::Text(text) => Ok(parse_rule(text)?),
            Self::Named(name) => RulePresets::standard()
                .get(name)
                .ok_or_else(|| ConfigError::UnknownPreset { name: name.clone() }),
            Self::Rule(rule) => Ok(*rule),
        }
    }
}

impl Default for RuleSpec {
    fn default() -> Self {
        Self::Rule(Rule::conway())
    }
}

impl From<Rule> for RuleSpec {
    fn from(rule: Rule) -> Self {
        Self::Rule(rule)
    }
}

impl From<&str> for RuleSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`EngineConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The initial grid is empty, not rectangular, or not binary.
    Grid(GridError),
    /// A birth or survival count lies outside `0..=8`.
    Rule(RuleError),
    /// The rule string is malformed.
    RuleParse(RuleParseError),
    /// No preset carries the requested name.
    UnknownPreset {
        /// The name that was looked up.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
            Self::Rule(e) => write!(f, "invalid rule: {e}"),
            Self::RuleParse(e) => write!(f, "rule parse: {e}"),
            Self::UnknownPreset { name } => write!(f, "unknown rule preset {name:?}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Rule(e) => Some(e),
            Self::RuleParse(e) => Some(e),
            Self::UnknownPreset { .. } => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<RuleError> for ConfigError {
    fn from(e: RuleError) -> Self {
        Self::Rule(e)
    }
}

impl From<RuleParseError> for ConfigError {
    fn from(e: RuleParseError) -> Self {
        Self::RuleParse(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete raw configuration for constructing an [`Engine`].
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Initial cell values, one inner `Vec` per row, each 0 or 1.
    pub initial: Vec<Vec<u8>>,
    /// Birth/survival rule.
    pub rule: RuleSpec,
    /// Neighbour topology.
    pub topology: Topology,
}

impl EngineConfig {
    /// Validate all inputs.
    ///
    /// The grid is checked before the rule, so a config with both a bad
    /// grid and a bad rule reports [`ConfigError::Grid`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolve().map(|_| ())
    }

    /// Validate and produce the typed grid and rule.
    pub(crate) fn resolve(&self) -> Result<(Grid, Rule), ConfigError> {
        let grid = Grid::from_rows(&self.initial)?;
        let rule = self.rule.resolve()?;
        Ok((grid, rule))
    }

    /// Validate and build an engine. Same as [`Engine::from_config`].
    pub fn build(self) -> Result<Engine, ConfigError> {
        Engine::from_config(self)
    }
}

impl fmt::Debug for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineConfig")
            .field("initial_rows", &self.initial.len())
            .field(
                "initial_cols",
                &self.initial.first().map_or(0, Vec::len),
            )
            .field("rule", &self.rule)
            .field("topology", &self.topology)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifegrid_rule::RuleSet;

    fn valid_config() -> EngineConfig {
        EngineConfig {
            initial: vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 1, 0]],
            rule: RuleSpec::Text("B3/S23".into()),
            topology: Topology::Bounded,
        }
    }

    #[test]
    fn validate_valid_config_succeeds() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_ragged_grid_fails() {
        let mut cfg = valid_config();
        cfg.initial[1].pop();
        match cfg.validate() {
            Err(ConfigError::Grid(GridError::Ragged { row: 1, .. })) => {}
            other => panic!("expected Grid(Ragged), got {other:?}"),
        }
    }

    #[test]
    fn validate_non_binary_grid_fails() {
        let mut cfg = valid_config();
        cfg.initial[2][2] = 5;
        match cfg.validate() {
            Err(ConfigError::Grid(GridError::NonBinary { value: 5, .. })) => {}
            other => panic!("expected Grid(NonBinary), got {other:?}"),
        }
    }

    #[test]
    fn validate_empty_grid_fails() {
        let mut cfg = valid_config();
        cfg.initial.clear();
        assert_eq!(cfg.validate(), Err(ConfigError::Grid(GridError::Empty)));
    }

    #[test]
    fn validate_out_of_range_set_fails() {
        let mut cfg = valid_config();
        cfg.rule = RuleSpec::Sets {
            birth: vec![3],
            survive: vec![2, 3, 11],
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Rule(RuleError::CountOutOfRange {
                set: RuleSet::Survive,
                count: 11
            }))
        );
    }

    #[test]
    fn validate_malformed_rule_string_fails() {
        let mut cfg = valid_config();
        cfg.rule = "B3/S23 trailing".into();
        match cfg.validate() {
            Err(ConfigError::RuleParse(RuleParseError::TrailingInput { .. })) => {}
            other => panic!("expected RuleParse(TrailingInput), got {other:?}"),
        }
    }

    #[test]
    fn validate_unknown_preset_fails() {
        let mut cfg = valid_config();
        cfg.rule = RuleSpec::Named("Nonexistent".into());
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::UnknownPreset {
                name: "Nonexistent".into()
            })
        );
    }

    #[test]
    fn grid_errors_reported_before_rule_errors() {
        let cfg = EngineConfig {
            initial: vec![vec![2]],
            rule: "nonsense".into(),
            topology: Topology::Toroidal,
        };
        assert!(matches!(cfg.validate(), Err(ConfigError::Grid(_))));
    }

    #[test]
    fn rule_spec_variants_resolve_to_same_rule() {
        let specs = [
            RuleSpec::Sets {
                birth: vec![3],
                survive: vec![3, 2],
            },
            RuleSpec::Text("B3/S23".into()),
            RuleSpec::Named("life".into()),
            RuleSpec::Rule(Rule::conway()),
            RuleSpec::default(),
        ];
        for spec in specs {
            assert_eq!(spec.resolve(), Ok(Rule::conway()), "{spec:?}");
        }
    }

    #[test]
    fn error_source_chains_to_inner_error() {
        let err = ConfigError::from(GridError::Empty);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("invalid grid:"));
        assert!(ConfigError::UnknownPreset { name: "x".into() }
            .source()
            .is_none());
    }

    #[test]
    fn debug_summarises_grid() {
        let s = format!("{:?}", valid_config());
        assert!(s.contains("initial_rows: 3"), "{s}");
        assert!(s.contains("initial_cols: 3"), "{s}");
    }
}
