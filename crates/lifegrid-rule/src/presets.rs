//! Named rule registry.

use crate::rule::Rule;
use indexmap::IndexMap;

/// An insertion-ordered registry of named rules.
///
/// [`RulePresets::standard`] holds the well-known life-like rules; callers
/// can extend it or start from [`RulePresets::new`]. Lookup ignores ASCII
/// case, while [`names`](Self::names) reports names as they were inserted.
#[derive(Clone, Debug, Default)]
pub struct RulePresets {
    /// Keyed by the ASCII-lowercased name; holds the display name.
    rules: IndexMap<String, (String, Rule)>,
}

impl RulePresets {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The well-known life-like rules, Conway's Life first.
    pub fn standard() -> Self {
        let mut presets = Self::new();
        for (name, birth, survive) in STANDARD {
            presets.insert(*name, Rule::masks(*birth, *survive));
        }
        presets
    }

    /// Register `rule` under `name`, replacing any rule with the same name
    /// (compared ignoring ASCII case). Returns the replaced rule.
    ///
    /// A replaced entry keeps its position and its original display name.
    pub fn insert(&mut self, name: impl Into<String>, rule: Rule) -> Option<Rule> {
        let name = name.into();
        match self.rules.get_mut(&name.to_ascii_lowercase()) {
            Some((_, slot)) => Some(std::mem::replace(slot, rule)),
            None => {
                self.rules.insert(name.to_ascii_lowercase(), (name, rule));
                None
            }
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, rule: Rule) -> Self {
        self.insert(name, rule);
        self
    }

    /// Look up a rule by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<Rule> {
        self.rules
            .get(&name.to_ascii_lowercase())
            .map(|(_, rule)| *rule)
    }

    /// The registered name of a rule, if any rule with these sets exists.
    pub fn name_of(&self, rule: &Rule) -> Option<&str> {
        self.rules
            .values()
            .find(|(_, r)| r == rule)
            .map(|(name, _)| name.as_str())
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.rules.values().map(|(name, _)| name.as_str())
    }

    /// `(name, rule)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rule)> + '_ {
        self.rules.values().map(|(name, rule)| (name.as_str(), *rule))
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// `true` if no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

const fn bits(counts: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < counts.len() {
        mask |= 1 << counts[i];
        i += 1;
    }
    mask
}

/// `(name, birth mask, survive mask)`.
const STANDARD: &[(&str, u16, u16)] = &[
    ("Life", bits(&[3]), bits(&[2, 3])),
    ("HighLife", bits(&[3, 6]), bits(&[2, 3])),
    ("Seeds", bits(&[2]), bits(&[])),
    ("Day & Night", bits(&[3, 6, 7, 8]), bits(&[3, 4, 6, 7, 8])),
    ("Maze", bits(&[3]), bits(&[1, 2, 3, 4, 5])),
    ("Diamoeba", bits(&[3, 5, 6, 7, 8]), bits(&[5, 6, 7, 8])),
    ("Replicator", bits(&[1, 3, 5, 7]), bits(&[1, 3, 5, 7])),
    (
        "Life without Death",
        bits(&[3]),
        bits(&[0, 1, 2, 3, 4, 5, 6, 7, 8]),
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_rule;

    #[test]
    fn standard_starts_with_life() {
        let presets = RulePresets::standard();
        assert_eq!(presets.names().next(), Some("Life"));
        assert_eq!(presets.get("Life"), Some(Rule::conway()));
        assert_eq!(presets.len(), STANDARD.len());
    }

    #[test]
    fn standard_rules_match_their_rule_strings() {
        let presets = RulePresets::standard();
        let expected = [
            ("HighLife", "B36/S23"),
            ("Seeds", "B2/S"),
            ("Day & Night", "B3678/S34678"),
            ("Maze", "B3/S12345"),
            ("Diamoeba", "B35678/S5678"),
            ("Replicator", "B1357/S1357"),
            ("Life without Death", "B3/S012345678"),
        ];
        for (name, text) in expected {
            assert_eq!(presets.get(name), Some(parse_rule(text).unwrap()), "{name}");
        }
    }

    #[test]
    fn lookup_ignores_case() {
        let presets = RulePresets::standard();
        assert_eq!(presets.get("highlife"), presets.get("HighLife"));
        assert_eq!(Rule::named("LIFE"), Some(Rule::conway()));
        assert_eq!(Rule::named("no such rule"), None);
    }

    #[test]
    fn insert_replaces_case_insensitively() {
        let mut presets = RulePresets::new().with("Custom", Rule::conway());
        let seeds = parse_rule("B2/S").unwrap();
        assert_eq!(presets.insert("CUSTOM", seeds), Some(Rule::conway()));
        assert_eq!(presets.len(), 1);
        assert_eq!(presets.names().collect::<Vec<_>>(), vec!["Custom"]);
        assert_eq!(presets.get("custom"), Some(seeds));
    }

    #[test]
    fn mixed_case_names_share_one_entry() {
        let seeds = parse_rule("B2/S").unwrap();
        let presets = RulePresets::new()
            .with("Day & Night", Rule::conway())
            .with("DAY & NIGHT", seeds);
        assert_eq!(presets.len(), 1);
        assert_eq!(presets.get("day & night"), Some(seeds));
        assert_eq!(presets.get("dAy & NiGhT"), Some(seeds));
        assert_eq!(presets.name_of(&seeds), Some("Day & Night"));
        assert_eq!(presets.get("Day and Night"), None);
    }

    #[test]
    fn name_of_finds_registered_rule() {
        let presets = RulePresets::standard();
        assert_eq!(presets.name_of(&Rule::conway()), Some("Life"));
        let unnamed = parse_rule("B018/S7").unwrap();
        assert_eq!(presets.name_of(&unnamed), None);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let presets = RulePresets::new()
            .with("b", Rule::conway())
            .with("a", Rule::conway());
        let names: Vec<_> = presets.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert!(!presets.is_empty());
    }
}
