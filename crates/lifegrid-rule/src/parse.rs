//! `B<digits>/S<digits>` rule-string parsing.
//!
//! The grammar is anchored at both ends: `^B[0-9]*/S[0-9]*$`. Each digit is
//! one neighbour count (there are no multi-digit counts), so `B36/S23` is
//! birth {3, 6} and survive {2, 3}. A `9` matches the grammar but names an
//! impossible count and is rejected with
//! [`RuleParseError::CountOutOfRange`].

use crate::error::{RuleParseError, RuleSet};
use crate::rule::{Rule, MAX_COUNT};
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// Parse a rule string such as `"B3/S23"`.
///
/// Prefixes are case-sensitive and only ASCII digits are counts. Anything
/// after the survival digits is an error rather than silently ignored.
///
/// # Examples
///
/// ```
/// use lifegrid_rule::{parse_rule, RuleParseError};
///
/// let highlife = parse_rule("B36/S23").unwrap();
/// assert_eq!(highlife.birth().as_slice(), &[3, 6]);
///
/// assert!(matches!(
///     parse_rule("B3/S23junk"),
///     Err(RuleParseError::TrailingInput { position: 6, .. })
/// ));
/// ```
pub fn parse_rule(input: &str) -> Result<Rule, RuleParseError> {
    let mut chars = input.char_indices().peekable();

    match chars.next() {
        None => return Err(RuleParseError::Empty),
        Some((_, 'B')) => {}
        Some((_, found)) => return Err(RuleParseError::MissingBirthPrefix { found }),
    }
    let birth = read_counts(&mut chars, RuleSet::Birth)?;

    match chars.next() {
        Some((_, '/')) => {}
        Some((position, found)) => return Err(RuleParseError::UnexpectedChar { position, found }),
        None => {
            return Err(RuleParseError::MissingSeparator {
                position: input.len(),
            })
        }
    }

    match chars.next() {
        Some((_, 'S')) => {}
        Some((position, _)) => return Err(RuleParseError::MissingSurvivePrefix { position }),
        None => {
            return Err(RuleParseError::MissingSurvivePrefix {
                position: input.len(),
            })
        }
    }
    let survive = read_counts(&mut chars, RuleSet::Survive)?;

    if let Some((position, _)) = chars.next() {
        return Err(RuleParseError::TrailingInput {
            position,
            rest: input[position..].to_string(),
        });
    }

    // Every count was range-checked while reading.
    Ok(Rule::masks(birth, survive))
}

/// Consume a run of ASCII digits into a count mask.
fn read_counts(chars: &mut Peekable<CharIndices<'_>>, set: RuleSet) -> Result<u16, RuleParseError> {
    let mut mask = 0u16;
    while let Some(&(position, ch)) = chars.peek() {
        let Some(digit) = ch.to_digit(10) else {
            break;
        };
        let count = digit as u8;
        if count > MAX_COUNT {
            return Err(RuleParseError::CountOutOfRange {
                position,
                set,
                count,
            });
        }
        mask |= 1 << count;
        chars.next();
    }
    Ok(mask)
}

impl FromStr for Rule {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_rule(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sets(r: &Rule) -> (Vec<u8>, Vec<u8>) {
        (r.birth().to_vec(), r.survive().to_vec())
    }

    // ── Accepted forms ──────────────────────────────────────────

    #[test]
    fn parses_conway() {
        let r = parse_rule("B3/S23").unwrap();
        assert_eq!(sets(&r), (vec![3], vec![2, 3]));
        assert_eq!(r, Rule::conway());
    }

    #[test]
    fn parses_multi_digit_sets() {
        let r = parse_rule("B36/S245").unwrap();
        assert_eq!(sets(&r), (vec![3, 6], vec![2, 4, 5]));
    }

    #[test]
    fn parses_empty_sets() {
        let r = parse_rule("B/S").unwrap();
        assert_eq!(sets(&r), (vec![], vec![]));
    }

    #[test]
    fn digits_are_individual_counts() {
        // "12" is counts 1 and 2, never twelve.
        let r = parse_rule("B12/S").unwrap();
        assert_eq!(sets(&r), (vec![1, 2], vec![]));
    }

    #[test]
    fn repeated_and_unordered_digits_collapse() {
        let r = parse_rule("B633/S32").unwrap();
        assert_eq!(r.to_string(), "B36/S23");
    }

    #[test]
    fn from_str_delegates() {
        let r: Rule = "B2/S".parse().unwrap();
        assert_eq!(sets(&r), (vec![2], vec![]));
    }

    // ── Rejected forms ──────────────────────────────────────────

    #[test]
    fn rejects_empty() {
        assert_eq!(parse_rule(""), Err(RuleParseError::Empty));
    }

    #[test]
    fn rejects_missing_birth_prefix() {
        assert_eq!(
            parse_rule("S23/B3"),
            Err(RuleParseError::MissingBirthPrefix { found: 'S' })
        );
        assert_eq!(
            parse_rule("b3/s23"),
            Err(RuleParseError::MissingBirthPrefix { found: 'b' })
        );
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            parse_rule("B3"),
            Err(RuleParseError::MissingSeparator { position: 2 })
        );
    }

    #[test]
    fn rejects_unexpected_char_in_birth() {
        assert_eq!(
            parse_rule("B3x/S23"),
            Err(RuleParseError::UnexpectedChar {
                position: 2,
                found: 'x'
            })
        );
    }

    #[test]
    fn rejects_missing_survive_prefix() {
        assert_eq!(
            parse_rule("B3/23"),
            Err(RuleParseError::MissingSurvivePrefix { position: 3 })
        );
        assert_eq!(
            parse_rule("B3/"),
            Err(RuleParseError::MissingSurvivePrefix { position: 3 })
        );
    }

    #[test]
    fn rejects_trailing_input() {
        assert_eq!(
            parse_rule("B3/S23 "),
            Err(RuleParseError::TrailingInput {
                position: 6,
                rest: " ".into()
            })
        );
        assert!(matches!(
            parse_rule("B3/S23/B4"),
            Err(RuleParseError::TrailingInput { position: 6, .. })
        ));
    }

    #[test]
    fn rejects_nine() {
        assert_eq!(
            parse_rule("B39/S23"),
            Err(RuleParseError::CountOutOfRange {
                position: 2,
                set: RuleSet::Birth,
                count: 9
            })
        );
        assert!(matches!(
            parse_rule("B3/S9"),
            Err(RuleParseError::CountOutOfRange {
                set: RuleSet::Survive,
                ..
            })
        ));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // U+0663 ARABIC-INDIC DIGIT THREE
        assert!(matches!(
            parse_rule("B\u{0663}/S23"),
            Err(RuleParseError::UnexpectedChar { position: 1, .. })
        ));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn display_round_trips(birth in 0u16..512, survive in 0u16..512) {
            let r = Rule::from_masks(birth, survive).unwrap();
            let text = r.to_string();
            prop_assert_eq!(parse_rule(&text), Ok(r));
        }

        #[test]
        fn never_panics(s in "\\PC*") {
            let _ = parse_rule(&s);
        }

        #[test]
        fn suffix_after_valid_rule_is_rejected(suffix in "[^0-9]+") {
            let input = format!("B3/S23{suffix}");
            let rejected = matches!(parse_rule(&input), Err(RuleParseError::TrailingInput { .. }));
            prop_assert!(rejected);
        }
    }
}
