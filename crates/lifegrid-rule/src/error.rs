//! Error types for rule construction and rule-string parsing.

use std::error::Error;
use std::fmt;

/// Which of a rule's two count sets a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Counts that bring a dead cell to life.
    Birth,
    /// Counts that keep a live cell alive.
    Survive,
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Birth => f.write_str("birth"),
            Self::Survive => f.write_str("survive"),
        }
    }
}

/// Errors from building a [`Rule`](crate::Rule) out of explicit count sets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// A neighbour count lies outside `0..=8`.
    CountOutOfRange {
        /// The set holding the bad count.
        set: RuleSet,
        /// The offending count.
        count: u8,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountOutOfRange { set, count } => write!(
                f,
                "{set} count {count} out of range: neighbour counts lie in 0..={}",
                crate::MAX_COUNT
            ),
        }
    }
}

impl Error for RuleError {}

/// Errors from parsing a `B<digits>/S<digits>` rule string.
///
/// `position` fields are byte offsets into the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleParseError {
    /// The input is empty.
    Empty,
    /// The input does not start with `B`.
    MissingBirthPrefix {
        /// The first character found instead.
        found: char,
    },
    /// The birth digits are not followed by `/`.
    MissingSeparator {
        /// Where the separator was expected.
        position: usize,
    },
    /// The `/` is not followed by `S`.
    MissingSurvivePrefix {
        /// Where the prefix was expected.
        position: usize,
    },
    /// A character that is neither a digit nor the expected delimiter.
    UnexpectedChar {
        /// Offset of the character.
        position: usize,
        /// The character found.
        found: char,
    },
    /// A complete rule was read but input remains.
    TrailingInput {
        /// Offset of the first unread character.
        position: usize,
        /// The unread remainder.
        rest: String,
    },
    /// A digit names a neighbour count above 8.
    CountOutOfRange {
        /// Offset of the digit.
        position: usize,
        /// The set the digit belongs to.
        set: RuleSet,
        /// The count named by the digit.
        count: u8,
    },
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty rule string, expected B<digits>/S<digits>"),
            Self::MissingBirthPrefix { found } => {
                write!(f, "rule string must start with 'B', found {found:?}")
            }
            Self::MissingSeparator { position } => {
                write!(f, "expected '/' after birth counts at offset {position}")
            }
            Self::MissingSurvivePrefix { position } => {
                write!(f, "expected 'S' after '/' at offset {position}")
            }
            Self::UnexpectedChar { position, found } => {
                write!(f, "unexpected {found:?} at offset {position}")
            }
            Self::TrailingInput { position, rest } => {
                write!(f, "trailing input {rest:?} at offset {position}")
            }
            Self::CountOutOfRange {
                position,
                set,
                count,
            } => write!(
                f,
                "{set} count {count} at offset {position} out of range 0..={}",
                crate::MAX_COUNT
            ),
        }
    }
}

impl Error for RuleParseError {}
