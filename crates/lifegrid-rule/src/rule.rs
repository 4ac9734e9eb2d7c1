//! The birth/survival rule.

use crate::error::{RuleError, RuleSet};
use crate::presets::RulePresets;
use smallvec::SmallVec;
use std::fmt;

/// Largest neighbour count a Moore neighbourhood can produce.
pub const MAX_COUNT: u8 = 8;

/// Mask with bits `0..=8` set.
const FULL_MASK: u16 = (1 << (MAX_COUNT + 1)) - 1;

/// An immutable life-like rule: a birth set and a survival set.
///
/// Each set is stored as a 9-bit mask where bit `n` means "count `n` is a
/// member". The masks are the whole state of a rule; two rules with the
/// same sets are equal regardless of how they were written down.
///
/// # Examples
///
/// ```
/// use lifegrid_rule::Rule;
///
/// let life = Rule::new([3], [2, 3]).unwrap();
/// assert_eq!(life, Rule::conway());
/// assert_eq!(life.to_string(), "B3/S23");
/// assert!(life.next_state(false, 3));
/// assert!(!life.next_state(true, 4));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    birth: u16,
    survive: u16,
}

impl Rule {
    /// Build a rule from explicit count sets.
    ///
    /// Duplicates are collapsed. Returns `Err(RuleError::CountOutOfRange)`
    /// for the first count above [`MAX_COUNT`].
    pub fn new(
        birth: impl IntoIterator<Item = u8>,
        survive: impl IntoIterator<Item = u8>,
    ) -> Result<Self, RuleError> {
        Ok(Self {
            birth: mask_of(RuleSet::Birth, birth)?,
            survive: mask_of(RuleSet::Survive, survive)?,
        })
    }

    /// Build a rule from raw 9-bit masks, or `None` if a bit above 8 is set.
    pub const fn from_masks(birth: u16, survive: u16) -> Option<Self> {
        if birth & !FULL_MASK != 0 || survive & !FULL_MASK != 0 {
            return None;
        }
        Some(Self { birth, survive })
    }

    /// Mask constructor for compile-time-known rules.
    pub(crate) const fn masks(birth: u16, survive: u16) -> Self {
        Self {
            birth: birth & FULL_MASK,
            survive: survive & FULL_MASK,
        }
    }

    /// Conway's Game of Life, `B3/S23`.
    pub const fn conway() -> Self {
        Self::masks(1 << 3, (1 << 2) | (1 << 3))
    }

    /// Look up a rule by name in [`RulePresets::standard`].
    ///
    /// Matching ignores ASCII case.
    pub fn named(name: &str) -> Option<Self> {
        RulePresets::standard().get(name)
    }

    /// Birth counts, ascending.
    pub fn birth(&self) -> SmallVec<[u8; 9]> {
        counts_of(self.birth)
    }

    /// Survival counts, ascending.
    pub fn survive(&self) -> SmallVec<[u8; 9]> {
        counts_of(self.survive)
    }

    /// Raw birth mask (bit `n` set when `n` is a birth count).
    pub fn birth_mask(&self) -> u16 {
        self.birth
    }

    /// Raw survival mask (bit `n` set when `n` is a survival count).
    pub fn survive_mask(&self) -> u16 {
        self.survive
    }

    /// `true` if a dead cell with `count` live neighbours is born.
    #[inline]
    pub fn births_on(&self, count: u8) -> bool {
        count <= MAX_COUNT && self.birth & (1 << count) != 0
    }

    /// `true` if a live cell with `count` live neighbours survives.
    #[inline]
    pub fn survives_on(&self, count: u8) -> bool {
        count <= MAX_COUNT && self.survive & (1 << count) != 0
    }

    /// Liveness of a cell in the next generation.
    #[inline]
    pub fn next_state(&self, alive: bool, count: u8) -> bool {
        if alive {
            self.survives_on(count)
        } else {
            self.births_on(count)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self::conway()
    }
}

fn mask_of(set: RuleSet, counts: impl IntoIterator<Item = u8>) -> Result<u16, RuleError> {
    let mut mask = 0u16;
    for count in counts {
        if count > MAX_COUNT {
            return Err(RuleError::CountOutOfRange { set, count });
        }
        mask |= 1 << count;
    }
    Ok(mask)
}

fn counts_of(mask: u16) -> SmallVec<[u8; 9]> {
    (0..=MAX_COUNT).filter(|&n| mask & (1 << n) != 0).collect()
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in self.birth() {
            write!(f, "{n}")?;
        }
        f.write_str("/S")?;
        for n in self.survive() {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({self})")
    }
}
