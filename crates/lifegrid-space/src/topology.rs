//! Edge (boundary) behaviour for the cell grid.

use std::fmt;

/// How neighbours of edge and corner cells are resolved.
///
/// # Examples
///
/// ```
/// use lifegrid_space::Topology;
///
/// // Bounded: stepping off the grid lands nowhere.
/// assert_eq!(Topology::Bounded.resolve_axis(-1, 5), None);
/// // Toroidal: stepping off one edge re-enters from the opposite edge.
/// assert_eq!(Topology::Toroidal.resolve_axis(-1, 5), Some(4));
/// assert_eq!(Topology::Toroidal.resolve_axis(5, 5), Some(0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Out-of-grid neighbours are treated as dead.
    #[default]
    Bounded,
    /// Row and column indices wrap modulo the grid height and width.
    Toroidal,
}

impl Topology {
    /// Resolve a single axis coordinate against an axis of length `len`.
    ///
    /// Returns `Some(index)` for an in-grid position (after wrapping, for
    /// [`Toroidal`](Topology::Toroidal)) or `None` when the position lies
    /// beyond a [`Bounded`](Topology::Bounded) edge. `len` must be non-zero.
    #[inline]
    pub fn resolve_axis(self, val: i64, len: u32) -> Option<u32> {
        let n = i64::from(len);
        if val >= 0 && val < n {
            return Some(val as u32);
        }
        match self {
            Self::Bounded => None,
            Self::Toroidal => Some(val.rem_euclid(n) as u32),
        }
    }

    /// `true` for [`Topology::Toroidal`].
    pub fn wraps(self) -> bool {
        matches!(self, Self::Toroidal)
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bounded => f.write_str("bounded"),
            Self::Toroidal => f.write_str("toroidal"),
        }
    }
}
