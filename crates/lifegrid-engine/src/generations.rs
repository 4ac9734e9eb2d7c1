//! Lazy, unbounded generation sequences.

use std::iter::FusedIterator;
use std::sync::Arc;

use lifegrid_core::Grid;

use crate::engine::Engine;

/// Iterator over successive generations of an [`Engine`].
///
/// The first element is the engine's grid at the time the sequence was
/// created. Each later element costs exactly one step, computed only when
/// it is requested, so taking `n` elements runs `n - 1` steps. The
/// sequence never ends; bound it with [`Iterator::take`] or similar.
///
/// ```
/// use lifegrid_core::Grid;
/// use lifegrid_engine::Engine;
/// use lifegrid_rule::Rule;
/// use lifegrid_space::Topology;
///
/// let blinker = Grid::from_rows([[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
/// let mut gens = Engine::new(blinker, Rule::conway(), Topology::Bounded).generations();
/// let first_three: Vec<_> = gens.by_ref().take(3).collect();
/// assert_eq!(first_three[0], first_three[2]);
/// assert_eq!(gens.engine().generation(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Generations {
    engine: Engine,
    started: bool,
}

impl Generations {
    /// Wrap `engine`; nothing is computed until the first `next()`.
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            started: false,
        }
    }

    /// The element most recently yielded, or `None` before the first.
    pub fn current(&self) -> Option<&Arc<Grid>> {
        self.started.then(|| self.engine.current())
    }

    /// The underlying engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Stop iterating and recover the engine.
    pub fn into_engine(self) -> Engine {
        self.engine
    }
}

impl Iterator for Generations {
    type Item = Arc<Grid>;

    fn next(&mut self) -> Option<Arc<Grid>> {
        if self.started {
            self.engine.step();
        } else {
            self.started = true;
        }
        Some(Arc::clone(self.engine.current()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Generations {}
