//! Per-step metrics for the stepping engine.
//!
//! [`StepMetrics`] records what a single step did to the grid and how long
//! it took. The engine refreshes it after every [`step()`](crate::Engine::step).

use lifegrid_core::{Grid, LIVE};

/// Population changes and timing for a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Generation index of the grid this step produced (0 before any step).
    pub generation: u64,
    /// Cells that were dead and became alive.
    pub births: usize,
    /// Cells that were alive and became dead.
    pub deaths: usize,
    /// Live cells after the step.
    pub population: usize,
    /// Wall-clock time for the step, in microseconds.
    pub step_us: u64,
}

impl StepMetrics {
    /// Compare two same-shaped generations and count births and deaths.
    ///
    /// `step_us` is left at 0; the engine fills it in.
    pub fn between(generation: u64, prev: &Grid, next: &Grid) -> Self {
        debug_assert_eq!(prev.cell_count(), next.cell_count());
        let mut births = 0;
        let mut deaths = 0;
        let mut population = 0;
        for (&before, &after) in prev.cells().iter().zip(next.cells()) {
            match (before == LIVE, after == LIVE) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
            if after == LIVE {
                population += 1;
            }
        }
        Self {
            generation,
            births,
            deaths,
            population,
            step_us: 0,
        }
    }

    /// `true` if the step changed no cell.
    pub fn is_stable(&self) -> bool {
        self.births == 0 && self.deaths == 0
    }
}
