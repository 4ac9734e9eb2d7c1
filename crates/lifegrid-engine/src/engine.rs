//! The stepping engine.
//!
//! [`Engine`] owns the current generation behind an [`Arc`] so that grids
//! handed to callers stay valid and unchanged while the engine moves on.
//! Stepping is infallible: every input was validated at construction.

use std::sync::Arc;
use std::time::Instant;

use lifegrid_core::Grid;
use lifegrid_rule::Rule;
use lifegrid_space::{MooreNeighbourhood, Topology};

use crate::config::{ConfigError, EngineConfig};
use crate::generations::Generations;
use crate::metrics::StepMetrics;
use crate::step::evolve;

/// A cellular automaton with a fixed rule and topology.
///
/// # Example
///
/// ```
/// use lifegrid_core::Grid;
/// use lifegrid_engine::Engine;
/// use lifegrid_rule::Rule;
/// use lifegrid_space::Topology;
///
/// let blinker = Grid::from_rows([[0u8, 0, 0], [1, 1, 1], [0, 0, 0]]).unwrap();
/// let mut engine = Engine::new(blinker.clone(), Rule::conway(), Topology::Bounded);
/// engine.step();
/// engine.step();
/// assert_eq!(**engine.current(), blinker);
/// assert_eq!(engine.generation(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    current: Arc<Grid>,
    rule: Rule,
    neighbourhood: MooreNeighbourhood,
    generation: u64,
    last_metrics: StepMetrics,
}

impl Engine {
    /// Create an engine at generation 0.
    pub fn new(initial: Grid, rule: Rule, topology: Topology) -> Self {
        let neighbourhood = MooreNeighbourhood::for_grid(&initial, topology);
        tracing::debug!(
            rows = initial.rows(),
            cols = initial.cols(),
            population = initial.population(),
            %rule,
            %topology,
            "engine created"
        );
        let last_metrics = StepMetrics {
            population: initial.population(),
            ..StepMetrics::default()
        };
        Self {
            current: Arc::new(initial),
            rule,
            neighbourhood,
            generation: 0,
            last_metrics,
        }
    }

    /// Validate `config` and create an engine from it.
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let (grid, rule) = config.resolve()?;
        Ok(Self::new(grid, rule, config.topology))
    }

    /// The current generation.
    pub fn current(&self) -> &Arc<Grid> {
        &self.current
    }

    /// Number of steps taken since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The birth/survival rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// The neighbour topology.
    pub fn topology(&self) -> Topology {
        self.neighbourhood.topology()
    }

    /// Metrics of the most recent step, or generation-0 population if
    /// no step has run.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Advance one generation and return the new current grid.
    ///
    /// The previous grid is left intact; any [`Arc`] a caller still holds
    /// keeps observing the old generation.
    pub fn step(&mut self) -> &Arc<Grid> {
        let start = Instant::now();
        let next = evolve(&self.current, &self.rule, &self.neighbourhood);
        debug_assert_eq!(
            (next.rows(), next.cols()),
            (self.current.rows(), self.current.cols())
        );
        self.generation += 1;

        let mut metrics = StepMetrics::between(self.generation, &self.current, &next);
        metrics.step_us = start.elapsed().as_micros() as u64;
        tracing::trace!(
            generation = metrics.generation,
            births = metrics.births,
            deaths = metrics.deaths,
            population = metrics.population,
            step_us = metrics.step_us,
            "step"
        );

        self.last_metrics = metrics;
        self.current = Arc::new(next);
        &self.current
    }

    /// Take `steps` steps and return the resulting grid.
    pub fn advance(&mut self, steps: u64) -> &Arc<Grid> {
        for _ in 0..steps {
            self.step();
        }
        &self.current
    }

    /// Turn the engine into a lazy sequence starting at its current grid.
    pub fn generations(self) -> Generations {
        Generations::new(self)
    }
}

impl IntoIterator for Engine {
    type Item = Arc<Grid>;
    type IntoIter = Generations;

    fn into_iter(self) -> Generations {
        self.generations()
    }
}
