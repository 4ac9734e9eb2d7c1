//! Lifegrid quickstart: configure, run, and inspect a small automaton.
//!
//! Demonstrates:
//!   1. Building an engine from raw rows and a rule string
//!   2. Reading step metrics
//!   3. Consuming the lazy generation sequence
//!
//! Run with:
//!   cargo run --example quickstart

use lifegrid_engine::{EngineConfig, RuleSpec};
use lifegrid_space::Topology;

// ─── Grid parameters ────────────────────────────────────────────

const ROWS: usize = 8;
const COLS: usize = 8;

// Glider in the top-left corner.
const GLIDER: [(usize, usize); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut initial = vec![vec![0u8; COLS]; ROWS];
    for (r, c) in GLIDER {
        initial[r][c] = 1;
    }

    let config = EngineConfig {
        initial,
        rule: RuleSpec::Text("B3/S23".into()),
        topology: Topology::Toroidal,
    };
    let mut engine = config.build()?;
    println!(
        "{}x{} {} torus, rule {}",
        ROWS,
        COLS,
        engine.topology(),
        engine.rule()
    );

    for _ in 0..4 {
        engine.step();
        let m = engine.last_metrics();
        println!(
            "gen {:>2}: population {} (+{} -{}) in {}us",
            m.generation, m.population, m.births, m.deaths, m.step_us
        );
    }

    // After four generations the glider has moved one cell down and right.
    println!("\n{}\n", engine.current());

    // Lazy sequence: only the generations we take are computed.
    for (i, grid) in engine.generations().take(3).enumerate() {
        println!("+{i}: fingerprint {:016x}", grid.fingerprint());
    }
    Ok(())
}
