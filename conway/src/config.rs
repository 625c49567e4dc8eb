// config.rs - Compile-time configuration for the automaton core

use std::time::Duration;

pub struct Config;

impl Config {
    pub const ROWS: usize = 30; // Rows in the playing area
    pub const COLS: usize = 40; // Columns in the playing area

    /// Time between two generations while the animation is running.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(2000);

    /// Probability of a cell being alive in a seeded grid.
    pub const SEED_DENSITY: f64 = 0.3;
}
