// game.rs - Game session: grid, generation counter and animation driver

use std::time::Duration;

use log::{debug, info};
use rand::Rng;
use tokio::runtime::Handle;

use crate::{AnimationDriver, Config, Dimensions, Grid, patterns::Pattern};

/// Everything a front end needs to run a board.
///
/// The grid is double buffered: a step reads the front grid, writes the back one and swaps.
pub struct Game {
    grid: Grid,
    back: Grid,
    generation: u64,
    driver: AnimationDriver,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Dimensions::DEFAULT, Config::TICK_INTERVAL)
    }
}

impl Game {
    pub fn new(dims: Dimensions, tick_interval: Duration) -> Self {
        Self {
            grid: Grid::empty(dims),
            back: Grid::empty(dims),
            generation: 0,
            driver: AnimationDriver::new(tick_interval),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    pub fn start<F>(&mut self, runtime: &Handle, wake: F) -> bool
    where
        F: Fn() + Send + 'static,
    {
        let started = self.driver.start(runtime, wake);
        if started {
            info!("started at generation {}", self.generation);
        }
        started
    }

    pub fn stop(&mut self) -> bool {
        let stopped = self.driver.stop();
        if stopped {
            info!("stopped at generation {}", self.generation);
        }
        stopped
    }

    /// Start/Stop button. Returns whether the game is running afterwards.
    pub fn toggle_running<F>(&mut self, runtime: &Handle, wake: F) -> bool
    where
        F: Fn() + Send + 'static,
    {
        if self.is_running() {
            self.stop();
        } else {
            self.start(runtime, wake);
        }
        self.is_running()
    }

    /// Advances one generation, running or not.
    pub fn step(&mut self) {
        self.grid.step_into(&mut self.back);
        std::mem::swap(&mut self.grid, &mut self.back);
        self.generation += 1;
        debug!(
            "generation {}: {} live cells",
            self.generation,
            self.grid.population()
        );
    }

    /// Applies one timer tick: a step while running, nothing while stopped.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.step();
        true
    }

    /// Applies every tick the timer queued since the last call.
    pub fn pump(&mut self) -> u32 {
        let due = self.driver.due_ticks();
        for _ in 0..due {
            self.tick();
        }
        due
    }

    /// Flips one cell. Coordinates wrap; the generation counter is left alone.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> bool {
        let alive = self.grid.toggle(row, col);
        debug!("cell ({}, {}) -> {}", row, col, alive);
        alive
    }

    /// Empties the grid and resets the generation counter.
    pub fn clear(&mut self) {
        self.grid = Grid::empty(self.grid.dimensions());
        self.generation = 0;
        info!("cleared");
    }

    /// Replaces the grid with a random one. The generation counter is kept.
    pub fn seed(&mut self) {
        self.grid = Grid::random(self.grid.dimensions(), Config::SEED_DENSITY);
        info!("seeded with {} live cells", self.grid.population());
    }

    pub fn seed_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = Grid::random_with(self.grid.dimensions(), Config::SEED_DENSITY, rng);
        info!("seeded with {} live cells", self.grid.population());
    }

    /// Replaces the grid with `pattern` centred on an empty board and resets the counter.
    pub fn apply_pattern(&mut self, pattern: &Pattern) {
        let mut grid = Grid::empty(self.grid.dimensions());
        pattern.stamp(&mut grid);
        self.grid = grid;
        self.generation = 0;
        info!("applied pattern {}", pattern.name);
    }
}
