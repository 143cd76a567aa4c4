//! Simulation controller owning the current grid

use super::GenerationStats;
use crate::config::{Settings, SimulationConfig};
use crate::game_of_life::{GameOfLifeRules, Grid, GridError};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{debug, info};

/// Cloneable handle for stopping a running simulation from elsewhere,
/// e.g. another thread or the per-generation callback.
#[derive(Debug, Clone)]
pub struct RunHandle {
    running: Arc<AtomicBool>,
}

impl RunHandle {
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

/// Holds the authoritative grid and drives the step engine.
///
/// The grid is replaced wholesale by every operation; it is never edited in
/// place.
#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    running: Arc<AtomicBool>,
    config: SimulationConfig,
}

impl Simulation {
    /// Create a stopped simulation over an empty grid
    pub fn new(rows: usize, cols: usize, config: SimulationConfig) -> Self {
        Self::with_grid(Grid::empty(rows, cols), config)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.grid.rows,
            settings.grid.cols,
            settings.simulation.clone(),
        )
    }

    /// Create a stopped simulation starting from `grid`
    pub fn with_grid(grid: Grid, config: SimulationConfig) -> Self {
        Self {
            grid,
            generation: 0,
            running: Arc::new(AtomicBool::new(false)),
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    pub fn run_handle(&self) -> RunHandle {
        RunHandle {
            running: Arc::clone(&self.running),
        }
    }

    pub fn start(&self) {
        if !self.running.swap(true, Ordering::SeqCst) {
            info!(generation = self.generation, "simulation started");
        }
    }

    pub fn stop(&self) {
        if self.running.swap(false, Ordering::SeqCst) {
            info!(generation = self.generation, "simulation stopped");
        }
    }

    /// Flip between running and stopped; returns the new state
    pub fn toggle_running(&self) -> bool {
        if self.is_running() {
            self.stop();
            false
        } else {
            self.start();
            true
        }
    }

    /// Replace the grid with a random one at the configured density
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid = Grid::randomized_with(
            self.grid.rows(),
            self.grid.cols(),
            self.config.density,
            rng,
        );
        info!(
            population = self.grid.living_count(),
            density = self.config.density,
            "grid randomized"
        );
    }

    /// Clear the grid, rewind the generation counter and stop.
    ///
    /// Reset always leaves the simulation stopped, whatever its prior state.
    pub fn reset(&mut self) {
        self.stop();
        self.grid = Grid::empty(self.grid.rows(), self.grid.cols());
        self.generation = 0;
        info!("simulation reset");
    }

    /// Flip a single cell
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.grid = self.grid.toggled(row, col)?;
        debug!(row, col, alive = self.grid.get(row, col), "cell toggled");
        Ok(())
    }

    /// Advance one generation regardless of the run flag
    pub fn tick(&mut self) -> GenerationStats {
        let next = GameOfLifeRules::step(&self.grid);
        self.generation += 1;
        let stats = GenerationStats::between(self.generation, &self.grid, &next);
        self.grid = next;
        debug!(
            generation = stats.generation,
            population = stats.population,
            births = stats.births,
            deaths = stats.deaths,
            "generation computed"
        );
        stats
    }

    fn limit_reached(&self) -> bool {
        self.config
            .max_generations
            .is_some_and(|max| self.generation >= max)
    }

    /// Step repeatedly while the run flag is set, sleeping the tick interval
    /// between generations.
    ///
    /// The flag is only checked before each step: a step that has begun always
    /// completes, and stopping suppresses the next one. Reaching the configured
    /// generation limit clears the flag. Returns the number of generations
    /// computed by this call.
    pub fn run<F>(&mut self, mut on_generation: F) -> u64
    where
        F: FnMut(&Grid, &GenerationStats),
    {
        let interval = self.config.tick_interval();
        let mut computed = 0;

        while self.is_running() {
            if self.limit_reached() {
                self.stop();
                break;
            }

            let stats = self.tick();
            computed += 1;
            on_generation(&self.grid, &stats);

            if self.limit_reached() {
                self.stop();
                break;
            }

            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }

        computed
    }
}
