//! Simulation driver for the aging Game of Life
//!
//! Owns the generation pair for the duration of a run and exposes the
//! step/stability cycle to the caller. Pacing, input handling, and process
//! exit stay with the caller; rendering goes through [`CellRenderer`].

use crate::config::Settings;
use crate::engine::{load_initial, EngineError, GenerationPair, Grid};
use anyhow::{Context, Result};
use rand::Rng;

/// Per-cell rendering sink.
///
/// After each generation the driver emits one `draw_cell` per cell in
/// row-major order, then a single `flush` to repaint.
pub trait CellRenderer {
    fn draw_cell(&mut self, row: usize, col: usize, age: u8);
    fn flush(&mut self);
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The aging-only stability heuristic fired
    Stable { generation: usize },
    /// The configured generation cap was reached first
    GenerationLimit { generation: usize },
}

/// A running simulation: the owned buffer pair plus a generation counter
pub struct Simulation {
    pair: GenerationPair,
    max_age: u8,
    generation: usize,
}

impl Simulation {
    /// Create a simulation from settings, loading the configured seed file
    /// or falling back to a random configuration.
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut rng = rand::rng();
        let pair = load_initial(
            settings.input.seed_file.as_deref(),
            settings.simulation.max_age,
            &mut rng,
        )
        .context("Failed to build the initial generation pair")?;

        Ok(Self::from_pair(pair, settings.simulation.max_age))
    }

    /// Create a simulation from an already-built pair (useful for testing)
    pub fn from_pair(pair: GenerationPair, max_age: u8) -> Self {
        Self {
            pair,
            max_age,
            generation: 0,
        }
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn max_age(&self) -> u8 {
        self.max_age
    }

    /// The authoritative current grid
    pub fn current(&self) -> &Grid {
        self.pair.current()
    }

    /// Advance one generation on the parallel production path
    pub fn advance(&mut self) -> Result<usize, EngineError> {
        self.pair.advance_parallel(self.max_age)?;
        self.generation += 1;
        Ok(self.generation)
    }

    /// Advance one generation with an injected generator, deterministically
    pub fn advance_seeded<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, EngineError> {
        self.pair.advance(self.max_age, rng)?;
        self.generation += 1;
        Ok(self.generation)
    }

    /// Whether the last advance left the population in the aging-only
    /// steady state
    pub fn is_stable(&self) -> Result<bool, EngineError> {
        self.pair.is_stable()
    }

    /// Emit the current grid to a renderer: one `(row, col, age)` call per
    /// cell in row-major order, then a single flush.
    pub fn render_to<R: CellRenderer + ?Sized>(&self, renderer: &mut R) {
        let grid = self.pair.current();
        for (i, &age) in grid.cells().iter().enumerate() {
            renderer.draw_cell(i / grid.cols(), i % grid.cols(), age);
        }
        renderer.flush();
    }

    /// Drive the simulation until stability or the generation cap.
    ///
    /// `on_generation` runs after every advance (rendering, pacing); the
    /// stability check runs after it, so the stable frame is still drawn.
    pub fn run<F>(&mut self, max_generations: usize, mut on_generation: F) -> Result<RunOutcome>
    where
        F: FnMut(&Simulation) -> Result<()>,
    {
        while self.generation < max_generations {
            self.advance().context("Generation step failed")?;
            on_generation(self)?;
            if self.is_stable().context("Stability check failed")? {
                return Ok(RunOutcome::Stable {
                    generation: self.generation,
                });
            }
        }
        Ok(RunOutcome::GenerationLimit {
            generation: self.generation,
        })
    }
}
