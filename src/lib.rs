//! Aging Game of Life
//!
//! A discrete-time cellular automaton where each live cell carries an age
//! counter: survival ages a cell up to a saturating ceiling, and a neighbor
//! count of exactly 3 vivifies a cell with a fresh random age. The engine
//! exposes a pure grid-to-grid transition over a double-buffered pair plus
//! a narrow aging-only convergence heuristic.

pub mod config;
pub mod engine;
pub mod simulation;
pub mod utils;

pub use config::Settings;
pub use engine::{Grid, GenerationPair};
pub use simulation::{RunOutcome, Simulation};

use anyhow::Result;

/// Build a simulation from settings: loads the configured seed file or
/// falls back to a random configuration.
pub fn start_simulation(settings: &Settings) -> Result<Simulation> {
    Simulation::new(settings)
}
