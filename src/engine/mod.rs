//! Core engine for the aging Game of Life

pub mod error;
pub mod grid;
pub mod loader;
pub mod rules;
pub mod stability;
pub mod stepper;

pub use error::EngineError;
pub use grid::Grid;
pub use loader::{create_example_seeds, load_initial, load_seed_file, parse_seed, random_seed};
pub use rules::{next_age, DEFAULT_MAX_AGE};
pub use stability::is_stable;
pub use stepper::{step, step_parallel, GenerationPair};
