//! Configuration management for the aging Game of Life simulator

pub mod settings;

pub use settings::{CliOverrides, OutputFormat, Settings};
