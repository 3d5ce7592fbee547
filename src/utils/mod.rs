//! Presentation utilities

pub mod display;

pub use display::{age_glyph, AsciiFrame, Color, ColorOutput, GridFormatter};
