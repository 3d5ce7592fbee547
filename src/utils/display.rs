//! Display and output formatting utilities
//!
//! Age values render as a density palette: new cells are dark and fade as
//! they age, so the age of a region is visible at a glance.

use crate::config::OutputFormat;
use crate::engine::Grid;
use crate::simulation::CellRenderer;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::fmt;
use std::path::{Path, PathBuf};

const DEAD_CELL: char = '·';
// Darkest first: a newborn cell renders solid and fades toward the ceiling
const AGE_PALETTE: [char; 4] = ['█', '▓', '▒', '░'];

/// Glyph for a cell age under the given ceiling
pub fn age_glyph(age: u8, max_age: u8) -> char {
    if age == 0 {
        return DEAD_CELL;
    }
    if max_age <= 1 {
        return AGE_PALETTE[0];
    }
    let span = (max_age - 1) as usize;
    let bucket = (age - 1) as usize * AGE_PALETTE.len() / (span + 1);
    AGE_PALETTE[bucket.min(AGE_PALETTE.len() - 1)]
}

/// In-memory character frame fed cell by cell through [`CellRenderer`].
///
/// The driver emits every cell in row-major order and then flushes; the
/// finished frame is printed (or compared, in tests) as a whole, so a
/// flush marks one complete repaint.
pub struct AsciiFrame {
    rows: usize,
    cols: usize,
    max_age: u8,
    chars: Vec<char>,
    frames_completed: usize,
}

impl AsciiFrame {
    pub fn new(rows: usize, cols: usize, max_age: u8) -> Self {
        Self {
            rows,
            cols,
            max_age,
            chars: vec![DEAD_CELL; rows * cols],
            frames_completed: 0,
        }
    }

    /// How many complete frames have been flushed
    pub fn frames_completed(&self) -> usize {
        self.frames_completed
    }
}

impl CellRenderer for AsciiFrame {
    fn draw_cell(&mut self, row: usize, col: usize, age: u8) {
        if row < self.rows && col < self.cols {
            self.chars[row * self.cols + col] = age_glyph(age, self.max_age);
        }
    }

    fn flush(&mut self) {
        self.frames_completed += 1;
    }
}

impl fmt::Display for AsciiFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.chars.chunks(self.cols) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// Grid formatting and snapshot saving
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact palette form
    pub fn format_grid_compact(grid: &Grid, max_age: u8) -> String {
        let mut output = String::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let age = grid.get(row, col).unwrap_or(0);
                output.push(age_glyph(age, max_age));
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column coordinates
    pub fn format_grid_with_coords(grid: &Grid, max_age: u8) -> String {
        let header = (0..grid.cols()).map(|col| format!("{:2}", col % 10)).join("");
        let mut output = format!("   {}\n", header);

        for row in 0..grid.rows() {
            let body = (0..grid.cols())
                .map(|col| {
                    let age = grid.get(row, col).unwrap_or(0);
                    format!("{} ", age_glyph(age, max_age))
                })
                .join("");
            output.push_str(&format!("{:2} {}\n", row, body));
        }

        output
    }

    /// Save a snapshot of the grid in the configured format.
    ///
    /// Returns the path of the written file.
    pub fn save_snapshot(
        grid: &Grid,
        generation: usize,
        max_age: u8,
        output_dir: &Path,
        format: OutputFormat,
    ) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let (filename, content) = match format {
            OutputFormat::Text => (
                format!("generation_{:05}.txt", generation),
                grid.to_string(),
            ),
            OutputFormat::Json => (
                format!("generation_{:05}.json", generation),
                serde_json::to_string_pretty(grid).context("Failed to serialize grid")?,
            ),
            OutputFormat::Visual => (
                format!("generation_{:05}_visual.txt", generation),
                format!(
                    "Generation {} ({} live cells)\n{}",
                    generation,
                    grid.live_count(),
                    Self::format_grid_with_coords(grid, max_age)
                ),
            ),
        };

        let filepath = output_dir.join(filename);
        std::fs::write(&filepath, content)
            .with_context(|| format!("Failed to write snapshot: {}", filepath.display()))?;
        Ok(filepath)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_age_glyph_mapping() {
        assert_eq!(age_glyph(0, 12), DEAD_CELL);
        // Youngest is darkest, oldest is lightest
        assert_eq!(age_glyph(1, 12), '█');
        assert_eq!(age_glyph(12, 12), '░');
        // A single-age ceiling still renders
        assert_eq!(age_glyph(1, 1), '█');
    }

    #[test]
    fn test_frame_collects_cells() {
        let mut frame = AsciiFrame::new(2, 2, 12);
        frame.draw_cell(0, 0, 1);
        frame.draw_cell(0, 1, 0);
        frame.draw_cell(1, 0, 0);
        frame.draw_cell(1, 1, 12);
        frame.flush();

        assert_eq!(frame.frames_completed(), 1);
        assert_eq!(frame.to_string(), "█·\n·░\n");
    }

    #[test]
    fn test_format_grid_compact() {
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        let rendered = GridFormatter::format_grid_compact(&grid, 12);
        assert_eq!(rendered, "█·\n·█\n");
    }

    #[test]
    fn test_format_grid_with_coords_has_headers() {
        let grid = Grid::from_rows(vec![vec![1, 0, 1]]).unwrap();
        let rendered = GridFormatter::format_grid_with_coords(&grid, 12);
        assert!(rendered.contains(" 0 1 2"));
        assert!(rendered.starts_with("   "));
    }

    #[test]
    fn test_save_snapshot_formats() {
        let dir = tempdir().unwrap();
        let grid = Grid::from_rows(vec![vec![1, 0], vec![0, 2]]).unwrap();

        let text =
            GridFormatter::save_snapshot(&grid, 3, 12, dir.path(), OutputFormat::Text).unwrap();
        assert!(text.ends_with("generation_00003.txt"));
        assert!(text.exists());

        let json =
            GridFormatter::save_snapshot(&grid, 3, 12, dir.path(), OutputFormat::Json).unwrap();
        let content = std::fs::read_to_string(&json).unwrap();
        let parsed: Grid = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, grid);

        let visual =
            GridFormatter::save_snapshot(&grid, 3, 12, dir.path(), OutputFormat::Visual).unwrap();
        let content = std::fs::read_to_string(&visual).unwrap();
        assert!(content.contains("Generation 3"));
        assert!(content.contains("2 live cells"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
