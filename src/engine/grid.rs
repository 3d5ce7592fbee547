//! Grid representation for the aging Game of Life
//!
//! Unlike the classical binary automaton, each cell carries an age in
//! `[0, max_age]`: `0` is dead, and a live cell's value is the number of
//! consecutive generations it has been alive, saturating at the maximum.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A dense rows x cols grid of per-cell ages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create a new grid with every cell dead (age 0)
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::MalformedGrid(format!(
                "grid dimensions must be at least 1x1, got {}x{}",
                rows, cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        })
    }

    /// Build a grid from per-row age vectors
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, EngineError> {
        if rows.is_empty() {
            return Err(EngineError::MalformedGrid("grid has no rows".to_string()));
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(EngineError::MalformedGrid(
                "grid rows cannot be empty".to_string(),
            ));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(EngineError::MalformedGrid(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    cols
                )));
            }
        }

        let height = rows.len();
        let cells: Vec<u8> = rows.into_iter().flatten().collect();
        Ok(Self {
            rows: height,
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), EngineError> {
        if row >= self.rows || col >= self.cols {
            return Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Age of the cell at the given coordinates
    pub fn get(&self, row: usize, col: usize) -> Result<u8, EngineError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[self.index(row, col)])
    }

    /// Set the age of the cell at the given coordinates
    pub fn set(&mut self, row: usize, col: usize, age: u8) -> Result<(), EngineError> {
        self.check_bounds(row, col)?;
        let idx = self.index(row, col);
        self.cells[idx] = age;
        Ok(())
    }

    /// Count live neighbors in the Moore neighborhood, clipped at the edges.
    ///
    /// Positions outside the grid are treated as permanently dead, never
    /// wrapped. A neighbor is live iff its age is greater than 0. The cell's
    /// own position is not counted. Pure with respect to the grid snapshot.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as isize + dr;
                let c = col as isize + dc;

                if r >= 0
                    && r < self.rows as isize
                    && c >= 0
                    && c < self.cols as isize
                    && self.cells[self.index(r as usize, c as usize)] > 0
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Same dimensions as another grid
    pub fn same_dimensions(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Count live cells
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&age| age > 0).count()
    }

    /// True if no cell is alive
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&age| age == 0)
    }

    /// Flat row-major view of the cell ages
    pub(crate) fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Mutable flat row-major view of the cell ages
    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let age = self.cells[self.index(row, col)];
                if age == 0 {
                    write!(f, " .")?;
                } else {
                    write!(f, "{:2}", age)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(grid.is_empty());
        assert_eq!(grid.get(2, 3).unwrap(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(Grid::new(0, 5).is_err());
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, 7).unwrap();
        assert_eq!(grid.get(1, 1).unwrap(), 7);

        assert!(matches!(
            grid.get(2, 0),
            Err(EngineError::OutOfBounds { row: 2, col: 0, .. })
        ));
        assert!(grid.set(0, 2, 1).is_err());
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(vec![vec![1, 0, 3], vec![0, 12, 0]]).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(1, 1).unwrap(), 12);
        assert_eq!(grid.live_count(), 3);
    }

    #[test]
    fn test_from_rows_ragged() {
        assert!(Grid::from_rows(vec![vec![1, 0], vec![1]]).is_err());
        assert!(Grid::from_rows(vec![]).is_err());
        assert!(Grid::from_rows(vec![vec![]]).is_err());
    }

    #[test]
    fn test_neighbor_counting_full_ring() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 0, 5], vec![6, 7, 8]]).unwrap();

        // Center sees all 8, and its own (dead) position is not counted
        assert_eq!(grid.count_live_neighbors(1, 1), 8);

        // Corner sees 3 in-bounds positions, one of which (center) is dead
        assert_eq!(grid.count_live_neighbors(0, 0), 2);
    }

    #[test]
    fn test_neighbor_counting_never_counts_self() {
        // Only the queried cell is alive, so every count must be 0 or 1
        // and the cell's own count must be 0.
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, 5).unwrap();

        assert_eq!(grid.count_live_neighbors(1, 1), 0);
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (1, 1) {
                    assert_eq!(grid.count_live_neighbors(row, col), 1);
                }
            }
        }
    }

    #[test]
    fn test_neighbor_counting_edges_clip() {
        // 1x1 grid: all 8 neighbor positions are out of bounds
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set(0, 0, 3).unwrap();
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }
}
