//! Generation stepping over a double-buffered grid pair
//!
//! One step reads every neighbor count from the source snapshot and writes
//! the destination in full. Computing in place would let freshly written
//! ages leak into neighbor counts for the same step, which is exactly the
//! invariant the two buffers exist to prevent.

use super::error::EngineError;
use super::grid::Grid;
use super::rules::next_age;
use super::stability::is_stable;
use rand::Rng;
use rayon::prelude::*;

fn check_dimensions(source: &Grid, dest: &Grid) -> Result<(), EngineError> {
    if !source.same_dimensions(dest) {
        return Err(EngineError::DimensionMismatch {
            left_rows: source.rows(),
            left_cols: source.cols(),
            right_rows: dest.rows(),
            right_cols: dest.cols(),
        });
    }
    Ok(())
}

/// Advance one generation from `source` into `dest`.
///
/// Deterministic given the injected `rng`: cells are visited in row-major
/// order and the rule consumes the generator in that order. `source` is
/// never mutated; `dest`'s existing buffer is overwritten in place, no
/// allocation happens per step.
pub fn step<R: Rng + ?Sized>(
    source: &Grid,
    dest: &mut Grid,
    max_age: u8,
    rng: &mut R,
) -> Result<(), EngineError> {
    check_dimensions(source, dest)?;

    let cols = source.cols();
    let dest_cells = dest.cells_mut();
    for row in 0..source.rows() {
        for col in 0..cols {
            let neighbors = source.count_live_neighbors(row, col);
            let current = source.cells()[row * cols + col];
            dest_cells[row * cols + col] = next_age(current, neighbors, max_age, rng);
        }
    }

    Ok(())
}

/// Row-parallel variant of [`step`] for the production hot path.
///
/// Each cell reads only the source snapshot and writes only its own
/// destination cell, so rows can be processed independently over disjoint
/// chunks of the destination buffer. Uses the thread-local entropy source;
/// use [`step`] with a seeded generator when reproducibility matters.
pub fn step_parallel(source: &Grid, dest: &mut Grid, max_age: u8) -> Result<(), EngineError> {
    check_dimensions(source, dest)?;

    let cols = source.cols();
    dest.cells_mut()
        .par_chunks_mut(cols)
        .enumerate()
        .for_each(|(row, dest_row)| {
            let mut rng = rand::rng();
            for (col, cell) in dest_row.iter_mut().enumerate() {
                let neighbors = source.count_live_neighbors(row, col);
                let current = source.cells()[row * cols + col];
                *cell = next_age(current, neighbors, max_age, &mut rng);
            }
        });

    Ok(())
}

/// The two most recent generations, double-buffered.
///
/// Exactly one buffer is the authoritative current state at any time; the
/// other is overwritten in full on each advance, then the roles swap. No
/// buffer is ever allocated per generation.
#[derive(Debug, Clone)]
pub struct GenerationPair {
    buffers: [Grid; 2],
    current: usize,
}

impl GenerationPair {
    /// Build a pair from an initial grid; the companion buffer starts
    /// zero-filled with the same dimensions.
    pub fn new(initial: Grid) -> Result<Self, EngineError> {
        let next = Grid::new(initial.rows(), initial.cols())?;
        Ok(Self {
            buffers: [initial, next],
            current: 0,
        })
    }

    /// The authoritative current generation
    pub fn current(&self) -> &Grid {
        &self.buffers[self.current]
    }

    /// The generation before the current one.
    ///
    /// Before the first advance this is the zero-filled companion buffer.
    pub fn previous(&self) -> &Grid {
        &self.buffers[1 - self.current]
    }

    fn split(&mut self) -> (&Grid, &mut Grid) {
        let (left, right) = self.buffers.split_at_mut(1);
        if self.current == 0 {
            (&left[0], &mut right[0])
        } else {
            (&right[0], &mut left[0])
        }
    }

    /// Step one generation with an injected generator, then flip which
    /// buffer is current.
    pub fn advance<R: Rng + ?Sized>(&mut self, max_age: u8, rng: &mut R) -> Result<(), EngineError> {
        let (source, dest) = self.split();
        step(source, dest, max_age, rng)?;
        self.current = 1 - self.current;
        Ok(())
    }

    /// Step one generation in parallel with thread-local entropy, then flip
    /// which buffer is current.
    pub fn advance_parallel(&mut self, max_age: u8) -> Result<(), EngineError> {
        let (source, dest) = self.split();
        step_parallel(source, dest, max_age)?;
        self.current = 1 - self.current;
        Ok(())
    }

    /// Whether the last advance left the pair in the aging-only stable state
    pub fn is_stable(&self) -> Result<bool, EngineError> {
        is_stable(self.previous(), self.current())
    }
}
