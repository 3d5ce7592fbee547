//! Convergence heuristic over the two most recent generations
//!
//! The detector recognizes exactly one situation: a steady-state population
//! where aging is the only change between generations. It is not a general
//! fixed-point or cycle detector.

use super::error::EngineError;
use super::grid::Grid;
use rayon::prelude::*;

/// True iff every cell was alive in `previous` and aged by exactly one step
/// in `current`, with no births, deaths, or saturation-frozen ages.
///
/// Known false negatives, by design: any dead cell in either generation
/// fails the check, and a cell frozen at the age ceiling has delta 0, so a
/// genuinely steady old population reports unstable. Callers must not treat
/// a false result as proof that no steady state exists.
pub fn is_stable(previous: &Grid, current: &Grid) -> Result<bool, EngineError> {
    if !previous.same_dimensions(current) {
        return Err(EngineError::DimensionMismatch {
            left_rows: previous.rows(),
            left_cols: previous.cols(),
            right_rows: current.rows(),
            right_cols: current.cols(),
        });
    }

    let stable = previous
        .cells()
        .par_iter()
        .zip(current.cells().par_iter())
        .all(|(&prev, &cur)| prev != 0 && cur as i16 - prev as i16 == 1);

    Ok(stable)
}
