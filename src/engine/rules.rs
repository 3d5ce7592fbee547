//! Transition rule for the aging Game of Life
//!
//! The rule diverges from Conway's binary automaton: a cell's value is its
//! age, and a neighbor count of exactly 3 vivifies the cell with a fresh
//! random age so that newly born regions vary in intensity. The randomness
//! goes through an injected `Rng` so tests can pin the outcome with a
//! seeded generator while production uses real entropy.

use rand::Rng;

/// Default age ceiling for a live cell
pub const DEFAULT_MAX_AGE: u8 = 12;

/// Compute a cell's age in the next generation.
///
/// Rule table:
/// - 0 or 1 live neighbors: dies of loneliness (age 0)
/// - exactly 2: a live cell survives and ages by one, saturating at
///   `max_age`; a dead cell stays dead
/// - exactly 3: the cell lives with a fresh age uniform in `[1, max_age]`,
///   regardless of its prior state
/// - 4 or more: dies of overcrowding (age 0)
pub fn next_age<R: Rng + ?Sized>(
    current_age: u8,
    live_neighbors: u8,
    max_age: u8,
    rng: &mut R,
) -> u8 {
    match live_neighbors {
        0 | 1 => 0,
        2 => {
            if current_age > 0 {
                current_age.saturating_add(1).min(max_age)
            } else {
                0
            }
        }
        3 => rng.random_range(1..=max_age),
        _ => 0,
    }
}
