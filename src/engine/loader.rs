//! Initial configuration loading
//!
//! Builds the starting generation pair either from a line-oriented seed
//! file or from a randomized configuration when no usable file is given.
//!
//! Seed file format:
//! ```text
//! # any number of leading comment lines
//! <rows>
//! <cols>
//! <row 0: cols characters, '-' = dead, anything else = alive at age 1>
//! ...
//! ```
//! Body lines are taken verbatim, without trimming. A body inconsistent
//! with the declared dimensions is rejected as malformed rather than read
//! past its end; the loader never produces a partially initialized grid.

use super::error::EngineError;
use super::grid::Grid;
use super::stepper::GenerationPair;
use rand::Rng;
use std::path::Path;

/// Parse a seed description into a grid of ages 0 and 1
pub fn parse_seed(content: &str) -> Result<Grid, EngineError> {
    let mut lines = content.lines().skip_while(|line| line.starts_with('#'));

    let rows = parse_dimension(lines.next(), "rows")?;
    let cols = parse_dimension(lines.next(), "cols")?;

    let mut cells = Vec::with_capacity(rows);
    for row in 0..rows {
        let line = lines.next().ok_or_else(|| {
            EngineError::MalformedGrid(format!("body has {} rows, expected {}", row, rows))
        })?;

        let ages: Vec<u8> = line
            .chars()
            .take(cols)
            .map(|ch| if ch == '-' { 0 } else { 1 })
            .collect();
        if ages.len() < cols {
            return Err(EngineError::MalformedGrid(format!(
                "body row {} has {} columns, expected {}",
                row,
                ages.len(),
                cols
            )));
        }
        cells.push(ages);
    }

    Grid::from_rows(cells)
}

fn parse_dimension(line: Option<&str>, name: &str) -> Result<usize, EngineError> {
    let line = line
        .ok_or_else(|| EngineError::MalformedGrid(format!("missing {} header line", name)))?;
    let value: usize = line.trim().parse().map_err(|_| {
        EngineError::MalformedGrid(format!("{} header is not a number: {:?}", name, line))
    })?;
    if value == 0 {
        return Err(EngineError::MalformedGrid(format!(
            "{} must be at least 1",
            name
        )));
    }
    Ok(value)
}

/// Load and parse a seed file
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<Grid, EngineError> {
    let content =
        std::fs::read_to_string(&path).map_err(|source| EngineError::ResourceUnavailable {
            path: path.as_ref().to_path_buf(),
            source,
        })?;
    parse_seed(&content)
}

/// Build a randomized seed grid.
///
/// Dimensions are drawn independently from `[40, 60]`; each cell is alive
/// with probability 1/2, and a live cell starts at a uniform age in
/// `[1, max_age]`.
pub fn random_seed<R: Rng + ?Sized>(rng: &mut R, max_age: u8) -> Grid {
    let rows: usize = rng.random_range(40..=60);
    let cols: usize = rng.random_range(40..=60);

    let cells = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| {
                    if rng.random_bool(0.5) {
                        rng.random_range(1..=max_age)
                    } else {
                        0
                    }
                })
                .collect()
        })
        .collect();

    // Dimensions are always at least 40, so this cannot fail
    Grid::from_rows(cells).unwrap_or_else(|_| unreachable!("random seed dimensions are valid"))
}

/// Build the initial generation pair from an optional seed file.
///
/// A missing, unreadable, or malformed file is reported and the run
/// proceeds with a randomized configuration instead of aborting.
pub fn load_initial<R: Rng + ?Sized>(
    path: Option<&Path>,
    max_age: u8,
    rng: &mut R,
) -> Result<GenerationPair, EngineError> {
    let seed = match path {
        Some(path) => match load_seed_file(path) {
            Ok(grid) => grid,
            Err(err @ (EngineError::ResourceUnavailable { .. } | EngineError::MalformedGrid(_))) => {
                eprintln!("Warning: {}; falling back to a random configuration", err);
                random_seed(rng, max_age)
            }
            Err(err) => return Err(err),
        },
        None => random_seed(rng, max_age),
    };

    GenerationPair::new(seed)
}

/// Write a few example seed files for experimentation
pub fn create_example_seeds<P: AsRef<Path>>(output_dir: P) -> Result<(), EngineError> {
    let dir = output_dir.as_ref();
    let seeds: [(&str, &str); 3] = [
        (
            "blinker.txt",
            "# blinker: three cells in a row\n3\n3\n---\nXXX\n---\n",
        ),
        (
            "block.txt",
            "# block: 2x2 still life\n4\n4\n----\n-XX-\n-XX-\n----\n",
        ),
        (
            "glider.txt",
            "# glider\n5\n5\n--X--\nX-X--\n-XX--\n-----\n-----\n",
        ),
    ];

    for (name, content) in seeds {
        let path = dir.join(name);
        std::fs::write(&path, content).map_err(|source| EngineError::ResourceUnavailable {
            path,
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::rules::DEFAULT_MAX_AGE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_single_live_cell() {
        let grid = parse_seed("1\n1\nX").unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.get(0, 0).unwrap(), 1);
    }

    #[test]
    fn test_single_dead_cell() {
        let grid = parse_seed("1\n1\n-").unwrap();
        assert_eq!(grid.rows(), 1);
        assert_eq!(grid.cols(), 1);
        assert_eq!(grid.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_comments_and_body() {
        let content = "# seed: blinker\n# three cells in a row\n3\n3\n---\nXXX\n---\n";
        let grid = parse_seed(content).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.live_count(), 3);
        assert_eq!(grid.get(1, 0).unwrap(), 1);
        assert_eq!(grid.get(1, 1).unwrap(), 1);
        assert_eq!(grid.get(1, 2).unwrap(), 1);
        assert_eq!(grid.get(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_any_non_dash_is_alive() {
        let grid = parse_seed("1\n4\nx*7 ").unwrap();
        assert_eq!(grid.live_count(), 4);
    }

    #[test]
    fn test_short_body_row_is_malformed() {
        let err = parse_seed("2\n3\nXXX\nX-").unwrap_err();
        assert!(matches!(err, EngineError::MalformedGrid(_)));
    }

    #[test]
    fn test_missing_body_rows_is_malformed() {
        let err = parse_seed("3\n3\nXXX\n").unwrap_err();
        assert!(matches!(err, EngineError::MalformedGrid(_)));
    }

    #[test]
    fn test_bad_header_is_malformed() {
        assert!(parse_seed("").is_err());
        assert!(parse_seed("abc\n3\nXXX").is_err());
        assert!(parse_seed("3").is_err());
        assert!(parse_seed("0\n3\n").is_err());
    }

    #[test]
    fn test_missing_file_is_resource_unavailable() {
        let err = load_seed_file("no/such/seed.txt").unwrap_err();
        assert!(matches!(err, EngineError::ResourceUnavailable { .. }));
    }

    #[test]
    fn test_load_seed_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.txt");
        std::fs::write(&path, "# block\n2\n2\nXX\nXX\n").unwrap();

        let grid = load_seed_file(&path).unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.live_count(), 4);
    }

    #[test]
    fn test_random_seed_dimensions_in_range() {
        let mut rng = rng();
        for _ in 0..20 {
            let grid = random_seed(&mut rng, DEFAULT_MAX_AGE);
            assert!((40..=60).contains(&grid.rows()));
            assert!((40..=60).contains(&grid.cols()));
        }
    }

    #[test]
    fn test_random_seed_ages_in_range() {
        let mut rng = rng();
        let grid = random_seed(&mut rng, 5);
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                assert!(grid.get(row, col).unwrap() <= 5);
            }
        }
        // With ~half the cells alive a fully dead or fully live draw would
        // indicate a broken distribution
        assert!(grid.live_count() > 0);
        assert!(grid.live_count() < grid.rows() * grid.cols());
    }

    #[test]
    fn test_load_initial_falls_back_on_missing_file() {
        let mut rng = rng();
        let pair = load_initial(
            Some(Path::new("no/such/seed.txt")),
            DEFAULT_MAX_AGE,
            &mut rng,
        )
        .unwrap();
        assert!((40..=60).contains(&pair.current().rows()));
        assert!(pair.previous().is_empty());
    }

    #[test]
    fn test_load_initial_falls_back_on_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        std::fs::write(&path, "2\n2\nX\n").unwrap();

        let mut rng = rng();
        let pair = load_initial(Some(&path), DEFAULT_MAX_AGE, &mut rng).unwrap();
        assert!((40..=60).contains(&pair.current().rows()));
    }

    #[test]
    fn test_create_example_seeds() {
        let dir = tempdir().unwrap();
        create_example_seeds(dir.path()).unwrap();

        let blinker = load_seed_file(dir.path().join("blinker.txt")).unwrap();
        assert_eq!(blinker.rows(), 3);
        assert_eq!(blinker.live_count(), 3);

        let glider = load_seed_file(dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.live_count(), 5);
    }

    #[test]
    fn test_load_initial_pair_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.txt");
        std::fs::write(&path, "1\n2\nX-\n").unwrap();

        let mut rng = rng();
        let pair = load_initial(Some(&path), DEFAULT_MAX_AGE, &mut rng).unwrap();
        assert_eq!(pair.current().rows(), 1);
        assert_eq!(pair.current().cols(), 2);
        assert_eq!(pair.current().get(0, 0).unwrap(), 1);
        assert_eq!(pair.current().get(0, 1).unwrap(), 0);
        // Companion buffer starts zero-filled with the same dimensions
        assert!(pair.previous().is_empty());
        assert!(pair.previous().same_dimensions(pair.current()));
    }
}
