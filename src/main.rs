//! CLI for the aging Game of Life simulator

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_aging::{
    config::{CliOverrides, Settings},
    engine::{create_example_seeds, load_seed_file},
    simulation::RunOutcome,
    start_simulation,
    utils::{AsciiFrame, ColorOutput, GridFormatter},
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "game_of_life_aging")]
#[command(about = "Aging Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation until stability or the generation cap
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed description file (overrides config; missing file falls
        /// back to a random configuration)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Age ceiling for live cells (overrides config)
        #[arg(short = 'a', long)]
        max_age: Option<u8>,

        /// Generation cap (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Milliseconds between generations, 0 for unpaced (overrides config)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Snapshot directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print every generation instead of only the final state
        #[arg(long)]
        show_frames: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and seed files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Parse a seed file and print it with the age palette
    Show {
        /// Seed description file
        #[arg(short, long)]
        seed: PathBuf,

        /// Age ceiling used for the palette
        #[arg(short = 'a', long, default_value_t = game_of_life_aging::engine::DEFAULT_MAX_AGE)]
        max_age: u8,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            seed,
            max_age,
            generations,
            interval,
            output,
            show_frames,
            verbose,
        } => run_command(
            config, seed, max_age, generations, interval, output, show_frames, verbose,
        ),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { seed, max_age } => show_command(seed, max_age),
    }
}

fn print_welcome() {
    println!(
        "Welcome to the Game of Life, a simulation of the lifecycle of a bacteria colony."
    );
    println!("Cells live and die by the following rules:");
    println!();
    println!("\tA cell with 1 or fewer neighbors dies of loneliness");
    println!("\tLocations with 2 neighbors remain stable");
    println!("\tLocations with 3 neighbors will spontaneously create life");
    println!("\tLocations with 4 or more neighbors die of overcrowding");
    println!();
    println!("New cells are dark and fade as they age.");
    println!();
}

#[allow(clippy::too_many_arguments)]
fn run_command(
    config_path: PathBuf,
    seed: Option<PathBuf>,
    max_age: Option<u8>,
    generations: Option<usize>,
    interval: Option<u64>,
    output: Option<PathBuf>,
    show_frames: bool,
    verbose: bool,
) -> Result<()> {
    print_welcome();

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        seed_file: seed,
        max_age,
        max_generations: generations,
        step_interval_ms: interval,
        output_dir: output,
    };
    settings.merge_with_cli(&cli_overrides);
    settings.validate().context("Configuration validation failed")?;

    if verbose {
        println!("Configuration:");
        println!("  Max age: {}", settings.simulation.max_age);
        println!("  Max generations: {}", settings.simulation.max_generations);
        println!("  Interval: {} ms", settings.simulation.step_interval_ms);
        match settings.input.seed_file {
            Some(ref path) => println!("  Seed file: {}", path.display()),
            None => println!("  Seed file: none (random configuration)"),
        }
        println!();
    }

    let mut simulation = start_simulation(&settings).context("Failed to start simulation")?;
    let grid = simulation.current();
    println!(
        "{}",
        ColorOutput::info(&format!(
            "Starting {}x{} colony with {} live cells",
            grid.rows(),
            grid.cols(),
            grid.live_count()
        ))
    );

    let mut frame = AsciiFrame::new(grid.rows(), grid.cols(), settings.simulation.max_age);
    let pause = Duration::from_millis(settings.simulation.step_interval_ms);
    let start_time = Instant::now();

    let outcome = simulation.run(settings.simulation.max_generations, |sim| {
        sim.render_to(&mut frame);
        if show_frames {
            println!("Generation {}:", sim.generation());
            print!("{}", frame);
            println!();
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
        Ok(())
    })?;

    let elapsed = start_time.elapsed();
    match outcome {
        RunOutcome::Stable { generation } => {
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Stability reached after {} generations, quitting!",
                    generation
                ))
            );
        }
        RunOutcome::GenerationLimit { generation } => {
            println!(
                "{}",
                ColorOutput::info(&format!(
                    "Generation cap reached after {} generations",
                    generation
                ))
            );
        }
    }
    println!("Ran for {:.3}s", elapsed.as_secs_f64());

    println!("Final state:");
    print!(
        "{}",
        GridFormatter::format_grid_compact(simulation.current(), settings.simulation.max_age)
    );
    println!(
        "Live cells: {}",
        simulation.current().live_count()
    );

    let snapshot = GridFormatter::save_snapshot(
        simulation.current(),
        simulation.generation(),
        settings.simulation.max_age,
        &settings.output.snapshot_directory,
        settings.output.format,
    )
    .context("Failed to save final snapshot")?;
    println!(
        "{}",
        ColorOutput::success(&format!("Snapshot saved to {}", snapshot.display()))
    );

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let seeds_dir = directory.join("input/seeds");
    let output_dir = directory.join("output/snapshots");

    for dir in [&config_dir, &seeds_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_seeds(&seeds_dir).context("Failed to create example seeds")?;
    println!("Created example seeds in: {}", seeds_dir.display());

    println!("{}", ColorOutput::success("Setup complete!"));
    println!();
    println!("Next steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your seed files to {}", seeds_dir.display());
    println!("3. Run: cargo run -- run --seed input/seeds/glider.txt --show-frames");

    Ok(())
}

fn show_command(seed_path: PathBuf, max_age: u8) -> Result<()> {
    let grid = load_seed_file(&seed_path)
        .with_context(|| format!("Failed to load seed from {}", seed_path.display()))?;

    println!("Seed {} ({}x{}):", seed_path.display(), grid.rows(), grid.cols());
    println!("{}", GridFormatter::format_grid_with_coords(&grid, max_age));
    println!("Live cells: {}", grid.live_count());
    println!(
        "Density: {:.1}%",
        (grid.live_count() as f64 / (grid.rows() * grid.cols()) as f64) * 100.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_aging",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--interval",
            "0",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/seeds/blinker.txt").exists());
    }

    #[test]
    fn test_show_command() {
        let temp_dir = tempdir().unwrap();
        let seed_path = temp_dir.path().join("seed.txt");
        std::fs::write(&seed_path, "1\n1\nX\n").unwrap();

        assert!(show_command(seed_path, 12).is_ok());
    }
}
