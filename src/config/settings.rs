//! Configuration settings for the aging Game of Life simulator

use crate::engine::DEFAULT_MAX_AGE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Age ceiling for a live cell; ages saturate here and freeze
    pub max_age: u8,
    /// Hard cap on generations for one run
    pub max_generations: usize,
    /// Pause between generations; 0 means run unpaced
    pub step_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Seed description file; omit to start from a random configuration
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub snapshot_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                max_age: DEFAULT_MAX_AGE,
                max_generations: 1000,
                step_interval_ms: 100,
            },
            input: InputConfig { seed_file: None },
            output: OutputConfig {
                format: OutputFormat::Text,
                snapshot_directory: PathBuf::from("output/snapshots"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.max_age == 0 {
            anyhow::bail!("max_age must be at least 1");
        }

        if self.simulation.max_generations == 0 {
            anyhow::bail!("max_generations must be at least 1");
        }

        // A missing seed file is not an error: the loader falls back to a
        // random configuration at run time.
        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref seed_file) = cli_overrides.seed_file {
            self.input.seed_file = Some(seed_file.clone());
        }
        if let Some(max_age) = cli_overrides.max_age {
            self.simulation.max_age = max_age;
        }
        if let Some(max_generations) = cli_overrides.max_generations {
            self.simulation.max_generations = max_generations;
        }
        if let Some(interval) = cli_overrides.step_interval_ms {
            self.simulation.step_interval_ms = interval;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.snapshot_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub seed_file: Option<PathBuf>,
    pub max_age: Option<u8>,
    pub max_generations: Option<usize>,
    pub step_interval_ms: Option<u64>,
    pub output_dir: Option<PathBuf>,
}
