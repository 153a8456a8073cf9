//! Configuration for the reverse solver
//!
//! The step count is not configured here: it travels in the target file
//! header together with the board dimensions.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub bounds: BoundsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub target_state_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundsConfig {
    /// Upper bound on live cells in the discovered initial frame.
    /// `None` leaves the initial frame unbounded.
    pub max_alive_initial: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_states: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig {
                target_state_file: PathBuf::from("input/target_states/blinker.txt"),
            },
            bounds: BoundsConfig {
                max_alive_initial: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_states: false,
                output_directory: PathBuf::from("output/solutions"),
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
        if !self.input.target_state_file.exists() {
            anyhow::bail!(
                "Target state file does not exist: {}",
                self.input.target_state_file.display()
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref target_file) = cli_overrides.target_file {
            self.input.target_state_file = target_file.clone();
        }
        if let Some(max_alive) = cli_overrides.max_alive {
            self.bounds.max_alive_initial = Some(max_alive);
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub target_file: Option<PathBuf>,
    pub max_alive: Option<usize>,
    pub output_dir: Option<PathBuf>,
}
