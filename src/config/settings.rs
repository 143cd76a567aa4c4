//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Largest grid the simulator accepts, in cells
pub const MAX_CELLS: usize = 1 << 24;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Probability that a cell starts alive when randomizing
    pub density: f64,
    pub tick_interval_ms: u64,
    /// Stop after this many generations; run until stopped when absent
    #[serde(default)]
    pub max_generations: Option<u64>,
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub style: DisplayStyle,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    Compact,
    Coords,
    /// Print only the generation summary line
    Quiet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig { rows: 50, cols: 50 },
            simulation: SimulationConfig {
                density: 0.25,
                tick_interval_ms: 100,
                max_generations: Some(100),
            },
            output: OutputConfig {
                style: DisplayStyle::Compact,
                clear_screen: true,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
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
        if self.grid.rows == 0 || self.grid.cols == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.rows,
                self.grid.cols
            );
        }

        match self.grid.rows.checked_mul(self.grid.cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => anyhow::bail!(
                "Grid {}x{} exceeds the limit of {} cells",
                self.grid.rows,
                self.grid.cols,
                MAX_CELLS
            ),
        }

        if !(0.0..=1.0).contains(&self.simulation.density) {
            anyhow::bail!(
                "Density must be between 0 and 1, got {}",
                self.simulation.density
            );
        }

        if self.simulation.max_generations == Some(0) {
            anyhow::bail!("Maximum generations must be positive when set");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(cols) = cli_overrides.cols {
            self.grid.cols = cols;
        }
        if let Some(density) = cli_overrides.density {
            self.simulation.density = density;
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(generations) = cli_overrides.max_generations {
            self.simulation.max_generations = Some(generations);
        }
        if let Some(style) = cli_overrides.style {
            self.output.style = style;
        }
        if cli_overrides.no_clear {
            self.output.clear_screen = false;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub density: Option<f64>,
    pub tick_interval_ms: Option<u64>,
    pub max_generations: Option<u64>,
    pub style: Option<DisplayStyle>,
    pub no_clear: bool,
}
