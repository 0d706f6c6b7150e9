use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".sheetcalc.json", "sheetcalc.json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub newton: NewtonSettings,
}

/// Stopping rules for the Newton root finder
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct NewtonSettings {
    pub max_iterations: usize,
    /// Iteration stops once `|f'(p)|` drops below this.
    pub derivative_floor: f64,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            derivative_floor: 1e-10,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path wins; otherwise the nearest config file at or above
    /// `start_dir` is used; otherwise defaults.
    pub fn load(explicit: Option<&Path>, start_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::load_from_file(path);
        }

        match Self::find_config_file(start_dir) {
            Some(path) => {
                debug!("Found config file at {}", path.display());
                Self::load_from_file(&path)
            }
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.newton.max_iterations == 0 {
            return Err(Error::ConfigError(
                "newton.max_iterations must be at least 1".to_string(),
            ));
        }

        let floor = self.newton.derivative_floor;
        if !floor.is_finite() || floor < 0.0 {
            return Err(Error::ConfigError(format!(
                "newton.derivative_floor must be a finite non-negative number, got {floor}"
            )));
        }

        Ok(())
    }
}
