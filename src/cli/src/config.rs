use std::{fs, io, path::Path};

use color_eyre::eyre::{Context, Result};
use cube_core::{DEFAULT_SCRAMBLE_LENGTH, TwophaseOptions};
use log::debug;
use serde::{Deserialize, Serialize};

/// Settings read from the TOML configuration file. Every field is optional
/// in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub scramble_length: usize,
    /// Seed for scrambles. Scrambles are random when unset.
    pub seed: Option<u64>,
    /// Print facelets with ANSI colors.
    pub color: bool,
    pub solver: SolverConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub program: String,
    pub max_length: u32,
    pub cache_dir: Option<String>,
}

impl Default for CubeConfig {
    fn default() -> Self {
        CubeConfig {
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
            color: true,
            solver: SolverConfig::default(),
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        let defaults = TwophaseOptions::default();
        SolverConfig {
            program: defaults.program.display().to_string(),
            max_length: defaults.max_length,
            cache_dir: None,
        }
    }
}

impl SolverConfig {
    pub fn twophase_options(&self) -> TwophaseOptions {
        TwophaseOptions {
            program: self.program.clone().into(),
            max_length: self.max_length,
            cache_dir: self.cache_dir.clone().map(Into::into),
        }
    }
}

impl CubeConfig {
    /// Read the configuration at `path`, falling back to the defaults if
    /// there is no such file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(target: "config", "No configuration at {}, using defaults", path.display());
                return Ok(CubeConfig::default());
            }
            Err(e) => {
                return Err(e).wrap_err_with(|| format!("Failed to read {}", path.display()));
            }
        };

        let config = toml::from_str::<CubeConfig>(&text)
            .wrap_err_with(|| format!("Failed to parse {}", path.display()))?;
        debug!(target: "config", "Loaded configuration: {config:?}");
        Ok(config)
    }
}
