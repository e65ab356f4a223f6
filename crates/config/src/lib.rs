//! Configuration models and loaders for launch angle sweeps.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// One launch angle sweep, typically one rendered figure.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SweepConfig {
    pub name: String,
    /// Symmetric fractional band applied to the altitude ratio.
    pub tol_alpha: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(flatten)]
    pub axis: SweepAxisConfig,
    /// Figure rendered after the sweep runs, relative to the working directory.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

/// Which ratio is held fixed while the other is swept.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(tag = "axis")]
pub enum SweepAxisConfig {
    /// Sweep the altitude ratio at a fixed velocity ratio.
    #[serde(rename = "altitude")]
    Altitude { ve_v0: f64 },
    /// Sweep the velocity ratio at a fixed altitude ratio.
    #[serde(rename = "velocity")]
    Velocity { alpha: f64 },
}

fn default_samples() -> usize {
    20
}

/// Failures while reading sweep definitions.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read sweep definitions: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sweep list (YAML): {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid sweep definition (TOML): {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load sweep definitions from `path`.
///
/// A `.toml` file holds one sweep, any other file is read as a YAML list of sweeps, and a
/// directory contributes every `.toml` file inside it in path order (other files are ignored).
pub fn load_sweeps<P: AsRef<Path>>(path: P) -> Result<Vec<SweepConfig>, ConfigError> {
    let path = path.as_ref();
    if path.is_dir() {
        load_sweep_dir(path)
    } else if is_toml(path) {
        Ok(vec![read_sweep_toml(path)?])
    } else {
        Ok(serde_yaml::from_reader(File::open(path)?)?)
    }
}

/// Parse a single sweep definition from TOML text.
pub fn parse_sweep_toml(contents: &str) -> Result<SweepConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

fn read_sweep_toml(path: &Path) -> Result<SweepConfig, ConfigError> {
    parse_sweep_toml(&fs::read_to_string(path)?)
}

fn load_sweep_dir(dir: &Path) -> Result<Vec<SweepConfig>, ConfigError> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if is_toml(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    paths.iter().map(|path| read_sweep_toml(path)).collect()
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}
