// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawStepConfig, StepConfig};
use crate::errors::Result;

/// Load a configuration file from a given path and return the raw
/// `RawStepConfig`.
///
/// This only performs TOML deserialization; use [`load_and_validate`] to get
/// a checked `StepConfig`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawStepConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawStepConfig = toml::from_str(&contents)?;

    Ok(config)
}

/// Load a configuration file from path and run validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<StepConfig> {
    let raw_config = load_from_path(&path)?;
    let config = StepConfig::try_from(raw_config)?;
    Ok(config)
}

/// Resolve the effective config.
///
/// - An explicit path must exist and be valid.
/// - Without one, [`default_config_path`] is used if it exists; otherwise
///   built-in defaults apply.
pub fn load_or_default(explicit: Option<&Path>) -> Result<StepConfig> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading step config");
        return load_and_validate(path);
    }

    let fallback = default_config_path();
    if fallback.is_file() {
        debug!(path = %fallback.display(), "loading step config from default location");
        load_and_validate(&fallback)
    } else {
        debug!("no step config file; using built-in defaults");
        Ok(StepConfig::default())
    }
}

/// `goreleaser-step.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("goreleaser-step.toml")
}
