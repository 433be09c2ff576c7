// src/exec/environment.rs

//! Child search-path handling.
//!
//! The child inherits the parent environment as the OS hands it over (no
//! re-parsing, no UTF-8 round trip); request overrides are layered on top by
//! the launcher. The only variable computed here is `PATH`.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::errors::Result;

/// Location of bundled binaries: `$JX_HOME/bin`, else `~/.jx/bin`.
pub fn default_bin_dir() -> Option<PathBuf> {
    match std::env::var_os("JX_HOME") {
        Some(home) if !home.is_empty() => Some(PathBuf::from(home).join("bin")),
        _ => dirs::home_dir().map(|home| home.join(".jx").join("bin")),
    }
}

/// `current` with `bin_dir` appended, or `None` if it is already listed.
pub fn path_with_binary(current: Option<&OsStr>, bin_dir: &Path) -> Result<Option<OsString>> {
    let mut entries: Vec<PathBuf> = current
        .map(|p| std::env::split_paths(p).collect())
        .unwrap_or_default();

    if entries.iter().any(|entry| entry == bin_dir) {
        return Ok(None);
    }
    entries.push(bin_dir.to_path_buf());

    let joined = std::env::join_paths(entries)
        .with_context(|| format!("adding {} to PATH", bin_dir.display()))?;
    Ok(Some(joined))
}
