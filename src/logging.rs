// src/logging.rs

//! Logging setup for `goreleaser-step` using `tracing` + `tracing-subscriber`.
//!
//! Priority for determining the filter:
//! 1. `--log-level` CLI flag (if provided)
//! 2. `GORELEASER_STEP_LOG` environment variable, either a plain level
//!    ("info", "debug") or a full `EnvFilter` directive string
//!    ("goreleaser_step=debug,kube_client=info")
//! 3. default to `info`
//!
//! Logs go to STDERR. goreleaser's own output is forwarded on the inherited
//! stdout/stderr untouched.

use anyhow::{anyhow, Result};
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::LogLevel;

/// Environment variable consulted when `--log-level` is not given.
pub const LOG_ENV_VAR: &str = "GORELEASER_STEP_LOG";

/// Crates that are chatty at `debug`; capped unless the user asks for them
/// explicitly via a directive string.
const NOISY_TARGETS: &[&str] = &["kube_client", "hyper", "hyper_util", "tower", "rustls"];

/// Initialise global logging subscriber.
///
/// Safe to call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();
    let filter = build_filter(cli_level, env_value.as_deref())?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("initialising tracing subscriber: {e}"))?;

    Ok(())
}

/// Resolve the effective filter from the CLI flag and the raw value of
/// [`LOG_ENV_VAR`].
pub fn build_filter(cli_level: Option<LogLevel>, env_value: Option<&str>) -> Result<EnvFilter> {
    if let Some(lvl) = cli_level {
        return Ok(EnvFilter::new(directives_for(level_from_log_level(lvl))));
    }

    match env_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match parse_level_str(raw) {
            Some(level) => Ok(EnvFilter::new(directives_for(level))),
            None => EnvFilter::try_new(raw)
                .map_err(|e| anyhow!("invalid {LOG_ENV_VAR} value '{raw}': {e}")),
        },
        None => Ok(EnvFilter::new(directives_for(Level::INFO))),
    }
}

fn directives_for(level: Level) -> String {
    let level = level.as_str().to_lowercase();
    let mut directives = vec![level];
    directives.extend(NOISY_TARGETS.iter().map(|t| format!("{t}=warn")));
    directives.join(",")
}

fn level_from_log_level(lvl: LogLevel) -> Level {
    match lvl {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

fn parse_level_str(s: &str) -> Option<Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" | "warning" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        "trace" => Some(Level::TRACE),
        _ => None,
    }
}
