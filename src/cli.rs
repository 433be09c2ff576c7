// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The step inputs are all `Option<String>` on purpose: presence is checked
//! by [`crate::options::ReleaseOptions::validate`], so a missing input is
//! reported as `missing option: --<flag>` instead of a clap usage error.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::options::ReleaseOptions;

/// Command-line arguments for `goreleaser-step`.
///
/// `--version` is a step input (the version being released), so clap's
/// built-in version flag is disabled.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "goreleaser-step",
    about = "Resolve a GitHub token from a Kubernetes secret and run goreleaser.",
    long_about = None,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// GitHub organisation that owns the release token.
    #[arg(long, value_name = "ORG")]
    pub organisation: Option<String>,

    /// Git revision being released.
    #[arg(long, value_name = "SHA")]
    pub revision: Option<String>,

    /// Git branch being released.
    #[arg(long, value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Version being released.
    #[arg(long, value_name = "VERSION")]
    pub version: Option<String>,

    /// Build date exported as `BUILDDATE`.
    #[arg(long, value_name = "DATE")]
    pub build_date: Option<String>,

    /// Go toolchain version exported as `GOVERSION`.
    #[arg(long, value_name = "VERSION")]
    pub go_version: Option<String>,

    /// Root Go package exported as `ROOTPACKAGE`.
    #[arg(long, value_name = "PACKAGE")]
    pub root_package: Option<String>,

    /// Timeout passed through to `goreleaser --timeout`.
    ///
    /// Falls back to `[release].timeout` from the step config (default `200m`).
    #[arg(long, value_name = "DURATION")]
    pub timeout: Option<String>,

    /// Namespace to look up secrets in.
    ///
    /// Default: the namespace of the current kube context.
    #[arg(long, short = 'n', value_name = "NAMESPACE")]
    pub namespace: Option<String>,

    /// Directory of bundled binaries appended to the child's `PATH`.
    #[arg(long, value_name = "DIR")]
    pub bin_dir: Option<PathBuf>,

    /// Path to the step config file (TOML).
    ///
    /// Default: `goreleaser-step.toml` in the current working directory, if
    /// it exists.
    #[arg(long, value_name = "PATH")]
    pub step_config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GORELEASER_STEP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate inputs and resolve the token, print the command that would
    /// run, but don't execute it.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Extract the raw step inputs.
    pub fn release_options(&self) -> ReleaseOptions {
        ReleaseOptions {
            organisation: self.organisation.clone(),
            revision: self.revision.clone(),
            branch: self.branch.clone(),
            version: self.version.clone(),
            build_date: self.build_date.clone(),
            go_version: self.go_version.clone(),
            root_package: self.root_package.clone(),
            timeout: self.timeout.clone(),
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
