// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod options;
pub mod release;
pub mod secrets;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::load_or_default;
use crate::exec::{ExecutionRequest, RealProcessLauncher};
use crate::release::{ReleaseStep, GITHUB_TOKEN_ENV};
use crate::secrets::KubeSecretStore;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (CLI values override the file)
/// - input validation, before any cluster or process activity
/// - the Kubernetes secret store
/// - the process launcher
pub async fn run(args: CliArgs) -> Result<()> {
    let mut cfg = load_or_default(args.step_config.as_deref())?;
    if let Some(ref dir) = args.bin_dir {
        cfg.release.bin_dir = Some(dir.clone());
    }

    let options = args.release_options();
    let inputs = options.validate(&cfg.release.timeout)?;
    debug!(organisation = %inputs.organisation, version = %inputs.version, "inputs validated");

    let store = KubeSecretStore::connect(args.namespace.as_deref()).await?;
    let launcher = RealProcessLauncher::new(cfg.release.bin_dir.clone());
    let mut step = ReleaseStep::new(cfg, store, launcher);

    if args.dry_run {
        let request = step.prepare(&options).await?;
        print_dry_run(&request);
        return Ok(());
    }

    step.run(&options).await?;
    info!("release complete");
    Ok(())
}

/// Print the command that would run. The token value is redacted.
fn print_dry_run(request: &ExecutionRequest) {
    println!("goreleaser-step dry-run");
    println!("  command: {request}");
    println!("  env:");
    for (key, value) in request.env() {
        if key == GITHUB_TOKEN_ENV {
            println!("    {key}=<redacted>");
        } else {
            println!("    {key}={value}");
        }
    }

    debug!("dry-run complete (no execution)");
}
