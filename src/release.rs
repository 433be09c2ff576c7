// src/release.rs

//! The release step: validate inputs, resolve the GitHub token, run
//! goreleaser.

use tracing::info;

use crate::config::{ReleaseSection, StepConfig};
use crate::errors::{Result, StepError};
use crate::exec::{ExecutionRequest, ProcessLauncher};
use crate::options::{ReleaseInputs, ReleaseOptions};
use crate::secrets::{SecretStore, TokenResolver};

pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const REVISION_ENV: &str = "REV";
pub const BRANCH_ENV: &str = "BRANCH";
pub const VERSION_ENV: &str = "VERSION";
pub const BUILD_DATE_ENV: &str = "BUILDDATE";
pub const GO_VERSION_ENV: &str = "GOVERSION";
pub const ROOT_PACKAGE_ENV: &str = "ROOTPACKAGE";

/// Build the goreleaser invocation for validated inputs and a token.
///
/// Arguments are, in order:
/// `release --config=<cfg> --rm-dist --release-notes=<notes> --skip-validate --timeout <timeout>`.
pub fn build_release_request(
    release: &ReleaseSection,
    inputs: &ReleaseInputs,
    token: &str,
) -> ExecutionRequest {
    ExecutionRequest::new(release.command.as_str())
        .with_arg("release")
        .with_arg(format!("--config={}", release.config_file))
        .with_arg("--rm-dist")
        .with_arg(format!("--release-notes={}", release.release_notes))
        .with_arg("--skip-validate")
        .with_arg("--timeout")
        .with_arg(inputs.timeout.as_str())
        .with_env(GITHUB_TOKEN_ENV, token)
        .with_env(REVISION_ENV, inputs.revision.as_str())
        .with_env(BRANCH_ENV, inputs.branch.as_str())
        .with_env(VERSION_ENV, inputs.version.as_str())
        .with_env(BUILD_DATE_ENV, inputs.build_date.as_str())
        .with_env(GO_VERSION_ENV, inputs.go_version.as_str())
        .with_env(ROOT_PACKAGE_ENV, inputs.root_package.as_str())
}

/// Wires a secret store and a process launcher together.
pub struct ReleaseStep<S, L> {
    config: StepConfig,
    resolver: TokenResolver<S>,
    launcher: L,
}

impl<S: SecretStore, L: ProcessLauncher> ReleaseStep<S, L> {
    pub fn new(config: StepConfig, store: S, launcher: L) -> Self {
        let resolver = TokenResolver::new(store, &config.secret);
        Self {
            config,
            resolver,
            launcher,
        }
    }

    /// Validate and resolve, returning the request that [`Self::run`] would
    /// execute. Nothing is launched.
    pub async fn prepare(&self, options: &ReleaseOptions) -> Result<ExecutionRequest> {
        let inputs = options.validate(&self.config.release.timeout)?;

        let token = self
            .resolver
            .resolve(&inputs.organisation)
            .await
            .map_err(|source| StepError::TokenResolution {
                organisation: inputs.organisation.clone(),
                source: Box::new(source),
            })?;

        Ok(build_release_request(&self.config.release, &inputs, &token))
    }

    /// Run the full step.
    pub async fn run(&mut self, options: &ReleaseOptions) -> Result<()> {
        let request = self.prepare(options).await?;
        info!(command = %request, "running release");
        self.launcher.execute(request).await
    }
}
