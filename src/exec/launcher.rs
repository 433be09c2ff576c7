// src/exec/launcher.rs

//! Running an [`ExecutionRequest`] as a child process.

use std::ffi::OsStr;
use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};

use crate::errors::{Result, StepError};

use super::environment::{default_bin_dir, path_with_binary};
use super::request::ExecutionRequest;

/// Trait abstracting how a request is executed.
///
/// Production code uses [`RealProcessLauncher`]; tests can provide their own
/// implementation that records requests instead of spawning processes.
pub trait ProcessLauncher: Send {
    /// Run the request to completion.
    fn execute(
        &mut self,
        request: ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Spawns the request with inherited stdio and waits for it to exit.
#[derive(Debug, Clone, Default)]
pub struct RealProcessLauncher {
    bin_dir: Option<PathBuf>,
}

impl RealProcessLauncher {
    /// `bin_dir` is appended to the child's `PATH`; if `None`,
    /// [`default_bin_dir`] is used.
    pub fn new(bin_dir: Option<PathBuf>) -> Self {
        Self { bin_dir }
    }

    /// Build the child command for `request`.
    ///
    /// The child inherits the parent environment untouched; `request.env()`
    /// overrides same-named variables, and the bin dir is appended to the
    /// child's `PATH` (taken from the overrides if set there, else from
    /// `parent_path`). The parent's own environment is never modified.
    pub fn command_for(
        &self,
        request: &ExecutionRequest,
        parent_path: Option<&OsStr>,
    ) -> Result<Command> {
        let mut cmd = Command::new(request.name());
        cmd.args(request.args())
            .envs(request.env())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let current_path = request
            .env()
            .get("PATH")
            .map(OsStr::new)
            .or(parent_path);

        let bin_dir = self.bin_dir.clone().or_else(default_bin_dir);
        if let Some(dir) = &bin_dir {
            if let Some(path) = path_with_binary(current_path, dir)? {
                debug!(path = ?path, "augmented child PATH");
                cmd.env("PATH", path);
            }
        }

        Ok(cmd)
    }
}

impl ProcessLauncher for RealProcessLauncher {
    fn execute(
        &mut self,
        request: ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        Box::pin(async move {
            let parent_path = std::env::var_os("PATH");
            let mut cmd = self.command_for(&request, parent_path.as_deref())?;

            info!(
                command = %request.name(),
                args = ?request.args(),
                env_overrides = ?request.env().keys().collect::<Vec<_>>(),
                "starting process"
            );

            let status = cmd.status().await.map_err(|source| StepError::LaunchFailed {
                command: request.name().to_string(),
                source,
            })?;

            let code = status.code();
            info!(
                command = %request.name(),
                exit_code = ?code,
                success = status.success(),
                "process exited"
            );

            if status.success() {
                Ok(())
            } else {
                Err(StepError::CommandFailed {
                    command: request.name().to_string(),
                    code,
                })
            }
        })
    }
}
