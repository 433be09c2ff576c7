use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use goreleaser_step::errors::{Result, StepError};
use goreleaser_step::exec::{ExecutionRequest, ProcessLauncher};

/// A fake launcher that:
/// - records every request it was asked to execute
/// - succeeds, or fails with a configured exit code.
#[derive(Debug, Clone, Default)]
pub struct RecordingLauncher {
    executed: Arc<Mutex<Vec<ExecutionRequest>>>,
    exit_code: Option<i32>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report every execution as exiting with `code`.
    pub fn failing_with(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            ..Self::default()
        }
    }

    pub fn executed(&self) -> Vec<ExecutionRequest> {
        self.executed.lock().unwrap().clone()
    }
}

impl ProcessLauncher for RecordingLauncher {
    fn execute(
        &mut self,
        request: ExecutionRequest,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let executed = Arc::clone(&self.executed);
        let exit_code = self.exit_code;

        Box::pin(async move {
            let command = request.name().to_string();
            executed.lock().unwrap().push(request);

            match exit_code {
                None => Ok(()),
                Some(code) => Err(StepError::CommandFailed {
                    command,
                    code: Some(code),
                }),
            }
        })
    }
}
