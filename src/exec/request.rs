// src/exec/request.rs

use std::collections::BTreeMap;
use std::fmt;

/// A command to run: program name, ordered arguments, and environment
/// overrides applied on top of the parent environment.
///
/// Built once with the `with_*` methods, then handed to a
/// [`super::ProcessLauncher`] by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
    name: String,
    args: Vec<String>,
    env: BTreeMap<String, String>,
}

impl ExecutionRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Set an override. A later call for the same key wins.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }
}

/// Renders the command line only; environment values are never printed.
impl fmt::Display for ExecutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
