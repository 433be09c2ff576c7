// src/options.rs

//! Step inputs: the raw, possibly incomplete [`ReleaseOptions`] as parsed
//! from the CLI, and the validated [`ReleaseInputs`] the rest of the step
//! works with.

use crate::errors::{Result, StepError};

pub const ORGANISATION: &str = "organisation";
pub const REVISION: &str = "revision";
pub const BRANCH: &str = "branch";
pub const VERSION: &str = "version";
pub const BUILD_DATE: &str = "build-date";
pub const GO_VERSION: &str = "go-version";
pub const ROOT_PACKAGE: &str = "root-package";

/// Raw inputs. Any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseOptions {
    pub organisation: Option<String>,
    pub revision: Option<String>,
    pub branch: Option<String>,
    pub version: Option<String>,
    pub build_date: Option<String>,
    pub go_version: Option<String>,
    pub root_package: Option<String>,
    /// Not required: falls back to `[release].timeout`.
    pub timeout: Option<String>,
}

/// Inputs after presence checks. Every field is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseInputs {
    pub organisation: String,
    pub revision: String,
    pub branch: String,
    pub version: String,
    pub build_date: String,
    pub go_version: String,
    pub root_package: String,
    pub timeout: String,
}

impl ReleaseOptions {
    /// Check required inputs in a fixed order and fail on the first one that
    /// is unset or empty.
    ///
    /// `default_timeout` is used when no timeout was given.
    pub fn validate(&self, default_timeout: &str) -> Result<ReleaseInputs> {
        Ok(ReleaseInputs {
            organisation: required(&self.organisation, ORGANISATION)?,
            revision: required(&self.revision, REVISION)?,
            branch: required(&self.branch, BRANCH)?,
            version: required(&self.version, VERSION)?,
            build_date: required(&self.build_date, BUILD_DATE)?,
            go_version: required(&self.go_version, GO_VERSION)?,
            root_package: required(&self.root_package, ROOT_PACKAGE)?,
            timeout: self
                .timeout
                .as_deref()
                .filter(|t| !t.is_empty())
                .unwrap_or(default_timeout)
                .to_string(),
        })
    }
}

fn required(value: &Option<String>, name: &'static str) -> Result<String> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(StepError::MissingOption(name)),
    }
}
