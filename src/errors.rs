// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StepError {
    #[error("missing option: --{0}")]
    MissingOption(&'static str),

    #[error("invalid organisation '{0}': must be a valid label value (<= 63 chars, alphanumeric at both ends, '-', '_' or '.' inside)")]
    InvalidOrganisation(String),

    #[error("failed to get secrets for selector: {selector}")]
    SecretList {
        selector: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("could not find a secret for selector {primary} or {fallback}")]
    NoSecretFound { primary: String, fallback: String },

    #[error("failed to get github token for organisation {organisation}")]
    TokenResolution {
        organisation: String,
        #[source]
        source: Box<StepError>,
    },

    #[error("failed to run command {command}")]
    LaunchFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command {command} exited unsuccessfully (exit code: {code:?})")]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Kubernetes client error: {0}")]
    Kube(#[from] kube::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, StepError>;
