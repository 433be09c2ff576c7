// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_COMMAND: &str = "goreleaser";
pub const DEFAULT_GORELEASER_CONFIG: &str = ".goreleaser.yml";
pub const DEFAULT_RELEASE_NOTES: &str = "./changelog.md";
pub const DEFAULT_TIMEOUT: &str = "200m";

pub const DEFAULT_OWNER_LABEL: &str = "jenkins.io/githubapp-owner";
pub const DEFAULT_FALLBACK_SELECTOR: &str = "jenkins.io/kind=git,jenkins.io/service-kind=github";
pub const DEFAULT_TOKEN_FIELD: &str = "password";

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [release]
/// command = "goreleaser"
/// config_file = ".goreleaser.yml"
/// release_notes = "./changelog.md"
/// timeout = "200m"
///
/// [secret]
/// owner_label = "jenkins.io/githubapp-owner"
/// fallback_selector = "jenkins.io/kind=git,jenkins.io/service-kind=github"
/// token_field = "password"
/// ```
///
/// All sections are optional and default to the values above.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawStepConfig {
    #[serde(default)]
    pub release: ReleaseSection,

    #[serde(default)]
    pub secret: SecretSection,
}

/// Validated configuration. Construct via `StepConfig::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct StepConfig {
    pub release: ReleaseSection,
    pub secret: SecretSection,
}

impl StepConfig {
    pub(crate) fn new_unchecked(release: ReleaseSection, secret: SecretSection) -> Self {
        Self { release, secret }
    }
}

impl Default for StepConfig {
    fn default() -> Self {
        Self::new_unchecked(ReleaseSection::default(), SecretSection::default())
    }
}

/// `[release]` section: how goreleaser is invoked.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseSection {
    /// Binary to run.
    #[serde(default = "default_command")]
    pub command: String,

    /// Passed as `--config=<value>`.
    #[serde(default = "default_goreleaser_config")]
    pub config_file: String,

    /// Passed as `--release-notes=<value>`.
    #[serde(default = "default_release_notes")]
    pub release_notes: String,

    /// Used when `--timeout` is not given on the command line.
    #[serde(default = "default_timeout")]
    pub timeout: String,

    /// Directory of bundled binaries appended to the child's `PATH`.
    ///
    /// If `None`, `$JX_HOME/bin` or `~/.jx/bin` is used.
    #[serde(default)]
    pub bin_dir: Option<PathBuf>,
}

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

fn default_goreleaser_config() -> String {
    DEFAULT_GORELEASER_CONFIG.to_string()
}

fn default_release_notes() -> String {
    DEFAULT_RELEASE_NOTES.to_string()
}

fn default_timeout() -> String {
    DEFAULT_TIMEOUT.to_string()
}

impl Default for ReleaseSection {
    fn default() -> Self {
        Self {
            command: default_command(),
            config_file: default_goreleaser_config(),
            release_notes: default_release_notes(),
            timeout: default_timeout(),
            bin_dir: None,
        }
    }
}

/// `[secret]` section: where the GitHub token lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretSection {
    /// Label key whose value is the organisation name.
    #[serde(default = "default_owner_label")]
    pub owner_label: String,

    /// Selector tried when no organisation-scoped secret has a token.
    #[serde(default = "default_fallback_selector")]
    pub fallback_selector: String,

    /// Data key holding the token.
    #[serde(default = "default_token_field")]
    pub token_field: String,
}

fn default_owner_label() -> String {
    DEFAULT_OWNER_LABEL.to_string()
}

fn default_fallback_selector() -> String {
    DEFAULT_FALLBACK_SELECTOR.to_string()
}

fn default_token_field() -> String {
    DEFAULT_TOKEN_FIELD.to_string()
}

impl Default for SecretSection {
    fn default() -> Self {
        Self {
            owner_label: default_owner_label(),
            fallback_selector: default_fallback_selector(),
            token_field: default_token_field(),
        }
    }
}
