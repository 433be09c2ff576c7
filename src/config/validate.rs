// src/config/validate.rs

use crate::config::model::{RawStepConfig, ReleaseSection, SecretSection, StepConfig};
use crate::errors::{Result, StepError};

impl TryFrom<RawStepConfig> for StepConfig {
    type Error = StepError;

    fn try_from(raw: RawStepConfig) -> std::result::Result<Self, Self::Error> {
        validate_release_section(&raw.release)?;
        validate_secret_section(&raw.secret)?;
        Ok(StepConfig::new_unchecked(raw.release, raw.secret))
    }
}

fn validate_release_section(section: &ReleaseSection) -> Result<()> {
    non_empty("release", "command", &section.command)?;
    non_empty("release", "config_file", &section.config_file)?;
    non_empty("release", "release_notes", &section.release_notes)?;
    non_empty("release", "timeout", &section.timeout)?;

    if let Some(dir) = &section.bin_dir {
        if dir.as_os_str().is_empty() {
            return Err(StepError::ConfigError(
                "[release].bin_dir must not be empty when set".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_secret_section(section: &SecretSection) -> Result<()> {
    non_empty("secret", "owner_label", &section.owner_label)?;
    non_empty("secret", "fallback_selector", &section.fallback_selector)?;
    non_empty("secret", "token_field", &section.token_field)?;

    // The organisation selector is `<owner_label>=<organisation>`, so the
    // label key itself must not carry an operator.
    if section
        .owner_label
        .contains(|c: char| matches!(c, '=' | '!' | ',' | ' '))
    {
        return Err(StepError::ConfigError(format!(
            "[secret].owner_label must be a plain label key (got '{}')",
            section.owner_label
        )));
    }
    Ok(())
}

fn non_empty(section: &str, key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StepError::ConfigError(format!(
            "[{section}].{key} must not be empty"
        )));
    }
    Ok(())
}
