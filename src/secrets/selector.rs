// src/secrets/selector.rs

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::{Result, StepError};

/// Kubernetes label values are at most this long.
pub const MAX_LABEL_VALUE_LEN: usize = 63;

static LABEL_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([-A-Za-z0-9_.]*[A-Za-z0-9])?$").expect("label value regex is valid")
});

/// Reject organisation names that can't be used verbatim as a label value.
///
/// This keeps selector operators (`,`, `=`, `!`, whitespace, parentheses)
/// out of the query built by [`organisation_selector`].
pub fn validate_organisation(organisation: &str) -> Result<()> {
    if organisation.len() > MAX_LABEL_VALUE_LEN || !LABEL_VALUE.is_match(organisation) {
        return Err(StepError::InvalidOrganisation(organisation.to_string()));
    }
    Ok(())
}

/// `<owner_label>=<organisation>`, after validating the organisation.
pub fn organisation_selector(owner_label: &str, organisation: &str) -> Result<String> {
    validate_organisation(organisation)?;
    Ok(format!("{owner_label}={organisation}"))
}
