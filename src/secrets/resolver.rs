// src/secrets/resolver.rs

//! Two-phase token lookup.
//!
//! 1. `<owner_label>=<organisation>`: secrets created for a GitHub App
//!    installation owned by the organisation.
//! 2. The fallback selector: any plain git/GitHub service secret.
//!
//! The first secret (in listing order) with a non-empty token field wins. A
//! "not found" listing counts as empty; any other store error aborts.

use tracing::{debug, info, warn};

use crate::config::SecretSection;
use crate::errors::{Result, StepError};

use super::selector::organisation_selector;
use super::store::{ListError, SecretRecord, SecretStore};

pub struct TokenResolver<S> {
    store: S,
    owner_label: String,
    fallback_selector: String,
    token_field: String,
}

impl<S: SecretStore> TokenResolver<S> {
    pub fn new(store: S, section: &SecretSection) -> Self {
        Self {
            store,
            owner_label: section.owner_label.clone(),
            fallback_selector: section.fallback_selector.clone(),
            token_field: section.token_field.clone(),
        }
    }

    /// Find the token for `organisation`.
    pub async fn resolve(&self, organisation: &str) -> Result<String> {
        let selector = organisation_selector(&self.owner_label, organisation)?;

        if let Some(token) = self.find_token(&selector).await? {
            return Ok(token);
        }

        debug!(
            organisation,
            fallback = %self.fallback_selector,
            "no organisation-scoped token; trying fallback selector"
        );

        if let Some(token) = self.find_token(&self.fallback_selector).await? {
            return Ok(token);
        }

        Err(StepError::NoSecretFound {
            primary: selector,
            fallback: self.fallback_selector.clone(),
        })
    }

    async fn find_token(&self, selector: &str) -> Result<Option<String>> {
        let secrets = match self.store.list(selector).await {
            Ok(secrets) => secrets,
            Err(ListError::NotFound) => {
                debug!(selector, "secret store reported not found; treating as empty");
                Vec::new()
            }
            Err(ListError::Store(source)) => {
                return Err(StepError::SecretList {
                    selector: selector.to_string(),
                    source,
                });
            }
        };

        debug!(selector, count = secrets.len(), "listed secrets");
        Ok(first_token(&secrets, &self.token_field))
    }
}

/// First non-empty, UTF-8 value under `field`, in order.
pub fn first_token(secrets: &[SecretRecord], field: &str) -> Option<String> {
    for secret in secrets {
        let Some(bytes) = secret.field(field).filter(|b| !b.is_empty()) else {
            debug!(secret = %secret.name, field, "secret has no token; skipping");
            continue;
        };

        match std::str::from_utf8(bytes) {
            Ok(token) => {
                info!(secret = %secret.name, "using GitHub token from secret");
                return Some(token.to_string());
            }
            Err(_) => {
                warn!(secret = %secret.name, field, "token is not valid UTF-8; skipping");
            }
        }
    }
    None
}
