// src/secrets/store.rs

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use k8s_openapi::api::core::v1::Secret;
use thiserror::Error;

/// The parts of a secret the resolver cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretRecord {
    pub name: String,
    pub data: BTreeMap<String, Vec<u8>>,
}

impl SecretRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Raw bytes stored under `key`, if any.
    pub fn field(&self, key: &str) -> Option<&[u8]> {
        self.data.get(key).map(Vec::as_slice)
    }
}

impl From<Secret> for SecretRecord {
    fn from(secret: Secret) -> Self {
        let data = secret
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|(key, bytes)| (key, bytes.0))
            .collect();

        Self {
            name: secret.metadata.name.unwrap_or_default(),
            data,
        }
    }
}

/// Why a list call produced no secrets.
#[derive(Debug, Error)]
pub enum ListError {
    /// The store reported "not found". The resolver treats this as an empty
    /// listing.
    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type ListFuture<'a> =
    Pin<Box<dyn Future<Output = std::result::Result<Vec<SecretRecord>, ListError>> + Send + 'a>>;

/// Read-only access to secrets in one namespace.
///
/// Production code uses [`super::KubeSecretStore`]; tests provide a fake
/// that serves canned listings per selector.
pub trait SecretStore: Send + Sync {
    /// List secrets matching a label selector, in the store's order.
    fn list<'a>(&'a self, selector: &'a str) -> ListFuture<'a>;
}
