// src/secrets/mod.rs

//! GitHub token lookup in the cluster's secret store.
//!
//! - [`store`] defines the `SecretStore` seam and the record type it yields.
//! - [`kube_store`] is the production store backed by the Kubernetes API.
//! - [`selector`] builds and checks label selectors.
//! - [`resolver`] implements the organisation-then-fallback lookup.

pub mod kube_store;
pub mod resolver;
pub mod selector;
pub mod store;

pub use kube_store::KubeSecretStore;
pub use resolver::{first_token, TokenResolver};
pub use selector::{organisation_selector, validate_organisation};
pub use store::{ListError, ListFuture, SecretRecord, SecretStore};
