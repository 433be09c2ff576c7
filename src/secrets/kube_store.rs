// src/secrets/kube_store.rs

use anyhow::anyhow;
use k8s_openapi::api::core::v1::Secret;
use kube::api::{Api, ListParams};
use kube::Client;
use tracing::{debug, info};

use crate::errors::Result;

use super::store::{ListError, ListFuture, SecretRecord, SecretStore};

/// `SecretStore` backed by the Kubernetes API.
pub struct KubeSecretStore {
    api: Api<Secret>,
    namespace: String,
}

impl KubeSecretStore {
    /// Connect using the ambient kube config (in-cluster service account or
    /// `~/.kube/config`).
    ///
    /// If `namespace` is `None`, the namespace of the current context is used.
    pub async fn connect(namespace: Option<&str>) -> Result<Self> {
        let client = Client::try_default().await?;
        let namespace = match namespace {
            Some(ns) => ns.to_string(),
            None => client.default_namespace().to_string(),
        };
        info!(namespace = %namespace, "connected to Kubernetes API");
        Ok(Self::new(client, namespace))
    }

    pub fn new(client: Client, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let api = Api::namespaced(client, &namespace);
        Self { api, namespace }
    }
}

impl SecretStore for KubeSecretStore {
    fn list<'a>(&'a self, selector: &'a str) -> ListFuture<'a> {
        Box::pin(async move {
            debug!(namespace = %self.namespace, selector, "listing secrets");
            let params = ListParams::default().labels(selector);

            match self.api.list(&params).await {
                Ok(list) => Ok(list.items.into_iter().map(SecretRecord::from).collect()),
                Err(kube::Error::Api(resp)) if resp.code == 404 => Err(ListError::NotFound),
                Err(err) => Err(ListError::Store(
                    anyhow!(err).context(format!("listing secrets in namespace {}", self.namespace)),
                )),
            }
        })
    }
}
