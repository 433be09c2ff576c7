use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use goreleaser_step::secrets::{ListError, ListFuture, SecretRecord, SecretStore};

#[derive(Debug, Clone)]
enum Listing {
    Secrets(Vec<SecretRecord>),
    NotFound,
    Failure(String),
}

#[derive(Debug, Default)]
struct State {
    listings: HashMap<String, Listing>,
    queries: Vec<String>,
}

/// A fake secret store that:
/// - serves canned listings per selector (unknown selectors list nothing)
/// - records every selector it was queried with.
///
/// Clones share state, so a test can keep a handle after moving one into
/// the resolver.
#[derive(Debug, Clone, Default)]
pub struct FakeSecretStore {
    state: Arc<Mutex<State>>,
}

impl FakeSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secrets(self, selector: &str, secrets: Vec<SecretRecord>) -> Self {
        self.insert(selector, Listing::Secrets(secrets));
        self
    }

    pub fn with_not_found(self, selector: &str) -> Self {
        self.insert(selector, Listing::NotFound);
        self
    }

    pub fn with_failure(self, selector: &str, message: &str) -> Self {
        self.insert(selector, Listing::Failure(message.to_string()));
        self
    }

    /// Selectors queried so far, in order.
    pub fn queries(&self) -> Vec<String> {
        self.state.lock().unwrap().queries.clone()
    }

    fn insert(&self, selector: &str, listing: Listing) {
        self.state
            .lock()
            .unwrap()
            .listings
            .insert(selector.to_string(), listing);
    }
}

impl SecretStore for FakeSecretStore {
    fn list<'a>(&'a self, selector: &'a str) -> ListFuture<'a> {
        let listing = {
            let mut state = self.state.lock().unwrap();
            state.queries.push(selector.to_string());
            state.listings.get(selector).cloned()
        };

        Box::pin(async move {
            match listing {
                Some(Listing::Secrets(secrets)) => Ok(secrets),
                Some(Listing::NotFound) => Err(ListError::NotFound),
                Some(Listing::Failure(message)) => Err(ListError::Store(anyhow!(message))),
                None => Ok(Vec::new()),
            }
        })
    }
}
