//! Environment-based secret store
//!
//! `ALEGRA-USER` is read from `ALEGRA_USER`, `ALEGRA-API-KEY` from
//! `ALEGRA_API_KEY`. Empty variables count as absent.

use alegra_core::error::CoreResult;
use alegra_core::traits::SecretStore;
use async_trait::async_trait;

type Lookup = dyn Fn(&str) -> Option<String> + Send + Sync;

pub struct EnvSecretStore {
    lookup: Box<Lookup>,
}

impl EnvSecretStore {
    /// Store reading the process environment.
    #[must_use]
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key).ok())
    }

    /// Store reading variables through `lookup`.
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    /// Environment variable holding the secret `name`.
    pub fn variable_name(name: &str) -> String {
        name.trim().to_ascii_uppercase().replace('-', "_")
    }
}

impl Default for EnvSecretStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get_secret(&self, name: &str) -> CoreResult<Option<String>> {
        let var = Self::variable_name(name);
        let value = (self.lookup)(&var).filter(|v| !v.is_empty());
        tracing::debug!(
            "Secret {name} {} in ${var}",
            if value.is_some() { "found" } else { "not found" }
        );
        Ok(value)
    }
}
