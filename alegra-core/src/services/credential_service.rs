//! Credential resolution

use std::sync::Arc;

use alegra_provider::log_sanitizer::mask_secret;

use crate::error::{CoreError, CoreResult};
use crate::traits::SecretStore;
use crate::types::{AlegraCredentials, SecretNames};

/// Reads the Alegra credentials from a [`SecretStore`].
pub struct CredentialService {
    store: Arc<dyn SecretStore>,
}

impl CredentialService {
    #[must_use]
    pub fn new(store: Arc<dyn SecretStore>) -> Self {
        Self { store }
    }

    /// Resolve both credentials, username first.
    ///
    /// An absent secret resolves to an empty string. Store failures are
    /// returned as-is; blank secret names are a configuration error.
    pub async fn resolve(&self, names: &SecretNames) -> CoreResult<AlegraCredentials> {
        for name in [&names.username, &names.api_key] {
            if name.trim().is_empty() {
                return Err(CoreError::Configuration(
                    "secret names must not be blank".to_string(),
                ));
            }
        }

        let username = self.lookup(&names.username).await?;
        let api_key = self.lookup(&names.api_key).await?;

        log::info!(
            "Resolved Alegra credentials for user {}",
            mask_secret(&username)
        );
        Ok(AlegraCredentials { username, api_key })
    }

    async fn lookup(&self, name: &str) -> CoreResult<String> {
        match self.store.get_secret(name).await {
            Ok(Some(value)) => Ok(value),
            Ok(None) => {
                log::warn!("Secret {name} not found, using an empty value");
                Ok(String::new())
            }
            Err(e) => {
                log::error!("Failed to read secret {name}: {e}");
                Err(e)
            }
        }
    }
}
