//! Keyring-based secret store (Read-Only)
//!
//! Each secret is one keyring entry: service = configured service name,
//! user = secret name.

use std::collections::HashMap;
use std::sync::Arc;

use alegra_core::error::{CoreError, CoreResult};
use alegra_core::traits::SecretStore;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Secret store backed by the system keychain (Keychain on macOS, Credential
/// Manager on Windows, secret-service on Linux).
pub struct KeyringSecretStore {
    service: String,
    /// In-memory cache to reduce keyring access frequency.
    cache: Arc<RwLock<HashMap<String, Option<String>>>>,
}

impl KeyringSecretStore {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Read one secret from the keyring (synchronous).
    fn read_sync(service: &str, name: &str) -> CoreResult<Option<String>> {
        let entry = keyring::Entry::new(service, name)
            .map_err(|e| CoreError::SecretStore(e.to_string()))?;

        match entry.get_password() {
            Ok(value) => Ok(Some(value)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CoreError::SecretStore(e.to_string())),
        }
    }
}

#[async_trait]
impl SecretStore for KeyringSecretStore {
    async fn get_secret(&self, name: &str) -> CoreResult<Option<String>> {
        // Check cache first (read lock)
        {
            let cache = self.cache.read().await;
            if let Some(value) = cache.get(name) {
                return Ok(value.clone());
            }
        }

        // Cache miss, acquire write lock and load (double-check)
        let mut cache = self.cache.write().await;
        if let Some(value) = cache.get(name) {
            return Ok(value.clone());
        }

        let service = self.service.clone();
        let key = name.to_string();
        let value = tokio::task::spawn_blocking(move || {
            tracing::debug!("Loading secret {key} from Keyring");
            Self::read_sync(&service, &key)
        })
        .await
        .map_err(|e| CoreError::SecretStore(format!("Task join error: {e}")))??;

        cache.insert(name.to_string(), value.clone());
        Ok(value)
    }
}
