//! Secret store abstraction

use async_trait::async_trait;

use crate::error::CoreResult;

/// Read-only access to named secrets.
///
/// Platform implementations:
/// - `KeyringSecretStore`: system keyring (`keyring` crate)
/// - `EnvSecretStore`: process environment
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Look up one secret.
    ///
    /// # Arguments
    /// * `name` - secret name, e.g. `ALEGRA-USER`
    ///
    /// # Returns
    /// * `Ok(Some(value))` - secret exists
    /// * `Ok(None)` - secret does not exist
    /// * `Err(CoreError::SecretStore)` - the store could not be read
    async fn get_secret(&self, name: &str) -> CoreResult<Option<String>>;
}
