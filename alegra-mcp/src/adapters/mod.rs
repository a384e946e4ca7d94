//! Platform adapters for the MCP server
//!
//! Implementations of the core `SecretStore` trait:
//! - **`KeyringSecretStore`**: reads secrets from the system keyring.
//! - **`EnvSecretStore`**: reads secrets from environment variables.
//!
//! Both are read-only; the server never writes secrets.

mod env_secret_store;
mod keyring_secret_store;

pub use env_secret_store::EnvSecretStore;
pub use keyring_secret_store::KeyringSecretStore;
