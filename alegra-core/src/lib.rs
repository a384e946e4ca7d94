//! Alegra MCP core library
//!
//! Platform-independent pieces of the server:
//! - Credential resolution (`CredentialService`) over a pluggable `SecretStore`
//! - Accounting reads (`AccountingService`) over an injected `AccountingApi`,
//!   with invoice normalization
//!
//! Storage and transport live in the binary; this crate only sees traits.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AccountingService, CredentialService, InvoiceListing, InvoiceLookup};
pub use traits::SecretStore;
pub use types::{AlegraCredentials, SecretNames};
