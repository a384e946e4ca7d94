//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use alegra_provider::AlegraError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The secret store could not be read
    #[error("Secret store error: {0}")]
    SecretStore(String),

    /// Invalid startup configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Alegra API error (converted from the client library)
    #[error("{0}")]
    Provider(#[from] AlegraError),
}

impl CoreError {
    /// Whether this is expected behavior (bad input, missing entity, etc.), used for log levels.
    ///
    /// `true` should be logged at `warn`, `false` at `error`.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Provider(e) => e.is_expected(),
            Self::SecretStore(_) | Self::Configuration(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_keep_expectedness() {
        let not_found = CoreError::from(AlegraError::NotFound {
            path: "/items/1".to_string(),
            raw_message: None,
        });
        assert!(not_found.is_expected());

        let server = CoreError::from(AlegraError::ServerError {
            status: 500,
            raw_message: None,
        });
        assert!(!server.is_expected());
    }

    #[test]
    fn provider_display_is_passed_through() {
        let inner = AlegraError::InvalidParameter {
            param: "bill_id".to_string(),
            detail: "must not be blank".to_string(),
        };
        let expected = inner.to_string();
        assert_eq!(CoreError::from(inner).to_string(), expected);
    }

    #[test]
    fn secret_store_failure_is_unexpected() {
        assert!(!CoreError::SecretStore("locked".to_string()).is_expected());
        assert!(!CoreError::Configuration("bad base url".to_string()).is_expected());
    }
}
