use alegra_provider::log_sanitizer::mask_secret;
use serde::{Deserialize, Serialize};

/// Default secret holding the account e-mail.
pub const DEFAULT_USERNAME_SECRET: &str = "ALEGRA-USER";
/// Default secret holding the API token.
pub const DEFAULT_API_KEY_SECRET: &str = "ALEGRA-API-KEY";

/// Names of the two secrets the server reads at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretNames {
    pub username: String,
    pub api_key: String,
}

impl Default for SecretNames {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME_SECRET.to_string(),
            api_key: DEFAULT_API_KEY_SECRET.to_string(),
        }
    }
}

/// Basic-auth credentials for the Alegra API.
///
/// Either field may be empty when the secret was absent; the API client
/// refuses to start with empty credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct AlegraCredentials {
    pub username: String,
    pub api_key: String,
}

impl AlegraCredentials {
    pub fn is_complete(&self) -> bool {
        !self.username.trim().is_empty() && !self.api_key.trim().is_empty()
    }
}

impl std::fmt::Debug for AlegraCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlegraCredentials")
            .field("username", &mask_secret(&self.username))
            .field("api_key", &"***")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_key() {
        let creds = AlegraCredentials {
            username: "contador@empresa.co".to_string(),
            api_key: "a1b2c3d4e5".to_string(),
        };
        let debug = format!("{creds:?}");
        assert!(!debug.contains("a1b2c3d4e5"));
        assert!(!debug.contains("contador@empresa.co"));
    }

    #[test]
    fn completeness_requires_both_values() {
        let mut creds = AlegraCredentials {
            username: "u".to_string(),
            api_key: String::new(),
        };
        assert!(!creds.is_complete());
        creds.api_key = "k".to_string();
        assert!(creds.is_complete());
    }

    #[test]
    fn default_secret_names() {
        let names = SecretNames::default();
        assert_eq!(names.username, "ALEGRA-USER");
        assert_eq!(names.api_key, "ALEGRA-API-KEY");
    }
}
