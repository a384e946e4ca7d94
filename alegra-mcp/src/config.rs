//! Server configuration
//!
//! Loaded from TOML. The file is looked up at `$ALEGRA_MCP_CONFIG`, then at
//! `<config dir>/alegra-mcp/config.toml`; when neither exists the defaults
//! apply. `ALEGRA_BASE_URL` and `ALEGRA_SECRET_BACKEND` override the file.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use alegra_core::{AlegraCredentials, SecretNames};
use alegra_provider::{ALEGRA_API_BASE, AlegraConfig};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV: &str = "ALEGRA_MCP_CONFIG";
pub const BASE_URL_ENV: &str = "ALEGRA_BASE_URL";
pub const SECRET_BACKEND_ENV: &str = "ALEGRA_SECRET_BACKEND";

const CONFIG_DIR_NAME: &str = "alegra-mcp";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub secrets: SecretsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    ALEGRA_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Where the two Alegra secrets are read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecretBackend {
    /// System keyring.
    #[default]
    Keyring,
    /// Process environment.
    Env,
}

impl FromStr for SecretBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyring" => Ok(Self::Keyring),
            "env" => Ok(Self::Env),
            other => bail!("unknown secret backend '{other}' (expected 'keyring' or 'env')"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretsConfig {
    #[serde(default)]
    pub backend: SecretBackend,

    /// Keyring service the secrets are stored under.
    #[serde(default = "default_service")]
    pub service: String,

    #[serde(default = "default_username_secret")]
    pub username_secret: String,

    #[serde(default = "default_api_key_secret")]
    pub api_key_secret: String,
}

fn default_service() -> String {
    CONFIG_DIR_NAME.to_string()
}

fn default_username_secret() -> String {
    SecretNames::default().username
}

fn default_api_key_secret() -> String {
    SecretNames::default().api_key
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            backend: SecretBackend::default(),
            service: default_service(),
            username_secret: default_username_secret(),
            api_key_secret: default_api_key_secret(),
        }
    }
}

impl McpConfig {
    /// Load the configuration for this process.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let mut config = match explicit {
            Some(path) => Self::load_file(&path)?,
            None => match default_config_path().filter(|p| p.exists()) {
                Some(path) => Self::load_file(&path)?,
                None => {
                    tracing::info!("Configuration file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides; `lookup` returns the value of a variable.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.api.base_url = url;
        }
        if let Some(backend) = lookup(SECRET_BACKEND_ENV).filter(|v| !v.trim().is_empty()) {
            self.secrets.backend = backend
                .parse()
                .with_context(|| format!("Invalid {SECRET_BACKEND_ENV}"))?;
        }
        Ok(())
    }

    pub fn secret_names(&self) -> SecretNames {
        SecretNames {
            username: self.secrets.username_secret.clone(),
            api_key: self.secrets.api_key_secret.clone(),
        }
    }

    /// Client settings for the resolved credentials.
    pub fn client_config(&self, credentials: &AlegraCredentials) -> AlegraConfig {
        AlegraConfig::new(&credentials.username, &credentials.api_key)
            .with_base_url(&self.api.base_url)
            .with_timeouts(
                Duration::from_secs(self.api.timeout_secs),
                Duration::from_secs(self.api.connect_timeout_secs),
            )
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
