//! MCP Server entry point for Alegra (Read-Only)
//!
//! Starts the MCP server with stdio transport.
//!
//! # Read-Only Mode
//!
//! Every tool is a read against the Alegra API; the server never creates,
//! updates or deletes anything in the account.
//!
//! # Startup
//!
//! 1. Load configuration (TOML file and environment overrides).
//! 2. Read `ALEGRA-USER` and `ALEGRA-API-KEY` from the configured secret store.
//! 3. Build one authenticated client and serve tools until stdin closes.

mod adapters;
mod config;
mod schemas;
mod server;

use std::process::ExitCode;
use std::sync::Arc;

use adapters::{EnvSecretStore, KeyringSecretStore};
use alegra_core::{AccountingService, CredentialService, SecretStore};
use alegra_provider::{AlegraClient, log_sanitizer::mask_secret};
use anyhow::Context;
use config::{McpConfig, SecretBackend};
use rmcp::ServiceExt;
use server::AlegraMcp;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing to stderr (MCP uses stdout for protocol)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    tracing::info!("Starting Alegra MCP Server (read-only mode)");

    let mcp_server = match build_server().await {
        Ok(server) => server,
        Err(e) => {
            tracing::error!("Failed to initialize MCP server: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("MCP server initialized with 14 tools");

    // Start serving via stdio
    tracing::info!("Starting MCP server on stdio transport");
    let service = match mcp_server.serve(rmcp::transport::stdio()).await {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start MCP server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Wait for the server to complete
    if let Err(e) = service.waiting().await {
        tracing::error!("MCP server error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn build_server() -> anyhow::Result<AlegraMcp> {
    let config = McpConfig::load()?;

    let secret_store: Arc<dyn SecretStore> = match config.secrets.backend {
        SecretBackend::Keyring => {
            tracing::info!("Reading secrets from keyring service '{}'", config.secrets.service);
            Arc::new(KeyringSecretStore::new(&config.secrets.service))
        }
        SecretBackend::Env => {
            tracing::info!("Reading secrets from environment variables");
            Arc::new(EnvSecretStore::new())
        }
    };

    let credentials = CredentialService::new(secret_store)
        .resolve(&config.secret_names())
        .await
        .context("Failed to read Alegra credentials")?;

    if !credentials.is_complete() {
        anyhow::bail!(
            "Alegra credentials are incomplete (username: '{}'); store both {} and {}",
            mask_secret(&credentials.username),
            config.secrets.username_secret,
            config.secrets.api_key_secret
        );
    }

    let client = AlegraClient::new(config.client_config(&credentials))
        .context("Failed to create Alegra client")?;
    tracing::info!("Alegra client ready for {}", client.base_url());

    let service = Arc::new(AccountingService::new(Arc::new(client)));
    Ok(AlegraMcp::new(service))
}
