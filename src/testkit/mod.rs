//! Shared test fixtures.
//!
//! Single source of truth for the stub collaborators and the canonical valid
//! configuration used across unit tests, so each test module does not define
//! its own slightly-different defaults.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::CliConfig;
use crate::error::Result;
use crate::runtime::{
    BackendClient, HttpTransport, MessagingTransport, PersistHandle, RuntimeConfig,
    WalletStateSnapshot,
};

/// Inert implementation of all four collaborator seams.
pub struct StubCollaborators;

#[async_trait]
impl HttpTransport for StubCollaborators {
    async fn get_json(&self, _url: &str) -> Result<serde_json::Value> {
        Ok(serde_json::Value::Null)
    }

    async fn post_json(&self, _url: &str, _body: &serde_json::Value) -> Result<serde_json::Value> {
        Ok(serde_json::Value::Null)
    }
}

#[async_trait]
impl MessagingTransport for StubCollaborators {
    fn endpoint(&self) -> String {
        "ws://stub/ws".to_string()
    }

    async fn probe(&self) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl PersistHandle for StubCollaborators {
    async fn load(&self) -> Result<Option<WalletStateSnapshot>> {
        Ok(None)
    }

    async fn save(&self, _snapshot: &WalletStateSnapshot) -> Result<()> {
        Ok(())
    }
}

#[async_trait]
impl BackendClient for StubCollaborators {
    fn base_url(&self) -> &str {
        "http://stub"
    }

    fn api_key(&self) -> Option<&str> {
        None
    }

    async fn block_height(&self) -> Result<u64> {
        Ok(0)
    }
}

/// Minimal configuration that passes validation.
pub fn valid_config() -> CliConfig {
    let mut config = CliConfig::default();
    config.api_key = "test-api-key-0123456789".to_string();
    config.seed = "ZWbm0vJeLlLgXItmNkEzTiJanE4PFqVZmWbm0vJe".to_string();
    config
}

/// Runtime parameters derived from `config` with stub collaborators wired in.
pub fn derive_runtime(config: &CliConfig) -> Result<RuntimeConfig> {
    config.derive_runtime_config(
        Arc::new(StubCollaborators),
        Arc::new(StubCollaborators),
        Arc::new(StubCollaborators),
        Arc::new(StubCollaborators),
    )
}
