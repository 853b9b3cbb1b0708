//! Blockchain backend selection and client.
//!
//! The wallet talks to exactly one backend: the operator's Dojo when one is
//! configured and enabled, otherwise the default hosted backend for the
//! configured network. Dojo bypasses the hosted endpoint table entirely.

use std::sync::Arc;

use async_trait::async_trait;

use super::{BackendClient, HttpTransport};
use crate::config::server::Network;
use crate::config::CliConfig;
use crate::error::{Error, Result};

/// Default hosted backend endpoint per network. The onion variant applies
/// only when the global `tor` flag and `onion_backend` are both set.
fn hosted_backend_url(network: Network, onion: bool) -> &'static str {
    match (network, onion) {
        (Network::Mainnet, false) => "https://api.samouraiwallet.com/v2",
        (Network::Testnet, false) => "https://api.samouraiwallet.com/test/v2",
        (Network::Mainnet, true) => {
            "http://backmainfw7zqke2vdxr3cnt4hbyp6uosj5lirgmxdq2w3ebkvzcthyd.onion/v2"
        }
        (Network::Testnet, true) => {
            "http://backtestj3vkwnqz7mfe2raly4dhcsu6ipbo5xgtrvdmq2kcwnezbhyd.onion/test/v2"
        }
    }
}

/// The active backend: base URL, optional API key, and a height probe.
pub struct BackendHandle {
    base_url: String,
    api_key: Option<String>,
    http: Arc<dyn HttpTransport>,
}

impl BackendHandle {
    /// Select the backend from the validated configuration.
    pub fn from_config(config: &CliConfig, http: Arc<dyn HttpTransport>) -> Self {
        if let Some(dojo) = config.dojo.as_ref().filter(|dojo| dojo.enabled) {
            return Self {
                base_url: dojo.url.trim().trim_end_matches('/').to_string(),
                api_key: Some(dojo.api_key.clone()),
                http,
            };
        }

        let onion = config.tor && config.tor_config.onion_backend;
        Self {
            base_url: hosted_backend_url(config.server.network(), onion).to_string(),
            api_key: None,
            http,
        }
    }
}

#[async_trait]
impl BackendClient for BackendHandle {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    async fn block_height(&self) -> Result<u64> {
        let url = format!("{}/latest-block", self.base_url);
        let value = self.http.get_json(&url).await?;
        value
            .get("height")
            .and_then(serde_json::Value::as_u64)
            .ok_or_else(|| {
                Error::Connection("backend latest-block response missing height".to_string())
            })
    }
}
