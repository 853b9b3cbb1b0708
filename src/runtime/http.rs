//! HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;

use super::HttpTransport;
use crate::config::proxy::{CliProxy, ProxyKind};
use crate::config::CliConfig;
use crate::error::Result;

/// Default transport: a shared `reqwest::Client` honoring the configured
/// request timeout and the resolved proxy.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

/// Proxy URL in the form the client builder accepts. SOCKS uses `socks5h` so
/// hostname resolution happens on the proxy side; leaking DNS past a Tor
/// proxy would defeat it.
fn proxy_url(proxy: &CliProxy) -> String {
    match proxy.kind {
        ProxyKind::Socks => format!("socks5h://{}:{}", proxy.host, proxy.port),
        ProxyKind::Http => format!("http://{}:{}", proxy.host, proxy.port),
    }
}

impl ReqwestTransport {
    /// Build the transport from the validated configuration.
    pub fn from_config(config: &CliConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(concat!("tumbler/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy) = config.resolved_proxy()? {
            builder = builder.proxy(reqwest::Proxy::all(proxy_url(proxy))?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let value = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(value)
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value> {
        let value = self
            .client
            .post(url)
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(value)
    }
}
