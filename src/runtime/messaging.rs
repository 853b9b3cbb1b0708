//! Realtime coordinator channel over websockets.

use async_trait::async_trait;
use tokio_tungstenite::connect_async;

use super::MessagingTransport;
use crate::error::Result;

/// Websocket endpoint derived from the coordinator URL.
#[derive(Debug, Clone)]
pub struct WsMessaging {
    endpoint: String,
}

impl WsMessaging {
    /// Map the coordinator's HTTP URL onto its websocket endpoint
    /// (`https -> wss`, `http -> ws`, path `/ws`).
    pub fn from_server_url(server_url: &str) -> Self {
        let endpoint = if let Some(rest) = server_url.strip_prefix("https://") {
            format!("wss://{rest}/ws")
        } else if let Some(rest) = server_url.strip_prefix("http://") {
            format!("ws://{rest}/ws")
        } else {
            format!("ws://{server_url}/ws")
        };
        Self { endpoint }
    }
}

#[async_trait]
impl MessagingTransport for WsMessaging {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    async fn probe(&self) -> Result<()> {
        let (mut stream, _) = connect_async(self.endpoint.as_str()).await?;
        stream.close(None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_maps_to_wss() {
        let messaging = WsMessaging::from_server_url("https://pool.whirl.mx:8081");
        assert_eq!(messaging.endpoint(), "wss://pool.whirl.mx:8081/ws");
    }

    #[test]
    fn onion_http_maps_to_ws() {
        let messaging = WsMessaging::from_server_url("http://127.0.0.1:8080");
        assert_eq!(messaging.endpoint(), "ws://127.0.0.1:8080/ws");
    }
}
