//! HTTP status API.
//!
//! One read endpoint over the bootstrapped wallet. TLS and authentication are
//! the surrounding gateway's concern; listeners bind loopback only.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use crate::config::api::ApiConfig;
use crate::error::Result;
use crate::wallet::{WalletRuntime, WalletSummary};

/// Shared state for the status API.
#[derive(Clone)]
pub struct AppState {
    pub wallet: Arc<WalletRuntime>,
}

#[derive(Debug, Deserialize)]
pub struct WalletParams {
    pub name: Option<String>,
}

/// Envelope returned by `GET /wallet`.
#[derive(Debug, Serialize, Deserialize)]
pub struct WalletResponse {
    pub name: String,
    pub wallet: WalletSummary,
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/wallet", get(wallet_status))
        .with_state(state)
}

/// `GET /wallet?name=` — invalidates the wallet cache so the summary is
/// recomputed rather than served stale, then returns it enveloped with the
/// display name (default `World`).
async fn wallet_status(
    State(state): State<AppState>,
    Query(params): Query<WalletParams>,
) -> Json<WalletResponse> {
    let name = params.name.unwrap_or_else(|| "World".to_string());

    state.wallet.clear_cache();
    let wallet = state.wallet.summary();
    tracing::debug!(%name, refresh = wallet.refresh_count, "wallet status served");

    Json(WalletResponse { name, wallet })
}

async fn bind(port: u16) -> Result<tokio::net::TcpListener> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    Ok(tokio::net::TcpListener::bind(addr).await?)
}

/// Bind the configured listeners and serve until shutdown.
///
/// The plaintext listener only exists while `http_enable` is set; it shares
/// the router with the primary one.
pub async fn serve(api: &ApiConfig, wallet: Arc<WalletRuntime>) -> Result<()> {
    let app = create_router(AppState { wallet });

    if api.http_enable {
        let listener = bind(api.http_port).await?;
        tracing::info!(port = api.http_port, "plaintext status API listening");
        let plain_app = app.clone();
        tokio::spawn(async move {
            if let Err(err) = axum::serve(listener, plain_app).await {
                tracing::error!(error = %err, "plaintext status API terminated");
            }
        });
    }

    let listener = bind(api.port).await?;
    tracing::info!(port = api.port, "status API listening");
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::testkit::{derive_runtime, valid_config};

    fn test_app() -> (Router, Arc<WalletRuntime>) {
        let runtime = derive_runtime(&valid_config()).unwrap();
        let wallet = Arc::new(WalletRuntime::bootstrap(runtime));
        let app = create_router(AppState {
            wallet: wallet.clone(),
        });
        (app, wallet)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn wallet_status_defaults_name_to_world() {
        let (app, _wallet) = test_app();
        let (status, json) = get_json(app, "/wallet").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "World");
        assert_eq!(json["wallet"]["network"], "testnet");
    }

    #[tokio::test]
    async fn wallet_status_echoes_provided_name() {
        let (app, _wallet) = test_app();
        let (status, json) = get_json(app, "/wallet?name=operator").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "operator");
    }

    #[tokio::test]
    async fn wallet_status_invalidates_the_cache() {
        let (app, wallet) = test_app();

        // Warm the cache outside the endpoint.
        assert_eq!(wallet.summary().refresh_count, 1);

        let (_, json) = get_json(app, "/wallet").await;
        // The endpoint cleared the cache, forcing a recompute.
        assert_eq!(json["wallet"]["refresh_count"], 2);
    }
}
