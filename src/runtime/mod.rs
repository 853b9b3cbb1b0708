//! Engine-facing runtime configuration and collaborator seams.
//!
//! The mixing engine itself lives outside this crate. It is reached through
//! four narrow traits; the host wires concrete adapters in at bootstrap and
//! [`RuntimeConfig`] carries them together with the parameters derived from
//! the validated configuration.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::server::Network;
use crate::error::Result;

pub mod backend;
pub mod http;
pub mod messaging;
pub mod persist;

pub use backend::BackendHandle;
pub use http::ReqwestTransport;
pub use messaging::WsMessaging;
pub use persist::FilePersistHandle;

/// HTTP transport used for coordinator and backend requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url`, expecting a JSON body.
    async fn get_json(&self, url: &str) -> Result<serde_json::Value>;

    /// POST a JSON body to `url`, returning the JSON response.
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<serde_json::Value>;
}

/// Realtime channel to the mixing coordinator.
#[async_trait]
pub trait MessagingTransport: Send + Sync {
    /// Endpoint the engine subscribes to.
    fn endpoint(&self) -> String;

    /// Open and immediately close a connection to verify reachability.
    async fn probe(&self) -> Result<()>;
}

/// Thin snapshot of persisted wallet state.
///
/// The engine owns the real wallet data; this layer only moves an opaque
/// progress snapshot in and out of storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStateSnapshot {
    pub updated_at: Option<DateTime<Utc>>,
    pub mixs_done: u64,
    /// Mix progress per pool identifier.
    pub pool_progress: BTreeMap<String, u32>,
}

/// Loads and stores the wallet state snapshot.
#[async_trait]
pub trait PersistHandle: Send + Sync {
    /// Load the last persisted snapshot, or `None` on first run.
    async fn load(&self) -> Result<Option<WalletStateSnapshot>>;

    /// Persist a snapshot durably.
    async fn save(&self, snapshot: &WalletStateSnapshot) -> Result<()>;
}

/// Blockchain backend the wallet queries for UTXOs and broadcasts through.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Base URL of the active backend.
    fn base_url(&self) -> &str;

    /// API key attached to backend requests, where the backend requires one.
    fn api_key(&self) -> Option<&str>;

    /// Current block height, used as a reachability probe.
    async fn block_height(&self) -> Result<u64>;
}

/// Immutable parameter set handed to the mixing engine at bootstrap.
///
/// Built once per process by
/// [`CliConfig::derive_runtime_config`](crate::config::CliConfig::derive_runtime_config).
#[derive(Clone)]
pub struct RuntimeConfig {
    pub http: Arc<dyn HttpTransport>,
    pub messaging: Arc<dyn MessagingTransport>,
    pub persist: Arc<dyn PersistHandle>,
    pub backend: Arc<dyn BackendClient>,

    /// Effective coordinator URL (clear or onion).
    pub server_url: &'static str,
    pub network: Network,
    /// Shared secret code; `None` when not configured.
    pub scode: Option<String>,

    pub max_clients: u32,
    pub max_clients_per_pool: u32,
    pub client_delay: u32,
    pub tx0_delay: u32,
    pub auto_mix: bool,
    pub mixs_target: u32,

    pub persist_delay: u32,
    pub refresh_pools_delay: u32,
    pub tx0_min_confirmations: u32,
}

impl fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("server_url", &self.server_url)
            .field("network", &self.network)
            .field("scode", &self.scode.as_ref().map(|_| "<set>"))
            .field("max_clients", &self.max_clients)
            .field("max_clients_per_pool", &self.max_clients_per_pool)
            .field("client_delay", &self.client_delay)
            .field("tx0_delay", &self.tx0_delay)
            .field("auto_mix", &self.auto_mix)
            .field("mixs_target", &self.mixs_target)
            .field("persist_delay", &self.persist_delay)
            .field("refresh_pools_delay", &self.refresh_pools_delay)
            .field("tx0_min_confirmations", &self.tx0_min_confirmations)
            .finish_non_exhaustive()
    }
}
