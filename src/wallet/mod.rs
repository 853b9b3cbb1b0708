//! Thin wallet runtime shared with the status API.
//!
//! The mixing engine owns the real wallet; this layer keeps the bootstrap
//! parameters, a start timestamp, and a cached serializable summary that the
//! status endpoint invalidates on demand.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::server::Network;
use crate::runtime::RuntimeConfig;

/// Serializable snapshot of the running wallet, served by the status API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletSummary {
    pub network: Network,
    pub server_url: String,
    pub auto_mix: bool,
    pub mixs_target: u32,
    pub started_at: DateTime<Utc>,
    /// When this summary was last recomputed.
    pub refreshed_at: DateTime<Utc>,
    /// Number of recomputations since bootstrap; bumps on every cache miss.
    pub refresh_count: u64,
}

#[derive(Default)]
struct Cache {
    summary: Option<WalletSummary>,
    refreshes: u64,
}

/// Handle to the bootstrapped wallet.
pub struct WalletRuntime {
    runtime: RuntimeConfig,
    started_at: DateTime<Utc>,
    cache: Mutex<Cache>,
}

impl WalletRuntime {
    /// Record the start time and hold the derived runtime parameters.
    #[must_use]
    pub fn bootstrap(runtime: RuntimeConfig) -> Self {
        Self {
            runtime,
            started_at: Utc::now(),
            cache: Mutex::new(Cache::default()),
        }
    }

    /// Drop the cached summary; the next query recomputes instead of serving
    /// stale state.
    pub fn clear_cache(&self) {
        self.cache.lock().summary = None;
    }

    /// Current wallet summary, recomputed only when the cache is empty.
    pub fn summary(&self) -> WalletSummary {
        let mut cache = self.cache.lock();
        if let Some(summary) = &cache.summary {
            return summary.clone();
        }

        cache.refreshes += 1;
        let summary = WalletSummary {
            network: self.runtime.network,
            server_url: self.runtime.server_url.to_string(),
            auto_mix: self.runtime.auto_mix,
            mixs_target: self.runtime.mixs_target,
            started_at: self.started_at,
            refreshed_at: Utc::now(),
            refresh_count: cache.refreshes,
        };
        cache.summary = Some(summary.clone());
        summary
    }

    pub fn runtime(&self) -> &RuntimeConfig {
        &self.runtime
    }
}
