//! Wallet client configuration loading and validation.
//!
//! Provides the root [`CliConfig`] aggregate that owns every configuration
//! section. Configuration is loaded from a TOML file, batch-validated, and
//! then treated as immutable; the only mutation path is deep-copying the
//! aggregate before a reload.
//!
//! # Example
//!
//! ```no_run
//! use tumbler::config::settings::CliConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CliConfig::load("tumbler.toml")?;
//!     config.init_logging();
//!     println!("coordinator: {}", config.compute_server_url()?);
//!     Ok(())
//! }
//! ```

use std::path::Path;
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::dojo::DojoConfig;
use super::logging::LoggingConfig;
use super::mask::mask;
use super::mix::MixConfig;
use super::proxy::{self, CliProxy};
use super::server::ServerId;
use super::tor::TorConfig;
use crate::error::{ConfigError, Result, ValidationReport};
use crate::runtime::{
    BackendClient, HttpTransport, MessagingTransport, PersistHandle, RuntimeConfig,
};

/// Main wallet client configuration.
///
/// Aggregates all sections of the config file. Load from TOML using
/// [`CliConfig::load`] or parse directly with [`CliConfig::parse_toml`]; both
/// validate the whole document before returning it.
///
/// After validation the aggregate is effectively immutable. The resolved
/// proxy and the Tor execution mode are lazily memoized derived fields; a
/// deep copy (via `Clone`) starts with cold memo cells so copies never share
/// cached state with the original.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Config file schema version. 0 marks a pre-versioning legacy file.
    pub version: u32,

    /// Target coordinator deployment.
    pub server: ServerId,

    /// Optional shared secret code granting coordinator fee adjustments.
    pub scode: Option<String>,

    /// Master switch for Tor usage. Section-level onion preferences only
    /// take effect while this is set.
    pub tor: bool,

    #[serde(alias = "torConfig")]
    pub tor_config: TorConfig,

    /// Self-hosted backend; absent or disabled means the default hosted
    /// backend for the configured network.
    pub dojo: Option<DojoConfig>,

    /// Coordinator API key.
    #[serde(alias = "apiKey")]
    pub api_key: String,

    /// Encrypted seed payload. Decryption is the wallet engine's concern;
    /// this layer only carries and masks it.
    pub seed: String,

    #[serde(alias = "seedAppendPassphrase")]
    pub seed_append_passphrase: bool,

    /// Seconds between wallet state persistence flushes.
    #[serde(alias = "persistDelay")]
    pub persist_delay: u32,

    /// Seconds between pool list refreshes.
    #[serde(alias = "refreshPoolsDelay")]
    pub refresh_pools_delay: u32,

    /// Confirmations required on a UTXO before tx0 may spend it.
    #[serde(alias = "tx0MinConfirmations")]
    pub tx0_min_confirmations: u32,

    /// Proxy specification; empty means direct connections.
    pub proxy: String,

    /// HTTP request timeout in milliseconds.
    #[serde(alias = "requestTimeout")]
    pub request_timeout_ms: u64,

    pub mix: MixConfig,

    pub api: ApiConfig,

    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    #[serde(skip)]
    resolved_proxy: OnceLock<Option<CliProxy>>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            version: 0,
            server: ServerId::default(),
            scode: None,
            tor: false,
            tor_config: TorConfig::default(),
            dojo: None,
            api_key: String::new(),
            seed: String::new(),
            seed_append_passphrase: true,
            persist_delay: 10,
            refresh_pools_delay: 30,
            tx0_min_confirmations: 0,
            proxy: String::new(),
            request_timeout_ms: 30_000,
            mix: MixConfig::default(),
            api: ApiConfig::default(),
            logging: LoggingConfig::default(),
            resolved_proxy: OnceLock::new(),
        }
    }
}

impl Clone for CliConfig {
    /// Deep copy: every section is value-copied and both memo cells (the
    /// proxy cache here, the execution-mode cache inside [`TorConfig`])
    /// start cold, so the copy recomputes independently of the original.
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            server: self.server,
            scode: self.scode.clone(),
            tor: self.tor,
            tor_config: self.tor_config.clone(),
            dojo: self.dojo.clone(),
            api_key: self.api_key.clone(),
            seed: self.seed.clone(),
            seed_append_passphrase: self.seed_append_passphrase,
            persist_delay: self.persist_delay,
            refresh_pools_delay: self.refresh_pools_delay,
            tx0_min_confirmations: self.tx0_min_confirmations,
            proxy: self.proxy.clone(),
            request_timeout_ms: self.request_timeout_ms,
            mix: self.mix.clone(),
            api: self.api,
            logging: self.logging.clone(),
            resolved_proxy: OnceLock::new(),
        }
    }
}

impl CliConfig {
    /// Parse configuration from TOML content.
    ///
    /// Unknown keys are ignored. The document is batch-validated before being
    /// returned; an invalid one yields a single [`ConfigError::Validation`]
    /// naming every offending field.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate the whole document.
    ///
    /// Purely structural (presence, range, parseability); never touches the
    /// network or filesystem. Collects every violation so an operator can fix
    /// a broken file in one pass. The proxy field is deliberately absent
    /// here: empty means "no proxy", and a malformed value fails at first
    /// resolution instead.
    pub fn validate(&self) -> Result<()> {
        let mut report = ValidationReport::new();

        if self.api_key.trim().is_empty() {
            report.missing("cli/apiKey");
        }
        if self.seed.trim().is_empty() {
            report.missing("cli/seed");
        }
        if self.persist_delay == 0 {
            report.invalid("cli/persistDelay", "must be >= 1");
        }
        if self.refresh_pools_delay == 0 {
            report.invalid("cli/refreshPoolsDelay", "must be >= 1");
        }
        if self.request_timeout_ms < 1000 {
            report.invalid("cli/requestTimeout", "must be >= 1000 milliseconds");
        }

        self.tor_config.validate(&mut report);
        if let Some(dojo) = &self.dojo {
            dojo.validate(&mut report);
        }
        self.mix.validate(&mut report);
        self.api.validate(&mut report);

        report.into_result()?;
        Ok(())
    }

    /// Effective coordinator URL.
    ///
    /// The onion endpoint is used only when the global `tor` flag and the
    /// section-level `onion_server` preference are both set; every other
    /// combination routes clear-net.
    pub fn compute_server_url(&self) -> Result<&'static str> {
        let onion = self.tor && self.tor_config.onion_server;
        Ok(self.server.endpoint(onion)?)
    }

    /// Parsed proxy descriptor, memoized on first access.
    ///
    /// Racing first readers may both parse, but all callers observe the one
    /// cached outcome afterward. A parse failure is returned rather than
    /// cached; it is fatal at startup, so there is no later access to serve.
    pub fn resolved_proxy(&self) -> Result<Option<&CliProxy>> {
        if let Some(cached) = self.resolved_proxy.get() {
            return Ok(cached.as_ref());
        }
        let parsed = proxy::resolve(&self.proxy)?;
        Ok(self.resolved_proxy.get_or_init(|| parsed).as_ref())
    }

    /// Derive the immutable runtime parameter set handed to the mixing
    /// engine, combining the computed server URL, the server's network and
    /// the validated sections with the four collaborator handles supplied by
    /// the host. Pure construction; no side effects.
    pub fn derive_runtime_config(
        &self,
        http: Arc<dyn HttpTransport>,
        messaging: Arc<dyn MessagingTransport>,
        persist: Arc<dyn PersistHandle>,
        backend: Arc<dyn BackendClient>,
    ) -> Result<RuntimeConfig> {
        let server_url = self.compute_server_url()?;
        let scode = self
            .scode
            .as_deref()
            .map(str::trim)
            .filter(|scode| !scode.is_empty())
            .map(str::to_string);

        Ok(RuntimeConfig {
            http,
            messaging,
            persist,
            backend,
            server_url,
            network: self.server.network(),
            scode,
            max_clients: self.mix.clients,
            max_clients_per_pool: self.mix.clients_per_pool,
            client_delay: self.mix.client_delay,
            tx0_delay: self.mix.tx0_delay,
            auto_mix: self.mix.auto_mix,
            mixs_target: self.mix.mixs_target,
            persist_delay: self.persist_delay,
            refresh_pools_delay: self.refresh_pools_delay,
            tx0_min_confirmations: self.tx0_min_confirmations,
        })
    }

    /// Ordered diagnostic projection for support logs.
    ///
    /// Key order is stable and part of the operator contract. Secret-bearing
    /// values (`apiKey`, `seed`, `dojo.apiKey`, a non-blank `proxy`) pass
    /// through the masker; raw values never appear.
    pub fn config_info(&self) -> Vec<(&'static str, String)> {
        let mut info = Vec::new();

        info.push(("cli/server", self.server.to_string()));
        info.push((
            "cli/scode",
            self.scode.as_deref().unwrap_or("null").to_string(),
        ));
        info.push(("cli/tor", self.tor.to_string()));
        info.extend(self.tor_config.config_info());
        match &self.dojo {
            Some(dojo) => info.extend(dojo.config_info()),
            None => info.push(("cli/dojo", "null".to_string())),
        }
        info.push(("cli/apiKey", mask(Some(&self.api_key))));
        info.push(("cli/seedEncrypted", mask(Some(&self.seed))));
        info.push(("cli/persistDelay", self.persist_delay.to_string()));
        info.push((
            "cli/refreshPoolsDelay",
            self.refresh_pools_delay.to_string(),
        ));
        info.push((
            "cli/tx0MinConfirmations",
            self.tx0_min_confirmations.to_string(),
        ));
        let proxy = self.proxy.trim();
        info.push((
            "cli/proxy",
            if proxy.is_empty() {
                "null".to_string()
            } else {
                mask(Some(proxy))
            },
        ));
        info.extend(self.mix.config_info());
        info.extend(self.api.config_info());

        info
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
