//! Handler for the `run` command.

use std::sync::Arc;

use tokio::signal;
use tracing::{error, info};

use crate::cli::RunArgs;
use crate::config::CliConfig;
use crate::error::Result;
use crate::rest;
use crate::runtime::{BackendHandle, FilePersistHandle, ReqwestTransport, WsMessaging};
use crate::wallet::WalletRuntime;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    // Load and merge configuration
    let mut config = CliConfig::load(&args.config)?;

    // Apply CLI overrides
    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }
    if let Some(port) = args.api_port {
        config.api.port = port;
    }
    if args.no_tor {
        config.tor = false;
    }

    // Overrides may have invalidated the document (e.g. --api-port 0).
    config.validate()?;

    // Initialize logging
    config.init_logging();

    info!(version = env!("CARGO_PKG_VERSION"), "tumbler starting");
    for (key, value) in config.config_info() {
        info!("{key}: {value}");
    }

    // A malformed proxy is fatal here, before anything connects through it.
    let server_url = config.compute_server_url()?;
    config.resolved_proxy()?;

    let http = Arc::new(ReqwestTransport::from_config(&config)?);
    let messaging = Arc::new(WsMessaging::from_server_url(server_url));
    let persist = Arc::new(FilePersistHandle::new(&args.state_file));
    let backend = Arc::new(BackendHandle::from_config(&config, http.clone()));

    let runtime = config.derive_runtime_config(http, messaging, persist, backend)?;
    info!(
        server = %config.server,
        url = runtime.server_url,
        network = %runtime.network,
        "coordinator resolved"
    );

    let wallet = Arc::new(WalletRuntime::bootstrap(runtime));

    tokio::select! {
        result = rest::serve(&config.api, wallet) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("tumbler stopped");
    Ok(())
}
