//! Configuration and connectivity validation commands.

use std::path::Path;
use std::sync::Arc;

use crate::config::CliConfig;
use crate::error::Result;
use crate::runtime::{
    BackendClient, BackendHandle, MessagingTransport, ReqwestTransport, WsMessaging,
};

/// Validate a configuration file without starting the wallet.
pub fn execute_config<P: AsRef<Path>>(config_path: P) {
    let path = config_path.as_ref();
    println!("Checking configuration: {}", path.display());
    println!();

    // Check file exists
    if !path.exists() {
        eprintln!("Error: Configuration file not found: {}", path.display());
        eprintln!();
        eprintln!("Create one by copying the example:");
        eprintln!("  cp tumbler.toml.example tumbler.toml");
        std::process::exit(1);
    }

    // Try to load and validate
    match CliConfig::load(path) {
        Ok(config) => {
            println!("✓ Configuration file is valid");
            println!();
            println!("Summary:");
            for (key, value) in config.config_info() {
                println!("  {key}: {value}");
            }
            println!();

            match config.compute_server_url() {
                Ok(url) => println!("✓ Coordinator: {url}"),
                Err(e) => {
                    eprintln!("✗ {e}");
                    std::process::exit(1);
                }
            }
            match config.resolved_proxy() {
                Ok(Some(proxy)) => println!("✓ Proxy: {proxy}"),
                Ok(None) => println!("  Proxy: direct connections"),
                Err(e) => {
                    eprintln!("✗ {e}");
                    std::process::exit(1);
                }
            }

            println!();
            println!("Configuration is ready to use.");
        }
        Err(e) => {
            eprintln!("✗ Configuration error: {e}");
            std::process::exit(1);
        }
    }
}

/// Test coordinator and backend connectivity.
pub async fn execute_connection<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = CliConfig::load(config_path)?;
    let server_url = config.compute_server_url()?;

    println!("Testing connection to {}...", config.server);
    println!("  Coordinator: {server_url}");
    println!();

    let http = Arc::new(ReqwestTransport::from_config(&config)?);

    // Coordinator websocket
    print!("Testing coordinator websocket... ");
    let messaging = WsMessaging::from_server_url(server_url);
    match messaging.probe().await {
        Ok(()) => println!("✓ OK"),
        Err(e) => {
            println!("✗ Failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    // Backend block height
    let backend = BackendHandle::from_config(&config, http);
    print!("Testing backend {}... ", backend.base_url());
    match backend.block_height().await {
        Ok(height) => println!("✓ OK (block height {height})"),
        Err(e) => {
            println!("✗ Failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    println!();
    println!("All connection tests passed.");

    Ok(())
}
