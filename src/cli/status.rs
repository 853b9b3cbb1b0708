//! Handler for the `status` command.

use std::time::Duration;

use crate::error::Result;

/// Execute the status command by querying a running instance's local API.
pub async fn execute(port: u16) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let url = format!("http://127.0.0.1:{port}/wallet");

    println!();
    println!("tumbler v{version}");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()?;

    match client.get(&url).send().await {
        Ok(response) if response.status().is_success() => {
            let body: serde_json::Value = response.json().await?;
            println!("Status:      ● running (port {port})");
            display_summary(&body);
        }
        Ok(response) => {
            println!("Status:      ● running (port {port})");
            println!();
            println!("API error:   HTTP {}", response.status());
        }
        Err(_) => {
            println!("Status:      ○ stopped");
            println!();
            println!("Run 'tumbler run' to start the wallet client.");
        }
    }

    println!();
    Ok(())
}

fn display_summary(body: &serde_json::Value) {
    let wallet = &body["wallet"];

    println!();
    if let Some(network) = wallet["network"].as_str() {
        println!("Network:     {network}");
    }
    if let Some(server_url) = wallet["server_url"].as_str() {
        println!("Coordinator: {server_url}");
    }
    if let Some(auto_mix) = wallet["auto_mix"].as_bool() {
        println!("Auto-mix:    {}", if auto_mix { "on" } else { "off" });
    }
    if let Some(mixs_target) = wallet["mixs_target"].as_u64() {
        println!("Mix target:  {mixs_target}");
    }
    if let Some(started_at) = wallet["started_at"].as_str() {
        println!("Started:     {started_at}");
    }
}
