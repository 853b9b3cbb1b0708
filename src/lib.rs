//! Tumbler - Whirlpool CoinJoin wallet client.
//!
//! This crate implements the configuration resolution and runtime bootstrap
//! layer of the client: it loads a declarative TOML document, batch-validates
//! it, resolves routing decisions (proxy selection, Tor vs. clear-net
//! coordinator addressing), masks secrets for support logs, and derives the
//! immutable parameter set the mixing engine consumes. The mixing protocol
//! itself lives behind the collaborator traits in [`runtime`].
//!
//! # Modules
//!
//! - [`config`] - Configuration loading, validation, and derivation
//! - [`runtime`] - Engine-facing runtime configuration and collaborator seams
//! - [`wallet`] - Thin wallet runtime with a cached status summary
//! - [`rest`] - Local HTTP status API
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use tumbler::config::CliConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CliConfig::load("tumbler.toml")?;
//!     println!("coordinator: {}", config.compute_server_url()?);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod rest;
pub mod runtime;
pub mod wallet;

#[cfg(test)]
pub mod testkit;
