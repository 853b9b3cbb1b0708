//! Configuration model: sections, validation, masking, and derivation.

pub mod api;
pub mod dojo;
pub mod logging;
pub mod mask;
pub mod mix;
pub mod proxy;
pub mod server;
pub mod settings;
pub mod tor;

pub use settings::CliConfig;
