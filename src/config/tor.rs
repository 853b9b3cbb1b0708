//! Tor transport configuration.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::ValidationReport;

/// How the configured Tor executable is located at launch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TorExecutableMode {
    /// The binary shipped alongside the client.
    Bundled,
    /// Resolve `tor` from the system PATH.
    System,
    /// Operator-supplied path, taken verbatim.
    Specified,
}

fn classify(executable: &str) -> TorExecutableMode {
    if executable.eq_ignore_ascii_case("tor") {
        TorExecutableMode::Bundled
    } else if executable.eq_ignore_ascii_case("system") {
        TorExecutableMode::System
    } else {
        TorExecutableMode::Specified
    }
}

/// The `[tor_config]` config section.
///
/// `onion_server` / `onion_backend` express a preference only; they take
/// effect solely in conjunction with the global `tor` flag, which is combined
/// at the aggregate level rather than here.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct TorConfig {
    pub executable: String,
    #[serde(alias = "onionServer")]
    pub onion_server: bool,
    #[serde(alias = "onionBackend")]
    pub onion_backend: bool,
    #[serde(alias = "customTorrc")]
    pub custom_torrc: Option<String>,

    #[serde(skip)]
    executable_mode: OnceLock<TorExecutableMode>,
}

impl Default for TorConfig {
    fn default() -> Self {
        Self {
            executable: "tor".to_string(),
            onion_server: true,
            onion_backend: true,
            custom_torrc: None,
            executable_mode: OnceLock::new(),
        }
    }
}

impl Clone for TorConfig {
    fn clone(&self) -> Self {
        Self {
            executable: self.executable.clone(),
            onion_server: self.onion_server,
            onion_backend: self.onion_backend,
            custom_torrc: self.custom_torrc.clone(),
            // The memo stays behind: a copy re-classifies on first read.
            executable_mode: OnceLock::new(),
        }
    }
}

impl TorConfig {
    /// Classify `executable` into an execution mode, memoized per instance.
    ///
    /// Pure string classification; no PATH probing or filesystem checks.
    pub fn executable_mode(&self) -> TorExecutableMode {
        *self
            .executable_mode
            .get_or_init(|| classify(self.executable.trim()))
    }

    pub fn validate(&self, report: &mut ValidationReport) {
        if self.executable.trim().is_empty() {
            report.missing("cli/tor/executable");
        }
    }

    pub fn config_info(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cli/tor/executable", self.executable.clone()),
            ("cli/tor/onionServer", self.onion_server.to_string()),
            ("cli/tor/onionBackend", self.onion_backend.to_string()),
            (
                "cli/tor/customTorrc",
                self.custom_torrc.as_deref().unwrap_or("null").to_string(),
            ),
        ]
    }
}
