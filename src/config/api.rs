//! Status API exposure configuration.

use serde::{Deserialize, Serialize};

use crate::error::ValidationReport;

/// The `[api]` config section.
///
/// `port` is the primary API listener; `http_port` is an additional plaintext
/// listener that only exists while `http_enable` is set. TLS and
/// authentication live in the surrounding gateway, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub port: u16,
    #[serde(alias = "httpPort")]
    pub http_port: u16,
    #[serde(alias = "httpEnable")]
    pub http_enable: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 8899,
            http_port: 8080,
            http_enable: false,
        }
    }
}

impl ApiConfig {
    pub fn validate(&self, report: &mut ValidationReport) {
        if self.port == 0 {
            report.invalid("cli/api/port", "must be nonzero");
        }
        if self.http_enable {
            if self.http_port == 0 {
                report.invalid("cli/api/httpPort", "must be nonzero when httpEnable is set");
            } else if self.http_port == self.port {
                report.invalid("cli/api/httpPort", "must differ from port");
            }
        }
    }

    /// Single-line projection. The plaintext port is only advertised to
    /// operators while the plaintext listener is actually enabled.
    pub fn config_info(&self) -> Vec<(&'static str, String)> {
        let mut info = format!("port={}", self.port);
        if self.http_enable {
            info.push_str(&format!(", httpPort={}", self.http_port));
        }
        info.push_str(&format!(", httpEnable={}", self.http_enable));
        vec![("cli/api", info)]
    }
}
