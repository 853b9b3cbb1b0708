//! Coordinator server identities and their endpoint table.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Bitcoin network a coordinator deployment operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        };
        write!(f, "{name}")
    }
}

/// Known coordinator deployments.
///
/// Config files may spell these in legacy SCREAMING_CASE or lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServerId {
    #[serde(rename = "TESTNET", alias = "testnet")]
    Testnet,
    #[serde(rename = "INTEGRATION", alias = "integration")]
    Integration,
    #[serde(rename = "MAINNET", alias = "mainnet")]
    Mainnet,
    #[serde(rename = "LOCAL_TESTNET", alias = "local_testnet")]
    LocalTestnet,
}

impl Default for ServerId {
    fn default() -> Self {
        // Default to testnet so a bare config never mixes on mainnet.
        ServerId::Testnet
    }
}

impl ServerId {
    pub fn clear_url(&self) -> &'static str {
        match self {
            ServerId::Testnet => "https://pool.whirl.mx:8081",
            ServerId::Integration => "https://pool.whirl.mx:8082",
            ServerId::Mainnet => "https://pool.whirl.mx:8080",
            ServerId::LocalTestnet => "http://127.0.0.1:8080",
        }
    }

    /// Hidden-service endpoint, where the deployment registers one.
    pub fn onion_url(&self) -> Option<&'static str> {
        match self {
            ServerId::Testnet => {
                Some("http://pooltestq4nmfr7e32xvlkqbnq6cyp4o7dkkxdcnqixdrkxztz3hoyyd.onion")
            }
            ServerId::Integration => {
                Some("http://poolintgx5rcdze4mkvq7ybw2nhaos6lfjtp3u2qirvmwdkcen7zbhid.onion")
            }
            ServerId::Mainnet => {
                Some("http://poolmainb7uewrv3ldxqzk2fcn4haty6miosp5gjdwk7cqbxzre2nhyd.onion")
            }
            ServerId::LocalTestnet => None,
        }
    }

    pub fn network(&self) -> Network {
        match self {
            ServerId::Mainnet => Network::Mainnet,
            ServerId::Testnet | ServerId::Integration | ServerId::LocalTestnet => Network::Testnet,
        }
    }

    /// Endpoint for the requested routing mode.
    ///
    /// A mode with no registered endpoint is a hard error; continuing on the
    /// other mode would silently route traffic over the wrong network.
    pub fn endpoint(&self, onion: bool) -> Result<&'static str, ConfigError> {
        if onion {
            self.onion_url().ok_or(ConfigError::UnresolvedServer {
                server: *self,
                mode: "onion",
            })
        } else {
            Ok(self.clear_url())
        }
    }
}

impl fmt::Display for ServerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ServerId::Testnet => "TESTNET",
            ServerId::Integration => "INTEGRATION",
            ServerId::Mainnet => "MAINNET",
            ServerId::LocalTestnet => "LOCAL_TESTNET",
        };
        write!(f, "{name}")
    }
}
