//! Mix economics configuration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationReport;

/// The `[mix]` config section: concurrency caps and economics knobs handed to
/// the mixing engine at bootstrap.
///
/// Unsigned fields make the non-negativity invariant structural; the map type
/// for `overspend` makes duplicate tier keys unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConfig {
    /// Max concurrent mix clients across all pools.
    pub clients: u32,
    #[serde(alias = "clientsPerPool")]
    pub clients_per_pool: u32,
    /// Stagger between client startups, in seconds.
    #[serde(alias = "clientDelay")]
    pub client_delay: u32,
    /// Stagger between tx0 broadcasts, in seconds.
    #[serde(alias = "tx0Delay")]
    pub tx0_delay: u32,
    /// Cap on outputs per tx0; 0 means uncapped.
    #[serde(alias = "tx0MaxOutputs")]
    pub tx0_max_outputs: u32,
    #[serde(alias = "autoMix")]
    pub auto_mix: bool,
    /// Target number of mixes per UTXO.
    #[serde(alias = "mixsTarget")]
    pub mixs_target: u32,
    /// Extra satoshis allowed per denomination tier when premixing.
    pub overspend: Option<BTreeMap<String, u64>>,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            clients: 5,
            clients_per_pool: 1,
            client_delay: 30,
            tx0_delay: 30,
            tx0_max_outputs: 0,
            auto_mix: true,
            mixs_target: 1,
            overspend: None,
        }
    }
}

impl MixConfig {
    pub fn validate(&self, report: &mut ValidationReport) {
        if self.clients == 0 {
            report.invalid("cli/mix/clients", "must be >= 1");
        }
        if self.clients_per_pool == 0 {
            report.invalid("cli/mix/clientsPerPool", "must be >= 1");
        }
        if self.mixs_target == 0 {
            report.invalid("cli/mix/mixsTarget", "must be >= 1");
        }
        if let Some(overspend) = &self.overspend {
            if overspend.keys().any(|tier| tier.trim().is_empty()) {
                report.invalid("cli/mix/overspend", "blank denomination tier key");
            }
        }
    }

    pub fn config_info(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cli/mix/clients", self.clients.to_string()),
            ("cli/mix/clientsPerPool", self.clients_per_pool.to_string()),
            ("cli/mix/clientDelay", self.client_delay.to_string()),
            ("cli/mix/tx0Delay", self.tx0_delay.to_string()),
            ("cli/mix/tx0MaxOutputs", self.tx0_max_outputs.to_string()),
            ("cli/mix/autoMix", self.auto_mix.to_string()),
            ("cli/mix/mixsTarget", self.mixs_target.to_string()),
            ("cli/mix/overspend", self.format_overspend()),
        ]
    }

    fn format_overspend(&self) -> String {
        match &self.overspend {
            None => "null".to_string(),
            Some(map) => {
                let entries: Vec<String> =
                    map.iter().map(|(tier, sats)| format!("{tier}={sats}")).collect();
                format!("{{{}}}", entries.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_clean() {
        let mut report = ValidationReport::new();
        MixConfig::default().validate(&mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn zero_concurrency_fields_are_rejected_together() {
        let config = MixConfig {
            clients: 0,
            clients_per_pool: 0,
            ..MixConfig::default()
        };
        let mut report = ValidationReport::new();
        config.validate(&mut report);

        let fields: Vec<&str> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["cli/mix/clients", "cli/mix/clientsPerPool"]);
    }

    #[test]
    fn blank_overspend_tier_is_rejected() {
        let config = MixConfig {
            overspend: Some(BTreeMap::from([(" ".to_string(), 100)])),
            ..MixConfig::default()
        };
        let mut report = ValidationReport::new();
        config.validate(&mut report);
        assert_eq!(report.violations()[0].field, "cli/mix/overspend");
    }

    #[test]
    fn uncapped_tx0_outputs_is_valid() {
        let config = MixConfig {
            tx0_max_outputs: 0,
            ..MixConfig::default()
        };
        let mut report = ValidationReport::new();
        config.validate(&mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn config_info_key_order() {
        let keys: Vec<&str> = MixConfig::default()
            .config_info()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(
            keys,
            vec![
                "cli/mix/clients",
                "cli/mix/clientsPerPool",
                "cli/mix/clientDelay",
                "cli/mix/tx0Delay",
                "cli/mix/tx0MaxOutputs",
                "cli/mix/autoMix",
                "cli/mix/mixsTarget",
                "cli/mix/overspend",
            ]
        );
    }

    #[test]
    fn overspend_renders_sorted_map_or_null() {
        assert_eq!(MixConfig::default().format_overspend(), "null");

        let config = MixConfig {
            overspend: Some(BTreeMap::from([
                ("0.5btc".to_string(), 5000),
                ("0.01btc".to_string(), 100),
            ])),
            ..MixConfig::default()
        };
        assert_eq!(config.format_overspend(), "{0.01btc=100, 0.5btc=5000}");
    }

    #[test]
    fn accepts_camel_case_keys() {
        let config: MixConfig = toml::from_str(
            r#"
            clientsPerPool = 2
            tx0MaxOutputs = 10
            autoMix = false
            "#,
        )
        .unwrap();
        assert_eq!(config.clients_per_pool, 2);
        assert_eq!(config.tx0_max_outputs, 10);
        assert!(!config.auto_mix);
    }
}
