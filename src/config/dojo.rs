//! Dojo backend configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::mask::mask;
use crate::error::ValidationReport;

/// The `[dojo]` config section: a self-hosted blockchain backend that
/// replaces the default hosted one when enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DojoConfig {
    pub url: String,
    #[serde(alias = "apiKey")]
    pub api_key: String,
    pub enabled: bool,
}

impl DojoConfig {
    /// A disabled Dojo section carries no requirements; an enabled one must
    /// name a parseable URL and an API key. Structural checks only, no
    /// network reachability probing.
    pub fn validate(&self, report: &mut ValidationReport) {
        if !self.enabled {
            return;
        }
        if self.url.trim().is_empty() {
            report.missing("cli/dojo/url");
        } else if Url::parse(self.url.trim()).is_err() {
            report.invalid("cli/dojo/url", "not a valid URL");
        }
        if self.api_key.trim().is_empty() {
            report.missing("cli/dojo/apiKey");
        }
    }

    pub fn config_info(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cli/dojo/url", self.url.clone()),
            ("cli/dojo/apiKey", mask(Some(&self.api_key))),
            ("cli/dojo/enabled", self.enabled.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_dojo() -> DojoConfig {
        DojoConfig {
            url: "http://dojo.local:8080/v2".to_string(),
            api_key: "dojo-api-key-0123456789".to_string(),
            enabled: true,
        }
    }

    #[test]
    fn disabled_section_has_no_requirements() {
        let mut report = ValidationReport::new();
        DojoConfig::default().validate(&mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn enabled_section_requires_url_and_key() {
        let config = DojoConfig {
            enabled: true,
            ..DojoConfig::default()
        };
        let mut report = ValidationReport::new();
        config.validate(&mut report);

        let fields: Vec<&str> = report.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["cli/dojo/url", "cli/dojo/apiKey"]);
    }

    #[test]
    fn unparseable_url_is_rejected() {
        let config = DojoConfig {
            url: "not a url".to_string(),
            ..enabled_dojo()
        };
        let mut report = ValidationReport::new();
        config.validate(&mut report);
        assert_eq!(report.violations()[0].field, "cli/dojo/url");
    }

    #[test]
    fn valid_section_passes() {
        let mut report = ValidationReport::new();
        enabled_dojo().validate(&mut report);
        assert!(report.is_empty());
    }

    #[test]
    fn api_key_is_masked_in_config_info() {
        let info = enabled_dojo().config_info();
        assert_eq!(info[1].0, "cli/dojo/apiKey");
        assert!(!info[1].1.contains("dojo-api-key-0123456789"));
        assert_eq!(info[1].1, "doj***789");
    }

    #[test]
    fn config_info_key_order() {
        let keys: Vec<&str> = enabled_dojo()
            .config_info()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["cli/dojo/url", "cli/dojo/apiKey", "cli/dojo/enabled"]);
    }
}
