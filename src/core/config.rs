use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};
use tracing::debug;

/// Exchange rates against the AUD base used when the config file does
/// not carry its own table.
pub fn default_rates() -> HashMap<String, f64> {
    HashMap::from([
        ("AUD".to_string(), 1.0),
        ("USD".to_string(), 0.66),
        ("INR".to_string(), 54.25),
        ("CNY".to_string(), 4.72),
        ("JPY".to_string(), 93.87),
        ("HKD".to_string(), 5.12),
        ("KRW".to_string(), 860.92),
        ("GBP".to_string(), 0.51),
        ("EUR".to_string(), 0.60),
        ("SGD".to_string(), 0.88),
    ])
}

fn default_currency() -> String {
    "AUD".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// CSV file holding the property records; overridable with --data.
    pub data_file: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_rates")]
    pub rates: HashMap<String, f64>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "suburbia", "suburbia")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
data_file: "property_information.csv"
currency: "USD"
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(
            config.data_file,
            Some("property_information.csv".to_string())
        );
        assert_eq!(config.currency, "USD");
        // Rate table falls back to the built-in defaults
        assert_eq!(config.rates["AUD"], 1.0);
        assert_eq!(config.rates["KRW"], 860.92);

        let yaml_str_with_rates = r#"
data_file: "sales.csv"
currency: "EUR"
rates:
  AUD: 1.0
  EUR: 0.61
"#;
        let config_with_rates: AppConfig = serde_yaml::from_str(yaml_str_with_rates).unwrap();
        assert_eq!(config_with_rates.rates.len(), 2);
        assert_eq!(config_with_rates.rates["EUR"], 0.61);
    }

    #[test]
    fn test_config_currency_defaults_to_aud() {
        let config: AppConfig = serde_yaml::from_str("data_file: \"sales.csv\"").unwrap();
        assert_eq!(config.currency, "AUD");
    }
}
