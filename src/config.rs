//! Service configuration, loaded from YAML
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_CURRENCIES: [&str; 4] = ["NGN", "USD", "GBP", "GHS"];

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Currency codes an instruction may name (CU02 otherwise)
    #[serde(default = "default_currencies")]
    pub supported_currencies: Vec<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub use_json: bool,
}

fn default_currencies() -> Vec<String> {
    DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            supported_currencies: default_currencies(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            use_json: false,
        }
    }
}

impl AppConfig {
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let config: AppConfig =
            serde_yaml::from_str(yaml).context("Failed to parse transfer config YAML")?;
        Ok(config.normalized())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Replace the supported currency set, e.g. for a single deployment
    pub fn with_currencies(mut self, currencies: &[&str]) -> Self {
        self.supported_currencies = currencies.iter().map(|c| c.to_string()).collect();
        self.normalized()
    }

    // codes are compared against upper-cased instruction currencies
    fn normalized(mut self) -> Self {
        let mut seen = Vec::with_capacity(self.supported_currencies.len());
        for code in self.supported_currencies {
            let code = code.trim().to_ascii_uppercase();
            if !code.is_empty() && !seen.contains(&code) {
                seen.push(code);
            }
        }
        self.supported_currencies = seen;
        self
    }
}
