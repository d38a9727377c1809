//! Product list configuration.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ProductListError;
use crate::money::Currency;

/// Configuration shared by the product list widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListConfig {
    /// Prefix of the generated CSS handle classes.
    #[serde(default = "default_css_namespace")]
    pub css_namespace: String,

    /// Manual price override settings.
    #[serde(default)]
    pub manual_price: ManualPriceConfig,

    /// Message overrides, keyed by message id.
    #[serde(default)]
    pub messages: HashMap<String, String>,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_css_namespace() -> String {
    "product-list".to_string()
}

impl Default for ProductListConfig {
    fn default() -> Self {
        Self {
            css_namespace: default_css_namespace(),
            manual_price: ManualPriceConfig::default(),
            messages: HashMap::new(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ProductListConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ProductListError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ProductListError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProductListError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ProductListError::ConfigRead {
                path: path.display().to_string(),
                source,
            })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }
}

/// Manual price override settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ManualPriceConfig {
    /// Whether operators may override prices.
    #[serde(default)]
    pub enabled: bool,

    /// Currency of typed amounts.
    #[serde(default)]
    pub currency: Currency,
}

/// Logging settings, interpreted by the observability crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level: trace, debug, info, warn or error.
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: json or human.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "json".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
