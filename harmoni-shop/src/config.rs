//! Storefront configuration.
use serde::{Deserialize, Serialize};

use crate::format::CurrencyFormat;
use crate::search::MAX_RESULTS;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parsing error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Shop-wide settings. Every field falls back to the production default when
/// missing from the JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Greeted by name at the top of the checkout message.
    pub business_name: String,
    /// Destination for `wa.me` checkout links, digits only.
    pub whatsapp_phone: String,
    pub currency_label: String,
    pub group_separator: char,
    pub search_limit: usize,
    /// Persistent storage key holding the language preference.
    pub language_key: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        let currency = CurrencyFormat::rupiah();
        Self {
            business_name: "Harmoni Nusantara".to_string(),
            whatsapp_phone: "6289607793513".to_string(),
            currency_label: currency.label,
            group_separator: currency.group_separator,
            search_limit: MAX_RESULTS,
            language_key: "harmoni.lang".to_string(),
        }
    }
}

impl ShopConfig {
    /// Parse a config document, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn currency(&self) -> CurrencyFormat {
        CurrencyFormat {
            label: self.currency_label.clone(),
            group_separator: self.group_separator,
        }
    }
}
