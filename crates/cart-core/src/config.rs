//! Cart configuration.

use serde::{Deserialize, Serialize};

use crate::error::CartError;

/// Storage key used by the storefront.
pub const DEFAULT_STORAGE_KEY: &str = "jewelleryCart";

/// Cart configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Key the whole cart is stored under.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Symbol prefixed to displayed amounts.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl CartConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        Ok(toml::from_str(content)?)
    }

    /// Use a different storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.storage_key, "jewelleryCart");
        assert_eq!(config.currency_symbol, "$");
    }

    #[test]
    fn test_from_toml_partial() {
        let config = CartConfig::from_toml_str(r#"currency_symbol = "£""#).unwrap();
        assert_eq!(config.storage_key, "jewelleryCart");
        assert_eq!(config.currency_symbol, "£");
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = CartConfig::from_toml_str("storage_key = 42");
        assert!(matches!(result, Err(CartError::Config(_))));
    }
}
