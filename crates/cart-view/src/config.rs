//! Page element addresses and storefront configuration.

use cart_core::{CartConfig, CartError};
use serde::{Deserialize, Serialize};

/// Where the cart elements live on a page.
///
/// Values are element ids except `cart_page_marker`, which is a CSS selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomIds {
    /// Header item-count badge.
    pub badge: String,
    /// Selector present only on the cart page.
    pub cart_page_marker: String,
    /// Cart table body.
    pub table_body: String,
    /// Empty-cart message.
    pub empty_message: String,
    /// Subtotal display.
    pub subtotal: String,
    /// Grand total display.
    pub grand_total: String,
    /// Product detail add-to-cart form.
    pub form: String,
    /// Button carrying the product data attributes.
    pub add_button: String,
    /// Quantity input.
    pub quantity: String,
    /// Size select.
    pub size: String,
}

impl Default for DomIds {
    fn default() -> Self {
        Self {
            badge: "cart-count".to_string(),
            cart_page_marker: ".cart-page-container".to_string(),
            table_body: "cart-table-body".to_string(),
            empty_message: "empty-cart-message".to_string(),
            subtotal: "cart-subtotal".to_string(),
            grand_total: "cart-grand-total".to_string(),
            form: "add-to-cart-form".to_string(),
            add_button: "add-to-cart-btn".to_string(),
            quantity: "quantity".to_string(),
            size: "ring-size".to_string(),
        }
    }
}

/// Cart plus page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Storage and display settings.
    #[serde(default)]
    pub cart: CartConfig,

    /// Element addresses.
    #[serde(default)]
    pub dom: DomIds,
}

impl StorefrontConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, CartError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = StorefrontConfig::from_toml_str("").unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = StorefrontConfig::from_toml_str(
            r#"
            [cart]
            storage_key = "shopCart"

            [dom]
            size = "size-select"
            "#,
        )
        .unwrap();

        assert_eq!(config.cart.storage_key, "shopCart");
        assert_eq!(config.cart.currency_symbol, "$");
        assert_eq!(config.dom.size, "size-select");
        assert_eq!(config.dom.badge, "cart-count");
    }
}
