//! Cart line and size types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::CartError;
use crate::ids::{LineId, ProductId};
use crate::money::Money;

/// Size stored on lines added without a size selection.
pub const QUICK_ADD_SIZE_LABEL: &str = "N/A (Quick Add)";

/// Line id tag used when no size was chosen.
pub const DEFAULT_SIZE_TAG: &str = "default";

/// Size (or option) selected for a line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LineSize {
    /// No size applies (quick-add).
    #[default]
    Default,
    /// A size picked on the product form.
    Selected(String),
}

impl LineSize {
    /// Build a selected size from raw form input.
    ///
    /// Returns `None` for blank input, which the form treats as "no size
    /// chosen". Anything else is kept verbatim, surrounding spaces included,
    /// since the value becomes part of the line id.
    pub fn selected(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            None
        } else {
            Some(LineSize::Selected(raw.to_string()))
        }
    }

    /// The tag appended to the product id to form the line id.
    pub fn tag(&self) -> &str {
        match self {
            LineSize::Default => DEFAULT_SIZE_TAG,
            LineSize::Selected(size) => size,
        }
    }

    /// The text stored and displayed for this size.
    pub fn label(&self) -> &str {
        match self {
            LineSize::Default => QUICK_ADD_SIZE_LABEL,
            LineSize::Selected(size) => size,
        }
    }
}

impl fmt::Display for LineSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for LineSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for LineSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == QUICK_ADD_SIZE_LABEL {
            return Ok(LineSize::Default);
        }
        // Stored sizes are taken as written so a reload never rewrites them.
        Ok(LineSize::Selected(raw))
    }
}

/// One distinct purchasable configuration in the cart.
///
/// Field order matches the stored JSON object: `{id, name, price, quantity, size}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Derived `<product id>-<size tag>` identifier.
    pub id: LineId,
    /// Display name, snapshotted at first add.
    pub name: String,
    /// Unit price, snapshotted at first add.
    pub price: Money,
    /// Quantity, always at least one.
    pub quantity: i64,
    /// Selected size or the quick-add sentinel.
    pub size: LineSize,
}

impl CartLine {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CartError> {
        self.price
            .try_multiply(self.quantity)
            .ok_or(CartError::Overflow)
    }

    /// Check the per-line invariants a stored line must satisfy.
    pub(crate) fn validate(&self) -> Result<(), CartError> {
        if self.quantity < 1 {
            return Err(CartError::InvalidQuantity(self.quantity));
        }
        if self.price.is_negative() || !self.price.is_finite() {
            return Err(CartError::InvalidPrice(self.price));
        }
        Ok(())
    }
}

/// A request to add a product to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCart {
    /// Catalog product id.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Quantity to add.
    pub quantity: i64,
    /// Selected size.
    pub size: LineSize,
}

impl AddToCart {
    /// A quick-add: one unit, no size.
    pub fn quick(product_id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity: 1,
            size: LineSize::Default,
        }
    }

    /// An add from the product form with a chosen size and quantity.
    pub fn sized(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        quantity: i64,
        size: LineSize,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price,
            quantity,
            size,
        }
    }

    /// The id of the line this request lands on.
    pub fn line_id(&self) -> LineId {
        LineId::derive(&self.product_id, &self.size)
    }
}
