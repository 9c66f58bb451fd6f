//! DOM ports and target handles.
//!
//! Pages expose different subsets of the cart elements. Each render or action
//! receives a record of optional handles and treats every handle as
//! independently present or absent; an absent handle is a silent no-op.

use cart_core::LineId;

/// An element whose text and visibility can be set.
pub trait Element {
    /// Replace the element's text content.
    fn set_text(&self, text: &str);

    /// Show or hide the element.
    fn set_visible(&self, visible: bool);
}

/// A table body that holds one row per cart line.
pub trait TableBody {
    /// Remove every row.
    fn clear_rows(&self);

    /// Append a row to the end of the table.
    fn append_row(&self, row: &CartRow);
}

/// A form control with a string value.
pub trait Input {
    /// Current value.
    fn value(&self) -> String;

    /// Replace the value.
    fn set_value(&self, value: &str);
}

/// An element carrying named attributes (e.g. `data-price`).
pub trait Attributes {
    /// Read an attribute, `None` if absent.
    fn attribute(&self, name: &str) -> Option<String>;
}

/// One rendered cart table row, already formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Line the row's remove control targets.
    pub line_id: LineId,
    /// Product name.
    pub name: String,
    /// Size label.
    pub size: String,
    /// Quantity.
    pub quantity: String,
    /// Unit price, two decimals.
    pub unit_price: String,
    /// Line total, two decimals.
    pub line_total: String,
}

/// Handles to the cart elements of the current page.
#[derive(Clone, Copy, Default)]
pub struct CartTargets<'a> {
    /// Header item-count badge.
    pub badge: Option<&'a dyn Element>,
    /// Whether the page marks itself as the cart page.
    pub is_cart_page: bool,
    /// The cart table, hidden when the cart is empty.
    pub table: Option<&'a dyn Element>,
    /// The cart table body.
    pub table_body: Option<&'a dyn TableBody>,
    /// "Your cart is empty" message.
    pub empty_message: Option<&'a dyn Element>,
    /// Subtotal display.
    pub subtotal: Option<&'a dyn Element>,
    /// Grand total display.
    pub grand_total: Option<&'a dyn Element>,
}

/// Handles to the product detail form.
#[derive(Clone, Copy, Default)]
pub struct FormTargets<'a> {
    /// The add-to-cart button with `data-id`, `data-name` and `data-price`.
    pub product: Option<&'a dyn Attributes>,
    /// Quantity input.
    pub quantity: Option<&'a dyn Input>,
    /// Size select.
    pub size: Option<&'a dyn Input>,
}

/// Attribute holding the product id.
pub const ATTR_PRODUCT_ID: &str = "data-id";
/// Attribute holding the product name.
pub const ATTR_PRODUCT_NAME: &str = "data-name";
/// Attribute holding the unit price.
pub const ATTR_PRODUCT_PRICE: &str = "data-price";
/// Attribute holding the line id on a cart-table remove control.
pub const ATTR_LINE_ID: &str = "data-id";
/// Class of the cart-table remove control.
pub const REMOVE_BUTTON_CLASS: &str = "remove-btn";

impl<'a> CartTargets<'a> {
    /// Targets for a page that only shows the badge.
    pub fn badge_only(badge: &'a dyn Element) -> Self {
        Self {
            badge: Some(badge),
            ..Self::default()
        }
    }
}
