//! Shopper-initiated page actions.
//!
//! Each action runs to completion within one event callback: load, mutate,
//! persist, refresh, notify. A rejected action leaves storage untouched and
//! tells the shopper why.

use cart_core::{
    adjust_pending_quantity, parse_quantity, AddToCart, Cart, LineSize, Money, ProductId,
    MIN_QUANTITY,
};
use cart_kv::KvStore;
use tracing::warn;

use crate::dom::{FormTargets, ATTR_PRODUCT_ID, ATTR_PRODUCT_NAME, ATTR_PRODUCT_PRICE};
use crate::error::ActionError;
use crate::view::CartView;

/// Shown after the cart is cleared.
pub const CART_CLEARED_MESSAGE: &str = "Your cart has been successfully emptied.";

impl<'a, S: KvStore> CartView<'a, S> {
    /// Add one unit of a product without a size.
    pub fn quick_add(
        &self,
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Cart, ActionError> {
        let item = AddToCart::quick(product_id, name, price);
        let message = format!("{} added to cart!", item.name);
        self.commit_add(item, message)
    }

    /// Add the product described by the detail form.
    ///
    /// Rejected without touching storage when no size is selected or the
    /// form's product data is incomplete.
    pub fn form_add(&self, form: &FormTargets<'_>) -> Result<Cart, ActionError> {
        let item = match read_form(form) {
            Ok(item) => item,
            Err(e) => return Err(self.reject(e)),
        };
        let message = format!(
            "{}x {} (Size {}) added to cart!",
            item.quantity, item.name, item.size
        );
        self.commit_add(item, message)
    }

    /// Delete the stored cart and refresh the page.
    pub fn clear_cart(&self) -> Result<(), ActionError> {
        if let Err(e) = self.store.clear() {
            return Err(self.reject(e.into()));
        }
        self.update_badge(None);
        if self.targets.is_cart_page {
            self.render_cart_table(&Cart::new());
        }
        self.notifier.notify(CART_CLEARED_MESSAGE);
        Ok(())
    }

    /// Step the form's pending quantity by `delta`, never below one.
    ///
    /// Returns the new value, or `None` when the page has no quantity input.
    pub fn step_quantity(&self, form: &FormTargets<'_>, delta: i64) -> Option<i64> {
        let input = form.quantity?;
        let current = parse_quantity(&input.value()).unwrap_or(MIN_QUANTITY);
        let next = adjust_pending_quantity(current, delta);
        input.set_value(&next.to_string());
        Some(next)
    }

    fn commit_add(&self, item: AddToCart, message: String) -> Result<Cart, ActionError> {
        match self.store.add(item) {
            Ok(cart) => {
                self.update_badge(Some(&cart));
                self.notifier.notify(&message);
                Ok(cart)
            }
            Err(e) => Err(self.reject(e.into())),
        }
    }

    fn reject(&self, error: ActionError) -> ActionError {
        warn!(error = %error, "cart action rejected");
        self.notifier.notify(&error.to_string());
        error
    }
}

/// Build an add request from the product form.
fn read_form(form: &FormTargets<'_>) -> Result<AddToCart, ActionError> {
    let product = form.product.ok_or(ActionError::MissingProduct("product"))?;
    let product_id = product
        .attribute(ATTR_PRODUCT_ID)
        .filter(|id| !id.trim().is_empty())
        .ok_or(ActionError::MissingProduct("id"))?;
    let name = product
        .attribute(ATTR_PRODUCT_NAME)
        .ok_or(ActionError::MissingProduct("name"))?;
    let price = product
        .attribute(ATTR_PRODUCT_PRICE)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .and_then(Money::try_from_decimal)
        .ok_or(ActionError::MissingProduct("price"))?;

    let size = form
        .size
        .and_then(|input| LineSize::selected(&input.value()))
        .ok_or(ActionError::MissingSize)?;

    let raw_quantity = form.quantity.map(|input| input.value()).unwrap_or_default();
    let quantity = parse_quantity(&raw_quantity)
        .filter(|q| *q >= MIN_QUANTITY)
        .ok_or(ActionError::InvalidQuantity(raw_quantity))?;

    Ok(AddToCart::sized(product_id, name, price, quantity, size))
}
