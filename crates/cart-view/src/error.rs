//! Page action error types.

use cart_core::CartError;
use thiserror::Error;

/// Reasons a page action was rejected.
///
/// The `Display` text is what the shopper is shown.
#[derive(Error, Debug)]
pub enum ActionError {
    /// The product form was submitted without a size.
    #[error("Please select a size before adding to cart.")]
    MissingSize,

    /// The quantity input did not hold a whole number of at least one.
    #[error("Please enter a valid quantity.")]
    InvalidQuantity(String),

    /// The add-to-cart source lacks a product attribute.
    #[error("Sorry, this product could not be added to the cart ({0} missing).")]
    MissingProduct(&'static str),

    /// The cart itself refused the change or could not be saved.
    #[error("Sorry, your cart could not be updated: {0}")]
    Cart(#[from] CartError),
}
