//! Cart error types.

use cart_kv::KvError;
use thiserror::Error;

use crate::money::Money;

/// Errors that can occur in cart operations.
#[derive(Error, Debug)]
pub enum CartError {
    /// Quantity below one.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Negative unit price.
    #[error("Invalid price: {0}")]
    InvalidPrice(Money),

    /// Arithmetic overflow in a quantity or money calculation.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,

    /// Stored cart violates the cart invariants.
    #[error("Invalid stored cart: {0}")]
    InvalidStoredCart(String),

    /// Backing store failure.
    #[error("Storage error: {0}")]
    Storage(#[from] KvError),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for CartError {
    fn from(e: toml::de::Error) -> Self {
        CartError::Config(e.to_string())
    }
}
