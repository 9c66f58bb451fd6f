//! Shopping cart module.
//!
//! Contains types for the cart, its lines, and totals.

mod cart;
mod line;
mod pricing;

pub use cart::Cart;
pub use line::{AddToCart, CartLine, LineSize, DEFAULT_SIZE_TAG, QUICK_ADD_SIZE_LABEL};
pub use pricing::{CartTotals, LineTotals};
