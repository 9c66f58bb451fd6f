//! Cart state model for the storefront.
//!
//! - **Cart**: ordered, duplicate-free lines keyed by product and size
//! - **CartStore**: the cart persisted under one key of a [`cart_kv::KvStore`]
//! - **Money**: exact decimal amounts, rounded to two places only for display
//!
//! # Example
//!
//! ```
//! use cart_core::prelude::*;
//! use cart_kv::MemoryStore;
//!
//! let store = CartStore::new(MemoryStore::new());
//! let size = LineSize::selected("7").unwrap();
//! store
//!     .add(AddToCart::sized("R1", "Gold Ring", Money::from_decimal(29.99), 2, size.clone()))
//!     .unwrap();
//! store
//!     .add(AddToCart::sized("R1", "Gold Ring", Money::from_decimal(29.99), 1, size))
//!     .unwrap();
//!
//! let cart = store.load();
//! assert_eq!(cart.get(&LineId::new("R1-7")).unwrap().quantity, 3);
//! ```

pub mod cart;
pub mod config;
pub mod error;
pub mod ids;
pub mod money;
pub mod quantity;
pub mod store;

pub use cart::{AddToCart, Cart, CartLine, CartTotals, LineSize, LineTotals};
pub use config::CartConfig;
pub use error::CartError;
pub use ids::{LineId, ProductId};
pub use money::Money;
pub use quantity::{adjust_pending_quantity, parse_quantity, MIN_QUANTITY};
pub use store::CartStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{AddToCart, Cart, CartLine, CartTotals, LineSize, LineTotals};
    pub use crate::config::CartConfig;
    pub use crate::error::CartError;
    pub use crate::ids::{LineId, ProductId};
    pub use crate::money::Money;
    pub use crate::quantity::adjust_pending_quantity;
    pub use crate::store::CartStore;
}
