//! Synchronous key-value storage for the storefront cart.
//!
//! The cart never talks to browser storage directly. It is handed a
//! [`KvStore`], which is `localStorage` in the browser and a
//! [`MemoryStore`] everywhere else.
//!
//! # Example
//!
//! ```
//! use cart_kv::{JsonStore, KvStore, MemoryStore};
//!
//! let store = JsonStore::new(MemoryStore::new());
//! store.set("jewelleryCart", &Vec::<String>::new()).unwrap();
//! assert!(store.exists("jewelleryCart").unwrap());
//!
//! store.delete("jewelleryCart").unwrap();
//! assert!(!store.inner().exists("jewelleryCart").unwrap());
//! ```

mod error;
mod json;
mod store;

#[cfg(target_arch = "wasm32")]
mod local;

pub use error::KvError;
pub use json::JsonStore;
pub use store::{KvStore, MemoryStore};

#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{JsonStore, KvError, KvStore, MemoryStore};
}
