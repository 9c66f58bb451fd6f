//! Storage-backed cart.
//!
//! The stored value is the single source of truth. Nothing is cached between
//! calls: every operation reads the whole cart, and every mutation writes the
//! whole cart back, so a page load always sees the last persisted state.
//!
//! Two tabs mutating concurrently resolve as last-write-wins.

use cart_kv::{JsonStore, KvStore};
use tracing::{debug, warn};

use crate::cart::{AddToCart, Cart};
use crate::config::CartConfig;
use crate::error::CartError;
use crate::ids::LineId;

/// Cart persisted under one key of a [`KvStore`].
///
/// # Example
///
/// ```
/// use cart_core::{AddToCart, CartStore, Money};
/// use cart_kv::MemoryStore;
///
/// let store = CartStore::new(MemoryStore::new());
/// store.add(AddToCart::quick("R1", "Gold Ring", Money::from_decimal(29.99))).unwrap();
/// store.add(AddToCart::quick("R1", "Gold Ring", Money::from_decimal(29.99))).unwrap();
///
/// let cart = store.load();
/// assert_eq!(cart.total_items(), 2);
/// assert_eq!(cart.subtotal().unwrap().display_amount(), "59.98");
/// ```
#[derive(Debug)]
pub struct CartStore<S> {
    store: JsonStore<S>,
    config: CartConfig,
}

impl<S: KvStore> CartStore<S> {
    /// Create a cart store with the default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, CartConfig::default())
    }

    /// Create a cart store with an explicit configuration.
    pub fn with_config(store: S, config: CartConfig) -> Self {
        Self {
            store: JsonStore::new(store),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    /// The key the cart is stored under.
    pub fn key(&self) -> &str {
        &self.config.storage_key
    }

    /// Borrow the raw backing store.
    pub fn backend(&self) -> &S {
        self.store.inner()
    }

    /// Read the stored cart.
    ///
    /// Never fails: an absent key, unreadable store, or malformed content all
    /// yield an empty cart.
    pub fn load(&self) -> Cart {
        match self.store.get::<Cart>(self.key()) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %self.key(), error = %e, "discarding unreadable stored cart");
                Cart::new()
            }
        }
    }

    /// Write the full cart, replacing whatever was stored.
    pub fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        self.store.set(self.key(), cart)?;
        debug!(key = %self.key(), lines = cart.len(), items = cart.total_items(), "persisted cart");
        Ok(())
    }

    /// Load, add or merge one product, and persist.
    ///
    /// On error nothing is written.
    pub fn add(&self, item: AddToCart) -> Result<Cart, CartError> {
        let mut cart = self.load();
        let id = cart.add_or_merge(item)?;
        self.persist(&cart)?;
        debug!(line = %id, "added to cart");
        Ok(cart)
    }

    /// Load, remove every line with `id`, and persist.
    ///
    /// Removing an absent id still rewrites the (unchanged) cart.
    pub fn remove(&self, id: &LineId) -> Result<Cart, CartError> {
        let mut cart = self.load();
        let removed = cart.remove(id);
        self.persist(&cart)?;
        debug!(line = %id, removed, "removed from cart");
        Ok(cart)
    }

    /// Delete the stored cart. The key is removed, not set to `[]`.
    pub fn clear(&self) -> Result<(), CartError> {
        self.store.delete(self.key())?;
        debug!(key = %self.key(), "cleared cart");
        Ok(())
    }

    /// Item count of the stored cart.
    pub fn total_items(&self) -> i64 {
        self.load().total_items()
    }
}
