//! Renders the storefront cart into whatever page elements are present.
//!
//! - **Targets**: optional handles to the badge, cart table, totals and form
//! - **CartView**: badge/table rendering, remove-and-rerender, page bootstrap
//! - **Actions**: quick-add, form-add, clear and the quantity stepper, with
//!   shopper feedback through a [`Notifier`]
//!
//! On `wasm32` the `web` module binds all of this to the browser DOM and
//! `localStorage`, and [`logging`] routes `tracing` output to the console.
//!
//! # Example
//!
//! ```
//! use cart_core::{CartStore, Money};
//! use cart_kv::MemoryStore;
//! use cart_view::prelude::*;
//!
//! let store = CartStore::new(MemoryStore::new());
//! let badge = MemoryElement::new();
//! let notifier = RecordingNotifier::new();
//! let view = CartView::new(&store, CartTargets::badge_only(&badge), &notifier);
//!
//! view.quick_add("R1", "Gold Ring", Money::from_decimal(29.99)).unwrap();
//! assert_eq!(badge.text(), "1");
//! assert_eq!(notifier.last().unwrap(), "Gold Ring added to cart!");
//! ```

mod actions;
pub mod config;
pub mod dom;
mod error;
pub mod logging;
pub mod memory;
mod notify;
mod view;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use actions::CART_CLEARED_MESSAGE;
pub use config::{DomIds, StorefrontConfig};
pub use dom::{Attributes, CartRow, CartTargets, Element, FormTargets, Input, TableBody};
pub use error::ActionError;
pub use notify::{Notifier, RecordingNotifier};
pub use view::{cart_row, CartView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::dom::{Attributes, CartRow, CartTargets, Element, FormTargets, Input, TableBody};
    pub use crate::error::ActionError;
    pub use crate::memory::{MemoryAttributes, MemoryElement, MemoryInput, MemoryTableBody};
    pub use crate::notify::{Notifier, RecordingNotifier};
    pub use crate::view::CartView;
}
