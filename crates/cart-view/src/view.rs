//! Projection of the stored cart onto the page.
//!
//! Every render is an idempotent function of the persisted cart: rendering
//! twice from the same stored state leaves the page unchanged.

use cart_core::{Cart, CartError, CartLine, CartStore, LineId, Money};
use cart_kv::KvStore;
use tracing::{debug, warn};

use crate::dom::{Attributes, CartRow, CartTargets, ATTR_LINE_ID};
use crate::notify::Notifier;

/// Binds a cart store, the current page's targets, and a notifier.
pub struct CartView<'a, S> {
    pub(crate) store: &'a CartStore<S>,
    pub(crate) targets: CartTargets<'a>,
    pub(crate) notifier: &'a dyn Notifier,
}

impl<'a, S: KvStore> CartView<'a, S> {
    /// Create a view over the given page targets.
    pub fn new(
        store: &'a CartStore<S>,
        targets: CartTargets<'a>,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self {
            store,
            targets,
            notifier,
        }
    }

    /// The underlying cart store.
    pub fn store(&self) -> &CartStore<S> {
        self.store
    }

    /// Set the badge to the cart's item count.
    ///
    /// Without a cart the stored cart is read.
    pub fn update_badge(&self, cart: Option<&Cart>) {
        let Some(badge) = self.targets.badge else {
            return;
        };
        let count = match cart {
            Some(cart) => cart.total_items(),
            None => self.store.total_items(),
        };
        badge.set_text(&count.to_string());
    }

    /// Rebuild the cart table, empty-cart message and totals.
    ///
    /// A no-op on pages without a table body.
    pub fn render_cart_table(&self, cart: &Cart) {
        let Some(body) = self.targets.table_body else {
            return;
        };
        body.clear_rows();

        if cart.is_empty() {
            if let Some(table) = self.targets.table {
                table.set_visible(false);
            }
            if let Some(message) = self.targets.empty_message {
                message.set_visible(true);
            }
            return;
        }

        if let Some(table) = self.targets.table {
            table.set_visible(true);
        }
        if let Some(message) = self.targets.empty_message {
            message.set_visible(false);
        }

        let symbol = &self.store.config().currency_symbol;
        for line in cart {
            match cart_row(line, symbol) {
                Ok(row) => body.append_row(&row),
                Err(e) => warn!(line = %line.id, error = %e, "skipping unrenderable cart line"),
            }
        }

        match (cart.subtotal(), cart.grand_total()) {
            (Ok(subtotal), Ok(grand_total)) => {
                if let Some(el) = self.targets.subtotal {
                    el.set_text(&subtotal.display_with(symbol));
                }
                if let Some(el) = self.targets.grand_total {
                    el.set_text(&grand_total.display_with(symbol));
                }
            }
            (Err(e), _) | (_, Err(e)) => warn!(error = %e, "cart totals not rendered"),
        }

        self.update_badge(Some(cart));
        debug!(lines = cart.len(), "rendered cart table");
    }

    /// Remove a line, persist, and redraw the table and badge.
    pub fn remove_and_rerender(&self, id: &LineId) -> Result<Cart, CartError> {
        let cart = self.store.remove(id)?;
        self.render_cart_table(&cart);
        self.update_badge(Some(&cart));
        Ok(cart)
    }

    /// Handle a click on a cart-table remove control.
    ///
    /// The control names its line in `data-id`. Returns `Ok(None)`, touching
    /// nothing, when it carries no id.
    pub fn remove_clicked(&self, control: &dyn Attributes) -> Result<Option<Cart>, CartError> {
        let Some(id) = control
            .attribute(ATTR_LINE_ID)
            .filter(|id| !id.is_empty())
        else {
            debug!("remove control without a line id");
            return Ok(None);
        };
        self.remove_and_rerender(&LineId::new(id)).map(Some)
    }

    /// Page-load entry: refresh the badge, and the table on the cart page.
    pub fn bootstrap(&self) {
        self.update_badge(None);
        if self.targets.is_cart_page {
            self.render_cart_table(&self.store.load());
        }
    }
}

/// Format one line for the table.
pub fn cart_row(line: &CartLine, symbol: &str) -> Result<CartRow, CartError> {
    let total: Money = line.line_total()?;
    Ok(CartRow {
        line_id: line.id.clone(),
        name: line.name.clone(),
        size: line.size.label().to_string(),
        quantity: line.quantity.to_string(),
        unit_price: line.price.display_with(symbol),
        line_total: total.display_with(symbol),
    })
}
