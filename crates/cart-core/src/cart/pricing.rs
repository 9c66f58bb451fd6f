//! Cart totals.

use crate::ids::LineId;
use crate::money::Money;

/// Totals for a cart.
///
/// Grand total equals subtotal: tax, shipping and discounts are not part of
/// this cart and would be folded in here.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals {
    /// Sum of all line totals.
    pub subtotal: Money,
    /// Amount payable.
    pub grand_total: Money,
    /// Sum of all quantities.
    pub item_count: i64,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotals>,
}

/// Totals for a single cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineTotals {
    /// Line id.
    pub line_id: LineId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// `unit_price * quantity`.
    pub total: Money,
}

impl CartTotals {
    /// Totals for the empty cart.
    pub fn empty() -> Self {
        Self {
            subtotal: Money::zero(),
            grand_total: Money::zero(),
            item_count: 0,
            lines: Vec::new(),
        }
    }

    /// Look up one line's totals.
    pub fn line(&self, id: &LineId) -> Option<&LineTotals> {
        self.lines.iter().find(|l| &l.line_id == id)
    }
}
