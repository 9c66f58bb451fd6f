//! Pending quantity helpers for the product form stepper.

/// Smallest quantity a line or pending add may hold.
pub const MIN_QUANTITY: i64 = 1;

/// Apply a stepper delta to a not-yet-submitted quantity.
///
/// Never goes below [`MIN_QUANTITY`] and never touches the cart.
///
/// ```
/// use cart_core::adjust_pending_quantity;
///
/// assert_eq!(adjust_pending_quantity(2, 1), 3);
/// assert_eq!(adjust_pending_quantity(1, -1), 1);
/// ```
pub fn adjust_pending_quantity(current: i64, delta: i64) -> i64 {
    current.saturating_add(delta).max(MIN_QUANTITY)
}

/// Parse a quantity typed into a form input.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
