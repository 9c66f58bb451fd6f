//! The cart: an ordered, duplicate-free sequence of lines.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cart::{AddToCart, CartLine, CartTotals, LineTotals};
use crate::error::CartError;
use crate::ids::LineId;
use crate::money::Money;

/// A shopping cart.
///
/// Stored as a bare JSON array of lines. Insertion order is preserved and no
/// two lines share an id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product, merging into an existing line with the same id.
    ///
    /// A merge only accumulates quantity; the name and price recorded on the
    /// first add are kept. Returns an error, leaving the cart untouched, if:
    /// - quantity is below one
    /// - price is negative or not a number
    /// - the merged quantity would overflow
    pub fn add_or_merge(&mut self, item: AddToCart) -> Result<LineId, CartError> {
        if item.quantity < 1 {
            return Err(CartError::InvalidQuantity(item.quantity));
        }
        if item.price.is_negative() || !item.price.is_finite() {
            return Err(CartError::InvalidPrice(item.price));
        }

        let id = item.line_id();

        if let Some(existing) = self.lines.iter_mut().find(|l| l.id == id) {
            existing.quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or(CartError::Overflow)?;
            return Ok(id);
        }

        self.lines.push(CartLine {
            id: id.clone(),
            name: item.name,
            price: item.price,
            quantity: item.quantity,
            size: item.size,
        });
        Ok(id)
    }

    /// Remove every line with the given id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &LineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != id);
        self.lines.len() < len_before
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by id.
    pub fn get(&self, id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == id)
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total item count (sum of quantities).
    pub fn total_items(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of `price * quantity` over all lines.
    pub fn subtotal(&self) -> Result<Money, CartError> {
        let line_totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(line_totals.iter()).ok_or(CartError::Overflow)
    }

    /// Amount payable. Currently identical to [`Cart::subtotal`].
    pub fn grand_total(&self) -> Result<Money, CartError> {
        self.subtotal()
    }

    /// Calculate the full totals breakdown.
    pub fn totals(&self) -> Result<CartTotals, CartError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                Ok(LineTotals {
                    line_id: line.id.clone(),
                    unit_price: line.price,
                    quantity: line.quantity,
                    total: line.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, CartError>>()?;

        let subtotal = Money::try_sum(lines.iter().map(|l| &l.total)).ok_or(CartError::Overflow)?;

        Ok(CartTotals {
            subtotal,
            grand_total: subtotal,
            item_count: self.total_items(),
            lines,
        })
    }
}

impl TryFrom<Vec<CartLine>> for Cart {
    type Error = CartError;

    fn try_from(lines: Vec<CartLine>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(lines.len());
        for line in &lines {
            line.validate()
                .map_err(|e| CartError::InvalidStoredCart(format!("line {}: {}", line.id, e)))?;
            if !seen.insert(&line.id) {
                return Err(CartError::InvalidStoredCart(format!(
                    "duplicate line id {}",
                    line.id
                )));
            }
        }
        Ok(Self { lines })
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::LineSize;

    fn gold_ring() -> AddToCart {
        AddToCart::quick("R1", "Gold Ring", Money::from_decimal(29.99))
    }

    fn sized(product: &str, size: &str, quantity: i64) -> AddToCart {
        AddToCart::sized(
            product,
            "Gold Ring",
            Money::from_decimal(29.99),
            quantity,
            LineSize::selected(size).unwrap(),
        )
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.subtotal().unwrap(), Money::zero());
    }

    #[test]
    fn test_quick_add_twice_merges() {
        let mut cart = Cart::new();
        cart.add_or_merge(gold_ring()).unwrap();
        let id = cart.add_or_merge(gold_ring()).unwrap();

        assert_eq!(id.as_str(), "R1-default");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&id).unwrap().quantity, 2);
        assert_eq!(cart.subtotal().unwrap().display_amount(), "59.98");
    }

    #[test]
    fn test_sized_adds_accumulate() {
        let mut cart = Cart::new();
        cart.add_or_merge(sized("R1", "7", 2)).unwrap();
        let id = cart.add_or_merge(sized("R1", "7", 1)).unwrap();

        assert_eq!(id.as_str(), "R1-7");
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_different_sizes_are_distinct_lines() {
        let mut cart = Cart::new();
        cart.add_or_merge(sized("R1", "7", 1)).unwrap();
        cart.add_or_merge(sized("R1", "8", 1)).unwrap();
        cart.add_or_merge(gold_ring()).unwrap();

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["R1-7", "R1-8", "R1-default"]);
    }

    #[test]
    fn test_merge_keeps_first_name_and_price() {
        let mut cart = Cart::new();
        cart.add_or_merge(gold_ring()).unwrap();
        let id = cart
            .add_or_merge(AddToCart::quick("R1", "Renamed Ring", Money::from_cents(1)))
            .unwrap();

        let line = cart.get(&id).unwrap();
        assert_eq!(line.name, "Gold Ring");
        assert_eq!(line.price, Money::from_cents(2999));
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_invalid_quantity_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add_or_merge(gold_ring()).unwrap();
        let before = cart.clone();

        let mut bad = gold_ring();
        bad.quantity = 0;
        assert!(matches!(
            cart.add_or_merge(bad),
            Err(CartError::InvalidQuantity(0))
        ));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut cart = Cart::new();
        let result = cart.add_or_merge(AddToCart::quick("R1", "Gold Ring", Money::from_cents(-1)));
        assert!(matches!(result, Err(CartError::InvalidPrice(_))));
        let result = cart.add_or_merge(AddToCart::quick("R1", "Gold Ring", Money::from_decimal(f64::NAN)));
        assert!(matches!(result, Err(CartError::InvalidPrice(_))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_overflow() {
        let mut cart = Cart::new();
        cart.add_or_merge(sized("R1", "7", i64::MAX)).unwrap();
        let result = cart.add_or_merge(sized("R1", "7", 1));
        assert!(matches!(result, Err(CartError::Overflow)));
        assert_eq!(cart.total_items(), i64::MAX);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let first = cart.add_or_merge(gold_ring()).unwrap();
        cart.add_or_merge(sized("N2", "M", 3)).unwrap();

        assert!(cart.remove(&first));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].id.as_str(), "N2-M");
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_merge(gold_ring()).unwrap();
        let before = cart.clone();

        assert!(!cart.remove(&LineId::new("missing")));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_or_merge(sized("R1", "7", 2)).unwrap();
        cart.add_or_merge(AddToCart::quick("E3", "Pearl Earrings", Money::from_cents(1500)))
            .unwrap();

        let totals = cart.totals().unwrap();
        assert_eq!(totals.subtotal.display_amount(), "74.98");
        assert_eq!(totals.grand_total, totals.subtotal);
        assert_eq!(totals.item_count, 3);
        assert_eq!(
            totals.line(&LineId::new("R1-7")).unwrap().total,
            Money::from_cents(5998)
        );
    }

    #[test]
    fn test_subtotal_uses_unrounded_prices() {
        let mut cart = Cart::new();
        cart.add_or_merge(AddToCart::sized(
            "P1",
            "Pin",
            Money::from_decimal(0.333),
            3,
            LineSize::Selected("S".to_string()),
        ))
        .unwrap();

        let line = cart.get(&LineId::new("P1-S")).unwrap();
        assert_eq!(line.price.to_decimal(), 0.333);
        assert_eq!(cart.subtotal().unwrap().display_amount(), "1.00");
    }

    #[test]
    fn test_stored_blank_size_survives_reload() {
        let json = r#"[{"id":"R1-","name":"A","price":1.5,"quantity":1,"size":""}]"#;
        let cart: Cart = serde_json::from_str(json).unwrap();
        assert_eq!(serde_json::to_string(&cart).unwrap(), json);
    }

    #[test]
    fn test_stored_cart_round_trips_as_array() {
        let mut cart = Cart::new();
        cart.add_or_merge(gold_ring()).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['));
        let back: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cart);
    }

    #[test]
    fn test_stored_cart_rejects_duplicates() {
        let json = r#"[
            {"id":"R1-7","name":"A","price":1.0,"quantity":1,"size":"7"},
            {"id":"R1-7","name":"A","price":1.0,"quantity":1,"size":"7"}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_stored_cart_rejects_zero_quantity() {
        let json = r#"[{"id":"R1-7","name":"A","price":1.0,"quantity":0,"size":"7"}]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }
}
