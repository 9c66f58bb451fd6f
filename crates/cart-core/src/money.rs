//! Money type for representing monetary values.
//!
//! A `Money` holds the decimal amount exactly as it was entered or stored
//! (`29.99`, `19.999`). Arithmetic works on that exact value and rounding to
//! two decimals happens only when formatting for display, so a loaded price
//! is written back unchanged. On the storage wire a `Money` is a plain JSON
//! number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of minor units per major unit.
const CENTS_PER_UNIT: f64 = 100.0;

/// Largest magnitude at which every integer is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A monetary amount in major units.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money {
    amount: f64,
}

impl Money {
    /// Create a Money value from a decimal amount, keeping it exactly.
    ///
    /// ```
    /// use cart_core::Money;
    /// let price = Money::from_decimal(19.999);
    /// assert_eq!(price.to_decimal(), 19.999);
    /// assert_eq!(price.display_amount(), "20.00");
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self { amount }
    }

    /// Like [`Money::from_decimal`], but rejects NaN and infinities.
    pub fn try_from_decimal(amount: f64) -> Option<Self> {
        amount.is_finite().then_some(Self { amount })
    }

    /// Create a Money value from whole cents.
    pub fn from_cents(cents: i64) -> Self {
        Self::from_decimal(cents as f64 / CENTS_PER_UNIT)
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self::from_decimal(0.0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < 0.0
    }

    /// Check that the amount is a real number.
    pub fn is_finite(&self) -> bool {
        self.amount.is_finite()
    }

    /// The exact decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount
    }

    /// Format rounded to exactly two decimals with no symbol (e.g. "29.99").
    ///
    /// Exact halves round away from zero, so `0.125` shows as `0.13`.
    pub fn display_amount(&self) -> String {
        if self.amount == 0.0 {
            return "0.00".to_string();
        }
        if self.is_exact_half_cent() {
            let cents = (self.amount * CENTS_PER_UNIT).round();
            let sign = if cents < 0.0 { "-" } else { "" };
            let abs = cents.abs();
            return format!("{}{}.{:02}", sign, (abs / CENTS_PER_UNIT).trunc(), abs % CENTS_PER_UNIT);
        }
        format!("{:.2}", self.amount)
    }

    /// Format with a leading currency symbol (e.g. "$29.99").
    pub fn display_with(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.display_amount())
    }

    /// Try to add another Money value, returning None if the result is not finite.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        Money::try_from_decimal(self.amount + other.amount)
    }

    /// Try to multiply by a quantity, returning None if the result is not finite.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        Money::try_from_decimal(self.amount * factor as f64)
    }

    /// Sum an iterator of Money values, returning None if the sum is not finite.
    pub fn try_sum<'a>(mut iter: impl Iterator<Item = &'a Money>) -> Option<Money> {
        iter.try_fold(Money::zero(), |acc, m| acc.try_add(m))
    }

    /// Whether the amount lies exactly halfway between two cents.
    ///
    /// Only multiples of 1/8 can; for those, scaling by 100 is exact.
    fn is_exact_half_cent(&self) -> bool {
        (self.amount * 8.0).fract() == 0.0
            && self.amount.abs() < MAX_EXACT_INTEGER / CENTS_PER_UNIT
            && (self.amount * CENTS_PER_UNIT).fract().abs() == 0.5
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_amount())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Whole amounts go out as integers (`30`, not `30.0`).
        if self.amount.fract() == 0.0 && self.amount.abs() < MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.amount as i64)
        } else {
            serializer.serialize_f64(self.amount)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Money::try_from_decimal(amount)
            .ok_or_else(|| serde::de::Error::custom(format!("price out of range: {amount}")))
    }
}
