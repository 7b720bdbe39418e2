//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are currency-agnostic: the storefront sells in a single currency and
//! renders amounts with a `$` prefix. Arithmetic is exact (`Decimal`), so
//! `14.99 * 2` is `29.98` and never `29.979999...`.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative monetary amount.
///
/// ```
/// use pop_shop_core::{Price, Quantity};
///
/// let unit = Price::from_cents(1499).unwrap();
/// let line = unit * Quantity::floored(2);
/// assert_eq!(line.to_string(), "$29.98");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from an amount in cents.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `cents` is below zero.
    pub fn from_cents(cents: i64) -> Result<Self, PriceError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// Get the decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl TryFrom<Decimal> for Price {
    type Error = PriceError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

// Sums of non-negative amounts stay non-negative. Both operations saturate at
// `Decimal::MAX` rather than panicking on overflow.
impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<Quantity> for Price {
    type Output = Self;

    fn mul(self, rhs: Quantity) -> Self {
        Self(self.0.saturating_mul(Decimal::from(rhs.get())))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Self> for Price {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let price = Price::from_cents(1499).unwrap();
        assert_eq!(price.amount(), Decimal::new(1499, 2));
    }

    #[test]
    fn test_negative_rejected() {
        assert!(matches!(
            Price::from_cents(-1),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_zero_allowed() {
        assert!(Price::from_cents(0).unwrap().is_zero());
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::from_cents(1499).unwrap().to_string(), "$14.99");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(Price::new(Decimal::from(5)).unwrap().to_string(), "$5.00");
    }

    #[test]
    fn test_multiply_is_exact() {
        let price = Price::from_cents(1499).unwrap();
        assert_eq!(price * Quantity::floored(2), Price::from_cents(2998).unwrap());
    }

    #[test]
    fn test_multiply_saturates() {
        let huge =
            Price::new(Decimal::from_i128_with_scale(100_000_000_000_000_000_000, 0)).unwrap();
        let line = huge * Quantity::floored(1_000_000_000);
        assert_eq!(line, Price::new(Decimal::MAX).unwrap());
    }

    #[test]
    fn test_add_saturates() {
        let max = Price::new(Decimal::MAX).unwrap();
        assert_eq!(max + Price::from_cents(1).unwrap(), max);
        assert_eq!([max, max, max].iter().sum::<Price>(), max);
    }

    #[test]
    fn test_sum() {
        let prices = [
            Price::from_cents(1499).unwrap(),
            Price::from_cents(5499).unwrap(),
        ];
        assert_eq!(prices.iter().sum::<Price>(), Price::from_cents(6998).unwrap());
        assert_eq!(std::iter::empty::<Price>().sum::<Price>(), Price::ZERO);
    }

    #[test]
    fn test_serde_as_string() {
        let price = Price::from_cents(2999).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"29.99\"");

        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("\"-3.00\"").is_err());
    }
}
