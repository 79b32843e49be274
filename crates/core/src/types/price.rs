//! Type-safe price representation using decimal arithmetic.
//!
//! Amounts are kept as [`Decimal`] so cart totals never pick up binary
//! floating point drift. Display always rounds to two places. Arithmetic
//! saturates at the `Decimal` bounds instead of overflowing.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use rust_decimal::{Decimal, RoundingStrategy};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a price in the storefront's default currency.
    #[must_use]
    pub const fn from_amount(amount: Decimal) -> Self {
        Self::new(amount, CurrencyCode::USD)
    }

    /// A zero price in the default currency.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_amount(Decimal::ZERO)
    }

    /// The amount rounded half away from zero to two decimal places.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.amount
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format for display (e.g., "$19.99").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.rounded())
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount.saturating_add(rhs.amount), self.currency_code)
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self::new(
            self.amount.saturating_mul(Decimal::from(quantity)),
            self.currency_code,
        )
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

/// ISO 4217 currency codes. The storefront only sells in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD => "$",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_display_pads_to_two_places() {
        assert_eq!(Price::from_amount(Decimal::from(5)).display(), "$5.00");
        assert_eq!(Price::from_amount(Decimal::new(8999, 2)).display(), "$89.99");
        assert_eq!(Price::zero().to_string(), "$0.00");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let price = Price::from_amount(Decimal::from_str("10.005").unwrap());
        assert_eq!(price.display(), "$10.01");
    }

    #[test]
    fn test_sum_of_line_totals() {
        let total: Price = [
            Price::from_amount(Decimal::new(8999, 2)) * 2,
            Price::from_amount(Decimal::new(29999, 2)),
        ]
        .into_iter()
        .sum();
        assert_eq!(total.amount, Decimal::from_str("479.97").unwrap());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Price::from_amount(Decimal::MAX);
        assert_eq!((huge * 2).amount, Decimal::MAX);
        assert_eq!((huge + huge).amount, Decimal::MAX);

        let total: Price = [huge, Price::from_amount(Decimal::ONE)].into_iter().sum();
        assert_eq!(total.amount, Decimal::MAX);
        assert!(total.display().starts_with('$'));
    }
}
