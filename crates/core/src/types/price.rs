//! Type-safe price representation using decimal arithmetic.
//!
//! Money amounts never go through floats. Amounts are stored in the
//! currency's standard unit (reais, not centavos) with two-decimal display.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
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

    /// Create a price from minor units (e.g., centavos for BRL).
    #[must_use]
    pub fn from_minor_units(minor: i64, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(minor, 2),
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Multiply the amount by a quantity.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self {
            amount: self.amount * Decimal::from(quantity),
            currency_code: self.currency_code,
        }
    }

    /// Same-currency addition. Returns `None` when the currencies differ.
    #[must_use]
    pub fn plus(self, other: Self) -> Option<Self> {
        if self.currency_code == other.currency_code {
            Some(Self {
                amount: self.amount + other.amount,
                currency_code: self.currency_code,
            })
        } else {
            None
        }
    }

    /// Format for display (e.g., `R$ 49.90`).
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {:.2}", self.currency_code.symbol(), self.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// ISO 4217 currency codes accepted by the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
}

impl CurrencyCode {
    /// Currency symbol used in display formatting.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD => "$",
            Self::EUR => "€",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor_units() {
        let price = Price::from_minor_units(4990, CurrencyCode::BRL);
        assert_eq!(price.amount, Decimal::new(4990, 2));
    }

    #[test]
    fn test_times() {
        let price = Price::from_minor_units(4990, CurrencyCode::BRL);
        assert_eq!(price.times(2).amount, Decimal::new(9980, 2));
        assert_eq!(price.times(0).amount, Decimal::ZERO);
    }

    #[test]
    fn test_plus_same_currency() {
        let a = Price::from_minor_units(4990, CurrencyCode::BRL);
        let b = Price::from_minor_units(2950, CurrencyCode::BRL);
        let sum = a.plus(b).unwrap();
        assert_eq!(sum.amount, Decimal::new(7940, 2));
        assert_eq!(sum.currency_code, CurrencyCode::BRL);
    }

    #[test]
    fn test_plus_currency_mismatch() {
        let a = Price::from_minor_units(100, CurrencyCode::BRL);
        let b = Price::from_minor_units(100, CurrencyCode::USD);
        assert!(a.plus(b).is_none());
    }

    #[test]
    fn test_display() {
        let price = Price::from_minor_units(4990, CurrencyCode::BRL);
        assert_eq!(price.display(), "R$ 49.90");

        // Whole amounts still render two decimals
        let price = Price::new(Decimal::new(50, 0), CurrencyCode::USD);
        assert_eq!(price.display(), "$ 50.00");
    }

    #[test]
    fn test_serde_roundtrip() {
        let price = Price::from_minor_units(8990, CurrencyCode::BRL);
        let json = serde_json::to_string(&price).unwrap();
        let parsed: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, price);
    }
}
