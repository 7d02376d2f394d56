//! Money amounts returned by carriers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Money parsing errors
#[derive(Debug, Error, PartialEq)]
pub enum MoneyError {
    #[error("Invalid money amount: {0:?}")]
    InvalidAmount(String),
}

/// An amount in a given ISO currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: String,
}

impl Money {
    pub fn new(amount: impl Into<Decimal>, currency: impl Into<String>) -> Self {
        Money {
            amount: amount.into(),
            currency: currency.into(),
        }
    }

    pub fn zero(currency: impl Into<String>) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Build from an integer number of cents
    pub fn from_cents(cents: i64, currency: impl Into<String>) -> Self {
        Self::new(Decimal::new(cents, 2), currency)
    }

    /// Parse carrier money text such as `"$1,106.04"`, `"1106.04"`, `"12"` or `"1.5e2"`
    pub fn parse(text: &str, currency: &str) -> Result<Self, MoneyError> {
        let cleaned: String = text
            .trim()
            .chars()
            .filter(|c| !matches!(c, '$' | ',' | ' '))
            .collect();

        Decimal::from_str(&cleaned)
            .or_else(|_| Decimal::from_scientific(&cleaned))
            .map(|amount| Money::new(amount, currency))
            .map_err(|_| MoneyError::InvalidAmount(text.to_string()))
    }

    /// Add two amounts; `None` when the currencies differ
    pub fn checked_add(&self, other: &Money) -> Option<Money> {
        (self.currency == other.currency).then(|| Money::new(self.amount + other.amount, &self.currency))
    }

    /// Sum amounts of one currency; `None` for an empty or mixed-currency list
    pub fn sum<'a>(amounts: impl IntoIterator<Item = &'a Money>) -> Option<Money> {
        let mut iter = amounts.into_iter();
        let first = iter.next()?.clone();
        iter.try_fold(first, |acc, m| acc.checked_add(m))
    }

    /// Amount in cents, rounded half-up
    pub fn cents(&self) -> i64 {
        use rust_decimal::prelude::ToPrimitive;
        (self.amount * Decimal::ONE_HUNDRED)
            .round()
            .to_i64()
            .unwrap_or_default()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dollar_string() {
        let money = Money::parse("$1,106.04", "USD").unwrap();
        assert_eq!(money, Money::from_cents(110_604, "USD"));
    }

    #[test]
    fn test_parse_plain_integer() {
        assert_eq!(Money::parse("12", "USD").unwrap().cents(), 1200);
    }

    #[test]
    fn test_parse_exponent_form() {
        assert_eq!(Money::parse("1e-7", "USD").unwrap().amount, Decimal::new(1, 7));
        assert_eq!(Money::parse("1.5e2", "USD").unwrap().cents(), 15000);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Money::parse("N/A", "USD"), Err(MoneyError::InvalidAmount(_))));
    }

    #[test]
    fn test_sum_mixed_currency() {
        let amounts = [Money::from_cents(100, "USD"), Money::from_cents(100, "CAD")];
        assert_eq!(Money::sum(&amounts), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1250, "USD").to_string(), "12.50 USD");
    }
}
