//! Money type for representing expense amounts
//!
//! Internally stores amounts in cents (i64) so totals are exact. On disk an
//! amount is a plain JSON number in currency units (`12.5` for 12.50).
//! Single amounts are bounded by [`Money::MAX`] in both directions.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::error::ExpenseError;

/// A monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Largest single amount accepted from input or from disk (999,999,999,999.99)
    pub const MAX: Money = Money(99_999_999_999_999);

    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the amount in currency units
    pub fn as_units(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Add two amounts, `None` on i64 overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "10,50", "10", ".5". More than two
    /// decimal places, or a magnitude above [`Money::MAX`], is an `Input` error.
    pub fn parse(s: &str) -> Result<Self, ExpenseError> {
        let trimmed = s.trim();
        let invalid = |reason: &str| ExpenseError::Input(reason.to_string());

        let (negative, digits) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, trimmed.strip_prefix('+').unwrap_or(trimmed))
        };

        let normalized = digits.replace(',', ".");
        let (whole, fraction) = match normalized.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (normalized.as_str(), ""),
        };

        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction)
        {
            return Err(invalid("Invalid number"));
        }

        if fraction.len() > 2 {
            return Err(invalid("Invalid number: use at most two decimal places"));
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid("Invalid number: amount too large"))?
        };

        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid("Invalid number"))? * 10,
            _ => fraction.parse().map_err(|_| invalid("Invalid number"))?,
        };

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction_cents))
            .filter(|c| *c <= Self::MAX.0)
            .ok_or_else(|| invalid("Invalid number: amount too large"))?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a trailing currency label, e.g. "10.50 EUR"
    pub fn format_with_unit(&self, unit: &str) -> String {
        if unit.is_empty() {
            self.to_string()
        } else {
            format!("{} {}", self, unit)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_units())
    }
}

/// Reads a float in currency units, rounded to the nearest cent
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let units = f64::deserialize(deserializer)?;
        if !units.is_finite() || units.abs() > Self::MAX.as_units() {
            return Err(serde::de::Error::custom(format!(
                "amount {} is outside the supported range",
                units
            )));
        }
        Ok(Self((units * 100.0).round() as i64))
    }
}

/// Plain addition. Callers keep sums in range (see `ExpenseManager`).
impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.units(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
        assert_eq!(Money::from_cents(1500).format_with_unit("EUR"), "15.00 EUR");
        assert_eq!(Money::from_cents(1500).format_with_unit(""), "15.00");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(" 7,25 ").unwrap().cents(), 725);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("0").unwrap(), Money::zero());
        assert_eq!(Money::parse("999999999999.99").unwrap(), Money::MAX);
    }

    #[test]
    fn test_parse_rejects_sub_cent_precision() {
        let err = Money::parse("0.001").unwrap_err();
        assert!(matches!(err, ExpenseError::Input(_)));
        assert!(err.to_string().contains("two decimal places"));

        assert!(Money::parse("3.999").is_err());
        assert!(Money::parse("3.990").is_err());
    }

    #[test]
    fn test_parse_rejects_huge_amounts() {
        assert!(Money::parse("1000000000000").is_err());
        assert!(Money::parse("90000000000000000").is_err());
        assert!(Money::parse("-90000000000000000").is_err());
        assert!(Money::parse("99999999999999999999999").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12a").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("10.5x").is_err());
        assert!(Money::parse("1e3").is_err());
        assert!(matches!(Money::parse("abc"), Err(ExpenseError::Input(_))));
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 600);
        let empty: Vec<Money> = Vec::new();
        assert_eq!(empty.into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "10.5");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);

        let from_int: Money = serde_json::from_str("20").unwrap();
        assert_eq!(from_int.cents(), 2000);

        // 0.1 + 0.2 style float noise rounds to the nearest cent
        let noisy: Money = serde_json::from_str("0.30000000000000004").unwrap();
        assert_eq!(noisy.cents(), 30);
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Money>("1e17").is_err());
        assert!(serde_json::from_str::<Money>("-1e300").is_err());
        assert_eq!(
            serde_json::from_str::<Money>("999999999999.99").unwrap(),
            Money::MAX
        );
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(
            Money::MAX.checked_add(Money::from_cents(1)),
            Some(Money::from_cents(100_000_000_000_000))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_add(Money::from_cents(1)), None);
        assert_eq!(Money::from_cents(-250).abs(), Money::from_cents(250));
    }
}
