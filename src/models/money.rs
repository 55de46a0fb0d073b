//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. The host speaks plain JSON numbers, so the serde form is a float
//! rounded to the nearest cent on the way in.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use ha_finance_panel::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.plain_string(), "10.5");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Convert a host float, rounding to the nearest cent.
    ///
    /// Out-of-range values saturate to `±i64::MAX` cents so negation and
    /// absolute value stay defined.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() {
            let cents = (value * 100.0).round() as i64;
            Some(Self(cents.max(-i64::MAX)))
        } else {
            None
        }
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a float, the way the host expects it on the wire
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Income styling applies to strictly positive amounts only; zero is
    /// styled like an expense.
    pub const fn is_income(&self) -> bool {
        self.0 > 0
    }

    /// Get the absolute value, saturating at `i64::MAX` cents
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Add two amounts, `None` on overflow
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Parse a money amount from user input
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", ".5". More than
    /// two decimal places is rejected rather than truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s.strip_prefix('+').unwrap_or(s))
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('$').unwrap_or(s).trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(invalid());
        }

        let cents = if s.contains('.') {
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 || (parts[0].is_empty() && parts[1].is_empty()) {
                return Err(invalid());
            }

            let units: i64 = if parts[0].is_empty() {
                0
            } else {
                parts[0].parse().map_err(|_| invalid())?
            };

            let cents_str = parts[1];
            let cents: i64 = match cents_str.len() {
                0 => 0,
                1 => cents_str.parse::<i64>().map_err(|_| invalid())? * 10,
                2 => cents_str.parse().map_err(|_| invalid())?,
                _ => return Err(invalid()),
            };

            units
                .checked_mul(100)
                .and_then(|u| u.checked_add(cents))
                .ok_or_else(invalid)?
        } else {
            s.parse::<i64>()
                .ok()
                .and_then(|u| u.checked_mul(100))
                .ok_or_else(invalid)?
        };

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Render like a JSON number: no trailing zeros, no grouping
    /// ("50", "-20.5", "0.05").
    pub fn plain_string(&self) -> String {
        let sign = if self.is_negative() { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, frac) = (abs / 100, abs % 100);

        if frac == 0 {
            format!("{}{}", sign, whole)
        } else if frac % 10 == 0 {
            format!("{}{}.{}", sign, whole, frac / 10)
        } else {
            format!("{}{}.{:02}", sign, whole, frac)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.0.unsigned_abs() / 100, self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Money::from_f64(value).ok_or_else(|| de::Error::custom("amount must be a finite number"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "10.50");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "0.05");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("+3").unwrap().cents(), 300);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse(".5").unwrap().cents(), 50);
        assert_eq!(Money::parse("-0.05").unwrap().cents(), -5);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("   ").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("-").is_err());
        assert!(Money::parse("1e3").is_err());
    }

    #[test]
    fn test_parse_rejects_sub_cent_precision() {
        assert!(Money::parse("1.999").is_err());
        assert!(Money::parse("-0.001").is_err());
        assert_eq!(Money::parse("1.99").unwrap().cents(), 199);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(Money::from_cents(i64::MIN) - Money::from_cents(1), Money::from_cents(i64::MIN));
        assert_eq!(-Money::from_cents(i64::MIN), max);
        assert_eq!(Money::from_cents(i64::MIN).abs(), max);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(100).checked_add(Money::from_cents(-30)),
            Some(Money::from_cents(70))
        );
    }

    #[test]
    fn test_huge_host_amount_saturates() {
        let m: Money = serde_json::from_str("-1e300").unwrap();
        assert_eq!(m.cents(), -i64::MAX);
        assert_eq!(m.abs().cents(), i64::MAX);

        let m: Money = serde_json::from_str("1e300").unwrap();
        assert_eq!(m.cents(), i64::MAX);
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(5000).plain_string(), "50");
        assert_eq!(Money::from_cents(-2000).plain_string(), "-20");
        assert_eq!(Money::from_cents(-2050).plain_string(), "-20.5");
        assert_eq!(Money::from_cents(5).plain_string(), "0.05");
        assert_eq!(Money::from_cents(-50).plain_string(), "-0.5");
        assert_eq!(Money::zero().plain_string(), "0");
    }

    #[test]
    fn test_income_classification() {
        assert!(Money::from_cents(1).is_income());
        assert!(!Money::zero().is_income());
        assert!(!Money::from_cents(-1).is_income());
    }

    #[test]
    fn test_wire_format() {
        let m: Money = serde_json::from_str("-20.5").unwrap();
        assert_eq!(m.cents(), -2050);

        let m: Money = serde_json::from_str("800").unwrap();
        assert_eq!(m.cents(), 80_000);

        // float noise from the host rounds to the nearest cent
        let m: Money = serde_json::from_str("0.30000000000000004").unwrap();
        assert_eq!(m.cents(), 30);

        assert_eq!(serde_json::to_string(&Money::from_cents(1050)).unwrap(), "10.5");
    }
}
