//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. On the wire (JSON transaction files) amounts are decimal values,
//! either as numbers (`12.5`) or strings (`"12.50"`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
///
/// Using i64 cents avoids floating-point precision issues and supports
/// amounts up to approximately $92 quadrillion (both positive and negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use family_report::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from dollars and cents
    ///
    /// # Examples
    /// ```
    /// use family_report::models::Money;
    /// let amount = Money::from_dollars_cents(10, 50); // $10.50
    /// ```
    pub const fn from_dollars_cents(dollars: i64, cents: i64) -> Self {
        Self(dollars * 100 + cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
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

    /// The amount in whole currency units as a float (for ratios and charts)
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "-$1,234.50", "10".
    /// Digits past the second decimal place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        // Handle negative sign at start
        let (negative, rest) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, s),
        };

        // Remove currency symbol and thousands separators if present
        let rest = rest.strip_prefix('$').unwrap_or(rest);
        let cleaned = rest.replace(',', "");

        let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned.as_str(), ""));
        if whole.is_empty() || !is_ascii_digits(whole) || !is_ascii_digits(fraction) {
            return Err(invalid());
        }

        let dollars: i64 = whole.parse().map_err(|_| MoneyParseError::OutOfRange(s.to_string()))?;
        // ASCII digits only, so byte slicing stays on char boundaries
        let cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction[..2].parse().map_err(|_| invalid())?,
        };

        let total = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(|| MoneyParseError::OutOfRange(s.to_string()))?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Convert whole currency units to cents, failing on overflow
    pub fn checked_from_units(units: i64) -> Result<Self, MoneyParseError> {
        units
            .checked_mul(100)
            .map(Self)
            .ok_or_else(|| MoneyParseError::OutOfRange(units.to_string()))
    }

    /// Convert a float to cents, rounding to the nearest cent
    ///
    /// Fails on NaN, infinity and amounts outside the i64 cent range.
    pub fn checked_from_f64(value: f64) -> Result<Self, MoneyParseError> {
        let cents = (value * 100.0).round();
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        if !cents.is_finite() || cents >= i64::MAX as f64 || cents < i64::MIN as f64 {
            return Err(MoneyParseError::OutOfRange(value.to_string()));
        }
        Ok(Self(cents as i64))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

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

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    fn mul(self, factor: i64) -> Self {
        Self(self.0 * factor)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Plain decimal, no currency symbol
        serializer.serialize_str(&self.format_with_symbol(""))
    }
}

/// Accepted wire representations of an amount
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Integer(units) => Money::checked_from_units(units),
            RawAmount::Float(value) => Money::checked_from_f64(value),
            RawAmount::Text(s) => Money::parse(&s),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Money amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

fn is_ascii_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

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
    fn test_from_dollars_cents() {
        let m = Money::from_dollars_cents(10, 50);
        assert_eq!(m.cents(), 1050);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse("$1,234.50").unwrap().cents(), 123450);
        assert_eq!(Money::parse("-$1,234.50").unwrap().cents(), -123450);
    }

    #[test]
    fn test_parse_rejects_malformed_amounts() {
        assert!(matches!(
            Money::parse("1.-5"),
            Err(MoneyParseError::InvalidFormat(_))
        ));
        assert!(Money::parse("1.5é").is_err());
        assert!(Money::parse("é.50").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("+10").is_err());
        assert!(Money::parse(".50").is_err());
        assert!(Money::parse("").is_err());
        assert_eq!(Money::parse("10.").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.509").unwrap().cents(), 1050);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            Money::parse("100000000000000000"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("99999999999999999999.00"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_multiply_by_months() {
        assert_eq!((Money::from_cents(40000) * 3).cents(), 120000);
        assert_eq!((Money::from_cents(-2500) * 6).cents(), -15000);
        assert_eq!((Money::zero() * 6).cents(), 0);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Money::from_cents(1050).as_f64(), 10.5);
        assert_eq!(Money::checked_from_f64(10.506).unwrap().cents(), 1051);
        assert_eq!(Money::checked_from_f64(-3.2).unwrap().cents(), -320);
        assert!(Money::checked_from_f64(f64::NAN).is_err());
        assert!(Money::checked_from_f64(f64::INFINITY).is_err());
        assert_eq!(Money::checked_from_units(-7).unwrap().cents(), -700);
        assert!(Money::checked_from_units(i64::MAX / 10).is_err());
    }

    #[test]
    fn test_comparison() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        let c = Money::from_cents(1000);

        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, c);
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.50\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_deserialize_numbers() {
        let whole: Money = serde_json::from_str("500").unwrap();
        assert_eq!(whole.cents(), 50000);

        let fractional: Money = serde_json::from_str("12.34").unwrap();
        assert_eq!(fractional.cents(), 1234);

        assert!(serde_json::from_str::<Money>("\"twelve\"").is_err());
    }

    #[test]
    fn test_deserialize_rejects_bad_amounts() {
        assert!(serde_json::from_str::<Money>("\"1.5é\"").is_err());
        assert!(serde_json::from_str::<Money>("\"1.-5\"").is_err());
        assert!(serde_json::from_str::<Money>("100000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        let err = serde_json::from_str::<Money>("92233720368547758").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
