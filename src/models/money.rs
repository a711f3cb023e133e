//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Arithmetic saturates at the `i64` bounds instead of overflowing.
//! Only a single currency is supported.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budgetpro::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.cents(), 1050);
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole dollars
    pub const fn from_dollars(dollars: i64) -> Self {
        Self(dollars * 100)
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

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// The amount in currency units as a float, for ratios and chart payloads
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parse a decimal number into Money
    ///
    /// Accepts an optional leading sign, digits, an optional fractional part
    /// and an optional exponent: "10", "10.5", "-3.25", ".75", "+4", "1e3",
    /// "2.5E-1". Fractions beyond two digits are rounded half away from
    /// zero. Currency symbols, thousands separators, `NaN` and `Infinity`
    /// are rejected.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let s = s.trim();
        let invalid = || MoneyParseError::InvalidFormat(original.to_string());
        let out_of_range = || MoneyParseError::OutOfRange(original.to_string());

        let (negative, s) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        let (mantissa, exponent) = match s.find(|c: char| c == 'e' || c == 'E') {
            Some(i) => (&s[..i], s[i + 1..].parse::<i32>().map_err(|_| invalid())?),
            None => (s, 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let (whole, fraction) = shift_point(whole, fraction, exponent).ok_or_else(out_of_range)?;

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| out_of_range())?
        };

        let digits: Vec<i64> = fraction.bytes().map(|b| i64::from(b - b'0')).collect();
        let mut cents = digits.first().copied().unwrap_or(0) * 10 + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            cents += 1;
        }

        let total = dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .ok_or_else(out_of_range)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format as a plain number with two decimals and no currency symbol
    pub fn to_plain_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            format!("{}.{:02}", self.dollars(), self.cents_part())
        }
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

/// Move the decimal point of `whole.fraction` right by `exponent` places
///
/// Leading zeros are dropped. Only three fractional digits matter for
/// rounding to cents, so very small values collapse to zeros. Returns `None`
/// when the whole part cannot fit in an `i64`.
fn shift_point(whole: &str, fraction: &str, exponent: i32) -> Option<(String, String)> {
    let digits = format!("{}{}", whole, fraction);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some((String::new(), String::new()));
    }

    let leading_zeros = (digits.len() - significant.len()) as i64;
    let point = whole.len() as i64 - leading_zeros + i64::from(exponent);

    if point > 19 {
        return None;
    }
    if point <= 0 {
        let zeros = "0".repeat((-point).min(3) as usize);
        return Some((String::new(), format!("{}{}", zeros, significant)));
    }

    let point = point as usize;
    if point >= significant.len() {
        let padding = "0".repeat(point - significant.len());
        Some((format!("{}{}", significant, padding), String::new()))
    } else {
        Some((significant[..point].to_string(), significant[point..].to_string()))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.format_with_symbol("$"))
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

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

/// `part / whole * 100`, or 0 when `whole` is not positive
pub fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_positive() {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    } else {
        0.0
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
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
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
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
    }

    #[test]
    fn test_plain_string() {
        assert_eq!(Money::from_cents(12000).to_plain_string(), "120.00");
        assert_eq!(Money::from_cents(-5).to_plain_string(), "-0.05");
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
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert_eq!(Money::parse(" 42 ").unwrap().cents(), 4200);
        assert_eq!(Money::parse("+4").unwrap().cents(), 400);
        assert_eq!(Money::parse("1.005").unwrap().cents(), 101);
        assert_eq!(Money::parse("1.004").unwrap().cents(), 100);
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(Money::parse("1e3").unwrap().cents(), 100_000);
        assert_eq!(Money::parse("2.5E1").unwrap().cents(), 2500);
        assert_eq!(Money::parse("1.5e+2").unwrap().cents(), 15_000);
        assert_eq!(Money::parse("25e-1").unwrap().cents(), 250);
        assert_eq!(Money::parse("-4e-2").unwrap().cents(), -4);
        assert_eq!(Money::parse("5e-3").unwrap().cents(), 1);
        assert_eq!(Money::parse("1e-9").unwrap().cents(), 0);
        assert_eq!(Money::parse("0e999").unwrap().cents(), 0);
        assert!(Money::parse("1e").is_err());
        assert!(Money::parse("e5").is_err());
        assert!(Money::parse("1e2.5").is_err());
        assert!(matches!(
            Money::parse("1e30"),
            Err(MoneyParseError::OutOfRange(_))
        ));
        assert!(matches!(
            Money::parse("1e2147483647"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("$10").is_err());
        assert!(Money::parse("1,000").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("NaN").is_err());
        assert!(Money::parse("Infinity").is_err());
        assert!(matches!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!((big + big).cents(), i64::MAX);
        assert_eq!((-big - big).cents(), i64::MIN);

        let mut acc = big;
        acc += Money::from_cents(100);
        assert_eq!(acc.cents(), i64::MAX);
        acc -= Money::from_cents(i64::MAX);
        assert_eq!(acc.cents(), 0);

        assert_eq!((-Money::from_cents(i64::MIN)).cents(), i64::MAX);
        assert_eq!(Money::from_cents(i64::MIN).abs().cents(), i64::MAX);

        let total: Money = vec![big, big, big].into_iter().sum();
        assert_eq!(total.cents(), i64::MAX);
    }

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(Money::from_cents(50), Money::from_cents(200)), 25.0);
        assert_eq!(percent_of(Money::from_cents(50), Money::zero()), 0.0);
        assert_eq!(percent_of(Money::from_cents(300), Money::from_cents(200)), 150.0);
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
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_cents(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
