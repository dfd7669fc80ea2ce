//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) so that totals are exact. Raw user
//! input arrives as numbers (`f64`) and is converted at the store boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Largest magnitude (in whole units) that converts to cents without overflow
const MAX_UNITS: f64 = 90_000_000_000_000.0;

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use budget_planner::models::Money;
    /// assert_eq!(Money::from_units(1500).cents(), 150_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units * 100)
    }

    /// Convert a raw numeric value into Money, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values too large to represent.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() || value.abs() >= MAX_UNITS {
            return None;
        }
        Some(Self((value * 100.0).round() as i64))
    }

    /// Like [`Money::from_f64`], but a non-zero value never becomes zero
    ///
    /// Amounts smaller than half a cent round away from zero to one cent.
    pub fn from_f64_nonzero(value: f64) -> Option<Self> {
        let amount = Self::from_f64(value)?;
        if amount.is_zero() && value != 0.0 {
            return Some(Self(if value < 0.0 { -1 } else { 1 }));
        }
        Some(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// The amount in whole units as a float, for export
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
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

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Addition that fails instead of leaving the representable range
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Subtraction that fails instead of leaving the representable range
    pub const fn checked_sub(self, other: Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Format with a currency symbol, e.g. `৳ 1500` or `-৳ 12.50`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{} {}", symbol, self.abs())
        } else {
            format!("{} {}", symbol, self)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

/// Whole amounts display as integers; fractional amounts keep two decimals.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let units = self.units().abs();
        if self.cents_part() == 0 {
            write!(f, "{}{}", sign, units)
        } else {
            write!(f, "{}{}.{:02}", sign, units, self.cents_part())
        }
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

/// Totals are accumulated wide and clamped to the `i64` range at the end.
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        let total: i128 = iter.map(|m| i128::from(m.0)).sum();
        Self(total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Coerce free-form text into a number the way the input fields do
///
/// Whitespace is trimmed and empty input counts as `0`. Plain decimal
/// notation (optional sign, fraction and exponent) parses, as do unsigned
/// `0x`, `0o` and `0b` integer literals. Anything else, including words
/// such as `inf` or `nan`, yields NaN.
///
/// # Examples
/// ```
/// use budget_planner::models::money::coerce_number;
/// assert_eq!(coerce_number(" 250 "), 250.0);
/// assert_eq!(coerce_number("0x10"), 16.0);
/// assert_eq!(coerce_number(""), 0.0);
/// assert!(coerce_number("abc").is_nan());
/// ```
pub fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(value) = radix_literal(trimmed) {
        return value;
    }

    let plain = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'));
    if !plain {
        return f64::NAN;
    }

    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// `0x1f`, `0o17`, `0b101`; a prefix with bad digits is NaN
fn radix_literal(text: &str) -> Option<f64> {
    let radix = match text.get(..2)?.to_ascii_lowercase().as_str() {
        "0x" => 16,
        "0o" => 8,
        "0b" => 2,
        _ => return None,
    };
    let digits = &text[2..];
    Some(
        u128::from_str_radix(digits, radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN),
    )
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
    fn test_from_f64() {
        assert_eq!(Money::from_f64(1500.0), Some(Money::from_units(1500)));
        assert_eq!(Money::from_f64(12.346), Some(Money::from_cents(1235)));
        assert_eq!(Money::from_f64(-3.5), Some(Money::from_cents(-350)));
        assert_eq!(Money::from_f64(f64::NAN), None);
        assert_eq!(Money::from_f64(f64::INFINITY), None);
        assert_eq!(Money::from_f64(1e300), None);
        assert_eq!(Money::from_cents(1050).to_f64(), 10.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_units(1500).to_string(), "1500");
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::from_cents(5).to_string(), "0.05");
        assert_eq!(Money::from_units(-200).to_string(), "-200");
        assert_eq!(Money::from_cents(-1050).to_string(), "-10.50");
        assert_eq!(Money::zero().to_string(), "0");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::from_units(17000).format_with_symbol("৳"), "৳ 17000");
        assert_eq!(Money::from_units(-500).format_with_symbol("$"), "-$ 500");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_units(1500),
            Money::from_units(900),
            Money::from_units(600),
        ];
        let by_ref: Money = amounts.iter().sum();
        let by_value: Money = amounts.into_iter().sum();
        assert_eq!(by_ref, Money::from_units(3000));
        assert_eq!(by_value, by_ref);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  12.5\n"), 12.5);
        assert_eq!(coerce_number("-7"), -7.0);
        assert_eq!(coerce_number("+7"), 7.0);
        assert_eq!(coerce_number(".5"), 0.5);
        assert_eq!(coerce_number("1e3"), 1000.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("   "), 0.0);
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("NaN").is_nan());
        assert!(coerce_number("1.2.3").is_nan());
    }

    #[test]
    fn test_coerce_radix_literals() {
        assert_eq!(coerce_number("0x10"), 16.0);
        assert_eq!(coerce_number("0XfF"), 255.0);
        assert_eq!(coerce_number("0o17"), 15.0);
        assert_eq!(coerce_number("0b101"), 5.0);
        assert!(coerce_number("0x").is_nan());
        assert!(coerce_number("0xzz").is_nan());
        assert!(coerce_number("-0x10").is_nan());
    }

    #[test]
    fn test_from_f64_nonzero_keeps_tiny_amounts() {
        assert_eq!(Money::from_f64_nonzero(0.004), Some(Money::from_cents(1)));
        assert_eq!(Money::from_f64_nonzero(-0.004), Some(Money::from_cents(-1)));
        assert_eq!(Money::from_f64_nonzero(0.0), Some(Money::zero()));
        assert_eq!(Money::from_f64_nonzero(12.346), Some(Money::from_cents(1235)));
        assert_eq!(Money::from_f64_nonzero(f64::NAN), None);
    }

    #[test]
    fn test_totals_never_wrap() {
        let big = Money::from_cents(i64::MAX - 10);
        assert_eq!(big.checked_add(Money::from_cents(100)), None);
        assert_eq!(big.checked_sub(Money::from_cents(100)), Some(Money::from_cents(i64::MAX - 110)));
        assert_eq!(big + Money::from_cents(100), Money::from_cents(i64::MAX));
        assert_eq!(-Money::from_cents(i64::MIN), Money::from_cents(i64::MAX));

        let total: Money = vec![big, big, -big].into_iter().sum();
        assert_eq!(total, big);
        let clamped: Money = vec![big, big].into_iter().sum();
        assert_eq!(clamped, Money::from_cents(i64::MAX));
        assert!(Money::from_cents(i64::MIN).format_with_symbol("$").starts_with("-$ "));
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
