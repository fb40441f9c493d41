//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  An order of three R$ 33,33 rings:                                      │
//! │    33.33 × 3 = 99.98999999999999   → off-by-centavo totals             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    3333 centavos × 3 = 9999 centavos, exactly                          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aurum_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_cents(109_900); // R$ 1.099,00
//!
//! // Arithmetic operations
//! let doubled = price * 2;
//! let total = price + Money::from_cents(50_000);
//! assert_eq!(total.cents(), 159_900);
//! ```
//!
//! The backend speaks JSON floats for every monetary field, so the DTO layer
//! in `aurum-api` is the ONLY place allowed to call [`Money::from_reais`] /
//! [`Money::to_reais`]. Everything above that boundary stays in centavos.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in centavos (hundredths of a real).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative values for adjustments and refunds
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use aurum_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents R$ 10,99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in centavos.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks whether the value is exactly zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Converts a wire-format decimal amount (reais) into centavos.
    ///
    /// The REST backend serializes every monetary field as a JSON number in
    /// reais. Rounds to the nearest centavo, half away from zero; the cast
    /// saturates at the i64 range for pathological inputs.
    ///
    /// Wire boundary only — never construct business values from floats.
    #[inline]
    pub fn from_reais(reais: f64) -> Self {
        Money((reais * 100.0).round() as i64)
    }

    /// Converts back to the wire-format decimal amount (reais).
    ///
    /// Wire boundary only — the inverse of [`Money::from_reais`].
    #[inline]
    pub fn to_reais(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Arithmetic
// =============================================================================

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, rhs: i64) -> Money {
        Money(self.0 * rhs)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Display
// =============================================================================

/// Formats as Brazilian currency: `R$ 1.234,56`.
///
/// Thousands are separated with dots and the decimal separator is a comma,
/// matching how every view in the product renders values.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let reais = abs / 100;
        let centavos = abs % 100;

        let digits = reais.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        write!(f, "{}R$ {},{:02}", sign, grouped, centavos)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1099);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1599);
        assert_eq!((a - b).cents(), 599);
        assert_eq!((a * 3).cents(), 3297);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1599);
        c -= b;
        assert_eq!(c.cents(), 1099);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 399].iter().map(|&c| Money::from_cents(c)).sum();
        assert_eq!(total.cents(), 749);
    }

    #[test]
    fn test_from_reais_rounds_to_centavo() {
        assert_eq!(Money::from_reais(10.99).cents(), 1099);
        assert_eq!(Money::from_reais(0.1).cents(), 10);
        // 33.33 * 3 in f64 is 99.99 minus drift; rounding recovers it
        assert_eq!(Money::from_reais(33.33 * 3.0).cents(), 9999);
        assert_eq!(Money::from_reais(-5.555).cents(), -556);
    }

    #[test]
    fn test_to_reais_roundtrip() {
        let m = Money::from_cents(123_456);
        assert_eq!(Money::from_reais(m.to_reais()), m);
    }

    #[test]
    fn test_display_pt_br() {
        assert_eq!(Money::from_cents(123_456).to_string(), "R$ 1.234,56");
        assert_eq!(Money::from_cents(5).to_string(), "R$ 0,05");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "R$ 1.000.000,00");
        assert_eq!(Money::from_cents(-9_990).to_string(), "-R$ 99,90");
    }

    #[test]
    fn test_serde_is_plain_integer() {
        let m = Money::from_cents(1099);
        assert_eq!(serde_json::to_string(&m).unwrap(), "1099");
        let back: Money = serde_json::from_str("1099").unwrap();
        assert_eq!(back, m);
    }
}
