//! # Money Module
//!
//! Provides the `Money` type for rental rates and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Rates in the fleet file look like "5.5" or "12.25".                    │
//! │  Stored as f32, 0.1 + 0.2 = 0.30000000000000004                         │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "5.5"  → 550 cents                                                   │
//! │    "90"   → 9000 cents                                                  │
//! │    The rate schedule multiplies and sums cents exactly, and only       │
//! │    the final total is truncated to a whole currency unit.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use fleetdesk_core::money::Money;
//!
//! let rate: Money = "5.5".parse().unwrap();
//! assert_eq!(rate.cents(), 550);
//! assert_eq!(rate.to_plain_string(), "5.5");
//!
//! let total = rate * 3u32;
//! assert_eq!(total.truncate_to_units(), Money::from_units(16));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use crate::error::ValidationError;

/// Minor units per whole currency unit.
const CENTS_PER_UNIT: i64 = 100;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the arithmetic of the rate schedule; negative
///   rates are rejected by validation, not by the type
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **No currency**: one integer unit, the symbol lives in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ## Example
    /// ```rust
    /// use fleetdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(90).cents(), 9000);
    /// ```
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-unit portion, truncated toward zero.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Drops the cents, keeping whole currency units.
    ///
    /// ## Truncation Policy
    /// ```text
    /// 120.75 → 120.00
    ///  16.50 →  16.00
    ///  -3.40 →  -3.00   (toward zero, never floor)
    /// ```
    /// Rental totals are billed in whole units; the fractional part of a
    /// total is never rounded up.
    #[inline]
    pub const fn truncate_to_units(&self) -> Self {
        Money(self.units() * CENTS_PER_UNIT)
    }

    /// Multiplies by a block count, saturating instead of overflowing.
    #[inline]
    pub const fn times(&self, count: u32) -> Self {
        Money(self.0.saturating_mul(count as i64))
    }

    /// Formats the value in the shortest decimal form used by the fleet files.
    ///
    /// ## Example
    /// ```rust
    /// use fleetdesk_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(9000).to_plain_string(), "90");
    /// assert_eq!(Money::from_cents(550).to_plain_string(), "5.5");
    /// assert_eq!(Money::from_cents(525).to_plain_string(), "5.25");
    /// assert_eq!(Money::from_cents(5).to_plain_string(), "0.05");
    /// ```
    pub fn to_plain_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let units = self.units().abs();
        let cents = self.cents_part();

        if cents == 0 {
            format!("{}{}", sign, units)
        } else if cents % 10 == 0 {
            format!("{}{}.{}", sign, units, cents / 10)
        } else {
            format!("{}{}.{:02}", sign, units, cents)
        }
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal text with at most two fractional digits.
///
/// Accepts `90`, `5.5`, `5.50` and a leading `-`. Anything else, including
/// exponents and a third fractional digit, is an `InvalidFormat` error.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: reason.to_string(),
        };

        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("expected a decimal number"));
        }
        if frac.len() > 2 || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("at most two decimal places"));
        }

        let whole: i64 = whole.parse().map_err(|_| invalid("amount too large"))?;
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid("bad fraction"))?,
        };

        let cents = whole
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| invalid("amount too large"))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl Money {
    /// Parses amounts as older fleet files store them, rounding to the cent.
    ///
    /// Those files hold float text such as `7.125` or `1e+06`. Anything the
    /// strict parser accepts comes back unchanged; other finite numbers are
    /// rounded half away from zero.
    ///
    /// ## Example
    /// ```rust
    /// use fleetdesk_core::money::Money;
    ///
    /// assert_eq!(Money::parse_rounded("7.125").unwrap().cents(), 713);
    /// assert_eq!(Money::parse_rounded("1e+06").unwrap(), Money::from_units(1_000_000));
    /// assert!(Money::parse_rounded("inf").is_err());
    /// ```
    pub fn parse_rounded(s: &str) -> Result<Self, ValidationError> {
        if let Ok(money) = s.parse::<Money>() {
            return Ok(money);
        }

        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: "expected a decimal number".to_string(),
        };
        let value: f64 = s.trim().parse().map_err(|_| invalid())?;
        let cents = (value * CENTS_PER_UNIT as f64).round();
        if !cents.is_finite() || cents.abs() >= i64::MAX as f64 {
            return Err(invalid());
        }

        Ok(Money(cents as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows two decimal places, e.g. `120.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a block count (days, half-days, hours).
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: u32) -> Self {
        self.times(count)
    }
}
