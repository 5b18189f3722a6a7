//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Two scoring rules care about EXACT remainders:                         │
//! │    "total is a round dollar amount"    → total % 1.00 == 0             │
//! │    "total is a multiple of $0.25"      → total % 0.25 == 0             │
//! │  With f64 both drift. With integer cents both are exact.               │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "$35.35" is parsed once into 3535 cents; every rule after that      │
//! │    is plain integer arithmetic.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::money::Money;
//!
//! // Parse from receipt wire text
//! let total: Money = "35.35".parse().unwrap();
//! assert_eq!(total.cents(), 3535);
//!
//! // Rule checks are exact
//! assert!(!total.is_round_dollar());
//! assert!(!total.is_quarter_multiple());
//!
//! // NEVER construct money from a float - no such method exists.
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: the wire format may carry a negative amount; whether
///   that is acceptable is a *validation* question, not a parse question
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **String on the wire**: receipts carry totals/prices as decimal text
///   (`"6.49"`), so serde goes through [`FromStr`]/[`fmt::Display`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// let price = Money::from_cents(649); // Represents $6.49
    /// assert_eq!(price.cents(), 649);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Checks if the value is positive (greater than zero).
    ///
    /// The validator requires every price and total to satisfy this.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks whether the amount is a round dollar amount (no cents).
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert!(Money::from_cents(10000).is_round_dollar());  // $100.00
    /// assert!(!Money::from_cents(10010).is_round_dollar()); // $100.10
    /// ```
    #[inline]
    pub const fn is_round_dollar(&self) -> bool {
        self.0 % 100 == 0
    }

    /// Checks whether the amount is an exact multiple of $0.25.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert!(Money::from_cents(250).is_quarter_multiple());  // $2.50
    /// assert!(!Money::from_cents(251).is_quarter_multiple()); // $2.51
    /// ```
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }

    /// One fifth of the amount in whole dollars, rounded UP.
    ///
    /// This is the arithmetic behind the description-length scoring rule:
    /// `ceil(price × 0.2)` at zero decimal places.
    ///
    /// ## Implementation
    /// `price × 0.2` dollars is `cents / 500` exactly, so the ceiling is
    /// `(cents + 499) / 500` in integer math - no floating point involved.
    ///
    /// Callers only reach this with validated (positive) prices.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(300).one_fifth_rounded_up(), 1);   // $3.00 → 0.60 → 1
    /// assert_eq!(Money::from_cents(1000).one_fifth_rounded_up(), 2);  // $10.00 → 2.00 → 2
    /// assert_eq!(Money::from_cents(1225).one_fifth_rounded_up(), 3);  // $12.25 → 2.45 → 3
    /// ```
    #[inline]
    pub const fn one_fifth_rounded_up(&self) -> i64 {
        (self.0 + 499) / 500
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Error parsing decimal money text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoneyError {
    /// Input is empty or not `[-]digits[.digits]`.
    #[error("invalid money amount: {0:?}")]
    Invalid(String),

    /// More than two fraction digits.
    #[error("money amounts have at most two decimal places: {0:?}")]
    TooPrecise(String),

    /// Amount does not fit in 64-bit cents.
    #[error("money amount out of range: {0:?}")]
    OutOfRange(String),
}

/// Parses decimal money text into cents.
///
/// Accepted forms: `"12"`, `"12.5"`, `"12.50"`, `"-3.25"`. Anything else
/// (empty input, thousands separators, currency symbols, scientific
/// notation, more than two fraction digits) is rejected.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (whole, frac) = match unsigned.split_once('.') {
            Some((w, f)) => (w, f),
            None => (unsigned, ""),
        };

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }
        if unsigned.contains('.') && (frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(ParseMoneyError::Invalid(s.to_string()));
        }
        if frac.len() > 2 {
            return Err(ParseMoneyError::TooPrecise(s.to_string()));
        }

        let dollars: i64 = whole
            .parse()
            .map_err(|_| ParseMoneyError::OutOfRange(s.to_string()))?;

        // "5" → 0 cents, "5.5" → 50 cents, "5.55" → 55 cents
        let mut frac_cents: i64 = 0;
        if !frac.is_empty() {
            frac_cents = frac
                .parse::<i64>()
                .map_err(|_| ParseMoneyError::Invalid(s.to_string()))?;
            if frac.len() == 1 {
                frac_cents *= 10;
            }
        }

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac_cents))
            .ok_or_else(|| ParseMoneyError::OutOfRange(s.to_string()))?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders the amount as plain decimal text with two fraction digits.
///
/// This is the same representation used on the wire and in the database:
/// `"35.35"`, `"0.50"`, `"-3.25"`. No currency symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

/// Serializes as decimal text (`"6.49"`), matching the receipt wire format.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes from decimal text (`"6.49"`).
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
