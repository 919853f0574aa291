//! # Money Handling
//!
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    MONEY REPRESENTATION                     │
//! │                                                             │
//! │   Wire format          Internal            Display          │
//! │   ───────────          ────────            ───────          │
//! │   "35.35"      ──►     Money(3535)   ──►   "35.35"          │
//! │   "9.00"       ──►     Money(900)    ──►   "9.00"           │
//! │   "1.25"       ──►     Money(125)    ──►   "1.25"           │
//! │                        (i64 cents)                          │
//! └─────────────────────────────────────────────────────────────┘
//!
//! ## Why Integer Cents
//!
//! Scoring asks exact questions of amounts: "is this a round dollar?",
//! "is this a multiple of 0.25?". Binary floats cannot answer those
//! reliably (`0.1 + 0.2 != 0.3`), so amounts are parsed once into whole
//! cents and every predicate becomes plain integer arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseMoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole cents.
///
/// ## Example
/// ```
/// use tally_core::Money;
///
/// let total: Money = "35.35".parse().unwrap();
/// assert_eq!(total.cents(), 3535);
/// assert!(!total.is_round_dollar());
/// assert!(!total.is_quarter_multiple());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a `Money` from a cent count.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Total amount in cents.
    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Whole-dollar part, truncated toward zero.
    #[inline]
    pub const fn dollars(self) -> i64 {
        self.0 / 100
    }

    /// Cent part within the dollar, always `0..=99`.
    #[inline]
    pub const fn cents_part(self) -> i64 {
        (self.0 % 100).abs()
    }

    /// `true` when the amount has no cent part (`"9.00"`, `"12"`).
    #[inline]
    pub const fn is_round_dollar(self) -> bool {
        self.0 % 100 == 0
    }

    /// `true` when the amount is an exact multiple of 25 cents.
    ///
    /// Round dollars qualify too: every multiple of 100 is a multiple
    /// of 25.
    #[inline]
    pub const fn is_quarter_multiple(self) -> bool {
        self.0 % 25 == 0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Grammar: optional `+`/`-` sign, one or more ASCII digits, then an
/// optional `.` followed by one or two ASCII digits.
///
/// Degenerate forms (`".50"`, `"12."`, `"1e3"`, `"1.005"`) are rejected
/// rather than guessed at.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseMoneyError::Empty);
        }

        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };

        if whole.is_empty() {
            return Err(ParseMoneyError::MissingDigits);
        }

        let mut cents: i64 = 0;
        for ch in whole.chars() {
            let digit = ch
                .to_digit(10)
                .ok_or(ParseMoneyError::InvalidCharacter(ch))?;
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(digit)))
                .ok_or(ParseMoneyError::OutOfRange)?;
        }
        cents = cents.checked_mul(100).ok_or(ParseMoneyError::OutOfRange)?;

        if let Some(fraction) = fraction {
            let mut frac_digits = 0usize;
            let mut frac_cents: i64 = 0;
            for ch in fraction.chars() {
                let digit = ch
                    .to_digit(10)
                    .ok_or(ParseMoneyError::InvalidCharacter(ch))?;
                frac_digits += 1;
                if frac_digits > 2 {
                    return Err(ParseMoneyError::FractionTooLong);
                }
                frac_cents = frac_cents * 10 + i64::from(digit);
            }
            match frac_digits {
                0 => return Err(ParseMoneyError::MissingDigits),
                // "0.5" means fifty cents, not five.
                1 => frac_cents *= 10,
                _ => {}
            }
            cents = cents
                .checked_add(frac_cents)
                .ok_or(ParseMoneyError::OutOfRange)?;
        }

        if negative {
            cents = -cents;
        }

        Ok(Self(cents))
    }
}

// =============================================================================
// Display
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
