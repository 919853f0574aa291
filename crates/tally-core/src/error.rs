//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Scoring never surfaces these errors: a field that fails to parse
//!    simply contributes zero points from its rule(s)

use thiserror::Error;

// =============================================================================
// Money Parse Error
// =============================================================================

/// Failure to parse a monetary amount string into [`Money`](crate::Money).
///
/// Receipts carry amounts as text (`"35.35"`). The accepted grammar is an
/// optional sign, one or more digits, and an optional fraction of one or two
/// digits. Everything else lands on one of these variants.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseMoneyError {
    /// The input was the empty string.
    #[error("amount is empty")]
    Empty,

    /// No digits where the whole or fractional part was expected.
    ///
    /// ## When This Occurs
    /// - A bare sign: `"-"`
    /// - A missing whole part: `".50"`
    /// - A trailing separator: `"12."`
    #[error("amount has no digits where digits are required")]
    MissingDigits,

    /// A character outside `0-9`, the sign, and the `.` separator.
    #[error("invalid character {0:?} in amount")]
    InvalidCharacter(char),

    /// More than two digits after the decimal separator.
    ///
    /// Amounts are whole cents; sub-cent precision is rejected rather than
    /// silently rounded.
    #[error("amount has more than two fraction digits")]
    FractionTooLong,

    /// The amount does not fit in the cents representation.
    #[error("amount is out of range")]
    OutOfRange,
}

// =============================================================================
// Unit Tests
// =============================================================================
