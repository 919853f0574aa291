//! # Points Calculator
//!
//! Awards loyalty points to a stored receipt. Seven independent rules,
//! summed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         SCORING RULES                               │
//! │                                                                     │
//! │  1. retailer name       1 pt per alphanumeric character             │
//! │  2. round dollar        50 pts when the total has no cents          │
//! │  3. quarter multiple    25 pts when the total divides by 0.25       │
//! │  4. item pairs          5 pts per two items                         │
//! │  5. description length  ceil(price × 0.2) pts per item whose        │
//! │                         trimmed description length divides by 3     │
//! │  6. odd day             6 pts when the day-of-month is odd          │
//! │  7. afternoon           10 pts when 14:01 ≤ time ≤ 15:59            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Malformed Input Policy
//! Rules never fail. A field that does not parse (bad date, bad time,
//! unparseable amount) contributes zero from the rules that read it, and
//! every other rule still applies. Submissions are accepted as-is, so the
//! calculator has to hold its nose and score whatever was stored.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::money::Money;
use crate::types::{Item, Receipt};

// =============================================================================
// Rule Constants
// =============================================================================

/// Points for a total with no cent part (`"9.00"`).
pub const ROUND_DOLLAR_POINTS: i64 = 50;

/// Points for a total that is an exact multiple of 25 cents.
pub const QUARTER_MULTIPLE_POINTS: i64 = 25;

/// Points per two items on the receipt.
pub const POINTS_PER_ITEM_PAIR: i64 = 5;

/// Points for an odd purchase day-of-month.
pub const ODD_DAY_POINTS: i64 = 6;

/// Points for a purchase inside the afternoon window.
pub const AFTERNOON_POINTS: i64 = 10;

// =============================================================================
// Breakdown
// =============================================================================

/// Per-rule point contributions for one receipt.
///
/// Itemized like the totals block on a printed receipt, so each rule's
/// contribution is observable (and testable) on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    /// Rule 1: one point per alphanumeric retailer character.
    pub retailer_name: i64,
    /// Rule 2: round-dollar total bonus.
    pub round_dollar_total: i64,
    /// Rule 3: quarter-multiple total bonus.
    pub quarter_multiple_total: i64,
    /// Rule 4: five points per item pair.
    pub item_pairs: i64,
    /// Rule 5: per-item description-length bonus.
    pub item_descriptions: i64,
    /// Rule 6: odd day-of-month bonus.
    pub odd_purchase_day: i64,
    /// Rule 7: afternoon purchase bonus.
    pub afternoon_purchase: i64,
}

impl PointsBreakdown {
    /// Sum of every rule's contribution, saturating at `i64::MAX`.
    pub fn total(&self) -> i64 {
        self.retailer_name
            .saturating_add(self.round_dollar_total)
            .saturating_add(self.quarter_multiple_total)
            .saturating_add(self.item_pairs)
            .saturating_add(self.item_descriptions)
            .saturating_add(self.odd_purchase_day)
            .saturating_add(self.afternoon_purchase)
    }
}

impl From<&Receipt> for PointsBreakdown {
    fn from(receipt: &Receipt) -> Self {
        // Rules 2 and 3 share one parse of the total.
        let total = receipt.total_money();
        PointsBreakdown {
            retailer_name: retailer_name_points(&receipt.retailer),
            round_dollar_total: round_dollar_points(total),
            quarter_multiple_total: quarter_multiple_points(total),
            item_pairs: item_pair_points(&receipt.items),
            item_descriptions: item_description_points(&receipt.items),
            odd_purchase_day: odd_day_points(receipt.purchase_date()),
            afternoon_purchase: afternoon_points(receipt.purchase_time()),
        }
    }
}

// =============================================================================
// Scoring Entry Point
// =============================================================================

/// Scores a receipt: the sum of all seven rules.
///
/// ## Example
/// ```
/// use tally_core::{points, NewReceipt, Receipt};
///
/// let receipt = Receipt::from_new(
///     NewReceipt {
///         retailer: "Target".into(),
///         purchase_date: "2022-01-01".into(),
///         purchase_time: "13:01".into(),
///         total: "35.00".into(),
///         ..NewReceipt::default()
///     },
///     "r-1".into(),
/// );
///
/// // 6 retailer characters + 50 + 25 for the total + 6 for the odd day.
/// assert_eq!(points::score(&receipt), 87);
/// ```
pub fn score(receipt: &Receipt) -> i64 {
    PointsBreakdown::from(receipt).total()
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: one point per ASCII alphanumeric character of the retailer
/// name. Spaces, punctuation, and non-ASCII letters count for nothing.
fn retailer_name_points(retailer: &str) -> i64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as i64
}

/// Rule 2: 50 points for a round-dollar total.
fn round_dollar_points(total: Option<Money>) -> i64 {
    match total {
        Some(total) if total.is_round_dollar() => ROUND_DOLLAR_POINTS,
        _ => 0,
    }
}

/// Rule 3: 25 points for a total divisible by 0.25. Stacks with rule 2:
/// a round dollar is also a quarter multiple.
fn quarter_multiple_points(total: Option<Money>) -> i64 {
    match total {
        Some(total) if total.is_quarter_multiple() => QUARTER_MULTIPLE_POINTS,
        _ => 0,
    }
}

/// Rule 4: five points per pair of items. An odd item is no pair.
fn item_pair_points(items: &[Item]) -> i64 {
    (items.len() / 2) as i64 * POINTS_PER_ITEM_PAIR
}

/// Rule 5: per-item bonus driven by the trimmed description length.
/// The per-receipt sum saturates at `i64::MAX` instead of wrapping.
fn item_description_points(items: &[Item]) -> i64 {
    items
        .iter()
        .map(description_bonus)
        .fold(0, i64::saturating_add)
}

/// When the byte length of the whitespace-trimmed description is
/// divisible by 3, the item earns `ceil(price × 0.2)` points. Length
/// zero divides by 3 like any other multiple; emptiness is not
/// special-cased.
fn description_bonus(item: &Item) -> i64 {
    if item.short_description.trim().len() % 3 != 0 {
        return 0;
    }
    match item.price_money() {
        Some(price) => ceil_fifth_of(price),
        None => 0,
    }
}

/// `ceil(price × 0.2)` without touching floats: one point per started
/// 500 cents. Holds for every representable cents value.
fn ceil_fifth_of(price: Money) -> i64 {
    let cents = price.cents();
    cents.div_euclid(500) + i64::from(cents.rem_euclid(500) > 0)
}

/// Rule 6: six points when the day-of-month is odd. Only real calendar
/// dates count; `"2022-02-30"` earns nothing.
fn odd_day_points(date: Option<NaiveDate>) -> i64 {
    match date {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Rule 7: ten points for an afternoon purchase.
///
/// The window is literal: `14:00` sharp earns nothing, `14:01` through
/// `15:59` earn the bonus, `16:00` is out.
fn afternoon_points(time: Option<NaiveTime>) -> i64 {
    match time {
        Some(time) if (time.hour() == 14 && time.minute() > 0) || time.hour() == 15 => {
            AFTERNOON_POINTS
        }
        _ => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
