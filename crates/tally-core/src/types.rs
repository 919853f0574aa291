//! # Domain Types
//!
//! Core domain types for receipt intake and scoring.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Receipt Lifecycle                            │
//! │                                                                     │
//! │  ┌──────────────────┐    register     ┌──────────────────┐          │
//! │  │   NewReceipt     │   ──────────►   │     Receipt      │          │
//! │  │  ──────────────  │   (id: uuid)    │  ──────────────  │          │
//! │  │  retailer        │                 │  id              │          │
//! │  │  purchaseDate    │                 │  retailer        │          │
//! │  │  purchaseTime    │                 │  purchaseDate    │          │
//! │  │  total           │                 │  purchaseTime    │          │
//! │  │  items: [Item]   │                 │  total           │          │
//! │  └──────────────────┘                 │  items: [Item]   │          │
//! │                                       └──────────────────┘          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stringly-Typed Wire Fields
//! Dates, times, and amounts arrive as text and are *stored* as text,
//! exactly as submitted. Typed views (`Money`, `NaiveDate`, `NaiveTime`)
//! are produced on demand by fallible accessors returning `Option`; a
//! malformed field yields `None` and the caller decides what that means.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Item
// =============================================================================

/// A line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    /// Product description as printed on the receipt.
    pub short_description: String,

    /// Item price as decimal text (`"6.49"`).
    pub price: String,
}

impl Item {
    /// Parses the price into [`Money`]. `None` when malformed.
    #[inline]
    pub fn price_money(&self) -> Option<Money> {
        self.price.parse().ok()
    }
}

// =============================================================================
// New Receipt (submission shape)
// =============================================================================

/// A submitted receipt, before the store assigns it an id.
///
/// This is the `POST /receipts/process` body shape. Every field is
/// optional on the wire: a missing key coerces to its empty value and the
/// scoring rules treat those as worth zero points. A key bound to the
/// wrong JSON *type* is still a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewReceipt {
    /// Merchant name, free-form.
    pub retailer: String,

    /// Purchase date as `YYYY-MM-DD` text.
    pub purchase_date: String,

    /// Purchase time as 24-hour `HH:MM` text.
    pub purchase_time: String,

    /// Receipt total as decimal text.
    pub total: String,

    /// Purchased items, in submitted order.
    pub items: Vec<Item>,
}

// =============================================================================
// Receipt (stored shape)
// =============================================================================

/// A registered receipt.
///
/// Identical to [`NewReceipt`] plus the store-assigned `id`. Stored
/// receipts are immutable: there is no update or delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Unique identifier (UUID v4), assigned at registration.
    pub id: String,

    /// Merchant name, free-form.
    pub retailer: String,

    /// Purchase date as `YYYY-MM-DD` text.
    pub purchase_date: String,

    /// Purchase time as 24-hour `HH:MM` text.
    pub purchase_time: String,

    /// Receipt total as decimal text.
    pub total: String,

    /// Purchased items, in submitted order.
    pub items: Vec<Item>,
}

impl Receipt {
    /// Builds a stored receipt from a submission and its assigned id.
    pub fn from_new(new: NewReceipt, id: String) -> Self {
        Receipt {
            id,
            retailer: new.retailer,
            purchase_date: new.purchase_date,
            purchase_time: new.purchase_time,
            total: new.total,
            items: new.items,
        }
    }

    /// Parses `total` into [`Money`]. `None` when malformed.
    #[inline]
    pub fn total_money(&self) -> Option<Money> {
        self.total.parse().ok()
    }

    /// Parses `purchase_date` as a calendar date. `None` when malformed
    /// or not a real date (`"2022-02-30"`).
    pub fn purchase_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.purchase_date, "%Y-%m-%d").ok()
    }

    /// Parses `purchase_time` as a 24-hour clock time. `None` when
    /// malformed (`"25:00"`, `"1:61"`).
    pub fn purchase_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.purchase_time, "%H:%M").ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_new() -> NewReceipt {
        NewReceipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            total: "35.35".to_string(),
            items: vec![Item {
                short_description: "Mountain Dew 12PK".to_string(),
                price: "6.49".to_string(),
            }],
        }
    }

    #[test]
    fn test_from_new_assigns_id_and_keeps_fields() {
        let receipt = Receipt::from_new(sample_new(), "abc-123".to_string());
        assert_eq!(receipt.id, "abc-123");
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.total, "35.35");
        assert_eq!(receipt.items.len(), 1);
    }

    #[test]
    fn test_wire_keys_are_camel_case() {
        let receipt = Receipt::from_new(sample_new(), "abc-123".to_string());
        let json = serde_json::to_value(&receipt).unwrap();
        assert!(json.get("purchaseDate").is_some());
        assert!(json.get("purchaseTime").is_some());
        assert!(json.get("items").is_some());
        assert!(
            json["items"][0].get("shortDescription").is_some(),
            "item description must use the camelCase wire key"
        );
    }

    #[test]
    fn test_missing_fields_coerce_to_empty() {
        let new: NewReceipt = serde_json::from_str(r#"{"retailer":"M&M"}"#).unwrap();
        assert_eq!(new.retailer, "M&M");
        assert_eq!(new.purchase_date, "");
        assert_eq!(new.total, "");
        assert!(new.items.is_empty());

        let empty: NewReceipt = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, NewReceipt::default());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result = serde_json::from_str::<NewReceipt>(r#"{"total": 35.35}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_typed_accessors() {
        let receipt = Receipt::from_new(sample_new(), "abc-123".to_string());
        assert_eq!(receipt.total_money(), Some(Money::from_cents(3535)));
        assert_eq!(
            receipt.purchase_date(),
            NaiveDate::from_ymd_opt(2022, 1, 1)
        );
        assert_eq!(
            receipt.purchase_time(),
            NaiveTime::from_hms_opt(13, 1, 0)
        );
        assert_eq!(receipt.items[0].price_money(), Some(Money::from_cents(649)));
    }

    #[test]
    fn test_typed_accessors_none_on_malformed() {
        let mut receipt = Receipt::from_new(sample_new(), "abc-123".to_string());
        receipt.total = "1,00".to_string();
        receipt.purchase_date = "2022-02-30".to_string();
        receipt.purchase_time = "25:00".to_string();
        assert_eq!(receipt.total_money(), None);
        assert_eq!(receipt.purchase_date(), None);
        assert_eq!(receipt.purchase_time(), None);
    }
}
