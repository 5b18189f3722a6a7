//! # Receipt Data Model
//!
//! The central entity of the system: a submitted purchase receipt and its
//! line items.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Receipt Lifecycle                                 │
//! │                                                                         │
//! │  1. SUBMIT                                                              │
//! │     └── JSON body deserialized into Receipt                             │
//! │                                                                         │
//! │  2. VALIDATE                                                            │
//! │     └── validate() → reject-and-discard on failure                      │
//! │                                                                         │
//! │  3. STORE                                                               │
//! │     └── repository assigns a UUID; receipt is immutable after this      │
//! │                                                                         │
//! │  4. SCORE (on every points lookup)                                      │
//! │     └── score() → integer points, recomputed, never persisted           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names are camelCase; money travels as decimal text, dates as
//! `YYYY-MM-DD`, and times as `HH:MM` (seconds tolerated on input):
//!
//! ```json
//! {
//!   "retailer": "Target",
//!   "purchaseDate": "2022-01-01",
//!   "purchaseTime": "13:01",
//!   "items": [
//!     { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
//!   ],
//!   "total": "6.49"
//! }
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// The identifier is deliberately NOT part of this type: it exists only
/// after storage accepts the receipt, and it is the storage layer that
/// assigns it. Keeping it out of the model makes "absent before storage"
/// unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name. Must be non-blank.
    pub retailer: String,

    /// Calendar date of the purchase, if known. Must not be in the future.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    /// Time of day of the purchase, if known. Requires a purchase date.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "hhmm_time"
    )]
    pub purchase_time: Option<NaiveTime>,

    /// Grand total. Must be strictly positive.
    pub total: Money,

    /// Line items, in receipt order. Must be non-empty.
    pub items: Vec<ReceiptItem>,
}

/// One line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItem {
    /// Product description as printed on the receipt. Must be non-blank.
    pub short_description: String,

    /// Line price. Must be strictly positive.
    pub price: Money,
}

// =============================================================================
// Time-of-Day Serde
// =============================================================================

/// Serde adapter for `Option<NaiveTime>` in receipt time format.
///
/// Receipts carry `"13:01"`; some producers include seconds (`"13:01:00"`),
/// so deserialization accepts both. Serialization always emits `HH:MM`.
mod hhmm_time {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const MINUTES: &str = "%H:%M";
    const SECONDS: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(&t.format(MINUTES).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        let text: Option<String> = Option::deserialize(deserializer)?;
        match text {
            None => Ok(None),
            Some(raw) => NaiveTime::parse_from_str(&raw, MINUTES)
                .or_else(|_| NaiveTime::parse_from_str(&raw, SECONDS))
                .map(Some)
                .map_err(|_| {
                    serde::de::Error::custom(format!("invalid purchase time: {raw:?}"))
                }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_receipt() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
                { "shortDescription": "Emils Cheese Pizza", "price": "12.25" }
            ],
            "total": "18.74"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(
            receipt.purchase_date,
            NaiveDate::from_ymd_opt(2022, 1, 1)
        );
        assert_eq!(
            receipt.purchase_time,
            NaiveTime::from_hms_opt(13, 1, 0)
        );
        assert_eq!(receipt.total.cents(), 1874);
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price.cents(), 649);
    }

    #[test]
    fn test_date_and_time_are_optional() {
        let json = r#"{
            "retailer": "Corner Store",
            "items": [{ "shortDescription": "Gum", "price": "0.50" }],
            "total": "0.50"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.purchase_date, None);
        assert_eq!(receipt.purchase_time, None);
    }

    #[test]
    fn test_time_accepts_seconds_on_input() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "14:33:00",
            "items": [{ "shortDescription": "Gum", "price": "0.50" }],
            "total": "0.50"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.purchase_time, NaiveTime::from_hms_opt(14, 33, 0));
    }

    #[test]
    fn test_rejects_malformed_time() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "25:99",
            "items": [{ "shortDescription": "Gum", "price": "0.50" }],
            "total": "0.50"
        }"#;

        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let receipt = Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 3, 20),
            purchase_time: NaiveTime::from_hms_opt(14, 33, 0),
            total: Money::from_cents(900),
            items: vec![ReceiptItem {
                short_description: "Gatorade".to_string(),
                price: Money::from_cents(225),
            }],
        };

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(json.contains("\"purchaseTime\":\"14:33\""));
        assert!(json.contains("\"total\":\"9.00\""));

        let back: Receipt = serde_json::from_str(&json).unwrap();
        assert_eq!(back, receipt);
    }

    #[test]
    fn test_omitted_optionals_not_serialized() {
        let receipt = Receipt {
            retailer: "Target".to_string(),
            purchase_date: None,
            purchase_time: None,
            total: Money::from_cents(100),
            items: vec![ReceiptItem {
                short_description: "Gum".to_string(),
                price: Money::from_cents(100),
            }],
        };

        let json = serde_json::to_string(&receipt).unwrap();
        assert!(!json.contains("purchaseDate"));
        assert!(!json.contains("purchaseTime"));
    }
}
