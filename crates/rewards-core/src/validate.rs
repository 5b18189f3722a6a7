//! # Receipt Validation
//!
//! Structural and business well-formedness checks for submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Field presence and type checks                                    │
//! │  └── Malformed money/date/time text → 400 before this module runs      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - Business rule validation                       │
//! │  ├── Fixed check order, FIRST failure wins (short-circuit)             │
//! │  └── Specific human-readable reason per rule                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL + foreign key constraints                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Check Order
//! 1. retailer blank           → `RetailerRequired`
//! 2. items empty              → `ItemsRequired`
//! 3. per item, in order:
//!    blank description        → `ItemDescriptionRequired`
//!    non-positive price       → `ItemPriceNotPositive`
//! 4. total non-positive       → `TotalNotPositive`
//! 5. date after today         → `PurchaseDateInFuture`
//! 6. time without date        → `TimeWithoutDate`

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};
use crate::receipt::Receipt;

/// Validates a submitted receipt before it is accepted for storage.
///
/// Pure function of its input plus the processing date: `today` is an
/// explicit parameter so the future-date rule is deterministic under test,
/// never read from an ambient clock.
///
/// Checks run in a fixed order and the first failing check wins; items
/// after the first offending item are not examined.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rewards_core::{validate, Money, Receipt, ValidationError};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: None,
///     purchase_time: None,
///     total: Money::from_cents(100),
///     items: vec![],
/// };
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(validate(&receipt, today), Err(ValidationError::ItemsRequired));
/// ```
pub fn validate(receipt: &Receipt, today: NaiveDate) -> ValidationResult<()> {
    if receipt.retailer.trim().is_empty() {
        return Err(ValidationError::RetailerRequired);
    }

    if receipt.items.is_empty() {
        return Err(ValidationError::ItemsRequired);
    }

    for item in &receipt.items {
        if item.short_description.trim().is_empty() {
            return Err(ValidationError::ItemDescriptionRequired);
        }
        if !item.price.is_positive() {
            return Err(ValidationError::ItemPriceNotPositive);
        }
    }

    if !receipt.total.is_positive() {
        return Err(ValidationError::TotalNotPositive);
    }

    if let Some(date) = receipt.purchase_date {
        if date > today {
            return Err(ValidationError::PurchaseDateInFuture);
        }
    }

    if receipt.purchase_time.is_some() && receipt.purchase_date.is_none() {
        return Err(ValidationError::TimeWithoutDate);
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::receipt::ReceiptItem;
    use chrono::NaiveTime;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn item(description: &str, cents: i64) -> ReceiptItem {
        ReceiptItem {
            short_description: description.to_string(),
            price: Money::from_cents(cents),
        }
    }

    fn valid_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 1),
            purchase_time: NaiveTime::from_hms_opt(13, 1, 0),
            total: Money::from_cents(649),
            items: vec![item("Mountain Dew 12PK", 649)],
        }
    }

    #[test]
    fn test_valid_receipt_passes() {
        assert_eq!(validate(&valid_receipt(), today()), Ok(()));
    }

    #[test]
    fn test_blank_retailer_rejected() {
        let mut receipt = valid_receipt();
        receipt.retailer = "   ".to_string();
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::RetailerRequired)
        );
    }

    #[test]
    fn test_empty_items_rejected() {
        let mut receipt = valid_receipt();
        receipt.items.clear();
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::ItemsRequired)
        );
    }

    #[test]
    fn test_blank_item_description_rejected() {
        let mut receipt = valid_receipt();
        receipt.items = vec![item("Gum", 50), item("  ", 100)];
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::ItemDescriptionRequired)
        );
    }

    #[test]
    fn test_non_positive_item_price_rejected() {
        for cents in [0, -125] {
            let mut receipt = valid_receipt();
            receipt.items = vec![item("Gum", cents)];
            assert_eq!(
                validate(&receipt, today()),
                Err(ValidationError::ItemPriceNotPositive),
                "price of {cents} cents should be rejected"
            );
        }
    }

    #[test]
    fn test_non_positive_total_rejected() {
        for cents in [0, -900] {
            let mut receipt = valid_receipt();
            receipt.total = Money::from_cents(cents);
            assert_eq!(
                validate(&receipt, today()),
                Err(ValidationError::TotalNotPositive),
                "total of {cents} cents should be rejected"
            );
        }
    }

    #[test]
    fn test_future_date_rejected_today_allowed() {
        let mut receipt = valid_receipt();
        receipt.purchase_time = None;

        receipt.purchase_date = today().succ_opt();
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::PurchaseDateInFuture)
        );

        // The processing day itself is not "in the future"
        receipt.purchase_date = Some(today());
        assert_eq!(validate(&receipt, today()), Ok(()));
    }

    #[test]
    fn test_time_without_date_rejected() {
        let mut receipt = valid_receipt();
        receipt.purchase_date = None;
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::TimeWithoutDate)
        );
    }

    /// The check order is part of the contract: a receipt violating several
    /// rules reports the FIRST one in check order, not a later one.
    #[test]
    fn test_first_failing_check_wins() {
        // Blank retailer AND empty items → retailer reason wins
        let receipt = Receipt {
            retailer: "".to_string(),
            purchase_date: None,
            purchase_time: None,
            total: Money::from_cents(0),
            items: vec![],
        };
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::RetailerRequired)
        );

        // Blank description on item 0 AND bad price on item 1 → description wins
        let mut receipt = valid_receipt();
        receipt.items = vec![item(" ", 100), item("Gum", -1)];
        receipt.total = Money::from_cents(0);
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::ItemDescriptionRequired)
        );

        // Bad item price AND bad total → item price wins (items checked first)
        let mut receipt = valid_receipt();
        receipt.items = vec![item("Gum", 0)];
        receipt.total = Money::from_cents(-100);
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::ItemPriceNotPositive)
        );

        // Future date AND time-without-date cannot combine (time requires a
        // date to be set for the date rule to fire first), but bad total AND
        // future date → total wins
        let mut receipt = valid_receipt();
        receipt.total = Money::from_cents(0);
        receipt.purchase_date = today().succ_opt();
        assert_eq!(
            validate(&receipt, today()),
            Err(ValidationError::TotalNotPositive)
        );
    }
}
