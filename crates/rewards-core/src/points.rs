//! # Points Calculation
//!
//! Converts a validated receipt into its reward-points score.
//!
//! ## The Seven Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scoring Rules                                    │
//! │                                                                         │
//! │  1. +1 per alphanumeric character in the retailer name                 │
//! │  2. +50 if the total is a round dollar amount                          │
//! │  3. +25 if the total is a multiple of $0.25                            │
//! │  4. +5 for every two items on the receipt                              │
//! │  5. ceil(price × 0.2) per item whose trimmed description length        │
//! │     is a multiple of 3                                                 │
//! │  6. +6 if the purchase day-of-month is odd                             │
//! │  7. +10 if the purchase time is strictly between 14:00 and 16:00       │
//! │                                                                         │
//! │  All rules are additive and independent - evaluation order does not    │
//! │  affect the total.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Precondition
//! [`score`] assumes the receipt already passed [`crate::validate`]. It is a
//! total function either way (it cannot fail or panic in release builds),
//! but the rules are only meaningful on well-formed receipts.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use crate::receipt::{Receipt, ReceiptItem};

// =============================================================================
// Rule Constants
// =============================================================================

/// Rule 2: round dollar amount with no cents.
const ROUND_DOLLAR_POINTS: u64 = 50;

/// Rule 3: total is a multiple of $0.25.
const QUARTER_MULTIPLE_POINTS: u64 = 25;

/// Rule 4: awarded per pair of items.
const POINTS_PER_ITEM_PAIR: u64 = 5;

/// Rule 6: day of the purchase date is odd.
const ODD_PURCHASE_DAY_POINTS: u64 = 6;

/// Rule 7: purchase time falls in the 2pm-4pm window (exclusive).
const AFTERNOON_WINDOW_POINTS: u64 = 10;

/// Rule 7 window bounds, in seconds from midnight. Both ends exclusive:
/// exactly 14:00:00 or 16:00:00 earns nothing.
const AFTERNOON_WINDOW_OPEN: u32 = 14 * 3600;
const AFTERNOON_WINDOW_CLOSE: u32 = 16 * 3600;

// =============================================================================
// Scorer
// =============================================================================

/// Computes the reward points for a validated receipt.
///
/// Deterministic and pure: the same receipt always yields the same score,
/// and the score is recomputed on every lookup rather than persisted.
///
/// ## Example
/// ```rust
/// use rewards_core::{score, Money, Receipt, ReceiptItem};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: None,
///     purchase_time: None,
///     total: Money::from_cents(250),
///     items: vec![
///         ReceiptItem { short_description: "abcd".to_string(), price: Money::from_cents(125) },
///         ReceiptItem { short_description: "abcd".to_string(), price: Money::from_cents(125) },
///     ],
/// };
///
/// // 6 (retailer) + 25 (quarter multiple) + 5 (one pair)
/// assert_eq!(score(&receipt), 36);
/// ```
pub fn score(receipt: &Receipt) -> u64 {
    let mut points = retailer_points(&receipt.retailer);

    if receipt.total.is_round_dollar() {
        points += ROUND_DOLLAR_POINTS;
    }
    if receipt.total.is_quarter_multiple() {
        points += QUARTER_MULTIPLE_POINTS;
    }

    points += item_pair_points(receipt.items.len());
    points += receipt.items.iter().map(description_points).sum::<u64>();
    points += purchase_date_points(receipt.purchase_date);
    points += purchase_time_points(receipt.purchase_time);

    points
}

// =============================================================================
// Individual Rules
// =============================================================================

/// Rule 1: one point per alphanumeric character in the retailer name.
///
/// Unicode-aware: letters and digits in any script count; spaces,
/// punctuation and symbols (`&`, `-`) do not.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

/// Rule 4: five points for every two items on the receipt.
fn item_pair_points(item_count: usize) -> u64 {
    (item_count as u64 / 2) * POINTS_PER_ITEM_PAIR
}

/// Rule 5: if the trimmed description length is a multiple of 3, award
/// one fifth of the price rounded up to the nearest whole point.
fn description_points(item: &ReceiptItem) -> u64 {
    let description = item.short_description.trim();

    // Validated receipts never carry blank descriptions; without this
    // invariant a zero-length description (0 % 3 == 0) would qualify.
    debug_assert!(!description.is_empty(), "scored item has blank description");

    if description.chars().count() % 3 != 0 {
        return 0;
    }

    // Price is validated positive, so the ceiling is at least 1.
    item.price.one_fifth_rounded_up().max(0) as u64
}

/// Rule 6: six points if the day of the purchase date is odd.
fn purchase_date_points(date: Option<NaiveDate>) -> u64 {
    match date {
        Some(d) if d.day() % 2 == 1 => ODD_PURCHASE_DAY_POINTS,
        _ => 0,
    }
}

/// Rule 7: ten points if the purchase time is strictly after 14:00 and
/// strictly before 16:00.
fn purchase_time_points(time: Option<NaiveTime>) -> u64 {
    match time {
        Some(t) => {
            let seconds = t.num_seconds_from_midnight();
            if seconds > AFTERNOON_WINDOW_OPEN && seconds < AFTERNOON_WINDOW_CLOSE {
                AFTERNOON_WINDOW_POINTS
            } else {
                0
            }
        }
        None => 0,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn item(description: &str, price: &str) -> ReceiptItem {
        ReceiptItem {
            short_description: description.to_string(),
            price: price.parse().unwrap(),
        }
    }

    fn receipt(retailer: &str, total: &str, items: Vec<ReceiptItem>) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: None,
            purchase_time: None,
            total: total.parse().unwrap(),
            items,
        }
    }

    #[test]
    fn test_retailer_points_counts_alphanumerics_only() {
        assert_eq!(retailer_points("Target"), 6);
        assert_eq!(retailer_points("M&M Corner Market"), 14);
        assert_eq!(retailer_points("   "), 0);
        assert_eq!(retailer_points("7-Eleven"), 7);
    }

    #[test]
    fn test_item_pair_points() {
        assert_eq!(item_pair_points(0), 0);
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(3), 5);
        assert_eq!(item_pair_points(4), 10);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_points_multiple_of_three() {
        // "Emils Cheese Pizza" is 18 chars → $12.25 × 0.2 = 2.45 → 3
        assert_eq!(description_points(&item("Emils Cheese Pizza", "12.25")), 3);
        // Surrounding whitespace is trimmed before measuring
        assert_eq!(
            description_points(&item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00")),
            3
        );
        // 4 chars → not a multiple of 3
        assert_eq!(description_points(&item("abcd", "1.25")), 0);
        // $3.00 item with 3-char description → 0.60 → 1
        assert_eq!(description_points(&item("Gum", "3.00")), 1);
    }

    #[test]
    fn test_purchase_date_points_odd_day() {
        assert_eq!(
            purchase_date_points(NaiveDate::from_ymd_opt(2022, 1, 1)),
            6
        );
        assert_eq!(
            purchase_date_points(NaiveDate::from_ymd_opt(2022, 3, 20)),
            0
        );
        assert_eq!(purchase_date_points(None), 0);
    }

    #[test]
    fn test_purchase_time_window_is_exclusive() {
        // Exactly 14:00 or 16:00 does NOT qualify
        assert_eq!(purchase_time_points(NaiveTime::from_hms_opt(14, 0, 0)), 0);
        assert_eq!(purchase_time_points(NaiveTime::from_hms_opt(16, 0, 0)), 0);
        // One second inside the window does
        assert_eq!(purchase_time_points(NaiveTime::from_hms_opt(14, 0, 1)), 10);
        assert_eq!(purchase_time_points(NaiveTime::from_hms_opt(15, 0, 0)), 10);
        assert_eq!(purchase_time_points(NaiveTime::from_hms_opt(15, 59, 59)), 10);
        // Outside the window
        assert_eq!(purchase_time_points(NaiveTime::from_hms_opt(13, 1, 0)), 0);
        assert_eq!(purchase_time_points(None), 0);
    }

    #[test]
    fn test_round_dollar_and_quarter_both_apply() {
        // $100.00 earns both rule 2 and rule 3
        let r = receipt("ab", "100.00", vec![item("Gum?", "100.00")]);
        assert_eq!(score(&r), 2 + 50 + 25);

        // $100.10 earns neither
        let r = receipt("ab", "100.10", vec![item("Gum?", "100.10")]);
        assert_eq!(score(&r), 2);
    }

    #[test]
    fn test_two_item_quarter_multiple_scenario() {
        // Target, two $1.25 items with 4-char descriptions, total $2.50:
        // 6 (retailer) + 25 (quarter multiple) + 5 (one pair) = 36
        let r = receipt(
            "Target",
            "2.50",
            vec![item("abcd", "1.25"), item("abcd", "1.25")],
        );
        assert_eq!(score(&r), 36);
    }

    #[test]
    fn test_target_receipt_scores_28() {
        let mut r = receipt(
            "Target",
            "35.35",
            vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        );
        r.purchase_date = NaiveDate::from_ymd_opt(2022, 1, 1);
        r.purchase_time = NaiveTime::from_hms_opt(13, 1, 0);

        // 6 retailer + 10 two pairs + 3 + 3 descriptions + 6 odd day = 28
        assert_eq!(score(&r), 28);
    }

    #[test]
    fn test_corner_market_receipt_scores_109() {
        let mut r = receipt(
            "M&M Corner Market",
            "9.00",
            vec![
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
                item("Gatorade", "2.25"),
            ],
        );
        r.purchase_date = NaiveDate::from_ymd_opt(2022, 3, 20);
        r.purchase_time = NaiveTime::from_hms_opt(14, 33, 0);

        // 14 retailer + 50 round dollar + 25 quarter + 10 two pairs
        // + 10 afternoon window = 109
        assert_eq!(score(&r), 109);
    }

    #[test]
    fn test_score_is_deterministic() {
        let r = receipt("Walgreens", "2.65", vec![item("Dasani", "1.40")]);
        let first = score(&r);
        assert_eq!(score(&r), first);
        assert_eq!(score(&r), first);
    }
}
