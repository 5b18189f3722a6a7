//! # Receipt Repository
//!
//! Database operations for receipts and their line items.
//!
//! ## Storage Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Storage                                    │
//! │                                                                         │
//! │  1. SAVE (after validation passes)                                     │
//! │     └── save(&receipt) → fresh UUID                                    │
//! │         receipt row + item rows in ONE transaction                     │
//! │         (a failed save persists nothing)                               │
//! │                                                                         │
//! │  2. LOOKUP (on every points request)                                   │
//! │     └── find_by_id(id) → Some(receipt) | None                          │
//! │         items reassembled in submitted order                           │
//! │                                                                         │
//! │  No update. No delete. A stored receipt is immutable.                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime, Utc};
use sqlx::{Row, SqlitePool};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use rewards_core::{Money, Receipt, ReceiptItem};

/// Column text formats. Dates/times are stored as ISO text so the rows stay
/// human-readable in any SQLite tool.
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Repository for receipt database operations.
#[derive(Debug, Clone)]
pub struct ReceiptRepository {
    pool: SqlitePool,
}

impl ReceiptRepository {
    /// Creates a new ReceiptRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReceiptRepository { pool }
    }

    /// Persists a validated receipt and returns its newly assigned id.
    ///
    /// ## Id Assignment
    /// Every save generates a fresh UUID v4, so there is exactly one stored
    /// copy per accepted receipt and ids never collide across saves.
    ///
    /// ## Atomicity
    /// The receipt row and all item rows are inserted in a single
    /// transaction: either the whole receipt is stored or none of it is.
    pub async fn save(&self, receipt: &Receipt) -> DbResult<Uuid> {
        let id = Uuid::new_v4();
        let id_text = id.to_string();
        let purchase_date = receipt
            .purchase_date
            .map(|d| d.format(DATE_FORMAT).to_string());
        let purchase_time = receipt
            .purchase_time
            .map(|t| t.format(TIME_FORMAT).to_string());
        let created_at = Utc::now().to_rfc3339();

        debug!(id = %id_text, retailer = %receipt.retailer, "Saving receipt");

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO receipts (
                id, retailer, purchase_date, purchase_time, total_cents, created_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&id_text)
        .bind(&receipt.retailer)
        .bind(&purchase_date)
        .bind(&purchase_time)
        .bind(receipt.total.cents())
        .bind(&created_at)
        .execute(&mut *tx)
        .await?;

        for (position, item) in receipt.items.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO receipt_items (
                    receipt_id, position, short_description, price_cents
                ) VALUES (?1, ?2, ?3, ?4)
                "#,
            )
            .bind(&id_text)
            .bind(position as i64)
            .bind(&item.short_description)
            .bind(item.price.cents())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(id = %id_text, items = receipt.items.len(), "Receipt saved");
        Ok(id)
    }

    /// Loads a stored receipt by id.
    ///
    /// Returns `Ok(None)` for unknown ids; items come back in the order they
    /// were submitted.
    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<Receipt>> {
        let id_text = id.to_string();

        let row = sqlx::query(
            r#"
            SELECT retailer, purchase_date, purchase_time, total_cents
            FROM receipts
            WHERE id = ?1
            "#,
        )
        .bind(&id_text)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!(id = %id_text, "Receipt not found");
            return Ok(None);
        };

        let retailer: String = row.try_get("retailer")?;
        let total_cents: i64 = row.try_get("total_cents")?;

        let purchase_date = row
            .try_get::<Option<String>, _>("purchase_date")?
            .map(|text| {
                NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| DbError::CorruptRow {
                    receipt_id: id_text.clone(),
                    reason: format!("invalid purchase_date {text:?}: {e}"),
                })
            })
            .transpose()?;

        let purchase_time = row
            .try_get::<Option<String>, _>("purchase_time")?
            .map(|text| {
                NaiveTime::parse_from_str(&text, TIME_FORMAT).map_err(|e| DbError::CorruptRow {
                    receipt_id: id_text.clone(),
                    reason: format!("invalid purchase_time {text:?}: {e}"),
                })
            })
            .transpose()?;

        let item_rows = sqlx::query(
            r#"
            SELECT short_description, price_cents
            FROM receipt_items
            WHERE receipt_id = ?1
            ORDER BY position
            "#,
        )
        .bind(&id_text)
        .fetch_all(&self.pool)
        .await?;

        let mut items = Vec::with_capacity(item_rows.len());
        for item_row in &item_rows {
            items.push(ReceiptItem {
                short_description: item_row.try_get("short_description")?,
                price: Money::from_cents(item_row.try_get("price_cents")?),
            });
        }

        Ok(Some(Receipt {
            retailer,
            purchase_date,
            purchase_time,
            total: Money::from_cents(total_cents),
            items,
        }))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
