//! # rewards-core: Pure Business Logic for Receipt Rewards
//!
//! This crate is the **heart** of the receipt processor. It contains the
//! validation and points-calculation engine as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Receipt Rewards Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (axum)                              │   │
//! │  │    POST /receipts/process ──► GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rewards-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  receipt  │  │   money   │  │ validate  │  │  points   │  │   │
//! │  │   │  Receipt  │  │   Money   │  │   rules   │  │  7 rules  │  │   │
//! │  │   │   Item    │  │   cents   │  │  checks   │  │  scoring  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  rewards-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repository             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`receipt`] - The receipt data model (Receipt, ReceiptItem)
//! - [`money`] - Money type with integer-cents arithmetic (no floating point!)
//! - [`error`] - Validation error types
//! - [`validate`] - Structural/business well-formedness checks
//! - [`points`] - The seven scoring rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Explicit Clock**: "today" is a parameter, never read from a global
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rewards_core::{validate, score, Money, Receipt, ReceiptItem};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: None,
//!     purchase_time: None,
//!     total: Money::from_cents(250), // $2.50
//!     items: vec![
//!         ReceiptItem { short_description: "abcd".to_string(), price: Money::from_cents(125) },
//!         ReceiptItem { short_description: "abcd".to_string(), price: Money::from_cents(125) },
//!     ],
//! };
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! validate(&receipt, today).expect("receipt is well-formed");
//!
//! // 6 (retailer) + 25 (multiple of $0.25) + 5 (one pair of items)
//! assert_eq!(score(&receipt), 36);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod points;
pub mod receipt;
pub mod validate;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rewards_core::Money` instead of
// `use rewards_core::money::Money`

pub use error::ValidationError;
pub use money::Money;
pub use points::score;
pub use receipt::{Receipt, ReceiptItem};
pub use validate::validate;
