//! # rewards-db: Database Layer for Receipt Rewards
//!
//! This crate provides receipt storage for the rewards service.
//! It uses SQLite for durable storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Rewards Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (process_receipt / get_points)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     rewards-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repository   │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (receipt.rs)  │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ ReceiptRepo   │    │ 001_initial_ │  │   │
//! │  │   │ WAL mode      │    │ save/find     │    │ schema.sql   │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: under test)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - The receipt repository (save / find_by_id)
//!
//! ## Guarantees the engine relies on
//!
//! - **No partial persistence**: a receipt and its items are written in one
//!   transaction.
//! - **Read-after-write visibility**: a committed save is immediately
//!   visible to a subsequent `find_by_id`, from any connection in the pool.
//! - **At-most-one copy**: every save generates a fresh UUID primary key.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rewards_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/rewards.db")).await?;
//! let id = db.receipts().save(&receipt).await?;
//! let stored = db.receipts().find_by_id(id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::DbError;
pub use pool::{Database, DbConfig};
pub use repository::receipt::ReceiptRepository;
