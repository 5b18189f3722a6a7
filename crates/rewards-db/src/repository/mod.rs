//! # Repository Module
//!
//! Database repository implementations for Receipt Rewards.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  HTTP Handler                                                          │
//! │       │                                                                 │
//! │       │  db.receipts().save(&receipt)                                   │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  ReceiptRepository                                                     │
//! │  ├── save(&self, receipt) → Uuid                                       │
//! │  └── find_by_id(&self, id) → Option<Receipt>                           │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • The engine only ever sees "save → id" and "load → receipt"          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`receipt::ReceiptRepository`] - Receipt persistence and lookup

pub mod receipt;
