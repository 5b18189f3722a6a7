//! # Error Types
//!
//! Validation error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                       │
//! │  └── ValidationError  - Receipt fails a well-formedness rule           │
//! │                                                                         │
//! │  rewards-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  API errors (in app)                                                   │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError ──► ApiError ──► 400 response                   │
//! │        DbError         ──► ApiError ──► 404/500 response               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant's message is the exact user-facing reason
//! 4. The validator reports the FIRST failing rule only, so one variant is
//!    always enough - no error lists

use thiserror::Error;

/// Receipt validation errors.
///
/// One variant per well-formedness rule, in the order the validator checks
/// them. The `Display` text of each variant is the reason reported to the
/// caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Retailer name missing or blank after trimming.
    #[error("Retailer name is required.")]
    RetailerRequired,

    /// Items list is empty.
    #[error("At least one item is required.")]
    ItemsRequired,

    /// An item's short description is blank after trimming.
    #[error("Each item must have a description.")]
    ItemDescriptionRequired,

    /// An item's price is zero or negative.
    #[error("Each item must have a positive price.")]
    ItemPriceNotPositive,

    /// Receipt total is zero or negative.
    #[error("Total must be a positive value.")]
    TotalNotPositive,

    /// Purchase date lies after the processing date.
    #[error("Purchase date cannot be in the future.")]
    PurchaseDateInFuture,

    /// Purchase time given without a purchase date.
    #[error("Purchase date must be provided if time is specified.")]
    TimeWithoutDate,
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::RetailerRequired.to_string(),
            "Retailer name is required."
        );
        assert_eq!(
            ValidationError::ItemsRequired.to_string(),
            "At least one item is required."
        );
        assert_eq!(
            ValidationError::ItemDescriptionRequired.to_string(),
            "Each item must have a description."
        );
        assert_eq!(
            ValidationError::ItemPriceNotPositive.to_string(),
            "Each item must have a positive price."
        );
        assert_eq!(
            ValidationError::TotalNotPositive.to_string(),
            "Total must be a positive value."
        );
        assert_eq!(
            ValidationError::PurchaseDateInFuture.to_string(),
            "Purchase date cannot be in the future."
        );
        assert_eq!(
            ValidationError::TimeWithoutDate.to_string(),
            "Purchase date must be provided if time is specified."
        );
    }
}
