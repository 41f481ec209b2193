//! # Error Types
//!
//! Caller-side precondition errors for velora-core.
//!
//! ## Why So Small?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Taxonomy                                   │
//! │                                                                     │
//! │  Basket/wishlist mutations      → TOTAL functions. A missing        │
//! │  (add, remove, set, toggle)       target is a silent no-op,         │
//! │                                   never an error.                   │
//! │                                                                     │
//! │  Preconditions left to caller   → ValidationError (this file).      │
//! │  (e.g. "pick a size first")       The UI checks BEFORE calling      │
//! │                                   the store and surfaces feedback   │
//! │                                   itself.                           │
//! │                                                                     │
//! │  Seed load failure              → SeedError (velora-store). The     │
//! │                                   store stays empty; nothing        │
//! │                                   propagates.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Precondition failures the presentation layer checks before mutating.
///
/// These never come out of the collections themselves; they come out of the
/// helpers in [`crate::validation`], which the UI calls first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The product has size options but no size was chosen.
    #[error("select a size for {product_name} before adding it to the cart")]
    SizeRequired { product_name: String },

    /// The chosen size is not one of the product's options.
    #[error("size '{size}' is not available for {product_name}")]
    SizeNotOffered { product_name: String, size: String },
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
        let err = ValidationError::SizeRequired {
            product_name: "Boxy Tee".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "select a size for Boxy Tee before adding it to the cart"
        );

        let err = ValidationError::SizeNotOffered {
            product_name: "Boxy Tee".to_string(),
            size: "XXL".to_string(),
        };
        assert_eq!(err.to_string(), "size 'XXL' is not available for Boxy Tee");
    }
}
