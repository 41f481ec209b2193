//! # Validation Module
//!
//! Caller-side precondition checks for the presentation layer.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Who Validates What                               │
//! │                                                                     │
//! │  Product details screen                                             │
//! │  ├── calls validate_size_selection(product, selected)               │
//! │  ├── Err(SizeRequired)  → show "Please select a size", DON'T add    │
//! │  └── Ok(size)           → store.add_item(product, size)             │
//! │                                                                     │
//! │  CartStore / Cart                                                   │
//! │  └── enforces NOTHING about sizes. It uses whatever size it is      │
//! │      given as part of the row identity. By policy the block         │
//! │      happens before the store is ever called.                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The original app had two product-details variants that disagreed here:
//! one silently added with a default size, one blocked with a warning. The
//! policy is now uniformly **block**: a sized product without a chosen size
//! never reaches the basket.
//!
//! ## Usage
//! ```rust
//! use velora_core::validation::validate_size_selection;
//! use velora_core::Product;
//!
//! let tee = Product::new("p1", "Boxy Tee", 1999).with_sizes(["S", "M", "L"]);
//!
//! assert!(validate_size_selection(&tee, Some("M")).is_ok());
//! assert!(validate_size_selection(&tee, None).is_err());
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;
use crate::DEFAULT_SIZE;

/// Validates the shopper's size selection for a product about to be added.
///
/// ## Rules
/// - Product has size options and none selected → [`ValidationError::SizeRequired`]
/// - Product has size options and selection is not among them →
///   [`ValidationError::SizeNotOffered`]
/// - Product has no size concept → always Ok, resolving to the sentinel size
///
/// ## Returns
/// The size to pass to `add_item`, so the caller cannot validate one size
/// and add another by accident.
pub fn validate_size_selection<'a>(
    product: &Product,
    selected: Option<&'a str>,
) -> ValidationResult<&'a str> {
    let selected = selected.filter(|s| !s.is_empty());

    if !product.requires_size() {
        // Size-less products always land on the sentinel row.
        return Ok(selected.unwrap_or(DEFAULT_SIZE));
    }

    let size = selected.ok_or_else(|| ValidationError::SizeRequired {
        product_name: product.name.clone(),
    })?;

    if !product.sizes.iter().any(|s| s == size) {
        return Err(ValidationError::SizeNotOffered {
            product_name: product.name.clone(),
            size: size.to_string(),
        });
    }

    Ok(size)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sized_product_blocks_without_selection() {
        let tee = Product::new("p1", "Boxy Tee", 1999).with_sizes(["S", "M", "L"]);

        assert_eq!(
            validate_size_selection(&tee, None),
            Err(ValidationError::SizeRequired {
                product_name: "Boxy Tee".to_string()
            })
        );
        // An empty selection counts as no selection.
        assert!(validate_size_selection(&tee, Some("")).is_err());
    }

    #[test]
    fn test_sized_product_accepts_offered_size() {
        let tee = Product::new("p1", "Boxy Tee", 1999).with_sizes(["S", "M", "L"]);

        assert_eq!(validate_size_selection(&tee, Some("L")), Ok("L"));
    }

    #[test]
    fn test_sized_product_rejects_unoffered_size() {
        let tee = Product::new("p1", "Boxy Tee", 1999).with_sizes(["S", "M", "L"]);

        assert_eq!(
            validate_size_selection(&tee, Some("XXL")),
            Err(ValidationError::SizeNotOffered {
                product_name: "Boxy Tee".to_string(),
                size: "XXL".to_string(),
            })
        );
    }

    #[test]
    fn test_sizeless_product_resolves_to_sentinel() {
        let tote = Product::new("p2", "Tote Bag", 899);

        assert_eq!(validate_size_selection(&tote, None), Ok(DEFAULT_SIZE));
        assert_eq!(validate_size_selection(&tote, Some("One Size")), Ok("One Size"));
    }
}
