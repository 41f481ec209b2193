//! # velora-core: Pure Business Logic for Velora
//!
//! This crate is the **heart** of the Velora storefront app. It contains the
//! basket and wishlist logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Velora Architecture                            │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                Frontend (React Native)                      │   │
//! │  │    Home ──► Product Details ──► Cart ──► Wishlist           │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ read views / call operations       │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                      velora-store                           │   │
//! │  │    CartStore, WishlistStore, subscribe/notify, seeding      │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              ★ velora-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────────┐      │   │
//! │  │   │  types  │ │  money  │ │   cart   │ │  wishlist  │      │   │
//! │  │   │ Product │ │  Money  │ │   Cart   │ │  Wishlist  │      │   │
//! │  │   └─────────┘ └─────────┘ └──────────┘ └────────────┘      │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                      │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductSnapshot)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - The basket collection and its derivations
//! - [`wishlist`] - The favorites collection
//! - [`error`] - Caller-side precondition errors
//! - [`validation`] - Size-selection policy check
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network and file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in cents (i64) to avoid float errors
//! 4. **Total Operations**: Basket mutations never fail - a missing target is a
//!    no-op, never an error, because a client-side basket cannot distinguish
//!    "already absent" from failure
//!
//! ## Example Usage
//!
//! ```rust
//! use velora_core::{Cart, Product};
//!
//! let tee = Product::new("p1", "Boxy Tee", 1999).with_sizes(["S", "M", "L"]);
//!
//! let mut cart = Cart::new();
//! cart.add_item(&tee, "M");
//! cart.add_item(&tee, "M"); // consolidates, does not duplicate
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total().cents(), 3998);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use velora_core::Cart` instead of
// `use velora_core::cart::Cart`

pub use cart::{Cart, CartLineItem, LineKey};
pub use error::ValidationError;
pub use money::Money;
pub use types::{Product, ProductSnapshot};
pub use wishlist::{Wishlist, WishlistEntry};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel size used when a product has no size concept or the caller
/// omitted one.
///
/// ## Why "M"?
/// The seed data contract and the basket row identity both fall back to this
/// value, so a size-less product always maps to exactly one basket row. The
/// concrete string is part of the external seed interface and must not change
/// independently of it.
pub const DEFAULT_SIZE: &str = "M";
