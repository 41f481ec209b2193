//! # Seed Data Boundary
//!
//! The one asynchronous edge of the state core: the initial basket and
//! wishlist contents supplied at startup by an external provider.
//!
//! ## Seed Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Seed Load Flow                               │
//! │                                                                     │
//! │  App startup                                                        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  store.load(&provider).await        loading flag: true              │
//! │       │                                                             │
//! │       ├── Ok(seed) ──► rows mapped through the same mutation        │
//! │       │                path every gesture uses                      │
//! │       │                                                             │
//! │       └── Err(e)  ──► warn!, store stays EMPTY (valid state)        │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  loading flag: false, view published                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Mapping Rules
//! - row price falls back `price → product.price → 0`
//! - row size falls back to the sentinel `"M"`
//! - a row with quantity <= 0 is dropped (such a row must not exist)
//!
//! [`FixtureSeed`] stands in for the future live data source, the same role
//! the bundled dummy data played in the original app.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use velora_core::Product;

use crate::error::SeedResult;

// =============================================================================
// Seed Shapes
// =============================================================================

/// One basket row as the provider supplies it.
///
/// Optional fields carry the provider's overrides; absent ones fall back as
/// described in the module docs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedCartLine {
    /// The product this row refers to.
    pub product: Product,

    /// Units in the basket.
    pub quantity: i64,

    /// Size choice, if the provider recorded one.
    pub size: Option<String>,

    /// Price override in cents, if the provider locked one in. Falls back
    /// to the product's own price.
    pub price_cents: Option<i64>,
}

impl SeedCartLine {
    /// Resolves the price fallback chain: `price → product.price → 0`.
    ///
    /// The final `→ 0` leg only fires for a negative override; the product
    /// price itself is always present in the catalog shape.
    pub fn resolved_price_cents(&self) -> i64 {
        self.price_cents.unwrap_or(self.product.price_cents).max(0)
    }
}

/// The initial basket representation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSeed {
    pub lines: Vec<SeedCartLine>,
}

/// The initial wishlist representation: a plain list of products.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistSeed {
    pub products: Vec<Product>,
}

// =============================================================================
// Seed Provider
// =============================================================================

/// Source of the initial basket and wishlist contents.
///
/// Awaited exactly once per store at startup. Implementations may hit the
/// network later; today [`FixtureSeed`] serves bundled data.
// Stores take providers generically (no dyn, no cross-task spawning), so the
// auto-trait leakage async_fn_in_trait warns about cannot bite us here.
#[allow(async_fn_in_trait)]
pub trait SeedProvider {
    /// Fetches the initial basket contents.
    async fn fetch_cart(&self) -> SeedResult<CartSeed>;

    /// Fetches the initial wishlist contents.
    async fn fetch_wishlist(&self) -> SeedResult<WishlistSeed>;
}

// =============================================================================
// Fixture Seed
// =============================================================================

/// Bundled seed data standing in for a future live data source.
///
/// ## Generated Catalog
/// A small fashion catalog with realistic attributes:
/// - Unique UUID ids
/// - Sized apparel (S/M/L/XL) and size-less accessories
/// - Prices in cents
#[derive(Debug, Clone, Default)]
pub struct FixtureSeed {
    cart: CartSeed,
    wishlist: WishlistSeed,
}

impl FixtureSeed {
    /// Seed with a couple of basket rows and favorites, for demos and
    /// development builds.
    pub fn sample() -> Self {
        let catalog = Self::catalog();

        let cart = CartSeed {
            lines: vec![
                SeedCartLine {
                    product: catalog[0].clone(),
                    quantity: 2,
                    size: Some("M".to_string()),
                    price_cents: None,
                },
                SeedCartLine {
                    product: catalog[3].clone(),
                    quantity: 1,
                    size: None, // accessory, falls back to the sentinel
                    price_cents: None,
                },
            ],
        };

        let wishlist = WishlistSeed {
            products: vec![catalog[1].clone(), catalog[4].clone()],
        };

        FixtureSeed { cart, wishlist }
    }

    /// Seed with nothing in it: a fresh shopper session.
    pub fn empty() -> Self {
        FixtureSeed::default()
    }

    /// The bundled demo catalog.
    pub fn catalog() -> Vec<Product> {
        let apparel_sizes = ["S", "M", "L", "XL"];
        vec![
            Product::new(Uuid::new_v4().to_string(), "Boxy Cotton Tee", 1999)
                .with_sizes(apparel_sizes)
                .with_category("Tops")
                .with_images(["https://cdn.velora.shop/p/boxy-tee-1.jpg"])
                .with_description("Oversized fit, heavyweight cotton."),
            Product::new(Uuid::new_v4().to_string(), "Straight Leg Denim", 5499)
                .with_sizes(apparel_sizes)
                .with_category("Bottoms")
                .with_images(["https://cdn.velora.shop/p/denim-1.jpg"]),
            Product::new(Uuid::new_v4().to_string(), "Hooded Fleece", 4299)
                .with_sizes(apparel_sizes)
                .with_category("Outerwear")
                .with_images(["https://cdn.velora.shop/p/fleece-1.jpg"]),
            Product::new(Uuid::new_v4().to_string(), "Canvas Tote", 1499)
                .with_category("Accessories")
                .with_images(["https://cdn.velora.shop/p/tote-1.jpg"]),
            Product::new(Uuid::new_v4().to_string(), "Wool Beanie", 1299)
                .with_category("Accessories")
                .with_images(["https://cdn.velora.shop/p/beanie-1.jpg"]),
            Product::new(Uuid::new_v4().to_string(), "Crew Socks 3-Pack", 999)
                .with_category("Accessories"),
        ]
    }
}

impl SeedProvider for FixtureSeed {
    async fn fetch_cart(&self) -> SeedResult<CartSeed> {
        Ok(self.cart.clone())
    }

    async fn fetch_wishlist(&self) -> SeedResult<WishlistSeed> {
        Ok(self.wishlist.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_fallback_chain() {
        let product = Product::new("p1", "Boxy Tee", 1999);

        let with_override = SeedCartLine {
            product: product.clone(),
            quantity: 1,
            size: None,
            price_cents: Some(1499),
        };
        assert_eq!(with_override.resolved_price_cents(), 1499);

        let without_override = SeedCartLine {
            product,
            quantity: 1,
            size: None,
            price_cents: None,
        };
        assert_eq!(without_override.resolved_price_cents(), 1999);
    }

    #[test]
    fn test_negative_price_clamps_to_zero() {
        let line = SeedCartLine {
            product: Product::new("p1", "Boxy Tee", 1999),
            quantity: 1,
            size: None,
            price_cents: Some(-100),
        };
        assert_eq!(line.resolved_price_cents(), 0);
    }

    #[tokio::test]
    async fn test_fixture_sample_shapes() {
        let seed = FixtureSeed::sample();

        let cart = seed.fetch_cart().await.unwrap();
        assert_eq!(cart.lines.len(), 2);
        assert!(cart.lines.iter().all(|l| l.quantity >= 1));

        let wishlist = seed.fetch_wishlist().await.unwrap();
        assert_eq!(wishlist.products.len(), 2);
    }

    #[tokio::test]
    async fn test_fixture_empty_is_empty() {
        let seed = FixtureSeed::empty();
        assert!(seed.fetch_cart().await.unwrap().lines.is_empty());
        assert!(seed.fetch_wishlist().await.unwrap().products.is_empty());
    }
}
