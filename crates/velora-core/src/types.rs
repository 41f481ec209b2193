//! # Domain Types
//!
//! Core domain types for the Velora storefront.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐          ┌─────────────────────┐               │
//! │  │    Product      │  frozen  │  ProductSnapshot    │               │
//! │  │  ─────────────  │  ──────► │  ─────────────────  │               │
//! │  │  id             │  copy at │  name               │               │
//! │  │  name           │  insert  │  price (captured)   │               │
//! │  │  price_cents    │  time    │  image_url          │               │
//! │  │  sizes          │          │  description        │               │
//! │  │  image_urls     │          └─────────────────────┘               │
//! │  └─────────────────┘                                                │
//! │                                                                     │
//! │  Product is OWNED BY THE CATALOG. This crate only ever reads it     │
//! │  and stores snapshots; it never mutates a Product.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A catalog product as the storefront receives it.
///
/// ## Ownership
/// The catalog collaborator owns products; this core treats them as
/// read-only input. Basket rows and wishlist entries hold [`ProductSnapshot`]
/// copies, so later catalog changes never reach stored state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier assigned by the catalog.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Ordered size options. Empty means the product has no size concept.
    pub sizes: Vec<String>,

    /// Image references, first one is the primary display image.
    pub image_urls: Vec<String>,

    /// Optional descriptive text.
    pub description: Option<String>,

    /// Optional category label (display only).
    pub category: Option<String>,

    /// Average rating out of 5, in tenths (45 = 4.5 stars). Display only.
    pub rating_tenths: Option<u8>,
}

impl Product {
    /// Creates a minimal product. Optional display attributes start empty
    /// and can be filled in with the `with_*` builders.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            price_cents,
            sizes: Vec::new(),
            image_urls: Vec::new(),
            description: None,
            category: None,
            rating_tenths: None,
        }
    }

    /// Sets the ordered size options.
    pub fn with_sizes<I, S>(mut self, sizes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sizes = sizes.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the image references.
    pub fn with_images<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the descriptive text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Whether the product requires a size choice before it can go in the
    /// basket (i.e. it has at least one size option).
    #[inline]
    pub fn requires_size(&self) -> bool {
        !self.sizes.is_empty()
    }
}

// =============================================================================
// Product Snapshot
// =============================================================================

/// Frozen copy of a product's display attributes.
///
/// ## Why Snapshot?
/// A basket row must render consistently even if the catalog updates or
/// removes the product after it was added. The snapshot is taken once, at
/// first insertion, and never refreshed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    /// Name at capture time.
    pub name: String,

    /// Price at capture time.
    pub price: Money,

    /// Primary image at capture time, if the product had one.
    pub image_url: Option<String>,

    /// Description at capture time.
    pub description: Option<String>,
}

impl ProductSnapshot {
    /// Captures a snapshot of the product's current display attributes.
    pub fn of(product: &Product) -> Self {
        ProductSnapshot {
            name: product.name.clone(),
            price: product.price(),
            image_url: product.image_urls.first().cloned(),
            description: product.description.clone(),
        }
    }
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        ProductSnapshot::of(product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_size() {
        let sized = Product::new("p1", "Boxy Tee", 1999).with_sizes(["S", "M", "L"]);
        let sizeless = Product::new("p2", "Tote Bag", 899);

        assert!(sized.requires_size());
        assert!(!sizeless.requires_size());
    }

    #[test]
    fn test_snapshot_captures_display_attributes() {
        let product = Product::new("p1", "Boxy Tee", 1999)
            .with_images(["https://cdn.velora.shop/tee-front.jpg"])
            .with_description("Oversized fit");

        let snap = ProductSnapshot::of(&product);
        assert_eq!(snap.name, "Boxy Tee");
        assert_eq!(snap.price.cents(), 1999);
        assert_eq!(
            snap.image_url.as_deref(),
            Some("https://cdn.velora.shop/tee-front.jpg")
        );
        assert_eq!(snap.description.as_deref(), Some("Oversized fit"));
    }

    #[test]
    fn test_product_wire_shape_is_camel_case() {
        // The mobile frontend binds to these exact keys.
        let product = Product::new("p1", "Boxy Tee", 1999).with_images(["a.jpg"]);
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(json["priceCents"], 1999);
        assert_eq!(json["imageUrls"][0], "a.jpg");
        assert!(json.get("price_cents").is_none());
    }

    #[test]
    fn test_snapshot_is_independent_of_catalog_changes() {
        let mut product = Product::new("p1", "Boxy Tee", 1999);
        let snap = ProductSnapshot::of(&product);

        product.name = "Renamed Tee".to_string();
        product.price_cents = 2999;

        assert_eq!(snap.name, "Boxy Tee");
        assert_eq!(snap.price.cents(), 1999);
    }
}
