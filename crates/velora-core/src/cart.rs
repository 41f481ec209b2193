//! # Cart Module
//!
//! The basket collection: rows keyed by (product, size) with derived totals.
//!
//! ## Row Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Basket Row Identity                              │
//! │                                                                     │
//! │  add(Tee, "M")  ──►  row (tee, M)  qty 1                            │
//! │  add(Tee, "M")  ──►  row (tee, M)  qty 2   ◄── consolidated         │
//! │  add(Tee, "L")  ──►  row (tee, L)  qty 1   ◄── distinct row         │
//! │                                                                     │
//! │  The SAME product in two sizes is two rows; the same product in     │
//! │  the same size is always exactly one row.                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Total Operations
//! Every mutation here is a total function: an absent target is a no-op,
//! never an error. A client-side basket has no way to distinguish "already
//! absent" from failure, so there is nothing useful to report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductSnapshot};
use crate::DEFAULT_SIZE;

// =============================================================================
// Line Key
// =============================================================================

/// Composite identity of a basket row: product id + size.
///
/// An empty size collapses to [`DEFAULT_SIZE`], so a size-less product always
/// maps to exactly one row no matter how callers spell "no size".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineKey {
    /// Catalog identifier of the product.
    pub product_id: String,

    /// Size component of the identity. Never empty.
    pub size: String,
}

impl LineKey {
    /// Builds a key, normalizing an empty size to the sentinel.
    pub fn new(product_id: impl Into<String>, size: &str) -> Self {
        let size = if size.is_empty() { DEFAULT_SIZE } else { size };
        LineKey {
            product_id: product_id.into(),
            size: size.to_string(),
        }
    }
}

impl fmt::Display for LineKey {
    /// Formats as `{product_id}-{size}`, the row id the frontend uses for
    /// list reconciliation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.product_id, self.size)
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One row in the basket.
///
/// ## Design Notes
/// - `key`: Uniquely identifies the row (product + size)
/// - `snapshot`: Frozen copy of product display data at time of adding.
///   This ensures the basket renders consistently even if the catalog
///   changes after the row was created.
/// - `unit_price`: Frozen at first insertion. Re-adding the same row later
///   does NOT re-price it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Row identity (product id + size).
    pub key: LineKey,

    /// Frozen product display data.
    pub snapshot: ProductSnapshot,

    /// Units of this row in the basket. Invariant: `>= 1`. A row that would
    /// drop to 0 is removed from the collection instead.
    pub quantity: i64,

    /// Price per unit, frozen at first insertion.
    pub unit_price: Money,

    /// When this row was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    /// Creates a new row from a product, freezing price and snapshot now.
    fn from_product(product: &Product, size: &str) -> Self {
        CartLineItem {
            key: LineKey::new(product.id.clone(), size),
            snapshot: ProductSnapshot::of(product),
            quantity: 1,
            unit_price: product.price(),
            added_at: Utc::now(),
        }
    }

    /// Catalog identifier of the product behind this row.
    #[inline]
    pub fn product_id(&self) -> &str {
        &self.key.product_id
    }

    /// Size component of the row identity.
    #[inline]
    pub fn size(&self) -> &str {
        &self.key.size
    }

    /// Line total: unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopper's basket.
///
/// ## Invariants
/// - At most one row per [`LineKey`] (adding the same product+size again
///   consolidates into that row's quantity)
/// - Every row has `quantity >= 1` (a quantity forced to 0 removes the row)
/// - `total()` and `item_count()` are always derived from the rows, never
///   stored, so they cannot drift
///
/// Rows keep insertion order, which is the order the basket screen shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates a new empty basket.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product in the given size.
    ///
    /// ## Behavior
    /// - Row with the same key exists: quantity += 1, price and snapshot
    ///   stay frozen at their first-insertion values
    /// - Otherwise: new row with quantity 1
    ///
    /// Whether a size *should* have been chosen is the caller's check (see
    /// [`crate::validation::validate_size_selection`]); this collection uses
    /// whatever size it is given, falling back to the sentinel when empty.
    pub fn add_item(&mut self, product: &Product, size: &str) {
        let key = LineKey::new(product.id.clone(), size);

        if let Some(item) = self.items.iter_mut().find(|i| i.key == key) {
            item.quantity += 1;
            return;
        }

        self.items.push(CartLineItem::from_product(product, &key.size));
    }

    /// Removes the row with the exact (product, size) key.
    ///
    /// Returns `true` if a row was removed, `false` if no such row existed
    /// (a no-op, not an error).
    pub fn remove_item(&mut self, product_id: &str, size: &str) -> bool {
        let key = LineKey::new(product_id, size);
        let before = self.items.len();
        self.items.retain(|i| i.key != key);
        self.items.len() != before
    }

    /// Sets a row's quantity to an absolute value.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: behaves exactly as [`Cart::remove_item`]
    /// - Row exists: quantity is replaced (not incremented)
    /// - Row absent: no-op
    ///
    /// Returns `true` if the collection changed.
    pub fn set_quantity(&mut self, product_id: &str, size: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(product_id, size);
        }

        let key = LineKey::new(product_id, size);
        if let Some(item) = self.items.iter_mut().find(|i| i.key == key) {
            let changed = item.quantity != quantity;
            item.quantity = quantity;
            changed
        } else {
            false
        }
    }

    /// Empties the basket unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Basket total: `Σ unit_price × quantity` over all rows.
    ///
    /// Always recomputed from the rows. Storing this separately would let it
    /// drift from the collection, which is why no such field exists.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Total units across all rows: `Σ quantity`. This is the cart badge
    /// number, not the number of distinct rows.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct rows.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The rows, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents).with_sizes(["S", "M", "L"])
    }

    #[test]
    fn test_add_item_twice_consolidates() {
        let mut cart = Cart::new();
        let tee = test_product("p1", 1999);

        cart.add_item(&tee, "M");
        cart.add_item(&tee, "M");

        assert_eq!(cart.line_count(), 1); // One row, not two
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_same_product_different_sizes_are_distinct_rows() {
        let mut cart = Cart::new();
        let tee = test_product("p1", 1999);

        cart.add_item(&tee, "M");
        cart.add_item(&tee, "L");

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_price_frozen_at_first_insertion() {
        let mut cart = Cart::new();
        let mut tee = test_product("p1", 1999);

        cart.add_item(&tee, "M");
        tee.price_cents = 2999; // catalog re-price after first add
        cart.add_item(&tee, "M");

        assert_eq!(cart.items()[0].unit_price.cents(), 1999);
        assert_eq!(cart.total().cents(), 3998);
    }

    #[test]
    fn test_empty_size_falls_back_to_sentinel() {
        let mut cart = Cart::new();
        let tote = Product::new("p2", "Tote Bag", 899); // no size options

        cart.add_item(&tote, "");
        cart.add_item(&tote, "M");

        // "" and "M" are the same identity
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].size(), "M");
    }

    #[test]
    fn test_remove_item_absent_key_is_noop() {
        let mut cart = Cart::new();
        let tee = test_product("p1", 1999);
        cart.add_item(&tee, "M");

        assert!(!cart.remove_item("p1", "L")); // same product, wrong size
        assert!(!cart.remove_item("nope", "M"));
        assert_eq!(cart.line_count(), 1);

        assert!(cart.remove_item("p1", "M"));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_is_absolute() {
        let mut cart = Cart::new();
        let tee = test_product("p1", 1999);
        cart.add_item(&tee, "M");
        cart.add_item(&tee, "M");

        assert!(cart.set_quantity("p1", "M", 5));
        assert_eq!(cart.items()[0].quantity, 5); // set, not 2 + 5
    }

    #[test]
    fn test_set_quantity_zero_removes_row() {
        let mut cart = Cart::new();
        let tee = test_product("p1", 1999);
        cart.add_item(&tee, "M");

        assert!(cart.set_quantity("p1", "M", 0));
        assert!(cart.is_empty());
        assert_eq!(cart.total().cents(), 0);
    }

    #[test]
    fn test_set_quantity_absent_row_is_noop() {
        let mut cart = Cart::new();

        assert!(!cart.set_quantity("p1", "M", 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_over_mixed_rows() {
        let mut cart = Cart::new();
        let p = test_product("p1", 1000);
        let q = test_product("p2", 2500);

        cart.add_item(&p, "M");
        cart.add_item(&p, "M");
        cart.add_item(&q, "L");

        // 2 × $10.00 + 1 × $25.00
        assert_eq!(cart.total().cents(), 4500);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_total_saturates_on_pathological_quantities() {
        let mut cart = Cart::new();
        let p = test_product("p1", i64::MAX);
        let q = test_product("p2", i64::MAX);

        cart.add_item(&p, "M");
        cart.add_item(&q, "M");
        cart.set_quantity("p1", "M", i64::MAX);
        cart.set_quantity("p2", "M", i64::MAX);

        // Two saturated line totals still sum without panicking.
        assert_eq!(cart.total().cents(), i64::MAX);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        let tee = test_product("p1", 1999);
        cart.add_item(&tee, "M");
        cart.add_item(&tee, "L");

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_line_key_display() {
        assert_eq!(LineKey::new("p1", "M").to_string(), "p1-M");
        assert_eq!(LineKey::new("p1", "").to_string(), "p1-M");
    }
}
