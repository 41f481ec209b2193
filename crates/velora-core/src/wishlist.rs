//! # Wishlist Module
//!
//! The favorites collection: product snapshots unique by product id.
//!
//! ## Single Mutation Entry Point
//! The UI has exactly one "favorite" affordance (the heart icon), so this
//! collection exposes exactly one mutation: [`Wishlist::toggle`]. There is
//! deliberately no separate add/remove pair to keep the store API congruent
//! with the gesture it serves.

use serde::{Deserialize, Serialize};

use crate::types::Product;

// =============================================================================
// Wishlist Entry
// =============================================================================

/// One favorited product: the catalog id plus a frozen display copy.
///
/// Entries store the full product value as it looked when favorited (the
/// wishlist screen renders the whole card, including sizes), not just the
/// reduced basket snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Product copy taken at toggle time.
    pub product: Product,
}

// =============================================================================
// Wishlist
// =============================================================================

/// The shopper's favorites.
///
/// ## Invariants
/// - At most one entry per `product_id`
/// - Entries keep insertion order (the order the wishlist screen shows)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist {
            entries: Vec::new(),
        }
    }

    /// Toggles a product's membership.
    ///
    /// ## Behavior
    /// - Already favorited: the entry is removed
    /// - Not favorited: a copy of the product is inserted
    ///
    /// Returns `true` if the product is a member AFTER the call, which is
    /// what the heart icon needs to re-render.
    pub fn toggle(&mut self, product: &Product) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.product.id != product.id);

        if self.entries.len() != before {
            return false; // was present, now removed
        }

        self.entries.push(WishlistEntry {
            product: product.clone(),
        });
        true
    }

    /// Pure membership test. Never mutates state.
    pub fn contains(&self, product_id: &str) -> bool {
        self.entries.iter().any(|e| e.product.id == product_id)
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the wishlist unconditionally.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The entries, in insertion order.
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id), 1999)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let tee = test_product("p1");

        assert!(wishlist.toggle(&tee)); // added
        assert!(wishlist.contains("p1"));
        assert_eq!(wishlist.len(), 1);

        assert!(!wishlist.toggle(&tee)); // removed
        assert!(!wishlist.contains("p1"));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_toggle_pair_restores_original_membership() {
        let mut wishlist = Wishlist::new();
        let a = test_product("p1");
        let b = test_product("p2");

        wishlist.toggle(&a);
        wishlist.toggle(&b);
        wishlist.toggle(&b); // idempotent pair

        assert!(wishlist.contains("p1"));
        assert!(!wishlist.contains("p2"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_no_duplicate_entries_per_product() {
        let mut wishlist = Wishlist::new();
        let mut tee = test_product("p1");

        wishlist.toggle(&tee);
        tee.name = "Renamed Tee".to_string();
        wishlist.toggle(&tee); // removes by id despite changed attributes

        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_contains_does_not_mutate() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(&test_product("p1"));

        assert!(wishlist.contains("p1"));
        assert!(wishlist.contains("p1")); // same answer, state untouched
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_entry_is_value_copy() {
        let mut wishlist = Wishlist::new();
        let mut tee = test_product("p1");
        wishlist.toggle(&tee);

        tee.price_cents = 9999; // catalog change after favoriting

        assert_eq!(wishlist.entries()[0].product.price_cents, 1999);
    }
}
