//! # Cart Store
//!
//! The process-wide basket container.
//!
//! ## Read + Subscribe Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    CartStore Operations                             │
//! │                                                                     │
//! │  Shopper Gesture          Store Operation        State Change       │
//! │  ───────────────          ───────────────        ────────────       │
//! │                                                                     │
//! │  Tap "Add to Cart" ─────► add_item() ──────────► consolidate/insert │
//! │                                                                     │
//! │  Change quantity ───────► set_quantity() ──────► absolute set       │
//! │                                                                     │
//! │  Tap remove ────────────► remove_item() ───────► exact-key delete   │
//! │                                                                     │
//! │  Tap clear ─────────────► clear() ─────────────► empty basket       │
//! │                                                                     │
//! │  Any screen ────────────► snapshot()/subscribe() (read only)        │
//! │                                                                     │
//! │  Every mutation republishes the view through a watch channel        │
//! │  BEFORE returning, so badges and totals on other screens never      │
//! │  observe a half-applied change.                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Thread Safety
//! The collection sits behind a `Mutex` and the published view behind a
//! `watch` channel. The app has one logical writer (the UI event loop), so
//! the mutex is about safety, not contention; no mutation ever suspends
//! while holding it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ts_rs::TS;

use velora_core::{Cart, CartLineItem, Money, Product};

use crate::seed::SeedProvider;

// =============================================================================
// Views
// =============================================================================

/// Derived summary figures, recomputed from the rows on every publish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Σ quantity over all rows (the cart badge number).
    pub item_count: i64,

    /// Number of distinct rows.
    pub line_count: usize,

    /// Σ unit_price × quantity over all rows.
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            line_count: cart.line_count(),
            total: cart.total(),
        }
    }
}

/// Immutable basket view handed to presentation consumers.
///
/// Consumers must not mutate it (they cannot: it is a value copy); all
/// changes go through the store operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Rows in insertion order.
    pub items: Vec<CartLineItem>,

    /// Derived totals for the same rows.
    pub totals: CartTotals,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        CartView {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

// =============================================================================
// Cart Store
// =============================================================================

/// Process-wide basket state.
///
/// Created once at startup, handed (by reference or `Arc`) to whichever
/// layer needs it. Lives for the app session; there is no durable storage.
#[derive(Debug)]
pub struct CartStore {
    /// The collection itself. Exclusive access per mutation.
    cart: Mutex<Cart>,

    /// Latest published view. `subscribe()` hands out receivers; mutations
    /// replace the value, which wakes every waiting consumer.
    view_tx: watch::Sender<CartView>,

    /// True while the seed fetch is pending. Transitional-UI hint only; the
    /// operations are valid regardless.
    loading: AtomicBool,
}

impl CartStore {
    /// Creates a new store with an empty basket.
    pub fn new() -> Self {
        let (view_tx, _) = watch::channel(CartView::default());
        CartStore {
            cart: Mutex::new(Cart::new()),
            view_tx,
            loading: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().expect("cart mutex poisoned")
    }

    /// Publishes the current rows as a fresh view. Called at the tail of
    /// every mutation, while the collection lock is still held, so the
    /// published view always matches the collection.
    fn publish(&self, cart: &Cart) {
        self.view_tx.send_replace(CartView::from(cart));
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of a product in the given size.
    ///
    /// Consolidates into an existing (product, size) row if one exists;
    /// price and snapshot stay frozen at first insertion. Size validation
    /// belongs to the caller ([`velora_core::validation::validate_size_selection`]).
    pub fn add_item(&self, product: &Product, size: &str) {
        debug!(product_id = %product.id, size = %size, "cart add_item");
        let mut cart = self.lock();
        cart.add_item(product, size);
        self.publish(&cart);
    }

    /// Removes the row with the exact (product, size) key.
    ///
    /// A missing row is a no-op and does NOT notify subscribers: nothing
    /// they can observe has changed.
    pub fn remove_item(&self, product_id: &str, size: &str) -> bool {
        debug!(product_id = %product_id, size = %size, "cart remove_item");
        let mut cart = self.lock();
        let removed = cart.remove_item(product_id, size);
        if removed {
            self.publish(&cart);
        }
        removed
    }

    /// Sets a row's quantity to an absolute value.
    ///
    /// `quantity <= 0` behaves exactly as [`CartStore::remove_item`]. An
    /// omitted size falls back to the sentinel. A missing row is a no-op.
    pub fn set_quantity(&self, product_id: &str, size: Option<&str>, quantity: i64) -> bool {
        let size = size.unwrap_or(velora_core::DEFAULT_SIZE);
        debug!(product_id = %product_id, size = %size, quantity, "cart set_quantity");
        let mut cart = self.lock();
        let changed = cart.set_quantity(product_id, size, quantity);
        if changed {
            self.publish(&cart);
        }
        changed
    }

    /// Empties the basket unconditionally.
    pub fn clear(&self) {
        debug!("cart clear");
        let mut cart = self.lock();
        cart.clear();
        self.publish(&cart);
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Current immutable view: rows plus derived totals.
    pub fn snapshot(&self) -> CartView {
        self.view_tx.borrow().clone()
    }

    /// Subscribes to view changes: read the current value, await the next.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let mut rx = store.subscribe();
    /// loop {
    ///     render_badge(rx.borrow_and_update().totals.item_count);
    ///     rx.changed().await?;
    /// }
    /// ```
    pub fn subscribe(&self) -> watch::Receiver<CartView> {
        self.view_tx.subscribe()
    }

    /// Basket total, derived from the rows.
    pub fn total(&self) -> Money {
        self.lock().total()
    }

    /// Total units across all rows, derived from the rows.
    pub fn item_count(&self) -> i64 {
        self.lock().item_count()
    }

    /// True while the seed fetch is pending.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    // -------------------------------------------------------------------------
    // Seed Load
    // -------------------------------------------------------------------------

    /// Awaits the seed provider once at startup and installs the initial
    /// basket through the same mutation path every gesture uses.
    ///
    /// ## Failure Semantics
    /// A provider failure leaves the basket empty (always a valid state),
    /// logs a warning, and clears the loading flag. Nothing propagates.
    pub async fn load<P: SeedProvider>(&self, provider: &P) {
        self.loading.store(true, Ordering::Relaxed);

        match provider.fetch_cart().await {
            Ok(seed) => {
                let mut cart = self.lock();
                for line in &seed.lines {
                    if line.quantity <= 0 {
                        debug!(product_id = %line.product.id, quantity = line.quantity,
                               "dropping seed row with non-positive quantity");
                        continue;
                    }

                    // Freeze the provider's price override (if any) into the
                    // row by presenting it as the product price.
                    let mut product = line.product.clone();
                    product.price_cents = line.resolved_price_cents();

                    let size = line.size.as_deref().unwrap_or(velora_core::DEFAULT_SIZE);
                    cart.add_item(&product, size);
                    cart.set_quantity(&product.id, size, line.quantity);
                }
                self.publish(&cart);
                info!(lines = cart.line_count(), "cart seed installed");
            }
            Err(e) => {
                warn!(error = %e, "cart seed load failed, starting empty");
            }
        }

        self.loading.store(false, Ordering::Relaxed);
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{SeedError, SeedResult};
    use crate::seed::{CartSeed, FixtureSeed, SeedCartLine, WishlistSeed};

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), price_cents).with_sizes(["S", "M", "L"])
    }

    /// Provider that always fails, for the failure-semantics tests.
    struct BrokenSeed;

    impl SeedProvider for BrokenSeed {
        async fn fetch_cart(&self) -> SeedResult<CartSeed> {
            Err(SeedError::Unavailable {
                reason: "connection refused".to_string(),
            })
        }

        async fn fetch_wishlist(&self) -> SeedResult<WishlistSeed> {
            Err(SeedError::Unavailable {
                reason: "connection refused".to_string(),
            })
        }
    }

    #[test]
    fn test_mutation_republishes_view() {
        let store = CartStore::new();
        let tee = test_product("p1", 1999);

        assert_eq!(store.snapshot().totals.item_count, 0);

        store.add_item(&tee, "M");
        store.add_item(&tee, "M");

        let view = store.snapshot();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.totals.item_count, 2);
        assert_eq!(view.totals.total.cents(), 3998);
    }

    #[test]
    fn test_view_wire_shape_is_camel_case() {
        let store = CartStore::new();
        store.add_item(&test_product("p1", 1999), "M");

        // The badge and basket screens bind to these exact keys.
        let json = serde_json::to_value(store.snapshot()).unwrap();
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["items"][0]["key"]["productId"], "p1");
    }

    #[test]
    fn test_noop_remove_does_not_notify() {
        let store = CartStore::new();
        let rx = store.subscribe();

        assert!(!store.remove_item("ghost", "M"));
        assert!(!rx.has_changed().unwrap());

        let tee = test_product("p1", 1999);
        store.add_item(&tee, "M");
        assert!(rx.has_changed().unwrap());
    }

    #[test]
    fn test_set_quantity_default_size_is_sentinel() {
        let store = CartStore::new();
        let tote = Product::new("p2", "Tote Bag", 899); // size-less

        store.add_item(&tote, "");
        assert!(store.set_quantity("p2", None, 4));

        let view = store.snapshot();
        assert_eq!(view.items[0].quantity, 4);
        assert_eq!(view.items[0].size(), "M");
    }

    #[tokio::test]
    async fn test_subscriber_wakes_on_change() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.add_item(&test_product("p1", 1000), "S");

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().totals.item_count, 1);
    }

    #[tokio::test]
    async fn test_load_installs_seed_through_mutation_path() {
        let store = CartStore::new();
        store.load(&FixtureSeed::sample()).await;

        let view = store.snapshot();
        assert_eq!(view.items.len(), 2);
        // Fixture: 2 × Boxy Cotton Tee ($19.99) + 1 × Canvas Tote ($14.99)
        assert_eq!(view.totals.item_count, 3);
        assert_eq!(view.totals.total.cents(), 2 * 1999 + 1499);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_load_failure_leaves_store_empty_and_clears_flag() {
        let store = CartStore::new();
        store.load(&BrokenSeed).await;

        assert!(store.snapshot().items.is_empty());
        assert!(!store.is_loading());

        // Operations are fully valid after a failed seed.
        store.add_item(&test_product("p1", 1000), "S");
        assert_eq!(store.item_count(), 1);
    }

    #[tokio::test]
    async fn test_seed_price_override_is_frozen_into_rows() {
        let product = test_product("p1", 1999);
        let seed = SeedCartLine {
            product: product.clone(),
            quantity: 2,
            size: Some("L".to_string()),
            price_cents: Some(1499), // sale price locked in by the provider
        };

        let store = CartStore::new();
        store
            .load(&StaticSeed(CartSeed { lines: vec![seed] }))
            .await;

        let view = store.snapshot();
        assert_eq!(view.items[0].unit_price.cents(), 1499);
        assert_eq!(view.totals.total.cents(), 2998);
    }

    /// Provider serving exactly the cart it was given.
    struct StaticSeed(CartSeed);

    impl SeedProvider for StaticSeed {
        async fn fetch_cart(&self) -> SeedResult<CartSeed> {
            Ok(self.0.clone())
        }

        async fn fetch_wishlist(&self) -> SeedResult<WishlistSeed> {
            Ok(WishlistSeed::default())
        }
    }

    /// The end-to-end scenario from the product brief: seed empty, add the
    /// same row twice, then zero it out.
    #[tokio::test]
    async fn test_end_to_end_session() {
        let store = CartStore::new();
        store.load(&FixtureSeed::empty()).await;
        assert_eq!(store.item_count(), 0);

        let p1 = Product::new("p1", "Boxy Tee", 1000).with_sizes(["S", "M"]);

        store.add_item(&p1, "S");
        assert_eq!(store.item_count(), 1);
        assert_eq!(store.total().cents(), 1000);

        store.add_item(&p1, "S");
        assert_eq!(store.item_count(), 2);
        assert_eq!(store.total().cents(), 2000);
        assert_eq!(store.snapshot().items.len(), 1); // still exactly one row

        store.set_quantity("p1", Some("S"), 0);
        assert!(store.snapshot().items.is_empty());
        assert_eq!(store.total().cents(), 0);
    }
}
