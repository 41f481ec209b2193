//! # Wishlist Store
//!
//! The process-wide favorites container.
//!
//! Same shape as [`crate::CartStore`] — Mutex-guarded collection, watch-
//! published view, loading flag — over a much smaller operation surface:
//! the UI's single "favorite" affordance maps to the single mutation
//! [`WishlistStore::toggle`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use ts_rs::TS;

use velora_core::{Product, Wishlist};

use crate::seed::SeedProvider;

// =============================================================================
// View
// =============================================================================

/// Immutable favorites view handed to presentation consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistView {
    /// Favorited products, in the order they were favorited.
    pub products: Vec<Product>,
}

impl From<&Wishlist> for WishlistView {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistView {
            products: wishlist
                .entries()
                .iter()
                .map(|e| e.product.clone())
                .collect(),
        }
    }
}

// =============================================================================
// Wishlist Store
// =============================================================================

/// Process-wide favorites state.
#[derive(Debug)]
pub struct WishlistStore {
    /// The collection itself. Exclusive access per mutation.
    wishlist: Mutex<Wishlist>,

    /// Latest published view.
    view_tx: watch::Sender<WishlistView>,

    /// True while the seed fetch is pending.
    loading: AtomicBool,
}

impl WishlistStore {
    /// Creates a new store with an empty wishlist.
    pub fn new() -> Self {
        let (view_tx, _) = watch::channel(WishlistView::default());
        WishlistStore {
            wishlist: Mutex::new(Wishlist::new()),
            view_tx,
            loading: AtomicBool::new(false),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Wishlist> {
        self.wishlist.lock().expect("wishlist mutex poisoned")
    }

    fn publish(&self, wishlist: &Wishlist) {
        self.view_tx.send_replace(WishlistView::from(wishlist));
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Toggles a product's membership: removes it if favorited, inserts a
    /// value copy otherwise. The sole mutation entry point.
    ///
    /// Returns `true` if the product is a member AFTER the call.
    pub fn toggle(&self, product: &Product) -> bool {
        debug!(product_id = %product.id, "wishlist toggle");
        let mut wishlist = self.lock();
        let member = wishlist.toggle(product);
        self.publish(&wishlist);
        member
    }

    /// Empties the wishlist unconditionally. Session-end reset, the
    /// counterpart of [`crate::CartStore::clear`].
    pub fn clear(&self) {
        debug!("wishlist clear");
        let mut wishlist = self.lock();
        wishlist.clear();
        self.publish(&wishlist);
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Pure membership test. Never mutates state.
    pub fn contains(&self, product_id: &str) -> bool {
        self.lock().contains(product_id)
    }

    /// Current immutable view.
    pub fn snapshot(&self) -> WishlistView {
        self.view_tx.borrow().clone()
    }

    /// Subscribes to view changes: read the current value, await the next.
    pub fn subscribe(&self) -> watch::Receiver<WishlistView> {
        self.view_tx.subscribe()
    }

    /// Number of favorited products.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// True while the seed fetch is pending.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Relaxed)
    }

    // -------------------------------------------------------------------------
    // Seed Load
    // -------------------------------------------------------------------------

    /// Awaits the seed provider once at startup and installs the initial
    /// favorites through the same toggle path the heart icon uses.
    ///
    /// ## Failure Semantics
    /// A provider failure leaves the wishlist empty, logs a warning, and
    /// clears the loading flag. Nothing propagates.
    pub async fn load<P: SeedProvider>(&self, provider: &P) {
        self.loading.store(true, Ordering::Relaxed);

        match provider.fetch_wishlist().await {
            Ok(seed) => {
                let mut wishlist = self.lock();
                for product in &seed.products {
                    // Toggling an already-seeded duplicate would REMOVE it;
                    // skip duplicates so the seed is idempotent per product.
                    if !wishlist.contains(&product.id) {
                        wishlist.toggle(product);
                    }
                }
                self.publish(&wishlist);
                info!(entries = wishlist.len(), "wishlist seed installed");
            }
            Err(e) => {
                warn!(error = %e, "wishlist seed load failed, starting empty");
            }
        }

        self.loading.store(false, Ordering::Relaxed);
    }
}

impl Default for WishlistStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
