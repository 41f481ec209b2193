//! # velora-store: Process-Wide State for Velora
//!
//! The stateful layer of the Velora storefront: two independent, symmetric
//! store objects holding the shopper's basket and favorites for the lifetime
//! of the app session.
//!
//! ## Module Organization
//! ```text
//! velora_store/
//! ├── lib.rs          ◄─── You are here (Stores bundle & wiring)
//! ├── cart.rs         ◄─── CartStore: basket + derived totals
//! ├── wishlist.rs     ◄─── WishlistStore: favorites
//! ├── seed.rs         ◄─── SeedProvider boundary + fixture data
//! └── error.rs        ◄─── Seed failure taxonomy
//! ```
//!
//! ## The Contract With Presentation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Read + Subscribe Contract                          │
//! │                                                                     │
//! │  Any screen                         Store                           │
//! │  ──────────                         ─────                           │
//! │  snapshot()            ──────────►  current immutable view          │
//! │  subscribe().changed() ◄──────────  woken on every real change      │
//! │  add_item()/toggle()…  ──────────►  mutation fully applied and      │
//! │                                     view republished before return  │
//! │                                                                     │
//! │  No screen holds mutable state; no store knows about rendering.     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no ambient global: the stores are constructed once at startup
//! (see [`Stores::init`]) and the reference is handed to whichever layer
//! needs it.

pub mod cart;
pub mod error;
pub mod seed;
pub mod wishlist;

pub use cart::{CartStore, CartTotals, CartView};
pub use error::{SeedError, SeedResult};
pub use seed::{CartSeed, FixtureSeed, SeedCartLine, SeedProvider, WishlistSeed};
pub use wishlist::{WishlistStore, WishlistView};

use std::sync::Arc;
use tracing::info;

// =============================================================================
// Stores Bundle
// =============================================================================

/// The app's state core: both stores behind one handle.
///
/// ## Why a Bundle?
/// The original app reached cart and wishlist state ambiently from any
/// screen. Here the reachability is explicit: construct `Stores` once,
/// clone the (cheap, `Arc`-backed) handle into any layer that needs it.
/// The two stores stay fully independent; the bundle is wiring, not
/// coupling.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    /// The shopper's basket.
    pub cart: Arc<CartStore>,

    /// The shopper's favorites.
    pub wishlist: Arc<WishlistStore>,
}

impl Stores {
    /// Creates both stores empty, without seeding.
    pub fn new() -> Self {
        Stores {
            cart: Arc::new(CartStore::new()),
            wishlist: Arc::new(WishlistStore::new()),
        }
    }

    /// Creates both stores and installs the initial snapshots from the seed
    /// provider. This is the startup path: awaited once, before the first
    /// screen renders.
    ///
    /// Seed failures are absorbed per store (empty is a valid state), so
    /// this never fails.
    pub async fn init<P: SeedProvider>(provider: &P) -> Self {
        info!("initializing velora stores");
        let stores = Stores::new();
        stores.cart.load(provider).await;
        stores.wishlist.load(provider).await;
        stores
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
