//! A scripted shopper session against the state core.
//!
//! Plays the role of the presentation layer: it reads views, subscribes to
//! changes, and calls operations in response to "gestures".
//!
//! ```bash
//! RUST_LOG=debug cargo run -p velora-store --example storefront_session
//! ```

use tracing::info;
use tracing_subscriber::EnvFilter;

use velora_core::validation::validate_size_selection;
use velora_store::{FixtureSeed, Stores};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Default: INFO, can be overridden with RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Startup: seed once, then the stores live for the whole session.
    let stores = Stores::init(&FixtureSeed::sample()).await;

    // A "cart badge" consumer: reads the current view, awakes on changes.
    let mut badge = stores.cart.subscribe();
    let badge_task = tokio::spawn(async move {
        while badge.changed().await.is_ok() {
            let view = badge.borrow_and_update().clone();
            info!(
                badge = view.totals.item_count,
                total = %view.totals.total,
                "cart badge re-rendered"
            );
        }
    });

    let catalog = FixtureSeed::catalog();
    let fleece = &catalog[2];
    let beanie = &catalog[4];

    // Product details screen: validate the size choice, then add.
    match validate_size_selection(fleece, None) {
        Ok(size) => stores.cart.add_item(fleece, size),
        Err(e) => info!(feedback = %e, "blocked add"),
    }
    let size = validate_size_selection(fleece, Some("L")).expect("L is offered");
    stores.cart.add_item(fleece, size);
    stores.cart.add_item(fleece, size); // tap twice: consolidates

    // Heart icon on a size-less accessory.
    stores.wishlist.toggle(beanie);
    info!(
        favorited = stores.wishlist.contains(&beanie.id),
        "wishlist heart state"
    );

    // Cart screen: bump a quantity, then remove a seeded row.
    stores.cart.set_quantity(&fleece.id, Some("L"), 5);
    let seeded = stores.cart.snapshot();
    if let Some(first) = seeded.items.first() {
        stores.cart.remove_item(first.product_id(), first.size());
    }

    let view = stores.cart.snapshot();
    info!(
        lines = view.items.len(),
        units = view.totals.item_count,
        total = %view.totals.total,
        "session summary"
    );

    // Let the badge task drain its last notification, then wind down.
    tokio::task::yield_now().await;
    badge_task.abort();
}
