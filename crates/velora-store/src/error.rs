//! # Seed Error Types
//!
//! Failure taxonomy for the seed-data boundary.
//!
//! These errors never escape [`crate::CartStore::load`] /
//! [`crate::WishlistStore::load`]: a failed seed leaves the store empty
//! (always a valid state) and is reported through a `tracing` warning, not
//! propagated to the caller.

use thiserror::Error;

/// Seed provider failures.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The provider could not be reached or did not respond.
    #[error("seed data unavailable: {reason}")]
    Unavailable { reason: String },

    /// The provider responded with data the core shapes cannot absorb.
    #[error("seed data malformed: {reason}")]
    Malformed { reason: String },
}

/// Convenience type alias for seed results.
pub type SeedResult<T> = Result<T, SeedError>;
