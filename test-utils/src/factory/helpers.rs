//! Shared helper utilities for factory methods.
//!
//! Provides the unique counter used to keep usernames, emails and gateway ids apart,
//! plus convenience methods for creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a verified seller, one of their listings, and a separate buyer.
///
/// Covers the common setup for payment, saved-listing and contact tests where one
/// user acts on another user's listing.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((buyer, seller, listing))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_listing_with_buyer(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::listing::Model,
    ),
    DbErr,
> {
    let seller = crate::factory::user::create_seller(db).await?;
    let listing = crate::factory::listing::create_listing(db, seller.id).await?;
    let buyer = crate::factory::user::create_user(db).await?;

    Ok((buyer, seller, listing))
}
