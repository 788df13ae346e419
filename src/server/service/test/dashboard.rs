use super::*;
use crate::{model::dashboard::StatsScope, server::service::dashboard::DashboardService};
use entity::{listing::ListingStatus, order::OrderStatus, user::SellerStatus};
use test_utils::factory::{listing::ListingFactory, order::OrderFactory, user::UserFactory};

/// Tests platform statistics for admins.
///
/// Expected: platform scope with user and pending request counts
#[tokio::test]
async fn admin_sees_platform_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = User::from_entity(factory::create_admin(db).await?);
    let (buyer, seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;
    UserFactory::new(db)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;
    OrderFactory::new(db, buyer.id, listing.id)
        .amount(250000)
        .status(OrderStatus::Success)
        .build()
        .await?;
    ListingFactory::new(db, seller.id)
        .status(ListingStatus::Sold)
        .build()
        .await?;

    let stats = DashboardService::new(db).stats(&admin).await?;

    assert_eq!(stats.scope, StatsScope::Platform);
    assert_eq!(stats.total_users, Some(4));
    assert_eq!(stats.pending_seller_requests, Some(1));
    assert_eq!(stats.listings.total, 2);
    assert_eq!(stats.listings.sold, 1);
    assert_eq!(stats.orders.successful, 1);
    assert_eq!(stats.orders.revenue, 250000);

    Ok(())
}

/// Tests seller-scoped statistics.
///
/// Verifies that another seller's listings are excluded.
///
/// Expected: seller scope counting only the caller's listings
#[tokio::test]
async fn seller_sees_own_totals() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let seller = User::from_entity(factory::create_seller(db).await?);
    let other = factory::create_seller(db).await?;
    factory::create_listing(db, seller.id).await?;
    factory::create_listing(db, other.id).await?;
    factory::create_listing(db, other.id).await?;

    let stats = DashboardService::new(db).stats(&seller).await?;

    assert_eq!(stats.scope, StatsScope::Seller);
    assert_eq!(stats.total_users, None);
    assert_eq!(stats.listings.total, 1);

    Ok(())
}

/// Tests statistics for a regular user.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn regular_user_is_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = User::from_entity(factory::create_user(db).await?);

    assert_access_denied(DashboardService::new(db).stats(&user).await);

    Ok(())
}
