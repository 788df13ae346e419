use super::*;

/// Tests order totals and revenue.
///
/// Verifies that revenue only sums successful orders and that the seller scope only
/// counts orders on that seller's listings.
///
/// Expected: platform and seller totals differ by the other seller's order
#[tokio::test]
async fn sums_successful_revenue_per_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;
    let other_seller = factory::create_seller(db).await?;
    let other_listing = factory::create_listing(db, other_seller.id).await?;

    OrderFactory::new(db, buyer.id, listing.id)
        .amount(10_000)
        .status(OrderStatus::Success)
        .build()
        .await?;
    OrderFactory::new(db, buyer.id, listing.id)
        .amount(99_999)
        .status(OrderStatus::Failed)
        .build()
        .await?;
    OrderFactory::new(db, buyer.id, other_listing.id)
        .amount(5_000)
        .status(OrderStatus::Success)
        .build()
        .await?;

    let repo = OrderRepository::new(db);

    let platform = repo.stats(None).await?;
    assert_eq!(platform.total, 3);
    assert_eq!(platform.successful, 2);
    assert_eq!(platform.revenue, 15_000);

    let own = repo.stats(Some(seller.id)).await?;
    assert_eq!(own.total, 2);
    assert_eq!(own.successful, 1);
    assert_eq!(own.revenue, 10_000);

    Ok(())
}
