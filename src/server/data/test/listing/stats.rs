use super::*;

/// Tests listing counts for the platform and for a single owner.
///
/// Expected: platform totals include every listing; owner totals only their own
#[tokio::test]
async fn counts_by_status_and_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let other = factory::create_seller(db).await?;
    ListingFactory::new(db, owner.id)
        .status(ListingStatus::Sold)
        .build()
        .await?;
    ListingFactory::new(db, owner.id)
        .featured(true)
        .build()
        .await?;
    ListingFactory::new(db, other.id)
        .status(ListingStatus::Rented)
        .build()
        .await?;

    let repo = ListingRepository::new(db);

    let platform = repo.stats(None).await?;
    assert_eq!(platform.total, 3);
    assert_eq!(platform.available, 1);
    assert_eq!(platform.sold, 1);
    assert_eq!(platform.rented, 1);
    assert_eq!(platform.featured, 1);

    let seller = repo.stats(Some(owner.id)).await?;
    assert_eq!(seller.total, 2);
    assert_eq!(seller.rented, 0);

    Ok(())
}
