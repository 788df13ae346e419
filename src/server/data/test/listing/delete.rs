use super::*;

/// Tests deleting a listing.
///
/// Expected: Ok(true) for an existing listing, Ok(false) afterwards
#[tokio::test]
async fn deletes_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let listing = factory::create_listing(db, owner.id).await?;

    let repo = ListingRepository::new(db);

    assert!(repo.delete(listing.id).await?);
    assert!(!repo.delete(listing.id).await?);
    assert!(repo.find_by_id(listing.id).await?.is_none());

    Ok(())
}

/// Tests fetching listings by owner.
///
/// Verifies that listings belonging to other users are excluded.
///
/// Expected: only the owner's two listings
#[tokio::test]
async fn gets_listings_by_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let other = factory::create_seller(db).await?;
    factory::create_listing(db, owner.id).await?;
    factory::create_listing(db, owner.id).await?;
    factory::create_listing(db, other.id).await?;

    let repo = ListingRepository::new(db);
    let listings = repo.get_by_owner(owner.id).await?;

    assert_eq!(listings.len(), 2);
    assert!(listings.iter().all(|l| l.owner_id == owner.id));

    Ok(())
}
