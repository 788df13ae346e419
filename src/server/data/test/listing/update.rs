use super::*;

/// Tests replacing a listing's editable fields.
///
/// Verifies that the form fields change while status and featured flag are kept.
///
/// Expected: Ok(Some(listing)) with new fields and unchanged status
#[tokio::test]
async fn updates_fields_and_keeps_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let existing = ListingFactory::new(db, owner.id)
        .featured(true)
        .status(ListingStatus::Rented)
        .build()
        .await?;

    let mut new_params = params("Renovated Loft");
    new_params.listing_type = ListingType::Sale;

    let repo = ListingRepository::new(db);
    let updated = repo.update(existing.id, new_params).await?.unwrap();

    assert_eq!(updated.name, "Renovated Loft");
    assert_eq!(updated.listing_type, ListingType::Sale);
    assert_eq!(updated.status, ListingStatus::Rented);
    assert!(updated.featured);

    Ok(())
}

/// Tests the status and featured setters.
///
/// Expected: both setters persist their values
#[tokio::test]
async fn sets_status_and_featured() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let listing = factory::create_listing(db, owner.id).await?;

    let repo = ListingRepository::new(db);
    let sold = repo
        .set_status(listing.id, ListingStatus::Sold)
        .await?
        .unwrap();
    let featured = repo.set_featured(listing.id, true).await?.unwrap();

    assert_eq!(sold.status, ListingStatus::Sold);
    assert!(featured.featured);
    assert!(repo.set_featured(9999, true).await?.is_none());

    Ok(())
}

/// Tests that renaming a listing refreshes the name used by search.
///
/// Expected: the new name matches and the old one no longer does
#[tokio::test]
async fn rename_updates_search_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let existing = ListingFactory::new(db, owner.id)
        .name("Garden House")
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    repo.update(existing.id, params("Lake Cabin")).await?.unwrap();

    let by_new = repo
        .search(&ListingFilter {
            search_term: Some("cabin".to_string()),
            ..Default::default()
        })
        .await?;
    let by_old = repo
        .search(&ListingFilter {
            search_term: Some("garden".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(by_new.len(), 1);
    assert!(by_old.is_empty());

    Ok(())
}

/// Tests claiming an available listing.
///
/// Expected: first claim succeeds; a second claim on the sold listing is refused
#[tokio::test]
async fn claims_available_listing_once() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let listing = factory::create_listing(db, owner.id).await?;

    let repo = ListingRepository::new(db);
    assert!(repo.claim_available(listing.id, ListingStatus::Sold).await?);
    assert!(!repo.claim_available(listing.id, ListingStatus::Rented).await?);
    assert!(!repo.claim_available(listing.id + 1000, ListingStatus::Sold).await?);

    let stored = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(stored.status, ListingStatus::Sold);

    Ok(())
}
