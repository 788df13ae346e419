use super::*;

/// Tests creating a listing.
///
/// Verifies that the listing is stored as available, not featured, owned by the given
/// user, and that image URLs keep their order through the JSON column.
///
/// Expected: Ok with listing created
#[tokio::test]
async fn creates_available_listing_with_ordered_images() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;

    let repo = ListingRepository::new(db);
    let listing = repo.create(owner.id, params("Garden Flat")).await?;

    assert_eq!(listing.name, "Garden Flat");
    assert_eq!(listing.owner_id, owner.id);
    assert_eq!(listing.status, ListingStatus::Available);
    assert!(!listing.featured);
    assert_eq!(
        listing.image_urls,
        vec![
            "https://example.com/1.jpg".to_string(),
            "https://example.com/2.jpg".to_string()
        ]
    );

    let fetched = repo.find_by_id(listing.id).await?.unwrap();
    assert_eq!(fetched.id, listing.id);
    assert_eq!(fetched.image_urls, listing.image_urls);

    Ok(())
}
