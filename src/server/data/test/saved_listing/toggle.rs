use super::*;

/// Tests toggling a saved listing on and off.
///
/// Verifies that the first toggle saves the listing and the second removes it.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn toggles_saved_state() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, _seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;

    let repo = SavedListingRepository::new(db);

    assert!(repo.toggle(buyer.id, listing.id).await?);
    assert_eq!(repo.get_saved_listings(buyer.id).await?.len(), 1);

    assert!(!repo.toggle(buyer.id, listing.id).await?);
    assert!(repo.get_saved_listings(buyer.id).await?.is_empty());

    Ok(())
}
