use super::*;

/// Tests that saved listings are scoped to the user.
///
/// Verifies that another user's bookmarks are not returned.
///
/// Expected: each user sees only their own saved listing
#[tokio::test]
async fn returns_only_users_saved_listings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let first = factory::create_listing(db, seller.id).await?;
    let second = factory::create_listing(db, seller.id).await?;
    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = SavedListingRepository::new(db);
    repo.toggle(alice.id, first.id).await?;
    repo.toggle(bob.id, second.id).await?;

    let alice_saved = repo.get_saved_listings(alice.id).await?;
    let bob_saved = repo.get_saved_listings(bob.id).await?;

    assert_eq!(alice_saved.len(), 1);
    assert_eq!(alice_saved[0].id, first.id);
    assert_eq!(bob_saved.len(), 1);
    assert_eq!(bob_saved[0].id, second.id);

    Ok(())
}
