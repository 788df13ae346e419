use super::*;

/// Tests approving a seller request.
///
/// Verifies that the status and role are both written.
///
/// Expected: Ok(Some(user)) with Seller role and Verified status
#[tokio::test]
async fn sets_status_and_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .set_seller_status(user.id, SellerStatus::Verified, Some(Role::Seller))
        .await?
        .unwrap();

    assert_eq!(updated.seller_status, SellerStatus::Verified);
    assert_eq!(updated.role, Role::Seller);

    Ok(())
}

/// Tests listing and counting pending seller requests.
///
/// Verifies that only users with a pending status are returned.
///
/// Expected: one pending request out of three users
#[tokio::test]
async fn lists_only_pending_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::user::UserFactory::new(db)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;
    factory::create_user(db).await?;
    factory::create_seller(db).await?;

    let repo = UserRepository::new(db);
    let requests = repo.get_pending_seller_requests().await?;

    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].id, pending.id);
    assert_eq!(repo.count_pending_seller_requests().await?, 1);
    assert_eq!(repo.count().await?, 3);

    Ok(())
}
