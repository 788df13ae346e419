use super::*;

/// Tests admin user passes the admin permission check.
///
/// Expected: Ok(User) with the admin role
#[tokio::test]
async fn grants_admin_permission_to_admin() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    let token = AuthToken::new(Some(admin.id));

    let user = AuthGuard::new(db, &token)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(user.id, admin.id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests regular user is denied the admin permission.
///
/// Expected: Err(AuthError::AccessDenied) naming the user
#[tokio::test]
async fn denies_admin_permission_to_regular_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = AuthToken::new(Some(user.id));

    let result = AuthGuard::new(db, &token)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("Admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }

    Ok(())
}

/// Tests the seller permission.
///
/// Verifies that verified sellers and admins pass while pending sellers are denied.
///
/// Expected: Ok for seller and admin, Err(AccessDenied) for a pending request
#[tokio::test]
async fn seller_permission_requires_verification() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let seller = factory::create_seller(db).await?;
    let admin = factory::create_admin(db).await?;
    let pending = UserFactory::new(db)
        .role(Role::User)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;

    for id in [seller.id, admin.id] {
        let token = AuthToken::new(Some(id));
        assert!(AuthGuard::new(db, &token)
            .require(&[Permission::Seller])
            .await
            .is_ok());
    }

    let token = AuthToken::new(Some(pending.id));
    let result = AuthGuard::new(db, &token)
        .require(&[Permission::Seller])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests an anonymous request.
///
/// Expected: Err(AuthError::NotSignedIn) from require, Ok(None) from optional
#[tokio::test]
async fn anonymous_request_is_not_signed_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let token = AuthToken::anonymous();
    let guard = AuthGuard::new(db, &token);

    assert!(matches!(
        guard.require(&[]).await,
        Err(AppError::AuthErr(AuthError::NotSignedIn))
    ));
    assert!(guard.optional().await?.is_none());

    Ok(())
}

/// Tests a valid token for a user that was deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn deleted_user_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let token = AuthToken::new(Some(999));

    let result = AuthGuard::new(db, &token).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(999)))
    ));

    Ok(())
}

/// Tests empty permission list only requires sign-in.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let token = AuthToken::new(Some(user.id));

    let returned = AuthGuard::new(db, &token).require(&[]).await?;

    assert_eq!(returned.username, user.username);

    Ok(())
}
