use super::*;

/// Tests creating a new account.
///
/// Verifies that the repository stores the supplied fields and assigns the default
/// `user` role with no seller status.
///
/// Expected: Ok with user created
#[tokio::test]
async fn creates_user_with_default_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "hash".to_string(),
            avatar: "https://example.com/a.png".to_string(),
        })
        .await?;

    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.role, Role::User);
    assert_eq!(user.seller_status, SellerStatus::None);

    Ok(())
}

/// Tests that emails are unique.
///
/// Verifies that inserting a second account with an existing email address fails at
/// the database level.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "someone-else".to_string(),
            email: existing.email.clone(),
            password_hash: "hash".to_string(),
            avatar: String::new(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
