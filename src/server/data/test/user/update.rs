use super::*;

/// Tests a partial profile update.
///
/// Verifies that only the supplied fields change and the rest of the account is left
/// as it was.
///
/// Expected: Ok(Some(user)) with new username and unchanged email
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                username: Some("renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.username, "renamed");
    assert_eq!(updated.email, user.email);
    assert_eq!(updated.password_hash, user.password_hash);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_updating_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(42, UpdateUserParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
