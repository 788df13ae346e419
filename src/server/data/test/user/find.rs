use super::*;

/// Tests looking up users by id, email and username.
///
/// Verifies that each lookup returns the matching user.
///
/// Expected: Ok(Some(user)) for each lookup
#[tokio::test]
async fn finds_user_by_each_key() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    let by_id = repo.find_by_id(user.id).await?;
    let by_email = repo.find_by_email(&user.email).await?;
    let by_username = repo.find_by_username(&user.username).await?;

    assert_eq!(by_id.map(|u| u.id), Some(user.id));
    assert_eq!(by_email.map(|u| u.id), Some(user.id));
    assert_eq!(by_username.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests looking up a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_by_id(999).await?.is_none());
    assert!(repo.find_by_email("nobody@example.com").await?.is_none());

    Ok(())
}
