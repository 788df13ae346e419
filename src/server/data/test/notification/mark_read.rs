use super::*;

/// Tests marking a notification read and deleting it.
///
/// Expected: read flag set, then the notification is removed
#[tokio::test]
async fn marks_read_and_deletes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let notification = factory::create_notification(db, user.id).await?;

    let repo = NotificationRepository::new(db);
    let read = repo.mark_read(notification.id).await?.unwrap();

    assert!(read.read);
    assert!(repo.delete(notification.id).await?);
    assert!(repo.find_by_id(notification.id).await?.is_none());

    Ok(())
}
