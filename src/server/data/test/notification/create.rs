use super::*;

/// Tests storing a contact notification.
///
/// Verifies that the notification is unread and appears in the recipient's list only.
///
/// Expected: recipient sees one unread notification; sender sees none
#[tokio::test]
async fn creates_unread_notification_for_recipient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;

    let repo = NotificationRepository::new(db);
    let created = repo
        .create(CreateNotificationParams {
            recipient_id: seller.id,
            sender_id: Some(buyer.id),
            listing_id: Some(listing.id),
            message: "Is this still available?".to_string(),
        })
        .await?;

    assert!(!created.read);

    let inbox = repo.get_for_recipient(seller.id).await?;
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].sender_id, Some(buyer.id));
    assert!(repo.get_for_recipient(buyer.id).await?.is_empty());

    Ok(())
}
