use super::*;
use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    service::admin::SellerReviewService,
};
use entity::user::{Role, SellerStatus};
use test_utils::factory::user::UserFactory;

/// Tests approving a seller request.
///
/// Verifies that the user is promoted and notified.
///
/// Expected: Ok(User) with role seller and status verified
#[tokio::test]
async fn approves_pending_request() -> Result<(), AppError> {
    let server = MockServer::start().await;
    mount_mail(&server).await;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = UserFactory::new(db)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let service = SellerReviewService::new(db, &http_client, &config.brevo);

    assert_eq!(service.get_pending().await?.len(), 1);

    let user = service.review(applicant.id, true).await?;

    assert_eq!(user.role, Role::Seller);
    assert_eq!(user.seller_status, SellerStatus::Verified);
    assert!(user.is_verified_seller());
    assert!(service.get_pending().await?.is_empty());
    assert_eq!(
        NotificationRepository::new(db)
            .get_for_recipient(user.id)
            .await?
            .len(),
        1
    );

    Ok(())
}

/// Tests rejecting a seller request.
///
/// Expected: Ok(User) with role user and status rejected
#[tokio::test]
async fn rejects_pending_request() -> Result<(), AppError> {
    let server = MockServer::start().await;
    mount_mail(&server).await;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = UserFactory::new(db)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let user = SellerReviewService::new(db, &http_client, &config.brevo)
        .review(applicant.id, false)
        .await?;

    assert_eq!(user.role, Role::User);
    assert_eq!(user.seller_status, SellerStatus::Rejected);

    Ok(())
}

/// Tests that a stored decision is returned even when the in-app notice can't be saved.
///
/// Expected: Ok(User) verified; the decision persists
#[tokio::test]
async fn keeps_decision_when_notification_fails() -> Result<(), AppError> {
    let server = MockServer::start().await;
    mount_mail(&server).await;

    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let applicant = UserFactory::new(db)
        .seller_status(SellerStatus::Pending)
        .build()
        .await?;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let user = SellerReviewService::new(db, &http_client, &config.brevo)
        .review(applicant.id, true)
        .await?;

    assert_eq!(user.seller_status, SellerStatus::Verified);

    let stored = UserRepository::new(db).find_by_id(applicant.id).await?.unwrap();
    assert_eq!(stored.seller_status, SellerStatus::Verified);

    Ok(())
}

/// Tests reviewing a user without a pending request.
///
/// Expected: Err(AppError::BadRequest), or NotFound for an unknown user
#[tokio::test]
async fn requires_pending_request() -> Result<(), AppError> {
    let server = MockServer::start().await;
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await?;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let service = SellerReviewService::new(db, &http_client, &config.brevo);

    assert!(matches!(
        service.review(user.id, true).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.review(999, true).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
