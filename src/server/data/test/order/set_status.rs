use super::*;

/// Tests marking an order paid.
///
/// Verifies that the status and payment id are stored together.
///
/// Expected: Ok(Some(order)) with Success status and payment id
#[tokio::test]
async fn stores_status_and_payment_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, _seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;
    let order = factory::create_order(db, buyer.id, listing.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .set_status(order.id, OrderStatus::Success, Some("pay_123".to_string()))
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Success);
    assert_eq!(updated.gateway_payment_id.as_deref(), Some("pay_123"));

    Ok(())
}

/// Tests changing status without a payment id.
///
/// Expected: status changes and payment id stays empty
#[tokio::test]
async fn keeps_payment_id_when_not_supplied() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, _seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;
    let order = factory::create_order(db, buyer.id, listing.id).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .set_status(order.id, OrderStatus::Cancelled, None)
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Cancelled);
    assert_eq!(updated.gateway_payment_id, None);
    assert!(repo
        .set_status(9999, OrderStatus::Failed, None)
        .await?
        .is_none());

    Ok(())
}
