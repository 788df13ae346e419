use super::*;

/// Tests recording a gateway order.
///
/// Verifies that the order is pending, has no payment id yet, and can be found by its
/// gateway order id.
///
/// Expected: Ok with pending order created
#[tokio::test]
async fn creates_pending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, _seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(CreateOrderParams {
            user_id: buyer.id,
            listing_id: listing.id,
            amount: 250_000,
            currency: ORDER_CURRENCY.to_string(),
            gateway_order_id: "order_abc".to_string(),
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.gateway_payment_id, None);
    assert_eq!(order.amount, 250_000);

    let found = repo.find_by_gateway_order_id("order_abc").await?.unwrap();
    assert_eq!(found.id, order.id);

    Ok(())
}

/// Tests listing a user's orders.
///
/// Expected: only the buyer's orders
#[tokio::test]
async fn gets_orders_for_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;
    factory::create_order(db, buyer.id, listing.id).await?;
    factory::create_order(db, buyer.id, listing.id).await?;
    factory::create_order(db, seller.id, listing.id).await?;

    let repo = OrderRepository::new(db);
    let orders = repo.get_by_user(buyer.id).await?;

    assert_eq!(orders.len(), 2);
    assert!(orders.iter().all(|o| o.user_id == buyer.id));

    Ok(())
}
