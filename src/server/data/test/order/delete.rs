use super::*;

/// Tests deleting an order.
///
/// Expected: Ok(true) then Ok(false)
#[tokio::test]
async fn deletes_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (buyer, _seller, listing) = factory::helpers::create_listing_with_buyer(db).await?;
    let order = factory::create_order(db, buyer.id, listing.id).await?;

    let repo = OrderRepository::new(db);

    assert!(repo.delete(order.id).await?);
    assert!(!repo.delete(order.id).await?);

    Ok(())
}
