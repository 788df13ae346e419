use super::*;
use crate::{
    model::listing::{
        ListingFormDto, ListingQueryDto, ListingStatus as ListingStatusDto,
        ListingType as ListingTypeDto,
    },
    server::service::listing::ListingService,
};
use entity::listing::ListingStatus;

fn form(name: &str) -> ListingFormDto {
    ListingFormDto {
        name: name.to_string(),
        description: "Sea view apartment".to_string(),
        address: "1 Harbour Street".to_string(),
        regular_price: 1200,
        bathrooms: 1,
        bedrooms: 2,
        listing_type: ListingTypeDto::Rent,
        image_urls: vec!["https://example.com/a.jpg".to_string()],
        ..Default::default()
    }
}

/// Tests creating a listing.
///
/// Expected: Ok(Listing) owned by the caller and available
#[tokio::test]
async fn creates_listing_for_seller() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let seller = User::from_entity(factory::create_seller(db).await?);

    let listing = ListingService::new(db)
        .create(&seller, form("Harbour Flat"))
        .await?;

    assert_eq!(listing.owner_id, seller.id);
    assert_eq!(listing.name, "Harbour Flat");
    assert_eq!(listing.status, ListingStatus::Available);

    Ok(())
}

/// Tests deleting a listing owned by someone else.
///
/// Verifies that the listing survives the rejected request.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn rejects_delete_by_non_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_seller(db).await?;
    let other = User::from_entity(factory::create_seller(db).await?);
    let listing = factory::create_listing(db, owner.id).await?;

    let service = ListingService::new(db);

    assert_access_denied(service.delete(&other, listing.id).await);
    assert!(service.get(listing.id).await.is_ok());

    Ok(())
}

/// Tests that admins may delete any listing.
///
/// Expected: Ok(()) and the listing is gone
#[tokio::test]
async fn admin_deletes_any_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_seller(db).await?;
    let admin = User::from_entity(factory::create_admin(db).await?);
    let listing = factory::create_listing(db, owner.id).await?;

    let service = ListingService::new(db);
    service.delete(&admin, listing.id).await?;

    assert!(matches!(
        service.get(listing.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests updating a listing owned by someone else.
///
/// Expected: Err(AuthError::AccessDenied), the owner's update succeeds
#[tokio::test]
async fn only_owner_updates_listing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_seller(db).await?);
    let other = User::from_entity(factory::create_user(db).await?);
    let listing = factory::create_listing(db, owner.id).await?;

    let service = ListingService::new(db);

    assert_access_denied(service.update(&other, listing.id, form("Stolen")).await);

    let updated = service.update(&owner, listing.id, form("Renamed")).await?;
    assert_eq!(updated.name, "Renamed");

    Ok(())
}

/// Tests operations on a listing that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_listing_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = User::from_entity(factory::create_admin(db).await?);

    let service = ListingService::new(db);

    assert!(matches!(
        service.delete(&admin, 999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.set_status(&admin, 999, ListingStatusDto::Sold).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests setting the listing status.
///
/// Expected: Ok(Listing) with the new status
#[tokio::test]
async fn owner_sets_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_seller(db).await?);
    let listing = factory::create_listing(db, owner.id).await?;

    let updated = ListingService::new(db)
        .set_status(&owner, listing.id, ListingStatusDto::Rented)
        .await?;

    assert_eq!(updated.status, ListingStatus::Rented);

    Ok(())
}

/// Tests toggling the featured flag.
///
/// Verifies that the owner cannot feature their own listing and that two admin
/// toggles restore the original value.
///
/// Expected: AccessDenied for the owner, true then false for the admin
#[tokio::test]
async fn admin_toggles_featured() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = User::from_entity(factory::create_seller(db).await?);
    let admin = User::from_entity(factory::create_admin(db).await?);
    let listing = factory::create_listing(db, owner.id).await?;

    let service = ListingService::new(db);

    assert_access_denied(service.toggle_featured(&owner, listing.id).await);
    assert!(service.toggle_featured(&admin, listing.id).await?.featured);
    assert!(!service.toggle_featured(&admin, listing.id).await?.featured);

    Ok(())
}

/// Tests search from raw query parameters.
///
/// Verifies that an unset flag stays inclusive while a `true` flag narrows.
///
/// Expected: both listings without filter, only the offer with `offer=true`
#[tokio::test]
async fn searches_from_query_parameters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let owner = factory::create_seller(db).await?;
    factory::listing::ListingFactory::new(db, owner.id)
        .offer(true)
        .discount_price(50000)
        .build()
        .await?;
    factory::create_listing(db, owner.id).await?;

    let service = ListingService::new(db);

    let all = service.search(ListingQueryDto::default()).await?;
    assert_eq!(all.len(), 2);

    let offers = service
        .search(ListingQueryDto {
            offer: Some("true".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(offers.len(), 1);
    assert!(offers[0].offer);

    Ok(())
}
