use super::*;

/// Tests that unset boolean filters are inclusive.
///
/// Verifies that with no flags set, listings with every combination of offer,
/// parking, furnished and featured values are returned.
///
/// Expected: all listings returned
#[tokio::test]
async fn unset_flags_match_true_and_false() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    ListingFactory::new(db, owner.id)
        .offer(true)
        .discount_price(50)
        .parking(true)
        .furnished(true)
        .featured(true)
        .build()
        .await?;
    ListingFactory::new(db, owner.id).build().await?;
    ListingFactory::new(db, owner.id)
        .parking(true)
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let results = repo.search(&ListingFilter::default()).await?;

    assert_eq!(results.len(), 3);

    Ok(())
}

/// Tests that a set boolean filter narrows results.
///
/// Verifies that each flag set to true only returns listings where that flag is true.
///
/// Expected: one listing per flag
#[tokio::test]
async fn set_flags_only_match_true() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let offer = ListingFactory::new(db, owner.id)
        .offer(true)
        .discount_price(50)
        .build()
        .await?;
    let parking = ListingFactory::new(db, owner.id)
        .parking(true)
        .build()
        .await?;
    let furnished = ListingFactory::new(db, owner.id)
        .furnished(true)
        .build()
        .await?;
    let featured = ListingFactory::new(db, owner.id)
        .featured(true)
        .build()
        .await?;

    let repo = ListingRepository::new(db);

    let cases = [
        (
            ListingFilter {
                offer: true,
                ..Default::default()
            },
            offer.id,
        ),
        (
            ListingFilter {
                parking: true,
                ..Default::default()
            },
            parking.id,
        ),
        (
            ListingFilter {
                furnished: true,
                ..Default::default()
            },
            furnished.id,
        ),
        (
            ListingFilter {
                featured: true,
                ..Default::default()
            },
            featured.id,
        ),
    ];

    for (filter, expected_id) in cases {
        let results = repo.search(&filter).await?;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, expected_id);
    }

    Ok(())
}

/// Tests filtering by listing type and status.
///
/// Expected: only listings of the requested type and status
#[tokio::test]
async fn filters_by_type_and_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let sale = ListingFactory::new(db, owner.id)
        .listing_type(ListingType::Sale)
        .build()
        .await?;
    let sold = ListingFactory::new(db, owner.id)
        .listing_type(ListingType::Sale)
        .status(ListingStatus::Sold)
        .build()
        .await?;
    ListingFactory::new(db, owner.id)
        .listing_type(ListingType::Rent)
        .build()
        .await?;

    let repo = ListingRepository::new(db);

    let sales = repo
        .search(&ListingFilter {
            listing_type: Some(ListingType::Sale),
            ..Default::default()
        })
        .await?;
    let mut sale_ids: Vec<i32> = sales.iter().map(|l| l.id).collect();
    sale_ids.sort();
    assert_eq!(sale_ids, vec![sale.id, sold.id]);

    let sold_only = repo
        .search(&ListingFilter {
            listing_type: Some(ListingType::Sale),
            status: Some(ListingStatus::Sold),
            ..Default::default()
        })
        .await?;
    assert_eq!(sold_only.len(), 1);
    assert_eq!(sold_only[0].id, sold.id);

    Ok(())
}

/// Tests case-insensitive substring search on the name.
///
/// Expected: both listings whose names contain "villa" in any case
#[tokio::test]
async fn matches_search_term_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    ListingFactory::new(db, owner.id)
        .name("Sunset VILLA")
        .build()
        .await?;
    ListingFactory::new(db, owner.id)
        .name("villa on the hill")
        .build()
        .await?;
    ListingFactory::new(db, owner.id)
        .name("City Apartment")
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let results = repo
        .search(&ListingFilter {
            search_term: Some("Villa".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|l| l.name.to_lowercase().contains("villa")));

    Ok(())
}

/// Tests that `%` and `_` in the search term match literally.
///
/// Expected: only the listing whose name contains the literal characters
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let underscored = ListingFactory::new(db, owner.id)
        .name("plot_7 riverside")
        .build()
        .await?;
    let percent = ListingFactory::new(db, owner.id)
        .name("100% furnished flat")
        .build()
        .await?;
    ListingFactory::new(db, owner.id)
        .name("1000 sq ft studio")
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let underscore_results = repo
        .search(&ListingFilter {
            search_term: Some("_".to_string()),
            ..Default::default()
        })
        .await?;
    let percent_results = repo
        .search(&ListingFilter {
            search_term: Some("100%".to_string()),
            ..Default::default()
        })
        .await?;
    let escape_results = repo
        .search(&ListingFilter {
            search_term: Some("!".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(underscore_results.len(), 1);
    assert_eq!(underscore_results[0].id, underscored.id);
    assert_eq!(percent_results.len(), 1);
    assert_eq!(percent_results[0].id, percent.id);
    assert!(escape_results.is_empty());

    Ok(())
}

/// Tests that case folding covers non-ASCII names.
///
/// Expected: the accented listing matches an upper-case term
#[tokio::test]
async fn matches_non_ascii_term_case_insensitively() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let cottage = ListingFactory::new(db, owner.id)
        .name("Ólafur's cottage")
        .build()
        .await?;
    ListingFactory::new(db, owner.id)
        .name("Harbour loft")
        .build()
        .await?;

    let repo = ListingRepository::new(db);
    let results = repo
        .search(&ListingFilter {
            search_term: Some("óLAFUR".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, cottage.id);

    Ok(())
}

/// Tests sorting and pagination.
///
/// Verifies ascending price order and that `start_index`/`limit` select the expected
/// window.
///
/// Expected: prices in ascending order; second page holds the third listing
#[tokio::test]
async fn sorts_and_paginates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    for price in [3000, 1000, 2000] {
        ListingFactory::new(db, owner.id)
            .regular_price(price)
            .build()
            .await?;
    }

    let repo = ListingRepository::new(db);

    let by_price = repo
        .search(&ListingFilter {
            sort: ListingSort::RegularPrice,
            direction: SortDirection::Asc,
            ..Default::default()
        })
        .await?;
    let prices: Vec<i64> = by_price.iter().map(|l| l.regular_price).collect();
    assert_eq!(prices, vec![1000, 2000, 3000]);

    let second_page = repo
        .search(&ListingFilter {
            sort: ListingSort::RegularPrice,
            direction: SortDirection::Asc,
            start_index: 2,
            limit: 2,
            ..Default::default()
        })
        .await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].regular_price, 3000);

    Ok(())
}

/// Tests the default newest-first ordering.
///
/// Expected: most recently created listing first
#[tokio::test]
async fn defaults_to_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_seller(db).await?;
    let older = ListingFactory::new(db, owner.id)
        .created_at(Utc::now() - Duration::days(2))
        .build()
        .await?;
    let newer = ListingFactory::new(db, owner.id).build().await?;

    let repo = ListingRepository::new(db);
    let results = repo.search(&ListingFilter::default()).await?;

    assert_eq!(results[0].id, newer.id);
    assert_eq!(results[1].id, older.id);

    Ok(())
}
