use crate::server::{
    data::listing::ListingRepository,
    error::AppError,
    model::listing::{ListingFilter, ListingParams, ListingSort, SortDirection},
};
use chrono::{Duration, Utc};
use entity::listing::{ListingStatus, ListingType};
use test_utils::{builder::TestBuilder, factory, factory::listing::ListingFactory};

mod create;
mod delete;
mod search;
mod stats;
mod update;

fn params(name: &str) -> ListingParams {
    ListingParams {
        name: name.to_string(),
        description: "Bright and airy".to_string(),
        address: "5 Palm Avenue".to_string(),
        regular_price: 2500,
        discount_price: 0,
        bathrooms: 1,
        bedrooms: 2,
        furnished: false,
        parking: true,
        offer: false,
        listing_type: ListingType::Rent,
        image_urls: vec![
            "https://example.com/1.jpg".to_string(),
            "https://example.com/2.jpg".to_string(),
        ],
    }
}
