use crate::server::{data::saved_listing::SavedListingRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod get_saved_listings;
mod toggle;
