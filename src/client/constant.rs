pub const SITE_NAME: &str = "OasisSpace";

/// Listings fetched per "show more" step on the search page.
pub const SEARCH_PAGE_SIZE: usize = 9;

/// Listings per row on the home page.
pub const HOME_ROW_SIZE: usize = 4;

/// Element id of the image file input on the listing form.
pub const IMAGE_INPUT_ID: &str = "listing-images";

pub const MAX_LISTING_IMAGES: usize = 6;
