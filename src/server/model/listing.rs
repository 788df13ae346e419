//! Listing domain models, parameters and the search filter.

use chrono::{DateTime, Utc};
use entity::listing::{ListingStatus, ListingType};

use crate::{
    model::listing::{
        ListingDto, ListingFormDto, ListingQueryDto, ListingStatus as ListingStatusDto,
        ListingType as ListingTypeDto,
    },
    server::error::AppError,
};

/// Maximum number of images attached to one listing.
pub const MAX_LISTING_IMAGES: usize = 6;
/// Page size used when the query omits `limit`.
pub const DEFAULT_PAGE_SIZE: u64 = 9;
/// Upper bound applied to any requested `limit`.
pub const MAX_PAGE_SIZE: u64 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub regular_price: i64,
    pub discount_price: i64,
    pub bathrooms: i32,
    pub bedrooms: i32,
    pub furnished: bool,
    pub parking: bool,
    pub offer: bool,
    pub listing_type: ListingType,
    pub status: ListingStatus,
    pub featured: bool,
    pub image_urls: Vec<String>,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Listing {
    /// Price charged at checkout, in whole currency units.
    pub fn effective_price(&self) -> i64 {
        if self.offer {
            self.discount_price
        } else {
            self.regular_price
        }
    }

    /// Status a completed purchase moves the listing into.
    pub fn purchased_status(&self) -> ListingStatus {
        match self.listing_type {
            ListingType::Sale => ListingStatus::Sold,
            ListingType::Rent => ListingStatus::Rented,
        }
    }

    pub fn into_dto(self) -> ListingDto {
        ListingDto {
            id: self.id,
            name: self.name,
            description: self.description,
            address: self.address,
            regular_price: self.regular_price,
            discount_price: self.discount_price,
            bathrooms: self.bathrooms,
            bedrooms: self.bedrooms,
            furnished: self.furnished,
            parking: self.parking,
            offer: self.offer,
            listing_type: self.listing_type.into(),
            status: self.status.into(),
            featured: self.featured,
            image_urls: self.image_urls,
            owner_id: self.owner_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a listing domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Listing)` - Converted listing with decoded image URLs
    /// - `Err(AppError::InternalError)` - Stored `image_urls` column is not a JSON array
    pub fn from_entity(entity: entity::listing::Model) -> Result<Self, AppError> {
        let image_urls: Vec<String> = serde_json::from_str(&entity.image_urls).map_err(|e| {
            AppError::InternalError(format!(
                "Listing {} has malformed image_urls: {}",
                entity.id, e
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            regular_price: entity.regular_price,
            discount_price: entity.discount_price,
            bathrooms: entity.bathrooms,
            bedrooms: entity.bedrooms,
            furnished: entity.furnished,
            parking: entity.parking,
            offer: entity.offer,
            listing_type: entity.listing_type,
            status: entity.status,
            featured: entity.featured,
            image_urls,
            owner_id: entity.owner_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl From<ListingType> for ListingTypeDto {
    fn from(value: ListingType) -> Self {
        match value {
            ListingType::Rent => ListingTypeDto::Rent,
            ListingType::Sale => ListingTypeDto::Sale,
        }
    }
}

impl From<ListingTypeDto> for ListingType {
    fn from(value: ListingTypeDto) -> Self {
        match value {
            ListingTypeDto::Rent => ListingType::Rent,
            ListingTypeDto::Sale => ListingType::Sale,
        }
    }
}

impl From<ListingStatus> for ListingStatusDto {
    fn from(value: ListingStatus) -> Self {
        match value {
            ListingStatus::Available => ListingStatusDto::Available,
            ListingStatus::Sold => ListingStatusDto::Sold,
            ListingStatus::Rented => ListingStatusDto::Rented,
        }
    }
}

impl From<ListingStatusDto> for ListingStatus {
    fn from(value: ListingStatusDto) -> Self {
        match value {
            ListingStatusDto::Available => ListingStatus::Available,
            ListingStatusDto::Sold => ListingStatus::Sold,
            ListingStatusDto::Rented => ListingStatus::Rented,
        }
    }
}

/// Validated editable fields of a listing, used for both create and update.
#[derive(Debug, Clone)]
pub struct ListingParams {
    pub name: String,
    pub description: String,
    pub address: String,
    pub regular_price: i64,
    pub discount_price: i64,
    pub bathrooms: i32,
    pub bedrooms: i32,
    pub furnished: bool,
    pub parking: bool,
    pub offer: bool,
    pub listing_type: ListingType,
    pub image_urls: Vec<String>,
}

impl ListingParams {
    /// Validates a submitted listing form.
    ///
    /// # Returns
    /// - `Ok(ListingParams)` - Form passed validation
    /// - `Err(AppError::BadRequest)` - Empty text fields, non-positive prices or counts,
    ///   a discount not below the regular price while on offer, or an image count outside
    ///   1..=6
    pub fn from_dto(dto: ListingFormDto) -> Result<Self, AppError> {
        let name = dto.name.trim().to_string();
        let address = dto.address.trim().to_string();
        let description = dto.description.trim().to_string();

        if name.is_empty() || address.is_empty() || description.is_empty() {
            return Err(AppError::BadRequest(
                "Name, description and address are required".to_string(),
            ));
        }
        if dto.regular_price <= 0 {
            return Err(AppError::BadRequest(
                "Regular price must be greater than zero".to_string(),
            ));
        }
        if dto.bedrooms < 1 || dto.bathrooms < 1 {
            return Err(AppError::BadRequest(
                "Listings need at least one bedroom and one bathroom".to_string(),
            ));
        }
        if dto.offer && (dto.discount_price <= 0 || dto.discount_price >= dto.regular_price) {
            return Err(AppError::BadRequest(
                "Discount price must be below the regular price".to_string(),
            ));
        }
        if dto.image_urls.is_empty() || dto.image_urls.len() > MAX_LISTING_IMAGES {
            return Err(AppError::BadRequest(format!(
                "Listings need between 1 and {} images",
                MAX_LISTING_IMAGES
            )));
        }

        Ok(Self {
            name,
            description,
            address,
            regular_price: dto.regular_price,
            discount_price: if dto.offer { dto.discount_price } else { 0 },
            bathrooms: dto.bathrooms,
            bedrooms: dto.bedrooms,
            furnished: dto.furnished,
            parking: dto.parking,
            offer: dto.offer,
            listing_type: dto.listing_type.into(),
            image_urls: dto.image_urls,
        })
    }
}

/// Column a search is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSort {
    CreatedAt,
    RegularPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Normalized listing search.
///
/// Boolean flags are inclusive when `false`: only `true` narrows the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    pub search_term: Option<String>,
    pub listing_type: Option<ListingType>,
    pub offer: bool,
    pub parking: bool,
    pub furnished: bool,
    pub featured: bool,
    pub status: Option<ListingStatus>,
    pub sort: ListingSort,
    pub direction: SortDirection,
    pub start_index: u64,
    pub limit: u64,
}

impl Default for ListingFilter {
    fn default() -> Self {
        Self {
            search_term: None,
            listing_type: None,
            offer: false,
            parking: false,
            furnished: false,
            featured: false,
            status: None,
            sort: ListingSort::CreatedAt,
            direction: SortDirection::Desc,
            start_index: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListingFilter {
    /// Normalizes raw query parameters, falling back to defaults for anything
    /// unrecognized.
    pub fn from_dto(dto: ListingQueryDto) -> Self {
        let search_term = dto
            .search_term
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty());

        let listing_type = match dto.listing_type.as_deref() {
            Some("rent") => Some(ListingType::Rent),
            Some("sale") => Some(ListingType::Sale),
            _ => None,
        };

        let status = match dto.status.as_deref() {
            Some("available") => Some(ListingStatus::Available),
            Some("sold") => Some(ListingStatus::Sold),
            Some("rented") => Some(ListingStatus::Rented),
            _ => None,
        };

        let sort = match dto.sort.as_deref() {
            Some("regularPrice") => ListingSort::RegularPrice,
            _ => ListingSort::CreatedAt,
        };

        let direction = match dto.order.as_deref() {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        };

        let start_index = dto
            .start_index
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);

        let limit = dto
            .limit
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        Self {
            search_term,
            listing_type,
            offer: is_true(dto.offer.as_deref()),
            parking: is_true(dto.parking.as_deref()),
            furnished: is_true(dto.furnished.as_deref()),
            featured: is_true(dto.featured.as_deref()),
            status,
            sort,
            direction,
            start_index,
            limit,
        }
    }
}

fn is_true(value: Option<&str>) -> bool {
    value == Some("true")
}
