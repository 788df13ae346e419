//! Listing factory for creating test listing entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::listing::{ListingStatus, ListingType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test listings with customizable fields.
///
/// Every boolean flag defaults to `false`, so filter tests only flip the flags they
/// care about.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::listing::ListingFactory;
///
/// let listing = ListingFactory::new(&db, owner.id)
///     .name("Beach House")
///     .listing_type(ListingType::Sale)
///     .offer(true)
///     .discount_price(90_000)
///     .build()
///     .await?;
/// ```
pub struct ListingFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    name: String,
    regular_price: i64,
    discount_price: i64,
    furnished: bool,
    parking: bool,
    offer: bool,
    featured: bool,
    listing_type: ListingType,
    status: ListingStatus,
    image_urls: Vec<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ListingFactory<'a> {
    /// Creates a new ListingFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Listing {id}"`
    /// - regular_price: `100000`, discount_price: `0`
    /// - all boolean flags `false`
    /// - listing_type: `Rent`, status: `Available`
    /// - one placeholder image
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - Id of the user who owns the listing
    ///
    /// # Returns
    /// - `ListingFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            name: format!("Listing {}", id),
            regular_price: 100_000,
            discount_price: 0,
            furnished: false,
            parking: false,
            offer: false,
            featured: false,
            listing_type: ListingType::Rent,
            status: ListingStatus::Available,
            image_urls: vec![format!("https://example.com/images/{}.jpg", id)],
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn regular_price(mut self, price: i64) -> Self {
        self.regular_price = price;
        self
    }

    pub fn discount_price(mut self, price: i64) -> Self {
        self.discount_price = price;
        self
    }

    pub fn furnished(mut self, furnished: bool) -> Self {
        self.furnished = furnished;
        self
    }

    pub fn parking(mut self, parking: bool) -> Self {
        self.parking = parking;
        self
    }

    pub fn offer(mut self, offer: bool) -> Self {
        self.offer = offer;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn listing_type(mut self, listing_type: ListingType) -> Self {
        self.listing_type = listing_type;
        self
    }

    pub fn status(mut self, status: ListingStatus) -> Self {
        self.status = status;
        self
    }

    pub fn image_urls(mut self, image_urls: Vec<String>) -> Self {
        self.image_urls = image_urls;
        self
    }

    /// Overrides the creation timestamp, used by sort-order tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the listing entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::listing::Model)` - Created listing entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::listing::Model, DbErr> {
        let image_urls = serde_json::to_string(&self.image_urls)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::listing::ActiveModel {
            search_name: ActiveValue::Set(entity::listing::search_key(&self.name)),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set("A well kept property.".to_string()),
            address: ActiveValue::Set("1 Test Street".to_string()),
            regular_price: ActiveValue::Set(self.regular_price),
            discount_price: ActiveValue::Set(self.discount_price),
            bathrooms: ActiveValue::Set(1),
            bedrooms: ActiveValue::Set(2),
            furnished: ActiveValue::Set(self.furnished),
            parking: ActiveValue::Set(self.parking),
            offer: ActiveValue::Set(self.offer),
            listing_type: ActiveValue::Set(self.listing_type),
            status: ActiveValue::Set(self.status),
            featured: ActiveValue::Set(self.featured),
            image_urls: ActiveValue::Set(image_urls),
            owner_id: ActiveValue::Set(self.owner_id),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a listing with default values for the given owner.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - Id of the owning user
///
/// # Returns
/// - `Ok(entity::listing::Model)` - Created listing entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_listing(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::listing::Model, DbErr> {
    ListingFactory::new(db, owner_id).build().await
}
