//! Listing data repository.
//!
//! Provides the `ListingRepository` for listing CRUD, the search query built from a
//! `ListingFilter`, status/featured toggles and dashboard counts.

use chrono::Utc;
use entity::listing::ListingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    IntoActiveModel, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::{Expr, LikeExpr},
};

use crate::server::{
    error::AppError,
    model::{
        dashboard::ListingStats,
        listing::{Listing, ListingFilter, ListingParams, ListingSort, SortDirection},
    },
};

const LIKE_ESCAPE: char = '!';

/// Escapes `LIKE` wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Builds the WHERE clause for a listing search.
///
/// Boolean flags only add a clause when set, so an unset flag matches both `true` and
/// `false` rows. The search term is a literal substring match against the lowercased
/// `search_name` column; `%`, `_` and the escape character in the term are escaped.
pub fn search_condition(filter: &ListingFilter) -> Condition {
    let mut condition = Condition::all();

    if let Some(term) = &filter.search_term {
        let pattern = format!("%{}%", escape_like(&entity::listing::search_key(term)));
        condition = condition.add(
            entity::listing::Column::SearchName.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
        );
    }
    if let Some(listing_type) = filter.listing_type {
        condition = condition.add(entity::listing::Column::ListingType.eq(listing_type));
    }
    if let Some(status) = filter.status {
        condition = condition.add(entity::listing::Column::Status.eq(status));
    }
    if filter.offer {
        condition = condition.add(entity::listing::Column::Offer.eq(true));
    }
    if filter.parking {
        condition = condition.add(entity::listing::Column::Parking.eq(true));
    }
    if filter.furnished {
        condition = condition.add(entity::listing::Column::Furnished.eq(true));
    }
    if filter.featured {
        condition = condition.add(entity::listing::Column::Featured.eq(true));
    }

    condition
}

pub struct ListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a listing owned by `owner_id` with status `available`.
    ///
    /// # Arguments
    /// - `owner_id` - Id of the publishing user
    /// - `params` - Validated listing fields
    ///
    /// # Returns
    /// - `Ok(Listing)` - The created listing
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, owner_id: i32, params: ListingParams) -> Result<Listing, AppError> {
        let now = Utc::now();
        let image_urls = encode_image_urls(&params.image_urls)?;

        let entity = entity::listing::ActiveModel {
            search_name: ActiveValue::Set(entity::listing::search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            address: ActiveValue::Set(params.address),
            regular_price: ActiveValue::Set(params.regular_price),
            discount_price: ActiveValue::Set(params.discount_price),
            bathrooms: ActiveValue::Set(params.bathrooms),
            bedrooms: ActiveValue::Set(params.bedrooms),
            furnished: ActiveValue::Set(params.furnished),
            parking: ActiveValue::Set(params.parking),
            offer: ActiveValue::Set(params.offer),
            listing_type: ActiveValue::Set(params.listing_type),
            status: ActiveValue::Set(ListingStatus::Available),
            featured: ActiveValue::Set(false),
            image_urls: ActiveValue::Set(image_urls),
            owner_id: ActiveValue::Set(owner_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Listing::from_entity(entity)
    }

    /// Finds a listing by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Listing>, AppError> {
        entity::prelude::Listing::find_by_id(id)
            .one(self.db)
            .await?
            .map(Listing::from_entity)
            .transpose()
    }

    /// Replaces the editable fields of a listing.
    ///
    /// Status, featured flag and owner are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Listing))` - Updated listing
    /// - `Ok(None)` - No listing with that id
    /// - `Err(AppError)` - Database or encoding error
    pub async fn update(
        &self,
        id: i32,
        params: ListingParams,
    ) -> Result<Option<Listing>, AppError> {
        let Some(entity) = entity::prelude::Listing::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.search_name = ActiveValue::Set(entity::listing::search_key(&params.name));
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.address = ActiveValue::Set(params.address);
        active.regular_price = ActiveValue::Set(params.regular_price);
        active.discount_price = ActiveValue::Set(params.discount_price);
        active.bathrooms = ActiveValue::Set(params.bathrooms);
        active.bedrooms = ActiveValue::Set(params.bedrooms);
        active.furnished = ActiveValue::Set(params.furnished);
        active.parking = ActiveValue::Set(params.parking);
        active.offer = ActiveValue::Set(params.offer);
        active.listing_type = ActiveValue::Set(params.listing_type);
        active.image_urls = ActiveValue::Set(encode_image_urls(&params.image_urls)?);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Listing::from_entity(updated)?))
    }

    /// Deletes a listing; saved entries and orders referencing it cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing deleted
    /// - `Ok(false)` - No listing with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Listing::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Searches listings with filtering, sorting and offset pagination.
    ///
    /// Ties on the sort column are broken by id so pages stay stable.
    ///
    /// # Arguments
    /// - `filter` - Normalized search parameters
    ///
    /// # Returns
    /// - `Ok(Vec<Listing>)` - At most `filter.limit` listings starting at `filter.start_index`
    /// - `Err(AppError)` - Database error during query
    pub async fn search(&self, filter: &ListingFilter) -> Result<Vec<Listing>, AppError> {
        let sort_column = match filter.sort {
            ListingSort::CreatedAt => entity::listing::Column::CreatedAt,
            ListingSort::RegularPrice => entity::listing::Column::RegularPrice,
        };
        let order = match filter.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };

        let entities = entity::prelude::Listing::find()
            .filter(search_condition(filter))
            .order_by(sort_column, order.clone())
            .order_by(entity::listing::Column::Id, order)
            .offset(filter.start_index)
            .limit(filter.limit)
            .all(self.db)
            .await?;

        entities.into_iter().map(Listing::from_entity).collect()
    }

    /// Gets every listing owned by a user, newest first.
    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Listing>, AppError> {
        let entities = entity::prelude::Listing::find()
            .filter(entity::listing::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::listing::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Listing::from_entity).collect()
    }

    /// Sets the availability status of a listing.
    pub async fn set_status(
        &self,
        id: i32,
        status: ListingStatus,
    ) -> Result<Option<Listing>, AppError> {
        let Some(entity) = entity::prelude::Listing::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Listing::from_entity(updated)?))
    }

    /// Moves an `available` listing to `status` in a single conditional update.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing was available and now carries `status`
    /// - `Ok(false)` - No listing with that id, or it was already sold or rented
    pub async fn claim_available(&self, id: i32, status: ListingStatus) -> Result<bool, AppError> {
        let result = entity::prelude::Listing::update_many()
            .col_expr(entity::listing::Column::Status, Expr::value(status))
            .col_expr(entity::listing::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::listing::Column::Id.eq(id))
            .filter(entity::listing::Column::Status.eq(ListingStatus::Available))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Sets the featured flag of a listing.
    pub async fn set_featured(
        &self,
        id: i32,
        featured: bool,
    ) -> Result<Option<Listing>, AppError> {
        let Some(entity) = entity::prelude::Listing::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.featured = ActiveValue::Set(featured);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Listing::from_entity(updated)?))
    }

    /// Counts listings by status, either platform-wide or for one owner.
    ///
    /// # Arguments
    /// - `owner_id` - Restrict counts to this owner, or `None` for every listing
    pub async fn stats(&self, owner_id: Option<i32>) -> Result<ListingStats, AppError> {
        let base = match owner_id {
            Some(owner_id) => Condition::all().add(entity::listing::Column::OwnerId.eq(owner_id)),
            None => Condition::all(),
        };

        Ok(ListingStats {
            total: self.count_where(base.clone()).await?,
            available: self
                .count_where(
                    base.clone()
                        .add(entity::listing::Column::Status.eq(ListingStatus::Available)),
                )
                .await?,
            sold: self
                .count_where(base.clone().add(entity::listing::Column::Status.eq(ListingStatus::Sold)))
                .await?,
            rented: self
                .count_where(
                    base.clone()
                        .add(entity::listing::Column::Status.eq(ListingStatus::Rented)),
                )
                .await?,
            featured: self
                .count_where(base.add(entity::listing::Column::Featured.eq(true)))
                .await?,
        })
    }

    async fn count_where(&self, condition: Condition) -> Result<u64, AppError> {
        let count = entity::prelude::Listing::find()
            .filter(condition)
            .count(self.db)
            .await?;

        Ok(count)
    }
}

fn encode_image_urls(image_urls: &[String]) -> Result<String, AppError> {
    serde_json::to_string(image_urls)
        .map_err(|e| AppError::InternalError(format!("Failed to encode image urls: {}", e)))
}
