use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::AppError, model::listing::Listing};

/// Repository for the user-to-listing bookmark table.
pub struct SavedListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SavedListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Saves the listing for the user, or removes it if already saved.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing is now saved
    /// - `Ok(false)` - Listing was removed from the saved set
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn toggle(&self, user_id: i32, listing_id: i32) -> Result<bool, AppError> {
        let existing = entity::prelude::SavedListing::find_by_id((user_id, listing_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            entity::prelude::SavedListing::delete_by_id((user_id, listing_id))
                .exec(self.db)
                .await?;
            return Ok(false);
        }

        entity::saved_listing::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            listing_id: ActiveValue::Set(listing_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Gets the listings a user has saved, most recently saved first.
    pub async fn get_saved_listings(&self, user_id: i32) -> Result<Vec<Listing>, AppError> {
        let entities = entity::prelude::Listing::find()
            .inner_join(entity::prelude::SavedListing)
            .filter(entity::saved_listing::Column::UserId.eq(user_id))
            .order_by_desc(entity::saved_listing::Column::CreatedAt)
            .all(self.db)
            .await?;

        entities.into_iter().map(Listing::from_entity).collect()
    }
}
