//! Listing creation, updates, moderation and search.

use sea_orm::DatabaseConnection;

use crate::{
    model::listing::{ListingFormDto, ListingQueryDto, ListingStatus as ListingStatusDto},
    server::{
        data::listing::ListingRepository,
        error::{auth::AuthError, AppError},
        model::{
            listing::{Listing, ListingFilter, ListingParams},
            user::User,
        },
    },
};

pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a new listing owned by the caller.
    ///
    /// The caller's permission to publish is checked by the handler's guard.
    ///
    /// # Arguments
    /// - `actor` - Verified seller or admin creating the listing
    /// - `dto` - Submitted listing form
    ///
    /// # Returns
    /// - `Ok(Listing)` - Created listing with status `available`
    /// - `Err(AppError::BadRequest)` - Form failed validation
    pub async fn create(&self, actor: &User, dto: ListingFormDto) -> Result<Listing, AppError> {
        let params = ListingParams::from_dto(dto)?;

        ListingRepository::new(self.db).create(actor.id, params).await
    }

    pub async fn get(&self, id: i32) -> Result<Listing, AppError> {
        ListingRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Searches listings from raw query parameters.
    ///
    /// Unknown or malformed parameters fall back to their defaults rather than erroring.
    pub async fn search(&self, query: ListingQueryDto) -> Result<Vec<Listing>, AppError> {
        let filter = ListingFilter::from_dto(query);

        ListingRepository::new(self.db).search(&filter).await
    }

    /// Replaces the editable fields of a listing.
    ///
    /// # Returns
    /// - `Ok(Listing)` - Updated listing
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the owner nor an admin
    /// - `Err(AppError::BadRequest)` - Form failed validation
    pub async fn update(
        &self,
        actor: &User,
        id: i32,
        dto: ListingFormDto,
    ) -> Result<Listing, AppError> {
        self.find_managed(actor, id).await?;
        let params = ListingParams::from_dto(dto)?;

        ListingRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a listing owned by the caller, or any listing for admins.
    ///
    /// # Returns
    /// - `Ok(())` - Listing deleted
    /// - `Err(AppError::NotFound)` - No listing with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is neither the owner nor an admin
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.find_managed(actor, id).await?;

        if !ListingRepository::new(self.db).delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Marks a listing available, sold or rented.
    pub async fn set_status(
        &self,
        actor: &User,
        id: i32,
        status: ListingStatusDto,
    ) -> Result<Listing, AppError> {
        self.find_managed(actor, id).await?;

        ListingRepository::new(self.db)
            .set_status(id, status.into())
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Flips the featured flag; the caller must be an admin.
    pub async fn toggle_featured(&self, actor: &User, id: i32) -> Result<Listing, AppError> {
        if !actor.is_admin() {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Only admins can feature listings".to_string(),
            )
            .into());
        }

        let listing_repo = ListingRepository::new(self.db);
        let listing = listing_repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

        listing_repo
            .set_featured(id, !listing.featured)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Loads a listing the caller is allowed to modify.
    async fn find_managed(&self, actor: &User, id: i32) -> Result<Listing, AppError> {
        let listing = self.get(id).await?;

        if !actor.can_manage(listing.owner_id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Listing {} belongs to another user", id),
            )
            .into());
        }

        Ok(listing)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Listing {} not found", id))
}
