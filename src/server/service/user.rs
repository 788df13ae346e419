//! Account management, saved listings and seller requests.

use entity::user::SellerStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::UpdateUserDto,
    server::{
        data::{listing::ListingRepository, saved_listing::SavedListingRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            listing::Listing,
            user::{UpdateUserParams, User},
        },
        service::auth::{validate_email, validate_password, validate_username},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }

    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Applies a partial update to the caller's own account.
    ///
    /// # Arguments
    /// - `actor` - Signed-in user making the request
    /// - `id` - Account to update, must equal `actor.id`
    /// - `dto` - Fields to change; a new password is re-hashed
    ///
    /// # Returns
    /// - `Ok(User)` - Updated account
    /// - `Err(AuthError::AccessDenied)` - Updating someone else's account
    /// - `Err(AppError::Conflict)` - New email or username already in use
    /// - `Err(AppError::BadRequest)` - Invalid field value
    pub async fn update(&self, actor: &User, id: i32, dto: UpdateUserDto) -> Result<User, AppError> {
        if actor.id != id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Cannot update account {}", id),
            )
            .into());
        }

        let user_repo = UserRepository::new(self.db);
        let mut params = UpdateUserParams::default();

        if let Some(username) = dto.username.filter(|u| !u.trim().is_empty()) {
            let username = validate_username(&username)?;
            if username != actor.username {
                if user_repo.find_by_username(&username).await?.is_some() {
                    return Err(AppError::Conflict("Username is already taken".to_string()));
                }
                params.username = Some(username);
            }
        }

        if let Some(email) = dto.email.filter(|e| !e.trim().is_empty()) {
            let email = validate_email(&email)?;
            if email != actor.email {
                if user_repo.find_by_email(&email).await?.is_some() {
                    return Err(AppError::Conflict("Email is already registered".to_string()));
                }
                params.email = Some(email);
            }
        }

        if let Some(password) = dto.password.filter(|p| !p.is_empty()) {
            validate_password(&password)?;
            params.password_hash = Some(bcrypt::hash(&password, self.bcrypt_cost)?);
        }

        params.avatar = dto.avatar.filter(|a| !a.trim().is_empty());

        user_repo
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Deletes an account; allowed for the account holder and admins.
    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        if !actor.can_manage(id) {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Cannot delete account {}", id),
            )
            .into());
        }

        let user_repo = UserRepository::new(self.db);
        if !user_repo.delete(id).await? {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }

        Ok(())
    }

    /// Gets the listings owned by the caller.
    pub async fn get_listings(&self, actor: &User, id: i32) -> Result<Vec<Listing>, AppError> {
        if actor.id != id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Cannot view listings of account {}", id),
            )
            .into());
        }

        ListingRepository::new(self.db).get_by_owner(id).await
    }

    /// Public contact details of a listing owner.
    pub async fn get_contact(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Saves or unsaves a listing for the caller.
    ///
    /// # Returns
    /// - `Ok(true)` - Listing is now saved
    /// - `Ok(false)` - Listing was removed from the saved list
    /// - `Err(AppError::NotFound)` - Listing does not exist
    pub async fn toggle_saved(&self, actor: &User, listing_id: i32) -> Result<bool, AppError> {
        if ListingRepository::new(self.db)
            .find_by_id(listing_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Listing {} not found",
                listing_id
            )));
        }

        SavedListingRepository::new(self.db)
            .toggle(actor.id, listing_id)
            .await
    }

    pub async fn get_saved(&self, actor: &User) -> Result<Vec<Listing>, AppError> {
        SavedListingRepository::new(self.db)
            .get_saved_listings(actor.id)
            .await
    }

    /// Submits a request to become a verified seller.
    ///
    /// A rejected user may request again.
    ///
    /// # Returns
    /// - `Ok(User)` - Account with seller status `pending`
    /// - `Err(AppError::BadRequest)` - Already verified, already pending, or an admin
    pub async fn request_seller(&self, actor: &User) -> Result<User, AppError> {
        if actor.is_admin() {
            return Err(AppError::BadRequest(
                "Admins can already publish listings".to_string(),
            ));
        }
        match actor.seller_status {
            SellerStatus::Verified => {
                return Err(AppError::BadRequest(
                    "Account is already a verified seller".to_string(),
                ))
            }
            SellerStatus::Pending => {
                return Err(AppError::BadRequest(
                    "Seller request is already pending".to_string(),
                ))
            }
            SellerStatus::None | SellerStatus::Rejected => {}
        }

        UserRepository::new(self.db)
            .set_seller_status(actor.id, SellerStatus::Pending, None)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", actor.id)))
    }
}
