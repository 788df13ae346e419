//! Seller verification workflow for admins.

use dioxus_logger::tracing;
use entity::user::{Role, SellerStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::BrevoConfig,
    data::user::UserRepository,
    error::AppError,
    model::user::User,
    service::{mail::MailService, notification::NotificationService},
};

pub struct SellerReviewService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    mail_config: &'a BrevoConfig,
}

impl<'a> SellerReviewService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        mail_config: &'a BrevoConfig,
    ) -> Self {
        Self {
            db,
            http_client,
            mail_config,
        }
    }

    /// Users waiting for a decision, oldest request first.
    pub async fn get_pending(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_pending_seller_requests()
            .await?)
    }

    /// Approves or rejects a pending seller request.
    ///
    /// Approval promotes the user to the seller role with status `verified`; rejection
    /// sets status `rejected` and leaves the role unchanged. The user is notified in
    /// the app and by email.
    ///
    /// # Arguments
    /// - `id` - User whose request is reviewed
    /// - `approve` - `true` to approve, `false` to reject
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::BadRequest)` - User has no pending request
    pub async fn review(&self, id: i32, approve: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        };
        if user.seller_status != SellerStatus::Pending {
            return Err(AppError::BadRequest(format!(
                "User {} has no pending seller request",
                id
            )));
        }

        let (status, role) = if approve {
            (SellerStatus::Verified, Some(Role::Seller))
        } else {
            (SellerStatus::Rejected, None)
        };

        let updated = user_repo
            .set_seller_status(id, status, role)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

        let message = if approve {
            "Your seller request was approved. You can now publish listings."
        } else {
            "Your seller request was rejected."
        };

        if let Err(e) = NotificationService::new(self.db, self.http_client, self.mail_config)
            .notify(updated.id, None, message.to_string())
            .await
        {
            tracing::warn!("Failed to notify user {} of seller decision: {}", updated.id, e);
        }

        if let Err(e) = MailService::new(self.http_client, self.mail_config)
            .send(
                &updated.email,
                &updated.username,
                "Your seller request",
                &format!("<p>{}</p>", message),
            )
            .await
        {
            tracing::warn!("Failed to email seller decision to user {}: {}", updated.id, e);
        }

        Ok(updated)
    }
}
