//! In-app notifications and the contact-owner flow.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::notification::ContactOwnerDto,
    server::{
        config::BrevoConfig,
        data::{
            listing::ListingRepository, notification::NotificationRepository,
            user::UserRepository,
        },
        error::{auth::AuthError, AppError},
        model::{
            notification::{CreateNotificationParams, Notification},
            user::User,
        },
        service::mail::MailService,
    },
};

pub const MAX_MESSAGE_LENGTH: usize = 1000;

pub struct NotificationService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    mail_config: &'a BrevoConfig,
}

impl<'a> NotificationService<'a> {
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

    pub async fn list(&self, actor: &User) -> Result<Vec<Notification>, AppError> {
        Ok(NotificationRepository::new(self.db)
            .get_for_recipient(actor.id)
            .await?)
    }

    /// Sends a message from the caller to the owner of a listing.
    ///
    /// The message is stored as a notification for the owner, then emailed. A failed
    /// email is logged and does not fail the request.
    ///
    /// # Arguments
    /// - `actor` - Signed-in user sending the message
    /// - `dto` - Target listing and message text
    ///
    /// # Returns
    /// - `Ok(Notification)` - Stored notification
    /// - `Err(AppError::NotFound)` - Listing or its owner does not exist
    /// - `Err(AppError::BadRequest)` - Empty or overlong message, or messaging yourself
    pub async fn contact_owner(
        &self,
        actor: &User,
        dto: ContactOwnerDto,
    ) -> Result<Notification, AppError> {
        let message = dto.message.trim();
        if message.is_empty() || message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Message must be between 1 and {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let Some(listing) = ListingRepository::new(self.db)
            .find_by_id(dto.listing_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Listing {} not found",
                dto.listing_id
            )));
        };

        if listing.owner_id == actor.id {
            return Err(AppError::BadRequest(
                "Cannot contact yourself about your own listing".to_string(),
            ));
        }

        let Some(owner) = UserRepository::new(self.db)
            .find_by_id(listing.owner_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                listing.owner_id
            )));
        };

        let notification = NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                recipient_id: owner.id,
                sender_id: Some(actor.id),
                listing_id: Some(listing.id),
                message: message.to_string(),
            })
            .await?;

        let html = format!(
            "<p><strong>{}</strong> ({}) sent you a message about <strong>{}</strong>:</p><p>{}</p>",
            escape_html(&actor.username),
            escape_html(&actor.email),
            escape_html(&listing.name),
            escape_html(message)
        );
        let subject = format!("New enquiry about {}", listing.name);
        if let Err(e) = MailService::new(self.http_client, self.mail_config)
            .send(&owner.email, &owner.username, &subject, &html)
            .await
        {
            tracing::warn!(
                "Failed to email owner {} of listing {}: {}",
                owner.id,
                listing.id,
                e
            );
        }

        Ok(notification)
    }

    /// Marks one of the caller's notifications as read.
    pub async fn mark_read(&self, actor: &User, id: i32) -> Result<Notification, AppError> {
        self.find_owned(actor, id).await?;

        NotificationRepository::new(self.db)
            .mark_read(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notification {} not found", id)))
    }

    pub async fn delete(&self, actor: &User, id: i32) -> Result<(), AppError> {
        self.find_owned(actor, id).await?;

        NotificationRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    /// Loads a notification and checks the caller is its recipient.
    async fn find_owned(&self, actor: &User, id: i32) -> Result<Notification, AppError> {
        let Some(notification) = NotificationRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Notification {} not found", id)));
        };

        if notification.recipient_id != actor.id {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!("Notification {} belongs to another user", id),
            )
            .into());
        }

        Ok(notification)
    }

    /// Stores a system notification with no sender.
    pub async fn notify(
        &self,
        recipient_id: i32,
        listing_id: Option<i32>,
        message: String,
    ) -> Result<Notification, AppError> {
        Ok(NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                recipient_id,
                sender_id: None,
                listing_id,
                message,
            })
            .await?)
    }
}

/// Escapes user-provided text for inclusion in an HTML email body.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
