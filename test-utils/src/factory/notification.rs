//! Notification factory for creating test notifications.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test notifications addressed to a recipient.
pub struct NotificationFactory<'a> {
    db: &'a DatabaseConnection,
    recipient_id: i32,
    sender_id: Option<i32>,
    listing_id: Option<i32>,
    message: String,
    read: bool,
}

impl<'a> NotificationFactory<'a> {
    /// Creates a new unread system notification for `recipient_id`.
    pub fn new(db: &'a DatabaseConnection, recipient_id: i32) -> Self {
        Self {
            db,
            recipient_id,
            sender_id: None,
            listing_id: None,
            message: "Test notification".to_string(),
            read: false,
        }
    }

    pub fn sender_id(mut self, sender_id: i32) -> Self {
        self.sender_id = Some(sender_id);
        self
    }

    pub fn listing_id(mut self, listing_id: i32) -> Self {
        self.listing_id = Some(listing_id);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Builds and inserts the notification entity into the database.
    pub async fn build(self) -> Result<entity::notification::Model, DbErr> {
        entity::notification::ActiveModel {
            recipient_id: ActiveValue::Set(self.recipient_id),
            sender_id: ActiveValue::Set(self.sender_id),
            listing_id: ActiveValue::Set(self.listing_id),
            message: ActiveValue::Set(self.message),
            read: ActiveValue::Set(self.read),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unread notification with default values.
pub async fn create_notification(
    db: &DatabaseConnection,
    recipient_id: i32,
) -> Result<entity::notification::Model, DbErr> {
    NotificationFactory::new(db, recipient_id).build().await
}
