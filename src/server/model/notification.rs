use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub recipient_id: i32,
    pub sender_id: Option<i32>,
    pub listing_id: Option<i32>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            recipient_id: self.recipient_id,
            sender_id: self.sender_id,
            listing_id: self.listing_id,
            message: self.message,
            read: self.read,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            recipient_id: entity.recipient_id,
            sender_id: entity.sender_id,
            listing_id: entity.listing_id,
            message: entity.message,
            read: entity.read,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub recipient_id: i32,
    /// `None` for system notifications such as payment confirmations.
    pub sender_id: Option<i32>,
    pub listing_id: Option<i32>,
    pub message: String,
}
