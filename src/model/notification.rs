use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct NotificationDto {
    pub id: i32,
    pub recipient_id: i32,
    pub sender_id: Option<i32>,
    pub listing_id: Option<i32>,
    pub message: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Message from a signed-in user to the owner of a listing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ContactOwnerDto {
    pub listing_id: i32,
    pub message: String,
}
