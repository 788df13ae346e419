use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParams, Notification};

pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores an unread notification.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            recipient_id: ActiveValue::Set(params.recipient_id),
            sender_id: ActiveValue::Set(params.sender_id),
            listing_id: ActiveValue::Set(params.listing_id),
            message: ActiveValue::Set(params.message),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a user's notifications, newest first.
    pub async fn get_for_recipient(&self, recipient_id: i32) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(recipient_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Marks a notification as read.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Updated notification
    /// - `Ok(None)` - No notification with that id
    pub async fn mark_read(&self, id: i32) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::Notification::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.read = ActiveValue::Set(true);
        let updated = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(updated)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Notification::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
