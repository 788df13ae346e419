use crate::server::{
    data::notification::NotificationRepository, model::notification::CreateNotificationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod mark_read;
