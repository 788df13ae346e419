use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParams, UpdateUserParams},
};
use entity::user::{Role, SellerStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod seller_status;
mod update;
