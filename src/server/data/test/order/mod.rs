use crate::server::{
    data::order::OrderRepository,
    model::order::{CreateOrderParams, ORDER_CURRENCY},
};
use entity::order::OrderStatus;
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, order::OrderFactory},
};

mod create;
mod delete;
mod set_status;
mod stats;
