//! Order factory for creating test payment orders.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::order::OrderStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders.
///
/// The gateway order id defaults to `"order_test{id}"` so it stays unique across a
/// test run.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    listing_id: i32,
    amount: i64,
    gateway_order_id: String,
    status: OrderStatus,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with a pending status and an INR amount of 1000.00.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the paying user
    /// - `listing_id` - Id of the listing being paid for
    pub fn new(db: &'a DatabaseConnection, user_id: i32, listing_id: i32) -> Self {
        Self {
            db,
            user_id,
            listing_id,
            amount: 100_000,
            gateway_order_id: format!("order_test{}", next_id()),
            status: OrderStatus::Pending,
        }
    }

    pub fn amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn gateway_order_id(mut self, gateway_order_id: impl Into<String>) -> Self {
        self.gateway_order_id = gateway_order_id.into();
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            listing_id: ActiveValue::Set(self.listing_id),
            amount: ActiveValue::Set(self.amount),
            currency: ActiveValue::Set("INR".to_string()),
            gateway_order_id: ActiveValue::Set(self.gateway_order_id),
            gateway_payment_id: ActiveValue::Set(None),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order with default values.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    listing_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, listing_id).build().await
}
