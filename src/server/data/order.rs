//! Payment order repository.

use chrono::Utc;
use entity::order::OrderStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{
    dashboard::OrderStats,
    order::{CreateOrderParams, Order},
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a pending order created at the payment gateway.
    ///
    /// # Returns
    /// - `Ok(Order)` - The stored order
    /// - `Err(DbErr)` - Database error, including a duplicate gateway order id
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let now = Utc::now();

        let entity = entity::order::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            listing_id: ActiveValue::Set(params.listing_id),
            amount: ActiveValue::Set(params.amount),
            currency: ActiveValue::Set(params.currency),
            gateway_order_id: ActiveValue::Set(params.gateway_order_id),
            gateway_payment_id: ActiveValue::Set(None),
            status: ActiveValue::Set(OrderStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Order::from_entity))
    }

    /// Finds an order by the id the gateway assigned to it.
    pub async fn find_by_gateway_order_id(
        &self,
        gateway_order_id: &str,
    ) -> Result<Option<Order>, DbErr> {
        let entity = entity::prelude::Order::find()
            .filter(entity::order::Column::GatewayOrderId.eq(gateway_order_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Order::from_entity))
    }

    /// Sets the status of an order.
    ///
    /// # Arguments
    /// - `id` - Order id
    /// - `status` - New status
    /// - `gateway_payment_id` - Payment id to store alongside, if any
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order
    /// - `Ok(None)` - No order with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status(
        &self,
        id: i32,
        status: OrderStatus,
        gateway_payment_id: Option<String>,
    ) -> Result<Option<Order>, DbErr> {
        let Some(entity) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.status = ActiveValue::Set(status);
        if let Some(payment_id) = gateway_payment_id {
            active.gateway_payment_id = ActiveValue::Set(Some(payment_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Order::from_entity(updated)))
    }

    /// Gets a user's orders, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Order>, DbErr> {
        let entities = entity::prelude::Order::find()
            .filter(entity::order::Column::UserId.eq(user_id))
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Order::from_entity).collect())
    }

    /// Deletes an order.
    ///
    /// # Returns
    /// - `Ok(true)` - Order deleted
    /// - `Ok(false)` - No order with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Aggregates order counts and revenue.
    ///
    /// # Arguments
    /// - `owner_id` - Restrict to orders on listings owned by this user, or `None` for
    ///   every order
    pub async fn stats(&self, owner_id: Option<i32>) -> Result<OrderStats, DbErr> {
        let mut query = entity::prelude::Order::find();
        if let Some(owner_id) = owner_id {
            query = query
                .inner_join(entity::prelude::Listing)
                .filter(entity::listing::Column::OwnerId.eq(owner_id));
        }

        let orders = query.all(self.db).await?;

        let mut stats = OrderStats {
            total: orders.len() as u64,
            ..Default::default()
        };
        for order in orders {
            if order.status == OrderStatus::Success {
                stats.successful += 1;
                stats.revenue += order.amount;
            }
        }

        Ok(stats)
    }
}
