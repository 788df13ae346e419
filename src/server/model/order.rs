//! Payment order domain models.

use chrono::{DateTime, Utc};
use entity::order::OrderStatus;

use crate::model::order::{OrderDto, OrderStatus as OrderStatusDto};

/// Currency every order is placed in.
pub const ORDER_CURRENCY: &str = "INR";

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub user_id: i32,
    pub listing_id: i32,
    pub amount: i64,
    pub currency: String,
    pub gateway_order_id: String,
    pub gateway_payment_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            user_id: self.user_id,
            listing_id: self.listing_id,
            amount: self.amount,
            currency: self.currency,
            gateway_order_id: self.gateway_order_id,
            gateway_payment_id: self.gateway_payment_id,
            status: match self.status {
                OrderStatus::Pending => OrderStatusDto::Pending,
                OrderStatus::Success => OrderStatusDto::Success,
                OrderStatus::Failed => OrderStatusDto::Failed,
                OrderStatus::Cancelled => OrderStatusDto::Cancelled,
            },
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::order::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            listing_id: entity.listing_id,
            amount: entity.amount,
            currency: entity.currency,
            gateway_order_id: entity.gateway_order_id,
            gateway_payment_id: entity.gateway_payment_id,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Parameters for recording an order created at the gateway.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub user_id: i32,
    pub listing_id: i32,
    /// Minor currency units.
    pub amount: i64,
    pub currency: String,
    pub gateway_order_id: String,
}
