use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Success,
    Failed,
    Cancelled,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct OrderDto {
    pub id: i32,
    pub user_id: i32,
    pub listing_id: i32,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub gateway_order_id: String,
    pub gateway_payment_id: Option<String>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateOrderDto {
    pub listing_id: i32,
}

/// Order created at the gateway plus the public key the checkout widget needs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CheckoutDto {
    pub order: OrderDto,
    pub key_id: String,
}

/// Payment callback fields as returned by the gateway checkout.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct VerifyPaymentDto {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}
