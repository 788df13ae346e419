use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum StatsScope {
    /// Totals across every user, shown to admins.
    Platform,
    /// Totals for the requesting seller's own listings.
    Seller,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct DashboardStatsDto {
    pub scope: StatsScope,
    /// Only populated for the platform scope.
    pub total_users: Option<u64>,
    pub total_listings: u64,
    pub available_listings: u64,
    pub sold_listings: u64,
    pub rented_listings: u64,
    pub featured_listings: u64,
    pub total_orders: u64,
    pub successful_orders: u64,
    /// Sum of successful order amounts in minor currency units.
    pub revenue: i64,
    /// Only populated for the platform scope.
    pub pending_seller_requests: Option<u64>,
}
