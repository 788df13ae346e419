use crate::model::dashboard::{DashboardStatsDto, StatsScope};

/// Aggregate listing and order counts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingStats {
    pub total: u64,
    pub available: u64,
    pub sold: u64,
    pub rented: u64,
    pub featured: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderStats {
    pub total: u64,
    pub successful: u64,
    /// Sum of successful order amounts in minor currency units.
    pub revenue: i64,
}

/// Dashboard totals for either the whole platform or one seller.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardStats {
    pub scope: StatsScope,
    pub total_users: Option<u64>,
    pub listings: ListingStats,
    pub orders: OrderStats,
    pub pending_seller_requests: Option<u64>,
}

impl DashboardStats {
    pub fn into_dto(self) -> DashboardStatsDto {
        DashboardStatsDto {
            scope: self.scope,
            total_users: self.total_users,
            total_listings: self.listings.total,
            available_listings: self.listings.available,
            sold_listings: self.listings.sold,
            rented_listings: self.listings.rented,
            featured_listings: self.listings.featured,
            total_orders: self.orders.total,
            successful_orders: self.orders.successful,
            revenue: self.orders.revenue,
            pending_seller_requests: self.pending_seller_requests,
        }
    }
}
