//! Aggregate statistics for the dashboard.

use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::StatsScope,
    server::{
        data::{listing::ListingRepository, order::OrderRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{dashboard::DashboardStats, user::User},
    },
};

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the statistics visible to the caller.
    ///
    /// Admins see platform totals including user counts and pending seller requests;
    /// verified sellers see totals for their own listings and the orders placed on them.
    ///
    /// # Returns
    /// - `Ok(DashboardStats)` - Totals for the caller's scope
    /// - `Err(AuthError::AccessDenied)` - Caller is neither an admin nor a verified seller
    pub async fn stats(&self, actor: &User) -> Result<DashboardStats, AppError> {
        let listing_repo = ListingRepository::new(self.db);
        let order_repo = OrderRepository::new(self.db);

        if actor.is_admin() {
            let user_repo = UserRepository::new(self.db);

            return Ok(DashboardStats {
                scope: StatsScope::Platform,
                total_users: Some(user_repo.count().await?),
                listings: listing_repo.stats(None).await?,
                orders: order_repo.stats(None).await?,
                pending_seller_requests: Some(user_repo.count_pending_seller_requests().await?),
            });
        }

        if !actor.is_verified_seller() {
            return Err(AuthError::AccessDenied(
                actor.id,
                "Dashboard requires a seller or admin account".to_string(),
            )
            .into());
        }

        Ok(DashboardStats {
            scope: StatsScope::Seller,
            total_users: None,
            listings: listing_repo.stats(Some(actor.id)).await?,
            orders: order_repo.stats(Some(actor.id)).await?,
            pending_seller_requests: None,
        })
    }
}
