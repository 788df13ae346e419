use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        service::dashboard::DashboardService,
        state::AppState,
    },
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static DASHBOARD_TAG: &str = "dashboard";

/// Get dashboard statistics.
///
/// Admins receive platform-wide totals; verified sellers receive totals for their own
/// listings and the orders placed on them.
///
/// # Access Control
/// - Admin or verified seller
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Neither admin nor verified seller", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let stats = DashboardService::new(&state.db).stats(&user).await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}
