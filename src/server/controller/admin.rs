use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{SellerReviewDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken, Permission},
        service::admin::SellerReviewService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// List pending seller requests.
///
/// # Access Control
/// - `Admin` - Only admins review seller requests
///
/// # Returns
/// - `200 OK` - Users awaiting review, oldest request first
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    get,
    path = "/api/admin/seller-requests",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Pending seller requests", body = Vec<UserDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_seller_requests(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Admin])
        .await?;

    let users = SellerReviewService::new(&state.db, &state.http_client, &state.config.brevo)
        .get_pending()
        .await?;
    let users: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users)))
}

/// Approve or reject a seller request.
///
/// # Access Control
/// - `Admin` - Only admins review seller requests
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - User has no pending request
/// - `404 Not Found` - User not found
#[utoipa::path(
    post,
    path = "/api/admin/seller-requests/{id}",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = SellerReviewDto,
    responses(
        (status = 200, description = "Request reviewed", body = UserDto),
        (status = 400, description = "No pending request", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn review_seller_request(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<SellerReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Admin])
        .await?;

    let user = SellerReviewService::new(&state.db, &state.http_client, &state.config.brevo)
        .review(id, payload.approve)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
