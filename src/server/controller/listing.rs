use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        listing::{ListingDto, ListingFormDto, ListingQueryDto, ListingStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken, Permission},
        service::listing::ListingService,
        state::AppState,
    },
};

/// Tag for grouping listing endpoints in OpenAPI documentation
pub static LISTING_TAG: &str = "listing";

/// Create a new listing.
///
/// # Access Control
/// - `Seller` - Verified sellers and admins
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `token` - Session token of the caller
/// - `payload` - Listing form
///
/// # Returns
/// - `201 Created` - Created listing
/// - `400 Bad Request` - Form failed validation
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Not a verified seller
#[utoipa::path(
    post,
    path = "/api/listing/create",
    tag = LISTING_TAG,
    request_body = ListingFormDto,
    responses(
        (status = 201, description = "Listing created", body = ListingDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a verified seller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_listing(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<ListingFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::Seller])
        .await?;

    let listing = ListingService::new(&state.db).create(&user, payload).await?;

    Ok((StatusCode::CREATED, Json(listing.into_dto())))
}

/// Update a listing.
///
/// # Access Control
/// - Listing owner or admin
///
/// # Returns
/// - `200 OK` - Updated listing
/// - `400 Bad Request` - Form failed validation
/// - `403 Forbidden` - Not the owner
/// - `404 Not Found` - No listing with that id
#[utoipa::path(
    post,
    path = "/api/listing/update/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    request_body = ListingFormDto,
    responses(
        (status = 200, description = "Listing updated", body = ListingDto),
        (status = 400, description = "Invalid listing data", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn update_listing(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<ListingFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let listing = ListingService::new(&state.db)
        .update(&user, id, payload)
        .await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Delete a listing.
///
/// # Access Control
/// - Listing owner or admin
#[utoipa::path(
    delete,
    path = "/api/listing/delete/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn delete_listing(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    ListingService::new(&state.db).delete(&user, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Listing has been deleted"))))
}

#[utoipa::path(
    get,
    path = "/api/listing/get/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing", body = ListingDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let listing = ListingService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Search listings.
///
/// Boolean filters only narrow results when set to `true`; unknown sort and order
/// values fall back to newest first.
#[utoipa::path(
    get,
    path = "/api/listing/get",
    tag = LISTING_TAG,
    params(ListingQueryDto),
    responses(
        (status = 200, description = "Matching listings", body = Vec<ListingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let listings = ListingService::new(&state.db).search(query).await?;
    let listings: Vec<ListingDto> = listings.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(listings)))
}

/// Mark a listing available, sold or rented.
///
/// # Access Control
/// - Listing owner or admin
#[utoipa::path(
    post,
    path = "/api/listing/status/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    request_body = ListingStatusDto,
    responses(
        (status = 200, description = "Listing updated", body = ListingDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn set_listing_status(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<ListingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let listing = ListingService::new(&state.db)
        .set_status(&user, id, payload.status)
        .await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Toggle whether a listing is featured on the home page.
///
/// # Access Control
/// - `Admin` - Only admins can feature listings
#[utoipa::path(
    post,
    path = "/api/listing/featured/{id}",
    tag = LISTING_TAG,
    params(("id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing updated", body = ListingDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn toggle_featured(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token)
        .require(&[Permission::Admin])
        .await?;

    let listing = ListingService::new(&state.db)
        .toggle_featured(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}
