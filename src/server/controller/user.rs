use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        listing::ListingDto,
        user::{SavedToggleDto, UpdateUserDto, UserContactDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::{expired_session_cookie, AuthGuard, AuthToken},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Update the signed-in user's profile.
///
/// Only fields present in the body change; a new password is re-hashed.
///
/// # Access Control
/// - Account holder only
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid field value
/// - `401 Unauthorized` - Not signed in
/// - `403 Forbidden` - Updating another account
/// - `409 Conflict` - Email or username taken
#[utoipa::path(
    post,
    path = "/api/user/update/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Invalid field value", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the account holder", body = ErrorDto),
        (status = 409, description = "Email or username taken", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let updated = UserService::new(&state.db).update(&user, id, payload).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Delete an account.
///
/// Deleting your own account also clears the session cookie.
///
/// # Access Control
/// - Account holder or admin
#[utoipa::path(
    delete,
    path = "/api/user/delete/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Account deleted", body = MessageDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the account holder or an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    UserService::new(&state.db).delete(&user, id).await?;

    let body = Json(MessageDto::new("User has been deleted"));
    if user.id == id {
        return Ok((
            StatusCode::OK,
            [(header::SET_COOKIE, expired_session_cookie().to_string())],
            body,
        )
            .into_response());
    }

    Ok((StatusCode::OK, body).into_response())
}

/// Get the listings owned by the signed-in user.
#[utoipa::path(
    get,
    path = "/api/user/listings/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User's listings", body = Vec<ListingDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not the account holder", body = ErrorDto)
    ),
)]
pub async fn get_user_listings(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let listings = UserService::new(&state.db).get_listings(&user, id).await?;
    let listings: Vec<ListingDto> = listings.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(listings)))
}

/// Get a user's contact details.
///
/// Used by the contact-landlord form; requires sign-in so email addresses are not
/// exposed to anonymous visitors.
#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Contact details", body = UserContactDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user_contact(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    let user = UserService::new(&state.db).get_contact(id).await?;

    Ok((StatusCode::OK, Json(user.into_contact_dto())))
}

/// Save or unsave a listing.
#[utoipa::path(
    post,
    path = "/api/user/saved/{listing_id}",
    tag = USER_TAG,
    params(("listing_id" = i32, Path, description = "Listing id")),
    responses(
        (status = 200, description = "New saved state", body = SavedToggleDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn toggle_saved_listing(
    State(state): State<AppState>,
    token: AuthToken,
    Path(listing_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let saved = UserService::new(&state.db)
        .toggle_saved(&user, listing_id)
        .await?;

    Ok((StatusCode::OK, Json(SavedToggleDto { saved })))
}

#[utoipa::path(
    get,
    path = "/api/user/saved",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Saved listings", body = Vec<ListingDto>),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn get_saved_listings(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let listings = UserService::new(&state.db).get_saved(&user).await?;
    let listings: Vec<ListingDto> = listings.into_iter().map(|l| l.into_dto()).collect();

    Ok((StatusCode::OK, Json(listings)))
}

/// Request verification as a seller.
///
/// # Returns
/// - `200 OK` - User with seller status `pending`
/// - `400 Bad Request` - Already verified, already pending, or an admin
#[utoipa::path(
    post,
    path = "/api/user/seller-request",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Request submitted", body = UserDto),
        (status = 400, description = "Request not allowed", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn request_seller(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let updated = UserService::new(&state.db).request_seller(&user).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}
