use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        notification::{ContactOwnerDto, NotificationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    responses(
        (status = 200, description = "Caller's notifications, newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    token: AuthToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let notifications = NotificationService::new(&state.db, &state.http_client, &state.config.brevo)
        .list(&user)
        .await?;
    let notifications: Vec<NotificationDto> =
        notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications)))
}

/// Message the owner of a listing.
///
/// Stores the message as a notification for the owner and emails it to them.
///
/// # Returns
/// - `201 Created` - Stored notification
/// - `400 Bad Request` - Empty or overlong message, or the caller owns the listing
/// - `401 Unauthorized` - Not signed in
/// - `404 Not Found` - Listing not found
#[utoipa::path(
    post,
    path = "/api/notifications",
    tag = NOTIFICATION_TAG,
    request_body = ContactOwnerDto,
    responses(
        (status = 201, description = "Message sent", body = NotificationDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto)
    ),
)]
pub async fn contact_owner(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<ContactOwnerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let notification = NotificationService::new(&state.db, &state.http_client, &state.config.brevo)
        .contact_owner(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(notification.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/notifications/read/{id}",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationDto),
        (status = 403, description = "Not the recipient", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn mark_notification_read(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    let notification = NotificationService::new(&state.db, &state.http_client, &state.config.brevo)
        .mark_read(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(notification.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/notifications/{id}",
    tag = NOTIFICATION_TAG,
    params(("id" = i32, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification deleted", body = MessageDto),
        (status = 403, description = "Not the recipient", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto)
    ),
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    token: AuthToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &token).require(&[]).await?;

    NotificationService::new(&state.db, &state.http_client, &state.config.brevo)
        .delete(&user, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Notification deleted"))))
}
