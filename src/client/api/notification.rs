use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::notification::{ContactOwnerDto, NotificationDto},
};

pub async fn get_notifications() -> Result<Vec<NotificationDto>, ApiError> {
    let response = send_request(get("/api/notifications")).await?;
    parse_response(response).await
}

pub async fn contact_owner(payload: ContactOwnerDto) -> Result<NotificationDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/notifications").body(body)).await?;
    parse_response(response).await
}

pub async fn mark_notification_read(id: i32) -> Result<NotificationDto, ApiError> {
    let url = format!("/api/notifications/read/{}", id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn delete_notification(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/notifications/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
