use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::{
        listing::ListingDto,
        user::{SavedToggleDto, UpdateUserDto, UserContactDto, UserDto},
    },
};

pub async fn update_user(id: i32, payload: UpdateUserDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/user/update/{}", id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_user(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/user/delete/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn get_user_listings(id: i32) -> Result<Vec<ListingDto>, ApiError> {
    let url = format!("/api/user/listings/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_user_contact(id: i32) -> Result<UserContactDto, ApiError> {
    let url = format!("/api/user/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn toggle_saved_listing(listing_id: i32) -> Result<SavedToggleDto, ApiError> {
    let url = format!("/api/user/saved/{}", listing_id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}

pub async fn get_saved_listings() -> Result<Vec<ListingDto>, ApiError> {
    let response = send_request(get("/api/user/saved")).await?;
    parse_response(response).await
}

pub async fn request_seller() -> Result<UserDto, ApiError> {
    let response = send_request(post("/api/user/seller-request")).await?;
    parse_response(response).await
}
