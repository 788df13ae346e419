use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, send_request, serialize_json,
        },
        model::error::ApiError,
    },
    model::listing::{ListingDto, ListingFormDto, ListingQueryDto, ListingStatus, ListingStatusDto},
};

pub async fn create_listing(payload: ListingFormDto) -> Result<ListingDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/listing/create").body(body)).await?;
    parse_response(response).await
}

pub async fn update_listing(id: i32, payload: ListingFormDto) -> Result<ListingDto, ApiError> {
    let body = serialize_json(&payload)?;
    let url = format!("/api/listing/update/{}", id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_listing(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/listing/delete/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}

pub async fn get_listing(id: i32) -> Result<ListingDto, ApiError> {
    let url = format!("/api/listing/get/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn search_listings(query: &ListingQueryDto) -> Result<Vec<ListingDto>, ApiError> {
    let url = format!("/api/listing/get?{}", query.to_query_string());
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn set_listing_status(id: i32, status: ListingStatus) -> Result<ListingDto, ApiError> {
    let body = serialize_json(&ListingStatusDto { status })?;
    let url = format!("/api/listing/status/{}", id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn toggle_featured(id: i32) -> Result<ListingDto, ApiError> {
    let url = format!("/api/listing/featured/{}", id);
    let response = send_request(post(&url)).await?;
    parse_response(response).await
}
