use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{SellerReviewDto, UserDto},
};

pub async fn get_seller_requests() -> Result<Vec<UserDto>, ApiError> {
    let response = send_request(get("/api/admin/seller-requests")).await?;
    parse_response(response).await
}

pub async fn review_seller_request(user_id: i32, approve: bool) -> Result<UserDto, ApiError> {
    let body = serialize_json(&SellerReviewDto { approve })?;
    let url = format!("/api/admin/seller-requests/{}", user_id);
    let response = send_request(post(&url).body(body)).await?;
    parse_response(response).await
}
