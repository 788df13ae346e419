use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::user::{SignInDto, SignUpDto, UserDto},
};

/// Returns the signed-in user, or `None` when there is no valid session.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let response = send_request(get("/api/auth/user")).await?;
    parse_response(response).await
}

pub async fn sign_up(payload: SignUpDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/signup").body(body)).await?;
    parse_response(response).await
}

pub async fn sign_in(payload: SignInDto) -> Result<UserDto, ApiError> {
    let body = serialize_json(&payload)?;
    let response = send_request(post("/api/auth/signin").body(body)).await?;
    parse_response(response).await
}

pub async fn sign_out() -> Result<(), ApiError> {
    let response = send_request(get("/api/auth/signout")).await?;
    parse_empty_response(response).await
}
