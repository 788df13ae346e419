use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        ai::{ChatReplyDto, ChatRequestDto, DescriptionDto, DescriptionRequestDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken, Permission},
        service::ai::AiService,
        state::AppState,
    },
};

/// Tag for grouping AI endpoints in OpenAPI documentation
pub static AI_TAG: &str = "ai";

/// Generate a listing description from its attributes.
///
/// # Access Control
/// - `Seller` - Verified sellers and admins, who are the only users writing listings
#[utoipa::path(
    post,
    path = "/api/ai/description",
    tag = AI_TAG,
    request_body = DescriptionRequestDto,
    responses(
        (status = 200, description = "Generated description", body = DescriptionDto),
        (status = 400, description = "Missing listing details", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a verified seller", body = ErrorDto),
        (status = 502, description = "AI provider failed", body = ErrorDto)
    ),
)]
pub async fn generate_description(
    State(state): State<AppState>,
    token: AuthToken,
    Json(payload): Json<DescriptionRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token)
        .require(&[Permission::Seller])
        .await?;

    let description = AiService::new(&state.http_client, &state.config.gemini)
        .describe(&payload)
        .await?;

    Ok((StatusCode::OK, Json(DescriptionDto { description })))
}

/// Ask the chat assistant.
///
/// Open to every visitor; the client sends the whole conversation each time.
#[utoipa::path(
    post,
    path = "/api/ai/chat",
    tag = AI_TAG,
    request_body = ChatRequestDto,
    responses(
        (status = 200, description = "Assistant reply", body = ChatReplyDto),
        (status = 400, description = "Invalid conversation", body = ErrorDto),
        (status = 502, description = "AI provider failed", body = ErrorDto)
    ),
)]
pub async fn chat(
    State(state): State<AppState>,
    Json(payload): Json<ChatRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let reply = AiService::new(&state.http_client, &state.config.gemini)
        .chat(&payload.messages)
        .await?;

    Ok((StatusCode::OK, Json(ChatReplyDto { reply })))
}
