use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, upload::UploadDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, AuthToken},
        service::storage::StorageService,
        state::AppState,
    },
};

/// Tag for grouping upload endpoints in OpenAPI documentation
pub static UPLOAD_TAG: &str = "upload";

/// Multipart field carrying the image.
const FILE_FIELD: &str = "file";

/// Upload a listing or profile image.
///
/// Expects a multipart body with one `file` field holding an image of at most 2 MB.
///
/// # Returns
/// - `200 OK` - Public URL of the stored image
/// - `400 Bad Request` - Missing field, not an image, or too large
/// - `401 Unauthorized` - Not signed in
/// - `502 Bad Gateway` - Storage bucket rejected the upload
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = UPLOAD_TAG,
    request_body(content_type = "multipart/form-data", description = "Image in the `file` field"),
    responses(
        (status = 200, description = "Image stored", body = UploadDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 502, description = "Storage provider failed", body = ErrorDto)
    ),
)]
pub async fn upload_image(
    State(state): State<AppState>,
    token: AuthToken,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &token).require(&[]).await?;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let url = StorageService::new(&state.http_client, &state.config.supabase)
            .upload_image(&content_type, bytes.to_vec())
            .await?;

        return Ok((StatusCode::OK, Json(UploadDto { url })));
    }

    Err(AppError::BadRequest(format!(
        "Multipart field `{}` is required",
        FILE_FIELD
    )))
}
