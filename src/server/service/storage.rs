//! Listing image uploads to a Supabase storage bucket.

use chrono::Utc;
use rand::{distr::Alphanumeric, Rng};

use crate::server::{
    config::SupabaseConfig,
    error::{external::ExternalError, AppError},
};

const PROVIDER: &str = "supabase";

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

pub struct StorageService<'a> {
    http_client: &'a reqwest::Client,
    config: &'a SupabaseConfig,
}

impl<'a> StorageService<'a> {
    pub fn new(http_client: &'a reqwest::Client, config: &'a SupabaseConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Uploads an image and returns its public URL.
    ///
    /// Objects are stored under `listings/` with a timestamped random name so uploads
    /// never overwrite each other.
    ///
    /// # Arguments
    /// - `content_type` - MIME type declared by the client
    /// - `bytes` - File contents
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(AppError::BadRequest)` - Not an image, empty, or larger than 2 MB
    /// - `Err(AppError::ExternalErr)` - Supabase rejected the upload
    pub async fn upload_image(
        &self,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, AppError> {
        validate_image(content_type, bytes.len())?;

        let path = object_path(content_type);
        let response = self
            .http_client
            .post(format!(
                "{}/storage/v1/object/{}/{}",
                self.config.url, self.config.bucket, path
            ))
            .bearer_auth(&self.config.service_key)
            .header("apikey", &self.config.service_key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        ExternalError::check(PROVIDER, response).await?;

        Ok(format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url, self.config.bucket, path
        ))
    }
}

/// Checks the declared type and size of an upload.
pub fn validate_image(content_type: &str, len: usize) -> Result<(), AppError> {
    if !content_type.starts_with("image/") {
        return Err(AppError::BadRequest("Only image uploads are allowed".to_string()));
    }
    if len == 0 {
        return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
    }
    if len > MAX_IMAGE_BYTES {
        return Err(AppError::BadRequest(
            "Images must be 2 MB or smaller".to_string(),
        ));
    }

    Ok(())
}

fn object_path(content_type: &str) -> String {
    let extension = match content_type {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/avif" => "avif",
        _ => "img",
    };
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();

    format!(
        "listings/{}-{}.{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase(),
        extension
    )
}
