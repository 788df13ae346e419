use super::*;
use crate::server::service::storage::{StorageService, MAX_IMAGE_BYTES};

/// Tests uploading an image.
///
/// Verifies that the object lands under `listings/` in the configured bucket.
///
/// Expected: Ok(String) public URL for the stored object
#[tokio::test]
async fn uploads_image_and_returns_public_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(wiremock::matchers::path_regex(
            r"^/storage/v1/object/listing-images/listings/\d+-[a-z0-9]{8}\.png$",
        ))
        .and(header("authorization", "Bearer supabase-key"))
        .and(header("content-type", "image/png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Key": "listing-images/listings/x.png"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let url = StorageService::new(&http_client, &config.supabase)
        .upload_image("image/png", vec![1, 2, 3])
        .await
        .unwrap();

    assert!(url.starts_with(&format!(
        "{}/storage/v1/object/public/listing-images/listings/",
        server.uri()
    )));
    assert!(url.ends_with(".png"));
}

/// Tests rejected uploads.
///
/// Expected: BadRequest for non-images and oversized files, ExternalErr when the
/// bucket refuses the object
#[tokio::test]
async fn rejects_invalid_uploads() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let http_client = reqwest::Client::new();
    let service = StorageService::new(&http_client, &config.supabase);

    assert!(matches!(
        service.upload_image("text/plain", vec![1]).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service
            .upload_image("image/png", vec![0; MAX_IMAGE_BYTES + 1])
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.upload_image("image/png", vec![1]).await,
        Err(AppError::ExternalErr(_))
    ));
}
