use crate::server::{
    config::{BrevoConfig, Config, GeminiConfig, GoogleConfig, RazorpayConfig, SupabaseConfig},
    error::{auth::AuthError, AppError},
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

mod admin;
mod ai;
mod dashboard;
mod listing;
mod payment;
mod storage;

const KEY_SECRET: &str = "razorpay-secret";

/// Configuration pointing every provider at one mock server.
fn test_config(mock_url: &str) -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        app_url: "http://localhost:8080".to_string(),
        jwt_secret: "test-secret".to_string(),
        google: GoogleConfig {
            client_id: "google-client".to_string(),
            client_secret: "google-secret".to_string(),
            redirect_url: "http://localhost:8080/api/auth/google/callback".to_string(),
            auth_url: format!("{}/o/oauth2/v2/auth", mock_url),
            token_url: format!("{}/token", mock_url),
            userinfo_url: format!("{}/v1/userinfo", mock_url),
        },
        razorpay: RazorpayConfig {
            api_url: mock_url.to_string(),
            key_id: "rzp_test_key".to_string(),
            key_secret: KEY_SECRET.to_string(),
        },
        supabase: SupabaseConfig {
            url: mock_url.to_string(),
            service_key: "supabase-key".to_string(),
            bucket: "listing-images".to_string(),
        },
        brevo: BrevoConfig {
            api_url: mock_url.to_string(),
            api_key: "brevo-key".to_string(),
            sender_email: "noreply@oasisspace.test".to_string(),
            sender_name: "OasisSpace".to_string(),
        },
        gemini: GeminiConfig {
            api_url: mock_url.to_string(),
            api_key: "gemini-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        },
    }
}

/// Accepts every Brevo email send.
async fn mount_mail(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v3/smtp/email"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "messageId": "<test@brevo>"
        })))
        .mount(server)
        .await;
}

fn assert_access_denied<T: std::fmt::Debug>(result: Result<T, AppError>) {
    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _))) => {}
        other => panic!("Expected AccessDenied error, got: {:?}", other),
    }
}
