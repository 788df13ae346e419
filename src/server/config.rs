use crate::server::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";
const RAZORPAY_API_URL: &str = "https://api.razorpay.com";
const BREVO_API_URL: &str = "https://api.brevo.com";
const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com";

const DEFAULT_SENDER_NAME: &str = "OasisSpace";
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Google OAuth2 client credentials and endpoints.
#[derive(Clone, Debug)]
pub struct GoogleConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

/// Razorpay payment gateway credentials.
#[derive(Clone, Debug)]
pub struct RazorpayConfig {
    pub api_url: String,
    pub key_id: String,
    pub key_secret: String,
}

/// Supabase storage bucket used for listing images.
#[derive(Clone, Debug)]
pub struct SupabaseConfig {
    pub url: String,
    pub service_key: String,
    pub bucket: String,
}

/// Brevo transactional email settings.
#[derive(Clone, Debug)]
pub struct BrevoConfig {
    pub api_url: String,
    pub api_key: String,
    pub sender_email: String,
    pub sender_name: String,
}

/// Gemini generative language API settings.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub app_url: String,
    pub jwt_secret: String,

    pub google: GoogleConfig,
    pub razorpay: RazorpayConfig,
    pub supabase: SupabaseConfig,
    pub brevo: BrevoConfig,
    pub gemini: GeminiConfig,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - Every required variable was present
    /// - `Err(AppError::ConfigErr(MissingEnvVar))` - Names the first missing variable
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require_env("DATABASE_URL")?,
            app_url: require_env("APP_URL")?,
            jwt_secret: require_env("JWT_SECRET")?,
            google: GoogleConfig {
                client_id: require_env("GOOGLE_CLIENT_ID")?,
                client_secret: require_env("GOOGLE_CLIENT_SECRET")?,
                redirect_url: require_env("GOOGLE_REDIRECT_URL")?,
                auth_url: GOOGLE_AUTH_URL.to_string(),
                token_url: GOOGLE_TOKEN_URL.to_string(),
                userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            },
            razorpay: RazorpayConfig {
                api_url: RAZORPAY_API_URL.to_string(),
                key_id: require_env("RAZORPAY_KEY_ID")?,
                key_secret: require_env("RAZORPAY_KEY_SECRET")?,
            },
            supabase: SupabaseConfig {
                url: require_env("SUPABASE_URL")?,
                service_key: require_env("SUPABASE_SERVICE_KEY")?,
                bucket: require_env("SUPABASE_BUCKET")?,
            },
            brevo: BrevoConfig {
                api_url: BREVO_API_URL.to_string(),
                api_key: require_env("BREVO_API_KEY")?,
                sender_email: require_env("BREVO_SENDER_EMAIL")?,
                sender_name: std::env::var("BREVO_SENDER_NAME")
                    .unwrap_or_else(|_| DEFAULT_SENDER_NAME.to_string()),
            },
            gemini: GeminiConfig {
                api_url: GEMINI_API_URL.to_string(),
                api_key: require_env("GEMINI_API_KEY")?,
                model: std::env::var("GEMINI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string()),
            },
        })
    }
}

fn require_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}
