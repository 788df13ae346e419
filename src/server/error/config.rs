use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the full list of required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL could not be parsed.
    ///
    /// # Fields
    /// - `name` - Which setting held the URL
    /// - `reason` - Parser error message
    #[error("Invalid URL for {name}: {reason}")]
    InvalidUrl { name: String, reason: String },
}
