use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

/// JSON body returned for every failed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ErrorDto {
    /// Always `false` for errors.
    pub success: bool,
    /// HTTP status code mirrored into the body.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

impl ErrorDto {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status_code,
            message: message.into(),
        }
    }
}

/// Plain acknowledgement for operations without a resource to return.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
