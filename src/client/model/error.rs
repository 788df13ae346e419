use crate::model::api::ErrorDto;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub message: String,
}

impl From<ErrorDto> for ApiError {
    fn from(dto: ErrorDto) -> Self {
        Self {
            status: dto.status_code,
            message: dto.message,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
