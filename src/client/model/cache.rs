use crate::client::model::error::ApiError;

/// Lifecycle of a value fetched from the API.
#[derive(Clone, Default, PartialEq)]
pub enum Cache<T> {
    #[default]
    NotFetched,
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Cache<T> {
    /// True once a response, successful or not, has arrived.
    pub fn is_fetched(&self) -> bool {
        matches!(self, Cache::Fetched(_) | Cache::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Flat-map the inner data, useful for chaining Options
    pub fn and_then<U, F>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> Option<U>,
    {
        self.data().and_then(f)
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_counts_as_fetched() {
        let cache: Cache<u8> = Err(ApiError {
            status: 500,
            message: "boom".to_string(),
        })
        .into();

        assert!(cache.is_fetched());
        assert!(cache.data().is_none());
        assert_eq!(cache.error().map(|e| e.status), Some(500));
    }

    #[test]
    fn loading_is_not_fetched() {
        let cache: Cache<u8> = Cache::Loading;

        assert!(cache.is_loading());
        assert!(!cache.is_fetched());
    }
}
