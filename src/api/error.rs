use thiserror::Error;

/// Failure of a single remote call
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed object does not exist (HTTP 404)
    #[error("resource not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("authentication failed: {0}")]
    Auth(String),
}

impl ApiError {
    /// Classify a non-success HTTP response
    pub fn from_status(status: u16, url: &str, body: String) -> Self {
        match status {
            404 => ApiError::NotFound { url: url.to_string() },
            _ => ApiError::Status { status, body },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_404_is_not_found() {
        let err = ApiError::from_status(404, "https://host/x", String::new());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_other_statuses_keep_body() {
        let err = ApiError::from_status(403, "https://host/x", "forbidden".into());
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "unexpected HTTP status 403: forbidden");
    }
}
