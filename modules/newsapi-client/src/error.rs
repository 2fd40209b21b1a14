use thiserror::Error;

pub type Result<T> = std::result::Result<T, NewsApiError>;

#[derive(Debug, Error)]
pub enum NewsApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Rate limited by NewsAPI: {0}")]
    RateLimited(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl NewsApiError {
    /// Classify a non-success HTTP status. NewsAPI reports rate limiting as 429
    /// and bad or missing keys as 401.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => NewsApiError::Unauthorized(message),
            429 => NewsApiError::RateLimited(message),
            _ => NewsApiError::Api { status, message },
        }
    }
}

impl From<reqwest::Error> for NewsApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NewsApiError::Timeout(err.to_string())
        } else if err.is_decode() {
            NewsApiError::Parse(err.to_string())
        } else {
            NewsApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for NewsApiError {
    fn from(err: serde_json::Error) -> Self {
        NewsApiError::Parse(err.to_string())
    }
}
