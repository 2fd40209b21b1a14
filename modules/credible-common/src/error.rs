use thiserror::Error;

/// Failure reported by a news search collaborator. Every variant is recoverable
/// from the analyzer's point of view; they stay distinct so callers and logs can
/// tell a rate limit from a bad key from a dropped connection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Search timed out: {0}")]
    Timeout(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Error, Debug)]
pub enum CredibleError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
