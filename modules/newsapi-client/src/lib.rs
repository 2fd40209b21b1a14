pub mod error;
pub mod types;

pub use error::{NewsApiError, Result};
pub use types::{
    Article, ArticleSource, ArticlesResponse, EverythingQuery, HeadlinesQuery, NewsSource, SortBy,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::{ErrorBody, SourcesResponse};

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

pub struct NewsApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl NewsApiClient {
    pub fn new(api_key: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent("credible/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Search every indexed article matching `query.q`.
    pub async fn everything(&self, query: &EverythingQuery) -> Result<ArticlesResponse> {
        tracing::debug!(q = %query.q, page_size = query.page_size, "NewsAPI everything");
        self.get("everything", query).await
    }

    /// Current top headlines for a country, optionally narrowed to a category.
    pub async fn top_headlines(&self, query: &HeadlinesQuery) -> Result<ArticlesResponse> {
        tracing::debug!(country = %query.country, "NewsAPI top-headlines");
        self.get("top-headlines", query).await
    }

    /// All publishers NewsAPI indexes.
    pub async fn sources(&self) -> Result<Vec<NewsSource>> {
        let no_params: [(&str, &str); 0] = [];
        let resp: SourcesResponse = self.get("sources", &no_params).await?;
        tracing::debug!(count = resp.sources.len(), "Fetched NewsAPI sources");
        Ok(resp.sources)
    }

    async fn get<Q, T>(&self, endpoint: &str, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, endpoint);
        let resp = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(endpoint, status = status.as_u16(), "NewsAPI request failed");
            return Err(NewsApiError::from_status(status.as_u16(), error_message(&body)));
        }

        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Prefer NewsAPI's structured `{code, message}` error body, fall back to the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            code: Some(code),
            message: Some(message),
        }) => format!("{code}: {message}"),
        Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => body.to_string(),
    }
}
