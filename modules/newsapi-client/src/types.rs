use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ordering accepted by `/everything`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Relevancy,
    Popularity,
    PublishedAt,
}

/// Query parameters for the `/everything` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct EverythingQuery {
    pub q: String,
    pub language: String,
    #[serde(rename = "sortBy")]
    pub sort_by: SortBy,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    pub page: u32,
}

impl EverythingQuery {
    /// English, relevancy-sorted, first page of ten.
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            language: "en".to_string(),
            sort_by: SortBy::Relevancy,
            page_size: 10,
            page: 1,
        }
    }
}

/// Query parameters for the `/top-headlines` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlinesQuery {
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    pub page: u32,
}

impl Default for HeadlinesQuery {
    fn default() -> Self {
        Self {
            country: "us".to_string(),
            category: None,
            page_size: 10,
            page: 1,
        }
    }
}

/// `{id, name}` pair NewsAPI attaches to every article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: String,
}

/// A single article as returned by `/everything` and `/top-headlines`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: ArticleSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: DateTime<Utc>,
    pub content: Option<String>,
}

/// Response body of the article endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A publisher listed by `/sources`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct SourcesResponse {
    #[serde(default)]
    pub sources: Vec<NewsSource>,
}

/// Error body NewsAPI sends alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_everything_payload() {
        let body = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": "bbc-news", "name": "BBC News"},
                    "author": null,
                    "title": "Markets rally",
                    "description": "Stocks rose",
                    "url": "https://www.bbc.com/news/business-1",
                    "urlToImage": null,
                    "publishedAt": "2024-03-01T10:00:00Z",
                    "content": null
                }
            ]
        }"#;

        let resp: ArticlesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.total_results, 2);
        assert_eq!(resp.articles.len(), 1);
        assert_eq!(resp.articles[0].source.name, "BBC News");
        assert_eq!(resp.articles[0].title.as_deref(), Some("Markets rally"));
    }

    #[test]
    fn everything_query_uses_newsapi_param_names() {
        let mut query = EverythingQuery::new("election results");
        query.page_size = 20;
        query.sort_by = SortBy::PublishedAt;

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["pageSize"], 20);
        assert_eq!(value["sortBy"], "publishedAt");
        assert_eq!(value["language"], "en");
    }

    #[test]
    fn headlines_query_omits_missing_category() {
        let value = serde_json::to_value(HeadlinesQuery::default()).unwrap();
        assert!(value.get("category").is_none());
        assert_eq!(value["country"], "us");
    }
}
