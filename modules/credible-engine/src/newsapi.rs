use async_trait::async_trait;
use tracing::info;

use credible_common::{
    ArticleRef, Config, SearchError, SearchOptions, SearchResults, SortOrder, SourceCredibility,
    SourceInfo,
};
use newsapi_client::{Article, EverythingQuery, NewsApiClient, NewsApiError, NewsSource, SortBy};

use crate::sources::extract_domain;
use crate::traits::NewsSearchService;

/// `NewsSearchService` backed by newsapi.org.
pub struct NewsApiSearchService {
    client: NewsApiClient,
    language: String,
}

impl NewsApiSearchService {
    pub fn new(client: NewsApiClient, language: &str) -> Self {
        Self {
            client,
            language: language.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let client = NewsApiClient::new(
            &config.news_api_key,
            &config.news_api_base_url,
            config.news_api_timeout,
        )
        .map_err(to_search_error)?;
        Ok(Self::new(client, &config.news_api_language))
    }

    pub fn client(&self) -> &NewsApiClient {
        &self.client
    }
}

#[async_trait]
impl NewsSearchService for NewsApiSearchService {
    async fn search_similar_articles(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, SearchError> {
        let mut request = EverythingQuery::new(query);
        request.page_size = options.page_size;
        request.page = options.page.unwrap_or(1);
        request.language = options
            .language
            .clone()
            .unwrap_or_else(|| self.language.clone());
        request.sort_by = sort_by(options.sort_by.unwrap_or_default());

        let resp = self.client.everything(&request).await.map_err(to_search_error)?;
        info!(
            query,
            total_results = resp.total_results,
            returned = resp.articles.len(),
            "NewsAPI search"
        );

        Ok(SearchResults {
            total_results: resp.total_results,
            articles: resp.articles.into_iter().map(to_article_ref).collect(),
        })
    }

    async fn check_source_credibility(&self, url: &str) -> Result<SourceCredibility, SearchError> {
        let Some(domain) = extract_domain(url) else {
            return Ok(SourceCredibility::unverified("Invalid URL"));
        };

        let sources = self.client.sources().await.map_err(to_search_error)?;
        Ok(match find_matching_source(&sources, &domain) {
            Some(source) => SourceCredibility::verified(SourceInfo {
                id: source.id.clone(),
                name: source.name.clone(),
                url: source.url.clone(),
            }),
            None => SourceCredibility::unverified("Source not found in verified news sources"),
        })
    }
}

/// A NewsAPI source matches when its homepage contains the domain, or its id
/// (e.g. `bbc-news`, `cnn`) appears in the domain.
fn find_matching_source<'a>(sources: &'a [NewsSource], domain: &str) -> Option<&'a NewsSource> {
    sources.iter().find(|source| {
        source.url.contains(domain) || (!source.id.is_empty() && domain.contains(&source.id))
    })
}

fn sort_by(order: SortOrder) -> SortBy {
    match order {
        SortOrder::Relevancy => SortBy::Relevancy,
        SortOrder::Popularity => SortBy::Popularity,
        SortOrder::PublishedAt => SortBy::PublishedAt,
    }
}

fn to_article_ref(article: Article) -> ArticleRef {
    ArticleRef {
        title: article.title.unwrap_or_default(),
        source_name: article.source.name,
        url: article.url,
        published_at: article.published_at,
        description: article.description,
        author: article.author,
    }
}

pub fn to_search_error(err: NewsApiError) -> SearchError {
    match err {
        NewsApiError::Network(msg) => SearchError::Network(msg),
        NewsApiError::Timeout(msg) => SearchError::Timeout(msg),
        NewsApiError::RateLimited(msg) => SearchError::RateLimited(msg),
        NewsApiError::Unauthorized(msg) => SearchError::Unauthorized(msg),
        NewsApiError::Api { status, message } => SearchError::Api { status, message },
        NewsApiError::Parse(msg) => SearchError::Parse(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use newsapi_client::ArticleSource;

    fn source(id: &str, url: &str) -> NewsSource {
        NewsSource {
            id: id.into(),
            name: id.to_uppercase(),
            description: None,
            url: url.into(),
            category: Some("general".into()),
            language: Some("en".into()),
            country: Some("us".into()),
        }
    }

    #[test]
    fn source_matches_by_homepage() {
        let sources = vec![
            source("bbc-news", "http://www.bbc.co.uk/news"),
            source("reuters", "https://www.reuters.com"),
        ];
        let found = find_matching_source(&sources, "reuters.com").unwrap();
        assert_eq!(found.id, "reuters");
    }

    #[test]
    fn source_matches_by_id_in_domain() {
        let sources = vec![source("cnn", "http://us.cnn.example")];
        assert!(find_matching_source(&sources, "edition.cnn.com").is_some());
    }

    #[test]
    fn empty_source_id_never_matches() {
        let sources = vec![source("", "https://unrelated.example")];
        assert!(find_matching_source(&sources, "blog.example").is_none());
    }

    #[test]
    fn article_without_title_maps_to_empty_title() {
        let article = Article {
            source: ArticleSource {
                id: None,
                name: "Local Paper".into(),
            },
            author: Some("Desk".into()),
            title: None,
            description: None,
            url: "https://paper.example/a".into(),
            url_to_image: None,
            published_at: Utc::now(),
            content: None,
        };
        let mapped = to_article_ref(article);
        assert_eq!(mapped.title, "");
        assert_eq!(mapped.source_name, "Local Paper");
        assert_eq!(mapped.author.as_deref(), Some("Desk"));
    }

    #[test]
    fn client_errors_keep_their_kind() {
        assert_eq!(
            to_search_error(NewsApiError::RateLimited("slow down".into())),
            SearchError::RateLimited("slow down".into())
        );
        assert_eq!(
            to_search_error(NewsApiError::Api {
                status: 502,
                message: "bad gateway".into()
            }),
            SearchError::Api {
                status: 502,
                message: "bad gateway".into()
            }
        );
    }
}
