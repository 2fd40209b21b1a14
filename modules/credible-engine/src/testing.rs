// Test doubles for the analyzer.
//
// MockSearchService stands in for NewsSearchService: HashMap-based
// query→results and url→credibility, with switchable failures and a call log
// so tests can assert which queries (and page sizes) the analyzer sent.
//
// Plus helpers for building ArticleRef / SearchResults fixtures.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use credible_common::{
    ArticleRef, SearchError, SearchOptions, SearchResults, SourceCredibility, SourceInfo,
};

use crate::traits::NewsSearchService;

// ---------------------------------------------------------------------------
// MockSearchService
// ---------------------------------------------------------------------------

/// One recorded `search_similar_articles` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub page_size: u32,
}

/// HashMap-based search collaborator. Unregistered queries and URLs return
/// `Err`, like an unreachable backend would.
/// Builder pattern: `.on_search()`, `.on_any_search()`, `.failing_search()`,
/// `.on_source()`, `.failing_sources()`.
pub struct MockSearchService {
    searches: HashMap<String, SearchResults>,
    fallback_search: Option<SearchResults>,
    search_failure: Option<SearchError>,
    sources: HashMap<String, SourceCredibility>,
    source_failure: Option<SearchError>,
    search_calls: Mutex<Vec<SearchCall>>,
    source_calls: Mutex<Vec<String>>,
}

impl MockSearchService {
    pub fn new() -> Self {
        Self {
            searches: HashMap::new(),
            fallback_search: None,
            search_failure: None,
            sources: HashMap::new(),
            source_failure: None,
            search_calls: Mutex::new(Vec::new()),
            source_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on_search(mut self, query: &str, results: SearchResults) -> Self {
        self.searches.insert(query.to_string(), results);
        self
    }

    /// Answer every query not registered with `on_search`.
    pub fn on_any_search(mut self, results: SearchResults) -> Self {
        self.fallback_search = Some(results);
        self
    }

    /// Every search fails with `error`, registered or not.
    pub fn failing_search(mut self, error: SearchError) -> Self {
        self.search_failure = Some(error);
        self
    }

    pub fn on_source(mut self, url: &str, credibility: SourceCredibility) -> Self {
        self.sources.insert(url.to_string(), credibility);
        self
    }

    /// Every credibility check fails with `error`.
    pub fn failing_sources(mut self, error: SearchError) -> Self {
        self.source_failure = Some(error);
        self
    }

    pub fn search_calls(&self) -> Vec<SearchCall> {
        self.search_calls.lock().unwrap().clone()
    }

    pub fn source_calls(&self) -> Vec<String> {
        self.source_calls.lock().unwrap().clone()
    }
}

impl Default for MockSearchService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsSearchService for MockSearchService {
    async fn search_similar_articles(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, SearchError> {
        self.search_calls.lock().unwrap().push(SearchCall {
            query: query.to_string(),
            page_size: options.page_size,
        });

        if let Some(ref error) = self.search_failure {
            return Err(error.clone());
        }

        self.searches
            .get(query)
            .or(self.fallback_search.as_ref())
            .cloned()
            .ok_or_else(|| {
                SearchError::Network(format!("MockSearchService: no search registered for {query}"))
            })
    }

    async fn check_source_credibility(&self, url: &str) -> Result<SourceCredibility, SearchError> {
        self.source_calls.lock().unwrap().push(url.to_string());

        if let Some(ref error) = self.source_failure {
            return Err(error.clone());
        }

        self.sources.get(url).cloned().ok_or_else(|| {
            SearchError::Network(format!("MockSearchService: no source registered for {url}"))
        })
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Article with a fixed publication time so outcomes compare equal across runs.
pub fn article(title: &str, url: &str) -> ArticleRef {
    ArticleRef {
        title: title.to_string(),
        source_name: "Test Wire".to_string(),
        url: url.to_string(),
        published_at: Utc
            .with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_default(),
        description: None,
        author: None,
    }
}

pub fn results(total_results: u64, articles: Vec<ArticleRef>) -> SearchResults {
    SearchResults {
        total_results,
        articles,
    }
}

pub fn no_results() -> SearchResults {
    results(0, Vec::new())
}

pub fn verified(name: &str, url: &str) -> SourceCredibility {
    SourceCredibility::verified(SourceInfo {
        id: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        url: url.to_string(),
    })
}

pub fn not_found() -> SourceCredibility {
    SourceCredibility::unverified("Source not found in verified news sources")
}
