// Collaborator seams for the analyzer.
//
// NewsSearchService is the only thing the engine calls out to; every analysis
// goes through an injected value, so tests swap in testing::MockSearchService.
// AnalysisRepository is the caller-side persistence capability. The engine
// never touches it; services that keep history do.

use async_trait::async_trait;
use uuid::Uuid;

use credible_common::{
    CredibleError, SearchError, SearchOptions, SearchResults, SourceCredibility,
};

use crate::repository::{AnalysisRecord, AnalysisStats, RecordPage};

// ---------------------------------------------------------------------------
// NewsSearchService
// ---------------------------------------------------------------------------

#[async_trait]
pub trait NewsSearchService: Send + Sync {
    /// Search indexed articles similar to `query`. Implementations own timeouts
    /// and any retry policy; the analyzer makes exactly one attempt.
    async fn search_similar_articles(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<SearchResults, SearchError>;

    /// Decide whether the publisher behind `url` is a recognized news source.
    async fn check_source_credibility(&self, url: &str) -> Result<SourceCredibility, SearchError>;
}

// ---------------------------------------------------------------------------
// AnalysisRepository
// ---------------------------------------------------------------------------

#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// Store a finished analysis. Returns the record id.
    async fn save(&self, record: AnalysisRecord) -> Result<Uuid, CredibleError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AnalysisRecord>, CredibleError>;

    /// Newest first. `page` is 1-based.
    async fn find_by_user(
        &self,
        user_id: &str,
        page: usize,
        limit: usize,
    ) -> Result<RecordPage, CredibleError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, CredibleError>;

    async fn stats(&self, user_id: &str) -> Result<AnalysisStats, CredibleError>;
}
