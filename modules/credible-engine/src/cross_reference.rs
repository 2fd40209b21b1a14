use std::sync::Arc;

use tracing::{debug, warn};

use credible_common::{
    ArticleRef, CrossReferenceResult, Impact, SearchOptions, Signal, SignalCategory,
    SourceCredibility, MAX_MATCHED_ARTICLES,
};

use crate::sources::{extract_domain, is_credible_source};
use crate::traits::NewsSearchService;

/// Characters of the title used as the search query.
pub const TITLE_QUERY_CHARS: usize = 100;

/// Page size for the text-path similarity search.
pub const TEXT_SEARCH_PAGE_SIZE: u32 = 20;

/// Page size for the URL-path domain lookup.
pub const DOMAIN_SEARCH_PAGE_SIZE: u32 = 5;

/// Score for finding any similar article at all.
const MATCH_BASE: i32 = 30;

/// Credible matches needed for "strong confirmation".
const STRONG_CONFIRMATION: usize = 3;

/// Corroboration checks against the news search collaborator.
///
/// Failure policy differs by path: on the text path a failed search becomes one
/// slightly negative signal; on the URL path a failed domain lookup is dropped
/// without a signal. Neither ever fails the analysis.
pub struct CrossReferenceEvaluator {
    search: Arc<dyn NewsSearchService>,
}

impl CrossReferenceEvaluator {
    pub fn new(search: Arc<dyn NewsSearchService>) -> Self {
        Self { search }
    }

    /// Search for articles similar to `title`. Returns the cross-reference
    /// signal, the source-verification signal when credible outlets matched,
    /// and the (capped) matches.
    pub async fn evaluate_text(&self, title: &str) -> (Vec<Signal>, CrossReferenceResult) {
        let query = title_query(title);
        let options = SearchOptions::page_size(TEXT_SEARCH_PAGE_SIZE);

        match self.search.search_similar_articles(&query, &options).await {
            Ok(results) => {
                let result = CrossReferenceResult::new(results.total_results, results.articles);
                debug!(
                    total_matches = result.total_matches,
                    kept = result.matched_articles.len(),
                    "Cross-reference search complete"
                );
                (corroboration_signals(&result), result)
            }
            Err(e) => {
                warn!(error = %e, "Cross-reference search failed, continuing without matches");
                let degraded = Signal::new(
                    SignalCategory::CrossReference,
                    Impact::SlightlyNegative,
                    -5,
                    "Temporary issue verifying with external sources - results may be less accurate",
                );
                (vec![degraded], CrossReferenceResult::empty())
            }
        }
    }

    /// Ask the collaborator whether the publisher behind `url` is recognized.
    /// A collaborator error counts as "not verified".
    pub async fn source_credibility(&self, url: &str) -> Signal {
        let credibility = match self.search.check_source_credibility(url).await {
            Ok(credibility) => credibility,
            Err(e) => {
                warn!(url, error = %e, "Source credibility check failed");
                SourceCredibility::unverified("Unable to verify source")
            }
        };

        if credibility.credible {
            Signal::new(
                SignalCategory::SourceVerification,
                Impact::Positive,
                25,
                credibility.reason,
            )
        } else {
            Signal::new(
                SignalCategory::SourceVerification,
                Impact::Negative,
                -20,
                credibility.reason,
            )
        }
    }

    /// Whether the URL's domain has articles indexed. Skipped when no domain can
    /// be extracted; collaborator failures are logged and produce no signal.
    pub async fn domain_reputation(&self, url: &str) -> Option<Signal> {
        let Some(domain) = extract_domain(url) else {
            debug!(url, "No domain to look up, skipping domain reputation");
            return None;
        };

        let options = SearchOptions::page_size(DOMAIN_SEARCH_PAGE_SIZE);
        match self.search.search_similar_articles(&domain, &options).await {
            Ok(results) if results.total_results > 0 => Some(Signal::new(
                SignalCategory::DomainReputation,
                Impact::Positive,
                15,
                format!(
                    "Domain has {} articles indexed in news databases",
                    results.total_results
                ),
            )),
            Ok(_) => None,
            Err(e) => {
                warn!(domain = domain.as_str(), error = %e, "Domain reputation lookup failed");
                None
            }
        }
    }
}

/// First [`TITLE_QUERY_CHARS`] characters of the title.
pub fn title_query(title: &str) -> String {
    title.chars().take(TITLE_QUERY_CHARS).collect()
}

/// Number of articles among the first [`MAX_MATCHED_ARTICLES`] hosted by an
/// allowlisted outlet.
pub fn count_credible_matches(articles: &[ArticleRef]) -> usize {
    articles
        .iter()
        .take(MAX_MATCHED_ARTICLES)
        .filter(|article| is_credible_source(&article.url))
        .count()
}

/// Turn a successful search into signals: one cross-reference signal (base plus
/// volume tier, or the no-match penalty) and, if any credible outlet matched,
/// one source-verification signal.
pub fn corroboration_signals(result: &CrossReferenceResult) -> Vec<Signal> {
    let total = result.total_matches;
    if total == 0 {
        return vec![Signal::new(
            SignalCategory::CrossReference,
            Impact::Negative,
            -30,
            "No similar articles found in verified news databases - this may indicate unverified or false information",
        )];
    }

    let mut signals = Vec::with_capacity(2);

    let tier = if total > 20 {
        Signal::new(
            SignalCategory::CrossReference,
            Impact::HighlyPositive,
            MATCH_BASE + 15,
            format!("Found {total}+ similar articles from verified sources"),
        )
    } else if total > 5 {
        Signal::new(
            SignalCategory::CrossReference,
            Impact::Positive,
            MATCH_BASE + 10,
            format!("Found {total} similar articles from verified sources"),
        )
    } else {
        Signal::new(
            SignalCategory::CrossReference,
            Impact::SlightlyPositive,
            MATCH_BASE,
            format!("Found {total} similar article(s)"),
        )
    };
    signals.push(tier);

    let credible = count_credible_matches(&result.matched_articles);
    if credible >= STRONG_CONFIRMATION {
        signals.push(Signal::new(
            SignalCategory::SourceVerification,
            Impact::HighlyPositive,
            25,
            format!("Strong confirmation from {credible} highly credible news organizations"),
        ));
    } else if credible > 0 {
        signals.push(Signal::new(
            SignalCategory::SourceVerification,
            Impact::Positive,
            15,
            format!("Confirmed by {credible} credible source(s)"),
        ));
    }

    signals
}
