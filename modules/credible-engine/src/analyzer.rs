use std::sync::Arc;
use std::time::Instant;

use tracing::{info, Instrument};

use credible_common::{
    AnalysisInput, AnalysisKind, AnalysisOutcome, ArticleRef, Signal, MAX_RELATED_ARTICLES,
};

use crate::aggregate::aggregate;
use crate::cross_reference::CrossReferenceEvaluator;
use crate::signals::{text, url};
use crate::traits::NewsSearchService;

/// Runs the text and URL analysis paths.
///
/// Holds no per-analysis state: every call builds its own signal list and
/// re-queries the collaborator, so one `Analyzer` can serve concurrent
/// requests. Analyses never fail; collaborator trouble shows up as signals.
pub struct Analyzer {
    cross_reference: CrossReferenceEvaluator,
}

impl Analyzer {
    pub fn new(search: Arc<dyn NewsSearchService>) -> Self {
        Self {
            cross_reference: CrossReferenceEvaluator::new(search),
        }
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> AnalysisOutcome {
        match input {
            AnalysisInput::Text { title, content } => self.analyze_text(title, content).await,
            AnalysisInput::Url { url } => self.analyze_url(url).await,
        }
    }

    /// Language, cross-reference, source tier, content quality, structure.
    pub async fn analyze_text(&self, title: &str, content: &str) -> AnalysisOutcome {
        let span = tracing::info_span!("analyze_text", title_chars = title.chars().count());
        self.text_path(title, content).instrument(span).await
    }

    /// Source credibility, allowlist membership, URL structure, domain reputation.
    pub async fn analyze_url(&self, raw_url: &str) -> AnalysisOutcome {
        let span = tracing::info_span!("analyze_url", url = raw_url);
        self.url_path(raw_url).instrument(span).await
    }

    async fn text_path(&self, title: &str, content: &str) -> AnalysisOutcome {
        let started = Instant::now();

        let mut signals = Vec::with_capacity(5);
        signals.push(text::sensational_language(title, content));

        let (corroboration, matches) = self.cross_reference.evaluate_text(title).await;
        signals.extend(corroboration);

        signals.push(text::content_quality(content));
        signals.push(text::article_structure(title, content));

        let mut related = matches.matched_articles;
        related.truncate(MAX_RELATED_ARTICLES);

        finish(AnalysisKind::Text, signals, related, started)
    }

    async fn url_path(&self, raw_url: &str) -> AnalysisOutcome {
        let started = Instant::now();

        let mut signals = Vec::with_capacity(4);
        signals.push(self.cross_reference.source_credibility(raw_url).await);
        signals.extend(url::domain_allowlist(raw_url));
        signals.push(url::url_structure(raw_url));
        signals.extend(self.cross_reference.domain_reputation(raw_url).await);

        finish(AnalysisKind::Url, signals, Vec::new(), started)
    }
}

fn finish(
    kind: AnalysisKind,
    signals: Vec<Signal>,
    related_articles: Vec<ArticleRef>,
    started: Instant,
) -> AnalysisOutcome {
    let result = aggregate(&signals);
    let elapsed_millis = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    for signal in &signals {
        tracing::debug!(
            category = %signal.category,
            impact = %signal.impact,
            delta = signal.score_delta,
            "Signal"
        );
    }

    info!(
        kind = %kind,
        score = result.score,
        verdict = %result.verdict,
        confidence = result.confidence,
        signals = signals.len(),
        elapsed_millis,
        "Analysis complete"
    );

    AnalysisOutcome {
        kind,
        score: result.score,
        verdict: result.verdict,
        signals,
        confidence: result.confidence,
        elapsed_millis,
        related_articles,
    }
}
