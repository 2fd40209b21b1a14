use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// --- Signals ---

/// Directional weight of a signal. Only `Positive` and `Negative` take part in
/// the confidence count; the tiered variants move the score but not confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    HighlyPositive,
    Positive,
    SlightlyPositive,
    Neutral,
    SlightlyNegative,
    Negative,
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighlyPositive => write!(f, "highly_positive"),
            Self::Positive => write!(f, "positive"),
            Self::SlightlyPositive => write!(f, "slightly_positive"),
            Self::Neutral => write!(f, "neutral"),
            Self::SlightlyNegative => write!(f, "slightly_negative"),
            Self::Negative => write!(f, "negative"),
        }
    }
}

/// What a signal is evidence about. Serialized as the human-readable label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    #[serde(rename = "Language Analysis")]
    LanguageAnalysis,
    #[serde(rename = "Cross-Reference Check")]
    CrossReference,
    #[serde(rename = "Source Verification")]
    SourceVerification,
    #[serde(rename = "Content Quality")]
    ContentQuality,
    #[serde(rename = "Article Structure")]
    ArticleStructure,
    #[serde(rename = "Domain Analysis")]
    DomainAnalysis,
    #[serde(rename = "URL Analysis")]
    UrlAnalysis,
    #[serde(rename = "Domain Reputation")]
    DomainReputation,
}

impl SignalCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::LanguageAnalysis => "Language Analysis",
            Self::CrossReference => "Cross-Reference Check",
            Self::SourceVerification => "Source Verification",
            Self::ContentQuality => "Content Quality",
            Self::ArticleStructure => "Article Structure",
            Self::DomainAnalysis => "Domain Analysis",
            Self::UrlAnalysis => "URL Analysis",
            Self::DomainReputation => "Domain Reputation",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One atomic piece of evidence. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub category: SignalCategory,
    pub description: String,
    pub impact: Impact,
    pub score_delta: i32,
}

impl Signal {
    pub fn new(
        category: SignalCategory,
        impact: Impact,
        score_delta: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category,
            description: description.into(),
            impact,
            score_delta,
        }
    }
}

// --- Verdict ---

pub const REAL_THRESHOLD: u8 = 70;
pub const UNCERTAIN_THRESHOLD: u8 = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Real,
    Uncertain,
    Fake,
}

impl Verdict {
    /// Lower bounds are inclusive: 70 is Real, 40 is Uncertain.
    pub fn from_score(score: u8) -> Self {
        if score >= REAL_THRESHOLD {
            Verdict::Real
        } else if score >= UNCERTAIN_THRESHOLD {
            Verdict::Uncertain
        } else {
            Verdict::Fake
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real => write!(f, "Real"),
            Self::Uncertain => write!(f, "Uncertain"),
            Self::Fake => write!(f, "Fake"),
        }
    }
}

// --- Articles and cross-references ---

/// Upper bound on articles kept from a search, regardless of how many matched.
pub const MAX_MATCHED_ARTICLES: usize = 10;

/// Articles echoed back to the caller alongside an outcome.
pub const MAX_RELATED_ARTICLES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRef {
    pub title: String,
    pub source_name: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub description: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossReferenceResult {
    pub total_matches: u64,
    pub matched_articles: Vec<ArticleRef>,
}

impl CrossReferenceResult {
    /// Keeps at most [`MAX_MATCHED_ARTICLES`] articles, in collaborator order.
    pub fn new(total_matches: u64, mut articles: Vec<ArticleRef>) -> Self {
        articles.truncate(MAX_MATCHED_ARTICLES);
        Self {
            total_matches,
            matched_articles: articles,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

// --- Collaborator contract types ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortOrder {
    #[default]
    Relevancy,
    Popularity,
    PublishedAt,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOptions {
    pub page_size: u32,
    pub page: Option<u32>,
    pub language: Option<String>,
    pub sort_by: Option<SortOrder>,
}

impl SearchOptions {
    pub fn page_size(page_size: u32) -> Self {
        Self {
            page_size,
            page: None,
            language: None,
            sort_by: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub total_results: u64,
    pub articles: Vec<ArticleRef>,
}

/// Publisher record attached to a positive credibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    pub id: String,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCredibility {
    pub credible: bool,
    pub reason: String,
    pub source: Option<SourceInfo>,
}

impl SourceCredibility {
    pub fn verified(source: SourceInfo) -> Self {
        Self {
            credible: true,
            reason: format!("Verified source: {}", source.name),
            source: Some(source),
        }
    }

    pub fn unverified(reason: impl Into<String>) -> Self {
        Self {
            credible: false,
            reason: reason.into(),
            source: None,
        }
    }
}

// --- Analysis input and outcome ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Text,
    Url,
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Url => write!(f, "url"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalysisInput {
    Text { title: String, content: String },
    Url { url: String },
}

impl AnalysisInput {
    pub fn kind(&self) -> AnalysisKind {
        match self {
            AnalysisInput::Text { .. } => AnalysisKind::Text,
            AnalysisInput::Url { .. } => AnalysisKind::Url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisOutcome {
    pub kind: AnalysisKind,
    pub score: u8,
    pub verdict: Verdict,
    pub signals: Vec<Signal>,
    pub confidence: f64,
    pub elapsed_millis: u64,
    pub related_articles: Vec<ArticleRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(n: usize) -> ArticleRef {
        ArticleRef {
            title: format!("Article {n}"),
            source_name: "Wire".into(),
            url: format!("https://example.com/{n}"),
            published_at: Utc::now(),
            description: None,
            author: None,
        }
    }

    #[test]
    fn verdict_thresholds_are_inclusive_lower_bounds() {
        assert_eq!(Verdict::from_score(100), Verdict::Real);
        assert_eq!(Verdict::from_score(70), Verdict::Real);
        assert_eq!(Verdict::from_score(69), Verdict::Uncertain);
        assert_eq!(Verdict::from_score(40), Verdict::Uncertain);
        assert_eq!(Verdict::from_score(39), Verdict::Fake);
        assert_eq!(Verdict::from_score(0), Verdict::Fake);
    }

    #[test]
    fn cross_reference_caps_articles_but_keeps_total() {
        let articles: Vec<_> = (0..25).map(article).collect();
        let result = CrossReferenceResult::new(4_000, articles);
        assert_eq!(result.total_matches, 4_000);
        assert_eq!(result.matched_articles.len(), MAX_MATCHED_ARTICLES);
        assert_eq!(result.matched_articles[0].title, "Article 0");
    }

    #[test]
    fn signal_serializes_with_labels() {
        let signal = Signal::new(
            SignalCategory::CrossReference,
            Impact::SlightlyNegative,
            -5,
            "Temporary issue",
        );
        let value = serde_json::to_value(&signal).unwrap();
        assert_eq!(value["category"], "Cross-Reference Check");
        assert_eq!(value["impact"], "slightly_negative");
        assert_eq!(value["scoreDelta"], -5);
    }

    #[test]
    fn category_display_matches_serialized_label() {
        let value = serde_json::to_value(SignalCategory::UrlAnalysis).unwrap();
        assert_eq!(value, SignalCategory::UrlAnalysis.to_string());
    }

    #[test]
    fn analysis_input_reports_kind() {
        let input = AnalysisInput::Url {
            url: "https://bbc.com".into(),
        };
        assert_eq!(input.kind(), AnalysisKind::Url);
    }
}
