use regex::Regex;
use std::sync::LazyLock;

use credible_common::{Impact, Signal, SignalCategory};

/// Phrases typical of clickbait. Matched case-insensitively as substrings.
pub const CLICKBAIT_PHRASES: &[&str] = &[
    "shocking",
    "unbelievable",
    "miracle",
    "secret",
    "they don't want you to know",
    "click here",
    "you won't believe",
    "doctors hate",
    "one weird trick",
];

const MIN_WORDS: usize = 50;
const SUBSTANTIAL_WORDS: usize = 100;
const MIN_TITLE_CHARS: usize = 10;
const MIN_CONTENT_CHARS: usize = 100;

static SENTENCE_TERMINATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]").expect("Invalid terminator regex"));
static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("Invalid uppercase regex"));
static LEADING_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]").expect("Invalid leading uppercase regex"));

/// Clickbait phrases found in `title + " " + content`, in list order.
pub fn find_clickbait(title: &str, content: &str) -> Vec<&'static str> {
    let text = format!("{title} {content}").to_lowercase();
    CLICKBAIT_PHRASES
        .iter()
        .copied()
        .filter(|phrase| text.contains(phrase))
        .collect()
}

pub fn sensational_language(title: &str, content: &str) -> Signal {
    let found = find_clickbait(title, content);
    if found.is_empty() {
        Signal::new(
            SignalCategory::LanguageAnalysis,
            Impact::Positive,
            10,
            "No sensational or clickbait language detected",
        )
    } else {
        Signal::new(
            SignalCategory::LanguageAnalysis,
            Impact::Negative,
            -15,
            format!("Contains sensational keywords: {}", found.join(", ")),
        )
    }
}

pub fn content_quality(content: &str) -> Signal {
    let word_count = content.split_whitespace().count();

    if word_count < MIN_WORDS {
        return Signal::new(
            SignalCategory::ContentQuality,
            Impact::Negative,
            -10,
            "Content is too short for a legitimate news article",
        );
    }

    if word_count > SUBSTANTIAL_WORDS
        && SENTENCE_TERMINATOR.is_match(content)
        && UPPERCASE.is_match(content)
    {
        return Signal::new(
            SignalCategory::ContentQuality,
            Impact::Positive,
            10,
            "Content shows proper structure and adequate length",
        );
    }

    Signal::new(
        SignalCategory::ContentQuality,
        Impact::Neutral,
        0,
        "Content quality is acceptable",
    )
}

pub fn article_structure(title: &str, content: &str) -> Signal {
    let has_title = title.chars().count() > MIN_TITLE_CHARS;
    let has_content = content.chars().count() > MIN_CONTENT_CHARS;
    let title_capitalized = LEADING_UPPERCASE.is_match(title);

    if has_title && has_content && title_capitalized {
        Signal::new(
            SignalCategory::ArticleStructure,
            Impact::Positive,
            10,
            "Article has proper title and content structure",
        )
    } else {
        Signal::new(
            SignalCategory::ArticleStructure,
            Impact::Negative,
            -5,
            "Article structure is incomplete or poorly formatted",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize, word: &str) -> String {
        vec![word; n].join(" ")
    }

    #[test]
    fn clickbait_title_is_flagged_with_phrases() {
        let signal = sensational_language("You Won't Believe This Shocking Secret!", "");
        assert_eq!(signal.score_delta, -15);
        assert_eq!(signal.impact, Impact::Negative);
        assert_eq!(
            signal.description,
            "Contains sensational keywords: shocking, secret, you won't believe"
        );
    }

    #[test]
    fn clickbait_in_body_counts_too() {
        let found = find_clickbait("Budget update", "Doctors HATE this one weird trick");
        assert_eq!(found, vec!["doctors hate", "one weird trick"]);
    }

    #[test]
    fn clean_text_scores_positive() {
        let signal = sensational_language("Council approves budget", "The vote passed 7-2.");
        assert_eq!(signal.score_delta, 10);
        assert_eq!(signal.impact, Impact::Positive);
    }

    #[test]
    fn short_content_is_penalized() {
        let signal = content_quality(&words(49, "word"));
        assert_eq!(signal.score_delta, -10);
        assert_eq!(signal.impact, Impact::Negative);
    }

    #[test]
    fn fifty_words_is_not_short() {
        let signal = content_quality(&words(50, "word"));
        assert_eq!(signal.score_delta, 0);
        assert_eq!(signal.impact, Impact::Neutral);
    }

    #[test]
    fn long_punctuated_capitalized_content_is_rewarded() {
        let body = format!("The {}.", words(101, "council"));
        let signal = content_quality(&body);
        assert_eq!(signal.score_delta, 10);
        assert_eq!(signal.impact, Impact::Positive);
    }

    #[test]
    fn long_content_without_punctuation_is_neutral() {
        let body = format!("The {}", words(101, "council"));
        assert_eq!(content_quality(&body).impact, Impact::Neutral);
    }

    #[test]
    fn long_content_without_capitals_is_neutral() {
        let body = format!("{}.", words(120, "council"));
        assert_eq!(content_quality(&body).impact, Impact::Neutral);
    }

    #[test]
    fn whitespace_runs_do_not_inflate_word_count() {
        let body = format!("  {}  ", words(49, "word").replace(' ', "\n\t "));
        assert_eq!(content_quality(&body).score_delta, -10);
    }

    #[test]
    fn well_formed_article_structure() {
        let body = "x".repeat(101);
        let signal = article_structure("City Council Approves Budget", &body);
        assert_eq!(signal.score_delta, 10);
    }

    #[test]
    fn lowercase_title_fails_structure() {
        let body = "x".repeat(101);
        let signal = article_structure("city council approves budget", &body);
        assert_eq!(signal.score_delta, -5);
        assert_eq!(signal.impact, Impact::Negative);
    }

    #[test]
    fn short_title_or_body_fails_structure() {
        assert_eq!(article_structure("Budget", &"x".repeat(200)).score_delta, -5);
        assert_eq!(
            article_structure("City Council Approves Budget", &"x".repeat(100)).score_delta,
            -5
        );
    }
}
