use credible_common::{Impact, Signal, Verdict};

/// Neutral starting point before any evidence is applied.
pub const BASELINE_SCORE: i64 = 50;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// Final score, verdict and confidence for one ordered list of signals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub score: u8,
    pub verdict: Verdict,
    pub confidence: f64,
}

/// Apply every delta to the baseline in order, clamp once, then derive the
/// verdict from the clamped score.
pub fn aggregate(signals: &[Signal]) -> Aggregate {
    let score = clamp_score(raw_score(signals));
    Aggregate {
        score,
        verdict: Verdict::from_score(score),
        confidence: confidence(signals),
    }
}

/// Baseline plus all deltas, unclamped.
pub fn raw_score(signals: &[Signal]) -> i64 {
    signals.iter().fold(BASELINE_SCORE, |acc, signal| {
        acc.saturating_add(i64::from(signal.score_delta))
    })
}

pub fn clamp_score(raw: i64) -> u8 {
    // Range is 0..=100 after the clamp, so the cast is lossless.
    raw.clamp(MIN_SCORE, MAX_SCORE) as u8
}

/// `|positive - negative| / total * 100`, counting only signals tagged exactly
/// `Positive` or `Negative`. The tiered impacts still count toward the total.
/// Zero signals gives zero confidence.
pub fn confidence(signals: &[Signal]) -> f64 {
    if signals.is_empty() {
        return 0.0;
    }

    let positive = signals.iter().filter(|s| s.impact == Impact::Positive).count();
    let negative = signals.iter().filter(|s| s.impact == Impact::Negative).count();
    let spread = positive.abs_diff(negative) as f64;

    (spread / signals.len() as f64 * 100.0).clamp(0.0, 100.0)
}
