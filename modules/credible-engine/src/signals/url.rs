use url::Url;

use credible_common::{Impact, Signal, SignalCategory};

use crate::sources::{is_credible_source, SUSPICIOUS_TLDS};

/// Scheme and TLD checks. A URL that fails to parse gets a single malformed
/// signal and nothing else is inspected.
pub fn url_structure(raw: &str) -> Signal {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(e) => {
            tracing::debug!(url = raw, error = %e, "URL failed to parse");
            return Signal::new(
                SignalCategory::UrlAnalysis,
                Impact::Negative,
                -10,
                "Invalid or malformed URL",
            );
        }
    };

    if url.scheme() != "https" {
        return Signal::new(
            SignalCategory::UrlAnalysis,
            Impact::Negative,
            -10,
            "URL does not use secure HTTPS protocol",
        );
    }

    let host = url.host_str().unwrap_or_default();
    if SUSPICIOUS_TLDS.iter().any(|tld| host.ends_with(tld)) {
        return Signal::new(
            SignalCategory::UrlAnalysis,
            Impact::Negative,
            -15,
            "URL uses a suspicious top-level domain",
        );
    }

    Signal::new(
        SignalCategory::UrlAnalysis,
        Impact::Positive,
        5,
        "URL structure appears legitimate",
    )
}

/// `Some` only for allowlisted outlets; other URLs contribute nothing.
pub fn domain_allowlist(raw: &str) -> Option<Signal> {
    is_credible_source(raw).then(|| {
        Signal::new(
            SignalCategory::DomainAnalysis,
            Impact::Positive,
            20,
            "URL belongs to a well-known credible news organization",
        )
    })
}
