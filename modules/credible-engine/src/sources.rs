use url::Url;

/// Well-known outlets treated as high-trust. Shared by the URL allowlist check
/// and the cross-reference source tiering.
pub const CREDIBLE_SOURCES: &[&str] = &[
    "bbc.com",
    "reuters.com",
    "apnews.com",
    "nytimes.com",
    "washingtonpost.com",
    "theguardian.com",
    "cnn.com",
    "npr.org",
    "bloomberg.com",
    "wsj.com",
];

/// Free or abuse-heavy TLDs.
pub const SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf", ".gq"];

/// Host of `raw` with a leading `www.` removed. `None` when the URL does not
/// parse or has no host.
pub fn extract_domain(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Whether `raw` points at an allowlisted outlet.
///
/// Decided on the parsed host: it must equal an allowlisted domain or be a
/// subdomain of one. `https://bbc.com.evil.tk/` and `https://evil.tk/?r=bbc.com`
/// do not match.
pub fn is_credible_source(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.trim_end_matches('.').to_ascii_lowercase();

    CREDIBLE_SOURCES.iter().any(|domain| {
        host == *domain
            || host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.ends_with('.'))
    })
}
