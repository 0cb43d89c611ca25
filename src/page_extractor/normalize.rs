//! Link normalization for extracted records
//!
//! Result pages link either directly, through a `/url?q=<target>` redirect
//! wrapper, or with a path relative to the page. Records always carry an
//! absolute http(s) target.

use url::Url;

use crate::error::ExtractionError;
use crate::web_search::ResultRecord;

/// Query parameters a redirect wrapper stores its target under
const REDIRECT_TARGET_PARAMS: &[&str] = &["q", "url"];

/// Turn a raw `href` into an absolute http(s) link.
///
/// Absolute http(s) links are returned verbatim. Redirect wrappers on the
/// page's own host are unwrapped. Other relative links are resolved against
/// `base`.
///
/// # Errors
/// `ExtractionError::UnusableLink` for empty, fragment-only, `javascript:`
/// or non-http(s) links, and for links that do not parse.
pub fn normalize_link(href: &str, base: &Url) -> Result<String, ExtractionError> {
    let href = href.trim();
    let unusable = |reason: &str| ExtractionError::UnusableLink {
        href: href.to_string(),
        reason: reason.to_string(),
    };

    if href.is_empty() {
        return Err(unusable("empty href"));
    }
    if href.starts_with('#') {
        return Err(unusable("fragment-only link"));
    }
    if href.to_ascii_lowercase().starts_with("javascript:") {
        return Err(unusable("script link"));
    }

    let resolved = base.join(href).map_err(|e| unusable(&e.to_string()))?;

    if let Some(target) = unwrap_redirect(&resolved, base) {
        return Ok(target);
    }

    match resolved.scheme() {
        "http" | "https" if is_absolute_http(href) => Ok(href.to_string()),
        "http" | "https" => Ok(resolved.to_string()),
        other => Err(unusable(&format!("unsupported scheme '{other}'"))),
    }
}

/// Normalize the link of an already validated record; title and snippet pass through.
///
/// # Errors
/// Propagates `normalize_link` failures.
pub fn normalize_record(record: ResultRecord, base: &Url) -> Result<ResultRecord, ExtractionError> {
    let link = normalize_link(&record.link, base)?;
    Ok(ResultRecord { link, ..record })
}

fn is_absolute_http(href: &str) -> bool {
    let lower = href.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn unwrap_redirect(resolved: &Url, base: &Url) -> Option<String> {
    if resolved.host_str() != base.host_str() || resolved.path() != "/url" {
        return None;
    }

    resolved
        .query_pairs()
        .find(|(key, value)| REDIRECT_TARGET_PARAMS.contains(&key.as_ref()) && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .filter(|target| is_absolute_http(target))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://www.google.com/search?q=rust").unwrap()
    }

    #[test]
    fn absolute_links_are_verbatim() {
        assert_eq!(
            normalize_link("https://example.com", &base()).unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn redirect_wrapper_is_unwrapped() {
        assert_eq!(
            normalize_link(
                "/url?q=https://www.rust-lang.org/learn&sa=U&ved=abc",
                &base()
            )
            .unwrap(),
            "https://www.rust-lang.org/learn"
        );
    }

    #[test]
    fn relative_links_resolve_against_page() {
        assert_eq!(
            normalize_link("/maps?q=rust", &base()).unwrap(),
            "https://www.google.com/maps?q=rust"
        );
    }

    #[test]
    fn rejects_unusable_links() {
        for href in ["", "  ", "#top", "javascript:void(0)", "mailto:a@b.c"] {
            assert!(
                matches!(normalize_link(href, &base()), Err(ExtractionError::UnusableLink { .. })),
                "expected {href:?} to be rejected"
            );
        }
    }

    #[test]
    fn record_keeps_title_and_snippet() {
        let record = ResultRecord::new("T", "/url?q=https://example.com/a", "S");
        let normalized = normalize_record(record, &base()).unwrap();
        assert_eq!(normalized, ResultRecord::new("T", "https://example.com/a", "S"));
    }
}
