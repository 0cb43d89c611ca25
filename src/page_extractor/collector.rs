//! Page-level result collection

use scraper::Html;
use tracing::{debug, info, warn};

use super::extractor::extract;
use super::normalize::normalize_record;
use crate::config::CompiledSelectors;
use crate::web_search::{RawPage, ResultSet};

/// Collect up to `max_results` records from an acquired page.
///
/// Containers are visited in document order and the first `max_results` of
/// them are considered. Records missing a title or link are dropped; a
/// container whose link cannot be normalized is logged and skipped without
/// affecting the others. The output is therefore never longer than
/// `max_results` and may be shorter.
#[must_use]
pub fn collect(page: &RawPage, max_results: usize, selectors: &CompiledSelectors) -> ResultSet {
    let document = Html::parse_document(&page.html);

    let containers: Vec<_> = document.select(&selectors.container).collect();
    info!(
        "Found {} result containers, considering at most {}",
        containers.len(),
        max_results
    );

    debug!(
        snippet_order = ?selectors.snippet_order().collect::<Vec<_>>(),
        "Snippet selector priority"
    );

    let mut results = ResultSet::with_capacity(max_results.min(containers.len()));

    for (index, container) in containers.into_iter().take(max_results).enumerate() {
        let record = extract(container, selectors);

        if !record.is_valid() {
            debug!(
                index,
                title = %record.title,
                link = %record.link,
                "Dropping result without title or link"
            );
            continue;
        }

        match normalize_record(record, &page.url) {
            Ok(record) => results.push(record),
            Err(e) => warn!(index, error = %e, "Skipping malformed result container"),
        }
    }

    info!("Collected {} valid results", results.len());
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MISSING_SNIPPET;
    use crate::web_search::ResultRecord;
    use url::Url;

    fn page(body: &str) -> RawPage {
        RawPage::new(
            format!("<html><body><div id=\"search\">{body}</div></body></html>"),
            Url::parse("https://www.google.com/search?q=test").unwrap(),
        )
    }

    fn container(title: &str, href: &str) -> String {
        format!(r#"<div class="g"><a href="{href}"><h3>{title}</h3></a></div>"#)
    }

    #[test]
    fn zero_containers_yield_empty_set() {
        let selectors = CompiledSelectors::builtin().unwrap();
        assert!(collect(&page("<p>No results</p>"), 10, &selectors).is_empty());
    }

    #[test]
    fn caps_at_max_results_in_document_order() {
        let selectors = CompiledSelectors::builtin().unwrap();
        let body: String = (1..=5)
            .map(|i| container(&format!("R{i}"), &format!("https://example.com/{i}")))
            .collect();

        let results = collect(&page(&body), 3, &selectors);
        let titles: Vec<_> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["R1", "R2", "R3"]);
    }

    #[test]
    fn invalid_and_malformed_containers_are_skipped() {
        let selectors = CompiledSelectors::builtin().unwrap();
        let body = [
            container("Good one", "https://example.com/1"),
            r#"<div class="g"><h3>No link</h3></div>"#.to_string(),
            container("Script link", "javascript:void(0)"),
            container("Good two", "/url?q=https://example.com/2&sa=U"),
        ]
        .concat();

        let results = collect(&page(&body), 10, &selectors);
        assert_eq!(
            results,
            vec![
                ResultRecord::new("Good one", "https://example.com/1", MISSING_SNIPPET),
                ResultRecord::new("Good two", "https://example.com/2", MISSING_SNIPPET),
            ]
        );
    }

    #[test]
    fn cap_applies_before_filtering() {
        let selectors = CompiledSelectors::builtin().unwrap();
        let body = [
            r#"<div class="g"><h3>No link</h3></div>"#.to_string(),
            container("Second", "https://example.com/2"),
        ]
        .concat();

        assert!(collect(&page(&body), 1, &selectors).is_empty());
    }
}
