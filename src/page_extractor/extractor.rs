//! Per-container record extraction
//!
//! Total over any container: a field that cannot be found degrades to its
//! sentinel instead of failing.

use scraper::ElementRef;

use crate::config::CompiledSelectors;
use crate::utils::{MISSING_FIELD, MISSING_SNIPPET, collapse_whitespace};
use crate::web_search::ResultRecord;

/// Extract `{title, link, snippet}` from one result container.
///
/// - title: text of the first title match, else `"N/A"`
/// - link: `href` of the first link match, else `"N/A"` (also when the
///   anchor has no `href`)
/// - snippet: text under the first snippet selector, in priority order,
///   that matches anything; `"Description not available"` when none match
///   or the match holds no text
#[must_use]
pub fn extract(container: ElementRef<'_>, selectors: &CompiledSelectors) -> ResultRecord {
    let title = container
        .select(&selectors.title)
        .next()
        .map(element_text)
        .unwrap_or_else(|| MISSING_FIELD.to_string());

    let link = container
        .select(&selectors.link)
        .next()
        .and_then(|anchor| anchor.value().attr("href"))
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_FIELD.to_string());

    let snippet = extract_snippet(container, selectors)
        .unwrap_or_else(|| MISSING_SNIPPET.to_string());

    ResultRecord {
        title,
        link,
        snippet,
    }
}

/// Try snippet selectors in order and stop at the first one that matches.
///
/// Priority is by selector position, not by document position: a later
/// selector never wins over an earlier one even if its element comes first.
fn extract_snippet(container: ElementRef<'_>, selectors: &CompiledSelectors) -> Option<String> {
    selectors
        .snippets
        .iter()
        .find_map(|(_, selector)| container.select(selector).next())
        .map(element_text)
        .filter(|text| !text.is_empty())
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}
