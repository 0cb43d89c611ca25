//! Data structures passed between acquisition, extraction and reporting

use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::MISSING_FIELD;

/// Markup of one acquired result page and the address it was served from.
///
/// `url` is the base for resolving relative result links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawPage {
    pub html: String,
    pub url: Url,
}

impl RawPage {
    #[must_use]
    pub fn new(html: impl Into<String>, url: Url) -> Self {
        Self {
            html: html.into(),
            url,
        }
    }
}

/// A single search result.
///
/// Fields are never absent: missing data is replaced by a sentinel.
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    /// Heading text, or `"N/A"`
    pub title: String,

    /// Link target, or `"N/A"`
    pub link: String,

    /// Description text, or `"Description not available"`
    pub snippet: String,
}

impl ResultRecord {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }

    /// A record is kept only when both title and link were found.
    /// A missing snippet does not disqualify it.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.title != MISSING_FIELD && self.link != MISSING_FIELD
    }
}

/// Records in page order, at most the requested count
pub type ResultSet = Vec<ResultRecord>;
