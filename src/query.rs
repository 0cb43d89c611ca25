//! Validated search query

use url::Url;

use crate::error::QueryError;
use crate::utils::{DEFAULT_RESULT_COUNT, MAX_QUERY_LENGTH};

/// Query text plus the number of records the caller wants back.
///
/// Built once from user input and never mutated. The text is stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    text: String,
    requested_count: usize,
}

impl SearchQuery {
    /// Build a query asking for the default number of results
    pub fn new(text: impl AsRef<str>) -> Result<Self, QueryError> {
        Self::with_count(text, DEFAULT_RESULT_COUNT)
    }

    /// Build a query asking for `requested_count` results
    ///
    /// # Errors
    /// `QueryError::Empty` for empty or whitespace-only text,
    /// `QueryError::TooLong` above `MAX_QUERY_LENGTH` characters,
    /// `QueryError::ZeroCount` when `requested_count` is 0.
    pub fn with_count(text: impl AsRef<str>, requested_count: usize) -> Result<Self, QueryError> {
        let trimmed = text.as_ref().trim();

        if trimmed.is_empty() {
            return Err(QueryError::Empty);
        }

        let len = trimmed.chars().count();
        if len > MAX_QUERY_LENGTH {
            return Err(QueryError::TooLong {
                len,
                max: MAX_QUERY_LENGTH,
            });
        }

        if requested_count == 0 {
            return Err(QueryError::ZeroCount);
        }

        Ok(Self {
            text: trimmed.to_string(),
            requested_count,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    /// Append `q`, `num` and `hl` to `base`, percent-encoding the text.
    #[must_use]
    pub fn to_search_url(&self, base: &Url, language: &str) -> Url {
        let mut url = base.clone();
        url.query_pairs_mut()
            .append_pair("q", &self.text)
            .append_pair("num", &self.requested_count.to_string())
            .append_pair("hl", language);
        url
    }
}
