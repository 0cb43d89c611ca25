//! Result page acquisition
//!
//! Two interchangeable strategies behind one `acquire` contract: drive a
//! Chromium session through the home page search box, or issue a direct
//! GET against the search endpoint. Both return the page markup so a
//! single extractor serves either.

mod browser;
mod request;
mod session;
mod types;

pub use browser::{BrowserAcquirer, ChromeSession};
pub use request::RequestAcquirer;
pub use session::{AutomationSession, wait_for_element};
pub use types::{RawPage, ResultRecord, ResultSet};

use crate::error::AcquisitionError;
use crate::query::SearchQuery;

/// The active acquisition strategy for a run
pub enum PageAcquirer<'s, S> {
    Browser(BrowserAcquirer<'s, S>),
    Request(RequestAcquirer),
}

impl<S: AutomationSession> PageAcquirer<'_, S> {
    /// Obtain the raw result page for `query`.
    ///
    /// # Errors
    /// Any `AcquisitionError`; neither strategy retries.
    pub async fn acquire(&self, query: &SearchQuery) -> Result<RawPage, AcquisitionError> {
        match self {
            Self::Browser(acquirer) => acquirer.acquire(query).await,
            Self::Request(acquirer) => acquirer.acquire(query).await,
        }
    }
}
