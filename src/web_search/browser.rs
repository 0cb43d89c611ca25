//! Browser strategy: Chromium session and the query-submission flow
//!
//! `ChromeSession` owns the browser process for one run. `BrowserAcquirer`
//! drives any `AutomationSession` through home page → type query → wait for
//! results → read the rendered DOM.

use chromiumoxide::browser::Browser;
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;

use super::session::{AutomationSession, wait_for_element};
use super::types::RawPage;
use crate::config::ScrapeConfig;
use crate::error::AcquisitionError;
use crate::query::SearchQuery;
use crate::utils::{LOG_QUERY_CHARS, safe_truncate_chars};

/// Wrapper for Browser and its event handler task
///
/// Ensures handler is properly cleaned up when browser is dropped.
/// Handler MUST be aborted to prevent it running indefinitely after
/// browser is closed.
struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    /// Remove the temporary profile directory.
    ///
    /// Must run after `browser.wait()` so Chrome has released its file handles.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            debug!("Cleaning up temp directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        debug!("Dropping BrowserWrapper - aborting handler task");
        self.handler.abort();
        // Browser::drop() kills the Chrome process

        if self.user_data_dir.is_some() {
            warn!("BrowserWrapper dropped without explicit close - removing temp dir in Drop");
            self.cleanup_temp_dir();
        }
    }
}

/// A launched Chromium with one page, exclusively owned by a run
pub struct ChromeSession {
    page: Page,
    wrapper: BrowserWrapper,
    closed: bool,
}

impl ChromeSession {
    /// Launch Chromium and open a blank page.
    ///
    /// # Errors
    /// `AcquisitionError::Launch` if no executable is found, the process
    /// fails to start, or the first page cannot be created.
    pub async fn launch(config: &ScrapeConfig) -> Result<Self, AcquisitionError> {
        let (browser, handler, user_data_dir) = crate::browser_setup::launch_browser(config)
            .await
            .map_err(|e| AcquisitionError::Launch(format!("{e:#}")))?;

        // Owned from here on; an early return below drops it and cleans up
        let wrapper = BrowserWrapper {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        };

        let page = wrapper
            .browser
            .new_page("about:blank")
            .await
            .map_err(|e| AcquisitionError::Launch(format!("Failed to create blank page: {e}")))?;

        info!("Browser session ready");
        Ok(Self {
            page,
            wrapper,
            closed: false,
        })
    }
}

impl AutomationSession for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<(), AcquisitionError> {
        info!("Navigating to {}", url);
        self.page
            .goto(url)
            .await
            .map_err(|e| AcquisitionError::interaction(format!("navigation to {url} failed: {e}")))?;
        self.page
            .wait_for_navigation()
            .await
            .map_err(|e| AcquisitionError::interaction(format!("page load failed: {e}")))?;
        Ok(())
    }

    async fn is_present(&self, locator: &str) -> Result<bool, AcquisitionError> {
        match self.page.find_element(locator).await {
            Ok(_) => Ok(true),
            Err(e) => lookup_miss(locator, e),
        }
    }

    async fn submit_text(&self, locator: &str, text: &str) -> Result<(), AcquisitionError> {
        let element = self
            .page
            .find_element(locator)
            .await
            .map_err(|e| AcquisitionError::interaction(format!("element '{locator}' not found: {e}")))?;

        element
            .click()
            .await
            .map_err(|e| AcquisitionError::interaction(format!("focus on '{locator}' failed: {e}")))?;
        element
            .type_str(text)
            .await
            .map_err(|e| AcquisitionError::interaction(format!("typing into '{locator}' failed: {e}")))?;
        element
            .press_key("Enter")
            .await
            .map_err(|e| AcquisitionError::interaction(format!("submitting '{locator}' failed: {e}")))?;

        Ok(())
    }

    async fn page_source(&self) -> Result<String, AcquisitionError> {
        self.page
            .content()
            .await
            .map_err(|e| AcquisitionError::interaction(format!("reading page content failed: {e}")))
    }

    async fn current_url(&self) -> Option<String> {
        self.page.url().await.ok().flatten()
    }

    async fn close(&mut self) -> Result<(), AcquisitionError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        info!("Shutting down browser session");
        let mut failures = Vec::new();

        if let Err(e) = self.wrapper.browser.close().await {
            warn!("Failed to close browser cleanly: {}", e);
            failures.push(format!("close: {e}"));
        }
        if let Err(e) = self.wrapper.browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
            failures.push(format!("wait: {e}"));
        }
        self.wrapper.cleanup_temp_dir();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(AcquisitionError::interaction(failures.join("; ")))
        }
    }
}

/// Classify a failed element lookup.
///
/// chromiumoxide reports a missing node as `NotFound` or as a protocol error
/// reply from Chrome; both mean "not there yet". Anything else means the
/// session itself is broken.
fn lookup_miss(locator: &str, err: CdpError) -> Result<bool, AcquisitionError> {
    match err {
        CdpError::NotFound | CdpError::Chrome(_) => Ok(false),
        other => Err(AcquisitionError::interaction(format!(
            "looking up '{locator}' failed: {other}"
        ))),
    }
}

/// Acquires a result page by typing the query into the home page search box
pub struct BrowserAcquirer<'s, S> {
    session: &'s S,
    home_url: Url,
    input_locator: String,
    container_locator: String,
    wait_timeout: Duration,
}

impl<'s, S: AutomationSession> BrowserAcquirer<'s, S> {
    #[must_use]
    pub fn new(session: &'s S, config: &ScrapeConfig) -> Self {
        Self {
            session,
            home_url: config.home_url().clone(),
            input_locator: config.selectors().search_input_locator(),
            container_locator: config.compiled_selectors().container_css().to_string(),
            wait_timeout: config.wait_timeout(),
        }
    }

    /// Navigate home, submit the query and return the rendered results page.
    ///
    /// # Errors
    /// `Timeout` when the search input or the first result container does
    /// not appear within the wait timeout; `InteractionFailure` for any
    /// session error.
    pub async fn acquire(&self, query: &SearchQuery) -> Result<RawPage, AcquisitionError> {
        self.session.navigate(self.home_url.as_str()).await?;

        wait_for_element(
            self.session,
            &self.input_locator,
            &format!("search input '{}'", self.input_locator),
            self.wait_timeout,
        )
        .await?;

        info!(
            "Submitting query '{}'",
            safe_truncate_chars(query.text(), LOG_QUERY_CHARS)
        );
        self.session
            .submit_text(&self.input_locator, query.text())
            .await?;

        wait_for_element(
            self.session,
            &self.container_locator,
            &format!("results container '{}'", self.container_locator),
            self.wait_timeout,
        )
        .await?;

        let html = self.session.page_source().await?;
        let url = self
            .session
            .current_url()
            .await
            .and_then(|raw| Url::parse(&raw).ok())
            .unwrap_or_else(|| self.home_url.clone());

        debug!(bytes = html.len(), url = %url, "Captured rendered results page");
        Ok(RawPage::new(html, url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_node_is_not_present() {
        assert!(!lookup_miss("div.g", CdpError::NotFound).unwrap());
    }

    #[test]
    fn transport_failures_are_interaction_errors() {
        for err in [CdpError::NoResponse, CdpError::Timeout] {
            match lookup_miss("div.g", err) {
                Err(AcquisitionError::InteractionFailure(msg)) => {
                    assert!(msg.starts_with("looking up 'div.g' failed"));
                }
                other => panic!("expected interaction failure, got {other:?}"),
            }
        }
    }
}
