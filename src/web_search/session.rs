//! Browser automation seam
//!
//! The browser strategy talks to a session only through this trait, so the
//! acquisition flow and the run-level cleanup guarantees can be exercised
//! without a real Chromium.

use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::error::AcquisitionError;
use crate::utils::ELEMENT_POLL_INTERVAL_MS;

/// The operations the browser strategy needs from an automation session
#[allow(async_fn_in_trait)]
pub trait AutomationSession {
    /// Load `url` in the session's page
    async fn navigate(&self, url: &str) -> Result<(), AcquisitionError>;

    /// Whether an element matching the CSS locator currently exists
    async fn is_present(&self, locator: &str) -> Result<bool, AcquisitionError>;

    /// Focus the element matching `locator`, type `text` and submit it
    async fn submit_text(&self, locator: &str, text: &str) -> Result<(), AcquisitionError>;

    /// Serialized DOM of the current page
    async fn page_source(&self) -> Result<String, AcquisitionError>;

    /// Address of the current page, if known
    async fn current_url(&self) -> Option<String>;

    /// Terminate the session. Called exactly once per run.
    async fn close(&mut self) -> Result<(), AcquisitionError>;
}

/// Poll for `locator` until it appears or `timeout` elapses.
///
/// The bound covers the lookups themselves, so a hung session call cannot
/// stretch the wait. A lookup error ends the wait immediately.
/// `description` names what is being waited for in the timeout error.
pub async fn wait_for_element<S: AutomationSession>(
    session: &S,
    locator: &str,
    description: &str,
    timeout: Duration,
) -> Result<(), AcquisitionError> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(ELEMENT_POLL_INTERVAL_MS);

    debug!("Waiting up to {:?} for {}", timeout, description);

    let poll = async {
        loop {
            match session.is_present(locator).await {
                Ok(true) => return Ok(()),
                Ok(false) => tokio::time::sleep(poll_interval).await,
                Err(e) => return Err(e),
            }
        }
    };

    match tokio::time::timeout(timeout, poll).await {
        Ok(Ok(())) => {
            info!("Found {} after {:?}", description, start.elapsed());
            Ok(())
        }
        Ok(Err(e)) => Err(e),
        Err(_) => Err(AcquisitionError::Timeout {
            waiting_for: description.to_string(),
            after: timeout,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Session whose lookups never answer
    struct HungSession;

    impl AutomationSession for HungSession {
        async fn navigate(&self, _url: &str) -> Result<(), AcquisitionError> {
            Ok(())
        }

        async fn is_present(&self, _locator: &str) -> Result<bool, AcquisitionError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(true)
        }

        async fn submit_text(&self, _locator: &str, _text: &str) -> Result<(), AcquisitionError> {
            Ok(())
        }

        async fn page_source(&self) -> Result<String, AcquisitionError> {
            Ok(String::new())
        }

        async fn current_url(&self) -> Option<String> {
            None
        }

        async fn close(&mut self) -> Result<(), AcquisitionError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn hung_lookup_still_times_out_on_schedule() {
        let start = Instant::now();
        let err = wait_for_element(&HungSession, "div.g", "results", Duration::from_millis(50))
            .await
            .unwrap_err();

        assert!(matches!(err, AcquisitionError::Timeout { .. }));
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
