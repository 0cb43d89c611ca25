//! One scrape run: acquire → collect → display → persist
//!
//! Acquisition failures end the run with an empty result set after the
//! browser session (if any) has been closed; they never escape `run`.
//! Console and file write failures do.

use std::io::Write;
use tracing::{error, info, warn};

use crate::config::{ScrapeConfig, Strategy};
use crate::content_saver::Reporter;
use crate::error::{AcquisitionError, PersistError};
use crate::page_extractor::collect;
use crate::query::SearchQuery;
use crate::web_search::{
    AutomationSession, BrowserAcquirer, ChromeSession, PageAcquirer, RequestAcquirer, ResultSet,
};

/// Run the configured strategy for `query` and report the outcome.
///
/// # Errors
/// Only `PersistError`, when the console or the CSV file cannot be written.
pub async fn run<W: Write>(
    config: &ScrapeConfig,
    query: &SearchQuery,
    reporter: &mut Reporter<W>,
) -> Result<ResultSet, PersistError> {
    info!(strategy = %config.strategy(), "Starting search run");

    let outcome = match config.strategy() {
        Strategy::Request => scrape_with_request(config, query).await,
        Strategy::Browser => match ChromeSession::launch(config).await {
            Ok(session) => scrape_with_session(session, config, query).await,
            Err(e) => Err(e),
        },
    };

    finish(outcome, config, reporter)
}

/// Browser-strategy run on an already established session.
///
/// The session is closed exactly once, before reporting, whatever the
/// acquisition outcome.
///
/// # Errors
/// Only `PersistError`, as for [`run`].
pub async fn run_with_session<S: AutomationSession, W: Write>(
    session: S,
    config: &ScrapeConfig,
    query: &SearchQuery,
    reporter: &mut Reporter<W>,
) -> Result<ResultSet, PersistError> {
    let outcome = scrape_with_session(session, config, query).await;
    finish(outcome, config, reporter)
}

async fn scrape_with_request(
    config: &ScrapeConfig,
    query: &SearchQuery,
) -> Result<ResultSet, AcquisitionError> {
    let acquirer: PageAcquirer<'_, ChromeSession> =
        PageAcquirer::Request(RequestAcquirer::new(config)?);
    scrape(&acquirer, config, query).await
}

async fn scrape_with_session<S: AutomationSession>(
    mut session: S,
    config: &ScrapeConfig,
    query: &SearchQuery,
) -> Result<ResultSet, AcquisitionError> {
    let outcome = {
        let acquirer = PageAcquirer::Browser(BrowserAcquirer::new(&session, config));
        scrape(&acquirer, config, query).await
    };

    if let Err(e) = session.close().await {
        warn!(error = %e, "Browser session did not shut down cleanly");
    }

    outcome
}

async fn scrape<S: AutomationSession>(
    acquirer: &PageAcquirer<'_, S>,
    config: &ScrapeConfig,
    query: &SearchQuery,
) -> Result<ResultSet, AcquisitionError> {
    let page = acquirer.acquire(query).await?;
    Ok(collect(
        &page,
        query.requested_count(),
        config.compiled_selectors(),
    ))
}

fn finish<W: Write>(
    outcome: Result<ResultSet, AcquisitionError>,
    config: &ScrapeConfig,
    reporter: &mut Reporter<W>,
) -> Result<ResultSet, PersistError> {
    let results = match outcome {
        Ok(results) => results,
        Err(e) => {
            error!(error = %e, "Search run aborted");
            reporter.failure(&e)?;
            return Ok(ResultSet::new());
        }
    };

    reporter.display(&results)?;
    reporter.persist(&results, config.output_path())?;

    info!(count = results.len(), "Search run finished");
    Ok(results)
}
