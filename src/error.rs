//! Error types for the scrape pipeline
//!
//! One enum per concern: query validation, configuration, page acquisition,
//! per-container extraction and persistence. Acquisition errors are fatal to
//! a run, extraction errors only skip one container.

use std::time::Duration;
use thiserror::Error;

/// Rejected search query input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Search query cannot be empty!")]
    Empty,

    #[error("Search query is too long ({len} characters, maximum {max})")]
    TooLong { len: usize, max: usize },

    #[error("Requested result count must be at least 1")]
    ZeroCount,
}

/// Invalid configuration detected while building a `ScrapeConfig`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid CSS selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("At least one snippet selector is required")]
    NoSnippetSelectors,

    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("Configuration error: {0}")]
    Invalid(String),

    #[error("Unknown acquisition strategy '{0}' (expected 'browser' or 'request')")]
    UnknownStrategy(String),
}

/// Failure while obtaining the raw result page
#[derive(Debug, Error)]
pub enum AcquisitionError {
    /// The browser session could not be started
    #[error("Failed to launch browser session: {0}")]
    Launch(String),

    /// A bounded wait expired before the expected element appeared
    #[error("Timed out after {after:?} waiting for {waiting_for}")]
    Timeout {
        waiting_for: String,
        after: Duration,
    },

    /// Navigation, element lookup or input failed inside the session
    #[error("Browser interaction failed: {0}")]
    InteractionFailure(String),

    /// The search endpoint answered with a non-success status
    #[error("Search request returned HTTP status {0}")]
    HttpStatus(u16),

    /// The HTTP request could not be sent or its body could not be read
    #[error("Search request failed: {0}")]
    Http(String),
}

impl AcquisitionError {
    /// Wrap any session-level failure as an interaction failure
    pub fn interaction(err: impl std::fmt::Display) -> Self {
        Self::InteractionFailure(err.to_string())
    }
}

/// A single result container whose content cannot become a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("Unusable result link '{href}': {reason}")]
    UnusableLink { href: String, reason: String },
}

/// Failure while writing the CSV output
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode CSV row: {0}")]
    Csv(#[from] csv::Error),
}
