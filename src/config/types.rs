//! Core configuration types for a scrape run
//!
//! `ScrapeConfig` is immutable after `build()`; everything a run needs to
//! know about endpoints, timeouts, output and selectors lives here.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use super::selectors::{CompiledSelectors, SelectorConfig};
use crate::error::ConfigError;

/// How the result page is obtained. Exactly one is active per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Drive a Chromium session: type the query on the home page and read the rendered DOM
    Browser,
    /// Issue one GET against the search endpoint and parse the returned markup
    #[default]
    Request,
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "browser" | "chrome" => Ok(Self::Browser),
            "request" | "http" => Ok(Self::Request),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Browser => write!(f, "browser"),
            Self::Request => write!(f, "request"),
        }
    }
}

/// Main configuration struct for a scrape run
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub(crate) strategy: Strategy,
    pub(crate) home_url: Url,
    pub(crate) search_url: Url,
    pub(crate) language: String,
    pub(crate) output_path: PathBuf,
    pub(crate) result_count: usize,

    /// Bound on each browser wait (search input, then results container)
    pub(crate) wait_timeout: Duration,

    /// Random pause before the direct request, inclusive millisecond range
    pub(crate) request_delay_min_ms: u64,
    pub(crate) request_delay_max_ms: u64,

    /// Overall HTTP timeout; `None` leaves it to the transport
    pub(crate) request_timeout: Option<Duration>,

    pub(crate) user_agent: String,
    pub(crate) headless: bool,
    pub(crate) chrome_executable: Option<PathBuf>,

    pub(crate) selectors: SelectorConfig,

    /// Parsed from `selectors` at build time
    pub(crate) compiled_selectors: CompiledSelectors,
}
