//! Fluent builder for `ScrapeConfig`
//!
//! Every field has a default, so `ScrapeConfig::builder().build()` is a
//! complete configuration. Validation runs once in `build()`.

use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use url::Url;

use super::selectors::SelectorConfig;
use super::types::{ScrapeConfig, Strategy};
use crate::error::ConfigError;
use crate::utils::{
    CHROME_USER_AGENT, DEFAULT_HOME_URL, DEFAULT_LANGUAGE, DEFAULT_OUTPUT_FILE,
    DEFAULT_REQUEST_DELAY_MAX_MS, DEFAULT_REQUEST_DELAY_MIN_MS, DEFAULT_RESULT_COUNT,
    DEFAULT_SEARCH_URL, DEFAULT_WAIT_TIMEOUT_SECS,
};

/// Environment variable selecting the acquisition strategy
pub const ENV_STRATEGY: &str = "SERPSCRAPE_STRATEGY";
/// Environment variable overriding the CSV output path
pub const ENV_OUTPUT: &str = "SERPSCRAPE_OUTPUT";
/// Environment variable overriding the requested result count
pub const ENV_RESULTS: &str = "SERPSCRAPE_RESULTS";
/// Environment variable toggling headless Chromium (`true`/`false`)
pub const ENV_HEADLESS: &str = "SERPSCRAPE_HEADLESS";
/// Environment variable overriding the browser wait timeout, in seconds
pub const ENV_WAIT_TIMEOUT_SECS: &str = "SERPSCRAPE_WAIT_TIMEOUT_SECS";
/// Environment variable pointing at a Chrome/Chromium executable
pub const ENV_CHROMIUM_PATH: &str = "CHROMIUM_PATH";

pub struct ScrapeConfigBuilder {
    pub(crate) strategy: Strategy,
    pub(crate) home_url: String,
    pub(crate) search_url: String,
    pub(crate) language: String,
    pub(crate) output_path: PathBuf,
    pub(crate) result_count: usize,
    pub(crate) wait_timeout: Duration,
    pub(crate) request_delay_min_ms: u64,
    pub(crate) request_delay_max_ms: u64,
    pub(crate) request_timeout: Option<Duration>,
    pub(crate) user_agent: String,
    pub(crate) headless: bool,
    pub(crate) chrome_executable: Option<PathBuf>,
    pub(crate) selectors: SelectorConfig,
}

impl Default for ScrapeConfigBuilder {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            home_url: DEFAULT_HOME_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            result_count: DEFAULT_RESULT_COUNT,
            wait_timeout: Duration::from_secs(DEFAULT_WAIT_TIMEOUT_SECS),
            request_delay_min_ms: DEFAULT_REQUEST_DELAY_MIN_MS,
            request_delay_max_ms: DEFAULT_REQUEST_DELAY_MAX_MS,
            request_timeout: None,
            user_agent: CHROME_USER_AGENT.to_string(),
            headless: true,
            chrome_executable: None,
            selectors: SelectorConfig::default(),
        }
    }
}

impl ScrapeConfig {
    /// Create a builder for configuring a `ScrapeConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ScrapeConfigBuilder {
        ScrapeConfigBuilder::default()
    }
}

impl ScrapeConfigBuilder {
    /// Defaults overlaid with the `SERPSCRAPE_*` and `CHROMIUM_PATH` environment variables
    ///
    /// # Errors
    /// Returns `ConfigError` when a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env_with(|key| std::env::var(key).ok())
    }

    /// Overlay values returned by `lookup` for each known variable name.
    ///
    /// Unset or blank variables leave the current value in place.
    ///
    /// # Errors
    /// Returns `ConfigError` when a variable is set to an unparseable value.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_STRATEGY) {
            self.strategy = value.parse()?;
        }
        if let Some(value) = get(ENV_OUTPUT) {
            self.output_path = PathBuf::from(value.trim());
        }
        if let Some(value) = get(ENV_RESULTS) {
            self.result_count = value.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!("{ENV_RESULTS} must be a positive integer, got '{value}'"))
            })?;
        }
        if let Some(value) = get(ENV_HEADLESS) {
            self.headless = parse_bool(&value).ok_or_else(|| {
                ConfigError::Invalid(format!("{ENV_HEADLESS} must be true or false, got '{value}'"))
            })?;
        }
        if let Some(value) = get(ENV_WAIT_TIMEOUT_SECS) {
            let secs: u64 = value.trim().parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "{ENV_WAIT_TIMEOUT_SECS} must be a whole number of seconds, got '{value}'"
                ))
            })?;
            self.wait_timeout = Duration::from_secs(secs);
        }
        if let Some(value) = get(ENV_CHROMIUM_PATH) {
            self.chrome_executable = Some(PathBuf::from(value.trim()));
        }

        debug!(strategy = %self.strategy, output = %self.output_path.display(), "Configuration after environment overlay");
        Ok(self)
    }

    #[must_use]
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Page the browser strategy opens before typing the query
    #[must_use]
    pub fn home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }

    /// Endpoint the direct-request strategy queries
    #[must_use]
    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = url.into();
        self
    }

    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    #[must_use]
    pub fn result_count(mut self, count: usize) -> Self {
        self.result_count = count;
        self
    }

    #[must_use]
    pub fn wait_timeout(mut self, timeout: Duration) -> Self {
        self.wait_timeout = timeout;
        self
    }

    /// Inclusive range for the random pause before the direct request.
    ///
    /// `(0, 0)` disables the pause.
    #[must_use]
    pub fn request_delay_ms(mut self, min: u64, max: u64) -> Self {
        self.request_delay_min_ms = min;
        self.request_delay_max_ms = max;
        self
    }

    #[must_use]
    pub fn request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn chrome_executable(mut self, path: Option<PathBuf>) -> Self {
        self.chrome_executable = path;
        self
    }

    #[must_use]
    pub fn selectors(mut self, selectors: SelectorConfig) -> Self {
        self.selectors = selectors;
        self
    }

    /// Validate and freeze the configuration
    ///
    /// # Errors
    /// - `ConfigError::InvalidUrl` if either endpoint does not parse
    /// - `ConfigError::Invalid` for a zero result count, a zero wait timeout
    ///   or an inverted delay range
    /// - `ConfigError::InvalidSelector` / `NoSnippetSelectors` from selector compilation
    pub fn build(self) -> Result<ScrapeConfig, ConfigError> {
        let home_url = parse_url(&self.home_url)?;
        let search_url = parse_url(&self.search_url)?;

        if self.result_count == 0 {
            return Err(ConfigError::Invalid(
                "result_count must be at least 1".to_string(),
            ));
        }
        if self.wait_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "wait_timeout must be greater than zero".to_string(),
            ));
        }
        if self.request_delay_min_ms > self.request_delay_max_ms {
            return Err(ConfigError::Invalid(format!(
                "request delay range is inverted ({}ms > {}ms)",
                self.request_delay_min_ms, self.request_delay_max_ms
            )));
        }

        let compiled_selectors = self.selectors.compile()?;

        Ok(ScrapeConfig {
            strategy: self.strategy,
            home_url,
            search_url,
            language: self.language,
            output_path: self.output_path,
            result_count: self.result_count,
            wait_timeout: self.wait_timeout,
            request_delay_min_ms: self.request_delay_min_ms,
            request_delay_max_ms: self.request_delay_max_ms,
            request_timeout: self.request_timeout,
            user_agent: self.user_agent,
            headless: self.headless,
            chrome_executable: self.chrome_executable,
            selectors: self.selectors,
            compiled_selectors,
        })
    }
}

fn parse_url(raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
