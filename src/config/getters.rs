//! Getter methods for `ScrapeConfig`

use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use url::Url;

use super::selectors::{CompiledSelectors, SelectorConfig};
use super::types::{ScrapeConfig, Strategy};

impl ScrapeConfig {
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    #[must_use]
    pub fn home_url(&self) -> &Url {
        &self.home_url
    }

    #[must_use]
    pub fn search_url(&self) -> &Url {
        &self.search_url
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    #[must_use]
    pub fn result_count(&self) -> usize {
        self.result_count
    }

    #[must_use]
    pub fn wait_timeout(&self) -> Duration {
        self.wait_timeout
    }

    /// Inclusive millisecond range for the pre-request pause
    #[must_use]
    pub fn request_delay_ms(&self) -> RangeInclusive<u64> {
        self.request_delay_min_ms..=self.request_delay_max_ms
    }

    #[must_use]
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn chrome_executable(&self) -> Option<&Path> {
        self.chrome_executable.as_deref()
    }

    #[must_use]
    pub fn selectors(&self) -> &SelectorConfig {
        &self.selectors
    }

    #[must_use]
    pub fn compiled_selectors(&self) -> &CompiledSelectors {
        &self.compiled_selectors
    }
}
