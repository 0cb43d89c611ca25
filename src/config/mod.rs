//! Configuration module for scrape runs
//!
//! This module provides the `ScrapeConfig` struct, its builder with
//! environment overlay, and the selector contract shared by both
//! acquisition strategies.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod selectors;
pub mod types;

// Re-exports for public API
pub use builder::{
    ENV_CHROMIUM_PATH, ENV_HEADLESS, ENV_OUTPUT, ENV_RESULTS, ENV_STRATEGY, ENV_WAIT_TIMEOUT_SECS,
    ScrapeConfigBuilder,
};
pub use selectors::{CompiledSelectors, SelectorConfig};
pub use types::{ScrapeConfig, Strategy};
