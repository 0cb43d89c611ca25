//! Shared configuration constants for serpscrape
//!
//! Default values used by the config builder and the acquisition strategies.

/// Search engine home page, where the browser strategy types the query
pub const DEFAULT_HOME_URL: &str = "https://www.google.com";

/// Search endpoint used by the direct-request strategy
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Interface language passed as the `hl` query parameter
pub const DEFAULT_LANGUAGE: &str = "en";

/// Number of records requested when the caller does not say otherwise
pub const DEFAULT_RESULT_COUNT: usize = 10;

/// Where `persist` writes the CSV file
pub const DEFAULT_OUTPUT_FILE: &str = "scrapedgoogle.csv";

/// Bounded wait for the search input and for the results container (seconds)
pub const DEFAULT_WAIT_TIMEOUT_SECS: u64 = 10;

/// Poll interval while waiting for an element to appear
pub const ELEMENT_POLL_INTERVAL_MS: u64 = 100;

/// Lower bound of the random pause before the direct request (milliseconds)
pub const DEFAULT_REQUEST_DELAY_MIN_MS: u64 = 1_000;

/// Upper bound of the random pause before the direct request (milliseconds)
pub const DEFAULT_REQUEST_DELAY_MAX_MS: u64 = 3_000;

/// Longest query text accepted, in characters
pub const MAX_QUERY_LENGTH: usize = 500;

/// Query text longer than this is shortened in log lines
pub const LOG_QUERY_CHARS: usize = 80;

/// Chrome user agent string sent by both strategies
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Sentinel for a missing title or link; records carrying it are dropped
pub const MISSING_FIELD: &str = "N/A";

/// Sentinel for a missing snippet; records carrying it are kept
pub const MISSING_SNIPPET: &str = "Description not available";

/// CSS selector for one organic result block
pub const CONTAINER_SELECTOR: &str = "div.g";

/// CSS selector for the result heading
pub const TITLE_SELECTOR: &str = "h3";

/// CSS selector for the result link (its `href` is the record link)
pub const LINK_SELECTOR: &str = "a";

/// Snippet selectors in priority order; earlier entries win
pub const SNIPPET_SELECTORS: &[&str] = &["div.VwiC3b", "div.IsZvec", "span.aCOpRe"];

/// `name` attribute of the search box on the home page
pub const SEARCH_INPUT_NAME: &str = "q";
