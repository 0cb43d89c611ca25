pub mod browser_setup;
pub mod cli;
pub mod config;
pub mod content_saver;
pub mod error;
pub mod page_extractor;
pub mod query;
pub mod runner;
pub mod utils;
pub mod web_search;

pub use browser_setup::{find_browser_executable, launch_browser};
pub use config::{CompiledSelectors, ScrapeConfig, ScrapeConfigBuilder, SelectorConfig, Strategy};
pub use content_saver::{Reporter, load_csv, save_csv};
pub use error::{AcquisitionError, ConfigError, ExtractionError, PersistError, QueryError};
pub use page_extractor::{collect, extract};
pub use query::SearchQuery;
pub use runner::{run, run_with_session};
pub use web_search::{
    AutomationSession, BrowserAcquirer, ChromeSession, PageAcquirer, RawPage, RequestAcquirer,
    ResultRecord, ResultSet,
};
