//! Tests for the configuration builder and environment overlay

use kodegen_tools_serpscrape::config::{ENV_CHROMIUM_PATH, ENV_RESULTS, ENV_STRATEGY};
use kodegen_tools_serpscrape::{ConfigError, ScrapeConfig, ScrapeConfigBuilder, SelectorConfig, Strategy};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn overlay(vars: &[(&str, &str)]) -> Result<ScrapeConfigBuilder, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    ScrapeConfigBuilder::default().apply_env_with(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults_are_a_complete_configuration() {
    let config = ScrapeConfig::builder().build().unwrap();

    assert_eq!(config.strategy(), Strategy::Request);
    assert_eq!(config.home_url().as_str(), "https://www.google.com/");
    assert_eq!(config.search_url().as_str(), "https://www.google.com/search");
    assert_eq!(config.output_path(), Path::new("scrapedgoogle.csv"));
    assert_eq!(config.result_count(), 10);
    assert_eq!(config.wait_timeout(), Duration::from_secs(10));
    assert_eq!(config.request_delay_ms(), 1_000..=3_000);
    assert!(config.headless());
    assert!(config.chrome_executable().is_none());
    assert_eq!(config.compiled_selectors().container_css(), "div.g");
    assert_eq!(
        config.compiled_selectors().snippet_order().collect::<Vec<_>>(),
        vec!["div.VwiC3b", "div.IsZvec", "span.aCOpRe"]
    );
}

#[test]
fn test_builder_rejects_invalid_values() {
    assert!(matches!(
        ScrapeConfig::builder().search_url("not a url").build(),
        Err(ConfigError::InvalidUrl { .. })
    ));
    assert!(matches!(
        ScrapeConfig::builder().result_count(0).build(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        ScrapeConfig::builder().wait_timeout(Duration::ZERO).build(),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        ScrapeConfig::builder().request_delay_ms(10, 5).build(),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_custom_selectors_are_compiled() {
    let selectors = SelectorConfig {
        container: "li.b_algo".to_string(),
        title: "h2".to_string(),
        snippet_candidates: vec!["p".to_string()],
        ..SelectorConfig::default()
    };
    let config = ScrapeConfig::builder().selectors(selectors).build().unwrap();
    assert_eq!(config.compiled_selectors().container_css(), "li.b_algo");

    let broken = SelectorConfig {
        container: "div[".to_string(),
        ..SelectorConfig::default()
    };
    assert!(matches!(
        ScrapeConfig::builder().selectors(broken).build(),
        Err(ConfigError::InvalidSelector { .. })
    ));

    let no_snippets = SelectorConfig {
        snippet_candidates: Vec::new(),
        ..SelectorConfig::default()
    };
    assert!(matches!(
        ScrapeConfig::builder().selectors(no_snippets).build(),
        Err(ConfigError::NoSnippetSelectors)
    ));
}

#[test]
fn test_environment_overlay() {
    let config = overlay(&[
        (ENV_STRATEGY, "Chrome"),
        (ENV_RESULTS, " 25 "),
        (ENV_CHROMIUM_PATH, "/opt/chromium/chrome"),
        ("SERPSCRAPE_OUTPUT", "results/out.csv"),
        ("SERPSCRAPE_HEADLESS", "false"),
        ("SERPSCRAPE_WAIT_TIMEOUT_SECS", "3"),
    ])
    .unwrap()
    .build()
    .unwrap();

    assert_eq!(config.strategy(), Strategy::Browser);
    assert_eq!(config.result_count(), 25);
    assert_eq!(config.output_path(), Path::new("results/out.csv"));
    assert!(!config.headless());
    assert_eq!(config.wait_timeout(), Duration::from_secs(3));
    assert_eq!(
        config.chrome_executable().map(Path::to_path_buf),
        Some(PathBuf::from("/opt/chromium/chrome"))
    );
}

#[test]
fn test_blank_environment_values_are_ignored() {
    let config = overlay(&[(ENV_STRATEGY, "   "), (ENV_RESULTS, "")])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.strategy(), Strategy::Request);
    assert_eq!(config.result_count(), 10);
}

#[test]
fn test_bad_environment_values_are_errors() {
    assert!(matches!(
        overlay(&[(ENV_STRATEGY, "carrier-pigeon")]),
        Err(ConfigError::UnknownStrategy(s)) if s == "carrier-pigeon"
    ));
    assert!(matches!(
        overlay(&[(ENV_RESULTS, "ten")]),
        Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
        overlay(&[("SERPSCRAPE_HEADLESS", "maybe")]),
        Err(ConfigError::Invalid(_))
    ));
}
