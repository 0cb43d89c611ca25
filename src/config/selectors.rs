//! Selector contract shared by both acquisition strategies
//!
//! Both the rendered browser DOM and the raw HTTP markup are parsed with the
//! same selectors, so a page variant change is a configuration edit rather
//! than a code change in two places.

use scraper::Selector;

use crate::error::ConfigError;
use crate::utils::{
    CONTAINER_SELECTOR, LINK_SELECTOR, SEARCH_INPUT_NAME, SNIPPET_SELECTORS, TITLE_SELECTOR,
};

/// CSS selector strings locating result containers and their fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// One organic result block
    pub container: String,
    /// Heading inside a container; its text is the record title
    pub title: String,
    /// Anchor inside a container; its `href` is the record link
    pub link: String,
    /// Description selectors tried in order, first match wins
    pub snippet_candidates: Vec<String>,
    /// `name` attribute of the home page search box
    pub search_input_name: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            container: CONTAINER_SELECTOR.to_string(),
            title: TITLE_SELECTOR.to_string(),
            link: LINK_SELECTOR.to_string(),
            snippet_candidates: SNIPPET_SELECTORS.iter().map(|s| (*s).to_string()).collect(),
            search_input_name: SEARCH_INPUT_NAME.to_string(),
        }
    }
}

impl SelectorConfig {
    /// CSS locator for the search input, e.g. `[name="q"]`
    #[must_use]
    pub fn search_input_locator(&self) -> String {
        format!("[name=\"{}\"]", self.search_input_name)
    }

    /// Parse every selector once so extraction never re-parses CSS.
    ///
    /// # Errors
    /// `ConfigError::InvalidSelector` for the first selector that fails to
    /// parse, `ConfigError::NoSnippetSelectors` for an empty candidate list.
    pub fn compile(&self) -> Result<CompiledSelectors, ConfigError> {
        if self.snippet_candidates.is_empty() {
            return Err(ConfigError::NoSnippetSelectors);
        }

        let snippets = self
            .snippet_candidates
            .iter()
            .map(|css| parse_selector(css).map(|sel| (css.clone(), sel)))
            .collect::<Result<Vec<_>, _>>()?;

        // Validated here, used by the browser session as a raw locator string
        parse_selector(&self.search_input_locator())?;

        Ok(CompiledSelectors {
            container: parse_selector(&self.container)?,
            container_css: self.container.clone(),
            title: parse_selector(&self.title)?,
            link: parse_selector(&self.link)?,
            snippets,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css).map_err(|e| ConfigError::InvalidSelector {
        selector: css.to_string(),
        message: format!("{e:?}"),
    })
}

/// Parsed form of [`SelectorConfig`]
#[derive(Debug, Clone)]
pub struct CompiledSelectors {
    pub(crate) container: Selector,
    pub(crate) container_css: String,
    pub(crate) title: Selector,
    pub(crate) link: Selector,
    pub(crate) snippets: Vec<(String, Selector)>,
}

impl CompiledSelectors {
    /// Selectors for the built-in page layout
    ///
    /// # Errors
    /// Only if the built-in constants stop parsing.
    pub fn builtin() -> Result<Self, ConfigError> {
        SelectorConfig::default().compile()
    }

    /// The container selector as written, for CDP element lookups
    #[must_use]
    pub fn container_css(&self) -> &str {
        &self.container_css
    }

    /// Snippet selector strings in priority order
    pub fn snippet_order(&self) -> impl Iterator<Item = &str> {
        self.snippets.iter().map(|(css, _)| css.as_str())
    }
}
