//! Test utilities and fixtures for the serpscrape test suite

use kodegen_tools_serpscrape::{AcquisitionError, AutomationSession};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// One result block in the layout the built-in selectors expect
#[allow(dead_code)]
pub fn result_block(title: &str, href: &str, snippet: Option<&str>) -> String {
    let snippet = snippet
        .map(|s| format!(r#"<div class="VwiC3b"><span>{s}</span></div>"#))
        .unwrap_or_default();
    format!(
        r#"<div class="g">
             <div class="yuRUbf"><a href="{href}"><br><h3 class="LC20lb">{title}</h3></a></div>
             {snippet}
           </div>"#
    )
}

/// Full results page wrapping the given blocks
#[allow(dead_code)]
pub fn results_page(blocks: &[String]) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="UTF-8"><title>rust - Search</title></head>
<body>
  <div id="search"><div id="rso">
    {}
  </div></div>
</body>
</html>"#,
        blocks.concat()
    )
}

/// Three organic results, one of them without a description
#[allow(dead_code)]
pub fn sample_results_page() -> String {
    results_page(&[
        result_block(
            "Rust Programming Language",
            "https://www.rust-lang.org/",
            Some("A language empowering everyone to build reliable and efficient software."),
        ),
        result_block(
            "The Rust Book",
            "/url?q=https://doc.rust-lang.org/book/&sa=U&ved=2ahUKE",
            Some("An introductory book about Rust, with commas, \"quotes\" and more."),
        ),
        result_block("Rust (video game)", "https://rust.facepunch.com/", None),
    ])
}

/// Scripted `AutomationSession` that never touches a real browser.
///
/// The search input is present from the start when `input_present` is set;
/// result containers appear once text has been submitted when
/// `results_after_submit` is set. With `lookup_fails_after_submit` every
/// lookup after submission fails the way a dropped CDP connection does.
#[allow(dead_code)]
pub struct FakeSession {
    pub input_locator: String,
    pub container_locator: String,
    pub input_present: bool,
    pub results_after_submit: bool,
    pub fail_navigation: bool,
    pub lookup_fails_after_submit: bool,
    pub html: String,
    pub url: Option<String>,
    pub submitted: RefCell<Vec<String>>,
    pub visited: RefCell<Vec<String>>,
    pub closes: Rc<Cell<usize>>,
}

#[allow(dead_code)]
impl FakeSession {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            input_locator: "[name=\"q\"]".to_string(),
            container_locator: "div.g".to_string(),
            input_present: true,
            results_after_submit: true,
            fail_navigation: false,
            lookup_fails_after_submit: false,
            html: html.into(),
            url: Some("https://www.google.com/search?q=rust".to_string()),
            submitted: RefCell::new(Vec::new()),
            visited: RefCell::new(Vec::new()),
            closes: Rc::new(Cell::new(0)),
        }
    }

    /// Shared counter, still readable after the session has been moved into a run
    pub fn close_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.closes)
    }
}

impl AutomationSession for FakeSession {
    async fn navigate(&self, url: &str) -> Result<(), AcquisitionError> {
        if self.fail_navigation {
            return Err(AcquisitionError::interaction("net::ERR_NAME_NOT_RESOLVED"));
        }
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }

    async fn is_present(&self, locator: &str) -> Result<bool, AcquisitionError> {
        if self.lookup_fails_after_submit && !self.submitted.borrow().is_empty() {
            return Err(AcquisitionError::interaction(
                "looking up 'div.g' failed: WebSocket connection closed",
            ));
        }
        if locator == self.input_locator {
            return Ok(self.input_present);
        }
        if locator == self.container_locator {
            return Ok(self.results_after_submit && !self.submitted.borrow().is_empty());
        }
        Ok(false)
    }

    async fn submit_text(&self, locator: &str, text: &str) -> Result<(), AcquisitionError> {
        if locator != self.input_locator || !self.input_present {
            return Err(AcquisitionError::interaction(format!("no element '{locator}'")));
        }
        self.submitted.borrow_mut().push(text.to_string());
        Ok(())
    }

    async fn page_source(&self) -> Result<String, AcquisitionError> {
        Ok(self.html.clone())
    }

    async fn current_url(&self) -> Option<String> {
        self.url.clone()
    }

    async fn close(&mut self) -> Result<(), AcquisitionError> {
        self.closes.set(self.closes.get() + 1);
        Ok(())
    }
}
