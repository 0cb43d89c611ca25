//! Result reporting: console rendering and CSV persistence
//!
//! The only place a run touches the console or the filesystem. Both
//! operations accept an empty result set and print a notice instead.

mod csv_saver;

pub use csv_saver::{load_csv, save_csv};

use std::fmt::Display;
use std::io::{self, Stdout, Write};
use std::path::Path;
use tracing::info;

use crate::error::PersistError;
use crate::web_search::ResultRecord;

const RULE_WIDTH: usize = 80;

/// Writes human-readable output to a console sink and CSV files to disk
pub struct Reporter<W> {
    console: W,
}

impl Reporter<Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    #[must_use]
    pub fn new(console: W) -> Self {
        Self { console }
    }

    /// Consume the reporter and hand back its sink
    pub fn into_inner(self) -> W {
        self.console
    }

    /// Print a bannered, numbered block per record
    pub fn display(&mut self, results: &[ResultRecord]) -> io::Result<()> {
        if results.is_empty() {
            writeln!(self.console, "No results to display")?;
            return Ok(());
        }

        let heavy = "=".repeat(RULE_WIDTH);
        let light = "-".repeat(RULE_WIDTH);

        writeln!(self.console, "\n{heavy}")?;
        writeln!(self.console, "SEARCH RESULTS")?;
        writeln!(self.console, "{heavy}\n")?;

        for (idx, record) in results.iter().enumerate() {
            writeln!(self.console, "Result #{}", idx + 1)?;
            writeln!(self.console, "Title: {}", record.title)?;
            writeln!(self.console, "URL: {}", record.link)?;
            writeln!(self.console, "Description: {}", record.snippet)?;
            writeln!(self.console, "{light}\n")?;
        }

        self.console.flush()
    }

    /// Overwrite `path` with the records as CSV.
    ///
    /// An empty set prints "No data to save" and leaves the filesystem untouched.
    pub fn persist(&mut self, results: &[ResultRecord], path: &Path) -> Result<(), PersistError> {
        if results.is_empty() {
            writeln!(self.console, "No data to save")?;
            return Ok(());
        }

        save_csv(results, path)?;

        info!(count = results.len(), path = %path.display(), "Saved results");
        writeln!(
            self.console,
            "Successfully saved {} entries to {}",
            results.len(),
            path.display()
        )?;
        Ok(())
    }

    /// Notice for a run aborted by a fatal error
    pub fn failure(&mut self, error: &dyn Display) -> io::Result<()> {
        writeln!(self.console, "An error occurred: {error}")
    }
}
