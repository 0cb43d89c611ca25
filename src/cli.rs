//! Interactive query prompt

use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::query::SearchQuery;

/// Prompt shown before reading the query line
pub const QUERY_PROMPT: &str = "Please enter your search query: ";

/// Ask for a query on `output` and read one line from `input`.
///
/// Invalid input (empty, whitespace-only, too long) is explained on
/// `output` and yields `None`, in which case nothing else should run.
pub fn prompt_query<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    requested_count: usize,
) -> io::Result<Option<SearchQuery>> {
    write!(output, "{QUERY_PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match SearchQuery::with_count(&line, requested_count) {
        Ok(query) => Ok(Some(query)),
        Err(e) => {
            debug!(error = %e, "Rejected query input");
            writeln!(output, "{e}")?;
            Ok(None)
        }
    }
}
