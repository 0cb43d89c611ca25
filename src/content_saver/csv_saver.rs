use std::path::Path;
use tracing::debug;

use crate::error::PersistError;
use crate::web_search::ResultRecord;

/// Write `records` to `path` as CSV with a `title,link,snippet` header.
///
/// Replaces any existing file. Fields containing delimiters, quotes or
/// newlines are quoted.
pub fn save_csv(records: &[ResultRecord], path: &Path) -> Result<(), PersistError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!(rows = records.len(), path = %path.display(), "CSV written");
    Ok(())
}

/// Read records back from a file written by [`save_csv`]
pub fn load_csv(path: &Path) -> Result<Vec<ResultRecord>, PersistError> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader.deserialize().collect::<Result<Vec<ResultRecord>, _>>()?;
    Ok(records)
}
