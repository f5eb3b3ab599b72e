use log::{debug, info};
use std::path::Path;

use crate::ingest::dataset::Dataset;
use crate::utils::error::LoaderError;

/// Reads a delimited text file into a [`Dataset`].
///
/// The header row defines the column names; every subsequent row is one
/// record. Rows with a different field count than the header are rejected by
/// the underlying reader.
pub fn read_dataset<P: AsRef<Path>>(path: P, delimiter: u8) -> Result<Dataset, LoaderError> {
    let path = path.as_ref();
    debug!("📂 Reading delimited input from {}", path.display());

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let columns: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if columns.is_empty() {
        return Err(LoaderError::IngestError(format!(
            "No header row found in {}",
            path.display()
        )));
    }

    let mut raw_rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        raw_rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    let dataset = Dataset::from_records(columns, raw_rows);
    info!(
        "📥 Parsed {} records with {} columns from {}",
        dataset.record_count(),
        dataset.column_count(),
        path.display()
    );

    Ok(dataset)
}
