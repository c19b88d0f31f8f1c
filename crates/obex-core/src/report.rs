use std::io::Write;

use thiserror::Error;

use crate::record::{OutbreakRecord, CSV_COLUMNS};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ReportResult<T> = Result<T, ReportError>;

/// Write records as CSV, one row per record, header first.
pub fn write_csv<W: Write>(records: &[OutbreakRecord], writer: W) -> ReportResult<()> {
    let mut out = csv::Writer::from_writer(writer);

    // serialize() emits the header from the first record; an empty run
    // still gets one.
    if records.is_empty() {
        out.write_record(CSV_COLUMNS)?;
    }
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;

    Ok(())
}

/// Write records as a pretty-printed JSON array with the same field
/// names as the CSV columns.
pub fn write_json<W: Write>(records: &[OutbreakRecord], mut writer: W) -> ReportResult<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writeln!(writer)?;

    Ok(())
}
