//! # Export Module
//!
//! CSV serialization of analysis reports.
//!
//! The format is a header row `Ingredient,Function,Risk Level,Description`
//! followed by one UTF-8 row per record. Parsing an exported report gives back
//! field-for-field equal records.

use crate::errors::AnalyzerError;
use crate::report::AnalysisRecord;
use log::info;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Header row of an exported report
pub const EXPORT_HEADER: &str = "Ingredient,Function,Risk Level,Description";

/// Default file name offered for downloads
pub const DEFAULT_EXPORT_FILE: &str = "ingredient_report.csv";

/// Write records as CSV to any writer
pub fn write_csv<W: Write>(records: &[AnalysisRecord], writer: W) -> Result<(), AnalyzerError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    // Written explicitly so an empty report still carries the header
    wtr.write_record(EXPORT_HEADER.split(','))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render records as a CSV string
///
/// # Examples
///
/// ```rust
/// use skincare_ingredients::export::to_csv_string;
/// use skincare_ingredients::report::AnalysisRecord;
///
/// let csv = to_csv_string(&[AnalysisRecord::unknown("Xyzzplorq")])?;
/// assert_eq!(
///     csv,
///     "Ingredient,Function,Risk Level,Description\nXyzzplorq,Unknown,Unknown,Not found in database.\n"
/// );
/// # Ok::<(), skincare_ingredients::errors::AnalyzerError>(())
/// ```
pub fn to_csv_string(records: &[AnalysisRecord]) -> Result<String, AnalyzerError> {
    let mut buffer = Vec::new();
    write_csv(records, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| AnalyzerError::Export(e.to_string()))
}

/// Write records to a CSV file, replacing it if present
pub fn write_csv_file<P: AsRef<Path>>(
    records: &[AnalysisRecord],
    path: P,
) -> Result<(), AnalyzerError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(records, file)?;
    info!("Exported {} records to {}", records.len(), path.display());
    Ok(())
}

/// Parse an exported report back into records
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<AnalysisRecord>, AnalyzerError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?;
    if headers.iter().collect::<Vec<_>>().join(",") != EXPORT_HEADER {
        return Err(AnalyzerError::Export(format!(
            "unexpected header row, expected '{EXPORT_HEADER}'"
        )));
    }

    rdr.deserialize()
        .map(|row| row.map_err(AnalyzerError::from))
        .collect()
}

pub fn from_csv_str(csv: &str) -> Result<Vec<AnalysisRecord>, AnalyzerError> {
    read_csv(csv.as_bytes())
}
