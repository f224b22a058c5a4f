//! Uploaded tables -> FeatureRow
//!
//! Uploads are expected to be pre-encoded: one header row with the 13
//! column names (any order) and integer codes underneath. Every check
//! happens here, so a row that loads always decodes.

use crate::logic::features::layout::feature_index;
use crate::logic::features::{EncodingTable, Feature, FeatureRow, FEATURE_COUNT};

use super::PipelineError;

/// One uploaded record: (column name, raw cell) in file order
pub type ExternalRow = Vec<(String, String)>;

fn malformed(msg: impl Into<String>) -> PipelineError {
    PipelineError::MalformedRow(msg.into())
}

/// Validate one named-column record and reorder it to the layout
pub fn load_row_from_table(row: &[(String, String)]) -> Result<FeatureRow, PipelineError> {
    let table = EncodingTable::global();
    let mut codes: [Option<u8>; FEATURE_COUNT] = [None; FEATURE_COUNT];

    for (column, cell) in row {
        let column = column.trim().trim_start_matches('\u{feff}');
        let index = feature_index(column)
            .ok_or_else(|| malformed(format!("unexpected column '{}'", column)))?;

        if codes[index].is_some() {
            return Err(malformed(format!("duplicate column '{}'", column)));
        }

        let value = cell.trim();
        let code: i64 = value.parse().map_err(|_| {
            malformed(format!("column '{}': '{}' is not an integer code", column, value))
        })?;

        let feature = Feature::ALL[index];
        if !table.is_valid_code(feature, code) {
            return Err(malformed(format!(
                "column '{}': code {} outside {:?}",
                column,
                code,
                table.feature(feature).codes()
            )));
        }

        // Range already checked against the table
        codes[index] = Some(code as u8);
    }

    let missing: Vec<&str> = Feature::ALL
        .iter()
        .filter(|f| codes[f.index()].is_none())
        .map(|f| f.name())
        .collect();
    if !missing.is_empty() {
        return Err(malformed(format!("missing column(s): {}", missing.join(", "))));
    }

    Ok(FeatureRow::from_codes(codes.map(|c| c.unwrap_or_default()))?)
}

/// Parse CSV bytes (header + records) into named-column rows
pub fn parse_csv_table(data: &[u8]) -> Result<Vec<ExternalRow>, PipelineError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|e| malformed(format!("unreadable CSV header: {}", e)))?
        .clone();

    reader
        .records()
        .map(|record| -> Result<ExternalRow, PipelineError> {
            let record = record.map_err(|e| malformed(format!("invalid CSV record: {}", e)))?;
            Ok(headers
                .iter()
                .zip(record.iter())
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect())
        })
        .collect()
}

/// A CSV upload must hold exactly one data row
pub fn load_row_from_csv(data: &[u8]) -> Result<FeatureRow, PipelineError> {
    let rows = parse_csv_table(data)?;
    match rows.as_slice() {
        [] => Err(malformed("no data rows")),
        [row] => load_row_from_table(row),
        _ => Err(malformed(format!("expected exactly one data row, got {}", rows.len()))),
    }
}
