// src/table/select.rs

use std::io::Read;

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use tracing::{debug, trace};

use crate::config::RunConfig;
use crate::errors::{Result, RhobatchError};

use super::record::ModulusRecord;

/// Which rows and columns of the table become records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub skip_rows: usize,
    pub name_column: &'a str,
    pub value_column: &'a str,
}

impl<'a> Selection<'a> {
    pub fn from_config(run: &'a RunConfig) -> Self {
        Self {
            skip_rows: run.skip_rows,
            name_column: &run.name_column,
            value_column: &run.value_column,
        }
    }
}

/// Selected records plus counters describing what was left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records in table order.
    pub records: Vec<ModulusRecord>,
    /// Data rows read, header excluded.
    pub rows_read: usize,
    /// Rows dropped because their index was below `skip_rows`.
    pub skipped_by_position: usize,
    /// Eligible rows dropped because the name or value was empty.
    pub skipped_incomplete: usize,
}

/// Read a CSV table and return the records that pass selection.
///
/// Rows with index < `skip_rows` are discarded without looking at their
/// fields. The remaining rows are kept iff both the name and the value field
/// are non-empty; a row shorter than the header counts as having empty
/// trailing fields. Field text is taken verbatim.
pub fn select_records<R: Read>(reader: R, selection: &Selection<'_>) -> Result<LoadReport> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() {
        return Err(RhobatchError::FormatError(
            "input table has no header row".to_string(),
        ));
    }
    let name_idx = column_index(&headers, selection.name_column)?;
    let value_idx = column_index(&headers, selection.value_column)?;

    let mut report = LoadReport::default();
    let mut row = ByteRecord::new();

    while rdr.read_byte_record(&mut row)? {
        let index = report.rows_read;
        report.rows_read += 1;

        if index < selection.skip_rows {
            report.skipped_by_position += 1;
            continue;
        }

        let fields = StringRecord::from_byte_record(row.clone()).map_err(|e| {
            RhobatchError::FormatError(format!("data row {index} is not valid UTF-8: {e}"))
        })?;

        let name = fields.get(name_idx).unwrap_or_default();
        let value = fields.get(value_idx).unwrap_or_default();

        if name.is_empty() || value.is_empty() {
            trace!(row = index, "dropping row with empty name or value");
            report.skipped_incomplete += 1;
            continue;
        }

        report.records.push(ModulusRecord::new(name, value));
    }

    debug!(
        rows_read = report.rows_read,
        selected = report.records.len(),
        skipped_by_position = report.skipped_by_position,
        skipped_incomplete = report.skipped_incomplete,
        "input table loaded"
    );

    Ok(report)
}

/// When a header repeats, the last occurrence names the column.
fn column_index(headers: &StringRecord, column: &str) -> Result<usize> {
    let index = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| *h == column)
        .map(|(i, _)| i)
        .last();
    index.ok_or_else(|| {
        RhobatchError::FormatError(format!(
            "input table header is missing required column '{column}'"
        ))
    })
}
