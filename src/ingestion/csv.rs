//! CSV ingestion implementation.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IngestionError, IngestionResult};
use crate::types::{DataSet, DataType, Field, Schema, Value};

/// Options controlling how CSV text is read and which cells count as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter.
    pub delimiter: u8,
    /// Cell contents (after trimming) that become [`Value::Null`]. Case-sensitive.
    pub null_values: Vec<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            null_values: ["", "NA", "NaN", "null", "None"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl CsvOptions {
    fn is_null_marker(&self, trimmed: &str) -> bool {
        self.null_values.iter().any(|marker| marker == trimmed)
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(true).delimiter(self.delimiter);
        builder
    }
}

/// Ingest a CSV file into an in-memory [`DataSet`].
///
/// Rules:
///
/// - CSV must have headers.
/// - Headers must contain all schema fields (order can differ).
/// - Null markers from `options` become [`Value::Null`]; every other value is parsed according to
///   the schema field type.
pub fn ingest_csv_from_path(
    path: impl AsRef<Path>,
    schema: &Schema,
    options: &CsvOptions,
) -> IngestionResult<DataSet> {
    let mut rdr = options.reader_builder().from_path(path)?;
    ingest_csv_from_reader(&mut rdr, schema, options)
}

/// Ingest CSV data from an existing CSV reader.
pub fn ingest_csv_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
    options: &CsvOptions,
) -> IngestionResult<DataSet> {
    let headers = rdr.headers()?.clone();

    // Map schema fields -> CSV column indexes (allows re-ordered CSV columns).
    let mut col_idxs = Vec::with_capacity(schema.fields.len());
    for field in &schema.fields {
        match headers.iter().position(|h| h == field.name) {
            Some(idx) => col_idxs.push(idx),
            None => {
                return Err(IngestionError::SchemaMismatch {
                    message: format!(
                        "missing required column '{field}'. headers={:?}",
                        headers.iter().collect::<Vec<_>>(),
                        field = field.name
                    ),
                });
            }
        }
    }

    read_records(rdr, schema, &col_idxs, options)
}

/// Ingest a CSV file keeping every column as [`DataType::Utf8`].
///
/// Only the missingness pattern is interpreted: null markers become [`Value::Null`], everything
/// else is kept as trimmed text. The schema follows the header order.
pub fn ingest_csv_untyped_from_path(
    path: impl AsRef<Path>,
    options: &CsvOptions,
) -> IngestionResult<DataSet> {
    let mut rdr = options.reader_builder().from_path(path)?;
    ingest_csv_untyped_from_reader(&mut rdr, options)
}

/// Untyped ingestion from an existing CSV reader. See [`ingest_csv_untyped_from_path`].
pub fn ingest_csv_untyped_from_reader<R: Read>(
    rdr: &mut csv::Reader<R>,
    options: &CsvOptions,
) -> IngestionResult<DataSet> {
    let schema = Schema::new(
        rdr.headers()?
            .iter()
            .map(|h| Field::new(h, DataType::Utf8))
            .collect(),
    );
    // Field i is CSV column i, so repeated header names keep their own cells.
    let col_idxs: Vec<usize> = (0..schema.len()).collect();
    read_records(rdr, &schema, &col_idxs, options)
}

fn read_records<R: Read>(
    rdr: &mut csv::Reader<R>,
    schema: &Schema,
    col_idxs: &[usize],
    options: &CsvOptions,
) -> IngestionResult<DataSet> {
    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let mut row: Vec<Value> = Vec::with_capacity(schema.fields.len());
        for (field, &csv_idx) in schema.fields.iter().zip(col_idxs) {
            let raw = record.get(csv_idx).unwrap_or("");
            row.push(parse_typed_value(user_row, field, raw, options)?);
        }
        rows.push(row);
    }

    Ok(DataSet::new(schema.clone(), rows))
}

fn parse_typed_value(
    row: usize,
    field: &Field,
    raw: &str,
    options: &CsvOptions,
) -> IngestionResult<Value> {
    let trimmed = raw.trim();
    if options.is_null_marker(trimmed) {
        return Ok(Value::Null);
    }

    let parse_error = |message: String| IngestionError::ParseError {
        row,
        column: field.name.clone(),
        raw: raw.to_owned(),
        message,
    };

    match field.data_type {
        DataType::Utf8 => Ok(Value::Utf8(trimmed.to_owned())),
        DataType::Int64 => trimmed
            .parse::<i64>()
            .map(Value::Int64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Float64 => trimmed
            .parse::<f64>()
            .map(Value::Float64)
            .map_err(|e| parse_error(e.to_string())),
        DataType::Bool => parse_bool(trimmed).map(Value::Bool).map_err(parse_error),
    }
}

fn parse_bool(s: &str) -> Result<bool, String> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" => Ok(true),
        "false" | "f" | "0" | "no" | "n" => Ok(false),
        _ => Err("expected bool (true/false/1/0/yes/no)".to_string()),
    }
}
