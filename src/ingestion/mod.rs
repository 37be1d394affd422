//! Loading datasets into the in-memory backend.
//!
//! Format-specific functions live under:
//! - [`csv`]
//!
//! A Polars `DataFrame` needs no ingestion layer here: load it with Polars and pass it to
//! [`crate::processing`] directly.

pub mod csv;

pub use self::csv::{
    ingest_csv_from_path, ingest_csv_from_reader, ingest_csv_untyped_from_path,
    ingest_csv_untyped_from_reader, CsvOptions,
};
