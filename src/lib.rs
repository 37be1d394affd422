//! `nullity-processing` reorders and filters tabular datasets by their *nullity*: which cells
//! are missing. It is a helper layer for missing-data visualisation tooling.
//!
//! The two core operations are:
//!
//! - [`processing::nullity_sort`]: reorder rows (or columns) by their missingness pattern,
//!   ascending or descending.
//! - [`processing::nullity_filter`]: keep the most (or least) complete columns, by completeness
//!   ratio and/or an absolute count cutoff.
//!
//! Both are written against [`frame::NullityFrame`], which is implemented for:
//!
//! - the in-memory [`types::DataSet`] (schema + row-major [`types::Value`]s), and
//! - [`polars::prelude::DataFrame`].
//!
//! Nothing is mutated: every call returns a new frame.
//!
//! ## Quick example: filter a Polars frame
//!
//! ```rust
//! use nullity_processing::processing::{nullity_filter, FilterDirection};
//! use nullity_processing::NullityFrame;
//! use polars::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let df = df!(
//!     "A" => &[Some(0i64), None, None],
//!     "B" => &[Some(0i64), Some(0), None],
//!     "C" => &[Some(0i64), Some(0), Some(0)]
//! )?;
//!
//! // The single most complete column.
//! let top = nullity_filter(&df, Some(FilterDirection::Top), None, 1)?;
//! assert_eq!(top.column_names(), vec!["C"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Sorting conventions
//!
//! A nullity vector holds `true` for a present cell. Vectors are ordered by their number of
//! present cells, then lexicographically with `false < true`. Ascending puts the most-null entry
//! first. Both directions are stable: identical vectors keep their source order.
//!
//! ## Modules
//!
//! - [`processing`]: nullity sort, filter, and per-column statistics
//! - [`frame`]: the dataframe collaborator trait and its implementations
//! - [`types`]: in-memory schema + dataset types
//! - [`ingestion`]: CSV loading with configurable null markers
//! - [`execution`]: pooled engine with observer hooks and metrics
//! - [`error`]: error types

pub mod error;
pub mod execution;
pub mod frame;
pub mod ingestion;
pub mod processing;
pub mod types;

pub use error::{IngestionError, IngestionResult, NullityError, NullityResult};
pub use frame::{NullityFrame, NullityMask};
pub use processing::{nullity_filter, nullity_report, nullity_sort};
