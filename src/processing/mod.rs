//! Nullity transformations.
//!
//! Every function here is generic over [`crate::frame::NullityFrame`], so the same code runs on
//! an in-memory [`crate::types::DataSet`] and on a Polars `DataFrame`. Nothing is mutated; each
//! call returns a new frame.
//!
//! Currently implemented:
//!
//! - [`nullity_sort()`]: reorder rows (or columns) by their nullity pattern
//! - [`nullity_filter()`]: keep columns by completeness ratio and/or count cutoff
//! - [`nullity_report()`]: per-column non-null counts and completeness ratios
//!
//! ## Example: filter → sort
//!
//! ```rust
//! use nullity_processing::processing::{nullity_filter, nullity_sort, Axis, FilterDirection, SortOrder};
//! use nullity_processing::types::{DataSet, DataType, Field, Schema, Value};
//!
//! let schema = Schema::new(vec![
//!     Field::new("id", DataType::Int64),
//!     Field::new("score", DataType::Float64),
//!     Field::new("note", DataType::Utf8),
//! ]);
//! let ds = DataSet::new(
//!     schema,
//!     vec![
//!         vec![Value::Int64(1), Value::Null, Value::Null],
//!         vec![Value::Int64(2), Value::Float64(20.0), Value::Null],
//!         vec![Value::Int64(3), Value::Float64(30.0), Value::Utf8("x".to_string())],
//!     ],
//! );
//!
//! // Drop columns that are less than half complete.
//! let filtered = nullity_filter(&ds, Some(FilterDirection::Top), Some(0.5), 0).unwrap();
//! assert_eq!(filtered.schema.field_names().collect::<Vec<_>>(), vec!["id", "score"]);
//!
//! // Most complete rows first.
//! let sorted = nullity_sort(&filtered, Some(SortOrder::Descending), Axis::Columns).unwrap();
//! assert_eq!(sorted.rows[2], vec![Value::Int64(1), Value::Null]);
//! ```

pub mod filter;
pub mod sort;
pub mod stats;

pub use filter::{nullity_filter, nullity_filter_with, FilterDirection, FilterOptions};
pub use sort::{compare_nullity, nullity_sort, nullity_sort_with, Axis, SortOptions, SortOrder};
pub use stats::{nullity_report, ColumnNullity, NullityReport};
