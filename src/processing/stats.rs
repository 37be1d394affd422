//! Per-column nullity statistics.
//!
//! A [`NullityReport`] is computed with a single [`NullityFrame::non_null_counts`] call and is the
//! statistic map every filtering decision is made from. It is not cached: callers that filter the
//! same frame repeatedly should keep the report themselves.

use serde::{Deserialize, Serialize};

use crate::error::NullityResult;
use crate::frame::NullityFrame;

/// Nullity statistics of one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNullity {
    /// Position of the column in the source frame.
    pub index: usize,
    /// Column name.
    pub name: String,
    /// Number of present (non-null) cells.
    pub non_null: usize,
    /// Total number of rows in the source frame.
    pub rows: usize,
}

impl ColumnNullity {
    /// Number of null cells.
    pub fn null_count(&self) -> usize {
        self.rows - self.non_null
    }

    /// Completeness ratio `non_null / rows`, in `[0, 1]`.
    ///
    /// Returns `None` for a zero-row frame, where the ratio is undefined.
    pub fn completeness(&self) -> Option<f64> {
        if self.rows == 0 {
            None
        } else {
            Some(self.non_null as f64 / self.rows as f64)
        }
    }
}

/// Nullity statistics for every column of a frame, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullityReport {
    /// Row count of the source frame.
    pub rows: usize,
    /// One entry per column.
    pub columns: Vec<ColumnNullity>,
}

impl NullityReport {
    /// Look up a column's statistics by name (first match).
    pub fn column(&self, name: &str) -> Option<&ColumnNullity> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Columns without any null cell.
    pub fn complete_columns(&self) -> impl Iterator<Item = &ColumnNullity> {
        self.columns.iter().filter(|c| c.non_null == c.rows)
    }

    /// Serialise the report as pretty-printed JSON.
    pub fn to_json(&self) -> NullityResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Compute the [`NullityReport`] of `frame`.
pub fn nullity_report<F: NullityFrame>(frame: &F) -> NullityResult<NullityReport> {
    let rows = frame.row_count();
    let columns = frame
        .column_names()
        .into_iter()
        .zip(frame.non_null_counts()?)
        .enumerate()
        .map(|(index, (name, non_null))| ColumnNullity {
            index,
            name,
            non_null,
            rows,
        })
        .collect();
    Ok(NullityReport { rows, columns })
}
