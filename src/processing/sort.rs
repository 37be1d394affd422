//! Nullity sorting: reorder rows (or columns) by their missingness pattern.
//!
//! Keys are nullity vectors (`true` = present). They are ordered by the number of present cells
//! first, then lexicographically over the whole vector with `false < true`. Sorting is stable in
//! both directions, so entries with identical vectors keep their source order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NullityError, NullityResult};
use crate::frame::NullityFrame;

/// Direction of a nullity sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Most-null entries first.
    Ascending,
    /// Most-complete entries first.
    Descending,
}

impl FromStr for SortOrder {
    type Err = NullityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            other => Err(NullityError::invalid_argument(format!(
                "sort must be \"ascending\" or \"descending\" (got \"{other}\")"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("ascending"),
            Self::Descending => f.write_str("descending"),
        }
    }
}

/// Which nullity vectors are used as sort keys.
///
/// The names follow the axis the vectors run along, not the thing being moved:
/// [`Axis::Columns`] builds one vector per row (across the columns) and reorders rows, while
/// [`Axis::Rows`] builds one vector per column (across the rows) and reorders columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Reorder rows.
    #[default]
    Columns,
    /// Reorder columns.
    Rows,
}

impl FromStr for Axis {
    type Err = NullityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "columns" => Ok(Self::Columns),
            "rows" => Ok(Self::Rows),
            other => Err(NullityError::invalid_argument(format!(
                "axis must be \"rows\" or \"columns\" (got \"{other}\")"
            ))),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns => f.write_str("columns"),
            Self::Rows => f.write_str("rows"),
        }
    }
}

/// Arguments of [`nullity_sort`], loadable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    /// `None` leaves the frame untouched.
    pub sort: Option<SortOrder>,
    /// Which vectors are the sort keys.
    pub axis: Axis,
}

impl SortOptions {
    /// Build options from their string forms, failing with `InvalidArgument` on unknown values.
    ///
    /// With `sort = None` the result is identity and `axis` is not inspected.
    pub fn parse(sort: Option<&str>, axis: &str) -> NullityResult<Self> {
        let Some(sort) = sort else {
            return Ok(Self::default());
        };
        Ok(Self {
            sort: Some(sort.parse()?),
            axis: axis.parse()?,
        })
    }
}

/// Sort `frame` by nullity.
///
/// - `sort = None` returns the frame unchanged.
/// - [`Axis::Columns`] reorders rows; [`Axis::Rows`] reorders columns.
/// - Frames with zero rows or zero columns are returned unchanged.
///
/// The input frame is never modified.
///
/// # Examples
///
/// ```rust
/// use nullity_processing::processing::{nullity_sort, Axis, SortOrder};
/// use nullity_processing::types::{DataSet, DataType, Field, Schema, Value};
///
/// let ds = DataSet::new(
///     Schema::new(vec![Field::new("A", DataType::Int64), Field::new("B", DataType::Int64)]),
///     vec![
///         vec![Value::Null, Value::Null],
///         vec![Value::Int64(0), Value::Int64(0)],
///     ],
/// );
///
/// let sorted = nullity_sort(&ds, Some(SortOrder::Descending), Axis::Columns).unwrap();
/// assert_eq!(sorted.rows[0], vec![Value::Int64(0), Value::Int64(0)]);
/// ```
pub fn nullity_sort<F: NullityFrame>(
    frame: &F,
    sort: Option<SortOrder>,
    axis: Axis,
) -> NullityResult<F> {
    let Some(order) = sort else {
        return Ok(frame.clone());
    };
    if frame.row_count() == 0 || frame.column_count() == 0 {
        return Ok(frame.clone());
    }

    let mask = frame.nullity_mask()?;
    match axis {
        Axis::Columns => {
            let keys: Vec<&[bool]> = (0..mask.rows()).map(|row| mask.row(row)).collect();
            let permutation = sorted_permutation(&keys, order);
            tracing::debug!(%order, rows = permutation.len(), "nullity sort reordering rows");
            frame.take_rows(&permutation)
        }
        Axis::Rows => {
            let keys: Vec<Vec<bool>> = (0..mask.columns()).map(|column| mask.column(column)).collect();
            let permutation = sorted_permutation(&keys, order);
            tracing::debug!(%order, ?permutation, "nullity sort reordering columns");
            frame.select_columns(&permutation)
        }
    }
}

/// [`nullity_sort`] taking its arguments from [`SortOptions`].
pub fn nullity_sort_with<F: NullityFrame>(frame: &F, options: &SortOptions) -> NullityResult<F> {
    nullity_sort(frame, options.sort, options.axis)
}

/// Total order on nullity vectors: present-cell count, then lexicographic with `false < true`.
pub fn compare_nullity(a: &[bool], b: &[bool]) -> Ordering {
    present_count(a)
        .cmp(&present_count(b))
        .then_with(|| a.cmp(b))
}

fn present_count(key: &[bool]) -> usize {
    key.iter().filter(|&&present| present).count()
}

fn sorted_permutation<K: AsRef<[bool]>>(keys: &[K], order: SortOrder) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..keys.len()).collect();
    // `sort_by` is stable; ties keep source order in both directions.
    permutation.sort_by(|&a, &b| {
        let ord = compare_nullity(keys[a].as_ref(), keys[b].as_ref());
        match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        }
    });
    permutation
}
