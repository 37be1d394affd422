//! Nullity filtering: keep the most (or least) complete columns.
//!
//! Filtering runs in three passes over a single [`NullityReport`]:
//!
//! 1. compute per-column non-null counts once,
//! 2. keep columns whose completeness ratio passes the `p` cutoff (source order preserved),
//! 3. stably rank the survivors by non-null count and truncate to `n`.
//!
//! The count cutoff only ever narrows the percentile survivors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{NullityError, NullityResult};
use crate::frame::NullityFrame;

use super::stats::{nullity_report, ColumnNullity, NullityReport};

/// Which end of the completeness range a filter keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterDirection {
    /// Keep the most complete columns (`ratio >= p`, highest counts).
    Top,
    /// Keep the least complete columns (`ratio <= p`, lowest counts).
    Bottom,
}

impl FromStr for FilterDirection {
    type Err = NullityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => Err(NullityError::invalid_argument(format!(
                "filter must be \"top\" or \"bottom\" (got \"{other}\")"
            ))),
        }
    }
}

impl fmt::Display for FilterDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => f.write_str("top"),
            Self::Bottom => f.write_str("bottom"),
        }
    }
}

/// Arguments of [`nullity_filter`], loadable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// `None` leaves the frame untouched. Unrecognised directions deserialise to `None`.
    #[serde(deserialize_with = "lenient_direction")]
    pub filter: Option<FilterDirection>,
    /// Completeness ratio cutoff in `[0, 1]`; `None` disables it.
    pub p: Option<f64>,
    /// Maximum number of columns to keep; `0` disables the count cutoff.
    pub n: usize,
}

impl FilterOptions {
    /// Build options from the string form of the direction.
    ///
    /// Anything other than `"top"` or `"bottom"` yields `filter: None`, and `p` is only
    /// validated when a direction was recognised.
    pub fn parse(filter: Option<&str>, p: Option<f64>, n: usize) -> NullityResult<Self> {
        let options = Self {
            filter: filter.and_then(|s| FilterDirection::from_str(s).ok()),
            p,
            n,
        };
        if options.filter.is_some() {
            options.validate()?;
        }
        Ok(options)
    }

    /// Check that `p` is a finite ratio within `[0, 1]`.
    pub fn validate(&self) -> NullityResult<()> {
        match self.p {
            Some(p) if !(0.0..=1.0).contains(&p) => Err(NullityError::invalid_argument(format!(
                "p must be a completeness ratio in [0, 1] (got {p})"
            ))),
            _ => Ok(()),
        }
    }
}

fn lenient_direction<'de, D>(deserializer: D) -> Result<Option<FilterDirection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse().ok()))
}

/// Filter the columns of `frame` by completeness.
///
/// - `filter = None` returns the frame unchanged, whatever `p` and `n` are.
/// - `p = Some(ratio)` keeps columns with completeness `>= ratio` ([`FilterDirection::Top`]) or
///   `<= ratio` ([`FilterDirection::Bottom`]), preserving source column order.
/// - `n > 0` then keeps at most `n` of those columns: the highest non-null counts for `Top`, the
///   lowest for `Bottom`, in that ranked order. Equal counts keep source order.
///
/// Row count, row order and cell values are never changed.
///
/// # Errors
///
/// [`NullityError::InvalidArgument`] if `p` is outside `[0, 1]` (checked before any work).
///
/// # Examples
///
/// ```rust
/// use nullity_processing::processing::{nullity_filter, FilterDirection};
/// use nullity_processing::types::{DataSet, DataType, Field, Schema, Value};
///
/// let schema = Schema::new(vec![
///     Field::new("A", DataType::Int64),
///     Field::new("B", DataType::Int64),
///     Field::new("C", DataType::Int64),
/// ]);
/// let ds = DataSet::new(
///     schema,
///     vec![
///         vec![Value::Int64(0), Value::Int64(0), Value::Int64(0)],
///         vec![Value::Null, Value::Int64(0), Value::Int64(0)],
///         vec![Value::Null, Value::Null, Value::Int64(0)],
///     ],
/// );
///
/// let top = nullity_filter(&ds, Some(FilterDirection::Top), Some(0.6), 0).unwrap();
/// assert_eq!(top.schema.field_names().collect::<Vec<_>>(), vec!["B", "C"]);
/// ```
pub fn nullity_filter<F: NullityFrame>(
    frame: &F,
    filter: Option<FilterDirection>,
    p: Option<f64>,
    n: usize,
) -> NullityResult<F> {
    nullity_filter_with(frame, &FilterOptions { filter, p, n })
}

/// [`nullity_filter`] taking its arguments from [`FilterOptions`].
pub fn nullity_filter_with<F: NullityFrame>(
    frame: &F,
    options: &FilterOptions,
) -> NullityResult<F> {
    let Some(direction) = options.filter else {
        return Ok(frame.clone());
    };
    options.validate()?;
    if options.p.is_none() && options.n == 0 {
        return Ok(frame.clone());
    }

    let report = nullity_report(frame)?;
    let keep = select_by_nullity(&report, direction, options.p, options.n);

    tracing::debug!(
        %direction,
        p = ?options.p,
        n = options.n,
        kept = keep.len(),
        "{} columns removed by nullity filter",
        report.columns.len() - keep.len()
    );

    frame.select_columns(&keep)
}

/// Indices of the columns that survive both cutoffs, in output order.
pub(crate) fn select_by_nullity(
    report: &NullityReport,
    direction: FilterDirection,
    p: Option<f64>,
    n: usize,
) -> Vec<usize> {
    let mut survivors: Vec<&ColumnNullity> = report
        .columns
        .iter()
        .filter(|column| passes_ratio(column, direction, p))
        .collect();

    if n > 0 {
        survivors.sort_by(|a, b| match direction {
            FilterDirection::Top => b.non_null.cmp(&a.non_null),
            FilterDirection::Bottom => a.non_null.cmp(&b.non_null),
        });
        survivors.truncate(n);
    }

    survivors.iter().map(|column| column.index).collect()
}

fn passes_ratio(column: &ColumnNullity, direction: FilterDirection, p: Option<f64>) -> bool {
    // Without rows there is no completeness to judge.
    match (p, column.completeness()) {
        (Some(p), Some(ratio)) => match direction {
            FilterDirection::Top => ratio >= p,
            FilterDirection::Bottom => ratio <= p,
        },
        _ => true,
    }
}
