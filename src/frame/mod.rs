//! The dataframe collaborator that nullity operations are written against.
//!
//! [`NullityFrame`] exposes only what sorting and filtering by nullity need: ordered column
//! names, the row count, per-column non-null counts, a per-cell nullity mask, and reprojection
//! of columns / reordering of rows by explicit index lists.
//!
//! Implementations are provided for:
//!
//! - [`crate::types::DataSet`] (in-memory, aggregates computed with `rayon`)
//! - [`polars::prelude::DataFrame`]

mod dataset;
mod polars_frame;

use crate::error::NullityResult;

/// Capabilities a tabular engine must provide for nullity sort/filter.
///
/// All methods are read-only: reprojections return new frames and never mutate `self`.
pub trait NullityFrame: Clone {
    /// Column names in order.
    fn column_names(&self) -> Vec<String>;

    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Number of non-null cells per column, in column order.
    fn non_null_counts(&self) -> NullityResult<Vec<usize>>;

    /// Row-major presence matrix for every cell.
    fn nullity_mask(&self) -> NullityResult<NullityMask>;

    /// New frame holding only the columns at `indices`, in that order.
    fn select_columns(&self, indices: &[usize]) -> NullityResult<Self>;

    /// New frame holding the rows at `indices`, in that order.
    fn take_rows(&self, indices: &[usize]) -> NullityResult<Self>;
}

/// Row-major boolean matrix, `true` where a cell is present (non-null).
///
/// Built on demand for a single operation; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NullityMask {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl NullityMask {
    /// An all-null mask of the given shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![false; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Mark a cell as present or null.
    ///
    /// # Panics
    ///
    /// Panics if (`row`, `column`) is outside the mask.
    pub fn set(&mut self, row: usize, column: usize, present: bool) {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({row}, {column}) outside {}x{} mask",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + column] = present;
    }

    /// Whether a cell is present. Cells outside the mask are reported as null.
    pub fn is_present(&self, row: usize, column: usize) -> bool {
        row < self.rows && column < self.columns && self.cells[row * self.columns + column]
    }

    /// Nullity vector of one row across all columns.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[bool] {
        let start = row * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Nullity vector of one column across all rows.
    pub fn column(&self, column: usize) -> Vec<bool> {
        (0..self.rows).map(|row| self.is_present(row, column)).collect()
    }
}

pub(crate) fn check_indices(
    indices: &[usize],
    len: usize,
    out_of_bounds: impl Fn(usize) -> crate::error::NullityError,
) -> NullityResult<()> {
    match indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(out_of_bounds(index)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::NullityMask;

    #[test]
    fn new_mask_is_all_null() {
        let mask = NullityMask::new(2, 3);
        assert_eq!(mask.rows(), 2);
        assert_eq!(mask.columns(), 3);
        assert_eq!(mask.row(1), &[false, false, false]);
    }

    #[test]
    fn rows_and_columns_read_back_what_was_set() {
        let mut mask = NullityMask::new(2, 2);
        mask.set(0, 1, true);
        mask.set(1, 1, true);

        assert_eq!(mask.row(0), &[false, true]);
        assert_eq!(mask.column(1), vec![true, true]);
        assert_eq!(mask.column(0), vec![false, false]);
        assert!(!mask.is_present(5, 0));
    }

    #[test]
    #[should_panic(expected = "outside 1x1 mask")]
    fn set_panics_outside_mask() {
        let mut mask = NullityMask::new(1, 1);
        mask.set(1, 0, true);
    }
}
