use rayon::prelude::*;

use crate::error::NullityResult;
use crate::types::DataSet;

use super::{NullityFrame, NullityMask};

impl NullityFrame for DataSet {
    fn column_names(&self) -> Vec<String> {
        self.schema.field_names().map(str::to_owned).collect()
    }

    fn row_count(&self) -> usize {
        DataSet::row_count(self)
    }

    fn column_count(&self) -> usize {
        DataSet::column_count(self)
    }

    fn non_null_counts(&self) -> NullityResult<Vec<usize>> {
        // One full column scan per column; columns are independent.
        Ok((0..DataSet::column_count(self))
            .into_par_iter()
            .map(|column| self.column_values(column).filter(|v| !v.is_null()).count())
            .collect())
    }

    fn nullity_mask(&self) -> NullityResult<NullityMask> {
        let columns = DataSet::column_count(self);
        let mut mask = NullityMask::new(DataSet::row_count(self), columns);
        for row in 0..DataSet::row_count(self) {
            for column in 0..columns {
                mask.set(row, column, !self.is_null(row, column));
            }
        }
        Ok(mask)
    }

    fn select_columns(&self, indices: &[usize]) -> NullityResult<Self> {
        DataSet::select_columns(self, indices)
    }

    fn take_rows(&self, indices: &[usize]) -> NullityResult<Self> {
        DataSet::take_rows(self, indices)
    }
}
