use polars::prelude::*;

use crate::error::{NullityError, NullityResult};

use super::{check_indices, NullityFrame, NullityMask};

impl NullityFrame for DataFrame {
    fn column_names(&self) -> Vec<String> {
        self.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    fn row_count(&self) -> usize {
        self.height()
    }

    fn column_count(&self) -> usize {
        self.width()
    }

    fn non_null_counts(&self) -> NullityResult<Vec<usize>> {
        let height = self.height();
        self.get_column_names()
            .into_iter()
            .map(|name| -> NullityResult<usize> {
                Ok(height - self.column(name.as_str())?.null_count())
            })
            .collect()
    }

    fn nullity_mask(&self) -> NullityResult<NullityMask> {
        let mut mask = NullityMask::new(self.height(), self.width());
        for (column_idx, name) in self.get_column_names().into_iter().enumerate() {
            let present = self.column(name.as_str())?.is_not_null();
            for (row, is_present) in present.iter().enumerate() {
                mask.set(row, column_idx, is_present.unwrap_or(false));
            }
        }
        Ok(mask)
    }

    fn select_columns(&self, indices: &[usize]) -> NullityResult<Self> {
        let names = self.get_column_names();
        check_indices(indices, names.len(), |index| NullityError::ColumnOutOfBounds {
            index,
            columns: names.len(),
        })?;
        let selection: Vec<PlSmallStr> = indices.iter().map(|&i| names[i].clone()).collect();
        Ok(self.select(selection)?)
    }

    fn take_rows(&self, indices: &[usize]) -> NullityResult<Self> {
        let rows = self.height();
        check_indices(indices, rows, |index| NullityError::RowOutOfBounds { index, rows })?;
        let positions = indices
            .iter()
            .map(|&i| {
                IdxSize::try_from(i).map_err(|_| NullityError::RowOutOfBounds { index: i, rows })
            })
            .collect::<NullityResult<Vec<IdxSize>>>()?;
        let order = IdxCa::from_vec("nullity_order".into(), positions);
        Ok(self.take(&order)?)
    }
}
