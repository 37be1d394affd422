//! Core data model types for the in-memory backend.
//!
//! A [`DataSet`] is a [`Schema`] (ordered, typed [`Field`]s) plus row-major [`Value`] storage.
//! Nullity is tracked per cell: only [`Value::Null`] counts as missing.

use crate::error::{NullityError, NullityResult};

/// Logical data type for a schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    /// 64-bit signed integer.
    Int64,
    /// 64-bit floating point number.
    Float64,
    /// Boolean.
    Bool,
    /// UTF-8 string.
    Utf8,
}

/// A single named, typed field in a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field/column name.
    pub name: String,
    /// Field data type.
    pub data_type: DataType,
}

impl Field {
    /// Create a new field.
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

/// Ordered list of fields describing the columns of a [`DataSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Ordered list of fields.
    pub fields: Vec<Field>,
}

impl Schema {
    /// Create a new schema from fields.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Iterate field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the index of a field by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A single typed value in a [`DataSet`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing value.
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float. `NaN` is a present value, not a null.
    Float64(f64),
    /// Boolean.
    Bool(bool),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Whether this value is missing.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

static NULL_VALUE: Value = Value::Null;

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as the [`Schema`] fields. A row that is
/// shorter than the schema is treated as null in its missing trailing cells.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    /// Schema describing row shape.
    pub schema: Schema,
    /// Row-major value storage.
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    /// Create a dataset from schema and rows.
    pub fn new(schema: Schema, rows: Vec<Vec<Value>>) -> Self {
        Self { schema, rows }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the dataset.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Whether the cell at (`row`, `column`) is null. Out-of-range cells are null.
    pub fn is_null(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .is_none_or(Value::is_null)
    }

    /// Iterate the values of one column, top to bottom.
    pub fn column_values(&self, column: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows
            .iter()
            .map(move |row| row.get(column).unwrap_or(&NULL_VALUE))
    }

    /// Create a new dataset containing only the columns at `indices`, in that order.
    ///
    /// Both the schema and every row are reprojected. Row order is unchanged.
    pub fn select_columns(&self, indices: &[usize]) -> NullityResult<Self> {
        let columns = self.column_count();
        let fields = indices
            .iter()
            .map(|&index| {
                self.schema
                    .fields
                    .get(index)
                    .cloned()
                    .ok_or(NullityError::ColumnOutOfBounds { index, columns })
            })
            .collect::<NullityResult<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|&index| row.get(index).cloned().unwrap_or(Value::Null))
                    .collect()
            })
            .collect();

        Ok(Self {
            schema: Schema::new(fields),
            rows,
        })
    }

    /// Create a new dataset whose rows are the rows at `indices`, in that order.
    ///
    /// The returned dataset preserves the original schema.
    pub fn take_rows(&self, indices: &[usize]) -> NullityResult<Self> {
        let rows = indices
            .iter()
            .map(|&index| {
                self.rows.get(index).cloned().ok_or(NullityError::RowOutOfBounds {
                    index,
                    rows: self.row_count(),
                })
            })
            .collect::<NullityResult<Vec<_>>>()?;

        Ok(Self {
            schema: self.schema.clone(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{DataSet, DataType, Field, Schema, Value};
    use crate::error::NullityError;

    fn sample_dataset() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("active", DataType::Bool),
            Field::new("name", DataType::Utf8),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Bool(true), Value::Utf8("a".to_string())],
            vec![Value::Int64(2), Value::Null, Value::Utf8("b".to_string())],
            vec![Value::Null, Value::Bool(true)],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn schema_index_of_works() {
        let ds = sample_dataset();
        assert_eq!(ds.schema.index_of("id"), Some(0));
        assert_eq!(ds.schema.index_of("name"), Some(2));
        assert_eq!(ds.schema.index_of("missing"), None);
        assert_eq!(ds.column_count(), 3);
    }

    #[test]
    fn is_null_treats_short_rows_as_null() {
        let ds = sample_dataset();
        assert!(!ds.is_null(0, 0));
        assert!(ds.is_null(1, 1));
        assert!(ds.is_null(2, 0));
        assert!(ds.is_null(2, 2));
        assert!(ds.is_null(99, 0));
    }

    #[test]
    fn nan_is_not_null() {
        assert!(!Value::Float64(f64::NAN).is_null());
        assert!(Value::Null.is_null());
    }

    #[test]
    fn select_columns_reprojects_schema_and_rows() {
        let ds = sample_dataset();
        let out = ds.select_columns(&[2, 0]).unwrap();

        assert_eq!(out.schema.field_names().collect::<Vec<_>>(), vec!["name", "id"]);
        assert_eq!(
            out.rows,
            vec![
                vec![Value::Utf8("a".to_string()), Value::Int64(1)],
                vec![Value::Utf8("b".to_string()), Value::Int64(2)],
                vec![Value::Null, Value::Null],
            ]
        );
        // Original unchanged
        assert_eq!(ds.column_count(), 3);
    }

    #[test]
    fn select_columns_rejects_out_of_range_index() {
        let ds = sample_dataset();
        let err = ds.select_columns(&[0, 3]).unwrap_err();
        assert!(matches!(
            err,
            NullityError::ColumnOutOfBounds { index: 3, columns: 3 }
        ));
    }

    #[test]
    fn take_rows_reorders_and_preserves_schema() {
        let ds = sample_dataset();
        let out = ds.take_rows(&[2, 0, 1]).unwrap();

        assert_eq!(out.schema, ds.schema);
        assert_eq!(out.rows[0], ds.rows[2]);
        assert_eq!(out.rows[1], ds.rows[0]);
        assert_eq!(out.rows[2], ds.rows[1]);
    }

    #[test]
    fn take_rows_rejects_out_of_range_index() {
        let ds = sample_dataset();
        let err = ds.take_rows(&[5]).unwrap_err();
        assert!(err.to_string().contains("row index 5 out of bounds"));
    }
}
