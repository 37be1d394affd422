use nullity_processing::processing::{nullity_sort, nullity_sort_with, Axis, SortOptions, SortOrder};
use nullity_processing::types::{DataSet, DataType, Field, Schema, Value};
use nullity_processing::{NullityError, NullityFrame};
use polars::prelude::*;

// A=[0, null, null], B=[0, 0, null]
fn ab_frame() -> DataFrame {
    df!(
        "A" => &[Some(0.0f64), None, None],
        "B" => &[Some(0.0f64), Some(0.0), None],
        "row" => &[0i64, 1, 2]
    )
    .unwrap()
}

fn row_order(df: &DataFrame) -> Vec<i64> {
    df.column("row")
        .unwrap()
        .i64()
        .unwrap()
        .into_no_null_iter()
        .collect()
}

#[test]
fn no_op() {
    let df = ab_frame();
    let out = nullity_sort(&df, None, Axis::Columns).unwrap();
    assert!(out.equals_missing(&df));
}

#[test]
fn ascending_sort() {
    let out = nullity_sort(&ab_frame(), Some(SortOrder::Ascending), Axis::Columns).unwrap();
    assert_eq!(row_order(&out), vec![2, 1, 0]);
    assert_eq!(out.column_names(), vec!["A", "B", "row"]);
}

#[test]
fn descending_sort() {
    let out = nullity_sort(&ab_frame(), Some(SortOrder::Descending), Axis::Columns).unwrap();
    assert_eq!(row_order(&out), vec![0, 1, 2]);
}

#[test]
fn rows_axis_reorders_columns() {
    let opts = SortOptions::parse(Some("ascending"), "rows").unwrap();
    let out = nullity_sort_with(&ab_frame(), &opts).unwrap();
    assert_eq!(out.column_names(), vec!["A", "B", "row"]);

    let opts = SortOptions::parse(Some("descending"), "rows").unwrap();
    let out = nullity_sort_with(&ab_frame(), &opts).unwrap();
    assert_eq!(out.column_names(), vec!["row", "B", "A"]);
    assert_eq!(out.height(), 3);
}

#[test]
fn bad_arguments_are_invalid() {
    assert!(matches!(
        SortOptions::parse(Some("up"), "columns"),
        Err(NullityError::InvalidArgument { .. })
    ));
    assert!(matches!(
        SortOptions::parse(Some("ascending"), "cells"),
        Err(NullityError::InvalidArgument { .. })
    ));
}

#[test]
fn no_sort_ignores_the_axis_argument() {
    let opts = SortOptions::parse(None, "cells").unwrap();
    assert_eq!(opts, SortOptions::default());
    let out = nullity_sort_with(&ab_frame(), &opts).unwrap();
    assert!(out.equals_missing(&ab_frame()));
}

#[test]
fn dataset_and_polars_agree() {
    let ds = DataSet::new(
        Schema::new(vec![
            Field::new("A", DataType::Float64),
            Field::new("B", DataType::Float64),
            Field::new("row", DataType::Int64),
        ]),
        vec![
            vec![Value::Float64(0.0), Value::Float64(0.0), Value::Int64(0)],
            vec![Value::Null, Value::Float64(0.0), Value::Int64(1)],
            vec![Value::Null, Value::Null, Value::Int64(2)],
        ],
    );

    for order in [SortOrder::Ascending, SortOrder::Descending] {
        let from_ds: Vec<i64> = nullity_sort(&ds, Some(order), Axis::Columns)
            .unwrap()
            .rows
            .iter()
            .map(|row| match row[2] {
                Value::Int64(v) => v,
                _ => unreachable!(),
            })
            .collect();
        let from_df = row_order(&nullity_sort(&ab_frame(), Some(order), Axis::Columns).unwrap());
        assert_eq!(from_ds, from_df, "order={order}");

        let ds_cols = nullity_sort(&ds, Some(order), Axis::Rows).unwrap().column_names();
        let df_cols = nullity_sort(&ab_frame(), Some(order), Axis::Rows)
            .unwrap()
            .column_names();
        assert_eq!(ds_cols, df_cols, "order={order}");
    }
}
