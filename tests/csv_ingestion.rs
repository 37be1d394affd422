use nullity_processing::ingestion::{
    ingest_csv_from_path, ingest_csv_from_reader, ingest_csv_untyped_from_path, CsvOptions,
};
use nullity_processing::IngestionError;
use nullity_processing::processing::{
    nullity_filter, nullity_report, nullity_sort, Axis, FilterDirection, SortOrder,
};
use nullity_processing::types::{DataSet, DataType, Field, Schema, Value};

fn people_schema() -> Schema {
    Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("name", DataType::Utf8),
        Field::new("score", DataType::Float64),
        Field::new("active", DataType::Bool),
        Field::new("joined", DataType::Utf8),
    ])
}

fn people() -> DataSet {
    ingest_csv_from_path("tests/fixtures/people.csv", &people_schema(), &CsvOptions::default())
        .unwrap()
}

fn ids(ds: &DataSet) -> Vec<i64> {
    ds.rows
        .iter()
        .map(|row| match row[0] {
            Value::Int64(id) => id,
            _ => panic!("id column must be present"),
        })
        .collect()
}

#[test]
fn ingest_csv_from_path_reads_nulls() {
    let ds = people();

    assert_eq!(ds.row_count(), 4);
    assert_eq!(
        ds.rows[1],
        vec![
            Value::Int64(2),
            Value::Null,
            Value::Null,
            Value::Bool(false),
            Value::Null,
        ]
    );

    let report = nullity_report(&ds).unwrap();
    let counts: Vec<usize> = report.columns.iter().map(|c| c.non_null).collect();
    assert_eq!(counts, vec![4, 3, 2, 3, 1]);
}

#[test]
fn untyped_ingestion_has_the_same_nullity() {
    let typed = nullity_report(&people()).unwrap();
    let untyped = ingest_csv_untyped_from_path("tests/fixtures/people.csv", &CsvOptions::default())
        .unwrap();
    assert_eq!(nullity_report(&untyped).unwrap(), typed);
}

#[test]
fn ingested_dataset_filters_by_completeness() {
    let ds = people();

    let top = nullity_filter(&ds, Some(FilterDirection::Top), Some(0.75), 0).unwrap();
    assert_eq!(
        top.schema.field_names().collect::<Vec<_>>(),
        vec!["id", "name", "active"]
    );

    let bottom = nullity_filter(&ds, Some(FilterDirection::Bottom), None, 2).unwrap();
    assert_eq!(
        bottom.schema.field_names().collect::<Vec<_>>(),
        vec!["joined", "score"]
    );
    assert_eq!(bottom.row_count(), ds.row_count());
}

#[test]
fn ingested_dataset_sorts_rows_by_nullity() {
    let ds = people();

    let desc = nullity_sort(&ds, Some(SortOrder::Descending), Axis::Columns).unwrap();
    assert_eq!(ids(&desc), vec![1, 4, 3, 2]);

    let asc = nullity_sort(&ds, Some(SortOrder::Ascending), Axis::Columns).unwrap();
    assert_eq!(ids(&asc), vec![2, 3, 4, 1]);
}

#[test]
fn ingest_csv_errors_on_missing_required_column() {
    let input = "id,name,score,active\n1,Ada,98.5,true\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr, &people_schema(), &CsvOptions::default())
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("missing required column 'joined'"));
}

#[test]
fn ingest_csv_errors_on_type_parse() {
    let input = "id,name,score,active,joined\nnot_an_int,Ada,98.5,true,\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr, &people_schema(), &CsvOptions::default())
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'id'"));
}

#[test]
fn missing_file_is_a_csv_error() {
    let err = ingest_csv_from_path(
        "tests/fixtures/does_not_exist.csv",
        &people_schema(),
        &CsvOptions::default(),
    )
    .unwrap_err();
    // csv::Reader::from_path reports open failures as csv::Error.
    assert!(matches!(err, IngestionError::Csv(_)));
}

#[test]
fn reference_dataset_filters_match_expected_columns() {
    let ds = ingest_csv_untyped_from_path("tests/fixtures/abc.csv", &CsvOptions::default()).unwrap();
    let cases = [
        (FilterDirection::Top, Some(0.6), 0, vec!["B", "C"]),
        (FilterDirection::Bottom, Some(0.6), 0, vec!["A"]),
        (FilterDirection::Top, None, 1, vec!["C"]),
        (FilterDirection::Bottom, None, 1, vec!["A"]),
        (FilterDirection::Top, Some(0.7), 2, vec!["C"]),
        (FilterDirection::Bottom, Some(0.4), 2, vec!["A"]),
    ];
    for (direction, p, n, expected) in cases {
        let out = nullity_filter(&ds, Some(direction), p, n).unwrap();
        assert_eq!(
            out.schema.field_names().collect::<Vec<_>>(),
            expected,
            "filter={direction} p={p:?} n={n}"
        );
    }
}
