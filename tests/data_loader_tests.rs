use std::io::Write;

use scatter_rs::api::{ChartConfig, load_dataset_from_path, load_dataset_from_reader};
use scatter_rs::core::Attribute;
use scatter_rs::error::ChartError;
use scatter_rs::render::NullRenderer;
use scatter_rs::ScatterChart;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/indicators.csv");

#[test]
fn fixture_loads_every_row_and_ignores_extra_columns() {
    let dataset = load_dataset_from_path(FIXTURE).expect("fixture loads");
    assert_eq!(dataset.len(), 6);

    let alabama = dataset.get(0).expect("first record");
    assert_eq!(alabama.state, "Alabama");
    assert_eq!(alabama.abbr, "AL");
    assert_eq!(alabama.poverty, 19.3);
    assert_eq!(alabama.age, 38.6);
    assert_eq!(alabama.income, 42_830.0);
    assert_eq!(alabama.healthcare, 13.9);
    assert_eq!(alabama.smokes, 21.1);
    assert_eq!(alabama.obesity, 33.5);

    let colorado = dataset.get(5).expect("last record");
    assert_eq!(colorado.abbr, "CO");
    assert_eq!(dataset.extent(Attribute::Poverty), Some((11.2, 19.3)));
}

#[test]
fn column_order_does_not_matter() {
    let csv = "abbr,obesity,smokes,healthcare,income,age,poverty,state\n\
               AL,32.5,21.3,11.5,42278,38.1,18.4,Alabama\n";
    let dataset = load_dataset_from_reader(csv.as_bytes()).expect("dataset");
    let record = dataset.get(0).expect("record");
    assert_eq!(record.state, "Alabama");
    assert_eq!(record.poverty, 18.4);
    assert_eq!(record.obesity, 32.5);
}

#[test]
fn non_numeric_cells_become_nan() {
    let csv = "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
               Alabama,AL,18.4,,42278,n/a,21.3,32.5\n";
    let dataset = load_dataset_from_reader(csv.as_bytes()).expect("dataset");
    let record = dataset.get(0).expect("record");
    assert!(record.age.is_nan());
    assert!(record.healthcare.is_nan());
    assert_eq!(record.income, 42_278.0);
}

#[test]
fn missing_required_column_is_rejected() {
    let csv = "state,abbr,poverty,age,income,healthcare,smokes\n\
               Alabama,AL,18.4,38.1,42278,11.5,21.3\n";
    let err = load_dataset_from_reader(csv.as_bytes()).expect_err("must fail");
    assert!(matches!(err, ChartError::InvalidData(message) if message.contains("obesity")));
}

#[test]
fn ragged_row_is_rejected() {
    let csv = "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
               Alabama,AL,18.4,38.1,42278,11.5,21.3\n";
    let err = load_dataset_from_reader(csv.as_bytes()).expect_err("must fail");
    assert!(matches!(err, ChartError::Csv(_)));
}

#[test]
fn header_only_table_is_rejected() {
    let csv = "state,abbr,poverty,age,income,healthcare,smokes,obesity\n";
    assert!(load_dataset_from_reader(csv.as_bytes()).is_err());
}

#[test]
fn unreadable_path_reports_the_path() {
    let err = load_dataset_from_path("/definitely/not/here.csv").expect_err("must fail");
    match err {
        ChartError::DataLoad { path, .. } => {
            assert_eq!(path.to_str(), Some("/definitely/not/here.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn startup_yields_no_chart_when_loading_fails() {
    let chart = ScatterChart::startup(
        NullRenderer::default(),
        "/definitely/not/here.csv",
        ChartConfig::default(),
    );
    assert!(chart.is_none());

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "state,abbr,poverty").expect("write");
    let chart = ScatterChart::startup(NullRenderer::default(), file.path(), ChartConfig::default());
    assert!(chart.is_none());
}

#[test]
fn startup_builds_chart_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        "state,abbr,poverty,age,income,healthcare,smokes,obesity\n\
         Alabama,AL,18.4,38.1,42278,11.5,21.3,32.5\n\
         Alaska,AK,11.4,33.3,71583,15,19.9,29.7\n"
    )
    .expect("write");

    let chart = ScatterChart::startup(NullRenderer::default(), file.path(), ChartConfig::default())
        .expect("chart");
    assert_eq!(chart.dataset().len(), 2);
    assert_eq!(chart.scene().markers.len(), 2);
    assert_eq!(chart.scene().labels.len(), 2);
}
