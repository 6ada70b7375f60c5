use approx::assert_relative_eq;
use scatter_rs::ChartError;
use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{
    ContainerSize, FileDatasetSource, LoadError, Record, ScreenPoint, StaticDatasetSource,
};
use scatter_rs::render::NullRenderer;

const BOOKS_JSON: &str = r#"[
  {"ASIN": "X1", "title": "First", "url": "https://example.test/X1", "authors": ["Ann"], "pages": "100", "sales_rank": "10"},
  {"ASIN": "X2", "title": "Second", "url": "https://example.test/X2", "authors": ["Bob"], "pages": 400, "sales_rank": 1000}
]"#;

fn empty_chart() -> ScatterChart<NullRenderer> {
    ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(800.0, 1_000.0),
    )
    .expect("chart init")
}

#[test]
fn json_payload_is_cleaned_and_charted() {
    let mut chart = empty_chart();
    chart.load_json(BOOKS_JSON).expect("load");

    let record = chart.record("X2").expect("record");
    assert_relative_eq!(record.field("pages").expect("pages"), 400.0);
    assert_relative_eq!(record.field("log_sales_rank").expect("log"), 3.0);

    let domains = chart.domains().expect("domains");
    assert_relative_eq!(domains.y.min, 0.75);
    assert_relative_eq!(domains.y.max, 3.25);
}

#[test]
fn populate_reads_from_dataset_source() {
    let mut chart = empty_chart();
    chart
        .populate(&StaticDatasetSource::new("memory://books", BOOKS_JSON))
        .expect("populate");
    assert_eq!(chart.record_count(), 2);
}

#[test]
fn missing_file_surfaces_fetch_error() {
    let mut chart = empty_chart();
    let err = chart
        .populate(&FileDatasetSource::new("does/not/exist.json"))
        .expect_err("missing file");
    assert!(matches!(err, ChartError::Load(LoadError::Fetch { .. })));
    assert!(chart.domains().is_none());
}

#[test]
fn malformed_payload_leaves_previous_chart_untouched() {
    let mut chart = empty_chart();
    chart.load_json(BOOKS_JSON).expect("load");
    chart.click_mark("X1").expect("show");
    chart
        .zoom_to(2.0, ScreenPoint::new(35.0, 15.0))
        .expect("zoom");
    let before = chart.snapshot();

    let err = chart.load_json("{not json").expect_err("bad json");
    assert!(matches!(err, ChartError::Load(LoadError::Parse(_))));
    assert_eq!(chart.snapshot(), before);

    let err = chart
        .load_json(r#"[{"ASIN": "Z", "title": "t", "url": "u", "pages": "many", "sales_rank": 3}]"#)
        .expect_err("non numeric");
    assert!(matches!(
        err,
        ChartError::Load(LoadError::NonNumeric { index: 0, .. })
    ));
    assert_eq!(chart.snapshot(), before);
}

#[test]
fn empty_dataset_is_rejected() {
    let mut chart = empty_chart();
    let err = chart.load_json("[]").expect_err("empty");
    assert!(matches!(err, ChartError::EmptyDataset));
    assert!(chart.marks().is_empty());
}

#[test]
fn duplicate_ids_are_rejected() {
    let mut chart = empty_chart();
    let record = Record::new("D", "t", "u")
        .with_field("pages", 1.0)
        .with_field("log_sales_rank", 1.0);
    let err = chart
        .load_records(vec![record.clone(), record])
        .expect_err("duplicate");
    assert!(matches!(err, ChartError::DuplicateRecordId(id) if id == "D"));
}

#[test]
fn reload_tears_down_marks_tooltip_and_transform() {
    let mut chart = empty_chart();
    chart.load_json(BOOKS_JSON).expect("load");
    chart.click_mark("X1").expect("show");
    chart
        .zoom_to(4.0, ScreenPoint::new(35.0, 15.0))
        .expect("zoom");

    chart
        .load_records(vec![
            Record::new("Y1", "Third", "u3")
                .with_field("pages", 10.0)
                .with_field("log_sales_rank", 5.0),
            Record::new("Y2", "Fourth", "u4")
                .with_field("pages", 20.0)
                .with_field("log_sales_rank", 6.0),
        ])
        .expect("reload");

    assert!(!chart.tooltip().is_visible());
    assert!(chart.transform().is_identity());
    assert_eq!(chart.marks().len(), 2);
    assert!(chart.marks().get("X1").is_none());
    assert!(chart.marks().get("Y1").is_some());
    assert!(chart.record("X1").is_none());

    let domains = chart.domains().expect("domains");
    assert_relative_eq!(domains.x.min, 8.75);
    assert_relative_eq!(domains.x.max, 21.25);
}
