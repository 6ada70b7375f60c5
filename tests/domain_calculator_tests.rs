use approx::assert_relative_eq;
use scatter_rs::ChartError;
use scatter_rs::core::{Domain, Record, RecordSet, compute_domains, field_extent};

fn record(id: &str, pages: f64, log_rank: f64) -> Record {
    Record::new(id, id, format!("https://example.test/{id}"))
        .with_field("pages", pages)
        .with_field("log_sales_rank", log_rank)
}

#[test]
fn padding_extends_each_side_by_an_eighth_of_the_span() {
    let records =
        RecordSet::new(vec![record("X1", 100.0, 1.0), record("X2", 400.0, 3.0)]).expect("set");
    let domains = compute_domains(&records, "pages", "log_sales_rank", 0.125).expect("domains");

    assert_relative_eq!(domains.x.min, 62.5);
    assert_relative_eq!(domains.x.max, 437.5);
    assert_relative_eq!(domains.y.min, 0.75);
    assert_relative_eq!(domains.y.max, 3.25);
}

#[test]
fn single_record_yields_zero_width_domain() {
    let records = RecordSet::new(vec![record("S", 250.0, 2.0)]).expect("set");
    let domains = compute_domains(&records, "pages", "log_sales_rank", 0.125).expect("domains");

    assert_eq!(domains.x, Domain::new(250.0, 250.0).expect("domain"));
    assert!(domains.x.is_degenerate());
    assert!(domains.y.is_degenerate());
}

#[test]
fn empty_record_set_is_rejected() {
    let records = RecordSet::default();
    let err = compute_domains(&records, "pages", "log_sales_rank", 0.125)
        .expect_err("empty set must fail");
    assert!(matches!(err, ChartError::EmptyDataset));
}

#[test]
fn missing_axis_field_is_reported_with_record_id() {
    let records = RecordSet::new(vec![
        record("A", 1.0, 1.0),
        Record::new("B", "B", "u").with_field("pages", 2.0),
    ])
    .expect("set");
    let err = field_extent(&records, "log_sales_rank").expect_err("missing field");
    match err {
        ChartError::MissingField { record_id, field } => {
            assert_eq!(record_id, "B");
            assert_eq!(field, "log_sales_rank");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn negative_padding_is_rejected() {
    let records = RecordSet::new(vec![record("A", 1.0, 1.0)]).expect("set");
    let err = compute_domains(&records, "pages", "log_sales_rank", -0.5)
        .expect_err("negative padding must fail");
    assert!(matches!(err, ChartError::InvalidConfig(_)));
}
