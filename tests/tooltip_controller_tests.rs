use approx::assert_relative_eq;
use scatter_rs::ChartError;
use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{ContainerSize, Record, ScreenPoint};
use scatter_rs::render::NullRenderer;

fn books_chart() -> ScatterChart<NullRenderer> {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(800.0, 1_000.0),
    )
    .expect("chart init");
    chart
        .load_records(vec![
            Record::new("X1", "First", "https://example.test/X1")
                .with_authors(["Ann", "Bob"])
                .with_field("pages", 100.0)
                .with_field("sales_rank", 10.0)
                .with_field("log_sales_rank", 1.0),
            Record::new("X2", "Second", "https://example.test/X2")
                .with_field("pages", 400.0)
                .with_field("sales_rank", 1_000.0)
                .with_field("log_sales_rank", 3.0),
        ])
        .expect("load");
    chart
}

#[test]
fn clicks_a_a_b_show_hide_then_show_b() {
    let mut chart = books_chart();

    assert!(chart.click_mark("X1").expect("first click"));
    assert_eq!(chart.tooltip().record_id(), Some("X1"));

    assert!(!chart.click_mark("X1").expect("second click"));
    assert!(!chart.tooltip().is_visible());

    assert!(chart.click_mark("X2").expect("third click"));
    assert_eq!(chart.tooltip().record_id(), Some("X2"));
}

#[test]
fn click_on_other_mark_while_visible_hides_panel() {
    let mut chart = books_chart();
    chart.click_mark("X1").expect("show");
    assert!(!chart.click_mark("X2").expect("hide"));
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn panel_content_lists_title_authors_and_fields() {
    let mut chart = books_chart();
    chart.click_mark("X1").expect("show");

    let panel = chart.tooltip().panel().expect("visible panel");
    assert_eq!(panel.content.title, "First");
    assert_eq!(panel.content.url, "https://example.test/X1");
    let rows: Vec<(&str, &str)> = panel
        .content
        .rows
        .iter()
        .map(|row| (row.label.as_str(), row.value.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Title", "First"),
            ("Author", "Ann, Bob"),
            ("Sales Rank", "10"),
            ("Pages", "100"),
        ]
    );
}

#[test]
fn click_at_surface_point_hits_nearest_mark() {
    let mut chart = books_chart();

    let visible = chart
        .click_at(ScreenPoint::new(35.0 + 75.0, 15.0 + 493.0))
        .expect("click");
    assert_eq!(visible, Some(true));
    assert_eq!(chart.tooltip().record_id(), Some("X1"));

    let missed = chart
        .click_at(ScreenPoint::new(400.0, 300.0))
        .expect("click");
    assert_eq!(missed, None);
    assert!(chart.tooltip().is_visible());
}

#[test]
fn panel_follows_its_mark_through_zoom_and_resize() {
    let mut chart = books_chart();
    chart.click_mark("X1").expect("show");

    chart
        .zoom_to(2.0, ScreenPoint::new(35.0, 15.0))
        .expect("zoom");
    let anchor = chart.tooltip().panel().expect("panel").anchor;
    assert_relative_eq!(anchor.x, 146.0, epsilon = 1e-9);
    assert_relative_eq!(anchor.y, 990.0, epsilon = 1e-9);

    chart
        .resize(ContainerSize::new(400.0, 1_000.0))
        .expect("resize");
    let mark = chart.marks().get("X1").expect("mark").position;
    let anchor = chart.tooltip().panel().expect("panel").anchor;
    assert_eq!(anchor, mark);
    assert_eq!(chart.tooltip().record_id(), Some("X1"));
}

#[test]
fn hidden_panel_stays_hidden_across_zoom() {
    let mut chart = books_chart();
    chart
        .zoom_to(3.0, ScreenPoint::new(35.0, 15.0))
        .expect("zoom");
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn unknown_record_click_is_an_error() {
    let mut chart = books_chart();
    let err = chart.click_mark("nope").expect_err("unknown id");
    assert!(matches!(err, ChartError::UnknownRecord(id) if id == "nope"));
}

#[test]
fn hide_tooltip_clears_panel() {
    let mut chart = books_chart();
    chart.click_mark("X2").expect("show");
    chart.hide_tooltip();
    assert!(!chart.tooltip().is_visible());
}

#[test]
fn click_in_margin_ignores_mark_panned_out_of_plot() {
    let mut chart = books_chart();
    chart.pan_start(ScreenPoint::new(400.0, 300.0));
    assert!(
        chart
            .pan_move(ScreenPoint::new(307.0, 300.0))
            .expect("pan move")
    );
    chart.pan_end();

    let x1 = chart.marks().get("X1").expect("mark X1");
    assert_relative_eq!(x1.position.x, -20.0, epsilon = 1e-9);
    assert_eq!(chart.build_frame().circles.len(), 1);

    assert_eq!(
        chart
            .click_at(ScreenPoint::new(15.0, 510.0))
            .expect("margin click"),
        None
    );
    assert!(!chart.tooltip().is_visible());
}
