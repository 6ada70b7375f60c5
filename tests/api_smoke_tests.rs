use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{ContainerSize, Record, ScreenPoint};
use scatter_rs::interaction::InteractionMode;
use scatter_rs::render::NullRenderer;

fn two_books() -> Vec<Record> {
    vec![
        Record::new("X1", "First", "https://example.test/X1")
            .with_authors(["Ann"])
            .with_field("pages", 100.0)
            .with_field("sales_rank", 10.0)
            .with_field("log_sales_rank", 1.0),
        Record::new("X2", "Second", "https://example.test/X2")
            .with_authors(["Bob", "Cy"])
            .with_field("pages", 400.0)
            .with_field("sales_rank", 1_000.0)
            .with_field("log_sales_rank", 3.0),
    ]
}

#[test]
fn chart_smoke_flow() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(800.0, 1_000.0),
    )
    .expect("chart init");

    chart.load_records(two_books()).expect("load");
    assert_eq!(chart.record_count(), 2);
    assert_eq!(chart.marks().len(), 2);

    assert!(chart.wheel_zoom(-120.0, ScreenPoint::new(300.0, 200.0)).expect("zoom"));
    chart.pan_start(ScreenPoint::new(100.0, 100.0));
    assert_eq!(chart.interaction_mode(), InteractionMode::Panning);
    assert!(chart.pan_move(ScreenPoint::new(120.0, 90.0)).expect("pan"));
    chart.pan_end();
    assert_eq!(chart.interaction_mode(), InteractionMode::Idle);

    assert!(chart.click_mark("X2").expect("click"));
    chart.resize(ContainerSize::new(640.0, 1_000.0)).expect("resize");
    chart.render().expect("render");

    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_rect_count, 1);
}

#[test]
fn render_before_load_draws_an_empty_frame() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(800.0, 1_000.0),
    )
    .expect("chart init");

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_circle_count, 0);
    assert_eq!(renderer.last_line_count, 0);
}

#[test]
fn render_is_skipped_for_zero_width_container() {
    let mut chart = ScatterChart::new(
        NullRenderer::default(),
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(0.0, 1_000.0),
    )
    .expect("chart init");
    chart.load_records(two_books()).expect("load");

    chart.render().expect("render");
    assert_eq!(chart.into_renderer().frames_rendered, 0);
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = ScatterChartConfig::books("#scatter").with_mark_radius(-1.0);
    let result = ScatterChart::new(
        NullRenderer::default(),
        config,
        ContainerSize::new(800.0, 1_000.0),
    );
    assert!(result.is_err());
}
