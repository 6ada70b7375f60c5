#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use scatter_rs::ChartError;
use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{ContainerSize, Record};
use scatter_rs::render::CairoRenderer;

fn books() -> Vec<Record> {
    vec![
        Record::new("X1", "First", "u1")
            .with_authors(["Ann"])
            .with_field("pages", 100.0)
            .with_field("sales_rank", 10.0)
            .with_field("log_sales_rank", 1.0),
        Record::new("X2", "Second", "u2")
            .with_field("pages", 400.0)
            .with_field("sales_rank", 1_000.0)
            .with_field("log_sales_rank", 3.0),
    ]
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_marks_axes_and_tooltip() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let mut chart = ScatterChart::new(
        renderer,
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(800.0, 1_000.0),
    )
    .expect("chart init");
    chart.load_records(books()).expect("load");
    chart.click_mark("X1").expect("show");

    chart.render().expect("render");
    let renderer = chart.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.circles_drawn, 2);
    assert_eq!(stats.lines_drawn, 11);
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(renderer.surface().width(), 800);
    assert_eq!(renderer.surface().height(), 600);

    let mut png = Vec::new();
    renderer.write_png(&mut png).expect("png");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(1, 1).expect("renderer");
    let mut chart = ScatterChart::new(
        renderer,
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(640.0, 1_000.0),
    )
    .expect("chart init");
    chart.load_records(books()).expect("load");

    let surface = ImageSurface::create(Format::ARgb32, 640, 480).expect("surface");
    let context = Context::new(&surface).expect("context");
    chart
        .render_on_cairo_context(&context)
        .expect("render on external context");
}
