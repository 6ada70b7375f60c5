use scatter_rs::api::{ScatterChart, ScatterChartConfig};
use scatter_rs::core::{ContainerSize, FileDatasetSource};
use scatter_rs::platform_gtk::GtkScatterAdapter;
use scatter_rs::render::CairoRenderer;

use gtk4 as gtk;
use gtk4::prelude::*;

const DEFAULT_DATA_PATH: &str = "demos/data/books.json";

fn main() {
    let _ = scatter_rs::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.scatter.demos.gtk_scatter_viewer")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &gtk::Application) {
    let chart = match build_chart() {
        Ok(chart) => chart,
        Err(err) => {
            eprintln!("failed to initialize scatter viewer: {err}");
            return;
        }
    };
    let adapter = GtkScatterAdapter::new(chart);

    let data_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_owned());
    if let Err(err) = adapter.populate(&FileDatasetSource::new(data_path)) {
        eprintln!("dataset load failed: {err}");
    }

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("scatter-rs viewer")
        .default_width(960)
        .default_height(800)
        .build();
    window.set_child(Some(adapter.widget()));
    window.present();
}

fn build_chart() -> scatter_rs::ChartResult<ScatterChart<CairoRenderer>> {
    let renderer = CairoRenderer::new(960, 800)?;
    ScatterChart::new(
        renderer,
        ScatterChartConfig::books("#scatter"),
        ContainerSize::new(960.0, 800.0),
    )
}
