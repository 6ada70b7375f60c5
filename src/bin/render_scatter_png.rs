#[cfg(feature = "cairo-backend")]
use std::fs::{self, File};
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_WIDTH: f64 = 960.0;
#[cfg(feature = "cairo-backend")]
const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

#[cfg(feature = "cairo-backend")]
#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    output_path: PathBuf,
    config_path: Option<PathBuf>,
    click_record_id: Option<String>,
    zoom_factor: Option<f64>,
    width: f64,
    viewport_height: f64,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if !scatter_rs::telemetry::init_default_tracing() && std::env::var_os("RUST_LOG").is_some() {
        eprintln!("note: RUST_LOG is ignored; build with `--features telemetry` for trace output");
    }
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use scatter_rs::api::{ScatterChart, ScatterChartConfig};
    use scatter_rs::core::{ContainerSize, FileDatasetSource, ScreenPoint};
    use scatter_rs::render::CairoRenderer;

    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterChartConfig::books("#scatter"),
    };

    let renderer = CairoRenderer::new(1, 1).map_err(|err| format!("renderer init failed: {err}"))?;
    let container = ContainerSize::new(args.width, args.viewport_height);
    let mut chart = ScatterChart::new(renderer, config, container)
        .map_err(|err| format!("failed to create chart: {err}"))?;
    chart
        .populate(&FileDatasetSource::new(&args.data_path))
        .map_err(|err| format!("failed to load dataset: {err}"))?;

    if let Some(k) = args.zoom_factor {
        let dims = chart.dimensions();
        let center = ScreenPoint::new(
            dims.margins.left + dims.width / 2.0,
            dims.margins.top + dims.height / 2.0,
        );
        chart
            .zoom_to(k, center)
            .map_err(|err| format!("zoom failed: {err}"))?;
    }
    if let Some(record_id) = &args.click_record_id {
        chart
            .click_mark(record_id)
            .map_err(|err| format!("click failed: {err}"))?;
    }

    chart.render().map_err(|err| format!("render failed: {err}"))?;
    let renderer = chart.into_renderer();

    if let Some(parent) = args.output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| format!("failed to create output dir `{}`: {err}", parent.display()))?;
    }
    let mut file = File::create(&args.output_path).map_err(|err| {
        format!(
            "failed to create png `{}`: {err}",
            args.output_path.display()
        )
    })?;
    renderer
        .write_png(&mut file)
        .map_err(|err| format!("failed to write png: {err}"))?;

    let stats = renderer.last_stats();
    println!(
        "rendered {} marks, {} lines, {} texts -> {}",
        stats.circles_drawn,
        stats.lines_drawn,
        stats.texts_drawn,
        args.output_path.display()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<CliArgs, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut click_record_id: Option<String> = None;
    let mut zoom_factor: Option<f64> = None;
    let mut width = DEFAULT_WIDTH;
    let mut viewport_height = DEFAULT_VIEWPORT_HEIGHT;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --data".to_owned())?;
                data_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--click" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --click".to_owned())?;
                click_record_id = Some(value);
            }
            "--zoom" => {
                zoom_factor = Some(parse_number(args.next(), "--zoom")?);
            }
            "--width" => {
                width = parse_number(args.next(), "--width")?;
            }
            "--viewport-height" => {
                viewport_height = parse_number(args.next(), "--viewport-height")?;
            }
            "--help" | "-h" => {
                println!("{}", usage_message());
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument `{arg}`\n\n{}", usage_message()));
            }
        }
    }

    Ok(CliArgs {
        data_path: data_path
            .ok_or_else(|| format!("missing required --data\n\n{}", usage_message()))?,
        output_path: output_path
            .ok_or_else(|| format!("missing required --output\n\n{}", usage_message()))?,
        config_path,
        click_record_id,
        zoom_factor,
        width,
        viewport_height,
    })
}

#[cfg(feature = "cairo-backend")]
fn parse_number(value: Option<String>, flag: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

#[cfg(feature = "cairo-backend")]
fn usage_message() -> String {
    format!(
        "Usage: cargo run --features cairo-backend --bin render_scatter_png -- --data <path> --output <png> [options]\n\nOptions:\n  --data <path>             JSON array of raw records (required)\n  --output <path>           PNG output path (required)\n  --config <path>           Chart config JSON (default: books layout)\n  --zoom <k>                Zoom factor around the plot center\n  --click <record-id>       Open the detail panel of one record\n  --width <px>              Container width (default: {DEFAULT_WIDTH})\n  --viewport-height <px>    Viewport height (default: {DEFAULT_VIEWPORT_HEIGHT})\n  -h, --help                Show this message"
    )
}
