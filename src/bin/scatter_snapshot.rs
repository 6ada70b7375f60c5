use std::fs;
use std::path::PathBuf;

use scatter_rs::api::{ChartEvent, ScatterChart, ScatterChartConfig};
use scatter_rs::core::{ContainerSize, FileDatasetSource};
use scatter_rs::render::NullRenderer;

const DEFAULT_WIDTH: f64 = 960.0;
const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
const DEFAULT_SELECTOR: &str = "#scatter";

#[derive(Debug)]
struct CliArgs {
    data_path: PathBuf,
    config_path: Option<PathBuf>,
    events_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    width: f64,
    viewport_height: f64,
}

fn main() {
    if !scatter_rs::telemetry::init_default_tracing() && std::env::var_os("RUST_LOG").is_some() {
        eprintln!("note: RUST_LOG is ignored; build with `--features telemetry` for trace output");
    }
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterChartConfig::books(DEFAULT_SELECTOR),
    };

    let container = ContainerSize::new(args.width, args.viewport_height);
    let mut chart = ScatterChart::new(NullRenderer::default(), config, container)
        .map_err(|err| format!("failed to create chart: {err}"))?;
    chart
        .populate(&FileDatasetSource::new(&args.data_path))
        .map_err(|err| format!("failed to load dataset: {err}"))?;

    if let Some(path) = &args.events_path {
        let raw = fs::read_to_string(path)
            .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
        let events: Vec<ChartEvent> =
            serde_json::from_str(&raw).map_err(|err| format!("invalid events json: {err}"))?;
        chart
            .dispatch_all(events)
            .map_err(|err| format!("event replay failed: {err}"))?;
    }

    let json = chart
        .snapshot_json_pretty()
        .map_err(|err| err.to_string())?;
    match &args.output_path {
        Some(path) => fs::write(path, json)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut data_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut events_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;
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
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--events" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --events".to_owned())?;
                events_path = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output_path = Some(PathBuf::from(value));
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

    let data_path =
        data_path.ok_or_else(|| format!("missing required --data\n\n{}", usage_message()))?;
    Ok(CliArgs {
        data_path,
        config_path,
        events_path,
        output_path,
        width,
        viewport_height,
    })
}

fn parse_number(value: Option<String>, flag: &str) -> Result<f64, String> {
    let value = value.ok_or_else(|| format!("missing value for {flag}"))?;
    value
        .parse::<f64>()
        .map_err(|err| format!("invalid value `{value}` for {flag}: {err}"))
}

fn usage_message() -> String {
    format!(
        "Usage: cargo run --bin scatter_snapshot -- --data <path> [options]\n\nOptions:\n  --data <path>             JSON array of raw records (required)\n  --config <path>           Chart config JSON (default: books layout)\n  --events <path>           JSON array of chart events to replay before the snapshot\n  --output <path>           Write snapshot JSON here instead of stdout\n  --width <px>              Container width (default: {DEFAULT_WIDTH})\n  --viewport-height <px>    Viewport height (default: {DEFAULT_VIEWPORT_HEIGHT})\n  -h, --help                Show this message"
    )
}
