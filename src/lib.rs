//! scatter-rs: interactive two-dimensional scatter chart engine.
//!
//! The crate turns a set of records into a zoomable, pannable scatter plot
//! with linear axes and click-to-toggle detail panels. Chart state is plain
//! data driven by synchronous passes; drawing goes through the `Renderer`
//! contract so headless, cairo and GTK hosts share the same pipeline.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartEvent, ScatterChart, ScatterChartConfig};
pub use error::{ChartError, ChartResult};
