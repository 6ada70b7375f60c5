mod axis_ticks;
mod chart;
mod chart_config;
mod chart_events;
mod chart_snapshot;
mod chart_state;
mod data_controller;
mod mark_renderer;
mod render_frame_builder;
mod render_style;
mod resize_controller;
mod scale_manager;
mod tooltip_controller;
mod validation;
mod zoom_controller;
mod zoom_factor_resolver;

pub use axis_ticks::{AxisGenerator, AxisOrientation, AxisTick, AxisTicks, RenderedAxis};
pub use chart::ScatterChart;
pub use chart_config::{LayoutBehavior, ScatterChartConfig, ZoomBehavior};
pub use chart_events::ChartEvent;
pub use chart_snapshot::ChartSnapshot;
pub use mark_renderer::{Mark, MarkLayer};
pub use render_style::RenderStyle;
pub use scale_manager::{ScaleSet, build_scales, compute_dimensions};
pub use zoom_controller::ZoomGesture;
