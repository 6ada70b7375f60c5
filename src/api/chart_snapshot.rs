use serde::{Deserialize, Serialize};

use crate::core::{AxisDomains, Dimensions};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{TooltipState, ViewTransform};
use crate::render::Renderer;

use super::ScatterChart;
use super::axis_ticks::RenderedAxis;
use super::mark_renderer::Mark;

/// Serializable deterministic view of the chart, used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub dimensions: Dimensions,
    pub domains: Option<AxisDomains>,
    pub transform: ViewTransform,
    pub x_axis: Option<RenderedAxis>,
    pub y_axis: Option<RenderedAxis>,
    pub marks: Vec<Mark>,
    pub tooltip: TooltipState,
}

impl ChartSnapshot {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        let state = self.state();
        ChartSnapshot {
            dimensions: state.dimensions,
            domains: state.plot.as_ref().map(|plot| plot.domains),
            transform: state.zoom.transform,
            x_axis: state.plot.as_ref().map(|plot| plot.x_axis.clone()),
            y_axis: state.plot.as_ref().map(|plot| plot.y_axis.clone()),
            marks: state.marks.iter().cloned().collect(),
            tooltip: state.tooltip.clone(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
