use crate::core::{AxisDomains, ContainerSize, Dimensions, RecordSet};
use crate::interaction::{InteractionState, ScaleExtent, TooltipState, ViewTransform};

use super::axis_ticks::RenderedAxis;
use super::chart_config::ScatterChartConfig;
use super::mark_renderer::MarkLayer;
use super::scale_manager::{ScaleSet, compute_dimensions};

/// Data-dependent state that exists once a dataset is loaded.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct PlotState {
    pub(super) domains: AxisDomains,
    pub(super) scales: ScaleSet,
    pub(super) x_axis: RenderedAxis,
    pub(super) y_axis: RenderedAxis,
}

/// Zoom/pan state: the transform, its clamp, and the base scales it was
/// last bound to.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ZoomState {
    pub(super) transform: ViewTransform,
    pub(super) extent: ScaleExtent,
    pub(super) reference: Option<ScaleSet>,
}

impl ZoomState {
    pub(super) fn new(extent: ScaleExtent) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            extent,
            reference: None,
        }
    }

    /// Points the behavior at new base scales; factor and translation stay.
    pub(super) fn rebind(&mut self, scales: ScaleSet) {
        self.reference = Some(scales);
    }

    pub(super) fn reset(&mut self) {
        self.transform = ViewTransform::IDENTITY;
        self.reference = None;
    }
}

/// All mutable chart state, owned in one place and passed by `&mut` into
/// each controller pass.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct ChartState {
    pub(super) config: ScatterChartConfig,
    pub(super) container: ContainerSize,
    pub(super) dimensions: Dimensions,
    pub(super) records: RecordSet,
    pub(super) plot: Option<PlotState>,
    pub(super) marks: MarkLayer,
    pub(super) zoom: ZoomState,
    pub(super) tooltip: TooltipState,
    pub(super) interaction: InteractionState,
}

impl ChartState {
    pub(super) fn new(config: ScatterChartConfig, container: ContainerSize) -> Self {
        let dimensions = compute_dimensions(container, config.layout);
        let extent = config.zoom.scale_extent;
        Self {
            config,
            container,
            dimensions,
            records: RecordSet::default(),
            plot: None,
            marks: MarkLayer::default(),
            zoom: ZoomState::new(extent),
            tooltip: TooltipState::Hidden,
            interaction: InteractionState::default(),
        }
    }

    /// Drops everything tied to the current dataset.
    pub(super) fn tear_down(&mut self) {
        self.tooltip.hide();
        self.marks.clear();
        self.plot = None;
        self.records = RecordSet::default();
        self.zoom.reset();
        self.interaction.on_pan_end();
    }
}
