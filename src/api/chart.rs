use tracing::{debug, trace};

use crate::core::{AxisDomains, ContainerSize, DatasetSource, Dimensions, Record, ScreenPoint};
use crate::error::ChartResult;
use crate::interaction::{InteractionMode, TooltipState, ViewTransform};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::axis_ticks::RenderedAxis;
use super::chart_config::ScatterChartConfig;
use super::chart_state::ChartState;
use super::mark_renderer::MarkLayer;
use super::render_frame_builder::build_render_frame;
use super::render_style::RenderStyle;
use super::scale_manager::ScaleSet;
use super::validation::validate_render_style;
use super::zoom_controller::{ZoomGesture, apply_gesture};
use super::{data_controller, resize_controller, tooltip_controller};

/// Interactive scatter chart bound to one renderer.
///
/// Every mutation runs as one synchronous pass over the chart state; a pass
/// that returns an error leaves the previous state in place.
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    state: ChartState,
    render_style: RenderStyle,
}

impl<R: Renderer> ScatterChart<R> {
    pub fn new(
        renderer: R,
        config: ScatterChartConfig,
        container: ContainerSize,
    ) -> ChartResult<Self> {
        config.validate()?;
        let state = ChartState::new(config, container);
        debug!(
            selector = %state.config.container_selector,
            outer_width = state.dimensions.outer_width,
            outer_height = state.dimensions.outer_height,
            "scatter chart created"
        );
        Ok(Self {
            renderer,
            state,
            render_style: RenderStyle::default(),
        })
    }

    /// Replaces the dataset with already-cleaned records.
    pub fn load_records(&mut self, records: Vec<Record>) -> ChartResult<()> {
        data_controller::load(&mut self.state, records)
    }

    /// Replaces the dataset with records parsed from a JSON array payload.
    pub fn load_json(&mut self, payload: &str) -> ChartResult<()> {
        data_controller::load_json(&mut self.state, payload)
    }

    /// Fetches, cleans and loads a dataset from `source`.
    pub fn populate(&mut self, source: &dyn DatasetSource) -> ChartResult<()> {
        data_controller::populate(&mut self.state, source)
    }

    pub fn resize(&mut self, container: ContainerSize) -> ChartResult<()> {
        resize_controller::apply_resize(&mut self.state, container)
    }

    /// Wheel zoom anchored at a surface point. Returns whether the view moved.
    pub fn wheel_zoom(&mut self, delta_y: f64, anchor: ScreenPoint) -> ChartResult<bool> {
        apply_gesture(&mut self.state, ZoomGesture::Wheel { delta_y, anchor })
    }

    pub fn pinch_zoom(&mut self, scale_factor: f64, anchor: ScreenPoint) -> ChartResult<bool> {
        apply_gesture(
            &mut self.state,
            ZoomGesture::Pinch {
                scale_factor,
                anchor,
            },
        )
    }

    /// Sets the zoom factor directly, keeping `anchor` fixed on screen.
    pub fn zoom_to(&mut self, k: f64, anchor: ScreenPoint) -> ChartResult<bool> {
        apply_gesture(&mut self.state, ZoomGesture::ScaleTo { k, anchor })
    }

    pub fn apply_gesture(&mut self, gesture: ZoomGesture) -> ChartResult<bool> {
        apply_gesture(&mut self.state, gesture)
    }

    pub fn pan_start(&mut self, pointer: ScreenPoint) {
        self.state.interaction.on_pan_start(pointer);
    }

    /// Pans by the pointer delta since the previous event of this drag.
    pub fn pan_move(&mut self, pointer: ScreenPoint) -> ChartResult<bool> {
        if !pointer.is_finite() {
            return Ok(false);
        }
        match self.state.interaction.on_pan_move(pointer) {
            Some((dx, dy)) => apply_gesture(&mut self.state, ZoomGesture::PanBy { dx, dy }),
            None => Ok(false),
        }
    }

    pub fn pan_end(&mut self) {
        self.state.interaction.on_pan_end();
    }

    /// Click at a surface point. Returns `None` when no mark is under the
    /// pointer, otherwise whether a tooltip is visible afterwards.
    pub fn click_at(&mut self, point: ScreenPoint) -> ChartResult<Option<bool>> {
        if !point.is_finite() {
            return Ok(None);
        }
        let plot_point = self.state.dimensions.surface_to_plot(point);
        let Some(record_id) = self
            .state
            .marks
            .hit_test(
                plot_point,
                self.state.config.mark_radius,
                self.state.dimensions,
            )
            .map(|mark| mark.record_id.clone())
        else {
            trace!(x = point.x, y = point.y, "click missed all marks");
            return Ok(None);
        };
        tooltip_controller::on_mark_clicked(&mut self.state, &record_id).map(Some)
    }

    /// Click on the mark of `record_id`. Returns whether a tooltip is
    /// visible afterwards.
    pub fn click_mark(&mut self, record_id: &str) -> ChartResult<bool> {
        tooltip_controller::on_mark_clicked(&mut self.state, record_id)
    }

    pub fn hide_tooltip(&mut self) {
        tooltip_controller::hide(&mut self.state);
    }

    /// Builds the current frame without drawing it.
    #[must_use]
    pub fn build_frame(&self) -> RenderFrame {
        build_render_frame(&self.state, self.render_style)
    }

    /// Draws the current state. A degenerate surface is skipped.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_frame();
        if !frame.viewport.is_valid() {
            trace!(
                width = frame.viewport.width,
                height = frame.viewport.height,
                "skipping render of empty surface"
            );
            return Ok(());
        }
        frame.validate()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context, as GTK draw
    /// callbacks do.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame();
        if !frame.viewport.is_valid() {
            return Ok(());
        }
        frame.validate()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    pub fn set_render_style(&mut self, style: RenderStyle) -> ChartResult<()> {
        validate_render_style(style)?;
        self.render_style = style;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> RenderStyle {
        self.render_style
    }

    #[must_use]
    pub fn config(&self) -> &ScatterChartConfig {
        &self.state.config
    }

    #[must_use]
    pub fn container(&self) -> ContainerSize {
        self.state.container
    }

    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.state.dimensions
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.state.zoom.transform
    }

    #[must_use]
    pub fn domains(&self) -> Option<AxisDomains> {
        self.state.plot.as_ref().map(|plot| plot.domains)
    }

    /// Base scales, before the view transform.
    #[must_use]
    pub fn scales(&self) -> Option<ScaleSet> {
        self.state.plot.as_ref().map(|plot| plot.scales)
    }

    #[must_use]
    pub fn axes(&self) -> Option<(&RenderedAxis, &RenderedAxis)> {
        self.state
            .plot
            .as_ref()
            .map(|plot| (&plot.x_axis, &plot.y_axis))
    }

    #[must_use]
    pub fn marks(&self) -> &MarkLayer {
        &self.state.marks
    }

    #[must_use]
    pub fn record(&self, record_id: &str) -> Option<&Record> {
        self.state.records.get(record_id)
    }

    #[must_use]
    pub fn record_count(&self) -> usize {
        self.state.records.len()
    }

    #[must_use]
    pub fn tooltip(&self) -> &TooltipState {
        &self.state.tooltip
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.state.interaction.mode()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn state(&self) -> &ChartState {
        &self.state
    }
}
