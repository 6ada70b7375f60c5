use tracing::debug;

use crate::core::ContainerSize;
use crate::error::ChartResult;

use super::chart_state::ChartState;
use super::scale_manager::{build_scales, compute_dimensions};
use super::tooltip_controller;

/// Applies a container size change as one synchronous pass.
///
/// New scales are built before anything is written, so a failure leaves the
/// previous layout intact. The view transform is kept; only the base scales
/// under it change.
pub(super) fn apply_resize(state: &mut ChartState, container: ContainerSize) -> ChartResult<()> {
    let dimensions = compute_dimensions(container, state.config.layout);

    let Some(plot) = state.plot.as_mut() else {
        state.container = container;
        state.dimensions = dimensions;
        debug!(
            outer_width = dimensions.outer_width,
            outer_height = dimensions.outer_height,
            "resized empty chart"
        );
        return Ok(());
    };

    let scales = build_scales(
        dimensions,
        plot.domains,
        state.config.tick_count,
        state.config.nice_domains,
    )?;
    let transform = state.zoom.transform;

    state.container = container;
    state.dimensions = dimensions;
    plot.scales = scales;
    (plot.x_axis, plot.y_axis) = scales.render_axes(transform);
    state.marks.reposition(&scales, transform);
    state.zoom.rebind(scales);
    debug!(
        outer_width = dimensions.outer_width,
        outer_height = dimensions.outer_height,
        width = dimensions.width,
        height = dimensions.height,
        marks = state.marks.len(),
        "resized chart"
    );

    tooltip_controller::refresh_if_visible(state);
    Ok(())
}
