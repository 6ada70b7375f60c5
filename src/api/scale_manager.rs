use serde::{Deserialize, Serialize};

use crate::core::{AxisDomains, ContainerSize, Dimensions, LinearScale};
use crate::error::ChartResult;
use crate::interaction::ViewTransform;

use super::axis_ticks::{AxisGenerator, AxisOrientation, RenderedAxis};
use super::chart_config::LayoutBehavior;

/// Base x/y scales and the axis generators bound to them.
///
/// Fields are private: the only way to obtain generators is through
/// `ScaleSet::new`, which builds them from the scales stored here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    x: LinearScale,
    y: LinearScale,
    x_axis: AxisGenerator,
    y_axis: AxisGenerator,
}

impl ScaleSet {
    #[must_use]
    pub fn new(x: LinearScale, y: LinearScale, tick_count: usize) -> Self {
        Self {
            x,
            y,
            x_axis: AxisGenerator::new(AxisOrientation::Bottom, tick_count, x),
            y_axis: AxisGenerator::new(AxisOrientation::Left, tick_count, y),
        }
    }

    #[must_use]
    pub fn x(&self) -> LinearScale {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> LinearScale {
        self.y
    }

    #[must_use]
    pub fn x_axis(&self) -> AxisGenerator {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> AxisGenerator {
        self.y_axis
    }

    /// Renders both axes through `transform`.
    #[must_use]
    pub fn render_axes(&self, transform: ViewTransform) -> (RenderedAxis, RenderedAxis) {
        (
            self.x_axis.render(transform),
            self.y_axis.render(transform),
        )
    }
}

/// Derives outer and inner chart sizes from the current container size.
///
/// The container width is truncated to whole pixels. The outer height is
/// `min(width * aspect, viewport * fraction)`, replaced by the configured
/// minimum once the viewport is shorter than `minimum / fraction`. Inner
/// sizes never go negative.
#[must_use]
pub fn compute_dimensions(container: ContainerSize, layout: LayoutBehavior) -> Dimensions {
    let outer_width = if container.width.is_finite() {
        container.width.max(0.0).trunc()
    } else {
        0.0
    };
    let viewport_height = if container.viewport_height.is_finite() {
        container.viewport_height.max(0.0)
    } else {
        0.0
    };

    let outer_height = if viewport_height <= layout.min_outer_height / layout.viewport_height_fraction
    {
        layout.min_outer_height
    } else {
        (outer_width * layout.aspect_ratio).min(viewport_height * layout.viewport_height_fraction)
    };

    let margins = layout.margins;
    Dimensions {
        outer_width,
        outer_height,
        margins,
        width: (outer_width - margins.left - margins.right).max(0.0),
        height: (outer_height - margins.top - margins.bottom).max(0.0),
    }
}

/// Builds the base scale pair over `domains` for the inner plot area.
///
/// x maps onto `[0, width]`; y onto `[height, 0]` so larger values sit
/// higher. With `nice` set, domains are first extended to tick boundaries.
pub fn build_scales(
    dimensions: Dimensions,
    domains: AxisDomains,
    tick_count: usize,
    nice: bool,
) -> ChartResult<ScaleSet> {
    let mut x = LinearScale::new(domains.x, 0.0, dimensions.width)?;
    let mut y = LinearScale::new(domains.y, dimensions.height, 0.0)?;
    if nice {
        x = x.nice(tick_count);
        y = y.nice(tick_count);
    }
    Ok(ScaleSet::new(x, y, tick_count))
}
