use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Size information the host reports for the chart container.
///
/// `width` is the container's current rendered width; `viewport_height` is
/// the height of the enclosing window, which bounds the chart's outer height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: f64,
    pub viewport_height: f64,
}

impl ContainerSize {
    #[must_use]
    pub fn new(width: f64, viewport_height: f64) -> Self {
        Self {
            width,
            viewport_height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 15.0,
            right: 35.0,
            bottom: 35.0,
            left: 35.0,
        }
    }
}

/// Outer and inner chart sizes derived from one container measurement.
///
/// All four sizes are produced by a single `compute_dimensions` call and are
/// never patched individually.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub outer_width: f64,
    pub outer_height: f64,
    pub margins: Margins,
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Pixel size of the root drawing surface, rounded up.
    #[must_use]
    pub fn surface_viewport(self) -> Viewport {
        Viewport::new(
            self.outer_width.max(0.0).ceil() as u32,
            self.outer_height.max(0.0).ceil() as u32,
        )
    }

    /// Converts a plot-area coordinate into surface coordinates.
    #[must_use]
    pub fn plot_to_surface(self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(point.x + self.margins.left, point.y + self.margins.top)
    }

    /// Converts a surface coordinate into plot-area coordinates.
    #[must_use]
    pub fn surface_to_plot(self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(point.x - self.margins.left, point.y - self.margins.top)
    }

    #[must_use]
    pub fn plot_contains(self, point: ScreenPoint) -> bool {
        self.plot_contains_within(point, 0.0)
    }

    /// Whether `point` lies inside the plot area grown by `slack` on every
    /// side. A mark of radius `r` is drawn iff its center passes with `r`.
    #[must_use]
    pub fn plot_contains_within(self, point: ScreenPoint, slack: f64) -> bool {
        point.x >= -slack
            && point.y >= -slack
            && point.x <= self.width + slack
            && point.y <= self.height + slack
    }
}

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn distance_squared(self, other: ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}
