use serde::{Deserialize, Serialize};

use crate::core::{Domain, LinearScale, ScreenPoint};
use crate::error::{ChartError, ChartResult};

/// Allowed interval for the interactive zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl ScaleExtent {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ChartError::InvalidConfig(
                "scale extent must be finite with 0 < min <= max".to_owned(),
            ));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn clamp(self, factor: f64) -> f64 {
        factor.clamp(self.min, self.max)
    }
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min: 0.5,
            max: 32.0,
        }
    }
}

/// Interactive zoom/pan state layered over the base scales.
///
/// A base pixel `p` is displayed at `k * p + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    #[must_use]
    pub fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    #[must_use]
    pub fn is_identity(self) -> bool {
        self == Self::IDENTITY
    }

    #[must_use]
    pub fn apply(self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.apply_x(point.x), self.apply_y(point.y))
    }

    #[must_use]
    pub fn apply_x(self, x: f64) -> f64 {
        x * self.k + self.x
    }

    #[must_use]
    pub fn apply_y(self, y: f64) -> f64 {
        y * self.k + self.y
    }

    #[must_use]
    pub fn invert(self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(self.invert_x(point.x), self.invert_y(point.y))
    }

    #[must_use]
    pub fn invert_x(self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    #[must_use]
    pub fn invert_y(self, y: f64) -> f64 {
        (y - self.y) / self.k
    }

    /// Scales by `factor` around `anchor`, keeping the base point under the
    /// anchor fixed. The resulting factor is clamped to `extent`.
    #[must_use]
    pub fn zoomed_at(self, factor: f64, anchor: ScreenPoint, extent: ScaleExtent) -> Self {
        self.scaled_to(self.k * factor, anchor, extent)
    }

    /// Sets the factor to `k` (clamped) around `anchor`.
    #[must_use]
    pub fn scaled_to(self, k: f64, anchor: ScreenPoint, extent: ScaleExtent) -> Self {
        let base = self.invert(anchor);
        let k = extent.clamp(k);
        Self {
            k,
            x: anchor.x - base.x * k,
            y: anchor.y - base.y * k,
        }
    }

    #[must_use]
    pub fn translated_by(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Re-clamps the factor after an extent change without moving the origin.
    #[must_use]
    pub fn clamped(self, extent: ScaleExtent) -> Self {
        Self {
            k: extent.clamp(self.k),
            ..self
        }
    }

    /// The x scale as displayed: base x scale with the transform applied.
    #[must_use]
    pub fn rescale_x(self, scale: LinearScale) -> LinearScale {
        let (start, end) = scale.range();
        rescaled(
            scale,
            scale.pixel_to_domain(self.invert_x(start)),
            scale.pixel_to_domain(self.invert_x(end)),
        )
    }

    /// The y scale as displayed: base y scale with the transform applied.
    #[must_use]
    pub fn rescale_y(self, scale: LinearScale) -> LinearScale {
        let (start, end) = scale.range();
        rescaled(
            scale,
            scale.pixel_to_domain(self.invert_y(start)),
            scale.pixel_to_domain(self.invert_y(end)),
        )
    }
}

fn rescaled(scale: LinearScale, first: f64, second: f64) -> LinearScale {
    scale.with_domain(Domain {
        min: first.min(second),
        max: first.max(second),
    })
}
