use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{LinearScale, format_tick, tick_increment, tick_precision};
use crate::interaction::ViewTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One rendered tick: data value, pixel offset along the axis, label text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
    pub label: String,
}

pub type AxisTicks = SmallVec<[AxisTick; 12]>;

/// Axis as last drawn: the displayed domain and its ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedAxis {
    pub orientation: AxisOrientation,
    pub domain: (f64, f64),
    pub ticks: AxisTicks,
}

/// Tick generator bound to one base scale.
///
/// Only `ScaleSet::new` constructs generators, from the scales it stores
/// beside them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGenerator {
    orientation: AxisOrientation,
    tick_count: usize,
    scale: LinearScale,
}

impl AxisGenerator {
    pub(super) fn new(orientation: AxisOrientation, tick_count: usize, scale: LinearScale) -> Self {
        Self {
            orientation,
            tick_count,
            scale,
        }
    }

    #[must_use]
    pub fn orientation(self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn tick_count(self) -> usize {
        self.tick_count
    }

    #[must_use]
    pub fn scale(self) -> LinearScale {
        self.scale
    }

    /// Produces ticks for the base scale seen through `transform`.
    #[must_use]
    pub fn render(self, transform: ViewTransform) -> RenderedAxis {
        let displayed = match self.orientation {
            AxisOrientation::Bottom => transform.rescale_x(self.scale),
            AxisOrientation::Left => transform.rescale_y(self.scale),
        };
        let domain = displayed.domain();
        let precision = tick_increment(domain.min, domain.max, self.tick_count)
            .map(tick_precision)
            .unwrap_or(0);
        let ticks = displayed
            .ticks(self.tick_count)
            .into_iter()
            .map(|value| AxisTick {
                value,
                position: displayed.domain_to_pixel(value),
                label: format_tick(value, precision),
            })
            .collect();

        RenderedAxis {
            orientation: self.orientation,
            domain: domain.as_tuple(),
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{AxisGenerator, AxisOrientation};
    use crate::core::{Domain, LinearScale};
    use crate::interaction::ViewTransform;

    fn x_scale() -> LinearScale {
        LinearScale::new(Domain::new(62.5, 437.5).expect("domain"), 0.0, 730.0).expect("scale")
    }

    #[test]
    fn identity_transform_ticks_match_base_scale() {
        let axis = AxisGenerator::new(AxisOrientation::Bottom, 5, x_scale())
            .render(ViewTransform::IDENTITY);
        let labels: Vec<&str> = axis.ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["100", "200", "300", "400"]);
        for tick in &axis.ticks {
            assert_relative_eq!(tick.position, x_scale().domain_to_pixel(tick.value));
        }
    }

    #[test]
    fn zoomed_axis_shows_narrower_domain_with_finer_labels() {
        let transform = ViewTransform::new(8.0, -2_000.0, 0.0);
        let axis = AxisGenerator::new(AxisOrientation::Bottom, 5, x_scale()).render(transform);
        let (min, max) = axis.domain;
        assert!(max - min < 375.0 / 4.0);
        for tick in &axis.ticks {
            assert!(tick.position >= -1e-9 && tick.position <= 730.0 + 1e-9);
            assert_relative_eq!(
                tick.position,
                transform.apply_x(x_scale().domain_to_pixel(tick.value)),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn left_axis_labels_use_step_precision() {
        let scale = LinearScale::new(Domain::new(0.75, 3.25).expect("domain"), 550.0, 0.0)
            .expect("scale");
        let axis =
            AxisGenerator::new(AxisOrientation::Left, 5, scale).render(ViewTransform::IDENTITY);
        let labels: Vec<&str> = axis.ticks.iter().map(|tick| tick.label.as_str()).collect();
        assert_eq!(labels, vec!["1.0", "1.5", "2.0", "2.5", "3.0"]);
        assert_relative_eq!(axis.ticks[0].position, 495.0);
    }
}
