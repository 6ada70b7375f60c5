use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;
use crate::core::ticks::{TickValues, tick_increment, tick_values};
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// y axis grows upward. A zero-width domain maps every value to
/// `range_start` and every pixel back to `domain.min`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: Domain,
    range_start: f64,
    range_end: f64,
    clamp: bool,
}

impl LinearScale {
    pub fn new(domain: Domain, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain,
            range_start,
            range_end,
            clamp: false,
        })
    }

    /// Restricts outputs of `domain_to_pixel` to the range.
    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn domain(self) -> Domain {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_clamped(self) -> bool {
        self.clamp
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain.span();
        let normalized = if span == 0.0 {
            0.0
        } else {
            (value - self.domain.min) / span
        };
        let normalized = if self.clamp {
            normalized.clamp(0.0, 1.0)
        } else {
            normalized
        };
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        let normalized = if range_span == 0.0 {
            0.0
        } else {
            (pixel - self.range_start) / range_span
        };
        let normalized = if self.clamp {
            normalized.clamp(0.0, 1.0)
        } else {
            normalized
        };
        self.domain.min + normalized * self.domain.span()
    }

    /// Returns a copy whose domain is replaced.
    #[must_use]
    pub fn with_domain(self, domain: Domain) -> Self {
        Self { domain, ..self }
    }

    /// Extends the domain outward to the nearest multiples of the tick step
    /// for `count` ticks.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let Domain { min, max } = self.domain;
        let Some(step) = tick_increment(min, max, count) else {
            return self;
        };
        let nice_min = (min / step).floor() * step;
        let nice_max = (max / step).ceil() * step;
        match Domain::new(nice_min, nice_max) {
            Ok(domain) => self.with_domain(domain),
            Err(_) => self,
        }
    }

    /// Round tick values covering the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        tick_values(self.domain.min, self.domain.max, count)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::LinearScale;
    use crate::core::domain::Domain;

    fn domain(min: f64, max: f64) -> Domain {
        Domain::new(min, max).expect("valid domain")
    }

    #[test]
    fn maps_domain_ends_onto_range_ends() {
        let scale = LinearScale::new(domain(62.5, 437.5), 0.0, 730.0).expect("scale");
        assert_relative_eq!(scale.domain_to_pixel(62.5), 0.0);
        assert_relative_eq!(scale.domain_to_pixel(437.5), 730.0);
        assert_relative_eq!(scale.domain_to_pixel(250.0), 365.0);
    }

    #[test]
    fn inverted_range_grows_upward() {
        let scale = LinearScale::new(domain(0.75, 3.25), 550.0, 0.0).expect("scale");
        assert_relative_eq!(scale.domain_to_pixel(0.75), 550.0);
        assert_relative_eq!(scale.domain_to_pixel(3.25), 0.0);
        assert_relative_eq!(scale.pixel_to_domain(275.0), 2.0);
    }

    #[test]
    fn zero_width_domain_collapses_to_range_start() {
        let scale = LinearScale::new(domain(5.0, 5.0), 0.0, 100.0).expect("scale");
        assert_eq!(scale.domain_to_pixel(5.0), 0.0);
        assert_eq!(scale.domain_to_pixel(500.0), 0.0);
        assert_eq!(scale.pixel_to_domain(40.0), 5.0);
    }

    #[test]
    fn clamp_limits_output_to_range() {
        let scale = LinearScale::new(domain(0.0, 10.0), 0.0, 100.0)
            .expect("scale")
            .with_clamp(true);
        assert_eq!(scale.domain_to_pixel(20.0), 100.0);
        assert_eq!(scale.domain_to_pixel(-5.0), 0.0);
    }

    #[test]
    fn nice_extends_domain_to_round_bounds() {
        let scale = LinearScale::new(domain(62.5, 437.5), 0.0, 730.0)
            .expect("scale")
            .nice(5);
        assert_eq!(scale.domain(), domain(0.0, 500.0));
    }

    #[test]
    fn rejects_non_finite_range() {
        assert!(LinearScale::new(domain(0.0, 1.0), 0.0, f64::INFINITY).is_err());
    }
}
