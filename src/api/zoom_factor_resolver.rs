use crate::error::{ChartError, ChartResult};

const WHEEL_STEP_UNITS: f64 = 120.0;

/// Converts a wheel delta into a multiplicative zoom factor.
///
/// Negative deltas (wheel up) zoom in. Returns `None` for a zero delta.
/// Huge deltas may saturate to `+inf` or the smallest positive factor; the
/// scale extent clamps the result.
pub(super) fn resolve_wheel_zoom_factor(
    wheel_delta_y: f64,
    zoom_step_ratio: f64,
) -> ChartResult<Option<f64>> {
    if !wheel_delta_y.is_finite() {
        return Err(ChartError::InvalidData(
            "wheel delta must be finite".to_owned(),
        ));
    }
    if wheel_delta_y == 0.0 {
        return Ok(None);
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let base = 1.0 + zoom_step_ratio;
    let factor = base.powf(-normalized_steps);
    if factor.is_nan() {
        return Err(ChartError::InvalidData(
            "computed wheel zoom factor must not be NaN".to_owned(),
        ));
    }
    Ok(Some(factor.max(f64::MIN_POSITIVE)))
}

pub(super) fn resolve_pinch_zoom_factor(pinch_scale_factor: f64) -> ChartResult<Option<f64>> {
    if !pinch_scale_factor.is_finite() || pinch_scale_factor <= 0.0 {
        return Err(ChartError::InvalidData(
            "pinch zoom factor must be finite and > 0".to_owned(),
        ));
    }
    if (pinch_scale_factor - 1.0).abs() <= f64::EPSILON {
        return Ok(None);
    }
    Ok(Some(pinch_scale_factor))
}
