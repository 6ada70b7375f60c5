use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ScreenPoint;
use crate::error::{ChartError, ChartResult};
use crate::interaction::ViewTransform;

use super::chart_state::ChartState;
use super::tooltip_controller;
use super::zoom_factor_resolver::{resolve_pinch_zoom_factor, resolve_wheel_zoom_factor};

/// Pointer gesture feeding the zoom/pan behavior.
///
/// Anchors are surface coordinates, as delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ZoomGesture {
    Wheel { delta_y: f64, anchor: ScreenPoint },
    Pinch { scale_factor: f64, anchor: ScreenPoint },
    PanBy { dx: f64, dy: f64 },
    ScaleTo { k: f64, anchor: ScreenPoint },
}

/// Resolves `gesture` into a new transform and runs one interaction tick.
///
/// Returns `false` when the gesture leaves the transform unchanged or no
/// dataset is loaded. Invalid gesture input leaves state untouched.
pub(super) fn apply_gesture(state: &mut ChartState, gesture: ZoomGesture) -> ChartResult<bool> {
    if state.zoom.reference.is_none() {
        return Ok(false);
    }

    let current = state.zoom.transform;
    let extent = state.zoom.extent;
    let next = match gesture {
        ZoomGesture::Wheel { delta_y, anchor } => {
            let anchor = plot_anchor(state, anchor)?;
            match resolve_wheel_zoom_factor(delta_y, state.config.zoom.wheel_zoom_step_ratio)? {
                Some(factor) => current.zoomed_at(factor, anchor, extent),
                None => current,
            }
        }
        ZoomGesture::Pinch {
            scale_factor,
            anchor,
        } => {
            let anchor = plot_anchor(state, anchor)?;
            match resolve_pinch_zoom_factor(scale_factor)? {
                Some(factor) => current.zoomed_at(factor, anchor, extent),
                None => current,
            }
        }
        ZoomGesture::PanBy { dx, dy } => {
            if !dx.is_finite() || !dy.is_finite() {
                return Err(ChartError::InvalidData(
                    "pan delta must be finite".to_owned(),
                ));
            }
            current.translated_by(dx, dy)
        }
        ZoomGesture::ScaleTo { k, anchor } => {
            if !k.is_finite() || k <= 0.0 {
                return Err(ChartError::InvalidData(
                    "zoom scale factor must be finite and > 0".to_owned(),
                ));
            }
            let anchor = plot_anchor(state, anchor)?;
            current.scaled_to(k, anchor, extent)
        }
    };

    if next == current {
        return Ok(false);
    }
    apply_zoom_tick(state, next);
    Ok(true)
}

/// One zoom tick: store the transform, redraw axes, move marks, then let
/// the tooltip follow its mark.
pub(super) fn apply_zoom_tick(state: &mut ChartState, transform: ViewTransform) {
    let Some(reference) = state.zoom.reference else {
        return;
    };
    state.zoom.transform = transform;

    if let Some(plot) = state.plot.as_mut() {
        (plot.x_axis, plot.y_axis) = reference.render_axes(transform);
    }
    state.marks.reposition(&reference, transform);
    trace!(
        k = transform.k,
        x = transform.x,
        y = transform.y,
        "zoom tick applied"
    );

    tooltip_controller::refresh_if_visible(state);
}

fn plot_anchor(state: &ChartState, anchor: ScreenPoint) -> ChartResult<ScreenPoint> {
    if !anchor.is_finite() {
        return Err(ChartError::InvalidData(
            "zoom anchor must be finite".to_owned(),
        ));
    }
    Ok(state.dimensions.surface_to_plot(anchor))
}
