use std::f64::consts::FRAC_PI_2;

use crate::core::{Dimensions, ScreenPoint};
use crate::interaction::TooltipPanel;
use crate::render::{
    CirclePrimitive, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis_ticks::RenderedAxis;
use super::chart_state::ChartState;
use super::render_style::RenderStyle;

const TICK_LABEL_GAP_PX: f64 = 3.0;
const X_AXIS_LABEL_RISE_PX: f64 = 10.0;
const Y_AXIS_LABEL_INSET_PX: f64 = 6.0;
// Average glyph advance relative to font size, for panel sizing without a
// text shaper.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Panel rectangle in surface coordinates, centered above the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TooltipBox {
    pub(super) x: f64,
    pub(super) y: f64,
    pub(super) width: f64,
    pub(super) height: f64,
}

/// Materializes the current state into a backend-agnostic frame.
pub(super) fn build_render_frame(state: &ChartState, style: RenderStyle) -> RenderFrame {
    let dims = state.dimensions;
    let mut frame = RenderFrame::new(dims.surface_viewport());
    let Some(plot) = state.plot.as_ref() else {
        return frame;
    };

    push_x_axis(&mut frame, dims, &plot.x_axis, &state.config.x_axis.label, style);
    push_y_axis(&mut frame, dims, &plot.y_axis, &state.config.y_axis.label, style);

    let radius = state.config.mark_radius;
    for mark in state.marks.iter() {
        if !dims.plot_contains_within(mark.position, radius) {
            continue;
        }
        let center = dims.plot_to_surface(mark.position);
        frame.circles.push(CirclePrimitive::new(
            center.x,
            center.y,
            radius,
            style.mark_color,
        ));
    }

    if let Some(panel) = state.tooltip.panel() {
        push_tooltip(
            &mut frame,
            dims,
            panel,
            radius + state.config.tooltip_offset_px,
            style,
        );
    }

    frame
}

fn push_x_axis(
    frame: &mut RenderFrame,
    dims: Dimensions,
    axis: &RenderedAxis,
    label: &str,
    style: RenderStyle,
) {
    let left = dims.margins.left;
    let baseline = dims.margins.top + dims.height;
    frame.lines.push(LinePrimitive::horizontal(
        baseline,
        left,
        left + dims.width,
        style.axis_line_width,
        style.axis_color,
    ));

    for tick in &axis.ticks {
        let x = left + tick.position;
        frame.lines.push(LinePrimitive::vertical(
            x,
            baseline,
            baseline + style.tick_mark_length_px,
            style.axis_line_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            x,
            baseline + style.tick_mark_length_px + TICK_LABEL_GAP_PX,
            style.tick_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Center,
        ));
    }

    if !label.is_empty() {
        frame.texts.push(TextPrimitive::new(
            label,
            left + dims.width,
            baseline - X_AXIS_LABEL_RISE_PX - style.axis_label_font_size_px,
            style.axis_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }
}

fn push_y_axis(
    frame: &mut RenderFrame,
    dims: Dimensions,
    axis: &RenderedAxis,
    label: &str,
    style: RenderStyle,
) {
    let left = dims.margins.left;
    let top = dims.margins.top;
    frame.lines.push(LinePrimitive::vertical(
        left,
        top,
        top + dims.height,
        style.axis_line_width,
        style.axis_color,
    ));

    for tick in &axis.ticks {
        let y = top + tick.position;
        frame.lines.push(LinePrimitive::horizontal(
            y,
            left - style.tick_mark_length_px,
            left,
            style.axis_line_width,
            style.axis_color,
        ));
        frame.texts.push(TextPrimitive::new(
            tick.label.clone(),
            left - style.tick_mark_length_px - TICK_LABEL_GAP_PX,
            y - style.tick_label_font_size_px / 2.0,
            style.tick_label_font_size_px,
            style.axis_label_color,
            TextHAlign::Right,
        ));
    }

    if !label.is_empty() {
        frame.texts.push(
            TextPrimitive::new(
                label,
                left + Y_AXIS_LABEL_INSET_PX,
                top,
                style.axis_label_font_size_px,
                style.axis_label_color,
                TextHAlign::Right,
            )
            .with_rotation(-FRAC_PI_2),
        );
    }
}

fn tooltip_lines(panel: &TooltipPanel) -> Vec<String> {
    panel
        .content
        .rows
        .iter()
        .map(|row| format!("{}: {}", row.label, row.value))
        .collect()
}

pub(super) fn tooltip_box(
    dims: Dimensions,
    anchor: ScreenPoint,
    line_count: usize,
    longest_line_chars: usize,
    clearance: f64,
    style: RenderStyle,
) -> TooltipBox {
    let width = longest_line_chars as f64 * style.tooltip_font_size_px * GLYPH_WIDTH_RATIO
        + 2.0 * style.tooltip_padding_px;
    let height = line_count as f64 * style.tooltip_row_height_px + 2.0 * style.tooltip_padding_px;
    let anchor = dims.plot_to_surface(anchor);
    TooltipBox {
        x: anchor.x - width / 2.0,
        y: anchor.y - clearance - height,
        width,
        height,
    }
}

fn push_tooltip(
    frame: &mut RenderFrame,
    dims: Dimensions,
    panel: &TooltipPanel,
    clearance: f64,
    style: RenderStyle,
) {
    let lines = tooltip_lines(panel);
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let panel_box = tooltip_box(dims, panel.anchor, lines.len(), longest, clearance, style);

    frame.rects.push(
        RectPrimitive::new(
            panel_box.x,
            panel_box.y,
            panel_box.width,
            panel_box.height,
            style.tooltip_fill_color,
        )
        .with_border(1.0, style.tooltip_border_color)
        .with_corner_radius(style.tooltip_corner_radius_px),
    );

    for (row, line) in lines.into_iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let color = if row == 0 {
            style.tooltip_link_color
        } else {
            style.tooltip_text_color
        };
        frame.texts.push(TextPrimitive::new(
            line,
            panel_box.x + style.tooltip_padding_px,
            panel_box.y + style.tooltip_padding_px + row as f64 * style.tooltip_row_height_px,
            style.tooltip_font_size_px,
            color,
            TextHAlign::Left,
        ));
    }
}
