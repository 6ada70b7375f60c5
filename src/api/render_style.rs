use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub axis_color: Color,
    pub axis_label_color: Color,
    pub axis_line_width: f64,
    pub tick_mark_length_px: f64,
    pub tick_label_font_size_px: f64,
    pub axis_label_font_size_px: f64,
    pub mark_color: Color,
    pub tooltip_fill_color: Color,
    pub tooltip_border_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_link_color: Color,
    pub tooltip_font_size_px: f64,
    pub tooltip_row_height_px: f64,
    pub tooltip_padding_px: f64,
    pub tooltip_corner_radius_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            axis_color: Color::BLACK,
            axis_label_color: Color::BLACK,
            axis_line_width: 1.0,
            tick_mark_length_px: 6.0,
            tick_label_font_size_px: 10.0,
            axis_label_font_size_px: 11.0,
            // steelblue
            mark_color: Color::from_rgb8(70, 130, 180).with_alpha(0.8),
            tooltip_fill_color: Color::BLACK.with_alpha(0.8),
            tooltip_border_color: Color::BLACK.with_alpha(0.8),
            tooltip_text_color: Color::WHITE,
            tooltip_link_color: Color::rgb(0.55, 0.8, 1.0),
            tooltip_font_size_px: 11.0,
            tooltip_row_height_px: 16.0,
            tooltip_padding_px: 8.0,
            tooltip_corner_radius_px: 2.0,
        }
    }
}
