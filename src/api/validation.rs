use crate::error::{ChartError, ChartResult};
use crate::interaction::ScaleExtent;

use super::{LayoutBehavior, RenderStyle, ScatterChartConfig, ZoomBehavior};

pub(super) fn validate_config(config: &ScatterChartConfig) -> ChartResult<()> {
    if config.x_axis.field.is_empty() || config.y_axis.field.is_empty() {
        return Err(ChartError::InvalidConfig(
            "axis field selectors must not be empty".to_owned(),
        ));
    }
    if !config.domain_padding.is_finite() || config.domain_padding < 0.0 {
        return Err(ChartError::InvalidConfig(
            "domain padding must be finite and >= 0".to_owned(),
        ));
    }
    if config.tick_count == 0 {
        return Err(ChartError::InvalidConfig(
            "tick count must be > 0".to_owned(),
        ));
    }
    if !config.mark_radius.is_finite() || config.mark_radius <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "mark radius must be finite and > 0".to_owned(),
        ));
    }
    if !config.tooltip_offset_px.is_finite() || config.tooltip_offset_px < 0.0 {
        return Err(ChartError::InvalidConfig(
            "tooltip offset must be finite and >= 0".to_owned(),
        ));
    }
    validate_layout_behavior(config.layout)?;
    validate_zoom_behavior(config.zoom)
}

fn validate_layout_behavior(layout: LayoutBehavior) -> ChartResult<()> {
    let margins = layout.margins;
    for (name, value) in [
        ("top", margins.top),
        ("right", margins.right),
        ("bottom", margins.bottom),
        ("left", margins.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "margin `{name}` must be finite and >= 0"
            )));
        }
    }
    if !layout.aspect_ratio.is_finite() || layout.aspect_ratio <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "aspect ratio must be finite and > 0".to_owned(),
        ));
    }
    if !layout.viewport_height_fraction.is_finite()
        || layout.viewport_height_fraction <= 0.0
        || layout.viewport_height_fraction > 1.0
    {
        return Err(ChartError::InvalidConfig(
            "viewport height fraction must be in (0, 1]".to_owned(),
        ));
    }
    if !layout.min_outer_height.is_finite() || layout.min_outer_height < 0.0 {
        return Err(ChartError::InvalidConfig(
            "min outer height must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

fn validate_zoom_behavior(zoom: ZoomBehavior) -> ChartResult<()> {
    ScaleExtent::new(zoom.scale_extent.min, zoom.scale_extent.max)?;
    if !zoom.wheel_zoom_step_ratio.is_finite() || zoom.wheel_zoom_step_ratio <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "wheel zoom step ratio must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_render_style(style: RenderStyle) -> ChartResult<()> {
    for color in [
        style.axis_color,
        style.axis_label_color,
        style.mark_color,
        style.tooltip_fill_color,
        style.tooltip_border_color,
        style.tooltip_text_color,
        style.tooltip_link_color,
    ] {
        color.validate()?;
    }

    for (name, value) in [
        ("axis line width", style.axis_line_width),
        ("tick label font size", style.tick_label_font_size_px),
        ("axis label font size", style.axis_label_font_size_px),
        ("tooltip font size", style.tooltip_font_size_px),
        ("tooltip row height", style.tooltip_row_height_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    for (name, value) in [
        ("tick mark length", style.tick_mark_length_px),
        ("tooltip padding", style.tooltip_padding_px),
        ("tooltip corner radius", style.tooltip_corner_radius_px),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{name} must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_config, validate_render_style};
    use crate::api::{RenderStyle, ScatterChartConfig};
    use crate::interaction::ScaleExtent;

    #[test]
    fn books_config_and_default_style_are_valid() {
        validate_config(&ScatterChartConfig::books("#scatter")).expect("valid config");
        validate_render_style(RenderStyle::default()).expect("valid style");
    }

    #[test]
    fn inverted_scale_extent_is_rejected() {
        let mut config = ScatterChartConfig::books("#scatter");
        config.zoom.scale_extent = ScaleExtent { min: 8.0, max: 2.0 };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn non_positive_mark_radius_is_rejected() {
        let config = ScatterChartConfig::books("#scatter").with_mark_radius(0.0);
        assert!(validate_config(&config).is_err());
    }
}
