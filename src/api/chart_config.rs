use serde::{Deserialize, Serialize};

use crate::core::{AxisSelector, CleaningSpec, DEFAULT_DOMAIN_PADDING, Margins};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ScaleExtent;

use super::validation::validate_config;

/// Container-to-dimensions layout rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutBehavior {
    pub margins: Margins,
    /// Outer height as a fraction of outer width.
    pub aspect_ratio: f64,
    /// Outer height cap as a fraction of the viewport height.
    pub viewport_height_fraction: f64,
    /// Outer height used once the viewport is too short for the cap.
    pub min_outer_height: f64,
}

impl Default for LayoutBehavior {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            aspect_ratio: 0.75,
            viewport_height_fraction: 0.9,
            min_outer_height: 350.0,
        }
    }
}

/// Zoom/pan gesture tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    pub scale_extent: ScaleExtent,
    /// Zoom ratio applied per 120 wheel units.
    pub wheel_zoom_step_ratio: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            scale_extent: ScaleExtent::default(),
            wheel_zoom_step_ratio: 0.2,
        }
    }
}

/// Public chart bootstrap configuration, fixed for the chart's lifetime.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartConfig {
    pub container_selector: String,
    pub x_axis: AxisSelector,
    pub y_axis: AxisSelector,
    #[serde(default = "default_domain_padding")]
    pub domain_padding: f64,
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_mark_radius")]
    pub mark_radius: f64,
    #[serde(default)]
    pub nice_domains: bool,
    #[serde(default = "default_tooltip_offset")]
    pub tooltip_offset_px: f64,
    /// Numeric rows shown in the detail panel; empty means the two axis fields.
    #[serde(default)]
    pub tooltip_fields: Vec<AxisSelector>,
    #[serde(default)]
    pub layout: LayoutBehavior,
    #[serde(default)]
    pub zoom: ZoomBehavior,
    #[serde(default)]
    pub cleaning: CleaningSpec,
}

impl ScatterChartConfig {
    /// Creates a config with default layout, zoom and cleaning behavior.
    #[must_use]
    pub fn new(
        container_selector: impl Into<String>,
        x_axis: AxisSelector,
        y_axis: AxisSelector,
    ) -> Self {
        Self {
            container_selector: container_selector.into(),
            x_axis,
            y_axis,
            domain_padding: default_domain_padding(),
            tick_count: default_tick_count(),
            mark_radius: default_mark_radius(),
            nice_domains: false,
            tooltip_offset_px: default_tooltip_offset(),
            tooltip_fields: Vec::new(),
            layout: LayoutBehavior::default(),
            zoom: ZoomBehavior::default(),
            cleaning: CleaningSpec::default(),
        }
    }

    /// Pages against log₁₀ sales rank for the book sales dataset.
    #[must_use]
    pub fn books(container_selector: impl Into<String>) -> Self {
        Self::new(
            container_selector,
            AxisSelector::new("pages", "Pages"),
            AxisSelector::new("log_sales_rank", "Sales Rank, log₁₀"),
        )
        .with_tooltip_fields(vec![
            AxisSelector::new("sales_rank", "Sales Rank"),
            AxisSelector::new("pages", "Pages"),
        ])
    }

    #[must_use]
    pub fn with_domain_padding(mut self, padding: f64) -> Self {
        self.domain_padding = padding;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    #[must_use]
    pub fn with_mark_radius(mut self, radius: f64) -> Self {
        self.mark_radius = radius;
        self
    }

    /// Extends axis domains outward to round tick boundaries.
    #[must_use]
    pub fn with_nice_domains(mut self, nice: bool) -> Self {
        self.nice_domains = nice;
        self
    }

    #[must_use]
    pub fn with_tooltip_fields(mut self, fields: Vec<AxisSelector>) -> Self {
        self.tooltip_fields = fields;
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutBehavior) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, zoom: ZoomBehavior) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_cleaning(mut self, cleaning: CleaningSpec) -> Self {
        self.cleaning = cleaning;
        self
    }

    /// Detail-panel numeric rows after applying the axis-field fallback.
    #[must_use]
    pub fn effective_tooltip_fields(&self) -> Vec<AxisSelector> {
        if self.tooltip_fields.is_empty() {
            vec![self.y_axis.clone(), self.x_axis.clone()]
        } else {
            self.tooltip_fields.clone()
        }
    }

    /// Rejects non-finite or out-of-range tunables.
    pub fn validate(&self) -> ChartResult<()> {
        validate_config(self)
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_domain_padding() -> f64 {
    DEFAULT_DOMAIN_PADDING
}

fn default_tick_count() -> usize {
    5
}

fn default_mark_radius() -> f64 {
    5.0
}

fn default_tooltip_offset() -> f64 {
    10.0
}
