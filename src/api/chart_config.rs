use serde::{Deserialize, Serialize};

use crate::core::{
    DEFAULT_DOMAIN_MAX_FACTOR, DEFAULT_DOMAIN_MIN_FACTOR, MAX_TICK_COUNT, Margins, PlotArea,
    Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::AxisState;
use crate::render::Color;

/// Styling and placement of the hover tooltip overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    /// Vertical offset from the pointer (positive moves down).
    pub offset_top: f64,
    /// Horizontal offset from the pointer (positive moves right).
    pub offset_left: f64,
    pub background: Color,
    pub text_color: Color,
    pub corner_radius: f64,
    pub font_size_px: f64,
    pub line_height_px: f64,
    pub padding_px: f64,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            offset_top: 80.0,
            offset_left: -60.0,
            background: Color::from_rgb8(0x28, 0x8c, 0x93),
            text_color: Color::rgb(1.0, 1.0, 1.0),
            corner_radius: 8.0,
            font_size_px: 12.0,
            line_height_px: 16.0,
            padding_px: 6.0,
        }
    }
}

/// Public chart bootstrap configuration.
///
/// Serializable so hosts can persist chart setup as JSON; every field has a
/// default, so partial documents are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_viewport")]
    pub viewport: Viewport,
    #[serde(default)]
    pub margins: Margins,
    #[serde(default = "default_transition_duration_ms")]
    pub transition_duration_ms: f64,
    #[serde(default = "default_domain_padding")]
    pub domain_padding: (f64, f64),
    #[serde(default = "default_tick_count")]
    pub tick_count: usize,
    #[serde(default = "default_marker_radius")]
    pub marker_radius: f64,
    #[serde(default = "default_marker_fill")]
    pub marker_fill: Color,
    #[serde(default = "default_marker_label_font_px")]
    pub marker_label_font_px: f64,
    #[serde(default = "default_marker_label_color")]
    pub marker_label_color: Color,
    #[serde(default)]
    pub tooltip: TooltipStyle,
    #[serde(default)]
    pub initial_axes: AxisState,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            viewport: default_viewport(),
            margins: Margins::default(),
            transition_duration_ms: default_transition_duration_ms(),
            domain_padding: default_domain_padding(),
            tick_count: default_tick_count(),
            marker_radius: default_marker_radius(),
            marker_fill: default_marker_fill(),
            marker_label_font_px: default_marker_label_font_px(),
            marker_label_color: default_marker_label_color(),
            tooltip: TooltipStyle::default(),
            initial_axes: AxisState::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_initial_axes(mut self, axes: AxisState) -> Self {
        self.initial_axes = axes;
        self
    }

    #[must_use]
    pub fn with_transition_duration_ms(mut self, duration_ms: f64) -> Self {
        self.transition_duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn plot_area(self) -> PlotArea {
        PlotArea::from_viewport(self.viewport, self.margins)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.margins.is_valid() {
            return Err(ChartError::InvalidData(
                "margins must be finite and >= 0".to_owned(),
            ));
        }
        if !self.plot_area().is_valid() {
            return Err(ChartError::InvalidData(
                "margins leave no room for the plot area".to_owned(),
            ));
        }
        if !self.transition_duration_ms.is_finite() || self.transition_duration_ms <= 0.0 {
            return Err(ChartError::InvalidData(
                "transition duration must be finite and > 0".to_owned(),
            ));
        }
        if !self.domain_padding.0.is_finite() || !self.domain_padding.1.is_finite() {
            return Err(ChartError::InvalidData(
                "domain padding factors must be finite".to_owned(),
            ));
        }
        if self.tick_count == 0 || self.tick_count > MAX_TICK_COUNT {
            return Err(ChartError::InvalidData(format!(
                "tick count must be in 1..={MAX_TICK_COUNT}"
            )));
        }
        for (name, value) in [
            ("marker radius", self.marker_radius),
            ("marker label font size", self.marker_label_font_px),
            ("tooltip font size", self.tooltip.font_size_px),
            ("tooltip line height", self.tooltip.line_height_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("tooltip corner radius", self.tooltip.corner_radius),
            ("tooltip padding", self.tooltip.padding_px),
            ("tooltip top offset", self.tooltip.offset_top),
            ("tooltip left offset", self.tooltip.offset_left),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!("{name} must be finite")));
            }
        }
        if self.tooltip.corner_radius < 0.0 || self.tooltip.padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "tooltip corner radius and padding must be >= 0".to_owned(),
            ));
        }
        // Deserialized axis pairs bypass `AxisState::new`.
        AxisState::new(self.initial_axes.x(), self.initial_axes.y())?;
        self.marker_fill.validate()?;
        self.marker_label_color.validate()?;
        self.tooltip.background.validate()?;
        self.tooltip.text_color.validate()
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_viewport() -> Viewport {
    Viewport::new(750, 500)
}

fn default_transition_duration_ms() -> f64 {
    1000.0
}

fn default_domain_padding() -> (f64, f64) {
    (DEFAULT_DOMAIN_MIN_FACTOR, DEFAULT_DOMAIN_MAX_FACTOR)
}

fn default_tick_count() -> usize {
    10
}

fn default_marker_radius() -> f64 {
    12.0
}

fn default_marker_fill() -> Color {
    Color::from_rgb8(0x80, 0x00, 0x80).with_alpha(0.6)
}

fn default_marker_label_font_px() -> f64 {
    10.0
}

fn default_marker_label_color() -> Color {
    Color::rgb(1.0, 1.0, 1.0)
}
