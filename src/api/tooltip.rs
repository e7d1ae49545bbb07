use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Attribute, Axis, Record};

use super::chart_config::TooltipStyle;
use super::scene::MarkerGroup;

/// Tooltip prefix for every attribute key.
pub const TOOLTIP_LABELS: [(&str, &str); 6] = [
    ("poverty", "In Poverty (%):"),
    ("age", "Age (median):"),
    ("income", "Household Income (median):"),
    ("healthcare", "Lacks Healthcare (%):"),
    ("smokes", "Smokes (%):"),
    ("obesity", "Obese (%):"),
];

/// Fallback prefix per axis for keys missing from [`TOOLTIP_LABELS`].
#[must_use]
pub const fn default_tooltip_label(axis: Axis) -> &'static str {
    match axis {
        Axis::X => "Household Income (median):",
        Axis::Y => "Obese (%):",
    }
}

/// Looks up the tooltip prefix of `key`, falling back to the axis default.
#[must_use]
pub fn tooltip_label(axis: Axis, key: &str) -> &'static str {
    TOOLTIP_LABELS
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map_or_else(|| default_tooltip_label(axis), |(_, label)| *label)
}

/// Hover handlers attached to a marker group for one attribute pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipBinding {
    pub x_attribute: Attribute,
    pub y_attribute: Attribute,
    pub x_label: &'static str,
    pub y_label: &'static str,
}

impl TooltipBinding {
    #[must_use]
    pub fn new(x_attribute: Attribute, y_attribute: Attribute) -> Self {
        Self {
            x_attribute,
            y_attribute,
            x_label: tooltip_label(Axis::X, x_attribute.key()),
            y_label: tooltip_label(Axis::Y, y_attribute.key()),
        }
    }

    /// Text lines shown for `record`.
    #[must_use]
    pub fn content(&self, record: &Record) -> Vec<String> {
        vec![
            record.state.clone(),
            format!("{} {}", self.x_label, record.value(self.x_attribute)),
            format!("{} {}", self.y_label, record.value(self.y_attribute)),
        ]
    }

    /// Hover-enter handler: builds the overlay next to the pointer.
    #[must_use]
    pub fn on_hover_enter(
        &self,
        record_index: usize,
        record: &Record,
        pointer: (f64, f64),
        style: TooltipStyle,
    ) -> TooltipOverlay {
        TooltipOverlay {
            record_index,
            x: pointer.0 + style.offset_left,
            y: pointer.1 + style.offset_top,
            lines: self.content(record),
        }
    }

    /// Hover-exit handler: hides the overlay.
    pub fn on_hover_exit(&self, overlay: &mut Option<TooltipOverlay>) {
        *overlay = None;
    }
}

/// Visible tooltip box, anchored at its top-left corner in canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOverlay {
    pub record_index: usize,
    pub x: f64,
    pub y: f64,
    pub lines: Vec<String>,
}

/// Attaches hover handlers for the active pair to `markers`.
///
/// Any earlier binding is replaced, so repeated calls never stack overlays.
pub fn bind_tooltip(
    x_attribute: Attribute,
    y_attribute: Attribute,
    markers: &mut MarkerGroup,
) -> &mut MarkerGroup {
    let binding = TooltipBinding::new(x_attribute, y_attribute);
    let replaced = markers.tooltip.replace(binding).is_some();
    debug!(
        x = %x_attribute,
        y = %y_attribute,
        replaced,
        markers = markers.len(),
        "bind tooltip"
    );
    markers
}
