use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Attribute, Axis, LinearScale};

use super::tooltip::{TooltipBinding, TooltipOverlay};
use super::transition::Transition;

/// Visual emphasis of a label control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Active,
    Inactive,
}

/// Tick marks and labels of one axis, animated between scales.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGroup {
    axis: Axis,
    pub(super) scale: Transition<LinearScale>,
}

impl AxisGroup {
    #[must_use]
    pub fn new(axis: Axis, scale: LinearScale) -> Self {
        Self {
            axis,
            scale: Transition::settled(scale),
        }
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Scale the axis will settle on.
    #[must_use]
    pub fn target_scale(&self) -> LinearScale {
        self.scale.target()
    }

    #[must_use]
    pub fn scale_at(&self, now_ms: f64) -> LinearScale {
        self.scale.sample(now_ms)
    }

    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.scale.is_running(now_ms)
    }
}

/// Circle drawn for one record. `record_index` is its identity across
/// attribute switches.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub record_index: usize,
    pub(super) position: Transition<(f64, f64)>,
}

impl Marker {
    #[must_use]
    pub fn position_at(&self, now_ms: f64) -> (f64, f64) {
        self.position.sample(now_ms)
    }

    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        self.position.target()
    }
}

/// Every data marker plus the tooltip binding attached to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MarkerGroup {
    pub(super) markers: Vec<Marker>,
    pub(super) tooltip: Option<TooltipBinding>,
}

impl MarkerGroup {
    #[must_use]
    pub fn from_positions(positions: &[(f64, f64)]) -> Self {
        Self {
            markers: positions
                .iter()
                .enumerate()
                .map(|(record_index, &position)| Marker {
                    record_index,
                    position: Transition::settled(position),
                })
                .collect(),
            tooltip: None,
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<&TooltipBinding> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.markers
            .iter()
            .any(|marker| marker.position.is_running(now_ms))
    }
}

/// Abbreviation text drawn on top of a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PointLabel {
    pub record_index: usize,
    pub text: String,
    pub(super) position: Transition<(f64, f64)>,
}

impl PointLabel {
    #[must_use]
    pub fn position_at(&self, now_ms: f64) -> (f64, f64) {
        self.position.sample(now_ms)
    }

    #[must_use]
    pub fn target(&self) -> (f64, f64) {
        self.position.target()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabelGroup {
    pub(super) labels: Vec<PointLabel>,
}

impl LabelGroup {
    #[must_use]
    pub fn from_texts<'a>(
        texts: impl IntoIterator<Item = &'a str>,
        positions: &[(f64, f64)],
    ) -> Self {
        Self {
            labels: texts
                .into_iter()
                .zip(positions)
                .enumerate()
                .map(|(record_index, (text, &position))| PointLabel {
                    record_index,
                    text: text.to_owned(),
                    position: Transition::settled(position),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn labels(&self) -> &[PointLabel] {
        &self.labels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Clickable axis title requesting an attribute switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelControl {
    pub attribute: Attribute,
    pub text: &'static str,
    pub emphasis: Emphasis,
}

/// Display text of the control for `attribute`.
#[must_use]
pub const fn control_text(attribute: Attribute) -> &'static str {
    match attribute {
        Attribute::Poverty => "In Poverty (%)",
        Attribute::Age => "Age (Median)",
        Attribute::Income => "Household Income (Median)",
        Attribute::Healthcare => "Lacks Healthcare (%)",
        Attribute::Smokes => "Smokes (%)",
        Attribute::Obesity => "Obese (%)",
    }
}

/// Display order of the controls on each axis, top to bottom (x) or
/// innermost to outermost (y).
#[must_use]
pub const fn control_order(axis: Axis) -> [Attribute; 3] {
    match axis {
        Axis::X => [Attribute::Poverty, Attribute::Age, Attribute::Income],
        Axis::Y => [Attribute::Healthcare, Attribute::Obesity, Attribute::Smokes],
    }
}

/// The three label controls of one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelControlGroup {
    axis: Axis,
    controls: SmallVec<[LabelControl; 3]>,
}

impl LabelControlGroup {
    #[must_use]
    pub fn new(axis: Axis, active: Attribute) -> Self {
        let mut group = Self {
            axis,
            controls: control_order(axis)
                .into_iter()
                .map(|attribute| LabelControl {
                    attribute,
                    text: control_text(attribute),
                    emphasis: Emphasis::Inactive,
                })
                .collect(),
        };
        group.set_active(active);
        group
    }

    #[must_use]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    #[must_use]
    pub fn controls(&self) -> &[LabelControl] {
        &self.controls
    }

    /// Marks `active` as the emphasized control and every other one inactive.
    pub fn set_active(&mut self, active: Attribute) {
        for control in &mut self.controls {
            control.emphasis = if control.attribute == active {
                Emphasis::Active
            } else {
                Emphasis::Inactive
            };
        }
    }

    #[must_use]
    pub fn emphasis(&self, attribute: Attribute) -> Option<Emphasis> {
        self.controls
            .iter()
            .find(|control| control.attribute == attribute)
            .map(|control| control.emphasis)
    }

    #[must_use]
    pub fn active(&self) -> Option<Attribute> {
        self.controls
            .iter()
            .find(|control| control.emphasis == Emphasis::Active)
            .map(|control| control.attribute)
    }
}

/// Every visual target the chart animates or restyles.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScene {
    pub x_axis: AxisGroup,
    pub y_axis: AxisGroup,
    pub markers: MarkerGroup,
    pub labels: LabelGroup,
    pub x_controls: LabelControlGroup,
    pub y_controls: LabelControlGroup,
    pub tooltip_overlay: Option<TooltipOverlay>,
}

impl ChartScene {
    #[must_use]
    pub fn axis_group(&self, axis: Axis) -> &AxisGroup {
        match axis {
            Axis::X => &self.x_axis,
            Axis::Y => &self.y_axis,
        }
    }

    pub fn axis_group_mut(&mut self, axis: Axis) -> &mut AxisGroup {
        match axis {
            Axis::X => &mut self.x_axis,
            Axis::Y => &mut self.y_axis,
        }
    }

    #[must_use]
    pub fn controls(&self, axis: Axis) -> &LabelControlGroup {
        match axis {
            Axis::X => &self.x_controls,
            Axis::Y => &self.y_controls,
        }
    }

    pub fn controls_mut(&mut self, axis: Axis) -> &mut LabelControlGroup {
        match axis {
            Axis::X => &mut self.x_controls,
            Axis::Y => &mut self.y_controls,
        }
    }

    #[must_use]
    pub fn is_running(&self, now_ms: f64) -> bool {
        self.x_axis.is_running(now_ms)
            || self.y_axis.is_running(now_ms)
            || self.markers.is_running(now_ms)
            || self
                .labels
                .labels
                .iter()
                .any(|label| label.position.is_running(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_group_keeps_exactly_one_active() {
        let mut group = LabelControlGroup::new(Axis::Y, Attribute::Healthcare);
        group.set_active(Attribute::Smokes);
        let active: Vec<_> = group
            .controls()
            .iter()
            .filter(|control| control.emphasis == Emphasis::Active)
            .map(|control| control.attribute)
            .collect();
        assert_eq!(active, vec![Attribute::Smokes]);
        assert_eq!(group.emphasis(Attribute::Healthcare), Some(Emphasis::Inactive));
        assert_eq!(group.emphasis(Attribute::Poverty), None);
    }
}
