use serde::{Deserialize, Serialize};

use crate::core::{Attribute, Axis};
use crate::error::{ChartError, ChartResult};

/// Active attribute pair driving the two axes.
///
/// Construction guarantees `x` belongs to the horizontal candidates and `y`
/// to the vertical ones, so exactly one attribute per axis is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisState {
    x: Attribute,
    y: Attribute,
}

impl Default for AxisState {
    fn default() -> Self {
        Self {
            x: Attribute::Poverty,
            y: Attribute::Healthcare,
        }
    }
}

impl AxisState {
    pub fn new(x: Attribute, y: Attribute) -> ChartResult<Self> {
        ensure_axis(x, Axis::X)?;
        ensure_axis(y, Axis::Y)?;
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn x(self) -> Attribute {
        self.x
    }

    #[must_use]
    pub fn y(self) -> Attribute {
        self.y
    }

    #[must_use]
    pub fn active(self, axis: Axis) -> Attribute {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns the state with `attribute` active on its own axis.
    #[must_use]
    pub fn with_active(self, attribute: Attribute) -> Self {
        match attribute.axis() {
            Axis::X => Self { x: attribute, ..self },
            Axis::Y => Self { y: attribute, ..self },
        }
    }
}

fn ensure_axis(attribute: Attribute, axis: Axis) -> ChartResult<()> {
    if attribute.axis() == axis {
        Ok(())
    } else {
        Err(ChartError::AxisMismatch { attribute, axis })
    }
}

/// User input accepted by the selection controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// A label control carrying `Attribute` was clicked.
    LabelClicked(Attribute),
}

impl SelectionEvent {
    /// Parses the raw value carried by a label control.
    pub fn from_control_value(value: &str) -> ChartResult<Self> {
        value.parse().map(Self::LabelClicked)
    }

    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::LabelClicked(attribute) => attribute.axis(),
        }
    }
}

/// Pointer hover state over data markers.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<usize>,
    pointer_x: f64,
    pointer_y: f64,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    #[must_use]
    pub fn pointer(self) -> (f64, f64) {
        (self.pointer_x, self.pointer_y)
    }

    pub fn on_marker_enter(&mut self, index: usize, x: f64, y: f64) {
        self.hovered = Some(index);
        self.pointer_x = x;
        self.pointer_y = y;
    }

    pub fn on_marker_exit(&mut self) {
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_state_rejects_attribute_on_wrong_axis() {
        assert!(matches!(
            AxisState::new(Attribute::Smokes, Attribute::Healthcare),
            Err(ChartError::AxisMismatch {
                attribute: Attribute::Smokes,
                axis: Axis::X
            })
        ));
    }

    #[test]
    fn with_active_only_touches_its_own_axis() {
        let state = AxisState::default().with_active(Attribute::Obesity);
        assert_eq!(state.x(), Attribute::Poverty);
        assert_eq!(state.y(), Attribute::Obesity);
    }

    #[test]
    fn hover_exit_keeps_last_pointer() {
        let mut hover = HoverState::default();
        hover.on_marker_enter(3, 10.0, 20.0);
        assert_eq!(hover.hovered(), Some(3));
        hover.on_marker_exit();
        assert_eq!(hover.hovered(), None);
        assert_eq!(hover.pointer(), (10.0, 20.0));
    }
}
