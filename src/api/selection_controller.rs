use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Attribute, Axis, Dataset, LinearScale, PlotArea, build_scale_with_padding};
use crate::interaction::{AxisState, SelectionEvent};

use super::render_ops::PointProjection;

/// Active attribute pair plus the scales derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    axes: AxisState,
    x_scale: LinearScale,
    y_scale: LinearScale,
}

impl ChartState {
    #[must_use]
    pub fn axes(&self) -> AxisState {
        self.axes
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.y_scale
    }

    #[must_use]
    pub fn scale(&self, axis: Axis) -> LinearScale {
        match axis {
            Axis::X => self.x_scale,
            Axis::Y => self.y_scale,
        }
    }

    #[must_use]
    pub fn projection(&self) -> PointProjection {
        PointProjection {
            x_scale: self.x_scale,
            x_attribute: self.axes.x(),
            y_scale: self.y_scale,
            y_attribute: self.axes.y(),
        }
    }
}

/// Visual update requested by a state transition, applied in list order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SideEffect {
    RenderAxis { axis: Axis, scale: LinearScale },
    RenderMarkers(PointProjection),
    RenderLabels(PointProjection),
    BindTooltip { x: Attribute, y: Attribute },
    SetEmphasis { axis: Axis, active: Attribute },
}

pub type SideEffects = SmallVec<[SideEffect; 5]>;

/// Turns label clicks into new chart state and the visual work that goes
/// with it. Holds only immutable geometry, so transitions are pure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionController {
    plot: PlotArea,
    domain_padding: (f64, f64),
}

impl SelectionController {
    #[must_use]
    pub fn new(plot: PlotArea, domain_padding: (f64, f64)) -> Self {
        Self {
            plot,
            domain_padding,
        }
    }

    /// Scale for `attribute` on its own axis. Vertical ranges are inverted.
    #[must_use]
    pub fn scale_for(&self, dataset: &Dataset, attribute: Attribute) -> LinearScale {
        match attribute.axis() {
            Axis::X => build_scale_with_padding(
                dataset,
                attribute,
                self.plot.x_range(),
                false,
                self.domain_padding,
            ),
            Axis::Y => build_scale_with_padding(
                dataset,
                attribute,
                self.plot.y_range(),
                true,
                self.domain_padding,
            ),
        }
    }

    #[must_use]
    pub fn initial_state(&self, dataset: &Dataset, axes: AxisState) -> ChartState {
        ChartState {
            axes,
            x_scale: self.scale_for(dataset, axes.x()),
            y_scale: self.scale_for(dataset, axes.y()),
        }
    }

    /// Applies `event` to `state`.
    ///
    /// Clicking the already active control returns the state unchanged with no
    /// effects. Otherwise the effects are, in order: axis, markers, labels,
    /// tooltip rebind, emphasis of the clicked axis.
    #[must_use]
    pub fn transition(
        &self,
        state: &ChartState,
        event: SelectionEvent,
        dataset: &Dataset,
    ) -> (ChartState, SideEffects) {
        let SelectionEvent::LabelClicked(attribute) = event;
        let axis = attribute.axis();
        let current = state.axes.active(axis);
        if current == attribute {
            debug!(%axis, %attribute, "selection unchanged");
            return (*state, SideEffects::new());
        }

        let scale = self.scale_for(dataset, attribute);
        let mut next = ChartState {
            axes: state.axes.with_active(attribute),
            ..*state
        };
        match axis {
            Axis::X => next.x_scale = scale,
            Axis::Y => next.y_scale = scale,
        }
        debug!(
            %axis,
            from = %current,
            to = %attribute,
            domain_start = scale.domain().0,
            domain_end = scale.domain().1,
            "selection changed"
        );

        let projection = next.projection();
        let mut effects = SideEffects::new();
        effects.push(SideEffect::RenderAxis { axis, scale });
        effects.push(SideEffect::RenderMarkers(projection));
        effects.push(SideEffect::RenderLabels(projection));
        effects.push(SideEffect::BindTooltip {
            x: next.axes.x(),
            y: next.axes.y(),
        });
        effects.push(SideEffect::SetEmphasis {
            axis,
            active: attribute,
        });
        (next, effects)
    }
}
