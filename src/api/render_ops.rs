use tracing::trace;

use crate::core::{Attribute, Dataset, LinearScale, Record};
use crate::error::{ChartError, ChartResult};

use super::scene::{AxisGroup, LabelGroup, MarkerGroup};

/// When a render update starts and how long it animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub now_ms: f64,
    pub duration_ms: f64,
}

impl TransitionTiming {
    #[must_use]
    pub const fn new(now_ms: f64, duration_ms: f64) -> Self {
        Self {
            now_ms,
            duration_ms,
        }
    }
}

/// Active attribute and scale of both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointProjection {
    pub x_scale: LinearScale,
    pub x_attribute: Attribute,
    pub y_scale: LinearScale,
    pub y_attribute: Attribute,
}

impl PointProjection {
    /// Plot-local pixel position of `record`. NaN fields yield NaN coordinates.
    #[must_use]
    pub fn project(&self, record: &Record) -> (f64, f64) {
        (
            self.x_scale.map(record.value(self.x_attribute)),
            self.y_scale.map(record.value(self.y_attribute)),
        )
    }

    /// Positions of every record, in dataset order.
    #[must_use]
    pub fn project_dataset(&self, dataset: &Dataset) -> Vec<(f64, f64)> {
        #[cfg(feature = "parallel-projection")]
        {
            use rayon::prelude::*;
            return dataset
                .records()
                .par_iter()
                .map(|record| self.project(record))
                .collect();
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            dataset
                .records()
                .iter()
                .map(|record| self.project(record))
                .collect()
        }
    }
}

/// Moves the axis onto `scale`, superseding any running axis transition.
pub fn render_axis(axis: &mut AxisGroup, scale: LinearScale, timing: TransitionTiming) {
    axis.scale.retarget(timing.now_ms, scale, timing.duration_ms);
    trace!(
        axis = %axis.axis(),
        domain_start = scale.domain().0,
        domain_end = scale.domain().1,
        "render axis"
    );
}

/// Moves every marker to its position under `projection`.
///
/// Markers are repositioned in place; none are created or dropped.
pub fn render_markers(
    markers: &mut MarkerGroup,
    dataset: &Dataset,
    projection: &PointProjection,
    timing: TransitionTiming,
) -> ChartResult<()> {
    ensure_group_len("marker", markers.len(), dataset.len())?;
    let targets = projection.project_dataset(dataset);
    for (marker, target) in markers.markers.iter_mut().zip(targets) {
        marker
            .position
            .retarget(timing.now_ms, target, timing.duration_ms);
    }
    trace!(
        count = markers.len(),
        x = %projection.x_attribute,
        y = %projection.y_attribute,
        "render markers"
    );
    Ok(())
}

/// Moves every point label alongside its marker: same targets, same timing.
pub fn render_labels(
    labels: &mut LabelGroup,
    dataset: &Dataset,
    projection: &PointProjection,
    timing: TransitionTiming,
) -> ChartResult<()> {
    ensure_group_len("label", labels.len(), dataset.len())?;
    let targets = projection.project_dataset(dataset);
    for (label, target) in labels.labels.iter_mut().zip(targets) {
        label
            .position
            .retarget(timing.now_ms, target, timing.duration_ms);
    }
    trace!(count = labels.len(), "render labels");
    Ok(())
}

fn ensure_group_len(kind: &str, group_len: usize, dataset_len: usize) -> ChartResult<()> {
    if group_len == dataset_len {
        return Ok(());
    }
    Err(ChartError::InvalidData(format!(
        "{kind} group holds {group_len} elements but dataset has {dataset_len} records"
    )))
}
