use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::interaction::AxisState;
use crate::render::Renderer;

use super::ScatterChart;
use super::scene::Emphasis;
use super::tooltip::TooltipOverlay;

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Position of one marker and its text label at the snapshot instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointSnapshot {
    pub record_index: usize,
    pub abbr: String,
    pub marker: (f64, f64),
    pub label: (f64, f64),
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub time_ms: f64,
    pub axes: AxisState,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub transitioning: bool,
    pub points: Vec<PointSnapshot>,
    /// Control emphasis keyed by attribute, x controls first.
    pub emphasis: IndexMap<String, Emphasis>,
    pub tooltip: Option<TooltipOverlay>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl<R: Renderer> ScatterChart<R> {
    #[must_use]
    pub fn snapshot(&self, now_ms: f64) -> ChartSnapshot {
        let scene = self.scene();
        let points = scene
            .markers
            .markers()
            .iter()
            .zip(scene.labels.labels())
            .map(|(marker, label)| PointSnapshot {
                record_index: marker.record_index,
                abbr: label.text.clone(),
                marker: marker.position_at(now_ms),
                label: label.position_at(now_ms),
            })
            .collect();
        let emphasis = scene
            .x_controls
            .controls()
            .iter()
            .chain(scene.y_controls.controls())
            .map(|control| (control.attribute.key().to_owned(), control.emphasis))
            .collect();

        ChartSnapshot {
            time_ms: now_ms,
            axes: self.axis_state(),
            x_domain: self.x_scale().domain(),
            y_domain: self.y_scale().domain(),
            transitioning: self.is_transitioning(now_ms),
            points,
            emphasis,
            tooltip: self.tooltip_overlay().cloned(),
        }
    }
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
