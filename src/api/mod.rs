mod axis_ticks;
mod chart;
mod chart_config;
mod data_loader;
mod frame_builder;
mod render_ops;
mod scene;
mod selection_controller;
mod snapshot;
mod tooltip;
mod transition;

pub use axis_ticks::{AxisTick, axis_ticks, format_tick};
pub use chart::ScatterChart;
pub use chart_config::{ChartConfig, TooltipStyle};
pub use data_loader::{coerce_numeric, load_dataset_from_path, load_dataset_from_reader};
pub use frame_builder::build_frame;
pub use render_ops::{
    PointProjection, TransitionTiming, render_axis, render_labels, render_markers,
};
pub use scene::{
    AxisGroup, ChartScene, Emphasis, LabelControl, LabelControlGroup, LabelGroup, Marker,
    MarkerGroup, PointLabel, control_order, control_text,
};
pub use selection_controller::{ChartState, SelectionController, SideEffect, SideEffects};
pub use snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1, PointSnapshot,
};
pub use tooltip::{
    TOOLTIP_LABELS, TooltipBinding, TooltipOverlay, bind_tooltip, default_tooltip_label,
    tooltip_label,
};
pub use transition::{Interpolate, Transition, ease_cubic_in_out};
