//! scatter-rs: headless bivariate scatter chart with switchable axes.
//!
//! A dataset of per-region indicators is plotted with one attribute per axis.
//! Clicking an axis label control swaps the attribute, rebuilds that axis'
//! scale and animates axis, markers and labels to their new places. All
//! timing is caller-driven so every frame is reproducible.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ScatterChart};
pub use error::{ChartError, ChartResult};
