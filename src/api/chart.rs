use std::path::Path;
use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};

use crate::core::{Attribute, Axis, Dataset, LinearScale};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{AxisState, HoverState, SelectionEvent};
use crate::render::{RenderFrame, Renderer};

use super::chart_config::ChartConfig;
use super::data_loader::load_dataset_from_path;
use super::frame_builder::build_frame;
use super::render_ops::{TransitionTiming, render_axis, render_labels, render_markers};
use super::scene::{AxisGroup, ChartScene, Emphasis, LabelControlGroup, LabelGroup, MarkerGroup};
use super::selection_controller::{ChartState, SelectionController, SideEffect};
use super::tooltip::{TooltipOverlay, bind_tooltip};

/// Main orchestration facade consumed by host applications.
///
/// `ScatterChart` owns the shared dataset, the active axis state and every
/// visual group, and hands materialized frames to its renderer. Time is always
/// passed in explicitly, so the chart is deterministic under test.
pub struct ScatterChart<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    dataset: Arc<Dataset>,
    controller: SelectionController,
    state: ChartState,
    scene: ChartScene,
    hover: HoverState,
}

impl<R: Renderer> ScatterChart<R> {
    /// Builds the chart at rest on `config.initial_axes`; nothing animates.
    pub fn new(
        renderer: R,
        dataset: impl Into<Arc<Dataset>>,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        let dataset = dataset.into();
        let controller = SelectionController::new(config.plot_area(), config.domain_padding);
        let state = controller.initial_state(&dataset, config.initial_axes);

        let positions = state.projection().project_dataset(&dataset);
        let mut markers = MarkerGroup::from_positions(&positions);
        bind_tooltip(state.axes().x(), state.axes().y(), &mut markers);
        let labels = LabelGroup::from_texts(
            dataset.records().iter().map(|record| record.abbr.as_str()),
            &positions,
        );

        let scene = ChartScene {
            x_axis: AxisGroup::new(Axis::X, state.x_scale()),
            y_axis: AxisGroup::new(Axis::Y, state.y_scale()),
            markers,
            labels,
            x_controls: LabelControlGroup::new(Axis::X, state.axes().x()),
            y_controls: LabelControlGroup::new(Axis::Y, state.axes().y()),
            tooltip_overlay: None,
        };

        info!(
            records = dataset.len(),
            x = %state.axes().x(),
            y = %state.axes().y(),
            "scatter chart initialized"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            controller,
            state,
            scene,
            hover: HoverState::default(),
        })
    }

    /// Loads the dataset at `path` and builds the chart.
    ///
    /// Any failure is logged and yields `None`; no partial chart is produced.
    pub fn startup(renderer: R, path: impl AsRef<Path>, config: ChartConfig) -> Option<Self> {
        let path = path.as_ref();
        let outcome = load_dataset_from_path(path)
            .and_then(|dataset| Self::new(renderer, dataset, config));
        match outcome {
            Ok(chart) => Some(chart),
            Err(err) => {
                error!(path = %path.display(), error = %err, "chart failed to initialize");
                None
            }
        }
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    #[must_use]
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    #[must_use]
    pub fn axis_state(&self) -> AxisState {
        self.state.axes()
    }

    #[must_use]
    pub fn x_scale(&self) -> LinearScale {
        self.state.x_scale()
    }

    #[must_use]
    pub fn y_scale(&self) -> LinearScale {
        self.state.y_scale()
    }

    #[must_use]
    pub fn scene(&self) -> &ChartScene {
        &self.scene
    }

    #[must_use]
    pub fn hover_state(&self) -> HoverState {
        self.hover
    }

    #[must_use]
    pub fn emphasis(&self, attribute: Attribute) -> Option<Emphasis> {
        self.scene.controls(attribute.axis()).emphasis(attribute)
    }

    #[must_use]
    pub fn tooltip_overlay(&self) -> Option<&TooltipOverlay> {
        self.scene.tooltip_overlay.as_ref()
    }

    /// Plot-local position of the marker for `record_index` at `now_ms`.
    #[must_use]
    pub fn marker_position(&self, record_index: usize, now_ms: f64) -> Option<(f64, f64)> {
        self.scene
            .markers
            .markers()
            .get(record_index)
            .map(|marker| marker.position_at(now_ms))
    }

    /// Plot-local position of the text label for `record_index` at `now_ms`.
    #[must_use]
    pub fn label_position(&self, record_index: usize, now_ms: f64) -> Option<(f64, f64)> {
        self.scene
            .labels
            .labels()
            .get(record_index)
            .map(|label| label.position_at(now_ms))
    }

    #[must_use]
    pub fn is_transitioning(&self, now_ms: f64) -> bool {
        self.scene.is_running(now_ms)
    }

    /// Handles a click on the label control carrying `value`.
    ///
    /// Returns whether the axis state changed. Unknown values are rejected
    /// without touching state.
    pub fn click_label(&mut self, value: &str, now_ms: f64) -> ChartResult<bool> {
        let event = SelectionEvent::from_control_value(value).inspect_err(|err| {
            warn!(value, error = %err, "ignoring click on unknown label control");
        })?;
        self.select(event, now_ms)
    }

    /// Runs one selection transition and applies its effects in order.
    pub fn select(&mut self, event: SelectionEvent, now_ms: f64) -> ChartResult<bool> {
        let (next, effects) = self.controller.transition(&self.state, event, &self.dataset);
        if effects.is_empty() {
            return Ok(false);
        }
        self.state = next;
        let timing = TransitionTiming::new(now_ms, self.config.transition_duration_ms);
        for effect in effects {
            self.apply_effect(effect, timing)?;
        }
        Ok(true)
    }

    fn apply_effect(&mut self, effect: SideEffect, timing: TransitionTiming) -> ChartResult<()> {
        trace!(?effect, "apply effect");
        match effect {
            SideEffect::RenderAxis { axis, scale } => {
                render_axis(self.scene.axis_group_mut(axis), scale, timing);
            }
            SideEffect::RenderMarkers(projection) => {
                render_markers(&mut self.scene.markers, &self.dataset, &projection, timing)?;
            }
            SideEffect::RenderLabels(projection) => {
                render_labels(&mut self.scene.labels, &self.dataset, &projection, timing)?;
            }
            SideEffect::BindTooltip { x, y } => {
                bind_tooltip(x, y, &mut self.scene.markers);
                self.refresh_tooltip_overlay();
            }
            SideEffect::SetEmphasis { axis, active } => {
                self.scene.controls_mut(axis).set_active(active);
            }
        }
        Ok(())
    }

    /// Pointer entered the marker of `record_index` at canvas point (`x`, `y`).
    pub fn hover_enter(&mut self, record_index: usize, x: f64, y: f64) -> ChartResult<()> {
        if record_index >= self.dataset.len() {
            return Err(ChartError::InvalidData(format!(
                "no marker for record index {record_index}"
            )));
        }
        self.hover.on_marker_enter(record_index, x, y);
        self.refresh_tooltip_overlay();
        debug!(record_index, x, y, "hover enter");
        Ok(())
    }

    /// Pointer left the hovered marker; the overlay is hidden.
    pub fn hover_exit(&mut self) {
        self.hover.on_marker_exit();
        match self.scene.markers.tooltip() {
            Some(binding) => binding.on_hover_exit(&mut self.scene.tooltip_overlay),
            None => self.scene.tooltip_overlay = None,
        }
        debug!("hover exit");
    }

    fn refresh_tooltip_overlay(&mut self) {
        let Some(record_index) = self.hover.hovered() else {
            return;
        };
        let overlay = self
            .scene
            .markers
            .tooltip()
            .zip(self.dataset.get(record_index))
            .map(|(binding, record)| {
                binding.on_hover_enter(
                    record_index,
                    record,
                    self.hover.pointer(),
                    self.config.tooltip,
                )
            });
        self.scene.tooltip_overlay = overlay;
    }

    #[must_use]
    pub fn build_frame(&self, now_ms: f64) -> RenderFrame {
        build_frame(&self.config, &self.scene, now_ms)
    }

    pub fn render(&mut self, now_ms: f64) -> ChartResult<()> {
        let frame = self.build_frame(now_ms);
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
