use tracing::trace;

use crate::core::{Axis, PlotArea};
use crate::render::{
    CirclePrimitive, Color, FontWeight, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::axis_ticks::axis_ticks;
use super::chart_config::ChartConfig;
use super::scene::{AxisGroup, ChartScene, Emphasis, LabelControlGroup};
use super::tooltip::TooltipOverlay;

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const AXIS_STROKE_WIDTH: f64 = 1.0;
const AXIS_TICK_SIZE_PX: f64 = 6.0;
const AXIS_TICK_PADDING_PX: f64 = 3.0;
const AXIS_FONT_PX: f64 = 10.0;

const CONTROL_FONT_PX: f64 = 14.0;
const CONTROL_ACTIVE_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const CONTROL_INACTIVE_COLOR: Color = Color::rgb(0.788, 0.788, 0.788);
/// Distance of the x control group below the plot.
const X_CONTROLS_OFFSET_PX: f64 = 20.0;
const CONTROL_SPACING_PX: f64 = 20.0;
/// Distance of the innermost y control left of the plot.
const Y_CONTROLS_OFFSET_PX: f64 = 40.0;

/// Approximate advance of one glyph relative to the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Materializes the scene as it looks at `now_ms`.
///
/// Markers and labels whose position is not finite (records with
/// non-numeric fields) are left out of the frame.
#[must_use]
pub fn build_frame(config: &ChartConfig, scene: &ChartScene, now_ms: f64) -> RenderFrame {
    let plot = config.plot_area();
    let mut frame = RenderFrame::new(config.viewport);

    push_axis(&mut frame, plot, &scene.x_axis, config.tick_count, now_ms);
    push_axis(&mut frame, plot, &scene.y_axis, config.tick_count, now_ms);

    let mut skipped = 0usize;
    for marker in scene.markers.markers() {
        let (x, y) = marker.position_at(now_ms);
        if !x.is_finite() || !y.is_finite() {
            skipped += 1;
            continue;
        }
        let (cx, cy) = plot.to_canvas(x, y);
        frame.circles.push(CirclePrimitive::new(
            cx,
            cy,
            config.marker_radius,
            config.marker_fill,
        ));
    }

    for label in scene.labels.labels() {
        let (x, y) = label.position_at(now_ms);
        if !x.is_finite() || !y.is_finite() || label.text.is_empty() {
            continue;
        }
        let (x, y) = plot.to_canvas(x, y);
        frame.texts.push(TextPrimitive::new(
            label.text.clone(),
            x,
            y,
            config.marker_label_font_px,
            config.marker_label_color,
            TextHAlign::Center,
        ));
    }

    push_controls(&mut frame, plot, &scene.x_controls);
    push_controls(&mut frame, plot, &scene.y_controls);

    if let Some(overlay) = &scene.tooltip_overlay {
        push_tooltip(&mut frame, config, overlay);
    }

    trace!(
        lines = frame.lines.len(),
        circles = frame.circles.len(),
        texts = frame.texts.len(),
        skipped_markers = skipped,
        now_ms,
        "built frame"
    );
    frame
}

fn push_axis(
    frame: &mut RenderFrame,
    plot: PlotArea,
    group: &AxisGroup,
    tick_count: usize,
    now_ms: f64,
) {
    let scale = group.scale_at(now_ms);
    let (range_start, range_end) = scale.range();

    match group.axis() {
        Axis::X => {
            let baseline = plot.height;
            push_plot_line(frame, plot, (range_start, baseline), (range_end, baseline));
            for tick in axis_ticks(scale, tick_count) {
                if !tick.position.is_finite() {
                    continue;
                }
                push_plot_line(
                    frame,
                    plot,
                    (tick.position, baseline),
                    (tick.position, baseline + AXIS_TICK_SIZE_PX),
                );
                let (x, y) = plot.to_canvas(
                    tick.position,
                    baseline + AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX + AXIS_FONT_PX * 0.71,
                );
                frame.texts.push(TextPrimitive::new(
                    tick.label,
                    x,
                    y,
                    AXIS_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
            }
        }
        Axis::Y => {
            push_plot_line(frame, plot, (0.0, range_start), (0.0, range_end));
            for tick in axis_ticks(scale, tick_count) {
                if !tick.position.is_finite() {
                    continue;
                }
                push_plot_line(
                    frame,
                    plot,
                    (-AXIS_TICK_SIZE_PX, tick.position),
                    (0.0, tick.position),
                );
                let (x, y) = plot.to_canvas(
                    -(AXIS_TICK_SIZE_PX + AXIS_TICK_PADDING_PX),
                    tick.position + AXIS_FONT_PX * 0.32,
                );
                frame.texts.push(TextPrimitive::new(
                    tick.label,
                    x,
                    y,
                    AXIS_FONT_PX,
                    AXIS_COLOR,
                    TextHAlign::Right,
                ));
            }
        }
    }
}

fn push_plot_line(frame: &mut RenderFrame, plot: PlotArea, from: (f64, f64), to: (f64, f64)) {
    if ![from.0, from.1, to.0, to.1].iter().all(|value| value.is_finite()) {
        return;
    }
    let (x1, y1) = plot.to_canvas(from.0, from.1);
    let (x2, y2) = plot.to_canvas(to.0, to.1);
    frame.lines.push(LinePrimitive::new(
        x1,
        y1,
        x2,
        y2,
        AXIS_STROKE_WIDTH,
        AXIS_COLOR,
    ));
}

fn push_controls(frame: &mut RenderFrame, plot: PlotArea, group: &LabelControlGroup) {
    for (slot, control) in group.controls().iter().enumerate() {
        let step = CONTROL_SPACING_PX * (slot as f64 + 1.0);
        let (weight, color) = match control.emphasis {
            Emphasis::Active => (FontWeight::Bold, CONTROL_ACTIVE_COLOR),
            Emphasis::Inactive => (FontWeight::Lighter, CONTROL_INACTIVE_COLOR),
        };
        let text = match group.axis() {
            Axis::X => {
                let (x, y) =
                    plot.to_canvas(plot.width / 2.0, plot.height + X_CONTROLS_OFFSET_PX + step);
                TextPrimitive::new(
                    control.text,
                    x,
                    y,
                    CONTROL_FONT_PX,
                    color,
                    TextHAlign::Center,
                )
            }
            Axis::Y => {
                let offset = Y_CONTROLS_OFFSET_PX + CONTROL_SPACING_PX * slot as f64;
                let (x, y) = plot.to_canvas(-offset, plot.height / 2.0);
                TextPrimitive::new(
                    control.text,
                    x,
                    y,
                    CONTROL_FONT_PX,
                    color,
                    TextHAlign::Center,
                )
                .with_rotation(-90.0)
            }
        };
        frame.texts.push(text.with_weight(weight));
    }
}

fn push_tooltip(frame: &mut RenderFrame, config: &ChartConfig, overlay: &TooltipOverlay) {
    let style = config.tooltip;
    if !overlay.x.is_finite() || !overlay.y.is_finite() {
        return;
    }
    let longest = overlay
        .lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest as f64 * style.font_size_px * GLYPH_WIDTH_RATIO + style.padding_px * 2.0;
    let height = overlay.lines.len() as f64 * style.line_height_px + style.padding_px * 2.0;

    frame.rects.push(
        RectPrimitive::new(overlay.x, overlay.y, width, height, style.background)
            .with_corner_radius(style.corner_radius),
    );
    for (index, line) in overlay.lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let baseline = overlay.y + style.padding_px + style.line_height_px * (index as f64 + 1.0)
            - (style.line_height_px - style.font_size_px);
        frame.overlay_texts.push(TextPrimitive::new(
            line.clone(),
            overlay.x + style.padding_px,
            baseline,
            style.font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}
