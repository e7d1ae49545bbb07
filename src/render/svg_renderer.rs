use std::fmt::Write as _;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, FontWeight, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive,
};

/// Renders frames into a standalone SVG document kept in memory.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.document = render_svg(frame).map_err(|e| {
            ChartError::Serialization(format!("failed to write svg markup: {e}"))
        })?;
        Ok(())
    }
}

fn render_svg(frame: &RenderFrame) -> Result<String, std::fmt::Error> {
    let width = frame.viewport.width;
    let height = frame.viewport.height;
    let mut svg = String::new();
    writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">"
    )?;
    for line in &frame.lines {
        write_line(&mut svg, line)?;
    }
    for circle in &frame.circles {
        write_circle(&mut svg, circle)?;
    }
    for text in &frame.texts {
        write_text(&mut svg, text)?;
    }
    for rect in &frame.rects {
        write_rect(&mut svg, rect)?;
    }
    for text in &frame.overlay_texts {
        write_text(&mut svg, text)?;
    }
    svg.push_str("</svg>\n");
    Ok(svg)
}

fn write_line(svg: &mut String, line: &LinePrimitive) -> std::fmt::Result {
    writeln!(
        svg,
        "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\"/>",
        line.x1,
        line.y1,
        line.x2,
        line.y2,
        line.color.to_hex(),
        line.color.alpha,
        line.stroke_width
    )
}

fn write_circle(svg: &mut String, circle: &CirclePrimitive) -> std::fmt::Result {
    writeln!(
        svg,
        "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{}\" fill=\"{}\" opacity=\"{}\"/>",
        circle.cx,
        circle.cy,
        circle.radius,
        circle.fill.to_hex(),
        circle.fill.alpha
    )
}

fn write_rect(svg: &mut String, rect: &RectPrimitive) -> std::fmt::Result {
    writeln!(
        svg,
        "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        rect.corner_radius,
        rect.fill.to_hex(),
        rect.fill.alpha
    )
}

fn write_text(svg: &mut String, text: &TextPrimitive) -> std::fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let weight = match text.weight {
        FontWeight::Lighter => "lighter",
        FontWeight::Normal => "normal",
        FontWeight::Bold => "bold",
    };
    write!(
        svg,
        "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}px\" font-weight=\"{weight}\" text-anchor=\"{anchor}\" fill=\"{}\"",
        text.x,
        text.y,
        text.font_size_px,
        text.color.to_hex()
    )?;
    if text.rotation_deg != 0.0 {
        write!(
            svg,
            " transform=\"rotate({} {:.2} {:.2})\"",
            text.rotation_deg, text.x, text.y
        )?;
    }
    writeln!(svg, ">{}</text>", escape_xml(&text.text))
}

fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Viewport;
    use crate::render::Color;

    #[test]
    fn text_is_escaped_and_rotation_emitted() {
        let frame = RenderFrame::new(Viewport::new(100, 50)).with_text(
            TextPrimitive::new(
                "Income <$>",
                -25.0,
                -40.0,
                12.0,
                Color::rgb(0.0, 0.0, 0.0),
                TextHAlign::Center,
            )
            .with_rotation(-90.0),
        );
        let mut renderer = SvgRenderer::new();
        renderer.render(&frame).expect("render");
        let document = renderer.document();
        assert!(document.starts_with("<svg"));
        assert!(document.contains("Income &lt;$&gt;"));
        assert!(document.contains("transform=\"rotate(-90 -25.00 -40.00)\""));
        assert!(document.trim_end().ends_with("</svg>"));
    }
}
