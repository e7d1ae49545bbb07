use serde::{Deserialize, Serialize};

/// Logical canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plotting area for axes and label controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        [self.top, self.right, self.bottom, self.left]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(20.0, 40.0, 80.0, 100.0)
    }
}

/// Usable plotting rectangle after margins are removed.
///
/// `origin_x`/`origin_y` are canvas coordinates of the plot's top-left corner;
/// everything inside the plot is expressed relative to that origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn from_viewport(viewport: Viewport, margins: Margins) -> Self {
        Self {
            origin_x: margins.left,
            origin_y: margins.top,
            width: f64::from(viewport.width) - margins.left - margins.right,
            height: f64::from(viewport.height) - margins.top - margins.bottom,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Pixel range of the horizontal axis, left to right.
    #[must_use]
    pub fn x_range(self) -> (f64, f64) {
        (0.0, self.width)
    }

    /// Pixel range of the vertical axis, top to bottom.
    #[must_use]
    pub fn y_range(self) -> (f64, f64) {
        (0.0, self.height)
    }

    #[must_use]
    pub fn to_canvas(self, x: f64, y: f64) -> (f64, f64) {
        (self.origin_x + x, self.origin_y + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_canvas_leaves_610_by_400_plot() {
        let plot = PlotArea::from_viewport(Viewport::new(750, 500), Margins::default());
        assert_eq!(plot.width, 610.0);
        assert_eq!(plot.height, 400.0);
        assert_eq!(plot.to_canvas(0.0, 0.0), (100.0, 20.0));
    }
}
