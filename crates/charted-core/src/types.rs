// File: crates/charted-core/src/types.rs
// Summary: Shared plot layout types (margins and plot size).

/// Plot margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(0.0, 4.0, 4.0, 0.0)
    }
}

/// Size of the plot element a chart draws into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl PlotGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, insets: Insets::default() }
    }

    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Horizontal space available to columns.
    pub fn plot_width(&self) -> f64 {
        self.width - self.insets.hsum()
    }
}

/// Pointer position relative to the plot element's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
