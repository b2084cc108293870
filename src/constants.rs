//! Engine constants for zoom bounds, hit thresholds, and render styling.
//!
//! This module centralizes the hardcoded values that the configuration
//! defaults and the geometry code share.

/// Zoom bounds and step factor.
pub mod zoom {
    /// Scale multiplier applied per zoom step.
    pub const BASE_FACTOR: f32 = 1.1;
    /// Lower scale bound (exclusive).
    pub const MIN: f32 = 0.2;
    /// Upper scale bound (exclusive).
    pub const MAX: f32 = 5.0;
}

/// Resize handle sizing. Handle sizes are in logical pixels and do not
/// scale with zoom.
pub mod handle {
    /// Side length of an unhovered handle square.
    pub const SIZE: f32 = 8.0;
    /// Side length of the handle square under the pointer.
    pub const SIZE_HOVERED: f32 = 12.0;
}

/// Hit-test and gesture thresholds.
pub mod threshold {
    /// Margin added to an annotation's bounds on all sides during hover
    /// detection, so near-misses at an edge still register.
    pub const HOVER: f32 = 6.0;
    /// Minimum annotation side length as a fraction of the canvas
    /// dimension; draw gestures below this are discarded.
    pub const MIN_SIDE_FRACTION: f32 = 0.01;
}

/// Render styling defaults.
pub mod render {
    /// Outline width for annotation rectangles.
    pub const STROKE_WIDTH: f32 = 2.0;
    /// Outline width for the live draw preview.
    pub const PREVIEW_STROKE_WIDTH: f32 = 1.5;
    /// Outline width around handle squares.
    pub const HANDLE_STROKE_WIDTH: f32 = 1.0;
    /// Gap between a label baseline and its annotation's top edge.
    pub const LABEL_OFFSET_Y: f32 = 5.0;
    /// Fill alpha used when the configured transparency fails to parse.
    pub const DEFAULT_FILL_ALPHA: f32 = 0.2;
}
