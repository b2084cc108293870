//! Raw pointer coordinates to logical pixel space.
//!
//! Two independent distortions sit between a pointer event and logical
//! space: the surface may be displayed at a different size than its
//! pixel buffer, and the user may have panned/zoomed. This mapper
//! undoes the first and delegates the second to [`TransformTracker`].

use crate::geometry::{Point, Size};
use crate::transform::TransformTracker;

/// Converts raw pointer offsets (relative to the surface's displayed
/// top-left, in display pixels) into the surface's logical pixel space.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    /// Intrinsic pixel size of the surface's backing buffer.
    pub canvas: Size,
    /// Size the surface is currently displayed at.
    pub display: Size,
}

impl CoordinateMapper {
    pub fn new(canvas: Size, display: Size) -> Self {
        Self { canvas, display }
    }

    /// Undo the display scaling only; the result is in surface pixels,
    /// still under any active pan/zoom.
    pub fn to_surface(&self, x: f32, y: f32) -> Point {
        Point::new(
            undo_axis(x, self.display.width, self.canvas.width),
            undo_axis(y, self.display.height, self.canvas.height),
        )
    }

    /// Full mapping into logical space under the tracked pan/zoom.
    pub fn to_logical(&self, x: f32, y: f32, tracker: &TransformTracker) -> Point {
        let p = self.to_surface(x, y);
        tracker.to_logical(p.x, p.y)
    }
}

fn undo_axis(offset: f32, display: f32, canvas: f32) -> f32 {
    // A collapsed surface has no meaningful ratio; pass through.
    if display <= 0.0 || canvas <= 0.0 {
        return offset;
    }
    offset / (display / canvas)
}
