//! Pointer-anchored zoom with clamped bounds.

use crate::constants::zoom::{BASE_FACTOR, MAX, MIN};
use crate::geometry::Point;
use crate::transform::TransformTracker;

/// Apply a zoom of `clicks` steps about `anchor`, a point in logical
/// space. Positive clicks zoom in.
///
/// The composition translate(anchor) / scale / translate(-anchor) keeps
/// the anchor fixed on screen. When the resulting scale would leave the
/// open interval (MIN, MAX) on either axis the request is a silent
/// no-op. Returns whether the transform changed.
pub fn zoom_at(tracker: &mut TransformTracker, clicks: f32, anchor: Point) -> bool {
    let factor = BASE_FACTOR.powf(clicks);
    let candidate_x = tracker.scale_x() * factor;
    let candidate_y = tracker.scale_y() * factor;
    let within = |scale: f32| scale > MIN && scale < MAX;
    if !within(candidate_x) || !within(candidate_y) {
        log::debug!(
            "zoom rejected: candidate scale ({candidate_x:.3}, {candidate_y:.3}) outside ({MIN}, {MAX})"
        );
        return false;
    }

    tracker.translate(anchor.x, anchor.y);
    tracker.scale(factor, factor);
    tracker.translate(-anchor.x, -anchor.y);
    log::debug!("zoom {clicks:+} -> scale ({candidate_x:.3}, {candidate_y:.3})");
    true
}
