//! Read-only renderer: background, annotations, selection handles.
//!
//! The renderer is a pure consumer of the store and the tracked
//! transform. Everything is drawn in logical coordinates; the surface
//! applies the matrix handed to [`DrawSurface::set_transform`].

use crate::annotation::AnnotationStore;
use crate::color_utils::Color;
use crate::config::Config;
use crate::constants::render as style;
use crate::geometry::{Point, Rect, Size};
use crate::hit_test::Handle;
use crate::transform::{Matrix, TransformTracker};

/// Drawing primitives the host's surface must provide.
///
/// The background raster is the host's: the engine only says where to
/// put it. All geometry arrives in logical coordinates under the
/// transform set by [`Self::set_transform`].
pub trait DrawSurface {
    /// Replace the surface's current transform.
    fn set_transform(&mut self, matrix: Matrix);
    /// Clear a rectangle back to the empty state.
    fn clear_rect(&mut self, rect: Rect);
    /// Draw the host-supplied background raster into `rect`.
    fn draw_background(&mut self, rect: Rect);
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outline a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    /// Draw text with its baseline starting at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: &str, color: Color);
}

/// Redraw the full scene onto `surface`.
///
/// Annotations are iterated in reverse collection order, skipping
/// deleted ones; the selected annotation gets its eight handles, with
/// the hovered handle drawn enlarged. `preview` is the in-progress draw
/// rectangle, rendered last as an outline.
#[allow(clippy::too_many_arguments)]
pub fn draw(
    surface: &mut dyn DrawSurface,
    store: &AnnotationStore,
    tracker: &TransformTracker,
    config: &Config,
    canvas: Size,
    hovered_handle: Option<Handle>,
    preview: Option<(Point, Point)>,
) {
    surface.set_transform(tracker.matrix());

    // Clear the logical viewport: inverse-map the device corners.
    let top_left = tracker.to_logical(0.0, 0.0);
    let bottom_right = tracker.to_logical(canvas.width, canvas.height);
    surface.clear_rect(Rect::from_corners(top_left, bottom_right));

    surface.draw_background(Rect::new(0.0, 0.0, canvas.width, canvas.height));

    // Config was validated at engine creation; the fallbacks keep this
    // path infallible if the host mutated it since.
    let fill_alpha = config.fill_alpha().unwrap_or(style::DEFAULT_FILL_ALPHA);
    let label_color = Color::from_hex(&config.label_fill_color).unwrap_or(Color::WHITE);

    for ann in store.iter().rev() {
        if ann.is_deleted() {
            continue;
        }
        let bounds = ann.bounds();
        let color = Color::from_hex(&ann.color).unwrap_or(Color::WHITE);

        surface.fill_rect(bounds, color.with_alpha(fill_alpha));
        surface.stroke_rect(bounds, color, style::STROKE_WIDTH);

        if config.show_annotation_labels {
            surface.fill_text(
                &ann.name,
                bounds.x,
                bounds.y - style::LABEL_OFFSET_Y,
                &config.label_font,
                label_color,
            );
        }

        if ann.selected {
            draw_handles(surface, bounds, color, hovered_handle, config);
        }
    }

    if let Some((start, current)) = preview {
        let color = Color::from_hex(&config.active_color).unwrap_or(Color::WHITE);
        surface.stroke_rect(
            Rect::from_corners(start, current),
            color,
            style::PREVIEW_STROKE_WIDTH,
        );
    }
}

fn draw_handles(
    surface: &mut dyn DrawSurface,
    bounds: Rect,
    color: Color,
    hovered: Option<Handle>,
    config: &Config,
) {
    for handle in Handle::ALL {
        let size = if hovered == Some(handle) {
            config.handle_size_hovered
        } else {
            config.handle_size
        };
        let anchor = handle.position(bounds);
        let half = size / 2.0;
        let square = Rect::new(anchor.x - half, anchor.y - half, size, size);
        surface.fill_rect(square, color.with_alpha(1.0));
        surface.stroke_rect(square, Color::WHITE, style::HANDLE_STROKE_WIDTH);
    }
}
