//! Pointer-driven interaction state machine.
//!
//! [`Annotator`] owns the annotation store and the tracked transform;
//! every pointer, wheel, and key command funnels through it. All
//! handlers run to completion before the next one, so hover state is
//! recomputed at the top of each move and never carried stale across a
//! geometry change.

use crate::annotation::{Annotation, AnnotationStore, Lifecycle};
use crate::color_utils::Color;
use crate::config::Config;
use crate::constants::threshold;
use crate::coords::CoordinateMapper;
use crate::error::ConfigError;
use crate::geometry::{Point, Rect, Size};
use crate::hit_test::{self, Handle};
use crate::render::{self, DrawSurface};
use crate::transform::{Matrix, TransformTracker};
use crate::zoom;

/// Cursor the host should display, derived from the current hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorIcon {
    #[default]
    Default,
    /// Over an annotation body.
    Move,
    /// Diagonal resize (top-left or bottom-right corner).
    NwseResize,
    /// Diagonal resize (top-right or bottom-left corner).
    NeswResize,
    /// Horizontal resize (left or right edge midpoint).
    EwResize,
    /// Vertical resize (top or bottom edge midpoint).
    NsResize,
}

/// The active gesture, carrying only the data that gesture needs.
///
/// Exactly one variant is active at a time; `Idle` is both the initial
/// state and the terminal state of every gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionState {
    Idle,
    /// Dragging the canvas. `anchor` is the logical point under the
    /// pointer at press time; each translate re-aligns the view so the
    /// anchor stays under the pointer.
    PanningCanvas { anchor: Point },
    /// Drawing a new annotation from `start` towards `current`. The
    /// store is untouched until the gesture finalizes.
    DrawingAnnotation { start: Point, current: Point },
    /// Translating an annotation rigidly. The offsets are the
    /// pointer-to-corner vectors captured at press.
    MovingAnnotation {
        index: usize,
        grab_start: Point,
        grab_end: Point,
    },
    /// Dragging one resize handle; the handle is fixed for the whole
    /// gesture even if the pointer leaves its hit zone.
    ResizingAnnotation { index: usize, handle: Handle },
}

type ChangeListener = Box<dyn FnMut()>;

/// The interactive annotation engine.
///
/// The host feeds it raw pointer offsets (relative to the surface's
/// displayed top-left), wheel steps, and the delete command, and reads
/// back the annotation collection, the cursor affordance, and redraws
/// through [`Annotator::render`].
pub struct Annotator {
    config: Config,
    store: AnnotationStore,
    tracker: TransformTracker,
    mapper: CoordinateMapper,
    state: InteractionState,
    hovered: Option<usize>,
    hovered_handle: Option<Handle>,
    cursor: CursorIcon,
    pressed: bool,
    /// Whether the pointer moved since the last press.
    dragged: bool,
    on_change: Option<ChangeListener>,
}

impl Annotator {
    /// Create an engine for a canvas of `canvas` intrinsic pixels shown
    /// at `display` size. Fails when the config's colors or fill
    /// transparency do not parse.
    pub fn new(config: Config, canvas: Size, display: Size) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut tracker = TransformTracker::new();
        if config.initial_zoom != 1.0 {
            tracker.scale(config.initial_zoom, config.initial_zoom);
        }
        Ok(Self {
            config,
            store: AnnotationStore::new(),
            tracker,
            mapper: CoordinateMapper::new(canvas, display),
            state: InteractionState::Idle,
            hovered: None,
            hovered_handle: None,
            cursor: CursorIcon::Default,
            pressed: false,
            dragged: false,
            on_change: None,
        })
    }

    /// The live, ordered annotation collection.
    pub fn annotations(&self) -> &AnnotationStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current gesture state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Cursor the host should display.
    pub fn cursor(&self) -> CursorIcon {
        self.cursor
    }

    /// The currently composed view transform.
    pub fn transform(&self) -> Matrix {
        self.tracker.matrix()
    }

    /// Index of the annotation under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Register the callback invoked after every create/edit/delete
    /// mutation. It carries no payload; the host re-reads the collection.
    pub fn set_on_change(&mut self, listener: impl FnMut() + 'static) {
        self.on_change = Some(Box::new(listener));
    }

    /// Update the size the surface is currently displayed at.
    pub fn set_display_size(&mut self, display: Size) {
        self.mapper.display = display;
    }

    /// Update the surface's intrinsic pixel size.
    pub fn set_canvas_size(&mut self, canvas: Size) {
        self.mapper.canvas = canvas;
    }

    /// Change the category stamped onto subsequently drawn annotations.
    /// Passing `None` disables drawing.
    pub fn set_active_category(
        &mut self,
        name: Option<String>,
        id: u32,
        color: String,
    ) -> Result<(), ConfigError> {
        Color::from_hex(&color)?;
        self.config.active_category = name;
        self.config.active_category_id = id;
        self.config.active_color = color;
        Ok(())
    }

    /// Set the host-assigned identifier on one annotation.
    pub fn set_external_id(&mut self, index: usize, id: impl Into<String>) -> bool {
        self.store.set_external_id(index, id)
    }

    /// Remove every annotation and reset hover/gesture state.
    pub fn clear_all(&mut self) {
        self.store.clear();
        self.hovered = None;
        self.hovered_handle = None;
        self.cursor = CursorIcon::Default;
        self.state = InteractionState::Idle;
        self.emit_change();
    }

    /// Restore the identity view transform.
    pub fn reset_view(&mut self) {
        self.tracker.reset();
    }

    /// Primary-button press. `modifier` is the pan/zoom-out modifier key.
    pub fn pointer_pressed(&mut self, x: f32, y: f32, modifier: bool) {
        let p = self.to_logical(x, y);
        self.pressed = true;
        self.dragged = false;

        let resizing = matches!(self.state, InteractionState::ResizingAnnotation { .. });
        self.state = if modifier && !resizing {
            InteractionState::PanningCanvas { anchor: p }
        } else if let Some(index) = self.hovered {
            match (self.hovered_handle, self.store.get(index)) {
                (Some(handle), Some(_)) => InteractionState::ResizingAnnotation { index, handle },
                (None, Some(ann)) => InteractionState::MovingAnnotation {
                    index,
                    grab_start: Point::new(p.x - ann.start.x, p.y - ann.start.y),
                    grab_end: Point::new(p.x - ann.end.x, p.y - ann.end.y),
                },
                // Hover index went stale; treat as empty canvas.
                (_, None) => InteractionState::Idle,
            }
        } else if self.config.active_category.is_some() {
            InteractionState::DrawingAnnotation {
                start: p,
                current: p,
            }
        } else {
            InteractionState::Idle
        };
        log::debug!("pointer press at ({:.1}, {:.1}) -> {:?}", p.x, p.y, self.state);
    }

    /// Pointer motion, pressed or not.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let p = self.to_logical(x, y);

        // Hover tracking pauses during a resize so the active handle
        // stays fixed for the whole gesture.
        if !matches!(self.state, InteractionState::ResizingAnnotation { .. }) {
            self.refresh_hover(p);
        }
        if self.pressed {
            self.dragged = true;
        }

        match self.state {
            InteractionState::Idle => {}
            InteractionState::PanningCanvas { anchor } => {
                // After this translate the device point maps back to the
                // anchor, so the anchor never needs updating.
                self.tracker.translate(p.x - anchor.x, p.y - anchor.y);
            }
            InteractionState::DrawingAnnotation { start, .. } => {
                self.state = InteractionState::DrawingAnnotation { start, current: p };
            }
            InteractionState::MovingAnnotation {
                index,
                grab_start,
                grab_end,
            } => self.move_annotation(index, p, grab_start, grab_end),
            InteractionState::ResizingAnnotation { index, handle } => {
                self.resize_annotation(index, handle, p);
            }
        }
    }

    /// Primary-button release. A release with no intervening motion is a
    /// one-step zoom: in normally, out when `modifier` is held.
    pub fn pointer_released(&mut self, x: f32, y: f32, modifier: bool) {
        let p = self.to_logical(x, y);

        if self.pressed && !self.dragged {
            let clicks = if modifier { -1.0 } else { 1.0 };
            zoom::zoom_at(&mut self.tracker, clicks, p);
        }

        if let InteractionState::DrawingAnnotation { start, .. } = self.state {
            self.finish_drawing(start, p);
        }

        self.pressed = false;
        self.dragged = false;
        self.state = InteractionState::Idle;
        self.emit_change();
    }

    /// Wheel zoom. `clicks` is the signed step count supplied by the
    /// host (positive = zoom in), anchored at the pointer position.
    pub fn wheel(&mut self, x: f32, y: f32, clicks: f32) {
        if clicks == 0.0 {
            return;
        }
        let anchor = self.to_logical(x, y);
        zoom::zoom_at(&mut self.tracker, clicks, anchor);
    }

    /// Delete command: flags the hovered annotation as deleted. Works
    /// from any gesture state and does not change it.
    pub fn delete_hovered(&mut self) {
        let Some(index) = self.hovered else {
            return;
        };
        let Some(ann) = self.store.get_mut(index) else {
            return;
        };
        if ann.is_deleted() {
            return;
        }
        ann.lifecycle = Lifecycle::Deleted;
        ann.selected = false;
        self.hovered = None;
        self.hovered_handle = None;
        self.cursor = CursorIcon::Default;
        log::debug!("annotation {index} flagged deleted");
        self.emit_change();
    }

    /// Redraw the scene onto the host's surface.
    pub fn render(&self, surface: &mut dyn DrawSurface) {
        let preview = match self.state {
            InteractionState::DrawingAnnotation { start, current } => Some((start, current)),
            _ => None,
        };
        render::draw(
            surface,
            &self.store,
            &self.tracker,
            &self.config,
            self.mapper.canvas,
            self.hovered_handle,
            preview,
        );
    }

    fn to_logical(&self, x: f32, y: f32) -> Point {
        self.mapper.to_logical(x, y, &self.tracker)
    }

    fn emit_change(&mut self) {
        if let Some(listener) = self.on_change.as_mut() {
            listener();
        }
    }

    /// Recompute the hovered annotation and handle, apply the selection
    /// flags, and derive the cursor affordance.
    fn refresh_hover(&mut self, p: Point) {
        self.hovered = hit_test::annotation_at(&self.store, p, self.config.hover_threshold);
        self.store.select_only(self.hovered);
        self.hovered_handle = self
            .hovered
            .and_then(|i| self.store.get(i))
            .and_then(|ann| hit_test::handle_at(ann, p, self.config.handle_size));

        self.cursor = match (self.hovered, self.hovered_handle) {
            (Some(_), Some(handle)) => match handle {
                Handle::TopLeft | Handle::BottomRight => CursorIcon::NwseResize,
                Handle::TopRight | Handle::BottomLeft => CursorIcon::NeswResize,
                Handle::LeftMiddle | Handle::RightMiddle => CursorIcon::EwResize,
                Handle::TopMiddle | Handle::BottomMiddle => CursorIcon::NsResize,
            },
            (Some(_), None) => CursorIcon::Move,
            _ => CursorIcon::Default,
        };
    }

    fn move_annotation(&mut self, index: usize, p: Point, grab_start: Point, grab_end: Point) {
        let canvas = self.mapper.canvas;
        let Some(ann) = self.store.get_mut(index) else {
            return;
        };

        let start = Point::new(p.x - grab_start.x, p.y - grab_start.y);
        let end = Point::new(p.x - grab_end.x, p.y - grab_end.y);

        // Clamp the translation rather than each corner so the rectangle
        // stays rigid when it hits a canvas edge.
        let dx = shift_into_bounds(start.x.min(end.x), start.x.max(end.x), canvas.width);
        let dy = shift_into_bounds(start.y.min(end.y), start.y.max(end.y), canvas.height);

        ann.start = Point::new(start.x + dx, start.y + dy);
        ann.end = Point::new(end.x + dx, end.y + dy);
        ann.mark_edited();
    }

    fn resize_annotation(&mut self, index: usize, handle: Handle, p: Point) {
        let canvas = self.mapper.canvas;
        let Some(ann) = self.store.get_mut(index) else {
            return;
        };
        let px = p.x.clamp(0.0, canvas.width);
        let py = p.y.clamp(0.0, canvas.height);

        // Only the coordinates the handle owns change. Corners are left
        // as dragged even when they cross the opposite side; bounds()
        // re-normalizes wherever a true box is needed.
        match handle {
            Handle::TopLeft => {
                ann.start.x = px;
                ann.start.y = py;
            }
            Handle::TopRight => {
                ann.end.x = px;
                ann.start.y = py;
            }
            Handle::BottomLeft => {
                ann.start.x = px;
                ann.end.y = py;
            }
            Handle::BottomRight => {
                ann.end.x = px;
                ann.end.y = py;
            }
            Handle::TopMiddle => ann.start.y = py,
            Handle::BottomMiddle => ann.end.y = py,
            Handle::LeftMiddle => ann.start.x = px,
            Handle::RightMiddle => ann.end.x = px,
        }
        ann.mark_edited();
    }

    fn finish_drawing(&mut self, start: Point, release: Point) {
        let canvas = self.mapper.canvas;
        let rect = Rect::from_corners(start, release);

        let min_width = canvas.width * threshold::MIN_SIDE_FRACTION;
        let min_height = canvas.height * threshold::MIN_SIDE_FRACTION;
        if rect.width < min_width || rect.height < min_height {
            log::debug!(
                "discarding draw gesture below minimum size: {:.1}x{:.1}",
                rect.width,
                rect.height
            );
            return;
        }

        let Some(name) = self.config.active_category.clone() else {
            return;
        };

        let start = Point::new(rect.x, rect.y).clamped(canvas);
        let end = Point::new(rect.x + rect.width, rect.y + rect.height).clamped(canvas);

        let annotation = Annotation {
            start,
            end,
            start_relative: Point::new(start.x / canvas.width, start.y / canvas.height),
            end_relative: Point::new(end.x / canvas.width, end.y / canvas.height),
            name,
            class_id: self.config.active_category_id,
            color: self.config.active_color.clone(),
            lifecycle: Lifecycle::Unsaved,
            external_id: None,
            selected: false,
        };
        log::debug!(
            "new annotation '{}' at ({:.0}, {:.0})-({:.0}, {:.0})",
            annotation.name,
            start.x,
            start.y,
            end.x,
            end.y
        );
        self.store.push(annotation);
    }
}

/// Shift needed to bring the span `[min, max]` inside `[0, limit]`,
/// favoring the low edge when the span is larger than the limit.
fn shift_into_bounds(min: f32, max: f32, limit: f32) -> f32 {
    if min < 0.0 {
        -min
    } else if max > limit {
        limit - max
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size {
        width: 800.0,
        height: 600.0,
    };

    fn annotator() -> Annotator {
        let config = Config {
            active_category: Some("Car".to_string()),
            active_category_id: 1,
            active_color: "#FF0000".to_string(),
            ..Config::default()
        };
        Annotator::new(config, CANVAS, CANVAS).unwrap()
    }

    fn draw_box(engine: &mut Annotator, from: Point, to: Point) {
        engine.pointer_pressed(from.x, from.y, false);
        engine.pointer_moved(to.x, to.y);
        engine.pointer_released(to.x, to.y, false);
    }

    #[test]
    fn test_press_priority_modifier_pans() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        // Modifier wins even over a hovered annotation.
        engine.pointer_moved(150.0, 150.0);
        assert!(engine.hovered().is_some());
        engine.pointer_pressed(150.0, 150.0, true);
        assert!(matches!(
            engine.state(),
            InteractionState::PanningCanvas { .. }
        ));
        engine.pointer_released(150.0, 150.0, true);
    }

    #[test]
    fn test_press_on_empty_canvas_starts_drawing() {
        let mut engine = annotator();
        engine.pointer_pressed(50.0, 50.0, false);
        assert!(matches!(
            engine.state(),
            InteractionState::DrawingAnnotation { .. }
        ));
    }

    #[test]
    fn test_press_without_category_stays_idle() {
        let config = Config::default();
        let mut engine = Annotator::new(config, CANVAS, CANVAS).unwrap();
        engine.pointer_pressed(50.0, 50.0, false);
        assert_eq!(engine.state(), InteractionState::Idle);
    }

    #[test]
    fn test_draw_gesture_appends_unsaved_annotation() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        assert_eq!(engine.annotations().len(), 1);
        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.start, Point::new(100.0, 100.0));
        assert_eq!(ann.end, Point::new(300.0, 250.0));
        assert_eq!(ann.lifecycle, Lifecycle::Unsaved);
        assert_eq!(ann.name, "Car");
        assert_eq!(ann.class_id, 1);
        assert!(ann.external_id.is_none());
    }

    #[test]
    fn test_draw_gesture_normalizes_corners() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(300.0, 250.0), Point::new(100.0, 100.0));

        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.start, Point::new(100.0, 100.0));
        assert_eq!(ann.end, Point::new(300.0, 250.0));
    }

    #[test]
    fn test_tiny_draw_gesture_discarded() {
        let mut engine = annotator();
        // 1% of 800x600 is 8x6; a 5x4 drag is below threshold.
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(105.0, 104.0));
        assert_eq!(engine.annotations().len(), 0);
    }

    #[test]
    fn test_move_preserves_size_and_marks_edited() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(200.0, 175.0);
        engine.pointer_pressed(200.0, 175.0, false);
        assert!(matches!(
            engine.state(),
            InteractionState::MovingAnnotation { .. }
        ));
        engine.pointer_moved(250.0, 215.0);
        engine.pointer_released(250.0, 215.0, false);

        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.start, Point::new(150.0, 140.0));
        assert_eq!(ann.end, Point::new(350.0, 290.0));
        assert_eq!(ann.lifecycle, Lifecycle::Edited);
    }

    #[test]
    fn test_move_clamps_rigidly_at_canvas_edge() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(200.0, 175.0);
        engine.pointer_pressed(200.0, 175.0, false);
        // Drag far past the top-left corner.
        engine.pointer_moved(-500.0, -500.0);
        engine.pointer_released(-500.0, -500.0, false);

        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.start, Point::new(0.0, 0.0));
        // Width and height survive the clamp.
        assert_eq!(ann.end, Point::new(200.0, 150.0));
    }

    #[test]
    fn test_resize_bottom_right_moves_only_that_corner() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(300.0, 250.0);
        assert_eq!(
            engine.state(),
            InteractionState::Idle
        );
        engine.pointer_pressed(300.0, 250.0, false);
        assert!(matches!(
            engine.state(),
            InteractionState::ResizingAnnotation {
                handle: Handle::BottomRight,
                ..
            }
        ));
        engine.pointer_moved(350.0, 300.0);
        engine.pointer_released(350.0, 300.0, false);

        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.start, Point::new(100.0, 100.0));
        assert_eq!(ann.end, Point::new(350.0, 300.0));
        assert_eq!(ann.lifecycle, Lifecycle::Edited);
    }

    #[test]
    fn test_resize_edge_midpoint_moves_one_coordinate() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(300.0, 175.0); // right-middle handle
        engine.pointer_pressed(300.0, 175.0, false);
        engine.pointer_moved(320.0, 400.0);
        engine.pointer_released(320.0, 400.0, false);

        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.start, Point::new(100.0, 100.0));
        assert_eq!(ann.end, Point::new(320.0, 250.0));
    }

    #[test]
    fn test_resize_may_invert_corners_without_renormalizing() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(300.0, 175.0); // right-middle handle
        engine.pointer_pressed(300.0, 175.0, false);
        engine.pointer_moved(50.0, 175.0); // cross over the left edge
        engine.pointer_released(50.0, 175.0, false);

        let ann = engine.annotations().get(0).unwrap();
        assert!(ann.end.x < ann.start.x);
        assert_eq!(ann.bounds().x, 50.0);
    }

    #[test]
    fn test_relative_coords_not_refreshed_on_edit() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));
        let before = engine.annotations().get(0).unwrap().start_relative;

        engine.pointer_moved(200.0, 175.0);
        engine.pointer_pressed(200.0, 175.0, false);
        engine.pointer_moved(260.0, 235.0);
        engine.pointer_released(260.0, 235.0, false);

        let ann = engine.annotations().get(0).unwrap();
        assert_ne!(ann.start, Point::new(100.0, 100.0));
        assert_eq!(ann.start_relative, before);
    }

    #[test]
    fn test_delete_flags_without_removing() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(200.0, 175.0);
        engine.delete_hovered();

        assert_eq!(engine.annotations().len(), 1);
        let ann = engine.annotations().get(0).unwrap();
        assert_eq!(ann.lifecycle, Lifecycle::Deleted);

        // Deleted annotations no longer hit-test.
        engine.pointer_moved(200.0, 175.0);
        assert!(engine.hovered().is_none());
        assert_eq!(engine.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_plain_click_zooms_in() {
        let mut engine = annotator();
        engine.pointer_pressed(400.0, 300.0, false);
        engine.pointer_released(400.0, 300.0, false);
        assert!((engine.transform().a - 1.1).abs() < 1e-4);
        // No annotation came out of the zero-size draw gesture.
        assert_eq!(engine.annotations().len(), 0);
    }

    #[test]
    fn test_modifier_click_zooms_out() {
        let mut engine = annotator();
        engine.pointer_pressed(400.0, 300.0, true);
        engine.pointer_released(400.0, 300.0, true);
        assert!((engine.transform().a - 1.0 / 1.1).abs() < 1e-4);
    }

    #[test]
    fn test_drag_release_does_not_zoom() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));
        assert!((engine.transform().a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_pan_keeps_anchor_under_pointer() {
        let mut engine = annotator();
        engine.pointer_pressed(400.0, 300.0, true);
        let anchor = match engine.state() {
            InteractionState::PanningCanvas { anchor } => anchor,
            other => panic!("expected pan, got {other:?}"),
        };
        engine.pointer_moved(500.0, 350.0);
        engine.pointer_moved(450.0, 320.0);

        // The logical point under the pressed device position tracks the
        // anchor through every pan step.
        let m = engine.transform();
        let device = m.apply(anchor);
        assert!((device.x - 450.0).abs() < 1e-2);
        assert!((device.y - 320.0).abs() < 1e-2);
        engine.pointer_released(450.0, 320.0, true);
    }

    #[test]
    fn test_cursor_affordances() {
        let mut engine = annotator();
        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

        engine.pointer_moved(100.0, 100.0);
        assert_eq!(engine.cursor(), CursorIcon::NwseResize);
        engine.pointer_moved(300.0, 100.0);
        assert_eq!(engine.cursor(), CursorIcon::NeswResize);
        engine.pointer_moved(200.0, 100.0);
        assert_eq!(engine.cursor(), CursorIcon::NsResize);
        engine.pointer_moved(100.0, 175.0);
        assert_eq!(engine.cursor(), CursorIcon::EwResize);
        engine.pointer_moved(200.0, 175.0);
        assert_eq!(engine.cursor(), CursorIcon::Move);
        engine.pointer_moved(600.0, 500.0);
        assert_eq!(engine.cursor(), CursorIcon::Default);
    }

    #[test]
    fn test_change_notification_on_mutations() {
        use std::cell::Cell;
        use std::rc::Rc;

        let mut engine = annotator();
        let count = Rc::new(Cell::new(0u32));
        let seen = Rc::clone(&count);
        engine.set_on_change(move || seen.set(seen.get() + 1));

        draw_box(&mut engine, Point::new(100.0, 100.0), Point::new(300.0, 250.0));
        let after_draw = count.get();
        assert!(after_draw >= 1);

        engine.pointer_moved(200.0, 175.0);
        engine.delete_hovered();
        assert_eq!(count.get(), after_draw + 1);

        engine.clear_all();
        assert_eq!(count.get(), after_draw + 2);
        assert!(engine.annotations().is_empty());
    }

    #[test]
    fn test_reset_view_restores_identity() {
        let mut engine = annotator();
        engine.wheel(400.0, 300.0, 2.0);
        assert!((engine.transform().a - 1.0).abs() > 1e-3);
        engine.reset_view();
        assert_eq!(engine.transform(), Matrix::IDENTITY);
    }

    #[test]
    fn test_initial_zoom_applied() {
        let config = Config {
            active_category: Some("Car".to_string()),
            initial_zoom: 2.0,
            ..Config::default()
        };
        let engine = Annotator::new(config, CANVAS, CANVAS).unwrap();
        assert!((engine.transform().a - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            active_color: "#XYZ".to_string(),
            ..Config::default()
        };
        assert!(Annotator::new(config, CANVAS, CANVAS).is_err());
    }
}
