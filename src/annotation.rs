//! Annotation records and their ordered store.
//!
//! Annotations are never destroyed: deletion is a lifecycle flag so a
//! host persistence layer can reconcile against records it has already
//! seen. Collection order is paint order and hit-test priority.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect};

/// Persistence lifecycle of an annotation within the host's workflow.
///
/// There is no saved state in-core; persistence belongs to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// Freshly drawn, not yet persisted by the host.
    Unsaved,
    /// Geometry changed by a move or resize gesture.
    Edited,
    /// Flagged for deletion; retained in the collection but excluded
    /// from hit-testing and rendering.
    Deleted,
}

/// A single axis-aligned rectangular annotation in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Top-left corner at creation time. A resize drag that crosses the
    /// opposite corner can invert the stored corners; [`Self::bounds`]
    /// re-normalizes, the stored values do not.
    pub start: Point,
    /// Bottom-right corner at creation time.
    pub end: Point,
    /// `start` as a fraction of the canvas pixel size at creation.
    /// Captured once; later edits do not refresh it.
    pub start_relative: Point,
    /// `end` as a fraction of the canvas pixel size at creation.
    pub end_relative: Point,
    /// Category label captured at creation.
    pub name: String,
    /// Numeric category identifier captured at creation.
    pub class_id: u32,
    /// Hex fill/outline color captured at creation.
    pub color: String,
    /// Where this annotation sits in the host's persistence workflow.
    pub lifecycle: Lifecycle,
    /// Identifier assigned by the host's persistence layer.
    pub external_id: Option<String>,
    /// Whether this annotation is the current hover target. Transient;
    /// recomputed after every hit test.
    #[serde(skip)]
    pub selected: bool,
}

impl Annotation {
    /// Bounding box with corners re-normalized.
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(self.start, self.end)
    }

    pub fn is_deleted(&self) -> bool {
        self.lifecycle == Lifecycle::Deleted
    }

    /// Record a geometry edit from a move or resize gesture.
    pub fn mark_edited(&mut self) {
        self.lifecycle = Lifecycle::Edited;
    }
}

/// Ordered collection of annotations for one canvas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an annotation; it becomes the topmost for hit-testing.
    pub fn push(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Annotation> {
        self.annotations.get_mut(index)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Annotation> {
        self.annotations.iter()
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Remove every annotation. Unlike the delete command, this empties
    /// the collection outright.
    pub fn clear(&mut self) {
        self.annotations.clear();
    }

    /// Mark `index` selected and every other annotation unselected.
    pub fn select_only(&mut self, index: Option<usize>) {
        for (i, ann) in self.annotations.iter_mut().enumerate() {
            ann.selected = Some(i) == index;
        }
    }

    /// Set the host-assigned identifier on one annotation. Returns
    /// whether the index was valid.
    pub fn set_external_id(&mut self, index: usize, id: impl Into<String>) -> bool {
        match self.annotations.get_mut(index) {
            Some(ann) => {
                ann.external_id = Some(id.into());
                true
            }
            None => false,
        }
    }

    /// Export annotations to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
