//! rectmark - interactive rectangular-annotation engine for raster images.
//!
//! The host supplies a drawing surface, an active category, and a color;
//! the engine tracks pan/zoom through an owned transform shadow,
//! hit-tests annotations and their resize handles, runs the pointer
//! gesture state machine (pan / draw / move / resize), and hands back a
//! live ordered collection of annotation records with a change
//! notification on every mutation.

pub mod annotation;
pub mod color_utils;
pub mod config;
pub mod constants;
pub mod coords;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod render;
pub mod transform;
pub mod zoom;

pub use annotation::{Annotation, AnnotationStore, Lifecycle};
pub use color_utils::Color;
pub use config::Config;
pub use coords::CoordinateMapper;
pub use error::ConfigError;
pub use geometry::{Point, Rect, Size};
pub use hit_test::Handle;
pub use interaction::{Annotator, CursorIcon, InteractionState};
pub use render::DrawSurface;
pub use transform::{Matrix, TransformTracker};

#[cfg(test)]
mod tests;
