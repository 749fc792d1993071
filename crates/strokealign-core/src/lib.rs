//! StrokeAlign Core Library
//!
//! Platform-agnostic alignment of selected points to a freehand annotation
//! stroke: stroke interpolation, viewport projection, entity adapters and
//! the shared alignment pipeline.

pub mod align;
pub mod annotation;
pub mod blend;
pub mod entities;
pub mod error;
pub mod interpolate;
pub mod orientation;
pub mod prefs;
pub mod projector;
pub mod stroke;

pub use align::{AlignOutcome, Solver, align};
pub use annotation::{AnnotationContext, AnnotationData, AnnotationStroke, StrokeOrigin};
pub use blend::{Influence, blend};
pub use entities::{Alignable, EntityKind, StrokeSpace};
pub use error::{AlignError, AlignResult};
pub use interpolate::{Bracket, interpolate, map_range, nearest_segment, snap_to_stroke};
pub use orientation::{Orientation, classify};
pub use prefs::{AlignPreferences, Modifiers, MouseButton, TriggerChord};
pub use projector::{IdentityProjector, ScreenProjector, ViewportProjector};
pub use stroke::Stroke;
