//! StrokeAlign Application
//!
//! Host integration layer: an in-memory scene, the alignment operators,
//! the double-click keymap and pointer input.

mod app;
mod input;
mod keymap;
mod operators;
mod scene;

pub use app::{App, AppConfig};
pub use input::{InputState, PointerEvent};
pub use keymap::{KeymapItem, KeymapRegistry};
pub use operators::OperatorKind;
pub use scene::{EditMode, Editor, ObjectData, Scene, SceneObject};
