//! Entity data and the adapters that align them.
//!
//! Every adapter follows the same two phases: `plan` computes the new value
//! of every selected point without touching the entity, then `apply` writes
//! the whole plan back and refreshes derived data once.

mod armature;
mod curve;
mod mesh;
mod object;
mod uv;

pub use armature::{Armature, ArmatureAdapter, EditBone};
pub use curve::{BezierPoint, Curve, CurveAdapter, CurveUpdate, HandleType, PolyPoint, Spline};
pub use mesh::{Mesh, MeshAdapter, MeshVertex};
pub use object::{ObjectAdapter, Origin};
pub use uv::{UvAdapter, UvLoop, UvMap};

use crate::align::Solver;
use crate::error::AlignResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of entity that can be aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Mesh,
    Uv,
    Curve,
    Armature,
    Object,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Mesh => "mesh vertices",
            EntityKind::Uv => "UV vertices",
            EntityKind::Curve => "curve points",
            EntityKind::Armature => "bones",
            EntityKind::Object => "objects",
        };
        f.write_str(name)
    }
}

/// Space the guide stroke is read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeSpace {
    /// Projected through the 3D viewport.
    #[default]
    Viewport,
    /// Already in the entity's own 2D space.
    Uv,
}

/// An entity whose selected points can be aligned to a stroke.
pub trait Alignable {
    /// New values for every selected point.
    type Plan;

    fn kind(&self) -> EntityKind;

    fn space(&self) -> StrokeSpace {
        StrokeSpace::Viewport
    }

    /// Number of selected points (handles not counted separately).
    fn selected_count(&self) -> usize;

    /// Reject selections that cannot be aligned without breaking the entity.
    fn validate(&self) -> AlignResult<()> {
        Ok(())
    }

    /// Compute new values without mutating anything.
    fn plan(&self, solver: &Solver<'_>) -> AlignResult<Self::Plan>;

    /// Write a plan back. Returns the number of points moved.
    fn apply(&mut self, plan: Self::Plan) -> usize;
}
