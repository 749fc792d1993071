//! The shared alignment pipeline.
//!
//! One operation resolves the guide stroke once, plans the new value of
//! every selected point, and only then writes anything back. A failure at
//! any step before the write leaves the entity untouched.

use crate::annotation::AnnotationContext;
use crate::blend::{Influence, blend};
use crate::entities::{Alignable, StrokeSpace};
use crate::error::{AlignError, AlignResult};
use crate::interpolate::snap_to_stroke;
use crate::prefs::AlignPreferences;
use crate::projector::{IdentityProjector, ScreenProjector};
use crate::stroke::Stroke;
use glam::{DMat4, DVec3};
use kurbo::Point;

/// Per-point alignment against one stroke.
///
/// Every call is independent of every other; the solver holds no mutable
/// state.
pub struct Solver<'a> {
    stroke: &'a Stroke,
    projector: &'a dyn ScreenProjector,
    influence: Influence,
}

impl<'a> Solver<'a> {
    pub fn new(stroke: &'a Stroke, projector: &'a dyn ScreenProjector, influence: Influence) -> Self {
        Self {
            stroke,
            projector,
            influence,
        }
    }

    pub fn influence(&self) -> Influence {
        self.influence
    }

    /// Align a point that already lives in stroke space, blended.
    pub fn solve_planar(&self, point: Point) -> Point {
        blend(point, snap_to_stroke(point, self.stroke), self.influence)
    }

    /// Fully aligned world position of `world`, unblended.
    pub fn target_world(&self, world: DVec3) -> AlignResult<DVec3> {
        let screen = self.projector.project(world).ok_or(AlignError::ProjectionFailed)?;
        let snapped = snap_to_stroke(screen, self.stroke);
        self.projector
            .unproject(snapped, world)
            .ok_or(AlignError::ProjectionFailed)
    }

    /// Align a world-space point, blended.
    pub fn solve_world(&self, world: DVec3) -> AlignResult<DVec3> {
        Ok(blend(world, self.target_world(world)?, self.influence))
    }

    /// Fully aligned local position of `local` under `matrix_world`, unblended.
    pub fn target_local(&self, local: DVec3, matrix_world: DMat4) -> AlignResult<DVec3> {
        let aligned = self.target_world(matrix_world.transform_point3(local))?;
        let back = matrix_world.inverse().transform_point3(aligned);
        if !back.is_finite() {
            return Err(AlignError::ProjectionFailed);
        }
        Ok(back)
    }

    /// Align an object-local point, blended in local space.
    pub fn solve_local(&self, local: DVec3, matrix_world: DMat4) -> AlignResult<DVec3> {
        Ok(blend(local, self.target_local(local, matrix_world)?, self.influence))
    }
}

/// How an alignment operation ended.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignOutcome {
    /// Points were written back.
    Finished {
        moved: usize,
        /// Whether the guide stroke was removed afterwards.
        consumed: bool,
    },
    /// Nothing to do in this context; nothing was changed.
    NotApplicable(AlignError),
    /// The selection cannot be aligned; nothing was changed.
    Cancelled(AlignError),
}

impl AlignOutcome {
    pub fn is_finished(&self) -> bool {
        matches!(self, AlignOutcome::Finished { .. })
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AlignOutcome::Cancelled(_))
    }

    /// Number of points moved (0 unless finished).
    pub fn moved(&self) -> usize {
        match self {
            AlignOutcome::Finished { moved, .. } => *moved,
            _ => 0,
        }
    }
}

/// Align the selection of `target` to the most recent annotation stroke.
///
/// `projector` is the active 3D viewport, if any; UV targets do not need one.
pub fn align<A: Alignable>(
    target: &mut A,
    annotations: &mut AnnotationContext<'_>,
    projector: Option<&dyn ScreenProjector>,
    influence: Influence,
    preferences: &AlignPreferences,
) -> AlignOutcome {
    let kind = target.kind();
    match try_align(target, annotations, projector, influence, preferences) {
        Ok((moved, consumed)) => {
            log::info!("Aligned {} {} (influence {:.2})", moved, kind, influence.value());
            AlignOutcome::Finished { moved, consumed }
        }
        Err(err) if err.is_cancellation() => {
            log::warn!("Cancelled aligning {}: {}", kind, err);
            AlignOutcome::Cancelled(err)
        }
        Err(err) => {
            log::info!("Not aligning {}: {}", kind, err);
            AlignOutcome::NotApplicable(err)
        }
    }
}

fn try_align<A: Alignable>(
    target: &mut A,
    annotations: &mut AnnotationContext<'_>,
    projector: Option<&dyn ScreenProjector>,
    influence: Influence,
    preferences: &AlignPreferences,
) -> AlignResult<(usize, bool)> {
    if target.selected_count() == 0 {
        return Err(AlignError::NoSelection);
    }
    target.validate()?;

    let projector: &dyn ScreenProjector = match target.space() {
        StrokeSpace::Uv => &IdentityProjector,
        StrokeSpace::Viewport => projector.ok_or(AlignError::NoViewport)?,
    };

    let (origin, stroke) = {
        let (origin, annotation) = annotations.latest().ok_or(AlignError::NoStroke)?;
        (origin, annotation.to_stroke(projector)?)
    };
    log::debug!("Resolved {:?} stroke with {} points", origin, stroke.len());

    let solver = Solver::new(&stroke, projector, influence);
    let plan = target.plan(&solver)?;
    let moved = target.apply(plan);

    let consumed = preferences.clear_strokes && annotations.consume_latest(origin);
    Ok((moved, consumed))
}
