//! Object origins in object mode.

use super::{Alignable, EntityKind};
use crate::align::Solver;
use crate::error::AlignResult;
use glam::DVec3;

/// Anything with a world-space origin that can be selected.
pub trait Origin {
    fn location(&self) -> DVec3;
    fn set_location(&mut self, location: DVec3);
    fn is_selected(&self) -> bool;
}

/// Aligns the origins of selected objects.
///
/// Each origin is its own depth reference.
#[derive(Debug)]
pub struct ObjectAdapter<'a, T: Origin> {
    pub objects: &'a mut [T],
}

impl<'a, T: Origin> ObjectAdapter<'a, T> {
    pub fn new(objects: &'a mut [T]) -> Self {
        Self { objects }
    }
}

impl<T: Origin> Alignable for ObjectAdapter<'_, T> {
    type Plan = Vec<(usize, DVec3)>;

    fn kind(&self) -> EntityKind {
        EntityKind::Object
    }

    fn selected_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_selected()).count()
    }

    fn plan(&self, solver: &Solver<'_>) -> AlignResult<Self::Plan> {
        self.objects
            .iter()
            .enumerate()
            .filter(|(_, object)| object.is_selected())
            .map(|(i, object)| solver.solve_world(object.location()).map(|location| (i, location)))
            .collect()
    }

    fn apply(&mut self, plan: Self::Plan) -> usize {
        let moved = plan.len();
        for (index, location) in plan {
            self.objects[index].set_location(location);
        }
        moved
    }
}
