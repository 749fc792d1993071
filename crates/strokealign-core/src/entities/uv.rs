//! UV coordinates.

use super::{Alignable, EntityKind, StrokeSpace};
use crate::align::Solver;
use crate::error::AlignResult;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// One face-corner UV coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvLoop {
    pub uv: Point,
    pub select: bool,
}

/// A UV layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UvMap {
    pub name: String,
    pub loops: Vec<UvLoop>,
}

impl UvMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loops: Vec::new(),
        }
    }

    pub fn push(&mut self, uv: Point, select: bool) {
        self.loops.push(UvLoop { uv, select });
    }
}

/// Aligns selected UVs to a stroke drawn in the UV editor.
///
/// Stroke and UVs share the same 2D space, so nothing is projected.
#[derive(Debug)]
pub struct UvAdapter<'a> {
    pub uv_map: &'a mut UvMap,
}

impl<'a> UvAdapter<'a> {
    pub fn new(uv_map: &'a mut UvMap) -> Self {
        Self { uv_map }
    }
}

impl Alignable for UvAdapter<'_> {
    type Plan = Vec<(usize, Point)>;

    fn kind(&self) -> EntityKind {
        EntityKind::Uv
    }

    fn space(&self) -> StrokeSpace {
        StrokeSpace::Uv
    }

    fn selected_count(&self) -> usize {
        self.uv_map.loops.iter().filter(|l| l.select).count()
    }

    fn plan(&self, solver: &Solver<'_>) -> AlignResult<Self::Plan> {
        Ok(self
            .uv_map
            .loops
            .iter()
            .enumerate()
            .filter(|(_, l)| l.select)
            .map(|(i, l)| (i, solver.solve_planar(l.uv)))
            .collect())
    }

    fn apply(&mut self, plan: Self::Plan) -> usize {
        let moved = plan.len();
        for (index, uv) in plan {
            self.uv_map.loops[index].uv = uv;
        }
        moved
    }
}
