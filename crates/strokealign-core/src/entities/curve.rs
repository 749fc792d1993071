//! Curve control points and bezier handles.

use super::{Alignable, EntityKind};
use crate::align::Solver;
use crate::blend::blend;
use crate::error::{AlignError, AlignResult};
use glam::{DMat4, DVec3, DVec4};
use serde::{Deserialize, Serialize};

/// Bezier handle behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HandleType {
    /// Handles move independently.
    Free,
    /// Handles stay collinear with the control point.
    Aligned,
    /// Handle points at the neighbouring control point.
    Vector,
    /// Handle is placed automatically for a smooth curve.
    #[default]
    Auto,
}

impl HandleType {
    /// Whether snapping this handle on its own keeps the handle's contract.
    pub fn allows_independent_snap(self) -> bool {
        matches!(self, HandleType::Vector | HandleType::Auto)
    }
}

/// A point of a poly or NURBS spline, in homogeneous coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolyPoint {
    pub co: DVec4,
    pub select: bool,
}

impl PolyPoint {
    pub fn new(co: DVec3) -> Self {
        Self {
            co: co.extend(1.0),
            select: false,
        }
    }
}

/// A bezier control point with its two handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierPoint {
    pub co: DVec3,
    pub handle_left: DVec3,
    pub handle_right: DVec3,
    pub handle_left_type: HandleType,
    pub handle_right_type: HandleType,
    pub select_control_point: bool,
}

impl BezierPoint {
    /// Control point with auto handles offset along X.
    pub fn new(co: DVec3) -> Self {
        Self {
            co,
            handle_left: co - DVec3::X,
            handle_right: co + DVec3::X,
            handle_left_type: HandleType::Auto,
            handle_right_type: HandleType::Auto,
            select_control_point: false,
        }
    }

    fn has_supported_handles(&self) -> bool {
        self.handle_left_type.allows_independent_snap() && self.handle_right_type.allows_independent_snap()
    }
}

/// One spline of a curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Spline {
    Poly(Vec<PolyPoint>),
    Bezier(Vec<BezierPoint>),
}

/// A curve made of any mix of poly and bezier splines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub splines: Vec<Spline>,
}

impl Curve {
    pub fn new() -> Self {
        Self::default()
    }

    fn selected_bezier(&self) -> impl Iterator<Item = &BezierPoint> + '_ {
        self.splines
            .iter()
            .filter_map(|spline| match spline {
                Spline::Bezier(points) => Some(points),
                Spline::Poly(_) => None,
            })
            .flatten()
            .filter(|p| p.select_control_point)
    }
}

/// New value for one curve point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveUpdate {
    Poly {
        spline: usize,
        index: usize,
        co: DVec4,
    },
    Bezier {
        spline: usize,
        index: usize,
        co: DVec3,
        handle_left: DVec3,
        handle_right: DVec3,
    },
}

/// Aligns selected points of a curve in edit mode.
#[derive(Debug)]
pub struct CurveAdapter<'a> {
    pub curve: &'a mut Curve,
    pub matrix_world: DMat4,
}

impl<'a> CurveAdapter<'a> {
    pub fn new(curve: &'a mut Curve, matrix_world: DMat4) -> Self {
        Self { curve, matrix_world }
    }

    fn plan_poly(&self, solver: &Solver<'_>, point: &PolyPoint) -> AlignResult<DVec4> {
        let target = solver.target_local(point.co.truncate(), self.matrix_world)?;
        // Lifted to homogeneous coordinates before blending.
        Ok(blend(point.co, target.extend(1.0), solver.influence()))
    }

    fn plan_bezier(&self, solver: &Solver<'_>, point: &BezierPoint) -> AlignResult<(DVec3, DVec3, DVec3)> {
        Ok((
            solver.solve_local(point.co, self.matrix_world)?,
            solver.solve_local(point.handle_left, self.matrix_world)?,
            solver.solve_local(point.handle_right, self.matrix_world)?,
        ))
    }
}

impl Alignable for CurveAdapter<'_> {
    type Plan = Vec<CurveUpdate>;

    fn kind(&self) -> EntityKind {
        EntityKind::Curve
    }

    fn selected_count(&self) -> usize {
        self.curve
            .splines
            .iter()
            .map(|spline| match spline {
                Spline::Poly(points) => points.iter().filter(|p| p.select).count(),
                Spline::Bezier(points) => points.iter().filter(|p| p.select_control_point).count(),
            })
            .sum()
    }

    fn validate(&self) -> AlignResult<()> {
        match self.curve.selected_bezier().find(|p| !p.has_supported_handles()) {
            Some(p) => Err(AlignError::UnsupportedHandle {
                left: p.handle_left_type,
                right: p.handle_right_type,
            }),
            None => Ok(()),
        }
    }

    fn plan(&self, solver: &Solver<'_>) -> AlignResult<Self::Plan> {
        let mut updates = Vec::new();
        for (spline_index, spline) in self.curve.splines.iter().enumerate() {
            match spline {
                Spline::Poly(points) => {
                    for (index, point) in points.iter().enumerate().filter(|(_, p)| p.select) {
                        updates.push(CurveUpdate::Poly {
                            spline: spline_index,
                            index,
                            co: self.plan_poly(solver, point)?,
                        });
                    }
                }
                Spline::Bezier(points) => {
                    for (index, point) in points.iter().enumerate().filter(|(_, p)| p.select_control_point) {
                        let (co, handle_left, handle_right) = self.plan_bezier(solver, point)?;
                        updates.push(CurveUpdate::Bezier {
                            spline: spline_index,
                            index,
                            co,
                            handle_left,
                            handle_right,
                        });
                    }
                }
            }
        }
        Ok(updates)
    }

    fn apply(&mut self, plan: Self::Plan) -> usize {
        let mut moved = 0;
        for update in plan {
            match update {
                CurveUpdate::Poly { spline, index, co } => {
                    if let Some(Spline::Poly(points)) = self.curve.splines.get_mut(spline) {
                        points[index].co = co;
                        moved += 1;
                    }
                }
                CurveUpdate::Bezier { spline, index, co, handle_left, handle_right } => {
                    if let Some(Spline::Bezier(points)) = self.curve.splines.get_mut(spline) {
                        let point = &mut points[index];
                        point.co = co;
                        point.handle_left = handle_left;
                        point.handle_right = handle_right;
                        moved += 1;
                    }
                }
            }
        }
        moved
    }
}
