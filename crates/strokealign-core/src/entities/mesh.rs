//! Mesh vertices.

use super::{Alignable, EntityKind};
use crate::align::Solver;
use crate::error::AlignResult;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A mesh vertex in object-local space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVertex {
    pub co: DVec3,
    pub normal: DVec3,
    pub select: bool,
}

impl MeshVertex {
    pub fn new(co: DVec3) -> Self {
        Self {
            co,
            normal: co.normalize_or_zero(),
            select: false,
        }
    }
}

/// A polygon mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<MeshVertex>,
    /// Polygons as vertex indices in winding order.
    pub faces: Vec<Vec<usize>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its index.
    pub fn add_vertex(&mut self, co: DVec3) -> usize {
        self.vertices.push(MeshVertex::new(co));
        self.vertices.len() - 1
    }

    /// Add a face. Indices out of range are ignored when computing normals.
    pub fn add_face(&mut self, indices: Vec<usize>) {
        self.faces.push(indices);
    }

    pub fn select_all(&mut self, select: bool) {
        for vertex in &mut self.vertices {
            vertex.select = select;
        }
    }

    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, v)| v.select)
            .map(|(i, _)| i)
    }

    /// Newell normal of a face, scaled by twice its area.
    fn face_normal(&self, face: &[usize]) -> DVec3 {
        let mut normal = DVec3::ZERO;
        for (i, &index) in face.iter().enumerate() {
            let next = face[(i + 1) % face.len()];
            let (Some(a), Some(b)) = (self.vertices.get(index), self.vertices.get(next)) else {
                continue;
            };
            let (a, b) = (a.co, b.co);
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal
    }

    /// Recompute vertex normals from face geometry.
    ///
    /// Vertex normals are the area-weighted average of adjacent face normals.
    /// Loose vertices point away from the origin.
    pub fn recalc_normals(&mut self) {
        let mut accum = vec![DVec3::ZERO; self.vertices.len()];
        for face in &self.faces {
            let normal = self.face_normal(face);
            for &index in face {
                if let Some(sum) = accum.get_mut(index) {
                    *sum += normal;
                }
            }
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(accum) {
            vertex.normal = if sum == DVec3::ZERO {
                vertex.co.normalize_or_zero()
            } else {
                sum.normalize_or_zero()
            };
        }
    }
}

/// Aligns the selected vertices of a mesh in edit mode.
#[derive(Debug)]
pub struct MeshAdapter<'a> {
    pub mesh: &'a mut Mesh,
    /// Object-to-world transform of the mesh's object.
    pub matrix_world: DMat4,
}

impl<'a> MeshAdapter<'a> {
    pub fn new(mesh: &'a mut Mesh, matrix_world: DMat4) -> Self {
        Self { mesh, matrix_world }
    }
}

impl Alignable for MeshAdapter<'_> {
    type Plan = Vec<(usize, DVec3)>;

    fn kind(&self) -> EntityKind {
        EntityKind::Mesh
    }

    fn selected_count(&self) -> usize {
        self.mesh.selected_indices().count()
    }

    fn plan(&self, solver: &Solver<'_>) -> AlignResult<Self::Plan> {
        self.mesh
            .selected_indices()
            .map(|i| {
                solver
                    .solve_local(self.mesh.vertices[i].co, self.matrix_world)
                    .map(|co| (i, co))
            })
            .collect()
    }

    fn apply(&mut self, plan: Self::Plan) -> usize {
        let moved = plan.len();
        for (index, co) in plan {
            self.mesh.vertices[index].co = co;
        }
        // Keep shading consistent with the new positions.
        self.mesh.recalc_normals();
        moved
    }
}
