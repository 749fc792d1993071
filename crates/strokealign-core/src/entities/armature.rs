//! Armature bones in edit mode.

use super::{Alignable, EntityKind};
use crate::align::Solver;
use crate::error::AlignResult;
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// An edit-mode bone, in armature-local space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditBone {
    pub name: String,
    pub head: DVec3,
    pub tail: DVec3,
    pub select: bool,
}

impl EditBone {
    pub fn new(name: impl Into<String>, head: DVec3, tail: DVec3) -> Self {
        Self {
            name: name.into(),
            head,
            tail,
            select: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Armature {
    pub bones: Vec<EditBone>,
}

/// Aligns head and tail of every selected bone.
///
/// Head and tail are aligned independently of each other.
#[derive(Debug)]
pub struct ArmatureAdapter<'a> {
    pub armature: &'a mut Armature,
    pub matrix_world: DMat4,
}

impl<'a> ArmatureAdapter<'a> {
    pub fn new(armature: &'a mut Armature, matrix_world: DMat4) -> Self {
        Self { armature, matrix_world }
    }
}

impl Alignable for ArmatureAdapter<'_> {
    type Plan = Vec<(usize, DVec3, DVec3)>;

    fn kind(&self) -> EntityKind {
        EntityKind::Armature
    }

    fn selected_count(&self) -> usize {
        self.armature.bones.iter().filter(|b| b.select).count()
    }

    fn plan(&self, solver: &Solver<'_>) -> AlignResult<Self::Plan> {
        self.armature
            .bones
            .iter()
            .enumerate()
            .filter(|(_, bone)| bone.select)
            .map(|(i, bone)| -> AlignResult<(usize, DVec3, DVec3)> {
                let head = solver.solve_local(bone.head, self.matrix_world)?;
                let tail = solver.solve_local(bone.tail, self.matrix_world)?;
                Ok((i, head, tail))
            })
            .collect()
    }

    fn apply(&mut self, plan: Self::Plan) -> usize {
        let moved = plan.len();
        for (index, head, tail) in plan {
            let bone = &mut self.armature.bones[index];
            bone.head = head;
            bone.tail = tail;
        }
        moved
    }
}
