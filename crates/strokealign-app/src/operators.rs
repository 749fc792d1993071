//! Alignment operators and their mode checks.

use crate::scene::{EditMode, ObjectData, Scene};
use strokealign_core::annotation::AnnotationContext;
use strokealign_core::entities::{ArmatureAdapter, CurveAdapter, MeshAdapter, ObjectAdapter, UvAdapter};
use strokealign_core::{AlignError, AlignOutcome, AlignPreferences, AlignResult, Influence, ScreenProjector, align};

/// The five alignment operators, one per editing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Mesh,
    Object,
    Uv,
    Armature,
    Curve,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 5] = [
        OperatorKind::Mesh,
        OperatorKind::Object,
        OperatorKind::Uv,
        OperatorKind::Armature,
        OperatorKind::Curve,
    ];

    pub fn idname(self) -> &'static str {
        match self {
            OperatorKind::Mesh => "mesh.align_selection_to_stroke",
            OperatorKind::Object => "object.align_selection_to_stroke",
            OperatorKind::Uv => "uv.align_selection_to_stroke",
            OperatorKind::Armature => "armature.align_selection_to_stroke",
            OperatorKind::Curve => "curve.align_selection_to_stroke",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OperatorKind::Mesh => "Align Vertices to Stroke",
            OperatorKind::Object => "Align Objects to Stroke",
            OperatorKind::Uv => "Align UVs to Stroke",
            OperatorKind::Armature => "Align Bones to Stroke",
            OperatorKind::Curve => "Align Curve Points to Stroke",
        }
    }

    /// Keymap the default trigger is bound into.
    pub fn keymap(self) -> &'static str {
        match self {
            OperatorKind::Mesh => "Mesh",
            OperatorKind::Object => "Object Mode",
            OperatorKind::Uv => "UV Editor",
            OperatorKind::Armature => "Armature",
            OperatorKind::Curve => "Curve",
        }
    }

    pub fn from_idname(idname: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.idname() == idname)
    }

    /// Check that the scene is in a context this operator handles.
    pub fn check(self, scene: &Scene) -> AlignResult<()> {
        let active_type = scene.active_object().map(|object| &object.data);
        let supported = match (self, scene.mode, active_type) {
            (OperatorKind::Object, EditMode::Object, _) => true,
            (OperatorKind::Mesh, EditMode::Edit, Some(ObjectData::Mesh(_))) => true,
            (OperatorKind::Uv, EditMode::Edit, Some(ObjectData::Mesh(_))) => true,
            (OperatorKind::Curve, EditMode::Edit, Some(ObjectData::Curve(_))) => true,
            (OperatorKind::Armature, EditMode::Edit, Some(ObjectData::Armature(_))) => true,
            _ => false,
        };
        if supported {
            return Ok(());
        }
        let found = active_type.map_or("no active object", ObjectData::type_name);
        Err(AlignError::UnsupportedMode(format!(
            "{} needs {}, found {:?} mode with {}",
            self.idname(),
            self.keymap(),
            scene.mode,
            found
        )))
    }

    /// Run the operator against `scene`.
    pub fn run(self, scene: &mut Scene, influence: Influence, preferences: &AlignPreferences) -> AlignOutcome {
        if let Err(err) = self.check(scene) {
            log::info!("{}", err);
            return AlignOutcome::NotApplicable(err);
        }

        let Scene {
            objects,
            active,
            annotations,
            uv_annotations,
            viewport,
            ..
        } = scene;
        let projector = viewport.as_ref().map(|v| v as &dyn ScreenProjector);

        if self == OperatorKind::Object {
            let mut context = AnnotationContext::scene(annotations);
            return align(
                &mut ObjectAdapter::new(objects),
                &mut context,
                projector,
                influence,
                preferences,
            );
        }

        let Some(object) = (*active).and_then(|index| objects.get_mut(index)) else {
            return AlignOutcome::NotApplicable(AlignError::NoSelection);
        };
        let matrix_world = object.matrix_world();

        match (self, &mut object.data) {
            (OperatorKind::Uv, ObjectData::Mesh(_)) => {
                let Some(uv_map) = object.uv_map.as_mut() else {
                    return AlignOutcome::NotApplicable(AlignError::NoSelection);
                };
                let mut context = AnnotationContext::object(uv_annotations);
                align(&mut UvAdapter::new(uv_map), &mut context, projector, influence, preferences)
            }
            (OperatorKind::Mesh, ObjectData::Mesh(mesh)) => {
                let mut context = AnnotationContext::new(object.annotations.as_mut(), Some(annotations));
                align(
                    &mut MeshAdapter::new(mesh, matrix_world),
                    &mut context,
                    projector,
                    influence,
                    preferences,
                )
            }
            (OperatorKind::Curve, ObjectData::Curve(curve)) => {
                let mut context = AnnotationContext::new(object.annotations.as_mut(), Some(annotations));
                align(
                    &mut CurveAdapter::new(curve, matrix_world),
                    &mut context,
                    projector,
                    influence,
                    preferences,
                )
            }
            (OperatorKind::Armature, ObjectData::Armature(armature)) => {
                let mut context = AnnotationContext::new(object.annotations.as_mut(), Some(annotations));
                align(
                    &mut ArmatureAdapter::new(armature, matrix_world),
                    &mut context,
                    projector,
                    influence,
                    preferences,
                )
            }
            _ => AlignOutcome::NotApplicable(AlignError::UnsupportedMode(self.idname().to_string())),
        }
    }
}
