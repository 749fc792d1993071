//! In-memory host scene.

use glam::{DMat4, DQuat, DVec3};
use serde::{Deserialize, Serialize};
use strokealign_core::ViewportProjector;
use strokealign_core::annotation::AnnotationData;
use strokealign_core::entities::{Armature, Curve, Mesh, Origin, UvMap};

/// Interaction mode of the active object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditMode {
    #[default]
    Object,
    Edit,
}

/// Editor the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Editor {
    #[default]
    Viewport3D,
    UvEditor,
}

/// Object data block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ObjectData {
    #[default]
    Empty,
    Mesh(Mesh),
    Curve(Curve),
    Armature(Armature),
}

impl ObjectData {
    pub fn type_name(&self) -> &'static str {
        match self {
            ObjectData::Empty => "EMPTY",
            ObjectData::Mesh(_) => "MESH",
            ObjectData::Curve(_) => "CURVE",
            ObjectData::Armature(_) => "ARMATURE",
        }
    }
}

/// An object placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub location: DVec3,
    pub rotation: DQuat,
    pub scale: DVec3,
    pub select: bool,
    pub data: ObjectData,
    /// Active UV layer (meshes only).
    pub uv_map: Option<UvMap>,
    /// Annotations owned by this object.
    pub annotations: Option<AnnotationData>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            location: DVec3::ZERO,
            rotation: DQuat::IDENTITY,
            scale: DVec3::ONE,
            select: false,
            data,
            uv_map: None,
            annotations: None,
        }
    }

    pub fn with_location(mut self, location: DVec3) -> Self {
        self.location = location;
        self
    }

    pub fn matrix_world(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(self.scale, self.rotation, self.location)
    }
}

impl Origin for SceneObject {
    fn location(&self) -> DVec3 {
        self.location
    }

    fn set_location(&mut self, location: DVec3) {
        self.location = location;
    }

    fn is_selected(&self) -> bool {
        self.select
    }
}

/// The scene and the editor state around it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
    /// Index of the active object.
    pub active: Option<usize>,
    pub mode: EditMode,
    /// Scene-level annotations drawn in the 3D viewport.
    pub annotations: AnnotationData,
    /// Annotations drawn in the UV editor.
    pub uv_annotations: AnnotationData,
    /// Active 3D viewport, if one is open.
    pub viewport: Option<ViewportProjector>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object and return its index.
    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    /// Make an object active and selected.
    pub fn set_active(&mut self, index: usize) {
        if let Some(object) = self.objects.get_mut(index) {
            object.select = true;
            self.active = Some(index);
        }
    }

    pub fn active_object(&self) -> Option<&SceneObject> {
        self.objects.get(self.active?)
    }

    /// Name of the keymap that receives input in `editor`.
    pub fn active_keymap(&self, editor: Editor) -> Option<&'static str> {
        if editor == Editor::UvEditor {
            return Some("UV Editor");
        }
        match self.mode {
            EditMode::Object => Some("Object Mode"),
            EditMode::Edit => match self.active_object()?.data {
                ObjectData::Mesh(_) => Some("Mesh"),
                ObjectData::Curve(_) => Some("Curve"),
                ObjectData::Armature(_) => Some("Armature"),
                ObjectData::Empty => None,
            },
        }
    }
}
