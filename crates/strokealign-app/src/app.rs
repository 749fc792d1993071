//! Application shell tying input, keymap and operators together.

use crate::input::{InputState, PointerEvent};
use crate::keymap::KeymapRegistry;
use crate::operators::OperatorKind;
use crate::scene::{Editor, Scene};
use strokealign_core::{AlignOutcome, AlignPreferences, AlignResult, Influence};

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub preferences: AlignPreferences,
    /// Influence used by chord-triggered operations.
    pub influence: Influence,
}

impl AppConfig {
    /// Load preferences from JSON, keeping the default influence.
    pub fn from_json(json: &str) -> AlignResult<Self> {
        Ok(Self {
            preferences: AlignPreferences::from_json(json)?,
            influence: Influence::default(),
        })
    }
}

/// The application: owns the scene and routes input to operators.
#[derive(Debug)]
pub struct App {
    pub scene: Scene,
    pub input: InputState,
    /// Editor under the pointer.
    pub editor: Editor,
    config: AppConfig,
    keymap: KeymapRegistry,
}

impl App {
    pub fn new(scene: Scene, config: AppConfig) -> Self {
        for warning in config.preferences.warnings() {
            log::warn!("{}", warning);
        }
        let mut keymap = KeymapRegistry::new();
        let bound = keymap.bind(&config.preferences);
        if bound == 0 {
            log::info!(
                "Automatic trigger disabled; bind manually: {}",
                KeymapRegistry::manual_operators().join(", ")
            );
        }
        Self {
            scene,
            input: InputState::new(),
            editor: Editor::default(),
            config,
            keymap,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn keymap(&self) -> &KeymapRegistry {
        &self.keymap
    }

    /// Replace preferences and rebind the trigger.
    pub fn set_preferences(&mut self, preferences: AlignPreferences) {
        for warning in preferences.warnings() {
            log::warn!("{}", warning);
        }
        self.keymap.rebind(&preferences);
        self.config.preferences = preferences;
    }

    pub fn set_influence(&mut self, influence: Influence) {
        self.config.influence = influence;
    }

    /// Process a pointer event; runs an operator when it completes a bound chord.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<AlignOutcome> {
        self.input.begin_frame();
        self.input.handle_pointer_event(event);

        let button = self.input.double_click()?;
        let keymap = self.scene.active_keymap(self.editor)?;
        let operator = self.keymap.lookup(keymap, button, self.input.modifiers)?;
        Some(self.run(operator))
    }

    /// Run an operator with the configured influence.
    pub fn run(&mut self, operator: OperatorKind) -> AlignOutcome {
        log::debug!("Running {}", operator.idname());
        operator.run(&mut self.scene, self.config.influence, &self.config.preferences)
    }

    /// Remove every keymap binding this app added.
    pub fn shutdown(&mut self) {
        let removed = self.keymap.unbind();
        log::info!("Removed {} keymap bindings", removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{EditMode, ObjectData, SceneObject};
    use glam::DVec3;
    use kurbo::{Point, Rect};
    use strokealign_core::annotation::AnnotationStroke;
    use strokealign_core::entities::{Armature, EditBone};
    use strokealign_core::{Modifiers, MouseButton, ViewportProjector};

    fn rig_scene() -> Scene {
        let mut bone = EditBone::new("Bone", DVec3::ZERO, DVec3::new(1.0, 0.0, 0.0));
        bone.select = true;
        let armature = Armature { bones: vec![bone] };

        let mut scene = Scene::new();
        let index = scene.add_object(SceneObject::new("Rig", ObjectData::Armature(armature)));
        scene.set_active(index);
        scene.mode = EditMode::Edit;
        scene.viewport = Some(ViewportProjector::orthographic(
            DVec3::new(0.0, 0.0, 10.0),
            DVec3::ZERO,
            DVec3::Y,
            5.0,
            Rect::new(0.0, 0.0, 800.0, 600.0),
        ));
        scene.annotations.push_stroke(AnnotationStroke::new(vec![
            DVec3::new(-2.0, 1.0, 0.0),
            DVec3::new(2.0, 1.0, 0.0),
        ]));
        scene
    }

    fn double_click(app: &mut App, button: MouseButton) -> Option<AlignOutcome> {
        let position = Point::new(400.0, 300.0);
        app.handle_pointer(PointerEvent::Down { position, button });
        app.handle_pointer(PointerEvent::Up { position, button });
        let outcome = app.handle_pointer(PointerEvent::Down { position, button });
        app.handle_pointer(PointerEvent::Up { position, button });
        outcome
    }

    fn bone(app: &App) -> &EditBone {
        match &app.scene.objects[0].data {
            ObjectData::Armature(armature) => &armature.bones[0],
            _ => panic!("expected armature"),
        }
    }

    #[test]
    fn test_chord_runs_operator() {
        let mut app = App::new(rig_scene(), AppConfig::default());
        app.input.set_modifiers(Modifiers {
            alt: true,
            ..Modifiers::default()
        });

        let outcome = double_click(&mut app, MouseButton::Right).unwrap();
        assert_eq!(outcome.moved(), 1);
        assert!((bone(&app).head - DVec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
        assert!((bone(&app).tail - DVec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_unbound_chord_does_nothing() {
        let mut app = App::new(rig_scene(), AppConfig::default());
        assert!(double_click(&mut app, MouseButton::Right).is_none());
        assert_eq!(bone(&app).head, DVec3::ZERO);
    }

    #[test]
    fn test_set_preferences_rebinds() {
        let mut app = App::new(rig_scene(), AppConfig::default());
        let mut prefs = AlignPreferences::default();
        prefs.trigger.button = MouseButton::Left;
        prefs.trigger.modifiers = Modifiers {
            ctrl: true,
            ..Modifiers::default()
        };
        app.set_preferences(prefs);
        app.input.set_modifiers(Modifiers {
            ctrl: true,
            ..Modifiers::default()
        });

        assert!(double_click(&mut app, MouseButton::Left).is_some());
        app.shutdown();
        assert!(app.keymap().items().is_empty());
    }

    #[test]
    fn test_config_from_json() {
        let config = AppConfig::from_json(r#"{ "use_default_shortcut": false }"#).unwrap();
        let app = App::new(Scene::new(), config);
        assert!(app.keymap().items().is_empty());
        assert_eq!(app.config().influence, Influence::FULL);
    }
}
