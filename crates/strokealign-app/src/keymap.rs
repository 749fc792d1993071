//! Double-click keymap registry.

use crate::operators::OperatorKind;
use strokealign_core::{AlignPreferences, Modifiers, MouseButton, TriggerChord};

/// One binding of a chord to an operator in an editor keymap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapItem {
    pub keymap: &'static str,
    pub operator: OperatorKind,
    pub chord: TriggerChord,
}

impl KeymapItem {
    pub fn new(operator: OperatorKind, chord: TriggerChord) -> Self {
        Self {
            keymap: operator.keymap(),
            operator,
            chord,
        }
    }

    /// Format the binding for display (e.g., "Mesh: Alt+Double Right Click").
    pub fn format(&self) -> String {
        format!("{}: {}", self.keymap, self.chord.format())
    }
}

/// Registry of the trigger bindings this integration added.
///
/// Created at startup and torn down with [`KeymapRegistry::unbind`].
#[derive(Debug, Clone, Default)]
pub struct KeymapRegistry {
    items: Vec<KeymapItem>,
}

impl KeymapRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the trigger chord for every operator. Returns how many bindings were added.
    pub fn bind(&mut self, preferences: &AlignPreferences) -> usize {
        if !preferences.use_default_shortcut {
            return 0;
        }
        let mut added = 0;
        for operator in OperatorKind::ALL {
            let item = KeymapItem::new(operator, preferences.trigger);
            if self.items.contains(&item) {
                continue;
            }
            log::debug!("Binding {} to {}", operator.idname(), item.format());
            self.items.push(item);
            added += 1;
        }
        added
    }

    /// Remove every binding. Returns how many were removed.
    pub fn unbind(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Replace the bindings after a preference change.
    pub fn rebind(&mut self, preferences: &AlignPreferences) -> usize {
        self.unbind();
        self.bind(preferences)
    }

    /// Operator triggered by a double-click in `keymap`, if any.
    pub fn lookup(&self, keymap: &str, button: MouseButton, modifiers: Modifiers) -> Option<OperatorKind> {
        let chord = TriggerChord { button, modifiers };
        self.items
            .iter()
            .find(|item| item.keymap == keymap && item.chord == chord)
            .map(|item| item.operator)
    }

    pub fn items(&self) -> &[KeymapItem] {
        &self.items
    }

    /// Operator idnames to bind by hand when automatic binding is disabled.
    pub fn manual_operators() -> Vec<&'static str> {
        OperatorKind::ALL.iter().map(|kind| kind.idname()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt() -> Modifiers {
        Modifiers {
            alt: true,
            ..Modifiers::default()
        }
    }

    #[test]
    fn test_bind_all_operators() {
        let mut registry = KeymapRegistry::new();
        assert_eq!(registry.bind(&AlignPreferences::default()), 5);
        assert_eq!(registry.items().len(), 5);
        assert_eq!(
            registry.lookup("Mesh", MouseButton::Right, alt()),
            Some(OperatorKind::Mesh)
        );
        assert_eq!(
            registry.lookup("UV Editor", MouseButton::Right, alt()),
            Some(OperatorKind::Uv)
        );
    }

    #[test]
    fn test_bind_skips_duplicates() {
        let mut registry = KeymapRegistry::new();
        let prefs = AlignPreferences::default();
        registry.bind(&prefs);
        assert_eq!(registry.bind(&prefs), 0);
        assert_eq!(registry.items().len(), 5);
    }

    #[test]
    fn test_disabled_shortcut() {
        let mut registry = KeymapRegistry::new();
        let prefs = AlignPreferences {
            use_default_shortcut: false,
            ..AlignPreferences::default()
        };
        assert_eq!(registry.bind(&prefs), 0);
        assert!(registry.lookup("Mesh", MouseButton::Right, alt()).is_none());
        assert_eq!(KeymapRegistry::manual_operators().len(), 5);
        assert!(KeymapRegistry::manual_operators().contains(&"curve.align_selection_to_stroke"));
    }

    #[test]
    fn test_lookup_requires_exact_chord() {
        let mut registry = KeymapRegistry::new();
        registry.bind(&AlignPreferences::default());
        assert!(registry.lookup("Mesh", MouseButton::Left, alt()).is_none());
        assert!(registry.lookup("Mesh", MouseButton::Right, Modifiers::default()).is_none());
        let extra = Modifiers { shift: true, ..alt() };
        assert!(registry.lookup("Mesh", MouseButton::Right, extra).is_none());
        assert!(registry.lookup("Sculpt", MouseButton::Right, alt()).is_none());
    }

    #[test]
    fn test_rebind_after_preference_change() {
        let mut registry = KeymapRegistry::new();
        let mut prefs = AlignPreferences::default();
        registry.bind(&prefs);

        prefs.trigger.button = MouseButton::Middle;
        assert_eq!(registry.rebind(&prefs), 5);
        assert!(registry.lookup("Curve", MouseButton::Right, alt()).is_none());
        assert_eq!(
            registry.lookup("Curve", MouseButton::Middle, alt()),
            Some(OperatorKind::Curve)
        );

        assert_eq!(registry.unbind(), 5);
        assert!(registry.items().is_empty());
    }

    #[test]
    fn test_item_format() {
        let item = KeymapItem::new(OperatorKind::Armature, TriggerChord::default());
        assert_eq!(item.format(), "Armature: Alt+Double Right Click");
    }
}
