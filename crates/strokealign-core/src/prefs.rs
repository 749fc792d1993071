//! User preferences consumed by the alignment operators.

use crate::error::{AlignError, AlignResult};
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    #[default]
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt
    }
}

/// Double-click chord that triggers alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TriggerChord {
    pub button: MouseButton,
    pub modifiers: Modifiers,
}

impl Default for TriggerChord {
    fn default() -> Self {
        Self {
            button: MouseButton::Right,
            modifiers: Modifiers {
                alt: true,
                ..Modifiers::default()
            },
        }
    }
}

impl TriggerChord {
    /// Format the chord for display (e.g., "Alt+Double Right Click").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        parts.push(match self.button {
            MouseButton::Left => "Double Left Click",
            MouseButton::Right => "Double Right Click",
            MouseButton::Middle => "Double Middle Click",
        });
        parts.join("+")
    }
}

/// Alignment preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignPreferences {
    /// Remove the consumed stroke after a successful alignment.
    pub clear_strokes: bool,
    /// Bind the trigger chord automatically.
    pub use_default_shortcut: bool,
    pub trigger: TriggerChord,
}

impl Default for AlignPreferences {
    fn default() -> Self {
        Self {
            clear_strokes: false,
            use_default_shortcut: true,
            trigger: TriggerChord::default(),
        }
    }
}

impl AlignPreferences {
    /// Parse preferences from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> AlignResult<Self> {
        serde_json::from_str(json).map_err(|e| AlignError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> AlignResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| AlignError::Config(e.to_string()))
    }

    /// Advisory notes for the preference panel.
    pub fn warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.clear_strokes {
            warnings.push("Clearing strokes stops the influence slider from working");
        }
        if self.use_default_shortcut && !self.trigger.modifiers.any() {
            warnings.push("Choose at least one modifier to combine with the double click");
        }
        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = AlignPreferences::default();
        assert!(!prefs.clear_strokes);
        assert!(prefs.use_default_shortcut);
        assert_eq!(prefs.trigger.button, MouseButton::Right);
        assert!(prefs.trigger.modifiers.alt);
        assert!(!prefs.trigger.modifiers.ctrl);
        assert!(prefs.warnings().is_empty());
    }

    #[test]
    fn test_partial_json() {
        let prefs = AlignPreferences::from_json(r#"{ "clear_strokes": true }"#).unwrap();
        assert!(prefs.clear_strokes);
        assert!(prefs.use_default_shortcut);
        assert_eq!(prefs.trigger, TriggerChord::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut prefs = AlignPreferences::default();
        prefs.trigger.button = MouseButton::Middle;
        prefs.trigger.modifiers.shift = true;
        let json = prefs.to_json().unwrap();
        assert_eq!(AlignPreferences::from_json(&json).unwrap(), prefs);
    }

    #[test]
    fn test_malformed_json() {
        let err = AlignPreferences::from_json("{ clear_strokes").unwrap_err();
        assert!(matches!(err, AlignError::Config(_)));
    }

    #[test]
    fn test_warnings() {
        let mut prefs = AlignPreferences::default();
        prefs.clear_strokes = true;
        prefs.trigger.modifiers = Modifiers::default();
        assert_eq!(prefs.warnings().len(), 2);

        prefs.use_default_shortcut = false;
        assert_eq!(prefs.warnings().len(), 1);
    }

    #[test]
    fn test_chord_format() {
        assert_eq!(TriggerChord::default().format(), "Alt+Double Right Click");
        let chord = TriggerChord {
            button: MouseButton::Left,
            modifiers: Modifiers {
                ctrl: true,
                shift: true,
                alt: false,
            },
        };
        assert_eq!(chord.format(), "Ctrl+Shift+Double Left Click");
    }
}
