//! Pointer input with double-click chord detection.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Instant;
use strokealign_core::{Modifiers, MouseButton};

/// Pointer event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Up { position: Point, button: MouseButton },
    Move { position: Point },
}

/// Double-click detection constants.
const DOUBLE_CLICK_TIME_MS: u128 = 500;
const DOUBLE_CLICK_DISTANCE: f64 = 5.0;

/// A press remembered for double-click detection.
#[derive(Debug, Clone, Copy)]
struct Click {
    time: Instant,
    position: Point,
    button: MouseButton,
}

/// Tracks pointer state across frames.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer position in screen coordinates.
    pub pointer_position: Point,
    /// Current modifier keys state.
    pub modifiers: Modifiers,
    pressed_buttons: HashSet<MouseButton>,
    last_click: Option<Click>,
    /// Button that completed a double-click this frame.
    double_click: Option<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call at the start of each frame to reset per-frame state.
    pub fn begin_frame(&mut self) {
        self.double_click = None;
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        self.handle_pointer_event_at(event, Instant::now());
    }

    fn handle_pointer_event_at(&mut self, event: PointerEvent, now: Instant) {
        match event {
            PointerEvent::Down { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.insert(button);
                self.register_click(position, button, now);
            }
            PointerEvent::Up { position, button } => {
                self.pointer_position = position;
                self.pressed_buttons.remove(&button);
            }
            PointerEvent::Move { position } => {
                self.pointer_position = position;
            }
        }
    }

    fn register_click(&mut self, position: Point, button: MouseButton, now: Instant) {
        let is_double = self.last_click.is_some_and(|last| {
            last.button == button
                && now.duration_since(last.time).as_millis() < DOUBLE_CLICK_TIME_MS
                && last.position.distance(position) < DOUBLE_CLICK_DISTANCE
        });

        if is_double {
            self.double_click = Some(button);
            // A third click starts a new pair.
            self.last_click = None;
        } else {
            self.last_click = Some(Click {
                time: now,
                position,
                button,
            });
        }
    }

    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    /// Button of the double-click detected this frame, if any.
    pub fn double_click(&self) -> Option<MouseButton> {
        self.double_click
    }
}
