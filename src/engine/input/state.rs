// Per-frame pressed state, fed from winit events

use super::action::{Action, InputSource};
use super::bindings::InputBindings;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::PhysicalKey;

/// Answers "was this action pressed this frame?"
///
/// This is the only thing the combo engine needs from the host's input
/// system. It is queried once per known action per frame and must not have
/// side effects.
pub trait PressedQuery {
    fn just_pressed(&self, action: &Action) -> bool;
}

impl<F> PressedQuery for F
where
    F: Fn(&Action) -> bool,
{
    fn just_pressed(&self, action: &Action) -> bool {
        self(action)
    }
}

/// Input state for the current frame
#[derive(Debug, Default)]
pub struct FrameInput {
    /// Actions that are currently held down
    pressed: HashSet<Action>,

    /// Actions that went down this frame
    just_pressed: HashSet<Action>,

    /// Actions that went up this frame
    just_released: HashSet<Action>,

    /// Actions that were held in the previous frame
    previous_pressed: HashSet<Action>,
}

impl FrameInput {
    /// Create an empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently pressed
    pub fn is_pressed(&self, action: &Action) -> bool {
        self.pressed.contains(action)
    }

    /// Check if an action was just released this frame
    pub fn just_released(&self, action: &Action) -> bool {
        self.just_released.contains(action)
    }

    /// Check if an action is held (pressed for multiple frames)
    pub fn is_held(&self, action: &Action) -> bool {
        self.pressed.contains(action) && self.previous_pressed.contains(action)
    }

    /// Register an action press. Presses of an already held action are ignored.
    pub fn press(&mut self, action: impl Into<Action>) {
        let action = action.into();
        if !self.pressed.contains(&action) {
            self.just_pressed.insert(action.clone());
            self.pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: impl Into<Action>) {
        let action = action.into();
        if self.pressed.remove(&action) {
            self.just_released.insert(action);
        }
    }

    /// Apply a raw source state change through `bindings`
    ///
    /// Key repeats never count as presses. Unbound sources are ignored.
    pub fn apply(
        &mut self,
        bindings: &InputBindings,
        source: InputSource,
        state: ElementState,
        repeat: bool,
    ) {
        let Some(action) = bindings.get_action(source) else {
            return;
        };
        match state {
            ElementState::Pressed => {
                if !repeat {
                    self.press(action);
                }
            }
            ElementState::Released => self.release(action),
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, bindings: &InputBindings, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.apply(bindings, InputSource::key(key_code), event.state, event.repeat);
        }
    }

    /// Process a mouse button event from winit
    pub fn process_mouse_button(
        &mut self,
        bindings: &InputBindings,
        button: MouseButton,
        state: ElementState,
    ) {
        self.apply(bindings, InputSource::mouse(button), state, false);
    }

    /// Finish the frame
    /// Call this once per frame after the combo engine has been updated
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed = self.pressed.clone();
    }

    /// Reset all input state
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
        self.just_released.clear();
        self.previous_pressed.clear();
    }

    /// Get all currently pressed actions
    pub fn pressed_actions(&self) -> Vec<Action> {
        self.pressed.iter().cloned().collect()
    }

    /// Get all actions that were just pressed
    pub fn just_pressed_actions(&self) -> Vec<Action> {
        self.just_pressed.iter().cloned().collect()
    }
}

impl PressedQuery for FrameInput {
    fn just_pressed(&self, action: &Action) -> bool {
        self.just_pressed.contains(action)
    }
}
