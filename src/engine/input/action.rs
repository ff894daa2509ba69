// Action tokens and the raw input sources that can be bound to them

use std::fmt;
use std::rc::Rc;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// An opaque, named input event such as `"up"` or `"jump"`
///
/// Cloning is cheap (the name is reference counted). Equality and hashing
/// are by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action(Rc<str>);

impl Action {
    /// Create an action from its name
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    /// Get the action name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Action {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Action {
    fn from(name: String) -> Self {
        Self(Rc::from(name))
    }
}

impl From<&Action> for Action {
    fn from(action: &Action) -> Self {
        action.clone()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents an input source (keyboard key or mouse button)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
    Mouse(MouseButton),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::Mouse(button)
    }
}

/// Default keyboard/mouse bindings used by [`super::InputBindings::with_defaults`]
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        // Directions (arrows and WASD)
        (InputSource::key(KeyCode::ArrowUp), Action::new("up")),
        (InputSource::key(KeyCode::ArrowDown), Action::new("down")),
        (InputSource::key(KeyCode::ArrowLeft), Action::new("left")),
        (InputSource::key(KeyCode::ArrowRight), Action::new("right")),
        (InputSource::key(KeyCode::KeyW), Action::new("up")),
        (InputSource::key(KeyCode::KeyS), Action::new("down")),
        (InputSource::key(KeyCode::KeyA), Action::new("left")),
        (InputSource::key(KeyCode::KeyD), Action::new("right")),
        // Attacks
        (InputSource::key(KeyCode::Space), Action::new("jump")),
        (InputSource::key(KeyCode::KeyJ), Action::new("punch")),
        (InputSource::key(KeyCode::KeyK), Action::new("kick")),
        (InputSource::mouse(MouseButton::Left), Action::new("punch")),
        (InputSource::mouse(MouseButton::Right), Action::new("kick")),
    ]
}
