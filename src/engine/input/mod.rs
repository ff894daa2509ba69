// Input layer
//
// Everything the combo engine consumes from the host side: named actions,
// the shared registry of known actions, bindings from raw sources to actions,
// and per-frame pressed state.
//
// ## Architecture
//
// - `action`: Action tokens, input sources and default bindings
// - `registry`: Shared universe of known actions
// - `bindings`: Source -> action mapping, feeds the registry
// - `state`: Per-frame pressed state and the `PressedQuery` seam
//
// ## Usage Example
//
// ```rust
// use rusted_combos::engine::input::{ActionRegistry, FrameInput, InputBindings};
//
// let registry = ActionRegistry::new();
// let bindings = InputBindings::with_defaults(registry.clone());
// let mut input = FrameInput::new();
//
// // In your event loop
// input.process_keyboard_event(&bindings, &key_event);
//
// // After the combo engine has seen this frame
// input.end_frame();
// ```

pub mod action;
pub mod bindings;
pub mod registry;
pub mod state;

// Re-export commonly used types
pub use action::{Action, InputSource};
pub use bindings::InputBindings;
pub use registry::ActionRegistry;
pub use state::{FrameInput, PressedQuery};
