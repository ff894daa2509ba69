// Timed input combo detection
//
// The host binds raw keys/buttons to named actions, feeds winit events into a
// `FrameInput`, and calls `ComboManager::update` once per frame. Registered
// combos fire their callback when their actions are pressed in order within
// their interval.
//
// ## Usage Example
//
// ```rust
// use rusted_combos::{ActionRegistry, ComboManager, FrameInput, InputBindings, SystemClock};
//
// let registry = ActionRegistry::new();
// let bindings = InputBindings::with_defaults(registry.clone());
// let mut combos = ComboManager::new(registry, SystemClock::new());
//
// let handle = combos.register(["down", "right", "punch"], 0.5, || {
//     log::info!("Fireball!");
// })?;
//
// // Every frame
// input.process_keyboard_event(&bindings, &key_event);
// combos.update(&input);
// input.end_frame();
//
// // When the move is no longer available
// combos.deregister(handle);
// ```

pub mod engine;

// Re-export commonly used types
pub use engine::clock::{Clock, ManualClock, SystemClock};
pub use engine::combo::{ComboConfig, ComboError, ComboHandle, ComboManager, MatchMode};
pub use engine::input::{Action, ActionRegistry, FrameInput, InputBindings, InputSource, PressedQuery};
