use anyhow::Result;
use log::info;
use rusted_combos::{
    ActionRegistry, ComboManager, FrameInput, InputBindings, InputSource, ManualClock,
};
use std::cell::RefCell;
use std::rc::Rc;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Frame length of the scripted session (60 updates per second)
const FRAME_TIME: f64 = 1.0 / 60.0;

/// Scripted key presses: (frames to wait before the press, key)
const SCRIPT: &[(u32, KeyCode)] = &[
    // Konami opening, quick enough
    (3, KeyCode::ArrowUp),
    (4, KeyCode::ArrowUp),
    (4, KeyCode::ArrowDown),
    (4, KeyCode::ArrowDown),
    // Fireball, too slow
    (30, KeyCode::ArrowDown),
    (20, KeyCode::ArrowRight),
    (20, KeyCode::KeyJ),
    // Fireball again, on time
    (30, KeyCode::ArrowDown),
    (5, KeyCode::ArrowRight),
    (5, KeyCode::KeyJ),
];

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting combo demo...");

    let registry = ActionRegistry::new();
    let bindings = InputBindings::with_defaults(registry.clone());
    let clock = ManualClock::new();
    let mut combos = ComboManager::new(registry.clone(), clock.clone());

    let fired: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    for (name, sequence, interval) in [
        ("up-up-down-down", &["up", "up", "down", "down"][..], 0.5),
        ("fireball", &["down", "right", "punch"][..], 0.4),
    ] {
        let log = fired.clone();
        let handle = combos.register(sequence.iter().copied(), interval, move || {
            info!("Combo fired: {}", name);
            log.borrow_mut().push(name);
        })?;
        info!("Registered {} as {}", name, handle);
    }
    info!("Watching {} actions", registry.len());

    let mut input = FrameInput::new();
    let mut frame: u64 = 0;
    for &(wait, key) in SCRIPT {
        for _ in 0..wait {
            clock.advance(FRAME_TIME);
            combos.update(&input);
            input.end_frame();
            frame += 1;
        }

        let source = InputSource::key(key);
        input.apply(&bindings, source, ElementState::Pressed, false);
        clock.advance(FRAME_TIME);
        combos.update(&input);
        input.end_frame();
        input.apply(&bindings, source, ElementState::Released, false);
        frame += 1;
    }

    info!(
        "Session finished after {} frames ({:.2}s): {:?}",
        frame,
        frame as f64 * FRAME_TIME,
        fired.borrow()
    );

    Ok(())
}
