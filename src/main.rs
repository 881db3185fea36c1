//! Cannon Game entry point
//!
//! No native window backend is wired up yet, so the binary plays a scripted
//! match against headless windows and logs what happens.

use cannon_game::consts::DIALOG_TITLE;
use cannon_game::renderer::{HeadlessWindows, ScriptEvent};
use cannon_game::{GameError, Session, Settings};
use glam::Vec2;

/// Centre of the dialog's Fire! button
const FIRE_BUTTON: Vec2 = Vec2::new(1.0, 4.0);

/// Aims played by the demo, alternating left and right player
const DEMO_SHOTS: [(f32, f32); 6] = [
    (45.0, 40.0),
    (45.0, 40.0),
    (50.0, 42.0),
    (40.0, 44.0),
    (45.0, 41.0),
    (47.0, 43.0),
];

fn fire_script(angle: f32, velocity: f32) -> Vec<ScriptEvent> {
    vec![
        ScriptEvent::Type {
            entry: 0,
            text: angle.to_string(),
        },
        ScriptEvent::Type {
            entry: 1,
            text: velocity.to_string(),
        },
        ScriptEvent::Click(FIRE_BUTTON),
    ]
}

fn run() -> Result<(), GameError> {
    let settings = Settings {
        frame_rate: 0,
        ..Settings::load()
    };

    let mut windows = HeadlessWindows::new();
    for (angle, velocity) in DEMO_SHOTS {
        windows.script(DIALOG_TITLE, fire_script(angle, velocity));
    }
    // The next dialog has no script and closes at once, which quits

    let mut session = Session::open(&mut windows, settings)?;
    let scores = session.run(&mut windows)?;

    let window = session.game().window();
    log::info!(
        "Played {} frames, {} shapes on screen, {} vertices in the last frame",
        window.frames(),
        window.live_shapes(),
        window.vertices().len()
    );
    println!("Final score: blue {} - red {}", scores[0], scores[1]);
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Cannon game (native) starting...");
    log::info!("Native mode has no window backend - playing a scripted headless match");

    if let Err(e) = run() {
        log::error!("Game aborted: {e}");
        std::process::exit(1);
    }
}
