//! Flappy VGA host entry point
//!
//! Runs the game headless against the in-memory display, with the
//! autopilot standing in for the keyboard unless settings say otherwise.
//!
//! Usage: `flappy-vga [settings.json] [early|final] [keys.bin]`
//!
//! A keys file holds raw PS/2 set 2 bytes with `0x00` between frames; when
//! given, it replaces the autopilot.

use std::path::PathBuf;

use flappy_vga::platform::{CharOverlay, MemoryDisplay, ScriptedInput};
use flappy_vga::sim::GameState;
use flappy_vga::{FrameDriver, Revision, Settings};

fn main() {
    env_logger::init();
    log::info!("Flappy VGA (host) starting...");

    let mut settings_path = None;
    let mut revision = None;
    let mut keys_path = None;
    for arg in std::env::args().skip(1) {
        if let Some(r) = Revision::from_str(&arg) {
            revision = Some(r);
        } else if arg.ends_with(".json") {
            settings_path = Some(PathBuf::from(arg));
        } else {
            keys_path = Some(PathBuf::from(arg));
        }
    }

    let mut settings = match settings_path {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };
    if let Some(revision) = revision {
        settings.apply_preset(revision);
    }

    let input = match keys_path {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) => {
                log::info!("Replaying {} scan code bytes from {}", bytes.len(), path.display());
                settings.autopilot = false;
                ScriptedInput::from_scan_codes(&bytes)
            }
            Err(err) => {
                log::warn!("Could not read keys {}: {}", path.display(), err);
                ScriptedInput::default()
            }
        },
        None => ScriptedInput::default(),
    };

    log::info!(
        "Revision {}, rules {:?}, seed {:#x}",
        settings.revision.as_str(),
        settings.rules(),
        settings.seed
    );

    let state = GameState::new(settings.seed, settings.rules());
    let display = MemoryDisplay::with_frame_rate(settings.frame_rate);
    let mut driver = FrameDriver::new(state, display, input, CharOverlay::new())
        .with_autopilot(settings.autopilot);

    driver.run_frames(settings.demo_frames);

    let state = driver.state();
    log::info!(
        "Stopped after {} frames in {:?}: score {}, best {}",
        driver.frames(),
        state.mode,
        state.score,
        state.best_score
    );
    println!("best score: {}", state.best_score.max(state.score));
}
