//! Walkthrough - headless scripted run of the demo scene
//!
//! Run with: `cargo run --bin walkthrough -- [config.json]`
//!
//! Feeds a fixed script of key presses and mouse motion through the same
//! input pipeline a window would, and logs what the scene does. Set
//! `RUST_LOG=debug` to see controller state transitions.
//!
//! Script:
//! - Escape: release the cursor, click: re-capture it
//! - lose and regain window focus
//! - W: walk up to the switch, E: flip it
//! - Shift+W: sprint
//! - Ctrl: crouch, walk under the beam, try to stand
//! - idle until stamina regenerates

use std::path::PathBuf;
use std::process::ExitCode;

use waypost_engine::game::{GameConfig, ProbeOutcome, Scene};
use waypost_engine::input::{CursorManager, InputState, KeyCode};
use waypost_engine::physics::CharacterBody;
use waypost_engine::player::{FootstepEvent, SurfaceKind};
use winit::keyboard::KeyCode as WinitKey;

/// Fixed timestep (64 Hz)
const DT: f32 = 1.0 / 64.0;

struct Step {
    label: &'static str,
    frames: u32,
    hold: &'static [WinitKey],
    /// Pressed on the first frame, released on the second
    tap: Option<WinitKey>,
    /// Mouse motion per frame in pixels
    look: (f32, f32),
    /// Delivered on the first frame
    window: Option<WindowEvent>,
}

#[derive(Clone, Copy)]
enum WindowEvent {
    LeftClick,
    FocusLost,
    FocusGained,
}

const SCRIPT: &[Step] = &[
    Step { label: "settle", frames: 8, hold: &[], tap: None, look: (0.0, 0.0), window: None },
    Step { label: "glance around", frames: 16, hold: &[], tap: None, look: (0.0, -4.0), window: None },
    Step { label: "level view", frames: 16, hold: &[], tap: None, look: (0.0, 4.0), window: None },
    Step { label: "release cursor", frames: 8, hold: &[], tap: Some(WinitKey::Escape), look: (0.0, -4.0), window: None },
    Step { label: "recapture cursor", frames: 4, hold: &[], tap: None, look: (0.0, 0.0), window: Some(WindowEvent::LeftClick) },
    Step { label: "lose focus", frames: 8, hold: &[], tap: None, look: (3.0, 0.0), window: Some(WindowEvent::FocusLost) },
    Step { label: "regain focus", frames: 4, hold: &[], tap: None, look: (0.0, 0.0), window: Some(WindowEvent::FocusGained) },
    Step { label: "walk to switch", frames: 40, hold: &[WinitKey::KeyW], tap: None, look: (0.0, 0.0), window: None },
    Step { label: "flip switch", frames: 2, hold: &[], tap: Some(WinitKey::KeyE), look: (0.0, 0.0), window: None },
    Step { label: "sprint", frames: 96, hold: &[WinitKey::KeyW, WinitKey::ShiftLeft], tap: None, look: (0.0, 0.0), window: None },
    Step { label: "crouch", frames: 48, hold: &[], tap: Some(WinitKey::ControlLeft), look: (0.0, 0.0), window: None },
    Step { label: "sneak under beam", frames: 96, hold: &[WinitKey::KeyW], tap: None, look: (0.0, 0.0), window: None },
    Step { label: "try to stand", frames: 16, hold: &[], tap: Some(WinitKey::ControlLeft), look: (0.0, 0.0), window: None },
    Step { label: "rest", frames: 448, hold: &[], tap: None, look: (0.0, 0.0), window: None },
];

#[derive(Default)]
struct StepStats {
    footsteps: Vec<FootstepEvent>,
    interactions: u32,
}

fn main() -> ExitCode {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::error!("Failed to load config {}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let (mut scene, handles) = Scene::demo(&config);
    let mut input = InputState::new();

    for step in SCRIPT {
        let stats = run_step(&mut scene, &mut input, &config, step);
        let player = &scene.player;
        let position = player.body().position();
        log::info!(
            "[{}] pos=({:.2}, {:.2}, {:.2}) pitch={:.1} stamina={:.1} sprint_allowed={} crouching={} cursor_locked={}",
            step.label,
            position.x,
            position.y,
            position.z,
            player.look().pitch(),
            player.stamina().current(),
            player.stamina().sprint_allowed(),
            player.is_crouching(),
            scene.cursor.is_locked(),
        );
        log::info!(
            "[{}] footsteps: {} metal, {} non-metal, {} other; interactions={} icon={:?}",
            step.label,
            count(&stats.footsteps, SurfaceKind::Metal),
            count(&stats.footsteps, SurfaceKind::NonMetal),
            count(&stats.footsteps, SurfaceKind::Default),
            stats.interactions,
            scene.probe.icon().sprite,
        );
    }

    log::info!(
        "Finished after {} frames: switch on={}, bell rings={}, portal camera at {:?}",
        scene.frame(),
        handles.switch_state.get(),
        handles.bell_rings.get(),
        scene.portals.first().map(|p| p.transform().position),
    );
    ExitCode::SUCCESS
}

fn run_step(scene: &mut Scene, input: &mut InputState, config: &GameConfig, step: &Step) -> StepStats {
    let mut stats = StepStats::default();

    for frame in 0..step.frames {
        if frame == 0 {
            for &key in step.hold {
                input.keyboard.handle_key(KeyCode::from_winit(key), true);
            }
        }
        if let Some(key) = step.tap {
            match frame {
                0 => input.keyboard.handle_key(KeyCode::from_winit(key), true),
                1 => input.keyboard.handle_key(KeyCode::from_winit(key), false),
                _ => {}
            }
        }
        if frame == 0 {
            if let Some(event) = step.window {
                apply_window_event(&mut scene.cursor, event);
            }
        }
        input.accumulate_look(step.look.0, step.look.1);
        input.apply_cursor_bindings(&config.bindings, &mut scene.cursor);
        push_cursor_state(&mut scene.cursor);

        let frame_input = input.frame(&config.bindings, &scene.cursor);
        let report = scene.tick(DT, &frame_input);
        input.end_frame();

        if matches!(report.interaction, ProbeOutcome::Interacted(_)) {
            stats.interactions += 1;
        }
        stats.footsteps.extend(report.footsteps);
    }

    for &key in step.hold {
        input.keyboard.handle_key(KeyCode::from_winit(key), false);
    }
    stats
}

fn apply_window_event(cursor: &mut CursorManager, event: WindowEvent) {
    match event {
        WindowEvent::LeftClick => {
            cursor.handle_left_click();
        }
        WindowEvent::FocusLost => cursor.handle_focus_lost(),
        WindowEvent::FocusGained => {
            cursor.handle_focus_gained();
        }
    }
}

/// Stand-in for window.set_cursor_grab / set_cursor_visible.
fn push_cursor_state(cursor: &mut CursorManager) {
    if cursor.is_dirty() {
        log::debug!("cursor: locked={} visible={}", cursor.is_locked(), cursor.is_visible());
        cursor.clear_dirty();
    }
}

fn count(steps: &[FootstepEvent], surface: SurfaceKind) -> usize {
    steps.iter().filter(|step| step.surface == surface).count()
}
