//! Waypost Engine Library
//!
//! Per-frame gameplay components for a first-person scene, driven headlessly
//! by a host loop that supplies elapsed time, input and collision queries.
//!
//! # Modules
//!
//! - [`player`] - First-person controller: movement, look, jump, crouch, head-bob, footsteps, stamina
//! - [`camera`] - Camera rig attached to the body and mouse look
//! - [`input`] - Keyboard state, key bindings, cursor lock and per-frame input snapshots
//! - [`physics`] - Character body trait and ray queries against box colliders
//! - [`ui`] - Screen-space images (crosshair icon, stamina bar)
//! - [`world`] - Transforms
//! - [`config`] - Config error type and JSON loading
//! - [`game`] - Interaction probe, portal mirror, rotator and the demo scene
//!
//! # Example
//!
//! ```ignore
//! use waypost_engine::game::{GameConfig, Scene};
//! use waypost_engine::input::{InputState, KeyCode};
//!
//! let config = GameConfig::default();
//! let (mut scene, _handles) = Scene::demo(&config);
//! let mut input = InputState::new();
//!
//! // From window events:
//! input.keyboard.handle_key(KeyCode::W, true);
//! input.accumulate_look(dx, dy);
//!
//! // Each frame:
//! let frame = input.frame(&config.bindings, &scene.cursor);
//! let report = scene.tick(delta_time, &frame);
//! input.end_frame();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod ui;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used types
pub use config::ConfigError;
pub use input::{FrameInput, InputState, KeyBindings, KeyCode, KeyboardState};
pub use physics::{CharacterBody, CollisionWorld, KinematicCapsule, PhysicsQuery};
pub use player::{ControllerConfig, FirstPersonController};
