//! Player Module
//!
//! First-person character control.
//!
//! # Components
//!
//! - [`FirstPersonController`] - Runs every player feature once per frame against a body
//!   - Movement, mouse look, jump and gravity
//!   - Crouch, head-bob and footsteps
//!   - Stamina-gated sprint
//! - [`ControllerConfig`] - All tuning values plus [`FeatureToggles`]
//! - [`CrouchController`] - Timed height/center transition between stances
//! - [`StaminaRegulator`] - Sprint drain and delayed regeneration
//! - [`FootstepTimer`] - Step cadence and surface classification

pub mod config;
pub mod controller;
pub mod crouch;
pub mod footsteps;
pub mod gait;
pub mod head_bob;
pub mod stamina;
pub mod timed_task;

pub use config::{ControllerConfig, FeatureToggles};
pub use controller::FirstPersonController;
pub use crouch::{CrouchController, CrouchToggle, StanceProfile};
pub use footsteps::{FootstepEvent, FootstepTimer, METAL_TAG, NON_METAL_TAG, SurfaceKind};
pub use gait::Gait;
pub use head_bob::{BOB_MIN_PLANAR_SPEED, HeadBob};
pub use stamina::{RegenStage, StaminaRegulator};
pub use timed_task::{TaskPhase, TimedTask};
