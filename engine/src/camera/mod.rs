//! Camera Module
//!
//! First-person camera state: the rig attached to the character body and
//! mouse look. Window-system agnostic - it only deals with camera state and math.

pub mod look;
pub mod rig;

pub use look::MouseLook;
pub use rig::{CameraRig, DEFAULT_EYE_HEIGHT};
