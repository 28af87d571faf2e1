//! Game Module
//!
//! World-side gameplay components that build on top of the engine, and the
//! scene that composes them.

pub mod config;
pub mod interaction;
pub mod portal;
pub mod rotator;
pub mod scene;

pub use config::GameConfig;
pub use interaction::{
    ActionInteractable, InteractIcon, Interactable, InteractableId, InteractableRegistry,
    InteractionConfig, InteractionProbe, ProbeOutcome,
};
pub use portal::PortalMirror;
pub use rotator::ConstantRotator;
pub use scene::{DemoHandles, FrameReport, Scene, SpinningProp, Switch};
