//! Config Module
//!
//! File-backed configuration for the demo scene.

pub mod game_config;

pub use game_config::GameConfig;
