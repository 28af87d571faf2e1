//! Game Configuration
//!
//! One JSON file for everything the demo scene tunes: controller, interaction
//! probe and key bindings. Missing sections and fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, load_json};
use crate::game::interaction::InteractionConfig;
use crate::input::KeyBindings;
use crate::player::ControllerConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub controller: ControllerConfig,
    pub interaction: InteractionConfig,
    pub bindings: KeyBindings,
}

impl GameConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig = load_json(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.controller.validate()?;
        self.interaction.validate()
    }
}
