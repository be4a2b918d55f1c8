//! Camera and control options with TOML preset support.
//!
//! Options serialize to/from TOML so a driver can keep its camera setup in a
//! file next to the binary. Every section uses `#[serde(default)]`, so a
//! partial file only overrides what it names.

mod camera;
mod controls;
mod keybindings;

use std::path::Path;

pub use camera::{CameraMode, CameraOptions};
pub use controls::ControlsOptions;
pub use keybindings::MovementBindings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PinholeError;

/// Top-level options container.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial pose, projection and behavior.
    pub camera: CameraOptions,
    /// Input sensitivity.
    pub controls: ControlsOptions,
    /// FPS movement keys.
    #[schemars(skip)]
    pub keybindings: MovementBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, PinholeError> {
        let content = std::fs::read_to_string(path).map_err(PinholeError::Io)?;
        let options: Self = toml::from_str(&content)
            .map_err(|e| PinholeError::OptionsParse(e.to_string()))?;
        log::info!("Loaded camera options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), PinholeError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PinholeError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PinholeError::Io)?;
        }
        std::fs::write(path, content).map_err(PinholeError::Io)
    }
}
