use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Input sensitivity for the camera behaviors.
pub struct ControlsOptions {
    /// FPS walking speed in world units per second.
    #[schemars(title = "Move Speed", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub move_speed: f32,
    /// FPS mouse-look sensitivity in radians per pixel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.0005, max = 0.02), extend("step" = 0.0005))]
    pub mouse_sensitivity: f32,
    /// Orbit rotation in radians per pixel.
    #[schemars(title = "Rotate Speed", range(min = 0.001, max = 0.1), extend("step" = 0.001))]
    pub rotate_speed: f32,
    /// Orbit pan in world units per pixel.
    #[schemars(title = "Pan Speed", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub pan_speed: f32,
    /// Orbit zoom as a distance fraction per scroll unit.
    #[schemars(title = "Zoom Speed", range(min = 0.01, max = 0.5), extend("step" = 0.01))]
    pub zoom_speed: f32,
}

impl Default for ControlsOptions {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            mouse_sensitivity: 0.003,
            rotate_speed: 0.01,
            pan_speed: 0.1,
            zoom_speed: 0.05,
        }
    }
}
