use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which behavior drives the camera.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Static pinhole, moved only through explicit setters.
    Pinhole,
    /// Free-fly first-person camera.
    #[default]
    Fps,
    /// Orbit around a focus point.
    Orbit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera pose and projection parameters.
pub struct CameraOptions {
    /// Camera behavior.
    #[schemars(title = "Mode")]
    pub mode: CameraMode,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fov_y: f32,
    /// Initial eye position (pinhole and FPS modes).
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees (FPS mode). 0 looks down `-Z`.
    #[schemars(title = "Yaw", range(min = -180.0, max = 180.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Initial pitch in degrees (FPS mode), clamped to ±89.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Point to orbit around (orbit mode).
    #[schemars(skip)]
    pub focus_point: [f32; 3],
    /// Initial eye-to-focus distance (orbit mode).
    #[schemars(title = "Orbit Distance", range(min = 1.0, max = 1000.0), extend("step" = 1.0))]
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            mode: CameraMode::Fps,
            fov_y: 60.0,
            position: [0.0; 3],
            yaw: 0.0,
            pitch: 0.0,
            focus_point: [0.0; 3],
            distance: 10.0,
        }
    }
}
