//! Camera behaviors behind one capability.
//!
//! Every rig exposes the same pinhole state (position, basis, aspect) and a
//! per-frame `update`. [`Camera`] picks the behavior at construction.

use super::core::{CameraUniform, PinholeCamera};
use super::fps::FpsCamera;
use super::orbit::OrbitCamera;
use crate::input::InputSampler;
use crate::options::{CameraMode, Options};

/// Nominal frame time (about 60 Hz) for callers without a measured delta.
pub const FIXED_TIME_STEP: f32 = 0.016;

/// A camera behavior driven once per frame by sampled input.
pub trait CameraRig {
    /// The pinhole state this rig steers.
    fn pinhole(&self) -> &PinholeCamera;

    /// Mutable pinhole state, for intrinsics and the raw basis setters.
    fn pinhole_mut(&mut self) -> &mut PinholeCamera;

    /// Advance one frame. `dt` is the elapsed time in seconds.
    ///
    /// Call after the frame's raw events were applied and before
    /// [`InputSampler::update`].
    fn update(&mut self, input: &InputSampler, dt: f32);

    /// One-shot change notification, see
    /// [`PinholeCamera::notify_changed`].
    fn notify_changed(&mut self) -> bool {
        self.pinhole_mut().notify_changed()
    }
}

impl CameraRig for PinholeCamera {
    fn pinhole(&self) -> &PinholeCamera {
        self
    }

    fn pinhole_mut(&mut self) -> &mut PinholeCamera {
        self
    }

    /// The bare pinhole model has no behavior of its own.
    fn update(&mut self, _input: &InputSampler, _dt: f32) {}
}

/// Run one frame of the driver loop: update `rig` from this frame's input,
/// snapshot a uniform if the camera changed, then commit the input frame.
///
/// The rig reads the input before the commit, so a drag or key edge is seen
/// by exactly one update.
pub fn drive_frame<R: CameraRig + ?Sized>(
    rig: &mut R,
    input: &mut InputSampler,
    dt: f32,
) -> Option<CameraUniform> {
    rig.update(input, dt);
    let uniform = rig
        .notify_changed()
        .then(|| CameraUniform::from_camera(rig.pinhole()));
    input.update();
    uniform
}

/// A camera with one of the built-in behaviors.
#[derive(Debug, Clone, PartialEq)]
pub enum Camera {
    /// Static pinhole; only moves through explicit setters.
    Pinhole(PinholeCamera),
    /// Free-fly first-person camera.
    Fps(FpsCamera),
    /// Camera orbiting a focus point.
    Orbit(OrbitCamera),
}

impl Default for Camera {
    fn default() -> Self {
        Self::Fps(FpsCamera::new())
    }
}

impl Camera {
    /// Build the behavior selected in `options`, sized for a `width` ×
    /// `height` screen.
    #[must_use]
    pub fn from_options(options: &Options, width: f32, height: f32) -> Self {
        let cam = &options.camera;
        let controls = &options.controls;

        let mut pinhole = PinholeCamera::new();
        pinhole.set_fov_y(cam.fov_y);
        pinhole.set_screen_size(width, height);
        pinhole.set_camera_pos(cam.position.into());

        let camera = match cam.mode {
            CameraMode::Pinhole => Self::Pinhole(pinhole),
            CameraMode::Fps => {
                let mut fps = FpsCamera::with_camera(pinhole);
                fps.set_move_speed(controls.move_speed);
                fps.set_mouse_sensitivity(controls.mouse_sensitivity);
                fps.set_bindings(options.keybindings.clone());
                fps.init_fps(
                    cam.position.into(),
                    cam.yaw.to_radians(),
                    cam.pitch.to_radians(),
                );
                Self::Fps(fps)
            }
            CameraMode::Orbit => {
                let mut orbit = OrbitCamera::with_camera(
                    pinhole,
                    cam.focus_point.into(),
                    cam.distance,
                );
                orbit.set_speeds(
                    controls.rotate_speed,
                    controls.pan_speed,
                    controls.zoom_speed,
                );
                Self::Orbit(orbit)
            }
        };
        log::debug!(
            "camera created: {:?} at {:?}, fov {}°, screen {width}x{height}",
            cam.mode,
            camera.pinhole().position(),
            cam.fov_y,
        );
        camera
    }

    /// The active behavior.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        match self {
            Self::Pinhole(_) => CameraMode::Pinhole,
            Self::Fps(_) => CameraMode::Fps,
            Self::Orbit(_) => CameraMode::Orbit,
        }
    }

    /// Forward a window resize to the pinhole intrinsics.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.pinhole_mut().set_screen_size(width, height);
    }
}

impl CameraRig for Camera {
    fn pinhole(&self) -> &PinholeCamera {
        match self {
            Self::Pinhole(c) => c,
            Self::Fps(c) => c.pinhole(),
            Self::Orbit(c) => c.pinhole(),
        }
    }

    fn pinhole_mut(&mut self) -> &mut PinholeCamera {
        match self {
            Self::Pinhole(c) => c,
            Self::Fps(c) => c.pinhole_mut(),
            Self::Orbit(c) => c.pinhole_mut(),
        }
    }

    fn update(&mut self, input: &InputSampler, dt: f32) {
        match self {
            Self::Pinhole(c) => c.update(input, dt),
            Self::Fps(c) => c.update(input, dt),
            Self::Orbit(c) => c.update(input, dt),
        }
    }
}
