//! Free-fly first-person camera.

use glam::Vec3;

use super::core::PinholeCamera;
use super::rig::{CameraRig, FIXED_TIME_STEP};
use crate::input::{InputSampler, MouseButton};
use crate::math::{
    basis_from_angles, clamp_pitch, horizontal_forward, horizontal_right,
};
use crate::options::MovementBindings;

/// Default walking speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
/// Default mouse-look sensitivity in radians per pixel.
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 0.003;

/// Pinhole camera steered by pitch/yaw angles, WASD-style movement and
/// left-button mouse look.
#[derive(Debug, Clone, PartialEq)]
pub struct FpsCamera {
    camera: PinholeCamera,
    pitch: f32,
    yaw: f32,
    move_speed: f32,
    mouse_sensitivity: f32,
    bindings: MovementBindings,
}

impl Default for FpsCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FpsCamera {
    /// FPS camera at the origin looking down `-Z`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_camera(PinholeCamera::new())
    }

    /// Wrap an existing pinhole camera. Its basis is rebuilt from zero
    /// angles; position and intrinsics are kept.
    #[must_use]
    pub fn with_camera(camera: PinholeCamera) -> Self {
        let mut fps = Self {
            camera,
            pitch: 0.0,
            yaw: 0.0,
            move_speed: DEFAULT_MOVE_SPEED,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            bindings: MovementBindings::default(),
        };
        fps.update_orientation();
        fps
    }

    /// Pitch in radians, within ±89°.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Yaw in radians. Not wrapped.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Walking speed in world units per second.
    #[must_use]
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Radians of rotation per pixel of drag.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Key codes driving each movement direction.
    #[must_use]
    pub fn bindings(&self) -> &MovementBindings {
        &self.bindings
    }

    /// Set the walking speed.
    pub fn set_move_speed(&mut self, speed: f32) {
        self.move_speed = speed;
    }

    /// Set the mouse-look sensitivity.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Replace the movement key bindings.
    pub fn set_bindings(&mut self, bindings: MovementBindings) {
        self.bindings = bindings;
    }

    /// Place the camera and set its angles (radians). Pitch is clamped to
    /// ±89° like every other orientation update.
    pub fn init_fps(&mut self, position: Vec3, yaw: f32, pitch: f32) {
        self.camera.set_camera_pos(position);
        self.pitch = pitch;
        self.yaw = yaw;
        self.update_orientation();
    }

    /// Turn by the given angles (radians). Pitch is clamped, yaw is free.
    pub fn rotate(&mut self, delta_pitch: f32, delta_yaw: f32) {
        self.pitch += delta_pitch;
        self.yaw += delta_yaw;
        self.update_orientation();
    }

    fn update_orientation(&mut self) {
        self.pitch = clamp_pitch(self.pitch);
        let basis = basis_from_angles(self.pitch, self.yaw);
        self.camera.set_camera_z(basis.forward);
        self.camera.set_camera_x(basis.right);
        // Screen-space y grows downward.
        self.camera.set_camera_y(-basis.up);
    }

    /// Walk along the yaw direction on the horizontal plane. Looking up or
    /// down does not change the speed.
    pub fn move_forward(&mut self, distance: f32) {
        let pos = self.camera.position() + horizontal_forward(self.yaw) * distance;
        self.camera.set_camera_pos(pos);
    }

    /// Strafe on the horizontal plane.
    pub fn move_right(&mut self, distance: f32) {
        let pos = self.camera.position() + horizontal_right(self.yaw) * distance;
        self.camera.set_camera_pos(pos);
    }

    /// Rise along world Y.
    pub fn move_up(&mut self, distance: f32) {
        let pos = self.camera.position() + Vec3::Y * distance;
        self.camera.set_camera_pos(pos);
    }

    /// [`CameraRig::update`] with the nominal 60 Hz frame time.
    pub fn update_fixed(&mut self, input: &InputSampler) {
        self.update(input, FIXED_TIME_STEP);
    }
}

impl CameraRig for FpsCamera {
    fn pinhole(&self) -> &PinholeCamera {
        &self.camera
    }

    fn pinhole_mut(&mut self) -> &mut PinholeCamera {
        &mut self.camera
    }

    /// Left-button drag looks around, movement keys walk. Simultaneous keys
    /// add up, so diagonal movement is faster than axis-aligned movement.
    fn update(&mut self, input: &InputSampler, dt: f32) {
        let drag = input.mouse_dragged(MouseButton::Left) * self.mouse_sensitivity;
        if drag.x != 0.0 || drag.y != 0.0 {
            // Mouse up looks up.
            self.rotate(-drag.y, drag.x);
        }

        let step = self.move_speed * dt;
        let held = |codes: &[i32]| input.is_any_key_pressed(codes);
        let b = &self.bindings;
        let (forward, backward) = (held(&b.forward), held(&b.backward));
        let (right, left) = (held(&b.right), held(&b.left));
        let (up, down) = (held(&b.up), held(&b.down));

        if forward {
            self.move_forward(step);
        }
        if backward {
            self.move_forward(-step);
        }
        if right {
            self.move_right(step);
        }
        if left {
            self.move_right(-step);
        }
        if up {
            self.move_up(step);
        }
        if down {
            self.move_up(-step);
        }
    }
}
