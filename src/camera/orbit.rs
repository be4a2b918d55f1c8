//! Orbital camera circling a focus point.

use glam::{Quat, Vec2, Vec3};

use super::core::PinholeCamera;
use super::rig::CameraRig;
use crate::input::{InputSampler, MouseButton};
use crate::math::bounding_sphere;

/// Closest the eye may get to the focus point.
pub const MIN_DISTANCE: f32 = 1.0;
/// Farthest the eye may get from the focus point.
pub const MAX_DISTANCE: f32 = 1000.0;
/// Distance multiplier applied when framing a point cloud.
const FIT_MARGIN: f32 = 1.5;

/// Camera that orbits a focus point: left drag rotates, right drag pans,
/// scroll zooms.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    camera: PinholeCamera,
    orientation: Quat,
    distance: f32,
    focus_point: Vec3,

    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl OrbitCamera {
    /// Orbit the origin from 10 units down `+Z`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_camera(PinholeCamera::new(), Vec3::ZERO, 10.0)
    }

    /// Wrap a pinhole camera, keeping its intrinsics. The eye is placed
    /// `distance` units from `focus_point` along `+Z`.
    #[must_use]
    pub fn with_camera(
        camera: PinholeCamera,
        focus_point: Vec3,
        distance: f32,
    ) -> Self {
        let mut orbit = Self {
            camera,
            orientation: Quat::IDENTITY,
            distance: distance.clamp(MIN_DISTANCE, MAX_DISTANCE),
            focus_point,
            rotate_speed: 0.01,
            pan_speed: 0.1,
            zoom_speed: 0.05,
        };
        orbit.sync_pinhole();
        orbit
    }

    /// Point the camera circles around.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        self.focus_point
    }

    /// Eye-to-focus distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Current orientation.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// Set rotate (radians per pixel), pan (units per pixel) and zoom
    /// (fraction per scroll unit) sensitivities.
    pub fn set_speeds(&mut self, rotate: f32, pan: f32, zoom: f32) {
        self.rotate_speed = rotate;
        self.pan_speed = pan;
        self.zoom_speed = zoom;
    }

    /// Right, up and back axes of the current orientation.
    fn axes(&self) -> (Vec3, Vec3, Vec3) {
        (
            self.orientation * Vec3::X,
            self.orientation * Vec3::Y,
            self.orientation * Vec3::Z,
        )
    }

    fn set_distance(&mut self, distance: f32) {
        self.distance = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Place the eye on the back axis and copy the orientation into the
    /// pinhole basis (screen-down `y`, forward `z`).
    fn sync_pinhole(&mut self) {
        let (right, up, back) = self.axes();
        self.camera
            .set_camera_pos(self.focus_point + back * self.distance);
        self.camera.set_camera_x(right.normalize_or_zero());
        self.camera.set_camera_y(-up.normalize_or_zero());
        self.camera.set_camera_z(-back.normalize_or_zero());
    }

    /// Rotate by a drag delta in pixels: yaw about the current up axis, then
    /// pitch about the right axis that yaw produced.
    pub fn rotate(&mut self, delta: Vec2) {
        let (right, up, _) = self.axes();
        let turn = -delta * self.rotate_speed;
        let yaw = Quat::from_axis_angle(up, turn.x);
        let pitch = Quat::from_axis_angle(yaw * right, turn.y);
        self.orientation = (pitch * yaw * self.orientation).normalize();
        self.sync_pinhole();
    }

    /// Slide the focus point in the view plane by a drag delta in pixels.
    /// The scene follows the cursor.
    pub fn pan(&mut self, delta: Vec2) {
        let (right, up, _) = self.axes();
        self.focus_point += (up * delta.y - right * delta.x) * self.pan_speed;
        self.sync_pinhole();
    }

    /// Move toward (positive) or away from (negative) the focus point.
    pub fn zoom(&mut self, delta: f32) {
        self.set_distance(self.distance * (1.0 - delta * self.zoom_speed));
        self.sync_pinhole();
    }

    /// Center on `positions` and back off until their bounding sphere fits
    /// the vertical field of view with some margin. No-op when empty.
    pub fn fit_to_positions(&mut self, positions: &[Vec3]) {
        let Some((center, radius)) = bounding_sphere(positions) else {
            return;
        };
        let half_fov = (self.camera.fov_y() * 0.5).to_radians();
        self.focus_point = center;
        self.set_distance(FIT_MARGIN * radius / half_fov.tan());
        self.sync_pinhole();
    }
}

impl CameraRig for OrbitCamera {
    fn pinhole(&self) -> &PinholeCamera {
        &self.camera
    }

    fn pinhole_mut(&mut self) -> &mut PinholeCamera {
        &mut self.camera
    }

    fn update(&mut self, input: &InputSampler, _dt: f32) {
        let rotate = input.mouse_dragged(MouseButton::Left);
        if rotate != Vec2::ZERO {
            self.rotate(rotate);
        }
        let pan = input.mouse_dragged(MouseButton::Right);
        if pan != Vec2::ZERO {
            self.pan(pan);
        }
        let scroll = input.scroll_delta().y;
        if scroll != 0.0 {
            self.zoom(scroll);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;

    const EPS: f32 = 1e-4;

    fn dragging(button: MouseButton, delta: Vec2) -> InputSampler {
        let mut input = InputSampler::new();
        input.on_mouse_button(button, Action::Press);
        input.update();
        input.on_cursor_pos(f64::from(delta.x), f64::from(delta.y));
        input
    }

    #[test]
    fn eye_sits_on_positive_z_and_looks_at_focus() {
        let orbit = OrbitCamera::with_camera(
            PinholeCamera::new(),
            Vec3::new(1.0, 2.0, 3.0),
            5.0,
        );
        let c = orbit.pinhole();
        assert!((c.position() - Vec3::new(1.0, 2.0, 8.0)).length() < EPS);
        assert!((c.basis_z() - Vec3::NEG_Z).length() < EPS);
    }

    #[test]
    fn rotation_keeps_basis_orthonormal_and_distance() {
        let mut orbit = OrbitCamera::new();
        let input = dragging(MouseButton::Left, Vec2::new(37.0, -21.0));
        for _ in 0..20 {
            orbit.update(&input, 0.016);
        }

        let c = orbit.pinhole();
        let (x, y, z) = (c.basis_x(), c.basis_y(), c.basis_z());
        for axis in [x, y, z] {
            assert!((axis.length() - 1.0).abs() < EPS);
        }
        assert!(x.dot(y).abs() < EPS);
        assert!(y.dot(z).abs() < EPS);
        assert!(z.dot(x).abs() < EPS);

        let to_focus = orbit.focus_point() - c.position();
        assert!((to_focus.length() - orbit.distance()).abs() < 1e-3);
        assert!((to_focus.normalize() - z).length() < EPS);
    }

    #[test]
    fn horizontal_drag_orbits_in_ground_plane() {
        let mut orbit = OrbitCamera::new();
        orbit.rotate(Vec2::new(90.0, 0.0));
        orbit.rotate(Vec2::new(-35.0, 0.0));

        let c = orbit.pinhole();
        assert!(c.position().y.abs() < EPS);
        assert!((c.position().length() - 10.0).abs() < 1e-3);
        assert!((c.basis_y() - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn right_drag_pans_focus() {
        let mut orbit = OrbitCamera::new();
        orbit.set_speeds(0.01, 1.0, 0.05);
        let input = dragging(MouseButton::Right, Vec2::new(2.0, 0.0));
        orbit.update(&input, 0.016);
        assert!((orbit.focus_point() - Vec3::new(-2.0, 0.0, 0.0)).length() < EPS);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut orbit = OrbitCamera::new();
        for _ in 0..200 {
            orbit.zoom(10.0);
        }
        assert_eq!(orbit.distance(), MIN_DISTANCE);
        for _ in 0..200 {
            orbit.zoom(-10.0);
        }
        assert_eq!(orbit.distance(), MAX_DISTANCE);
    }

    #[test]
    fn scroll_zooms_in() {
        let mut orbit = OrbitCamera::new();
        let mut input = InputSampler::new();
        input.on_scroll(0.0, 2.0);
        orbit.update(&input, 0.016);
        assert!((orbit.distance() - 9.0).abs() < EPS);
    }

    #[test]
    fn fit_centers_on_centroid() {
        let mut orbit = OrbitCamera::new();
        orbit.fit_to_positions(&[Vec3::new(-4.0, 0.0, 0.0), Vec3::new(4.0, 0.0, 0.0)]);
        assert!(orbit.focus_point().length() < EPS);
        let expected = 4.0 / 30f32.to_radians().tan() * 1.5;
        assert!((orbit.distance() - expected).abs() < 1e-3);

        let before = orbit.clone();
        orbit.fit_to_positions(&[]);
        assert_eq!(orbit, before);
    }
}
