use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::math::DEGREE;

/// Default vertical field of view in degrees.
pub const DEFAULT_FOV_Y: f32 = 60.0;

/// Pinhole camera: eye position, view basis and the projection aspect.
///
/// The basis is right (`x`), screen-down (`y`) and forward (`z`). The
/// orientation-driven rigs keep it orthonormal; the raw setters here do not
/// check anything.
#[derive(Debug, Clone, PartialEq)]
pub struct PinholeCamera {
    fov_y: f32,
    screen_width: f32,
    screen_height: f32,

    position: Vec3,
    basis_x: Vec3,
    basis_y: Vec3,
    basis_z: Vec3,

    aspect: Vec2,
    changed: bool,
}

impl Default for PinholeCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl PinholeCamera {
    /// Camera at the origin looking down `-Z`, 60° field of view, unit
    /// screen.
    #[must_use]
    pub fn new() -> Self {
        let mut camera = Self {
            fov_y: DEFAULT_FOV_Y,
            screen_width: 1.0,
            screen_height: 1.0,
            position: Vec3::ZERO,
            basis_x: Vec3::X,
            basis_y: Vec3::NEG_Y,
            basis_z: Vec3::NEG_Z,
            aspect: Vec2::ZERO,
            changed: false,
        };
        camera.update_aspect();
        camera
    }

    fn update_aspect(&mut self) {
        self.aspect.y = (self.fov_y * 0.5 * DEGREE).tan();
        self.aspect.x = self.aspect.y * self.screen_width / self.screen_height;
    }

    /// Half-extents of the image plane at unit distance:
    /// `y = tan(fov_y / 2)`, `x = y * width / height`.
    #[must_use]
    pub fn aspect(&self) -> Vec2 {
        self.aspect
    }

    /// Eye position in world space.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Right axis.
    #[must_use]
    pub fn basis_x(&self) -> Vec3 {
        self.basis_x
    }

    /// Screen-down axis.
    #[must_use]
    pub fn basis_y(&self) -> Vec3 {
        self.basis_y
    }

    /// Forward axis.
    #[must_use]
    pub fn basis_z(&self) -> Vec3 {
        self.basis_z
    }

    /// Logical screen width.
    #[must_use]
    pub fn screen_width(&self) -> f32 {
        self.screen_width
    }

    /// Logical screen height.
    #[must_use]
    pub fn screen_height(&self) -> f32 {
        self.screen_height
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov_y(&self) -> f32 {
        self.fov_y
    }

    /// Move the eye.
    pub fn set_camera_pos(&mut self, position: Vec3) {
        self.position = position;
        self.changed = true;
    }

    /// Overwrite the right axis. Orthonormality is the caller's problem.
    pub fn set_camera_x(&mut self, x: Vec3) {
        self.basis_x = x;
        self.changed = true;
    }

    /// Overwrite the screen-down axis. Orthonormality is the caller's
    /// problem.
    pub fn set_camera_y(&mut self, y: Vec3) {
        self.basis_y = y;
        self.changed = true;
    }

    /// Overwrite the forward axis. Orthonormality is the caller's problem.
    pub fn set_camera_z(&mut self, z: Vec3) {
        self.basis_z = z;
        self.changed = true;
    }

    /// Set the logical screen size and recompute the aspect.
    ///
    /// A zero height yields an infinite (or NaN) `aspect.x`; nothing rejects
    /// it.
    pub fn set_screen_size(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        self.update_aspect();
        self.changed = true;
    }

    /// Set the vertical field of view (degrees) and recompute the aspect.
    pub fn set_fov_y(&mut self, fov_y: f32) {
        self.fov_y = fov_y;
        self.update_aspect();
        self.changed = true;
    }

    /// Returns `true` once after any mutation, then `false` until the next
    /// one.
    pub fn notify_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// World-to-camera transform. Rows are the basis axes, so camera space is
    /// x right, y down, z forward.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        let (x, y, z) = (self.basis_x, self.basis_y, self.basis_z);
        let eye = self.position;
        Mat4::from_cols(
            Vec4::new(x.x, y.x, z.x, 0.0),
            Vec4::new(x.y, y.y, z.y, 0.0),
            Vec4::new(x.z, y.z, z.z, 0.0),
            Vec4::new(-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0),
        )
    }

    /// World-space direction of the ray through a point on the image plane.
    ///
    /// `ndc` spans `[-1, 1]` on both axes with `y` growing downward, the
    /// same way the basis is laid out.
    #[must_use]
    pub fn primary_ray(&self, ndc: Vec2) -> Vec3 {
        (self.basis_z
            + self.basis_x * (ndc.x * self.aspect.x)
            + self.basis_y * (ndc.y * self.aspect.y))
            .normalize_or_zero()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the pinhole parameters a ray generator needs.
pub struct CameraUniform {
    /// Eye position in world space.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fov_y: f32,
    /// Right axis.
    pub basis_x: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad0: f32,
    /// Screen-down axis.
    pub basis_y: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad1: f32,
    /// Forward axis.
    pub basis_z: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad2: f32,
    /// Image-plane half extents at unit distance.
    pub aspect: [f32; 2],
    /// Padding for GPU alignment.
    pub(crate) _pad3: [f32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::from_camera(&PinholeCamera::new())
    }
}

impl CameraUniform {
    /// Snapshot the camera's current state.
    #[must_use]
    pub fn from_camera(camera: &PinholeCamera) -> Self {
        Self {
            position: camera.position.to_array(),
            fov_y: camera.fov_y,
            basis_x: camera.basis_x.to_array(),
            _pad0: 0.0,
            basis_y: camera.basis_y.to_array(),
            _pad1: 0.0,
            basis_z: camera.basis_z.to_array(),
            _pad2: 0.0,
            aspect: camera.aspect.to_array(),
            _pad3: [0.0; 2],
        }
    }

    /// Raw bytes for a buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_aspect_consistent(camera: &PinholeCamera) {
        let expected_y = (camera.fov_y() * 0.5).to_radians().tan();
        let expected_x =
            expected_y * camera.screen_width() / camera.screen_height();
        assert!((camera.aspect().y - expected_y).abs() < EPS);
        assert!((camera.aspect().x - expected_x).abs() < EPS);
    }

    #[test]
    fn default_aspect_matches_sixty_degrees() {
        let camera = PinholeCamera::new();
        assert_eq!(camera.fov_y(), 60.0);
        assert_aspect_consistent(&camera);
        assert!((camera.aspect().y - 30f32.to_radians().tan()).abs() < EPS);
    }

    #[test]
    fn aspect_tracks_every_intrinsic_setter() {
        let mut camera = PinholeCamera::new();
        let steps: [(Option<f32>, Option<(f32, f32)>); 5] = [
            (Some(90.0), None),
            (None, Some((1920.0, 1080.0))),
            (Some(45.0), None),
            (None, Some((640.0, 480.0))),
            (Some(10.0), Some((300.0, 900.0))),
        ];
        for (fov, size) in steps {
            if let Some(fov) = fov {
                camera.set_fov_y(fov);
                assert_aspect_consistent(&camera);
            }
            if let Some((w, h)) = size {
                camera.set_screen_size(w, h);
                assert_aspect_consistent(&camera);
            }
        }
    }

    #[test]
    fn zero_height_gives_infinite_aspect() {
        let mut camera = PinholeCamera::new();
        camera.set_screen_size(100.0, 0.0);
        assert!(camera.aspect().x.is_infinite());
    }

    #[test]
    fn notify_changed_is_one_shot() {
        let mut camera = PinholeCamera::new();
        assert!(!camera.notify_changed());

        camera.set_camera_pos(Vec3::ONE);
        assert!(camera.notify_changed());
        assert!(!camera.notify_changed());

        camera.set_fov_y(70.0);
        camera.set_camera_z(Vec3::Z);
        assert!(camera.notify_changed());
        assert!(!camera.notify_changed());
    }

    #[test]
    fn unpolled_dirty_flag_stays_set() {
        let mut camera = PinholeCamera::new();
        camera.set_screen_size(4.0, 3.0);
        camera.set_camera_x(Vec3::Y);
        camera.set_camera_y(Vec3::X);
        assert!(camera.notify_changed());
    }

    #[test]
    fn raw_setters_accept_non_orthonormal_axes() {
        let mut camera = PinholeCamera::new();
        camera.set_camera_x(Vec3::new(2.0, 0.0, 0.0));
        camera.set_camera_y(Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(camera.basis_x(), camera.basis_y());
    }

    #[test]
    fn view_matrix_maps_eye_and_forward_point() {
        let mut camera = PinholeCamera::new();
        camera.set_camera_pos(Vec3::new(1.0, 2.0, 3.0));
        let view = camera.view_matrix();

        let eye = view.transform_point3(camera.position());
        assert!(eye.length() < EPS);

        let ahead = view.transform_point3(camera.position() + camera.basis_z());
        assert!((ahead - Vec3::Z).length() < EPS);

        let above = view.transform_point3(camera.position() + Vec3::Y);
        assert!((above - Vec3::NEG_Y).length() < EPS);
    }

    #[test]
    fn primary_ray_through_center_is_forward() {
        let mut camera = PinholeCamera::new();
        camera.set_screen_size(16.0, 9.0);
        let center = camera.primary_ray(Vec2::ZERO);
        assert!((center - camera.basis_z()).length() < EPS);

        // Top edge of a 90° view is 45° above the axis.
        camera.set_fov_y(90.0);
        let top = camera.primary_ray(Vec2::new(0.0, -1.0));
        assert!((top.dot(camera.basis_z()) - 45f32.to_radians().cos()).abs() < EPS);
        assert!(top.y > 0.0);
    }

    #[test]
    fn uniform_is_sixteen_byte_aligned_rows() {
        assert_eq!(size_of::<CameraUniform>(), 80);
        let mut camera = PinholeCamera::new();
        camera.set_camera_pos(Vec3::new(4.0, 5.0, 6.0));
        let uniform = CameraUniform::from_camera(&camera);
        assert_eq!(uniform.position, [4.0, 5.0, 6.0]);
        assert_eq!(uniform.basis_z, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.as_bytes().len(), 80);
    }
}
