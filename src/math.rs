//! Vector primitives and the orientation conventions shared by the camera
//! rigs.
//!
//! `Vec2`/`Vec3` are glam's value types. Normalization throughout the crate
//! goes through [`Vec3::normalize_or_zero`], so a zero-length input yields the
//! zero vector rather than NaNs.

pub use glam::{Vec2, Vec3};

/// One degree in radians.
pub const DEGREE: f32 = std::f32::consts::PI / 180.0;

/// Largest vertical look angle reachable through an orientation update
/// (89°, in radians). Stops the basis from degenerating at the poles.
pub const PITCH_LIMIT: f32 = 89.0 * DEGREE;

/// World-space up direction.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Orthonormal camera frame derived from pitch/yaw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Right axis.
    pub right: Vec3,
    /// Up axis (world-up side of the view plane).
    pub up: Vec3,
    /// Viewing direction.
    pub forward: Vec3,
}

/// Clamp a pitch angle (radians) to `[-PITCH_LIMIT, PITCH_LIMIT]`.
#[inline]
#[must_use]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
}

/// Build the camera frame for the given angles (radians).
///
/// Yaw 0 / pitch 0 looks down `-Z`. `right` is `forward × up_world` and `up`
/// is `right × forward`, which keeps the frame right-handed for every yaw.
#[must_use]
pub fn basis_from_angles(pitch: f32, yaw: f32) -> Basis {
    let forward = Vec3::new(
        pitch.cos() * yaw.sin(),
        pitch.sin(),
        -pitch.cos() * yaw.cos(),
    )
    .normalize_or_zero();
    let right = forward.cross(WORLD_UP).normalize_or_zero();
    let up = right.cross(forward).normalize_or_zero();
    Basis { right, up, forward }
}

/// Walking direction on the horizontal plane for a yaw angle.
#[inline]
#[must_use]
pub fn horizontal_forward(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, -yaw.cos()).normalize_or_zero()
}

/// Strafing direction on the horizontal plane for a yaw angle.
#[inline]
#[must_use]
pub fn horizontal_right(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, yaw.sin()).normalize_or_zero()
}

/// Sphere around a point cloud: centered on the centroid, reaching the
/// farthest point. `None` for an empty slice.
#[must_use]
pub fn bounding_sphere(points: &[Vec3]) -> Option<(Vec3, f32)> {
    if points.is_empty() {
        return None;
    }
    let center = points.iter().sum::<Vec3>() / points.len() as f32;
    let radius = points
        .iter()
        .map(|p| p.distance(center))
        .fold(0.0, f32::max);
    Some((center, radius))
}
