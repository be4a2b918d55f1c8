//! Camera system.
//!
//! A pinhole model holding position, view basis and projection aspect, plus
//! the behaviors that steer it from sampled input: free-fly FPS and orbit.

/// Pinhole camera state and its GPU uniform.
pub mod core;
/// First-person free-fly behavior.
pub mod fps;
/// Orbit-around-a-point behavior.
pub mod orbit;
/// The shared behavior capability and the [`Camera`] selector.
pub mod rig;

pub use self::core::{CameraUniform, PinholeCamera};
pub use fps::FpsCamera;
pub use orbit::OrbitCamera;
pub use rig::{drive_frame, Camera, CameraRig, FIXED_TIME_STEP};
