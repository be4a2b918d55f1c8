// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Real-time pinhole camera control.
//!
//! A pinhole camera model driven by double-buffered keyboard/mouse input,
//! producing an orthonormal view basis and projection aspect each frame.
//!
//! # Key entry points
//!
//! - [`input::InputSampler`] - raw key/button/cursor events in, per-frame
//!   level, edge and drag queries out
//! - [`camera::PinholeCamera`] - position, basis, field of view and the
//!   derived aspect, with a one-shot change flag
//! - [`camera::Camera`] - a pinhole camera with a behavior (static, FPS,
//!   orbit) behind the [`camera::CameraRig`] capability
//! - [`options::Options`] - TOML configuration for the camera and controls
//!
//! # Frame loop
//!
//! ```
//! use pinhole::camera::{Camera, CameraRig, CameraUniform};
//! use pinhole::input::{keys, InputSampler};
//!
//! let mut camera = Camera::default();
//! let mut input = InputSampler::new();
//!
//! // Raw events arrive from the window system...
//! input.on_key_raw(keys::W, 1);
//!
//! // ...then once per frame:
//! camera.update(&input, 1.0 / 60.0);
//! if camera.notify_changed() {
//!     let uniform = CameraUniform::from_camera(camera.pinhole());
//!     assert!(uniform.position[2] < 0.0);
//! }
//! input.update();
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;
