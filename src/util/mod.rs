//! Shared utilities for the driver loop.

/// Measured frame time and smoothed FPS.
pub mod frame_timing;
