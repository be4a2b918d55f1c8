//! Input handling: event types, raw key codes, and the double-buffered
//! sampler the camera rigs read from.

/// Platform-agnostic input events.
pub mod event;
/// Raw key codes and the winit key mapping.
pub mod keys;
/// Current/previous frame keyboard and mouse state.
pub mod sampler;

pub use event::{Action, InputEvent, MouseButton};
pub use sampler::InputSampler;
