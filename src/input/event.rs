/// Platform-agnostic input events.
///
/// These are fed into an [`InputSampler`](super::InputSampler), which applies
/// them to the current-frame state.
///
/// # Example
///
/// ```
/// use pinhole::input::{Action, InputEvent, InputSampler, MouseButton};
///
/// let mut input = InputSampler::new();
/// input.handle_event(InputEvent::MouseButton {
///     button: MouseButton::Left,
///     action: Action::Press,
/// });
/// assert!(input.is_mouse_button_pressed(MouseButton::Left));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Keyboard key changed state.
    Key {
        /// Raw key code (GLFW numbering, see [`keys`](super::keys)).
        code: i32,
        /// Press, repeat or release.
        action: Action,
    },
    /// Mouse button changed state.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// Press or release.
        action: Action,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f64,
        /// Vertical position in physical pixels (grows downward).
        y: f64,
    },
    /// Scroll wheel moved.
    Scroll {
        /// Horizontal scroll amount.
        dx: f64,
        /// Vertical scroll amount (positive = away from the user).
        dy: f64,
    },
}

/// Key/button transition as reported by the windowing layer.
///
/// Raw values follow the release(0) / press(1) / repeat(2) convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Key or button went up.
    Release,
    /// Key or button went down.
    Press,
    /// Key held long enough to auto-repeat.
    Repeat,
}

impl Action {
    /// Decode a raw action code. Anything other than 1 or 2 is a release.
    #[must_use]
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::Press,
            2 => Self::Repeat,
            _ => Self::Release,
        }
    }

    /// Whether the key is down after this transition.
    #[must_use]
    pub fn is_down(self) -> bool {
        matches!(self, Self::Press | Self::Repeat)
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = 3;

    /// Slot of this button in the per-button state tables.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }

    /// Decode a raw button index; `None` for anything outside `0..3`.
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::ElementState> for Action {
    fn from(state: winit::event::ElementState) -> Self {
        match state {
            winit::event::ElementState::Pressed => Self::Press,
            winit::event::ElementState::Released => Self::Release,
        }
    }
}

#[cfg(feature = "viewer")]
impl MouseButton {
    /// Map a winit button; back/forward/other buttons are not tracked.
    #[must_use]
    pub fn from_winit(button: winit::event::MouseButton) -> Option<Self> {
        match button {
            winit::event::MouseButton::Left => Some(Self::Left),
            winit::event::MouseButton::Middle => Some(Self::Middle),
            winit::event::MouseButton::Right => Some(Self::Right),
            _ => None,
        }
    }
}
