//! Raw key codes.
//!
//! Codes use GLFW numbering: printable keys are their uppercase ASCII value,
//! named keys start at 256. Only the keys the crate binds by default get a
//! constant; any code in `0..KEY_COUNT` is accepted by the sampler.

/// Size of the key table. Codes outside `0..KEY_COUNT` are ignored.
pub const KEY_COUNT: usize = 512;

/// Space bar.
pub const SPACE: i32 = 32;
/// `A`.
pub const A: i32 = 65;
/// `C`.
pub const C: i32 = 67;
/// `D`.
pub const D: i32 = 68;
/// `E`.
pub const E: i32 = 69;
/// `Q`.
pub const Q: i32 = 81;
/// `S`.
pub const S: i32 = 83;
/// `W`.
pub const W: i32 = 87;
/// Escape.
pub const ESCAPE: i32 = 256;
/// Right arrow.
pub const RIGHT: i32 = 262;
/// Left arrow.
pub const LEFT: i32 = 263;
/// Down arrow.
pub const DOWN: i32 = 264;
/// Up arrow.
pub const UP: i32 = 265;
/// Left shift.
pub const LEFT_SHIFT: i32 = 340;
/// Left control.
pub const LEFT_CONTROL: i32 = 341;
/// Right shift.
pub const RIGHT_SHIFT: i32 = 344;

/// Lowercase variant of a letter code (`'W'` → `'w'`), for bindings that
/// should match whichever case the platform reports.
#[must_use]
pub fn lowercase(code: i32) -> i32 {
    if (A..=A + 25).contains(&code) {
        code + 32
    } else {
        code
    }
}

/// Translate a winit physical key into a raw code.
#[cfg(feature = "viewer")]
#[must_use]
pub fn from_winit(key: winit::keyboard::KeyCode) -> Option<i32> {
    use winit::keyboard::KeyCode;

    let code = match key {
        KeyCode::Space => SPACE,
        KeyCode::Quote => 39,
        KeyCode::Comma => 44,
        KeyCode::Minus => 45,
        KeyCode::Period => 46,
        KeyCode::Slash => 47,
        KeyCode::Digit0 => 48,
        KeyCode::Digit1 => 49,
        KeyCode::Digit2 => 50,
        KeyCode::Digit3 => 51,
        KeyCode::Digit4 => 52,
        KeyCode::Digit5 => 53,
        KeyCode::Digit6 => 54,
        KeyCode::Digit7 => 55,
        KeyCode::Digit8 => 56,
        KeyCode::Digit9 => 57,
        KeyCode::Semicolon => 59,
        KeyCode::Equal => 61,
        KeyCode::KeyA => A,
        KeyCode::KeyB => 66,
        KeyCode::KeyC => C,
        KeyCode::KeyD => D,
        KeyCode::KeyE => E,
        KeyCode::KeyF => 70,
        KeyCode::KeyG => 71,
        KeyCode::KeyH => 72,
        KeyCode::KeyI => 73,
        KeyCode::KeyJ => 74,
        KeyCode::KeyK => 75,
        KeyCode::KeyL => 76,
        KeyCode::KeyM => 77,
        KeyCode::KeyN => 78,
        KeyCode::KeyO => 79,
        KeyCode::KeyP => 80,
        KeyCode::KeyQ => Q,
        KeyCode::KeyR => 82,
        KeyCode::KeyS => S,
        KeyCode::KeyT => 84,
        KeyCode::KeyU => 85,
        KeyCode::KeyV => 86,
        KeyCode::KeyW => W,
        KeyCode::KeyX => 88,
        KeyCode::KeyY => 89,
        KeyCode::KeyZ => 90,
        KeyCode::BracketLeft => 91,
        KeyCode::Backslash => 92,
        KeyCode::BracketRight => 93,
        KeyCode::Backquote => 96,
        KeyCode::Escape => ESCAPE,
        KeyCode::Enter => 257,
        KeyCode::Tab => 258,
        KeyCode::Backspace => 259,
        KeyCode::Insert => 260,
        KeyCode::Delete => 261,
        KeyCode::ArrowRight => RIGHT,
        KeyCode::ArrowLeft => LEFT,
        KeyCode::ArrowDown => DOWN,
        KeyCode::ArrowUp => UP,
        KeyCode::PageUp => 266,
        KeyCode::PageDown => 267,
        KeyCode::Home => 268,
        KeyCode::End => 269,
        KeyCode::CapsLock => 280,
        KeyCode::F1 => 290,
        KeyCode::F2 => 291,
        KeyCode::F3 => 292,
        KeyCode::F4 => 293,
        KeyCode::F5 => 294,
        KeyCode::F6 => 295,
        KeyCode::F7 => 296,
        KeyCode::F8 => 297,
        KeyCode::F9 => 298,
        KeyCode::F10 => 299,
        KeyCode::F11 => 300,
        KeyCode::F12 => 301,
        KeyCode::ShiftLeft => LEFT_SHIFT,
        KeyCode::ControlLeft => LEFT_CONTROL,
        KeyCode::AltLeft => 342,
        KeyCode::ShiftRight => RIGHT_SHIFT,
        KeyCode::ControlRight => 345,
        KeyCode::AltRight => 346,
        _ => return None,
    };
    Some(code)
}
