use serde::{Deserialize, Serialize};

use crate::input::keys::{self, lowercase};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Raw key codes driving each FPS movement direction. A direction is active
/// while any of its codes is held.
///
/// ```toml
/// [keybindings]
/// forward = [87, 119]
/// up = [32]
/// ```
pub struct MovementBindings {
    /// Walk forward.
    pub forward: Vec<i32>,
    /// Walk backward.
    pub backward: Vec<i32>,
    /// Strafe left.
    pub left: Vec<i32>,
    /// Strafe right.
    pub right: Vec<i32>,
    /// Rise along world Y.
    pub up: Vec<i32>,
    /// Sink along world Y.
    pub down: Vec<i32>,
}

impl Default for MovementBindings {
    fn default() -> Self {
        let letter = |code: i32| vec![code, lowercase(code)];
        Self {
            forward: letter(keys::W),
            backward: letter(keys::S),
            left: letter(keys::A),
            right: letter(keys::D),
            up: vec![keys::SPACE],
            down: letter(keys::C),
        }
    }
}
