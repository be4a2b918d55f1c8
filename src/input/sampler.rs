//! Double-buffered keyboard/mouse state.
//!
//! Raw callbacks mutate the current frame at any time; [`InputSampler::update`]
//! snapshots it into the previous frame exactly once per frame, after the
//! frame's queries. Edge queries and drag deltas compare the two snapshots.

use glam::Vec2;

use super::event::{Action, InputEvent, MouseButton};
use super::keys::KEY_COUNT;

/// Keyboard and mouse state for the current and previous frame.
#[derive(Debug, Clone)]
pub struct InputSampler {
    keys: [bool; KEY_COUNT],
    mouse_pos: Vec2,
    mouse_pos_prev: Vec2,
    mouse_button: [bool; MouseButton::COUNT],
    mouse_button_prev: [bool; MouseButton::COUNT],
    /// Scroll accumulated since the last frame commit.
    scroll: Vec2,
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSampler {
    /// Create a sampler with every key and button up and the cursor at the
    /// origin.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: [false; KEY_COUNT],
            mouse_pos: Vec2::ZERO,
            mouse_pos_prev: Vec2::ZERO,
            mouse_button: [false; MouseButton::COUNT],
            mouse_button_prev: [false; MouseButton::COUNT],
            scroll: Vec2::ZERO,
        }
    }

    // ── Raw event intake ─────────────────────────────────────────────────

    /// Record a key transition. Out-of-range codes are ignored.
    pub fn on_key(&mut self, code: i32, action: Action) {
        if let Some(slot) = key_slot(code) {
            self.keys[slot] = action.is_down();
        }
    }

    /// Record a mouse button transition. Only a press sets the button; any
    /// other action clears it.
    pub fn on_mouse_button(&mut self, button: MouseButton, action: Action) {
        self.mouse_button[button.index()] = action == Action::Press;
    }

    /// [`on_mouse_button`](Self::on_mouse_button) for raw button and action
    /// codes. Buttons outside `0..3` are ignored.
    pub fn on_mouse_button_raw(&mut self, button: i32, action: i32) {
        if let Some(button) = MouseButton::from_index(button) {
            self.on_mouse_button(button, Action::from_raw(action));
        }
    }

    /// [`on_key`](Self::on_key) for a raw action code.
    pub fn on_key_raw(&mut self, code: i32, action: i32) {
        self.on_key(code, Action::from_raw(action));
    }

    /// Overwrite the current cursor position. The previous snapshot is left
    /// alone.
    pub fn on_cursor_pos(&mut self, x: f64, y: f64) {
        self.mouse_pos = Vec2::new(x as f32, y as f32);
    }

    /// Accumulate scroll for this frame.
    pub fn on_scroll(&mut self, dx: f64, dy: f64) {
        self.scroll += Vec2::new(dx as f32, dy as f32);
    }

    /// Apply a platform-agnostic event.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { code, action } => self.on_key(code, action),
            InputEvent::MouseButton { button, action } => {
                self.on_mouse_button(button, action);
            }
            InputEvent::CursorMoved { x, y } => self.on_cursor_pos(x, y),
            InputEvent::Scroll { dx, dy } => self.on_scroll(dx, dy),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Whether a key is currently held. Unknown codes are never held.
    #[must_use]
    pub fn is_key_pressed(&self, code: i32) -> bool {
        key_slot(code).is_some_and(|slot| self.keys[slot])
    }

    /// Whether any of the given keys is held.
    #[must_use]
    pub fn is_any_key_pressed(&self, codes: &[i32]) -> bool {
        codes.iter().any(|&code| self.is_key_pressed(code))
    }

    /// Whether a mouse button is currently held.
    #[must_use]
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_button[button.index()]
    }

    /// Up last frame, down this frame.
    #[must_use]
    pub fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        let i = button.index();
        !self.mouse_button_prev[i] && self.mouse_button[i]
    }

    /// Down last frame, up this frame.
    #[must_use]
    pub fn is_mouse_button_just_released(&self, button: MouseButton) -> bool {
        let i = button.index();
        self.mouse_button_prev[i] && !self.mouse_button[i]
    }

    /// Current cursor position.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Scroll accumulated since the last frame commit.
    #[must_use]
    pub fn scroll_delta(&self) -> Vec2 {
        self.scroll
    }

    /// Cursor motion since the last commit, but only while `button` has been
    /// held through both frames. The press frame itself reports zero so a
    /// fresh click never produces a jump.
    #[must_use]
    pub fn mouse_dragged(&self, button: MouseButton) -> Vec2 {
        let i = button.index();
        if self.mouse_button_prev[i] && self.mouse_button[i] {
            self.mouse_pos - self.mouse_pos_prev
        } else {
            Vec2::ZERO
        }
    }

    // ── Frame boundary ───────────────────────────────────────────────────

    /// Commit the frame: the current cursor and button state become the
    /// previous snapshot and the scroll accumulator resets.
    ///
    /// Call exactly once per frame, after the frame's queries and before the
    /// next frame's events. Calling it twice zeroes every delta; skipping it
    /// makes drag deltas span several frames.
    pub fn update(&mut self) {
        self.mouse_pos_prev = self.mouse_pos;
        self.mouse_button_prev = self.mouse_button;
        self.scroll = Vec2::ZERO;
    }

    /// Alias of [`update`](Self::update) that reads better in a driver loop.
    pub fn commit_frame(&mut self) {
        self.update();
    }
}

fn key_slot(code: i32) -> Option<usize> {
    usize::try_from(code).ok().filter(|&slot| slot < KEY_COUNT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::keys;

    #[test]
    fn key_press_repeat_release() {
        let mut input = InputSampler::new();
        input.on_key(keys::W, Action::Press);
        assert!(input.is_key_pressed(keys::W));
        input.on_key(keys::W, Action::Repeat);
        assert!(input.is_key_pressed(keys::W));
        input.on_key(keys::W, Action::Release);
        assert!(!input.is_key_pressed(keys::W));
    }

    #[test]
    fn out_of_range_keys_are_ignored() {
        let mut input = InputSampler::new();
        input.on_key(-1, Action::Press);
        input.on_key(512, Action::Press);
        input.on_key_raw(10_000, 1);
        assert!(!input.is_key_pressed(-1));
        assert!(!input.is_key_pressed(512));
        assert!(!input.is_key_pressed(10_000));
        input.on_key_raw(511, 1);
        assert!(input.is_key_pressed(511));
    }

    #[test]
    fn mouse_button_only_sets_on_press() {
        let mut input = InputSampler::new();
        input.on_mouse_button_raw(2, 1);
        assert!(input.is_mouse_button_pressed(MouseButton::Right));
        input.on_mouse_button_raw(2, 2);
        assert!(!input.is_mouse_button_pressed(MouseButton::Right));
        input.on_mouse_button_raw(3, 1);
        input.on_mouse_button_raw(-1, 1);
        assert!(!input.is_mouse_button_pressed(MouseButton::Left));
        assert!(!input.is_mouse_button_pressed(MouseButton::Middle));
    }

    #[test]
    fn edge_queries_compare_snapshots() {
        let mut input = InputSampler::new();
        input.on_mouse_button(MouseButton::Left, Action::Press);
        assert!(input.is_mouse_button_just_pressed(MouseButton::Left));
        assert!(!input.is_mouse_button_just_released(MouseButton::Left));

        input.update();
        assert!(input.is_mouse_button_pressed(MouseButton::Left));
        assert!(!input.is_mouse_button_just_pressed(MouseButton::Left));

        input.on_mouse_button(MouseButton::Left, Action::Release);
        assert!(input.is_mouse_button_just_released(MouseButton::Left));
        input.update();
        assert!(!input.is_mouse_button_just_released(MouseButton::Left));
    }

    #[test]
    fn drag_is_zero_on_press_frame() {
        let mut input = InputSampler::new();
        input.on_mouse_button(MouseButton::Left, Action::Press);
        input.on_cursor_pos(10.0, 0.0);
        assert_eq!(input.mouse_dragged(MouseButton::Left), Vec2::ZERO);
    }

    #[test]
    fn drag_reports_delta_once_held_for_a_frame() {
        let mut input = InputSampler::new();

        // Frame 1
        input.on_mouse_button_raw(0, 1);
        input.on_cursor_pos(10.0, 0.0);
        input.update();
        assert_eq!(input.mouse_pos(), Vec2::new(10.0, 0.0));
        assert!(input.is_mouse_button_pressed(MouseButton::Left));

        // Frame 2
        input.on_cursor_pos(15.0, 0.0);
        assert_eq!(input.mouse_dragged(MouseButton::Left), Vec2::new(5.0, 0.0));
        assert_eq!(input.mouse_dragged(MouseButton::Right), Vec2::ZERO);
    }

    #[test]
    fn double_commit_collapses_delta() {
        let mut input = InputSampler::new();
        input.on_mouse_button(MouseButton::Left, Action::Press);
        input.update();
        input.on_cursor_pos(4.0, 3.0);
        input.update();
        input.update();
        assert_eq!(input.mouse_dragged(MouseButton::Left), Vec2::ZERO);
    }

    #[test]
    fn skipped_commits_accumulate_motion() {
        let mut input = InputSampler::new();
        input.on_mouse_button(MouseButton::Left, Action::Press);
        input.update();
        input.on_cursor_pos(4.0, 0.0);
        input.on_cursor_pos(9.0, 2.0);
        assert_eq!(input.mouse_dragged(MouseButton::Left), Vec2::new(9.0, 2.0));
    }

    #[test]
    fn scroll_accumulates_until_commit() {
        let mut input = InputSampler::new();
        input.handle_event(InputEvent::Scroll { dx: 0.0, dy: 1.0 });
        input.handle_event(InputEvent::Scroll { dx: 0.5, dy: 2.0 });
        assert_eq!(input.scroll_delta(), Vec2::new(0.5, 3.0));
        input.commit_frame();
        assert_eq!(input.scroll_delta(), Vec2::ZERO);
    }

    #[test]
    fn handle_event_dispatches() {
        let mut input = InputSampler::new();
        input.handle_event(InputEvent::Key {
            code: keys::SPACE,
            action: Action::Press,
        });
        input.handle_event(InputEvent::CursorMoved { x: 2.0, y: 7.0 });
        assert!(input.is_key_pressed(keys::SPACE));
        assert!(input.is_any_key_pressed(&[keys::C, keys::SPACE]));
        assert!(!input.is_any_key_pressed(&[keys::C]));
        assert_eq!(input.mouse_pos(), Vec2::new(2.0, 7.0));
    }
}
