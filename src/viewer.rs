//! Standalone driver window backed by winit.
//!
//! The viewer pumps window events into an [`InputSampler`] and runs
//! [`drive_frame`] on every redraw. It draws nothing; camera changes are
//! logged at debug level.
//!
//! ```no_run
//! # use pinhole::viewer::Viewer;
//! Viewer::builder()
//!     .with_title("camera")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    camera::{drive_frame, Camera, CameraRig, CameraUniform},
    error::PinholeError,
    input::{keys, Action, InputEvent, InputSampler, MouseButton},
    options::Options,
    util::frame_timing::FrameTiming,
};

/// Scroll units per pixel for touchpads that report pixel deltas.
const PIXEL_SCROLL_SCALE: f64 = 0.01;

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with default options and the title "Pinhole".
    fn new() -> Self {
        Self {
            options: None,
            title: "Pinhole".into(),
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            options: self.options.unwrap_or_default(),
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window whose input drives a camera.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    pub fn run(self) -> Result<(), PinholeError> {
        let event_loop =
            EventLoop::new().map_err(|e| PinholeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = ViewerApp {
            window: None,
            camera: None,
            input: InputSampler::new(),
            timing: FrameTiming::new(),
            uniform: CameraUniform::default(),
            options: self.options,
            title: self.title,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| PinholeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    camera: Option<Camera>,
    input: InputSampler,
    timing: FrameTiming,
    /// Last snapshot handed to the (absent) renderer.
    uniform: CameraUniform,
    options: Options,
    title: String,
}

/// Screen extents as floats, never zero.
fn screen_size(inner: winit::dpi::PhysicalSize<u32>) -> (f32, f32) {
    (inner.width.max(1) as f32, inner.height.max(1) as f32)
}

impl ViewerApp {
    /// One frame: update the camera from this frame's input, publish a new
    /// uniform if it moved, then commit the input frame.
    fn frame(&mut self) {
        let dt = self.timing.end_frame();
        let Some(camera) = &mut self.camera else {
            return;
        };

        if let Some(uniform) = drive_frame(camera, &mut self.input, dt) {
            self.uniform = uniform;
            log::debug!(
                "camera moved: pos {:?} forward {:?} aspect {:?}, {} byte \
                 uniform ({:.0} fps)",
                self.uniform.position,
                self.uniform.basis_z,
                self.uniform.aspect,
                self.uniform.as_bytes().len(),
                self.timing.fps(),
            );
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 720.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = screen_size(window.inner_size());
        let camera = Camera::from_options(&self.options, width, height);
        log::info!(
            "{:?} camera ready, {width}x{height}, fov {}°",
            camera.mode(),
            camera.pinhole().fov_y(),
        );

        window.request_redraw();
        self.window = Some(window);
        self.camera = Some(camera);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                let (width, height) = screen_size(size);
                if let Some(camera) = &mut self.camera {
                    camera.resize(width, height);
                }
            }

            WindowEvent::RedrawRequested => {
                self.frame();
                if let Some(w) = &self.window {
                    w.request_redraw();
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                let Some(code) = keys::from_winit(key) else {
                    log::trace!("unmapped key {key:?}");
                    return;
                };
                if code == keys::ESCAPE && event.state.is_pressed() {
                    event_loop.exit();
                    return;
                }
                let action = if event.repeat {
                    Action::Repeat
                } else {
                    Action::from(event.state)
                };
                self.input.handle_event(InputEvent::Key { code, action });
            }

            WindowEvent::MouseInput { button, state, .. } => {
                if let Some(button) = MouseButton::from_winit(button) {
                    self.input.handle_event(InputEvent::MouseButton {
                        button,
                        action: Action::from(state),
                    });
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.input.handle_event(InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                });
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let (dx, dy) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => {
                        (f64::from(x), f64::from(y))
                    }
                    MouseScrollDelta::PixelDelta(pos) => {
                        (pos.x * PIXEL_SCROLL_SCALE, pos.y * PIXEL_SCROLL_SCALE)
                    }
                };
                self.input.handle_event(InputEvent::Scroll { dx, dy });
            }

            WindowEvent::Focused(false) => {
                // Keys released while unfocused never arrive.
                self.input = InputSampler::new();
            }

            _ => {}
        }
    }
}
