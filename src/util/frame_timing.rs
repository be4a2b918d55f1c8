use web_time::Instant;

/// Longest frame time handed to the camera. A stall (window drag, debugger
/// break) would otherwise teleport an FPS camera.
pub const MAX_FRAME_DELTA: f32 = 0.1;

/// Weight of the newest sample in the smoothed FPS.
const FPS_SMOOTHING: f32 = 0.05;

/// Measures the time between frames and keeps a smoothed frame rate.
#[derive(Debug, Clone)]
pub struct FrameTiming {
    last_frame: Instant,
    smoothed_fps: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Start timing from now. The FPS estimate starts at 60.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            smoothed_fps: 60.0,
        }
    }

    /// Close the current frame and return its duration in seconds, capped
    /// at [`MAX_FRAME_DELTA`]. This is the `dt` the camera rigs take.
    pub fn end_frame(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32())
    }

    fn record(&mut self, frame_time: f32) -> f32 {
        if frame_time > 0.0 {
            self.smoothed_fps +=
                (frame_time.recip() - self.smoothed_fps) * FPS_SMOOTHING;
        }
        frame_time.min(MAX_FRAME_DELTA)
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}
