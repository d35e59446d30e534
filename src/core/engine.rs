use std::time::Instant;

use super::canvas::Canvas;

/// Per-frame metadata handed back from [`Engine::frame`].
#[derive(Debug, Clone, Copy)]
pub struct FrameInfo {
    /// Frame number, starting at 0.
    pub number: u64,
    /// Seconds since the engine was created.
    pub time: f32,
    /// Seconds since the previous frame completed.
    pub delta: f32,
}

/// Owns the shared canvas and runs the per-frame draw pass.
///
/// One frame is: clear the canvas, hand it to the caller's draw pass, then
/// advance the frame counter and clock. The draw pass receives `&mut C`
/// directly - objects never store a reference back to the engine, they get
/// the canvas as an argument when drawn.
#[derive(Debug)]
pub struct Engine<C: Canvas> {
    canvas: C,
    frame: u64,
    started: Instant,
    last_frame: Instant,
}

impl<C: Canvas> Engine<C> {
    pub fn new(canvas: C) -> Self {
        let now = Instant::now();

        Self {
            canvas,
            frame: 0,
            started: now,
            last_frame: now,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    /// Frames completed so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame: clear, draw, advance.
    pub fn frame<F: FnOnce(&mut C)>(&mut self, draw: F) -> FrameInfo {
        self.canvas.clear();
        draw(&mut self.canvas);

        let now = Instant::now();
        let info = FrameInfo {
            number: self.frame,
            time: now.duration_since(self.started).as_secs_f32(),
            delta: now.duration_since(self.last_frame).as_secs_f32(),
        };

        self.frame += 1;
        self.last_frame = now;
        info
    }
}
