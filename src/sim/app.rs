use anyhow::Result;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use super::surface::SurfaceRenderer;
use crate::core::canvas::{Canvas, MonoCanvas};
use crate::core::engine::Engine;
use crate::core::timer::FrameLimiter;
use crate::display::expand_rgba;

/// Preview window options.
#[derive(Debug, Clone)]
pub struct SimOptions {
    pub title: String,
    /// Window pixels per canvas pixel at startup.
    pub scale: u32,
    /// Frame rate cap for the update loop.
    pub fps: f32,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            title: "sprite-engine".to_string(),
            scale: 8,
            fps: 60.0,
        }
    }
}

/// Open a preview window and call `update` once per displayed frame.
///
/// `update` is where the caller runs `engine.frame(...)` and draws its
/// sprites; the resulting canvas is uploaded and presented afterwards.
/// Returns when the window closes or Escape is pressed.
pub fn run<F>(engine: Engine<MonoCanvas>, options: SimOptions, update: F) -> Result<()>
where
    F: FnMut(&mut Engine<MonoCanvas>),
{
    let event_loop = EventLoop::new()?;
    let mut app = App {
        engine,
        update,
        options,
        limiter: None,
        window: None,
        renderer: None,
    };

    event_loop.run_app(&mut app)?;
    Ok(())
}

struct App<F> {
    engine: Engine<MonoCanvas>,
    update: F,
    options: SimOptions,
    limiter: Option<FrameLimiter>,
    window: Option<Arc<Window>>,
    renderer: Option<SurfaceRenderer>,
}

impl<F: FnMut(&mut Engine<MonoCanvas>)> ApplicationHandler for App<F> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let (width, height) = self.engine.canvas().dimensions();
        let attrs = Window::default_attributes()
            .with_title(self.options.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                width * self.options.scale,
                height * self.options.scale,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let renderer = match SurfaceRenderer::new(window.clone(), width, height) {
            Ok(renderer) => renderer,
            Err(e) => {
                eprintln!("Failed to initialize preview renderer: {e}");
                event_loop.exit();
                return;
            }
        };

        self.limiter = Some(FrameLimiter::new(self.options.fps));
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Some(limiter) = &mut self.limiter {
                    limiter.wait();
                }

                (self.update)(&mut self.engine);

                if let Some(renderer) = &self.renderer {
                    let pixels = expand_rgba(self.engine.canvas());
                    if let Err(e) = renderer.render(&pixels) {
                        eprintln!("Render error: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
