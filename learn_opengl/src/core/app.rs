//! This module implements the entire Application workflow: owning the window
//! and the render backend, and driving a layer through the render loop.
use std::fmt;
use std::time::Instant;

use crate::core::events::{Event, EventType};
use crate::core::layer::Layer;
use crate::core::math::Colorf32;
use crate::core::platform::opengl::opengl_render_backend::OpenGLRenderBackend;
use crate::core::platform::winit_window::WinitWindow;
use crate::core::rendering::render_api::{RenderAPIBackend, RenderAPIBackendPtr, RenderError};
use crate::core::time::Time;
use crate::core::windowing::{WindowBuilder, WindowDyn, WindowError, WindowPtr};

/// Teal background used by every LearnOpenGL sample
pub const DEFAULT_CLEAR_COLOR: Colorf32 = Colorf32::new(0.2, 0.3, 0.3, 1.0);

pub struct App {
    // The backend goes first so it is dropped while the GL context still exists
    render: RenderAPIBackendPtr,
    window: WindowPtr,
    time: Time,
    clear_color: Colorf32,
    pending_events: Vec<Event>,
}

#[derive(Debug)]
pub enum AppError {
    Window(WindowError),
    Render(RenderError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Window(err) => fmt::Display::fmt(err, f),
            AppError::Render(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Window(err) => Some(err),
            AppError::Render(err) => Some(err),
        }
    }
}

impl From<WindowError> for AppError {
    fn from(err: WindowError) -> Self {
        AppError::Window(err)
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        AppError::Render(err)
    }
}

impl App {
    /// Build an application out of any window and render backend
    pub fn new(window: WindowPtr, render: RenderAPIBackendPtr) -> Self {
        App {
            render,
            window,
            time: Time::new(Instant::now()),
            clear_color: DEFAULT_CLEAR_COLOR,
            pending_events: Vec::new(),
        }
    }

    /// Open a native window with an OpenGL context and a glow backend drawing to it
    pub fn create(window_builder: WindowBuilder) -> Result<Self, AppError> {
        let window = WinitWindow::create(window_builder)?;
        let gl = window.create_gl_context();
        let mut render = OpenGLRenderBackend::new(gl);
        render.set_viewport(0, 0, window.get_width(), window.get_height());

        Ok(App::new(Box::new(window), Box::new(render)))
    }

    pub fn set_clear_color(&mut self, color: Colorf32) {
        self.clear_color = color;
    }

    #[inline(always)]
    pub fn get_time(&self) -> &Time {
        &self.time
    }

    #[inline(always)]
    pub fn get_window(&self) -> &WindowPtr {
        &self.window
    }

    /// Run the render loop with `layer` until the window is asked to close.
    ///
    /// The layer is always detached before returning, even on error.
    pub fn run(&mut self, layer: &mut dyn Layer) -> Result<(), AppError> {
        log::info!("Starting to run application!");
        self.render.set_clear_color(self.clear_color);

        if let Err(err) = layer.on_attach(self.render.as_mut()) {
            // Resources created before the failure still have to go
            layer.on_detach(self.render.as_mut());
            return Err(err.into());
        }

        self.time = Time::new(Instant::now());
        let result = self.render_loop(layer);

        // Closing the application, detach the layer
        layer.on_detach(self.render.as_mut());
        log::info!(
            "Rendered {} frames in {:.2}s",
            self.time.frame_count(),
            self.time.elapsed().as_secs_f32()
        );

        result
    }

    fn render_loop(&mut self, layer: &mut dyn Layer) -> Result<(), AppError> {
        while !self.window.should_close() {
            self.time.step(Instant::now());

            self.process_input(layer);

            // Fill window with color
            self.render.clear();

            layer.update(self.time.delta_seconds(), self.render.as_mut())?;

            self.window.swap_buffers()?;

            let mut events = self.window.poll_events();
            self.pending_events.append(&mut events);
        }

        Ok(())
    }

    /// Give the layer the first chance at every pending event, then apply the
    /// default handling to whatever it left unhandled
    fn process_input(&mut self, layer: &mut dyn Layer) {
        for mut event in std::mem::take(&mut self.pending_events) {
            layer.on_event(&mut event);
            if event.is_handled() {
                continue;
            }

            if event.requests_close() {
                log::debug!("Close requested by {:?}", event.get_type());
                self.window.set_should_close(true);
            } else if let EventType::WindowResized { width, height } = event.get_type() {
                self.render.set_viewport(0, 0, width, height);
            }
        }
    }
}
