/// Window trait definitions
///
/// This file provides the traits that should be provided by any platform-specific window implementation.
/// For the winit implementation, see [crate::core::platform::winit_window]
use std::fmt;

use crate::core::events::Event;

/// Configuration of the window and of the OpenGL context attached to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowBuilder {
    pub width: u32,
    pub height: u32,
    pub title: String,
    /// Requested OpenGL core profile version, as (major, minor)
    pub gl_version: (u8, u8),
    pub vsync: bool,
    pub resizable: bool,
}

pub type WindowPtr = Box<dyn WindowDyn>;

pub trait WindowDyn {
    fn get_width(&self) -> u32;

    fn get_height(&self) -> u32;

    fn get_title(&self) -> &str;

    fn set_vsync(&mut self, is_vsync_active: bool) -> Result<(), WindowError>;

    fn get_vsync(&self) -> bool;

    fn should_close(&self) -> bool;

    fn set_should_close(&mut self, should_close: bool);

    /// Process pending native events without blocking and return them translated
    fn poll_events(&mut self) -> Vec<Event>;

    /// Present the frame drawn so far
    fn swap_buffers(&mut self) -> Result<(), WindowError>;
}

impl WindowBuilder {
    pub fn new() -> Self {
        WindowBuilder {
            title: "LearnOpenGL".to_owned(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            vsync: true,
            resizable: true,
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gl_version = (major, minor);
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_resizable(mut self, resizable: bool) -> Self {
        self.resizable = resizable;
        self
    }
}

impl Default for WindowBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub enum WindowError {
    /// Could not create the native event loop
    EventLoop(String),
    /// Could not create the window or find a suitable GL config
    Display(String),
    /// Window creation succeeded but no window was returned
    NoWindow,
    /// Width or height is zero
    ZeroSized { width: u32, height: u32 },
    /// Error from the GL context or surface
    Gl(glutin::error::Error),
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowError::EventLoop(reason) => write!(f, "Failed to create event loop: {reason}"),
            WindowError::Display(reason) => write!(f, "Failed to create window: {reason}"),
            WindowError::NoWindow => write!(f, "Failed to create window: no window was built"),
            WindowError::ZeroSized { width, height } => {
                write!(f, "Window size must be non-zero, got {width}x{height}")
            }
            WindowError::Gl(err) => write!(f, "OpenGL context error: {err}"),
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WindowError::Gl(err) => Some(err),
            _ => None,
        }
    }
}

impl From<glutin::error::Error> for WindowError {
    fn from(err: glutin::error::Error) -> Self {
        WindowError::Gl(err)
    }
}
