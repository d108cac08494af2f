use std::fmt;

use crate::core::math::Colorf32;
use crate::core::rendering::buffer::{BufferError, BufferLayout};
use crate::core::rendering::shader::{ShaderError, ShaderSrc};
use crate::core::utils::handle::Handle;

pub type VertexBufferHandle = Handle;
pub type VertexArrayHandle = Handle;
pub type ShaderHandle = Handle;

/// Kind of resource a handle was expected to point to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Shader,
    VertexBuffer,
    VertexArray,
}

#[derive(Debug)]
pub enum RenderError {
    Shader(ShaderError),
    Buffer(BufferError),
    /// The handle does not point to a live resource
    InvalidHandle { kind: ResourceKind, handle: Handle },
    /// Tried to draw a vertex array with no vertex buffer attached
    MissingVertexBuffer(VertexArrayHandle),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Shader(err) => fmt::Display::fmt(err, f),
            RenderError::Buffer(err) => fmt::Display::fmt(err, f),
            RenderError::InvalidHandle { kind, handle } => {
                write!(f, "Handle {handle:?} does not point to a live {kind:?}")
            }
            RenderError::MissingVertexBuffer(handle) => {
                write!(f, "Vertex array {handle:?} has no vertex buffer to draw")
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Shader(err) => Some(err),
            RenderError::Buffer(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShaderError> for RenderError {
    fn from(err: ShaderError) -> Self {
        RenderError::Shader(err)
    }
}

impl From<BufferError> for RenderError {
    fn from(err: BufferError) -> Self {
        RenderError::Buffer(err)
    }
}

/// This is the behaviour that a render api instance should implement,
/// translating the platform-specific details of the API to this trait.
///
/// Every resource is owned by the backend and referred to by handle.
pub trait RenderAPIBackend {
    fn set_clear_color(&mut self, color: Colorf32);
    /// Fill the color buffer with the current clear color
    fn clear(&mut self);
    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32);
    /// Draw every vertex of the vertex array as triangles with the bound shader
    fn draw_arrays(&mut self, vertex_array: VertexArrayHandle) -> Result<(), RenderError>;

    // Resource creation and destruction
    fn create_vertex_buffer(
        &mut self,
        vertex_data: &[f32],
        layout: BufferLayout,
    ) -> Result<VertexBufferHandle, RenderError>;
    fn destroy_vertex_buffer(&mut self, handle: VertexBufferHandle);
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle, RenderError>;
    fn destroy_vertex_array(&mut self, handle: VertexArrayHandle);
    fn create_shader(
        &mut self,
        name: &str,
        vertex_src: ShaderSrc,
        fragment_src: ShaderSrc,
    ) -> Result<ShaderHandle, RenderError>;
    fn destroy_shader(&mut self, handle: ShaderHandle);

    // Bindings
    fn bind_shader(&mut self, handle: ShaderHandle) -> Result<(), RenderError>;
    fn unbind_shader(&mut self);

    // Operations: Vertex Array
    fn set_vertex_array_vertex_buffer(
        &mut self,
        va_handle: VertexArrayHandle,
        vb_handle: VertexBufferHandle,
    ) -> Result<(), RenderError>;
    fn get_vertex_array_vertex_buffer(
        &self,
        va_handle: VertexArrayHandle,
    ) -> Option<VertexBufferHandle>;

    // Operations: Shaders
    fn get_shader_name(&self, handle: ShaderHandle) -> Option<&str>;
    fn shader_exists(&self, handle: ShaderHandle) -> bool;
    fn set_shader_uniform_bool(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: bool,
    ) -> Result<(), RenderError>;
    fn set_shader_uniform_i32(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: i32,
    ) -> Result<(), RenderError>;
    fn set_shader_uniform_f32(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: f32,
    ) -> Result<(), RenderError>;
    fn set_shader_uniform_fvec4(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: &glam::Vec4,
    ) -> Result<(), RenderError>;
}

pub type RenderAPIBackendPtr = Box<dyn RenderAPIBackend>;
