use glow::{Context, HasContext};

use crate::core::math::Colorf32;
use crate::core::platform::opengl::opengl_buffer::OpenGLVertexBuffer;
use crate::core::platform::opengl::opengl_shader::OpenGLShader;
use crate::core::platform::opengl::opengl_vertex_array::OpenGLVertexArray;
use crate::core::rendering::buffer::{BufferError, BufferLayout};
use crate::core::rendering::render_api::{
    RenderAPIBackend, RenderError, ResourceKind, ShaderHandle, VertexArrayHandle,
    VertexBufferHandle,
};
use crate::core::rendering::shader::ShaderSrc;
use crate::core::utils::handle::Allocator;

/// Render backend implemented on top of glow.
///
/// The GL context must be current on the thread using this backend. That is
/// the case for the thread that created the [crate::core::platform::winit_window::WinitWindow].
pub struct OpenGLRenderBackend {
    clear_color: Colorf32,
    shader_allocator: Allocator<OpenGLShader>,
    vertex_array_allocator: Allocator<OpenGLVertexArray>,
    vertex_buffer_allocator: Allocator<OpenGLVertexBuffer>,
    gl: Context,
}

impl OpenGLRenderBackend {
    pub fn new(gl: Context) -> Self {
        let mut result = OpenGLRenderBackend {
            clear_color: Colorf32::new(0.0, 0.0, 0.0, 1.0),
            shader_allocator: Allocator::new(),
            vertex_array_allocator: Allocator::new(),
            vertex_buffer_allocator: Allocator::new(),
            gl,
        };
        result.init();
        result
    }

    fn init(&mut self) {
        log::info!("Glow OpenGL successfully initialized!");
        log::info!("\tOpenGL Version: {}", self.get_string(glow::VERSION));
        log::info!("\tOpenGL Renderer: {}", self.get_string(glow::RENDERER));
        log::info!("\tOpenGL Vendor: {}", self.get_string(glow::VENDOR));

        self.enable_debug_output();
    }

    /// Forward driver debug messages to the logger, when the context supports it
    #[cfg(not(target_vendor = "apple"))]
    fn enable_debug_output(&mut self) {
        if !self.gl.supports_debug() {
            return;
        }

        unsafe {
            self.gl.enable(glow::DEBUG_OUTPUT);
            self.gl.debug_message_callback(debug_message_callback);
        }
        log::debug!("OpenGL debug output enabled");
    }

    #[cfg(target_vendor = "apple")]
    fn enable_debug_output(&mut self) {}

    #[inline(always)]
    fn get_string(&self, variant: u32) -> String {
        unsafe { self.gl.get_parameter_string(variant) }
    }

    fn shader_mut(&mut self, handle: ShaderHandle) -> Result<&mut OpenGLShader, RenderError> {
        self.shader_allocator
            .get_mut(handle)
            .ok_or(RenderError::InvalidHandle {
                kind: ResourceKind::Shader,
                handle,
            })
    }

    fn vertex_buffer(
        &self,
        handle: VertexBufferHandle,
    ) -> Result<&OpenGLVertexBuffer, RenderError> {
        self.vertex_buffer_allocator
            .get(handle)
            .ok_or(RenderError::InvalidHandle {
                kind: ResourceKind::VertexBuffer,
                handle,
            })
    }

    fn vertex_array(&self, handle: VertexArrayHandle) -> Result<&OpenGLVertexArray, RenderError> {
        self.vertex_array_allocator
            .get(handle)
            .ok_or(RenderError::InvalidHandle {
                kind: ResourceKind::VertexArray,
                handle,
            })
    }

    /// Bind the program and resolve the uniform location for a uniform upload
    fn prepare_uniform(
        &mut self,
        handle: ShaderHandle,
        name: &str,
    ) -> Result<glow::NativeUniformLocation, RenderError> {
        self.bind_shader(handle)?;
        let gl = &self.gl;
        let shader = self
            .shader_allocator
            .get_mut(handle)
            .ok_or(RenderError::InvalidHandle {
                kind: ResourceKind::Shader,
                handle,
            })?;
        Ok(shader.uniform_location(gl, name)?)
    }
}

impl RenderAPIBackend for OpenGLRenderBackend {
    fn set_clear_color(&mut self, color: Colorf32) {
        self.clear_color = color;
        unsafe {
            self.gl.clear_color(
                self.clear_color.x,
                self.clear_color.y,
                self.clear_color.z,
                self.clear_color.w,
            );
        }
    }

    fn clear(&mut self) {
        unsafe {
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn set_viewport(&mut self, x: u32, y: u32, width: u32, height: u32) {
        log::debug!("Viewport set to ({x}, {y}, {width}, {height})");
        unsafe {
            self.gl
                .viewport(x as i32, y as i32, width as i32, height as i32);
        }
    }

    fn draw_arrays(&mut self, vertex_array: VertexArrayHandle) -> Result<(), RenderError> {
        let va = self.vertex_array(vertex_array)?;
        let vb_handle = va
            .vertex_buffer
            .ok_or(RenderError::MissingVertexBuffer(vertex_array))?;
        let count = self.vertex_buffer(vb_handle)?.vertex_count as i32;

        unsafe {
            self.gl.bind_vertex_array(Some(va.native_array));
            self.gl.draw_arrays(glow::TRIANGLES, 0, count);
        }
        Ok(())
    }

    // Resource creation and destruction
    fn create_vertex_buffer(
        &mut self,
        vertex_data: &[f32],
        layout: BufferLayout,
    ) -> Result<VertexBufferHandle, RenderError> {
        layout.validate()?;
        let bytes: &[u8] = bytemuck::cast_slice(vertex_data);
        let vertex_count = layout.vertex_count(bytes.len())?;

        let native_buffer = unsafe {
            let native_buffer = self
                .gl
                .create_buffer()
                .map_err(BufferError::CreationError)?;

            // From here on, calls on ARRAY_BUFFER configure this buffer
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(native_buffer));
            self.gl
                .buffer_data_u8_slice(glow::ARRAY_BUFFER, bytes, glow::STATIC_DRAW);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            native_buffer
        };

        let handle = self.vertex_buffer_allocator.allocate(OpenGLVertexBuffer {
            native_buffer,
            buffer_layout: layout,
            vertex_count,
        });
        log::debug!("Created vertex buffer {handle:?} with {vertex_count} vertices");
        Ok(handle)
    }

    fn destroy_vertex_buffer(&mut self, handle: VertexBufferHandle) {
        let Some(buffer) = self.vertex_buffer_allocator.free(handle) else {
            log::warn!("Trying to destroy unexistent vertex buffer {handle:?}");
            return;
        };

        unsafe { self.gl.delete_buffer(buffer.native_buffer) }
        log::debug!("Destroyed vertex buffer {handle:?}");
    }

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle, RenderError> {
        let native_array = unsafe {
            self.gl
                .create_vertex_array()
                .map_err(BufferError::CreationError)?
        };

        let handle = self.vertex_array_allocator.allocate(OpenGLVertexArray {
            native_array,
            vertex_buffer: None,
        });
        log::debug!("Created vertex array {handle:?}");
        Ok(handle)
    }

    fn destroy_vertex_array(&mut self, handle: VertexArrayHandle) {
        let Some(vertex_array) = self.vertex_array_allocator.free(handle) else {
            log::warn!("Trying to destroy unexistent vertex array {handle:?}");
            return;
        };

        unsafe {
            self.gl.delete_vertex_array(vertex_array.native_array);
        }
        log::debug!("Destroyed vertex array {handle:?}");
    }

    fn create_shader(
        &mut self,
        name: &str,
        vertex_src: ShaderSrc,
        fragment_src: ShaderSrc,
    ) -> Result<ShaderHandle, RenderError> {
        let vertex_code = vertex_src.load()?;
        let fragment_code = fragment_src.load()?;

        let shader = OpenGLShader::create(&self.gl, name, &vertex_code, &fragment_code)?;
        let handle = self.shader_allocator.allocate(shader);
        log::debug!("Created shader '{name}' as {handle:?}");
        Ok(handle)
    }

    fn destroy_shader(&mut self, handle: ShaderHandle) {
        let Some(shader) = self.shader_allocator.free(handle) else {
            log::warn!("Trying to destroy unexistent shader {handle:?}");
            return;
        };

        unsafe {
            self.gl.delete_program(shader.native_program);
        }
        log::debug!("Destroyed shader '{}'", shader.name);
    }

    // Bindings
    fn bind_shader(&mut self, handle: ShaderHandle) -> Result<(), RenderError> {
        let program = self.shader_mut(handle)?.native_program;
        unsafe {
            self.gl.use_program(Some(program));
        }
        Ok(())
    }

    fn unbind_shader(&mut self) {
        unsafe {
            self.gl.use_program(None);
        }
    }

    // Operations: Vertex Array
    fn set_vertex_array_vertex_buffer(
        &mut self,
        va_handle: VertexArrayHandle,
        vb_handle: VertexBufferHandle,
    ) -> Result<(), RenderError> {
        let native_array = self.vertex_array(va_handle)?.native_array;
        let vertex_buffer = self.vertex_buffer(vb_handle)?;
        let layout = vertex_buffer.get_buffer_layout();
        let stride = layout.get_stride() as i32;

        unsafe {
            let gl = &self.gl;
            gl.bind_vertex_array(Some(native_array));
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer.native_buffer));

            // Element i of the layout feeds `layout (location = i)`
            for (i, element) in layout.iter().enumerate() {
                let location = i as u32;
                let component_count = element.get_component_count() as i32;
                let offset = element.get_offset() as i32;
                gl.vertex_attrib_pointer_f32(
                    location,
                    component_count,
                    glow::FLOAT,
                    element.is_normalized(),
                    stride,
                    offset,
                );
                gl.enable_vertex_attrib_array(location);
            }

            // The attribute pointers keep the buffer referenced, unbinding is safe
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_vertex_array(None);
        }

        if let Some(vertex_array) = self.vertex_array_allocator.get_mut(va_handle) {
            vertex_array.vertex_buffer = Some(vb_handle);
        }
        Ok(())
    }

    fn get_vertex_array_vertex_buffer(
        &self,
        va_handle: VertexArrayHandle,
    ) -> Option<VertexBufferHandle> {
        self.vertex_array_allocator
            .get(va_handle)
            .and_then(|va| va.vertex_buffer)
    }

    // Operations: Shaders
    fn get_shader_name(&self, handle: ShaderHandle) -> Option<&str> {
        self.shader_allocator
            .get(handle)
            .map(|shader| shader.name.as_str())
    }

    fn shader_exists(&self, handle: ShaderHandle) -> bool {
        self.shader_allocator.is_live(handle)
    }

    fn set_shader_uniform_bool(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: bool,
    ) -> Result<(), RenderError> {
        self.set_shader_uniform_i32(handle, name, value as i32)
    }

    fn set_shader_uniform_i32(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: i32,
    ) -> Result<(), RenderError> {
        let location = self.prepare_uniform(handle, name)?;
        unsafe {
            self.gl.uniform_1_i32(Some(&location), value);
        }
        Ok(())
    }

    fn set_shader_uniform_f32(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: f32,
    ) -> Result<(), RenderError> {
        let location = self.prepare_uniform(handle, name)?;
        unsafe {
            self.gl.uniform_1_f32(Some(&location), value);
        }
        Ok(())
    }

    fn set_shader_uniform_fvec4(
        &mut self,
        handle: ShaderHandle,
        name: &str,
        value: &glam::Vec4,
    ) -> Result<(), RenderError> {
        let location = self.prepare_uniform(handle, name)?;
        unsafe {
            self.gl
                .uniform_4_f32(Some(&location), value.x, value.y, value.z, value.w);
        }
        Ok(())
    }
}

impl Drop for OpenGLRenderBackend {
    fn drop(&mut self) {
        let leaked = self.shader_allocator.len()
            + self.vertex_array_allocator.len()
            + self.vertex_buffer_allocator.len();
        if leaked > 0 {
            log::warn!("{leaked} GPU resources were never destroyed");
        }
    }
}

#[cfg(not(target_vendor = "apple"))]
fn debug_message_callback(source: u32, ty: u32, id: u32, severity: u32, message: &str) {
    let source = match source {
        glow::DEBUG_SOURCE_API => "API",
        glow::DEBUG_SOURCE_WINDOW_SYSTEM => "Window System",
        glow::DEBUG_SOURCE_SHADER_COMPILER => "Shader Compiler",
        glow::DEBUG_SOURCE_THIRD_PARTY => "Third Party",
        glow::DEBUG_SOURCE_APPLICATION => "Application",
        glow::DEBUG_SOURCE_OTHER => "Other",
        _ => "Unknown",
    };

    let ty = match ty {
        glow::DEBUG_TYPE_ERROR => "Error",
        glow::DEBUG_TYPE_DEPRECATED_BEHAVIOR => "Deprecated Behavior",
        glow::DEBUG_TYPE_UNDEFINED_BEHAVIOR => "Undefined Behavior",
        glow::DEBUG_TYPE_PORTABILITY => "Portability",
        glow::DEBUG_TYPE_PERFORMANCE => "Performance",
        glow::DEBUG_TYPE_MARKER => "Marker",
        glow::DEBUG_TYPE_OTHER => "Other",
        _ => "Unknown",
    };

    match severity {
        glow::DEBUG_SEVERITY_HIGH => log::error!("{ty}-{id} ({source}): {message}"),
        glow::DEBUG_SEVERITY_MEDIUM => log::warn!("{ty}-{id} ({source}): {message}"),
        glow::DEBUG_SEVERITY_LOW => log::info!("{ty}-{id} ({source}): {message}"),
        glow::DEBUG_SEVERITY_NOTIFICATION => log::debug!("{ty}-{id} ({source}): {message}"),
        _ => (),
    }
}
