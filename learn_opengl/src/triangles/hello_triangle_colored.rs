use std::path::Path;

use crate::core::layer::Layer;
use crate::core::rendering::buffer::{BufferElement, BufferLayout};
use crate::core::rendering::render_api::{
    RenderAPIBackend, RenderError, ShaderHandle, VertexArrayHandle, VertexBufferHandle,
};
use crate::core::rendering::shader::{ShaderDataType, ShaderSrc};

pub const COLORED_TRIANGLE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
layout (location = 1) in vec3 aColor;

out vec3 ourColor;

void main()
{
    gl_Position = vec4(aPos, 1.0);
    ourColor = aColor;
}
"#;

pub const COLORED_TRIANGLE_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;
in vec3 ourColor;

void main()
{
    FragColor = vec4(ourColor, 1.0);
}
"#;

/// Interleaved position and color for each vertex
#[rustfmt::skip]
pub const COLORED_TRIANGLE_VERTICES: [f32; 18] = [
    // positions        // colors
     0.5, -0.5, 0.0,    1.0, 0.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,    0.0, 1.0, 0.0, // bottom left
     0.0,  0.5, 0.0,    0.0, 0.0, 1.0, // top
];

/// Draws a triangle whose vertex colors are interpolated over its surface
#[derive(Debug)]
pub struct HelloTriangleColored {
    vertex_src: ShaderSrc,
    fragment_src: ShaderSrc,
    shader: Option<ShaderHandle>,
    vertex_buffer: Option<VertexBufferHandle>,
    vertex_array: Option<VertexArrayHandle>,
}

impl Default for HelloTriangleColored {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloTriangleColored {
    /// Use the shaders embedded in this crate
    pub fn new() -> Self {
        Self::with_shader_sources(
            ShaderSrc::from(COLORED_TRIANGLE_VERTEX_SHADER),
            ShaderSrc::from(COLORED_TRIANGLE_FRAGMENT_SHADER),
        )
    }

    /// Read the shaders from disk when the layer is attached
    pub fn from_files(vertex_path: impl AsRef<Path>, fragment_path: impl AsRef<Path>) -> Self {
        Self::with_shader_sources(
            ShaderSrc::File(vertex_path.as_ref().to_path_buf()),
            ShaderSrc::File(fragment_path.as_ref().to_path_buf()),
        )
    }

    pub fn with_shader_sources(vertex_src: ShaderSrc, fragment_src: ShaderSrc) -> Self {
        HelloTriangleColored {
            vertex_src,
            fragment_src,
            shader: None,
            vertex_buffer: None,
            vertex_array: None,
        }
    }

    pub fn vertex_layout() -> BufferLayout {
        BufferLayout::from_elements(vec![
            BufferElement::new("aPos", ShaderDataType::Float3, false),
            BufferElement::new("aColor", ShaderDataType::Float3, false),
        ])
    }

    #[inline(always)]
    pub fn get_shader(&self) -> Option<ShaderHandle> {
        self.shader
    }

    #[inline(always)]
    pub fn get_vertex_array(&self) -> Option<VertexArrayHandle> {
        self.vertex_array
    }
}

impl Layer for HelloTriangleColored {
    fn on_attach(&mut self, render: &mut dyn RenderAPIBackend) -> Result<(), RenderError> {
        self.shader = Some(render.create_shader(
            "hello_triangle_colored",
            self.vertex_src.clone(),
            self.fragment_src.clone(),
        )?);

        let vertex_buffer =
            render.create_vertex_buffer(&COLORED_TRIANGLE_VERTICES, Self::vertex_layout())?;
        self.vertex_buffer = Some(vertex_buffer);

        let vertex_array = render.create_vertex_array()?;
        self.vertex_array = Some(vertex_array);
        render.set_vertex_array_vertex_buffer(vertex_array, vertex_buffer)
    }

    fn on_detach(&mut self, render: &mut dyn RenderAPIBackend) {
        if let Some(vertex_array) = self.vertex_array.take() {
            render.destroy_vertex_array(vertex_array);
        }
        if let Some(vertex_buffer) = self.vertex_buffer.take() {
            render.destroy_vertex_buffer(vertex_buffer);
        }
        if let Some(shader) = self.shader.take() {
            render.destroy_shader(shader);
        }
    }

    fn update(
        &mut self,
        _delta_time: f32,
        render: &mut dyn RenderAPIBackend,
    ) -> Result<(), RenderError> {
        if let (Some(shader), Some(vertex_array)) = (self.shader, self.vertex_array) {
            render.bind_shader(shader)?;
            render.draw_arrays(vertex_array)?;
        }
        Ok(())
    }
}
