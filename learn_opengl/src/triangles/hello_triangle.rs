use crate::core::layer::Layer;
use crate::core::rendering::buffer::{BufferElement, BufferLayout};
use crate::core::rendering::render_api::{
    RenderAPIBackend, RenderError, ShaderHandle, VertexArrayHandle, VertexBufferHandle,
};
use crate::core::rendering::shader::{ShaderDataType, ShaderSrc};

pub const HELLO_TRIANGLE_VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
   gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

pub const HELLO_TRIANGLE_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;
void main()
{
   FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

/// Positions of the triangle in normalized device coordinates
#[rustfmt::skip]
pub const HELLO_TRIANGLE_VERTICES: [f32; 9] = [
    -0.5, -0.5, 0.0,
     0.5, -0.5, 0.0,
     0.0,  0.5, 0.0,
];

/// Draws a single orange triangle
#[derive(Debug, Default)]
pub struct HelloTriangle {
    shader: Option<ShaderHandle>,
    vertex_buffer: Option<VertexBufferHandle>,
    vertex_array: Option<VertexArrayHandle>,
}

impl HelloTriangle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertex_layout() -> BufferLayout {
        BufferLayout::from_elements(vec![BufferElement::new(
            "aPos",
            ShaderDataType::Float3,
            false,
        )])
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

impl Layer for HelloTriangle {
    fn on_attach(&mut self, render: &mut dyn RenderAPIBackend) -> Result<(), RenderError> {
        self.shader = Some(render.create_shader(
            "hello_triangle",
            ShaderSrc::from(HELLO_TRIANGLE_VERTEX_SHADER),
            ShaderSrc::from(HELLO_TRIANGLE_FRAGMENT_SHADER),
        )?);

        let vertex_buffer =
            render.create_vertex_buffer(&HELLO_TRIANGLE_VERTICES, Self::vertex_layout())?;
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
