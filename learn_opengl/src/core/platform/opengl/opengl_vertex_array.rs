use glow::NativeVertexArray;

use crate::core::rendering::render_api::VertexBufferHandle;

pub struct OpenGLVertexArray {
    pub(super) native_array: NativeVertexArray,
    pub(super) vertex_buffer: Option<VertexBufferHandle>,
}
