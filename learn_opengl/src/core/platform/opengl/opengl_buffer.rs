use glow::NativeBuffer;

use crate::core::rendering::buffer::BufferLayout;

pub struct OpenGLVertexBuffer {
    pub(super) native_buffer: NativeBuffer,
    pub(super) buffer_layout: BufferLayout,
    pub(super) vertex_count: usize,
}

impl OpenGLVertexBuffer {
    #[inline(always)]
    pub(super) fn get_buffer_layout(&self) -> &BufferLayout {
        &self.buffer_layout
    }
}
