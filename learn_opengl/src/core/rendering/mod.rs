pub mod buffer;
pub mod render_api;
pub mod shader;
