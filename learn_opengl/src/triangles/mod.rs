//! The two "Hello Triangle" programs from the LearnOpenGL series, as layers.
mod hello_triangle;
mod hello_triangle_colored;

pub use hello_triangle::*;
pub use hello_triangle_colored::*;
