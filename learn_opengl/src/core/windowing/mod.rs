/// All things related to the windowing system
mod window;
pub use window::*;
