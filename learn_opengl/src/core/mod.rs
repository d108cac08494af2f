pub mod app;
pub mod events;
pub mod layer;
pub mod logging;
pub mod math;
pub mod platform;
pub mod rendering;
pub mod time;
pub mod utils;
pub mod windowing;
