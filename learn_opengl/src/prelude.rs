pub use crate::core::app::{App, AppError};
pub use crate::core::events::{Event, EventType, KeyCode};
pub use crate::core::layer::Layer;
pub use crate::core::logging::{init_logging, LoggingConfig};
pub use crate::core::math::Colorf32;
pub use crate::core::rendering::render_api::RenderAPIBackend;
pub use crate::core::windowing::WindowBuilder;
