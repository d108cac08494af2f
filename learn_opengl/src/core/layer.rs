/// Layers implement user behavior. They provide an API
/// that is called by the application each iteration of the render loop.
///
/// Layers own their GPU resources through handles, and must release them in
/// `on_detach`.
use crate::core::events::Event;
use crate::core::rendering::render_api::{RenderAPIBackend, RenderError};

pub trait Layer {
    /// Create the resources this layer needs
    fn on_attach(&mut self, render: &mut dyn RenderAPIBackend) -> Result<(), RenderError>;

    /// Release every resource created in `on_attach`
    fn on_detach(&mut self, render: &mut dyn RenderAPIBackend);

    /// Issue this frame's draw calls. The color buffer is already cleared.
    fn update(
        &mut self,
        delta_time: f32,
        render: &mut dyn RenderAPIBackend,
    ) -> Result<(), RenderError>;

    // Allow unused variables because this is just an empty default implementation.
    // Don't add _ to the start of their names so that the user has a good
    // autocompletion when implementing this function
    #[allow(unused)]
    fn on_event(&mut self, event: &mut Event) {}
}
