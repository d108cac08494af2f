use std::cell::RefCell;
use std::rc::Rc;

use crate::core::app::{App, AppError, DEFAULT_CLEAR_COLOR};
use crate::core::events::{Event, EventType, KeyCode};
use crate::core::layer::Layer;
use crate::core::math::Colorf32;
use crate::core::rendering::render_api::{RenderAPIBackend, RenderError};
use crate::core::rendering::shader::ShaderError;
use crate::tests::shared_mocks::{MockRenderBackend, MockWindow, RenderCall};
use crate::triangles::HelloTriangle;

const ESCAPE: EventType = EventType::KeyPressed {
    key: KeyCode::Escape,
    repeat: false,
};

fn count(calls: &[RenderCall], expected: &RenderCall) -> usize {
    calls.iter().filter(|call| *call == expected).count()
}

#[test]
fn test_escape_closes_window() {
    let window = MockWindow::new(800, 600).with_script(vec![vec![ESCAPE]]);
    let window_state = window.state();
    let render = MockRenderBackend::new();
    let calls = render.call_log();
    let live = render.live_counter();

    let mut app = App::new(Box::new(window), Box::new(render));
    let mut layer = HelloTriangle::new();
    app.run(&mut layer).unwrap();

    // The escape polled after the first frame is processed at the start of the second one
    let state = window_state.borrow();
    assert!(state.should_close);
    assert_eq!(state.swaps, 2);
    assert_eq!(state.polls, 2);
    assert_eq!(app.get_time().frame_count(), 2);
    assert_eq!(*live.borrow(), 0);

    let calls = calls.borrow();
    assert_eq!(calls[0], RenderCall::SetClearColor(DEFAULT_CLEAR_COLOR));
    assert_eq!(count(&calls, &RenderCall::Clear), 2);
    assert_eq!(count(&calls, &RenderCall::DrawArrays { vertex_count: 3 }), 2);
    assert_eq!(
        calls.last(),
        Some(&RenderCall::DestroyShader("hello_triangle".to_owned()))
    );
}

#[test]
fn test_frame_order() {
    let window = MockWindow::new(800, 600).with_script(vec![vec![EventType::WindowClose]]);
    let render = MockRenderBackend::new();
    let calls = render.call_log();

    let mut app = App::new(Box::new(window), Box::new(render));
    app.run(&mut HelloTriangle::new()).unwrap();

    // Every frame clears before drawing
    let calls = calls.borrow();
    let frame: Vec<_> = calls
        .iter()
        .skip_while(|call| **call != RenderCall::Clear)
        .take(3)
        .cloned()
        .collect();
    assert_eq!(
        frame,
        vec![
            RenderCall::Clear,
            RenderCall::BindShader("hello_triangle".to_owned()),
            RenderCall::DrawArrays { vertex_count: 3 },
        ]
    );
}

#[test]
fn test_closed_window_renders_nothing() {
    let window = MockWindow::new(800, 600).closed();
    let window_state = window.state();
    let render = MockRenderBackend::new();
    let calls = render.call_log();
    let live = render.live_counter();

    let mut app = App::new(Box::new(window), Box::new(render));
    app.run(&mut HelloTriangle::new()).unwrap();

    assert_eq!(window_state.borrow().swaps, 0);
    assert_eq!(count(&calls.borrow(), &RenderCall::Clear), 0);
    assert_eq!(*live.borrow(), 0);
}

#[test]
fn test_resize_updates_viewport() {
    let window = MockWindow::new(800, 600).with_script(vec![
        vec![EventType::WindowResized {
            width: 1024,
            height: 768,
        }],
        vec![EventType::WindowClose],
    ]);
    let render = MockRenderBackend::new();
    let calls = render.call_log();

    let mut app = App::new(Box::new(window), Box::new(render));
    app.run(&mut HelloTriangle::new()).unwrap();

    assert_eq!(
        count(&calls.borrow(), &RenderCall::SetViewport(0, 0, 1024, 768)),
        1
    );
}

#[test]
fn test_custom_clear_color() {
    let window = MockWindow::new(800, 600).closed();
    let render = MockRenderBackend::new();
    let calls = render.call_log();
    let color = Colorf32::new(1.0, 0.0, 1.0, 1.0);

    let mut app = App::new(Box::new(window), Box::new(render));
    app.set_clear_color(color);
    app.run(&mut HelloTriangle::new()).unwrap();

    assert_eq!(calls.borrow()[0], RenderCall::SetClearColor(color));
}

/// Swallows escape presses and remembers every event it saw
#[derive(Default)]
struct EscapeEater {
    seen: Rc<RefCell<Vec<EventType>>>,
}

impl Layer for EscapeEater {
    fn on_attach(&mut self, _render: &mut dyn RenderAPIBackend) -> Result<(), RenderError> {
        Ok(())
    }

    fn on_detach(&mut self, _render: &mut dyn RenderAPIBackend) {}

    fn update(
        &mut self,
        _delta_time: f32,
        _render: &mut dyn RenderAPIBackend,
    ) -> Result<(), RenderError> {
        Ok(())
    }

    fn on_event(&mut self, event: &mut Event) {
        self.seen.borrow_mut().push(event.get_type());
        if event.get_type() == ESCAPE {
            event.set_handled();
        }
    }
}

#[test]
fn test_layer_can_handle_events() {
    let window = MockWindow::new(800, 600).with_script(vec![
        vec![ESCAPE],
        vec![ESCAPE, EventType::KeyReleased { key: KeyCode::Escape }],
        vec![EventType::WindowClose],
    ]);
    let window_state = window.state();
    let mut layer = EscapeEater::default();
    let seen = layer.seen.clone();

    let mut app = App::new(Box::new(window), Box::new(MockRenderBackend::new()));
    app.run(&mut layer).unwrap();

    // Escape was consumed by the layer, only the close request stopped the loop
    assert_eq!(window_state.borrow().swaps, 4);
    assert_eq!(seen.borrow().len(), 4);
    assert_eq!(seen.borrow().last(), Some(&EventType::WindowClose));
}

/// Fails its update on the given frame
struct FailingLayer {
    inner: HelloTriangle,
    fail_on_frame: usize,
    frame: usize,
}

impl Layer for FailingLayer {
    fn on_attach(&mut self, render: &mut dyn RenderAPIBackend) -> Result<(), RenderError> {
        self.inner.on_attach(render)
    }

    fn on_detach(&mut self, render: &mut dyn RenderAPIBackend) {
        self.inner.on_detach(render)
    }

    fn update(
        &mut self,
        delta_time: f32,
        render: &mut dyn RenderAPIBackend,
    ) -> Result<(), RenderError> {
        self.frame += 1;
        if self.frame == self.fail_on_frame {
            return Err(ShaderError::LinkError("lost program".to_owned()).into());
        }
        self.inner.update(delta_time, render)
    }
}

#[test]
fn test_update_error_stops_loop_and_detaches() {
    let window = MockWindow::new(800, 600);
    let window_state = window.state();
    let render = MockRenderBackend::new();
    let live = render.live_counter();
    let mut layer = FailingLayer {
        inner: HelloTriangle::new(),
        fail_on_frame: 3,
        frame: 0,
    };

    let mut app = App::new(Box::new(window), Box::new(render));
    let err = app.run(&mut layer).unwrap_err();

    assert!(matches!(
        err,
        AppError::Render(RenderError::Shader(ShaderError::LinkError(_)))
    ));
    assert_eq!(window_state.borrow().swaps, 2);
    assert_eq!(*live.borrow(), 0);
}

#[test]
fn test_swap_error_stops_loop_and_detaches() {
    let window = MockWindow::new(800, 600).failing_swap_at(1);
    let render = MockRenderBackend::new();
    let live = render.live_counter();

    let mut app = App::new(Box::new(window), Box::new(render));
    let err = app.run(&mut HelloTriangle::new()).unwrap_err();

    assert!(matches!(err, AppError::Window(_)));
    assert_eq!(*live.borrow(), 0);
}

#[test]
fn test_attach_error_skips_loop() {
    let window = MockWindow::new(800, 600);
    let window_state = window.state();
    let render = MockRenderBackend::failing_shaders();
    let live = render.live_counter();

    let mut app = App::new(Box::new(window), Box::new(render));
    let err = app.run(&mut HelloTriangle::new()).unwrap_err();

    assert_eq!(
        err.to_string(),
        "ERROR::SHADER::FRAGMENT::COMPILATION_FAILED\n0:1(1): error: syntax error"
    );
    assert_eq!(window_state.borrow().swaps, 0);
    assert_eq!(*live.borrow(), 0);
}
