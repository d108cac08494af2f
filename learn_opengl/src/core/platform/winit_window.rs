/// Winit implementation of the window trait object.
///
/// Owns the native event loop, the window, the GL surface and the GL context,
/// which stays current on the creating thread for the lifetime of the window.
use std::num::NonZeroU32;
use std::time::Duration;

use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use raw_window_handle::HasRawWindowHandle;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event as WinitEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window as WinitNativeWindow, WindowBuilder as WinitWindowBuilder};

use crate::core::events::{Event, EventType, KeyCode};
use crate::core::windowing::{WindowBuilder, WindowDyn, WindowError};

pub struct WinitWindow {
    width: u32,
    height: u32,
    title: String,
    use_vsync: bool,
    should_close: bool,
    // Field order matters: the surface and context go before the window they draw to
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: WinitNativeWindow,
    event_loop: EventLoop<()>,
}

impl WinitWindow {
    pub fn create(props: WindowBuilder) -> Result<Self, WindowError> {
        if props.width == 0 || props.height == 0 {
            return Err(WindowError::ZeroSized {
                width: props.width,
                height: props.height,
            });
        }

        let window_builder = WinitWindowBuilder::new()
            .with_title(props.title.clone())
            .with_inner_size(LogicalSize::new(props.width, props.height))
            .with_resizable(props.resizable)
            .with_decorations(true);

        let event_loop =
            EventLoop::new().map_err(|err| WindowError::EventLoop(err.to_string()))?;

        // Window creation. Prefer the config with the most samples
        let (window, cfg) = glutin_winit::DisplayBuilder::new()
            .with_window_builder(Some(window_builder))
            .build(&event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|err| WindowError::Display(err.to_string()))?;

        let window = window.ok_or(WindowError::NoWindow)?;
        log::debug!("Picked GL config: {:?}", cfg);

        // Context creation: request a core profile of the configured version
        let (major, minor) = props.gl_version;
        let context_attrs = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(GlProfile::Core)
            .build(Some(window.raw_window_handle()));

        let context = unsafe { cfg.display().create_context(&cfg, &context_attrs)? };

        // The physical size may differ from the requested logical size on HiDPI screens
        let size = window.inner_size();
        let (width, height) = non_zero_size(size.width, size.height)?;
        let surface_attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            window.raw_window_handle(),
            width,
            height,
        );
        let surface = unsafe { cfg.display().create_window_surface(&cfg, &surface_attrs)? };

        // From now on, this is the main context on the current thread
        let context = context.make_current(&surface)?;

        let mut result = WinitWindow {
            width: size.width,
            height: size.height,
            title: props.title,
            use_vsync: !props.vsync,
            should_close: false,
            surface,
            context,
            window,
            event_loop,
        };
        result.set_vsync(props.vsync)?;

        log::info!(
            "Created window '{}' ({}x{}) with an OpenGL {}.{} core context",
            result.title,
            result.width,
            result.height,
            major,
            minor
        );

        Ok(result)
    }

    /// Load the OpenGL function pointers for the current context
    pub fn create_gl_context(&self) -> glow::Context {
        unsafe {
            glow::Context::from_loader_function_cstr(|s| {
                self.context.display().get_proc_address(s).cast()
            })
        }
    }

    fn resize_surface(&mut self, width: u32, height: u32) {
        if let Ok((w, h)) = non_zero_size(width, height) {
            self.surface.resize(&self.context, w, h);
            self.width = width;
            self.height = height;
        }
    }
}

impl WindowDyn for WinitWindow {
    fn get_width(&self) -> u32 {
        self.width
    }

    fn get_height(&self) -> u32 {
        self.height
    }

    fn get_title(&self) -> &str {
        &self.title
    }

    fn set_vsync(&mut self, is_vsync_active: bool) -> Result<(), WindowError> {
        if self.use_vsync == is_vsync_active {
            return Ok(());
        }

        let interval = if is_vsync_active {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };

        // Some platforms don't let us pick, that's not fatal
        if let Err(err) = self.surface.set_swap_interval(&self.context, interval) {
            log::warn!("Error setting vsync to {is_vsync_active}: {err}");
        }
        self.use_vsync = is_vsync_active;
        Ok(())
    }

    fn get_vsync(&self) -> bool {
        self.use_vsync
    }

    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn poll_events(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _event_loop| {
                if let WinitEvent::WindowEvent { event, .. } = event {
                    events.extend(to_event(event));
                }
            });

        if let PumpStatus::Exit(code) = status {
            log::debug!("Native event loop exited with code {code}");
            events.push(Event::new(EventType::WindowClose));
        }

        for event in events.iter() {
            if let EventType::WindowResized { width, height } = event.get_type() {
                self.resize_surface(width, height);
            }
        }

        events
    }

    fn swap_buffers(&mut self) -> Result<(), WindowError> {
        self.window.request_redraw();
        self.surface.swap_buffers(&self.context)?;
        Ok(())
    }
}

/// Prefer the config with the most samples.
///
/// glutin-winit only calls the picker after `find_configs` succeeded, and the
/// GLX, WGL and CGL backends report an empty match as `BadConfig` there. The
/// picker has to return a config, so an empty EGL match can only end in a panic.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .max_by_key(|config| config.num_samples())
        .expect("Display returned no GL configs")
}

fn non_zero_size(width: u32, height: u32) -> Result<(NonZeroU32, NonZeroU32), WindowError> {
    match (NonZeroU32::new(width), NonZeroU32::new(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => Err(WindowError::ZeroSized { width, height }),
    }
}

/// Translate native events to the events our application understands.
/// Zero-sized resizes happen when minimizing and are dropped.
pub(crate) fn to_event(event: WindowEvent) -> Option<Event> {
    let event_type = match event {
        WindowEvent::CloseRequested => EventType::WindowClose,
        WindowEvent::Resized(size) if size.width != 0 && size.height != 0 => {
            EventType::WindowResized {
                width: size.width,
                height: size.height,
            }
        }
        WindowEvent::KeyboardInput { event, .. } => {
            let key = to_key_code(event.physical_key);
            match event.state {
                ElementState::Pressed => EventType::KeyPressed {
                    key,
                    repeat: event.repeat,
                },
                ElementState::Released => EventType::KeyReleased { key },
            }
        }
        _ => return None,
    };

    Some(Event::new(event_type))
}

pub(crate) fn to_key_code(key: PhysicalKey) -> KeyCode {
    match key {
        PhysicalKey::Code(WinitKeyCode::Escape) => KeyCode::Escape,
        PhysicalKey::Code(WinitKeyCode::Enter) => KeyCode::Enter,
        PhysicalKey::Code(WinitKeyCode::Space) => KeyCode::Space,
        _ => KeyCode::Unknown,
    }
}
