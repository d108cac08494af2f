/// Events are issued by the windowing system, usually in a platform specific manner
/// but translated to this canonical Event data types to abstract platform-specific APIs

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    handled: bool,
    event_type: EventType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    WindowClose,
    WindowResized { width: u32, height: u32 },
    KeyPressed { key: KeyCode, repeat: bool },
    KeyReleased { key: KeyCode },
}

/// Keys the application reacts to. Anything else maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Space,
    Unknown,
}

impl Event {
    pub fn new(event_type: EventType) -> Self {
        Event {
            handled: false,
            event_type,
        }
    }

    #[inline(always)]
    pub fn get_type(&self) -> EventType {
        self.event_type
    }

    #[inline(always)]
    pub fn is_handled(&self) -> bool {
        self.handled
    }

    /// Mark this event as consumed so the application skips its default handling
    #[inline(always)]
    pub fn set_handled(&mut self) {
        self.handled = true;
    }

    /// Whether this event asks the application to close
    pub fn requests_close(&self) -> bool {
        matches!(
            self.event_type,
            EventType::WindowClose
                | EventType::KeyPressed {
                    key: KeyCode::Escape,
                    ..
                }
        )
    }
}

impl From<EventType> for Event {
    fn from(event_type: EventType) -> Self {
        Event::new(event_type)
    }
}
