use crate::scene::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Pointer events as delivered by the host environment.
///
/// `MouseOver` and `MouseLeave` carry the scene element the host saw the
/// pointer enter or exit; target resolution happens inside the engine, so the
/// host reports the raw (innermost) element without any filtering.
#[derive(Debug, Clone)]
pub enum Event {
    /// Pointer moved to a new viewport position
    MouseMove { x: f32, y: f32 },
    /// Pointer entered an element
    MouseOver { element: ElementId },
    /// Pointer left an element
    MouseLeave { element: ElementId },
    /// Mouse button pressed
    MouseDown { button: MouseButton },
    /// Mouse button released
    MouseUp { button: MouseButton },
    /// Page scrolled (positive deltas scroll content right/down)
    Scroll { delta_x: f32, delta_y: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}
