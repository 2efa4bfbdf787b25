//! Widget trait and related types

use crate::event::Event;
use crate::layout::{Limits, Rectangle, Size};
use crate::renderer::Renderer;

/// Outcome of routing an event through a widget.
///
/// `Captured` tells the host to suppress its default handling of the event
/// (for example page scrolling on an arrow key).
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult<M> {
    /// The widget did not act on the event.
    Ignored,
    /// The widget consumed the event, optionally producing a message.
    Captured(Option<M>),
}

impl<M> EventResult<M> {
    /// Consume the event and emit a message.
    pub fn message(message: M) -> Self {
        EventResult::Captured(Some(message))
    }

    pub fn is_captured(&self) -> bool {
        matches!(self, EventResult::Captured(_))
    }

    /// The produced message, if any.
    pub fn into_message(self) -> Option<M> {
        match self {
            EventResult::Captured(message) => message,
            EventResult::Ignored => None,
        }
    }
}

impl<M> Default for EventResult<M> {
    fn default() -> Self {
        EventResult::Ignored
    }
}

/// The core widget trait that all UI elements implement
pub trait Widget<M> {
    /// Calculate the size this widget wants given the limits
    fn layout(&self, limits: &Limits) -> Size;

    /// Draw the widget to the renderer
    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle);

    /// Handle an event, optionally producing a message
    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> EventResult<M> {
        let _ = (event, bounds);
        EventResult::Ignored
    }
}
