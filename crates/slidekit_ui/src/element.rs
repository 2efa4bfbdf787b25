//! Type-erased widget wrapper

use crate::event::Event;
use crate::layout::{Limits, Rectangle, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// A type-erased widget that can hold any widget type
pub struct Element<'a, M> {
    widget: Box<dyn Widget<M> + 'a>,
}

impl<'a, M> Element<'a, M> {
    /// Create a new element from a widget
    pub fn new<W: Widget<M> + 'a>(widget: W) -> Self {
        Self {
            widget: Box::new(widget),
        }
    }

    /// Calculate layout for the given limits
    pub fn layout(&self, limits: &Limits) -> Size {
        self.widget.layout(limits)
    }

    /// Draw the widget
    pub fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        self.widget.draw(renderer, bounds);
    }

    /// Handle an event
    pub fn on_event(&mut self, event: &Event, bounds: Rectangle) -> EventResult<M> {
        self.widget.on_event(event, bounds)
    }
}

impl<M> std::fmt::Debug for Element<'_, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Element").finish_non_exhaustive()
    }
}
