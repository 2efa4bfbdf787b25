//! Column layout widget

use crate::element::Element;
use crate::event::Event;
use crate::layout::{Limits, Rectangle, Size};
use crate::renderer::Renderer;
use crate::widget::{EventResult, Widget};

/// A vertical column layout widget
pub struct Column<'a, M> {
    children: Vec<Element<'a, M>>,
    spacing: f32,
    padding: f32,
}

impl<'a, M> Column<'a, M> {
    /// Create a new column with the given children
    pub fn new(children: Vec<Element<'a, M>>) -> Self {
        Self {
            children,
            spacing: 0.0,
            padding: 0.0,
        }
    }

    /// Add a child
    pub fn push(mut self, child: impl Into<Element<'a, M>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Set spacing between children
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set padding on all sides
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Child bounds relative to the column origin, given the outer width.
    fn child_bounds(&self, limits: &Limits) -> Vec<Rectangle> {
        let inner_width = if limits.is_width_bounded() {
            (limits.max_width - self.padding * 2.0).max(0.0)
        } else {
            f32::INFINITY
        };
        let child_limits = Limits::with_range(0.0, inner_width, 0.0, f32::INFINITY);

        let mut y = self.padding;
        let mut bounds = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let size = child.layout(&child_limits);
            bounds.push(Rectangle::new(self.padding, y, size.width, size.height));
            y += size.height + self.spacing;
        }
        bounds
    }
}

impl<'a, M> Widget<M> for Column<'a, M> {
    fn layout(&self, limits: &Limits) -> Size {
        let bounds = self.child_bounds(limits);
        let content_width = bounds.iter().map(|b| b.width).fold(0.0, f32::max);
        let content_height = bounds.last().map_or(0.0, |b| b.bottom());
        let width = if limits.is_width_bounded() {
            limits.max_width
        } else {
            content_width + self.padding * 2.0
        };
        limits.resolve(width, content_height + self.padding)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        let limits = Limits::fixed_width(bounds.width, bounds.height);
        for (child, child_bounds) in self.children.iter().zip(self.child_bounds(&limits)) {
            child.draw(renderer, child_bounds.translate(bounds.x, bounds.y));
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> EventResult<M> {
        let limits = Limits::fixed_width(bounds.width, bounds.height);
        let child_bounds = self.child_bounds(&limits);
        // Every child sees the event until one captures it; sliders need
        // ticks and resizes even when the pointer is elsewhere.
        for (child, child_bounds) in self.children.iter_mut().zip(child_bounds) {
            let result = child.on_event(event, child_bounds.translate(bounds.x, bounds.y));
            if result.is_captured() {
                return result;
            }
        }
        EventResult::Ignored
    }
}

impl<'a, M: 'a> From<Column<'a, M>> for Element<'a, M> {
    fn from(column: Column<'a, M>) -> Self {
        Element::new(column)
    }
}

/// Helper function to create an empty column
pub fn column<'a, M>() -> Column<'a, M> {
    Column::new(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::text;

    #[test]
    fn children_stack_vertically() {
        let column: Column<'_, ()> = column()
            .padding(10.0)
            .spacing(5.0)
            .push(text("first").size(10.0))
            .push(text("second").size(10.0));
        let limits = Limits::with_range(0.0, 200.0, 0.0, f32::INFINITY);
        let bounds = column.child_bounds(&limits);

        assert_eq!(bounds[0].y, 10.0);
        assert_eq!(bounds[1].y, 10.0 + 14.0 + 5.0);
        let size = column.layout(&limits);
        assert_eq!(size.width, 200.0);
        assert_eq!(size.height, bounds[1].bottom() + 10.0);
    }
}
