//! Text widget

use crate::constants::{char_width, line_height};
use crate::renderer::{Color, Renderer};
use crate::widget::Widget;
use crate::{Element, Limits, Point, Rectangle, Size};

/// Default font size in pixels
const DEFAULT_FONT_SIZE: f32 = 14.0;

/// A single line of text
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    size: f32,
    color: Color,
}

impl Text {
    /// Create a new text widget
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: DEFAULT_FONT_SIZE,
            color: Color::BLACK,
        }
    }

    /// Set the font size
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Set the text color
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Calculate approximate text dimensions
    fn measure(&self) -> Size {
        let width = self.content.chars().count() as f32 * char_width(self.size);
        Size::new(width, line_height(self.size))
    }
}

impl<M> Widget<M> for Text {
    fn layout(&self, limits: &Limits) -> Size {
        let content = self.measure();
        limits.resolve(content.width, content.height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        renderer.draw_text(
            &self.content,
            Point::new(bounds.x, bounds.y),
            self.color,
            self.size,
        );
    }
}

impl<'a, M: 'a> From<Text> for Element<'a, M> {
    fn from(text: Text) -> Self {
        Element::new(text)
    }
}

/// Helper function to create a text widget
pub fn text(content: impl Into<String>) -> Text {
    Text::new(content)
}
