//! Presentational content card: a bordered box with a title and body text.

use crate::constants::{
    char_width, line_height, CARD_BACKGROUND, CARD_BODY_COLOR, CARD_BODY_SIZE, CARD_BORDER,
    CARD_MIN_HEIGHT, CARD_PADDING, CARD_TITLE_COLOR, CARD_TITLE_SIZE,
};
use crate::{Color, Element, Limits, Point, Rectangle, Renderer, Size, Widget};

/// Natural width of a card inside an unbounded parent.
const NATURAL_WIDTH: f32 = 280.0;

/// A content card.
#[derive(Debug, Clone)]
pub struct Card {
    title: String,
    body: String,
    accent: Option<Color>,
}

impl Card {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            accent: None,
        }
    }

    /// Draw a colored bar along the top edge.
    pub fn accent(mut self, color: Color) -> Self {
        self.accent = Some(color);
        self
    }

    fn text_width(width: f32) -> f32 {
        (width - CARD_PADDING * 2.0).max(0.0)
    }

    fn lines(text: &str, width: f32, font_size: f32) -> Vec<String> {
        let max_chars = (Self::text_width(width) / char_width(font_size)).floor().max(1.0) as usize;
        wrap_words(text, max_chars)
    }

    fn height_for(&self, width: f32) -> f32 {
        let title = Self::lines(&self.title, width, CARD_TITLE_SIZE).len() as f32;
        let body = Self::lines(&self.body, width, CARD_BODY_SIZE).len() as f32;
        let content = CARD_PADDING * 2.0
            + title * line_height(CARD_TITLE_SIZE)
            + CARD_PADDING / 2.0
            + body * line_height(CARD_BODY_SIZE);
        content.max(CARD_MIN_HEIGHT)
    }
}

/// Greedy word wrap to at most `max_chars` per line. Words longer than a
/// line are kept whole.
fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

impl<M> Widget<M> for Card {
    fn layout(&self, limits: &Limits) -> Size {
        let width = if limits.is_width_bounded() {
            limits.max_width
        } else {
            NATURAL_WIDTH.max(limits.min_width)
        };
        limits.resolve(width, self.height_for(width))
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        renderer.fill_rect(bounds, CARD_BACKGROUND);
        renderer.stroke_rect(bounds, CARD_BORDER, 1.0);
        if let Some(accent) = self.accent {
            renderer.fill_rect(Rectangle::new(bounds.x, bounds.y, bounds.width, 4.0), accent);
        }

        let x = bounds.x + CARD_PADDING;
        let mut y = bounds.y + CARD_PADDING;
        for line in Self::lines(&self.title, bounds.width, CARD_TITLE_SIZE) {
            renderer.draw_text(&line, Point::new(x, y), CARD_TITLE_COLOR, CARD_TITLE_SIZE);
            y += line_height(CARD_TITLE_SIZE);
        }
        y += CARD_PADDING / 2.0;
        for line in Self::lines(&self.body, bounds.width, CARD_BODY_SIZE) {
            renderer.draw_text(&line, Point::new(x, y), CARD_BODY_COLOR, CARD_BODY_SIZE);
            y += line_height(CARD_BODY_SIZE);
        }
    }
}

impl<'a, M: 'a> From<Card> for Element<'a, M> {
    fn from(card: Card) -> Self {
        Element::new(card)
    }
}

/// Helper function to create a card.
pub fn card(title: impl Into<String>, body: impl Into<String>) -> Card {
    Card::new(title, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_words_breaks_on_width() {
        assert_eq!(
            wrap_words("real time inventory across warehouses", 15),
            vec!["real time", "inventory", "across", "warehouses"]
        );
        assert_eq!(wrap_words("   ", 10), Vec::<String>::new());
        assert_eq!(wrap_words("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }

    #[test]
    fn card_fills_bounded_width() {
        let card = Card::new("Inventory", "Track stock");
        let size = Widget::<()>::layout(&card, &Limits::with_range(0.0, 300.0, 0.0, f32::INFINITY));
        assert_eq!(size.width, 300.0);
        assert_eq!(size.height, CARD_MIN_HEIGHT);
    }

    #[test]
    fn long_body_grows_card() {
        let body = "word ".repeat(200);
        let card = Card::new("Finance", body);
        let size = Widget::<()>::layout(&card, &Limits::with_range(0.0, 200.0, 0.0, f32::INFINITY));
        assert!(size.height > CARD_MIN_HEIGHT);
    }
}
