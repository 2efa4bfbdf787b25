// Widget implementations

mod card;
mod card_slider;
mod column;
mod text;

pub use card::{card, Card};
pub use card_slider::{card_slider, CardSlider};
pub use column::{column, Column};
pub use text::{text, Text};

// Re-export Element for convenience (it's actually in the element module)
pub use crate::Element;
