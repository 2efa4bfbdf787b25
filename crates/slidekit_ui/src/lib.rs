//! slidekit_ui - a small retained-callback widget toolkit with an adaptive card slider
//!
//! Widgets are rebuilt from application state on every event and frame
//! (see [`Application`]). Drawing is recorded into a [`Renderer`] display
//! list so any backend, or a test, can replay it.
//!
//! The [`slider`] module holds the platform-independent slider behavior.
//! [`widgets::CardSlider`] renders it with the toolkit and, on `wasm32`,
//! the `web` module binds the same behavior to a live DOM scroller.

mod application;
mod callback;
mod constants;
mod element;
mod event;
mod layout;
mod renderer;
mod widget;

pub mod slider;
pub mod state;
pub mod units;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use application::{init_logging, Application, Runtime, Settings};
pub use callback::{Callback, Callback0};
pub use element::Element;
pub use event::{Event, Key, Modifiers, MouseButton};
pub use layout::{Limits, Point, Rectangle, Size};
pub use renderer::{Color, DrawCommand, Renderer};
pub use state::{CardSliderState, SliderGeometry, SliderMessage, SliderState};
pub use units::{CssSize, CssSizeError};
pub use widget::{EventResult, Widget};

// Re-export widgets
pub use widgets::{card, card_slider, column, text, Card, CardSlider, Column, Text};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::{Application, Runtime, Settings};
    pub use crate::element::Element;
    pub use crate::event::{Event, Key, Modifiers, MouseButton};
    pub use crate::layout::{Point, Rectangle, Size};
    pub use crate::slider::{Breakpoint, ItemClass, LayoutConfig, LayoutMode};
    pub use crate::state::{CardSliderState, SliderMessage};
    pub use crate::units::CssSize;
    pub use crate::widgets::{card, card_slider, column, text};
}
