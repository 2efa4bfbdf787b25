//! Platform-independent core of the adaptive card slider.
//!
//! A slider is a row of equally sized cards that scrolls horizontally (with
//! snapping) below a breakpoint and becomes a static grid at or above it.
//! The pieces here are pure or port-driven so that the toolkit widget
//! ([`crate::widgets::CardSlider`]) and the DOM binding share one behavior:
//!
//! - [`port`]: the viewport seam and slide-unit measurement
//! - [`tracker`]: scroll offset to active index quantization
//! - [`controller`]: clamped smooth scroll to a slide
//! - [`keyboard`]: arrow-key navigation
//! - [`responsive`]: compact/expanded mode and per-item styling
//! - [`indicator`]: indicator strip model and geometry
//! - [`animator`]: tween for ports without native smooth scrolling

pub mod animator;
pub mod controller;
pub mod indicator;
pub mod keyboard;
pub mod port;
pub mod responsive;
pub mod tracker;

#[cfg(test)]
mod tests;

pub use animator::{Easing, SmoothScroll};
pub use controller::scroll_to_slide;
pub use indicator::{indicator_controls, slide_label, IndicatorControl};
pub use keyboard::NavDirection;
pub use port::{Measurement, ViewportPort};
pub use responsive::{
    layout_mode, Breakpoint, ItemClass, ItemLayout, LayoutConfig, LayoutMode, UtilityClasses,
};
pub use tracker::{clamp_index, quantize};
