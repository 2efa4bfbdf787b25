//! Viewport port: the platform seam of the slider.
//!
//! The slider core never touches a concrete scroll container. Everything it
//! needs (the slide unit, the current scroll offset, and a way to request a
//! scroll) goes through [`ViewportPort`], implemented by the toolkit's
//! simulated viewport ([`crate::CardSliderState`]) and by the DOM binding on
//! wasm.

/// A horizontally scrollable container holding equally sized slides.
pub trait ViewportPort {
    /// Width in pixels of the first rendered slide, or `0.0` when nothing
    /// is rendered yet.
    fn unit_size(&self) -> f32;

    /// Current horizontal scroll offset in pixels.
    fn scroll_offset(&self) -> f32;

    /// Width of the viewport (window) in pixels.
    fn viewport_width(&self) -> f32;

    /// Request a horizontal scroll to `offset`. Returns immediately; when
    /// `animated` the container reports intermediate offsets as it moves.
    fn scroll_to(&mut self, offset: f32, animated: bool);
}

/// A known, usable slide unit.
///
/// Construction fails for zero, negative and non-finite widths, so holding a
/// `Measurement` guarantees a safe divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    item_width: f32,
}

impl Measurement {
    /// Validate a raw pixel width.
    pub fn from_px(item_width: f32) -> Option<Self> {
        (item_width.is_finite() && item_width > 0.0).then_some(Self { item_width })
    }

    /// Measure the slide unit of a viewport. `None` means "unit not yet known".
    pub fn of<P: ViewportPort + ?Sized>(port: &P) -> Option<Self> {
        Self::from_px(port.unit_size())
    }

    pub fn item_width(self) -> f32 {
        self.item_width
    }
}
