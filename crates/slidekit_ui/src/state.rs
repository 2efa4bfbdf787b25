//! Widget state types for stateful widgets
//!
//! The card slider follows the toolkit's usual split: the widget is rebuilt
//! every frame from a [`CardSliderState`] owned by the application, and
//! reports what happened as [`SliderMessage`]s that the application feeds
//! back through [`CardSliderState::update`].

use std::time::Duration;

use web_time::Instant;

use crate::constants::{SCROLL_EPSILON, SNAP_IDLE_MS};
use crate::event::Key;
use crate::slider::animator::SmoothScroll;
use crate::slider::port::{Measurement, ViewportPort};
use crate::slider::{controller, keyboard, tracker};

/// Active slide bookkeeping.
///
/// Invariant: `active_index <= max(0, child_count - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliderState {
    active_index: usize,
    child_count: usize,
}

impl SliderState {
    pub fn new(child_count: usize) -> Self {
        Self {
            active_index: 0,
            child_count,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn child_count(&self) -> usize {
        self.child_count
    }

    /// Set the active slide, clamped to the valid range.
    /// Returns whether the stored index changed.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        let clamped = index.min(self.child_count.saturating_sub(1));
        let changed = clamped != self.active_index;
        self.active_index = clamped;
        changed
    }

    /// Change the number of slides, pulling the active index back in range.
    pub fn set_child_count(&mut self, child_count: usize) {
        self.child_count = child_count;
        self.set_active_index(self.active_index);
    }
}

/// Measured geometry of the slider container, reported by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderGeometry {
    /// Width of the first item wrapper, `0.0` if none is rendered
    pub unit_size: f32,
    /// Largest reachable scroll offset; `0.0` when the row does not scroll
    pub max_scroll: f32,
}

/// Messages emitted by the card slider widget.
#[derive(Debug, Clone, PartialEq)]
pub enum SliderMessage {
    /// An animation frame with the geometry measured for it
    Frame {
        geometry: SliderGeometry,
        now: Instant,
    },
    /// The window was resized
    Resized {
        viewport_width: f32,
        geometry: SliderGeometry,
    },
    /// The user scrolled the row directly (wheel / touchpad)
    Scrolled { delta: f32, at: Instant },
    /// Scroll to a slide (keyboard or indicator); clamped by the controller
    Navigate(isize),
    /// The container gained or lost keyboard focus
    Focus(bool),
}

/// The scroll container simulated by the toolkit.
#[derive(Debug, Clone, Default)]
struct SimulatedViewport {
    geometry: SliderGeometry,
    viewport_width: f32,
    scroll_offset: f32,
    animator: SmoothScroll,
}

impl SimulatedViewport {
    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.geometry.max_scroll.max(0.0))
    }
}

impl ViewportPort for SimulatedViewport {
    fn unit_size(&self) -> f32 {
        self.geometry.unit_size
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        let target = self.clamp_offset(offset);
        if animated {
            self.animator.retarget(self.scroll_offset, target);
        } else {
            self.animator.cancel();
            self.scroll_offset = target;
        }
    }
}

/// Application-owned state of a card slider.
#[derive(Debug, Clone, Default)]
pub struct CardSliderState {
    slider: SliderState,
    viewport: SimulatedViewport,
    focused: bool,
    /// When the user last scrolled by hand; cleared once snapped
    last_manual_scroll: Option<Instant>,
}

impl CardSliderState {
    pub fn new(child_count: usize, viewport_width: f32) -> Self {
        Self {
            slider: SliderState::new(child_count),
            viewport: SimulatedViewport {
                viewport_width,
                ..SimulatedViewport::default()
            },
            ..Self::default()
        }
    }

    pub fn slider(&self) -> &SliderState {
        &self.slider
    }

    pub fn active_index(&self) -> usize {
        self.slider.active_index()
    }

    pub fn child_count(&self) -> usize {
        self.slider.child_count()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.viewport.scroll_offset
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport.viewport_width
    }

    pub fn geometry(&self) -> SliderGeometry {
        self.viewport.geometry
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// No animation is running and no snap is pending.
    pub fn is_settled(&self) -> bool {
        !self.viewport.animator.is_active() && self.last_manual_scroll.is_none()
    }

    pub fn set_child_count(&mut self, child_count: usize) {
        self.slider.set_child_count(child_count);
    }

    /// Apply a message from the widget. Returns the new active index when
    /// it changed.
    pub fn update(&mut self, message: SliderMessage) -> Option<usize> {
        match message {
            SliderMessage::Frame { geometry, now } => {
                let mut changed = self.apply_geometry(geometry);
                if let Some(offset) = self.viewport.animator.sample(now) {
                    changed = self.set_offset(offset).or(changed);
                } else {
                    self.snap_if_idle(now);
                }
                changed
            }
            SliderMessage::Resized {
                viewport_width,
                geometry,
            } => {
                log::debug!("slider viewport resized to {:.0}px", viewport_width);
                self.viewport.viewport_width = viewport_width;
                // Re-measure on resize so the active index tracks the new unit
                // even when no scroll event follows.
                let changed = self.apply_geometry(geometry);
                tracker::on_scroll(&mut self.slider, &self.viewport).or(changed)
            }
            SliderMessage::Scrolled { delta, at } => {
                self.viewport.animator.cancel();
                self.last_manual_scroll = Some(at);
                let offset = self.viewport.scroll_offset + delta;
                self.set_offset(offset)
            }
            SliderMessage::Navigate(target) => {
                self.scroll_to_slide(target);
                None
            }
            SliderMessage::Focus(focused) => {
                self.focused = focused;
                None
            }
        }
    }

    /// Start a smooth scroll to slide `target` (clamped).
    pub fn scroll_to_slide(&mut self, target: isize) -> Option<f32> {
        self.last_manual_scroll = None;
        controller::scroll_to_slide(&self.slider, &mut self.viewport, target)
    }

    /// Route a key press through the keyboard navigator.
    /// Returns whether the key was consumed.
    pub fn handle_key(&mut self, key: Key) -> bool {
        keyboard::handle_key(&self.slider, &mut self.viewport, self.focused, key)
    }

    fn set_offset(&mut self, offset: f32) -> Option<usize> {
        self.viewport.scroll_offset = self.viewport.clamp_offset(offset);
        tracker::on_scroll(&mut self.slider, &self.viewport)
    }

    fn apply_geometry(&mut self, geometry: SliderGeometry) -> Option<usize> {
        if geometry == self.viewport.geometry {
            return None;
        }
        log::debug!(
            "slider geometry unit={:.1} max_scroll={:.1}",
            geometry.unit_size,
            geometry.max_scroll
        );
        self.viewport.geometry = geometry;
        let offset = self.viewport.scroll_offset;
        self.set_offset(offset)
    }

    /// Settle on the nearest card boundary once manual scrolling stops.
    fn snap_if_idle(&mut self, now: Instant) {
        let Some(at) = self.last_manual_scroll else {
            return;
        };
        if now.saturating_duration_since(at) < Duration::from_millis(SNAP_IDLE_MS) {
            return;
        }
        self.last_manual_scroll = None;
        let Some(unit) = Measurement::of(&self.viewport) else {
            return;
        };
        let Some(nearest) =
            tracker::quantize(self.viewport.scroll_offset, unit, self.slider.child_count())
        else {
            return;
        };
        let target = self
            .viewport
            .clamp_offset(nearest as f32 * unit.item_width());
        if (target - self.viewport.scroll_offset).abs() > SCROLL_EPSILON {
            log::trace!("snapping to slide {} at {:.1}px", nearest, target);
            self.viewport.scroll_to(target, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_state_clamps_active_index() {
        let mut state = SliderState::new(3);
        assert!(state.set_active_index(2));
        assert!(!state.set_active_index(7));
        assert_eq!(state.active_index(), 2);

        state.set_child_count(1);
        assert_eq!(state.active_index(), 0);

        state.set_child_count(0);
        assert!(!state.set_active_index(4));
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn manual_scroll_is_clamped_and_tracked() {
        let mut state = CardSliderState::new(5, 375.0);
        let now = Instant::now();
        state.update(SliderMessage::Frame {
            geometry: SliderGeometry {
                unit_size: 300.0,
                max_scroll: 1200.0,
            },
            now,
        });

        assert_eq!(state.update(SliderMessage::Scrolled { delta: 460.0, at: now }), Some(2));
        assert_eq!(state.scroll_offset(), 460.0);
        state.update(SliderMessage::Scrolled { delta: -5000.0, at: now });
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.active_index(), 0);
    }

    #[test]
    fn idle_manual_scroll_snaps_to_nearest_card() {
        let mut state = CardSliderState::new(5, 375.0);
        let t0 = Instant::now();
        let geometry = SliderGeometry {
            unit_size: 300.0,
            max_scroll: 1200.0,
        };
        state.update(SliderMessage::Frame { geometry, now: t0 });
        state.update(SliderMessage::Scrolled { delta: 340.0, at: t0 });
        assert!(!state.is_settled());

        let mut now = t0 + Duration::from_millis(SNAP_IDLE_MS);
        for _ in 0..30 {
            state.update(SliderMessage::Frame { geometry, now });
            now += Duration::from_millis(16);
        }
        assert!(state.is_settled());
        assert_eq!(state.scroll_offset(), 300.0);
        assert_eq!(state.active_index(), 1);
    }

    #[test]
    fn focus_gates_keyboard() {
        let mut state = CardSliderState::new(5, 375.0);
        state.update(SliderMessage::Frame {
            geometry: SliderGeometry {
                unit_size: 300.0,
                max_scroll: 1200.0,
            },
            now: Instant::now(),
        });
        assert!(!state.handle_key(Key::Right));
        state.update(SliderMessage::Focus(true));
        assert!(state.handle_key(Key::Right));
        assert!(!state.handle_key(Key::Up));
    }

    #[test]
    fn shrinking_geometry_clamps_offset_and_index() {
        let mut state = CardSliderState::new(5, 375.0);
        let now = Instant::now();
        state.update(SliderMessage::Frame {
            geometry: SliderGeometry {
                unit_size: 300.0,
                max_scroll: 1200.0,
            },
            now,
        });
        state.update(SliderMessage::Scrolled { delta: 1200.0, at: now });
        assert_eq!(state.active_index(), 4);

        let changed = state.update(SliderMessage::Resized {
            viewport_width: 1280.0,
            geometry: SliderGeometry {
                unit_size: 400.0,
                max_scroll: 0.0,
            },
        });
        assert_eq!(changed, Some(0));
        assert_eq!(state.scroll_offset(), 0.0);
        assert_eq!(state.viewport_width(), 1280.0);
    }
}
