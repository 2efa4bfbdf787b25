//! Indicator strip: one control per slide, the active one highlighted.

use super::responsive::LayoutMode;
use crate::constants::{
    INDICATOR_ACTIVE_WIDTH, INDICATOR_GAP, INDICATOR_HEIGHT, INDICATOR_HIT_SLOP, INDICATOR_WIDTH,
};
use crate::layout::{Point, Rectangle};
use crate::state::SliderState;

/// A single activation control of the strip.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorControl {
    /// Slide this control scrolls to
    pub index: usize,
    /// Accessible name, e.g. "Go to slide 2 of 5"
    pub label: String,
    /// Whether this is the active slide
    pub is_current: bool,
}

/// Accessible label for the control of slide `index` (0-based).
pub fn slide_label(index: usize, count: usize) -> String {
    format!("Go to slide {} of {}", index + 1, count)
}

/// Controls to render for the current state. Empty in expanded mode.
pub fn indicator_controls(state: &SliderState, mode: LayoutMode) -> Vec<IndicatorControl> {
    if !mode.shows_indicators() {
        return Vec::new();
    }
    let count = state.child_count();
    (0..count)
        .map(|index| IndicatorControl {
            index,
            label: slide_label(index, count),
            is_current: index == state.active_index(),
        })
        .collect()
}

/// Total width of the strip for `count` controls.
pub fn strip_width(count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    INDICATOR_ACTIVE_WIDTH
        + (count - 1) as f32 * INDICATOR_WIDTH
        + (count - 1) as f32 * INDICATOR_GAP
}

/// Lay out the controls horizontally centered in `bounds`.
pub fn control_rects(controls: &[IndicatorControl], bounds: Rectangle) -> Vec<Rectangle> {
    let mut x = bounds.x + (bounds.width - strip_width(controls.len())).max(0.0) / 2.0;
    let y = bounds.y + (bounds.height - INDICATOR_HEIGHT).max(0.0) / 2.0;
    controls
        .iter()
        .map(|control| {
            let width = if control.is_current {
                INDICATOR_ACTIVE_WIDTH
            } else {
                INDICATOR_WIDTH
            };
            let rect = Rectangle::new(x, y, width, INDICATOR_HEIGHT);
            x += width + INDICATOR_GAP;
            rect
        })
        .collect()
}

/// Which control (if any) is under `point`, with a little slop for fingers.
pub fn hit_test(controls: &[IndicatorControl], rects: &[Rectangle], point: Point) -> Option<usize> {
    controls
        .iter()
        .zip(rects)
        .find(|(_, rect)| {
            Rectangle::new(
                rect.x - INDICATOR_HIT_SLOP / 2.0,
                rect.y - INDICATOR_HIT_SLOP,
                rect.width + INDICATOR_HIT_SLOP,
                rect.height + INDICATOR_HIT_SLOP * 2.0,
            )
            .contains(point)
        })
        .map(|(control, _)| control.index)
}
