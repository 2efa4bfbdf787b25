//! Index tracker: continuous scroll offset to discrete active slide.

use super::port::{Measurement, ViewportPort};
use crate::state::SliderState;

/// Clamp a requested slide index into `[0, child_count - 1]`.
///
/// Returns `None` when there are no slides, since no index is valid.
pub fn clamp_index(target: isize, child_count: usize) -> Option<usize> {
    let last = child_count.checked_sub(1)?;
    Some((target.max(0) as usize).min(last))
}

/// Quantize a scroll offset into the nearest slide index.
///
/// Rounds half away from zero, so a card counts as active once it is at
/// least half scrolled in. Negative offsets (overscroll) clamp to `0`.
pub fn quantize(offset: f32, unit: Measurement, child_count: usize) -> Option<usize> {
    if !offset.is_finite() {
        return None;
    }
    let raw = (offset / unit.item_width()).round();
    // Saturating float-to-int conversion keeps huge offsets in range.
    clamp_index(raw as isize, child_count)
}

/// Handle a scroll notification from `port`.
///
/// Returns the new active index when it changed, `None` when the event had
/// no observable effect (unit unknown, no slides, same slide).
pub fn on_scroll<P: ViewportPort + ?Sized>(state: &mut SliderState, port: &P) -> Option<usize> {
    let unit = Measurement::of(port)?;
    let index = quantize(port.scroll_offset(), unit, state.child_count())?;
    if state.set_active_index(index) {
        log::debug!(
            "slider index -> {} (offset {:.1}, unit {:.1})",
            index,
            port.scroll_offset(),
            unit.item_width()
        );
        Some(index)
    } else {
        None
    }
}
