//! Scroll controller: programmatic "go to slide N".

use super::port::{Measurement, ViewportPort};
use super::tracker::clamp_index;
use crate::state::SliderState;

/// Smoothly scroll `port` so that slide `target` is at the leading edge.
///
/// Out-of-range targets are clamped rather than rejected, so repeated
/// next/previous at either end is idempotent. Does nothing while the slide
/// unit is unknown or there are no slides. The active index is not touched
/// here: it follows once the port reports the resulting scroll offsets.
///
/// Returns the offset that was requested, if any.
pub fn scroll_to_slide<P: ViewportPort + ?Sized>(
    state: &SliderState,
    port: &mut P,
    target: isize,
) -> Option<f32> {
    let unit = Measurement::of(port)?;
    let index = clamp_index(target, state.child_count())?;
    let offset = index as f32 * unit.item_width();
    log::debug!("scroll to slide {} (requested {}) at {:.1}px", index, target, offset);
    port.scroll_to(offset, true);
    Some(offset)
}
