//! Keyboard navigator: arrow keys step through slides.

use super::controller::scroll_to_slide;
use super::port::ViewportPort;
use crate::event::Key;
use crate::state::SliderState;

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Backward,
    Forward,
}

impl NavDirection {
    /// Horizontal navigation keys; everything else is not ours.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Left => Some(NavDirection::Backward),
            Key::Right => Some(NavDirection::Forward),
            _ => None,
        }
    }

    pub fn step(self) -> isize {
        match self {
            NavDirection::Backward => -1,
            NavDirection::Forward => 1,
        }
    }
}

/// Slide to scroll to for `key`, or `None` when the key must keep its
/// default behavior (container not focused, or not a navigation key).
///
/// The target may fall outside the slide range; the scroll controller clamps.
pub fn target_for_key(state: &SliderState, focused: bool, key: Key) -> Option<isize> {
    if !focused {
        return None;
    }
    let direction = NavDirection::from_key(key)?;
    Some(state.active_index() as isize + direction.step())
}

/// Handle a key press. Returns `true` when the key was consumed and the
/// host should suppress its default action.
pub fn handle_key<P: ViewportPort + ?Sized>(
    state: &SliderState,
    port: &mut P,
    focused: bool,
    key: Key,
) -> bool {
    match target_for_key(state, focused, key) {
        Some(target) => {
            scroll_to_slide(state, port, target);
            true
        }
        None => false,
    }
}
