//! Application message types for the slidekit showcase.

use slidekit_ui::SliderMessage;

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    /// The feature slider reported a scroll, frame, focus or navigation
    Slider(SliderMessage),
}
