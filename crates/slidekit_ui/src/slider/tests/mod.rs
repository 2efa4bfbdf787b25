//! Behavioral tests for the slider core.
//!
//! These drive [`CardSliderState`] the way the widget does: geometry is
//! measured by a [`CardSlider`] on an animation tick, and time arrives with
//! explicit `Frame` messages so animations settle deterministically.

use std::time::Duration;

use web_time::Instant;

use crate::slider::LayoutConfig;
use crate::state::{CardSliderState, SliderGeometry, SliderMessage};
use crate::units::CssSize;
use crate::widgets::{card, card_slider};
use crate::{Event, Rectangle, Widget};

mod keyboard_tests;
mod mode_tests;

/// Phone-sized viewport, below the `md` breakpoint.
const PHONE_WIDTH: f32 = 375.0;

/// Compact slider of `count` slides of `unit` px on a phone-sized viewport.
fn compact(count: usize, unit: f32) -> (CardSliderState, SliderGeometry) {
    measured(count, unit, PHONE_WIDTH)
}

/// Compact slider whose geometry is measured by the widget itself at a
/// container as wide as the viewport.
fn measured(count: usize, unit: f32, viewport_width: f32) -> (CardSliderState, SliderGeometry) {
    let config = LayoutConfig::new().mobile_item_width(CssSize::px(unit));
    let mut state = CardSliderState::new(count, viewport_width);
    let now = Instant::now();

    let geometry = {
        let mut widget = card_slider(&config, &state)
            .extend((0..count).map(|i| card(format!("Slide {}", i + 1), "Body")))
            .on_message(|message| message);
        let bounds = Rectangle::new(0.0, 0.0, viewport_width, 400.0);
        match widget.on_event(&Event::Tick { now }, bounds).into_message() {
            Some(SliderMessage::Frame { geometry, .. }) => geometry,
            other => panic!("expected a frame, got {other:?}"),
        }
    };
    assert!(
        config.mode_for(viewport_width).is_scrollable(),
        "{viewport_width}px is not a compact viewport"
    );

    state.update(SliderMessage::Frame { geometry, now });
    (state, geometry)
}

/// Pump frames until animations and pending snaps have finished.
fn settle(state: &mut CardSliderState, geometry: SliderGeometry) {
    let mut now = Instant::now();
    for _ in 0..120 {
        state.update(SliderMessage::Frame { geometry, now });
        if state.is_settled() {
            return;
        }
        now += Duration::from_millis(16);
    }
    panic!("slider did not settle");
}

/// Navigate to `index` and wait for it to land.
fn go_to(state: &mut CardSliderState, geometry: SliderGeometry, index: isize) {
    state.update(SliderMessage::Navigate(index));
    settle(state, geometry);
}
