//! Tests for arrow-key navigation.

use super::{compact, go_to, measured, settle};
use crate::event::Key;
use crate::state::SliderMessage;

#[test]
fn test_arrows_step_by_one() {
    let (mut state, geometry) = compact(5, 300.0);
    state.update(SliderMessage::Focus(true));

    for start in 1..4 {
        go_to(&mut state, geometry, start);

        assert!(state.handle_key(Key::Right));
        settle(&mut state, geometry);
        assert_eq!(state.active_index() as isize, start + 1);

        assert!(state.handle_key(Key::Left));
        settle(&mut state, geometry);
        assert!(state.handle_key(Key::Left));
        settle(&mut state, geometry);
        assert_eq!(state.active_index() as isize, start - 1);
    }
}

#[test]
fn test_arrows_stop_at_the_ends() {
    let (mut state, geometry) = compact(5, 300.0);
    state.update(SliderMessage::Focus(true));

    assert!(state.handle_key(Key::Left), "consumed even at the start");
    settle(&mut state, geometry);
    assert_eq!(state.active_index(), 0);

    go_to(&mut state, geometry, 4);
    for _ in 0..3 {
        assert!(state.handle_key(Key::Right));
        settle(&mut state, geometry);
        assert_eq!(state.active_index(), 4);
    }
}

#[test]
fn test_arrows_walk_to_the_end_of_a_wide_row() {
    let (mut state, geometry) = measured(5, 300.0, 700.0);
    state.update(SliderMessage::Focus(true));

    for expected in 1..5 {
        assert!(state.handle_key(Key::Right));
        settle(&mut state, geometry);
        assert_eq!(state.active_index(), expected);
    }
    assert!(state.handle_key(Key::Right));
    settle(&mut state, geometry);
    assert_eq!(state.active_index(), 4);
}

#[test]
fn test_other_keys_keep_default_behavior() {
    let (mut state, geometry) = compact(5, 300.0);
    state.update(SliderMessage::Focus(true));

    for key in [Key::Up, Key::Down, Key::Enter, Key::Tab, Key::Space] {
        assert!(!state.handle_key(key), "{key:?} must not be consumed");
    }
    settle(&mut state, geometry);
    assert_eq!(state.active_index(), 0);
}

#[test]
fn test_unfocused_slider_ignores_arrows() {
    let (mut state, geometry) = compact(5, 300.0);

    assert!(!state.handle_key(Key::Right));
    settle(&mut state, geometry);
    assert_eq!(state.active_index(), 0);

    state.update(SliderMessage::Focus(true));
    state.update(SliderMessage::Focus(false));
    assert!(!state.handle_key(Key::Right));
}
