//! Tests for responsive mode selection.

use crate::slider::responsive::{layout_mode, Breakpoint, LayoutConfig, LayoutMode};

#[test]
fn test_breakpoint_toggle_is_pure() {
    let widths = [320.0, 767.0, 768.0, 900.0, 1023.0, 1024.0, 1440.0];

    for width in widths {
        let md = layout_mode(width, Breakpoint::Md);
        let lg = layout_mode(width, Breakpoint::Lg);
        // Toggle back and forth; nothing carries over.
        for _ in 0..3 {
            assert_eq!(layout_mode(width, Breakpoint::Lg), lg);
            assert_eq!(layout_mode(width, Breakpoint::Md), md);
        }
        assert_eq!(md.is_scrollable(), width < 768.0);
        assert_eq!(lg.is_scrollable(), width < 1024.0);
    }
}

#[test]
fn test_between_breakpoints_depends_only_on_config() {
    let md = LayoutConfig::new().breakpoint(Breakpoint::Md);
    let lg = LayoutConfig::new().breakpoint(Breakpoint::Lg);

    assert_eq!(md.mode_for(900.0), LayoutMode::Expanded);
    assert_eq!(lg.mode_for(900.0), LayoutMode::Compact);
    assert_eq!(md.mode_for(900.0), LayoutMode::Expanded);
}

#[test]
fn test_expanded_mode_hides_indicators() {
    assert!(LayoutMode::Compact.shows_indicators());
    assert!(!LayoutMode::Expanded.shows_indicators());
    assert!(!LayoutMode::Expanded.is_scrollable());
}
