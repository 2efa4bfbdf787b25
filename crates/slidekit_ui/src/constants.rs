//! Centralized constants for slidekit_ui
//!
//! All magic numbers and repeated constants are defined here for consistency
//! and easy maintenance.

use crate::renderer::Color;

// =============================================================================
// Responsive breakpoints
// =============================================================================

/// Viewport width (px) at which the `sm` utility prefix starts
pub const BREAKPOINT_SM: f32 = 640.0;

/// Viewport width (px) at which the `md` breakpoint starts
pub const BREAKPOINT_MD: f32 = 768.0;

/// Viewport width (px) at which the `lg` breakpoint starts
pub const BREAKPOINT_LG: f32 = 1024.0;

/// Viewport widths (px) of the `xl` and `2xl` utility prefixes
pub const BREAKPOINT_XL: f32 = 1280.0;
pub const BREAKPOINT_2XL: f32 = 1536.0;

/// Root font size used to resolve `rem` lengths
pub const ROOT_FONT_SIZE: f32 = 16.0;

/// Pixels per step of utility spacing classes (`gap-4` = 16px)
pub const SPACING_UNIT: f32 = 4.0;

// =============================================================================
// Slider layout
// =============================================================================

/// Gap between cards in compact mode
pub const COMPACT_ITEM_GAP: f32 = 16.0;

/// Default grid gap in expanded mode when the class list names none
pub const EXPANDED_DEFAULT_GAP: f32 = 24.0;

/// Default column count in expanded mode when the class list names none
pub const EXPANDED_DEFAULT_COLUMNS: usize = 3;

/// Vertical space between the card row and the indicator strip
pub const INDICATOR_MARGIN_TOP: f32 = 16.0;

// =============================================================================
// Indicator strip
// =============================================================================

/// Height of an indicator dot
pub const INDICATOR_HEIGHT: f32 = 8.0;

/// Width of an inactive indicator dot
pub const INDICATOR_WIDTH: f32 = 8.0;

/// Width of the active indicator pill
pub const INDICATOR_ACTIVE_WIDTH: f32 = 24.0;

/// Horizontal gap between indicator controls
pub const INDICATOR_GAP: f32 = 8.0;

/// Extra hit-test slop around each indicator control
pub const INDICATOR_HIT_SLOP: f32 = 6.0;

pub const INDICATOR_COLOR: Color = Color::rgb(0.78, 0.80, 0.84);
pub const INDICATOR_ACTIVE_COLOR: Color = Color::rgb(0.15, 0.39, 0.92);

// =============================================================================
// Scrolling
// =============================================================================

/// Duration of a programmatic smooth scroll
pub const SMOOTH_SCROLL_MS: u64 = 300;

/// Idle time after manual scrolling before snapping to the nearest card
pub const SNAP_IDLE_MS: u64 = 120;

/// Offsets closer than this to the target are considered settled
pub const SCROLL_EPSILON: f32 = 0.5;

// =============================================================================
// Cards
// =============================================================================

pub const CARD_PADDING: f32 = 16.0;
pub const CARD_TITLE_SIZE: f32 = 18.0;
pub const CARD_BODY_SIZE: f32 = 14.0;
pub const CARD_MIN_HEIGHT: f32 = 160.0;

/// Line height as a ratio of font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.4;

/// Approximate character width as a ratio of font size
/// Used for text measurement approximation
pub const CHAR_WIDTH_FACTOR: f32 = 0.6;

pub const CARD_BACKGROUND: Color = Color::WHITE;
pub const CARD_BORDER: Color = Color::rgb(0.89, 0.91, 0.94);
pub const CARD_TITLE_COLOR: Color = Color::rgb(0.07, 0.09, 0.15);
pub const CARD_BODY_COLOR: Color = Color::rgb(0.29, 0.33, 0.39);

/// Calculate approximate character width for a given font size
#[inline]
pub fn char_width(font_size: f32) -> f32 {
    font_size * CHAR_WIDTH_FACTOR
}

/// Calculate line height for a given font size
#[inline]
pub fn line_height(font_size: f32) -> f32 {
    font_size * LINE_HEIGHT_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoints_are_ordered() {
        assert!(BREAKPOINT_MD < BREAKPOINT_LG);
    }

    #[test]
    fn test_active_indicator_is_wider() {
        assert!(INDICATOR_ACTIVE_WIDTH > INDICATOR_WIDTH);
    }

    #[test]
    fn test_char_width() {
        assert!((char_width(10.0) - 6.0).abs() < 0.001);
    }

    #[test]
    fn test_line_height() {
        assert!((line_height(10.0) - 14.0).abs() < 0.001);
    }
}
