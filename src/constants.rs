//! Application-wide constants for the slidekit showcase.

/// Default window / viewport size for headless runs
pub mod window {
    /// Phone-sized default so the slider starts in compact mode
    pub const DEFAULT_SIZE: (u32, u32) = (375, 780);

    /// Desktop size used by the tour to show the grid
    pub const DESKTOP_SIZE: (u32, u32) = (1280, 800);
}

/// Viewport width when the configuration does not name one
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 375.0;

/// Frames pumped at most while waiting for the slider to settle
pub const MAX_SETTLE_FRAMES: usize = 120;

/// Interval between pumped frames
pub const FRAME_INTERVAL_MS: u64 = 16;

pub const HEADING: &str = "One platform for the whole business";
pub const HEADING_SIZE: f32 = 22.0;
pub const PAGE_PADDING: f32 = 16.0;
pub const SECTION_SPACING: f32 = 12.0;
