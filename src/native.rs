//! Headless native runner.
//!
//! There is no window: the showcase is driven through a scripted tour of
//! input events and animation frames, and each recorded frame is summarized
//! on stdout.

use std::time::Duration;

use web_time::Instant;

use slidekit_ui::{DrawCommand, Event, Key, Modifiers, MouseButton, Point, Runtime, Settings};

use crate::app::ShowcaseApp;
use crate::config::AppConfig;
use crate::constants::{window, FRAME_INTERVAL_MS, MAX_SETTLE_FRAMES};

/// One scripted step of the tour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TourStep {
    /// Click inside the card row to give it focus
    Focus,
    /// Press an arrow key
    Key(Key),
    /// Resize the viewport
    Resize(u32, u32),
}

/// The default tour: focus the row, walk to the end and back, then widen
/// the window past the breakpoint.
pub fn default_tour(slides: usize) -> Vec<TourStep> {
    let mut steps = vec![TourStep::Focus];
    steps.extend((1..slides).map(|_| TourStep::Key(Key::Right)));
    steps.push(TourStep::Key(Key::Right));
    steps.push(TourStep::Key(Key::Left));
    steps.push(TourStep::Resize(window::DESKTOP_SIZE.0, window::DESKTOP_SIZE.1));
    steps
}

/// Pump frames until the slider has settled. Without `real_time` the
/// frames run on a virtual clock and return immediately.
fn settle(runtime: &mut Runtime<ShowcaseApp>, real_time: bool) {
    let interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut now = Instant::now();
    for _ in 0..MAX_SETTLE_FRAMES {
        runtime.tick_at(now);
        if runtime.app().slider().is_settled() {
            return;
        }
        if real_time {
            std::thread::sleep(interval);
        }
        now += interval;
    }
    log::warn!("slider still moving after {} frames", MAX_SETTLE_FRAMES);
}

/// Center of the first card, in window coordinates.
fn card_row_point(runtime: &mut Runtime<ShowcaseApp>) -> Option<Point> {
    runtime.frame().commands().iter().find_map(|cmd| match cmd {
        DrawCommand::StrokeRect { rect, .. } => Some(Point::new(
            rect.x + rect.width / 2.0,
            rect.y + rect.height / 2.0,
        )),
        _ => None,
    })
}

/// Apply one step. Returns whether the event was captured.
pub fn apply_step(runtime: &mut Runtime<ShowcaseApp>, step: TourStep) -> bool {
    match step {
        TourStep::Focus => match card_row_point(runtime) {
            Some(position) => runtime.dispatch(Event::MousePressed {
                button: MouseButton::Left,
                position,
            }),
            None => false,
        },
        TourStep::Key(key) => runtime.dispatch(Event::KeyPressed {
            key,
            modifiers: Modifiers::default(),
        }),
        TourStep::Resize(width, height) => runtime.dispatch(Event::Resized {
            width: width as f32,
            height: height as f32,
        }),
    }
}

/// Card titles whose text made it into the current frame.
pub fn visible_titles(runtime: &mut Runtime<ShowcaseApp>) -> Vec<String> {
    let titles: Vec<&str> = crate::content::FEATURES.iter().map(|f| f.title).collect();
    runtime
        .frame()
        .texts()
        .filter(|text| titles.contains(text))
        .map(str::to_string)
        .collect()
}

/// Run the scripted tour with the given configuration.
pub fn run(config: &AppConfig) {
    let width = config.preferences.viewport_width.max(1.0) as u32;
    let settings = Settings::default()
        .title(config.app_name.clone())
        .size(width, window::DEFAULT_SIZE.1)
        .log_level(config.preferences.log_level.to_level_filter());

    let app = ShowcaseApp::new(config);
    let slides = app.slider().child_count();
    let mut runtime = Runtime::new(app, &settings);
    settle(&mut runtime, true);
    let title = runtime.title().to_string();
    println!("{}: {}", title, visible_titles(&mut runtime).join(", "));

    for step in default_tour(slides) {
        let captured = apply_step(&mut runtime, step);
        settle(&mut runtime, true);
        let active = runtime.app().active_feature();
        let visible = visible_titles(&mut runtime);
        println!(
            "{:?} (captured: {}) -> active {:?}, visible: {}",
            step,
            captured,
            active,
            visible.join(", ")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    fn runtime(width: f32) -> Runtime<ShowcaseApp> {
        let mut config = AppConfig::new();
        config.preferences.viewport_width = width;
        config.preferences.log_level = LogLevel::Warn;
        let settings = Settings::default().size(width as u32, window::DEFAULT_SIZE.1);
        let mut runtime = Runtime::new(ShowcaseApp::new(&config), &settings);
        settle(&mut runtime, false);
        runtime
    }

    #[test]
    fn test_default_tour_shape() {
        let steps = default_tour(3);
        assert_eq!(steps.first(), Some(&TourStep::Focus));
        assert_eq!(
            steps.iter().filter(|s| **s == TourStep::Key(Key::Right)).count(),
            3
        );
        assert!(matches!(steps.last(), Some(TourStep::Resize(..))));
    }

    #[test]
    fn test_tour_walks_every_slide() {
        let mut runtime = runtime(375.0);
        assert_eq!(runtime.app().active_feature(), Some("Inventory"));

        let slides = runtime.app().slider().child_count();
        assert!(apply_step(&mut runtime, TourStep::Focus));
        settle(&mut runtime, false);

        for expected in 1..slides {
            assert!(apply_step(&mut runtime, TourStep::Key(Key::Right)));
            settle(&mut runtime, false);
            assert_eq!(runtime.app().slider().active_index(), expected);
        }

        // Pushing past the end keeps the last slide.
        assert!(apply_step(&mut runtime, TourStep::Key(Key::Right)));
        settle(&mut runtime, false);
        assert_eq!(runtime.app().slider().active_index(), slides - 1);
        assert_eq!(runtime.app().visited(), (1..slides).collect::<Vec<_>>());
    }

    #[test]
    fn test_compact_frame_shows_only_leading_cards() {
        let mut runtime = runtime(375.0);
        let visible = visible_titles(&mut runtime);
        // The next card peeks in from the right edge.
        assert_eq!(visible, vec!["Inventory".to_string(), "Finance".to_string()]);
    }

    #[test]
    fn test_resize_to_desktop_shows_grid() {
        let mut runtime = runtime(375.0);
        apply_step(&mut runtime, TourStep::Resize(1280, 800));
        settle(&mut runtime, false);

        assert!(!runtime.app().layout().mode_for(1280.0).is_scrollable());
        assert_eq!(runtime.app().slider().scroll_offset(), 0.0);
        assert_eq!(
            visible_titles(&mut runtime).len(),
            crate::content::FEATURES.len()
        );
    }

    #[test]
    fn test_keys_ignored_without_focus() {
        let mut runtime = runtime(375.0);
        assert!(!apply_step(&mut runtime, TourStep::Key(Key::Right)));
        settle(&mut runtime, false);
        assert_eq!(runtime.app().slider().active_index(), 0);
    }
}
