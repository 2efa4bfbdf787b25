use web_time::Instant;

use crate::{Element, Event, Rectangle, Renderer};

/// Core application trait that defines the lifecycle of a slidekit_ui application.
///
/// Applications maintain state, respond to messages, and produce a view. The
/// view is rebuilt for every event and every frame, so it should only borrow
/// from the application.
pub trait Application: Sized {
    /// The message type that this application handles.
    type Message: 'static;

    /// Return the window title for the application.
    fn title(&self) -> String;

    /// Update the application state in response to a message.
    fn update(&mut self, message: Self::Message);

    /// Produce the view tree for the current application state.
    fn view(&self) -> Element<'_, Self::Message>;
}

/// Settings for running an application.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Window title (can be overridden by Application::title)
    pub window_title: Option<String>,

    /// Initial window size
    pub window_size: (u32, u32),

    /// Maximum log level
    pub log_level: log::LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: None,
            window_size: (800, 600),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Settings {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.window_title = Some(title.into());
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    pub fn log_level(mut self, level: log::LevelFilter) -> Self {
        self.log_level = level;
        self
    }
}

/// Install the platform logger. Calling it twice keeps the first logger and
/// only adjusts the level.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(level: log::LevelFilter) {
    let installed = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
    if installed.is_err() {
        log::set_max_level(level);
    }
}

/// Install the platform logger. Calling it twice keeps the first logger and
/// only adjusts the level.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(level: log::LevelFilter) {
    let level = level.to_level().unwrap_or(log::Level::Error);
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}

/// Drives an [`Application`] without a window.
///
/// The host feeds it [`Event`]s (input, resizes, animation ticks) and replays
/// the recorded [`Renderer`] frame however it likes. Tests and the example
/// binary use it directly; a windowing backend would do the same from its
/// event loop.
pub struct Runtime<A: Application> {
    app: A,
    renderer: Renderer,
    title: String,
}

impl<A: Application> Runtime<A> {
    pub fn new(app: A, settings: &Settings) -> Self {
        let (width, height) = settings.window_size;
        let title = settings.window_title.clone().unwrap_or_else(|| app.title());
        log::info!("starting '{}' at {}x{}", title, width, height);
        Self {
            app,
            renderer: Renderer::new(width, height),
            title,
        }
    }

    pub fn app(&self) -> &A {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut A {
        &mut self.app
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn bounds(&self) -> Rectangle {
        let (width, height) = self.renderer.size();
        Rectangle::new(0.0, 0.0, width as f32, height as f32)
    }

    /// Route one event through the view and apply the resulting message.
    /// Returns whether a widget captured the event.
    pub fn dispatch(&mut self, event: Event) -> bool {
        if let Event::Resized { width, height } = event {
            self.renderer.resize(width.max(0.0) as u32, height.max(0.0) as u32);
        }
        let bounds = self.bounds();
        let result = {
            let mut view = self.app.view();
            view.on_event(&event, bounds)
        };
        let captured = result.is_captured();
        if let Some(message) = result.into_message() {
            self.app.update(message);
        }
        captured
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// Advance animations to `now`. Lets hosts and tests drive a virtual clock.
    pub fn tick_at(&mut self, now: Instant) {
        self.dispatch(Event::Tick { now });
    }

    /// Record a fresh frame and return it.
    pub fn frame(&mut self) -> &Renderer {
        let bounds = self.bounds();
        self.renderer.begin_frame();
        {
            let view = self.app.view();
            view.draw(&mut self.renderer, bounds);
        }
        &self.renderer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{column, text};

    struct Counter {
        ticks: u32,
    }

    impl Application for Counter {
        type Message = ();

        fn title(&self) -> String {
            "counter".to_string()
        }

        fn update(&mut self, _message: ()) {
            self.ticks += 1;
        }

        fn view(&self) -> Element<'_, ()> {
            column().push(text(format!("ticks: {}", self.ticks))).into()
        }
    }

    #[test]
    fn runtime_uses_settings_title_over_app_title() {
        let runtime = Runtime::new(Counter { ticks: 0 }, &Settings::default().title("demo"));
        assert_eq!(runtime.title(), "demo");
        let runtime = Runtime::new(Counter { ticks: 0 }, &Settings::default());
        assert_eq!(runtime.title(), "counter");
    }

    #[test]
    fn frame_records_view() {
        let mut runtime = Runtime::new(Counter { ticks: 3 }, &Settings::default());
        let texts: Vec<_> = runtime.frame().texts().map(str::to_string).collect();
        assert_eq!(texts, vec!["ticks: 3"]);
    }

    #[test]
    fn resize_updates_surface() {
        let mut runtime = Runtime::new(Counter { ticks: 0 }, &Settings::default());
        let captured = runtime.dispatch(Event::Resized {
            width: 375.0,
            height: 700.0,
        });
        assert!(!captured);
        assert_eq!(runtime.frame().size(), (375, 700));
    }
}
