//! slidekit_ui example application
//!
//! Drives a card slider headlessly: resizes across the breakpoint, moves
//! through the slides with the keyboard and prints what each frame shows.

use slidekit_ui::prelude::*;

/// Demo application state
struct DemoApp {
    config: LayoutConfig,
    slider: CardSliderState,
    titles: Vec<&'static str>,
}

/// Demo messages
#[derive(Debug, Clone)]
enum Message {
    Slider(SliderMessage),
}

impl DemoApp {
    fn new(viewport_width: f32) -> Self {
        let titles = vec!["Inventory", "Finance", "Sales", "Purchasing", "Reports"];
        Self {
            config: LayoutConfig::new()
                .mobile_item_width(CssSize::px(300.0))
                .label("Modules"),
            slider: CardSliderState::new(titles.len(), viewport_width),
            titles,
        }
    }
}

impl Application for DemoApp {
    type Message = Message;

    fn title(&self) -> String {
        "slidekit_ui Demo".to_string()
    }

    fn view(&self) -> Element<'_, Message> {
        let slider = card_slider(&self.config, &self.slider)
            .extend(
                self.titles
                    .iter()
                    .map(|title| card(*title, format!("Everything about {}", title.to_lowercase()))),
            )
            .on_message(Message::Slider);
        column()
            .padding(16.0)
            .spacing(12.0)
            .push(text("slidekit_ui Demo").size(20.0))
            .push(slider)
            .into()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Slider(message) => {
                if let Some(index) = self.slider.update(message) {
                    log::info!("Active slide: {}", self.titles[index]);
                }
            }
        }
    }
}

fn settle(runtime: &mut Runtime<DemoApp>) {
    for _ in 0..60 {
        runtime.tick();
        if runtime.app().slider.is_settled() {
            break;
        }
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
}

fn print_frame(runtime: &mut Runtime<DemoApp>, label: &str) {
    let texts: Vec<String> = runtime.frame().texts().map(str::to_string).collect();
    println!("[{}] visible text: {}", label, texts.join(" | "));
}

fn main() {
    let settings = Settings::default()
        .title("slidekit_ui Demo")
        .size(375, 700)
        .log_level(log::LevelFilter::Info);
    slidekit_ui::init_logging(settings.log_level);

    let mut runtime = Runtime::new(DemoApp::new(375.0), &settings);
    runtime.tick();
    print_frame(&mut runtime, "compact");

    // Focus the row, then walk right with the arrow key.
    runtime.dispatch(Event::MousePressed {
        button: MouseButton::Left,
        position: Point::new(100.0, 120.0),
    });
    for _ in 0..2 {
        runtime.dispatch(Event::KeyPressed {
            key: Key::Right,
            modifiers: Modifiers::default(),
        });
        settle(&mut runtime);
    }
    print_frame(&mut runtime, "after two steps");

    runtime.dispatch(Event::Resized {
        width: 1280.0,
        height: 800.0,
    });
    runtime.tick();
    print_frame(&mut runtime, "expanded");
}
