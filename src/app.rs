//! slidekit showcase application
//!
//! A landing-page section: a heading over the ERP feature cards, shown as a
//! swipeable slider on phones and a grid on wider screens.

use slidekit_ui::prelude::*;

use crate::config::AppConfig;
use crate::constants::{HEADING, HEADING_SIZE, PAGE_PADDING, SECTION_SPACING};
use crate::content::{Feature, FEATURES};
use crate::message::Message;

/// Showcase application state.
pub struct ShowcaseApp {
    layout: LayoutConfig,
    slider: CardSliderState,
    features: Vec<Feature>,
    /// Slides that became active, in order
    visited: Vec<usize>,
}

impl ShowcaseApp {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_features(config, FEATURES.to_vec())
    }

    pub fn with_features(config: &AppConfig, features: Vec<Feature>) -> Self {
        let layout = config.slider.to_layout_config();
        let slider = CardSliderState::new(features.len(), config.preferences.viewport_width);
        log::debug!(
            "showcase with {} features, initial mode {:?}",
            features.len(),
            layout.mode_for(config.preferences.viewport_width)
        );
        Self {
            layout,
            slider,
            features,
            visited: Vec::new(),
        }
    }

    pub fn slider(&self) -> &CardSliderState {
        &self.slider
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Title of the active feature, if any.
    pub fn active_feature(&self) -> Option<&'static str> {
        self.features
            .get(self.slider.active_index())
            .map(|feature| feature.title)
    }

    pub fn visited(&self) -> &[usize] {
        &self.visited
    }
}

impl Application for ShowcaseApp {
    type Message = Message;

    fn title(&self) -> String {
        self.layout.label.clone()
    }

    fn update(&mut self, message: Message) {
        match message {
            Message::Slider(message) => {
                if let Some(index) = self.slider.update(message) {
                    log::info!(
                        "Active feature: {}",
                        self.features.get(index).map_or("-", |f| f.title)
                    );
                    self.visited.push(index);
                }
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let slider = card_slider(&self.layout, &self.slider)
            .extend(self.features.iter().map(Feature::card))
            .on_message(Message::Slider);

        column()
            .padding(PAGE_PADDING)
            .spacing(SECTION_SPACING)
            .push(text(HEADING).size(HEADING_SIZE))
            .push(slider)
            .into()
    }
}
