use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use slidekit_ui::web::{DomSlider, WebError};

use crate::config::AppConfig;
use crate::constants::HEADING;
use crate::content::{Feature, FEATURES};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load_from_local_storage();
    slidekit_ui::init_logging(AppConfig::startup_log_level(&loaded).to_level_filter());
    let config = AppConfig::or_default_logged(loaded, "localStorage");
    log::info!("slidekit WASM starting...");

    match mount(&config) {
        Ok(slider) => slider.keep_alive(),
        Err(e) => log::error!("Failed to mount slider: {}", e),
    }
}

/// Build the landing section into the element with id `slidekit`, or the body.
fn mount(config: &AppConfig) -> Result<DomSlider, WebError> {
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    let host: Element = match document.get_element_by_id("slidekit") {
        Some(host) => host,
        None => document
            .body()
            .ok_or(WebError::NoDocument)?
            .unchecked_into(),
    };

    let heading = document.create_element("h2")?;
    heading.set_text_content(Some(HEADING));
    host.append_child(&heading)?;

    let cards = FEATURES
        .iter()
        .map(|feature| feature_card(&document, feature))
        .collect::<Result<Vec<_>, _>>()?;

    DomSlider::mount(&host, cards, config.slider.to_layout_config())
}

fn feature_card(document: &Document, feature: &Feature) -> Result<Element, WebError> {
    let card = document.create_element("article")?;
    card.set_class_name("card");
    let accent = feature.accent;
    card.set_attribute(
        "style",
        &format!(
            "border:1px solid #e3e8ef;border-top:4px solid rgb({},{},{});\
             border-radius:8px;padding:16px;min-height:160px;background:#fff",
            (accent.r * 255.0).round() as u8,
            (accent.g * 255.0).round() as u8,
            (accent.b * 255.0).round() as u8
        ),
    )?;

    let title = document.create_element("h3")?;
    title.set_text_content(Some(feature.title));
    let summary = document.create_element("p")?;
    summary.set_text_content(Some(feature.summary));
    card.append_child(&title)?;
    card.append_child(&summary)?;
    Ok(card)
}
