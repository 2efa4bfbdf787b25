//! DOM binding of the card slider for `wasm32` targets.
//!
//! The browser owns scrolling here: the row is a native overflow scroller
//! with CSS scroll snapping, and [`DomViewport`] adapts it to
//! [`ViewportPort`] so the shared tracker, controller and keyboard logic
//! drive it unchanged.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, HtmlElement, KeyboardEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::constants::COMPACT_ITEM_GAP;
use crate::event::Key;
use crate::slider::indicator::{self, IndicatorControl};
use crate::slider::port::ViewportPort;
use crate::slider::responsive::{LayoutConfig, LayoutMode};
use crate::slider::{controller, keyboard, tracker};
use crate::state::SliderState;

/// Errors raised while building or wiring the DOM.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element <{0}> is not an HTML element")]
    NotHtml(String),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        WebError::Js(format!("{:?}", value))
    }
}

/// A native overflow scroller seen through [`ViewportPort`].
#[derive(Debug, Clone)]
pub struct DomViewport {
    window: Window,
    scroller: HtmlElement,
}

impl DomViewport {
    pub fn new(window: Window, scroller: HtmlElement) -> Self {
        Self { window, scroller }
    }
}

impl ViewportPort for DomViewport {
    fn unit_size(&self) -> f32 {
        self.scroller
            .first_element_child()
            .map_or(0.0, |item| item.get_bounding_client_rect().width() as f32)
    }

    fn scroll_offset(&self) -> f32 {
        self.scroller.scroll_left() as f32
    }

    fn viewport_width(&self) -> f32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .map_or(0.0, |width| width as f32)
    }

    fn scroll_to(&mut self, offset: f32, animated: bool) {
        let options = ScrollToOptions::new();
        options.set_left(f64::from(offset));
        options.set_behavior(if animated {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        });
        self.scroller.scroll_to_with_scroll_to_options(&options);
    }
}

struct Inner {
    config: LayoutConfig,
    slider: SliderState,
    mode: LayoutMode,
    viewport: DomViewport,
    document: Document,
    root: HtmlElement,
    items: Vec<HtmlElement>,
    /// Spacer after the last slide
    trailer: HtmlElement,
    strip: HtmlElement,
    indicators: Vec<HtmlElement>,
    /// Click handlers of the current indicator buttons
    indicator_listeners: Vec<Closure<dyn FnMut(Event)>>,
}

type Shared = Rc<RefCell<Inner>>;

/// A card slider mounted into the document.
///
/// Listeners live as long as this value. Dropping it detaches them; call
/// [`DomSlider::keep_alive`] for a slider that lives as long as the page.
pub struct DomSlider {
    inner: Shared,
    scroller: HtmlElement,
    window: Window,
    on_scroll: Closure<dyn FnMut(Event)>,
    on_keydown: Closure<dyn FnMut(Event)>,
    on_resize: Closure<dyn FnMut(Event)>,
}

impl DomSlider {
    /// Wrap `children` in a slider and append it to `parent`.
    pub fn mount(
        parent: &Element,
        children: Vec<Element>,
        config: LayoutConfig,
    ) -> Result<Self, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let root = create(&document, "div")?;
        root.set_attribute("role", "region")?;
        root.set_attribute("aria-roledescription", "carousel")?;
        root.set_attribute("aria-label", &config.label)?;

        let scroller = create(&document, "div")?;
        scroller.set_tab_index(0);
        root.append_child(&scroller)?;

        let mut items = Vec::with_capacity(children.len());
        for child in &children {
            let wrapper = create(&document, "div")?;
            wrapper.set_attribute("aria-roledescription", "slide")?;
            wrapper.append_child(child)?;
            scroller.append_child(&wrapper)?;
            items.push(wrapper);
        }
        let trailer = create(&document, "div")?;
        trailer.set_attribute("aria-hidden", "true")?;
        scroller.append_child(&trailer)?;

        let strip = create(&document, "div")?;
        strip.set_attribute("style", STRIP_STYLE)?;
        root.append_child(&strip)?;
        parent.append_child(&root)?;

        let viewport = DomViewport::new(window.clone(), scroller.clone());
        let mode = config.mode_for(viewport.viewport_width());
        let inner = Rc::new(RefCell::new(Inner {
            config,
            slider: SliderState::new(children.len()),
            mode,
            viewport,
            document,
            root,
            items,
            trailer,
            strip,
            indicators: Vec::new(),
            indicator_listeners: Vec::new(),
        }));
        apply_mode(&inner, &scroller)?;

        let on_scroll = {
            let inner = Rc::clone(&inner);
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let changed = {
                    let mut guard = inner.borrow_mut();
                    let Inner {
                        slider, viewport, ..
                    } = &mut *guard;
                    tracker::on_scroll(slider, viewport)
                };
                if changed.is_some() {
                    refresh_indicators(&inner);
                }
            })
        };
        let passive = AddEventListenerOptions::new();
        passive.set_passive(true);
        scroller.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            on_scroll.as_ref().unchecked_ref(),
            &passive,
        )?;

        let on_keydown = {
            let inner = Rc::clone(&inner);
            Closure::<dyn FnMut(Event)>::new(move |event: Event| {
                let Some(key) = event
                    .dyn_ref::<KeyboardEvent>()
                    .and_then(|event| Key::from_dom_key(&event.key()))
                else {
                    return;
                };
                let mut guard = inner.borrow_mut();
                if !guard.mode.is_scrollable() {
                    return;
                }
                let Inner {
                    slider, viewport, ..
                } = &mut *guard;
                // Key events only reach the scroller while it has focus.
                if keyboard::handle_key(slider, viewport, true, key) {
                    event.prevent_default();
                }
            })
        };
        scroller.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

        let on_resize = {
            let inner = Rc::clone(&inner);
            let scroller = scroller.clone();
            Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                if let Err(err) = handle_resize(&inner, &scroller) {
                    log::warn!("slider resize handling failed: {}", err);
                }
            })
        };
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;

        log::info!(
            "mounted card slider with {} slides in {:?} mode",
            children.len(),
            mode
        );

        Ok(Self {
            inner,
            scroller,
            window,
            on_scroll,
            on_keydown,
            on_resize,
        })
    }

    pub fn active_index(&self) -> usize {
        self.inner.borrow().slider.active_index()
    }

    pub fn mode(&self) -> LayoutMode {
        self.inner.borrow().mode
    }

    /// The outer region element.
    pub fn root(&self) -> HtmlElement {
        self.inner.borrow().root.clone()
    }

    /// Smoothly scroll to slide `target` (clamped).
    pub fn scroll_to_slide(&self, target: isize) -> Option<f32> {
        let mut guard = self.inner.borrow_mut();
        let Inner {
            slider, viewport, ..
        } = &mut *guard;
        controller::scroll_to_slide(slider, viewport, target)
    }

    /// Leave the listeners attached for the lifetime of the page.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

impl Drop for DomSlider {
    fn drop(&mut self) {
        let _ = self.scroller.remove_event_listener_with_callback(
            "scroll",
            self.on_scroll.as_ref().unchecked_ref(),
        );
        let _ = self.scroller.remove_event_listener_with_callback(
            "keydown",
            self.on_keydown.as_ref().unchecked_ref(),
        );
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
    }
}

const SCROLLER_COMPACT_STYLE: &str = "display:flex;overflow-x:auto;overflow-y:hidden;\
     scroll-snap-type:x mandatory;scrollbar-width:none;-webkit-overflow-scrolling:touch";
const SCROLLER_EXPANDED_STYLE: &str = "display:grid";
const STRIP_STYLE: &str = "display:flex;justify-content:center;gap:8px;margin-top:16px";

fn create(document: &Document, tag: &str) -> Result<HtmlElement, WebError> {
    document
        .create_element(tag)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::NotHtml(tag.to_string()))
}

fn handle_resize(inner: &Shared, scroller: &HtmlElement) -> Result<(), WebError> {
    let mode_changed = {
        let mut guard = inner.borrow_mut();
        let mode = guard.config.mode_for(guard.viewport.viewport_width());
        let changed = mode != guard.mode;
        guard.mode = mode;
        changed
    };
    if mode_changed {
        apply_mode(inner, scroller)?;
    } else {
        size_trailer(&inner.borrow())?;
    }
    let changed = {
        let mut guard = inner.borrow_mut();
        let Inner {
            slider, viewport, ..
        } = &mut *guard;
        tracker::on_scroll(slider, viewport)
    };
    if changed.is_some() || mode_changed {
        refresh_indicators(inner);
    }
    Ok(())
}

/// Restyle container and items for the current mode and rebuild the strip.
fn apply_mode(inner: &Shared, scroller: &HtmlElement) -> Result<(), WebError> {
    let mut guard = inner.borrow_mut();
    let mode = guard.mode;
    log::debug!("slider layout mode {:?}", mode);

    guard
        .root
        .set_class_name(&guard.config.container_classes(LayoutMode::Compact));
    match mode {
        LayoutMode::Compact => {
            scroller.set_class_name("");
            scroller.set_attribute("style", SCROLLER_COMPACT_STYLE)?;
        }
        LayoutMode::Expanded => {
            scroller.set_class_name(&guard.config.desktop_class_name);
            scroller.set_attribute("style", SCROLLER_EXPANDED_STYLE)?;
            scroller.set_scroll_left(0);
        }
    }

    for (index, item) in guard.items.iter().enumerate() {
        let layout = guard.config.item_layout(mode, index);
        let width = if layout.width.is_auto() {
            String::new()
        } else {
            format!("width:{};", layout.width)
        };
        let style = match mode {
            LayoutMode::Compact => format!(
                "{width}flex:0 0 auto;box-sizing:border-box;padding-right:{}px;\
                 scroll-snap-align:start",
                COMPACT_ITEM_GAP
            ),
            LayoutMode::Expanded => width,
        };
        item.set_attribute("style", &style)?;
        item.set_class_name(layout.class_name.as_deref().unwrap_or(""));
    }

    size_trailer(&guard)?;

    if !mode.is_scrollable() {
        guard.slider.set_active_index(0);
    }
    drop(guard);
    rebuild_indicators(inner)
}

/// Size the spacer so the last slide can scroll to the leading edge.
fn size_trailer(inner: &Inner) -> Result<(), WebError> {
    let style = match inner.mode {
        LayoutMode::Compact => {
            let width = if inner.items.is_empty() {
                0.0
            } else {
                let row = inner.viewport.scroller.client_width() as f32;
                (row - inner.viewport.unit_size()).max(0.0)
            };
            format!("flex:0 0 auto;width:{width}px")
        }
        LayoutMode::Expanded => "display:none".to_string(),
    };
    inner.trailer.set_attribute("style", &style)?;
    Ok(())
}

fn rebuild_indicators(inner: &Shared) -> Result<(), WebError> {
    let mut guard = inner.borrow_mut();
    guard.strip.set_inner_html("");
    guard.indicators.clear();
    guard.indicator_listeners.clear();

    let controls = indicator::indicator_controls(&guard.slider, guard.mode);
    for control in &controls {
        let button = create(&guard.document, "button")?;
        button.set_attribute("type", "button")?;
        button.set_attribute("aria-label", &control.label)?;
        style_indicator(&button, control)?;

        let index = control.index as isize;
        let shared = Rc::clone(inner);
        let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let mut guard = shared.borrow_mut();
            let Inner {
                slider, viewport, ..
            } = &mut *guard;
            controller::scroll_to_slide(slider, viewport, index);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

        guard.strip.append_child(&button)?;
        guard.indicators.push(button);
        guard.indicator_listeners.push(on_click);
    }
    let hidden = controls.is_empty();
    guard.strip.set_hidden(hidden);
    Ok(())
}

fn refresh_indicators(inner: &Shared) {
    let guard = inner.borrow();
    let controls = indicator::indicator_controls(&guard.slider, guard.mode);
    for (button, control) in guard.indicators.iter().zip(&controls) {
        if let Err(err) = style_indicator(button, control) {
            log::warn!("failed to update indicator {}: {}", control.index, err);
        }
    }
}

fn style_indicator(button: &HtmlElement, control: &IndicatorControl) -> Result<(), WebError> {
    if control.is_current {
        button.set_attribute("aria-current", "true")?;
    } else {
        button.remove_attribute("aria-current")?;
    }
    let width = if control.is_current { 24 } else { 8 };
    let color = if control.is_current { "#2563eb" } else { "#c7ccd6" };
    button.set_attribute(
        "style",
        &format!(
            "width:{width}px;height:8px;border:0;border-radius:4px;padding:0;\
             background:{color};cursor:pointer"
        ),
    )?;
    Ok(())
}
