//! Adaptive card slider widget.
//!
//! Below the configured breakpoint the cards form a clipped, horizontally
//! scrolling row with an indicator strip underneath. At or above it they are
//! laid out as a static grid and the strip disappears. All scrolling state
//! lives in [`CardSliderState`]; this widget measures, draws and reports
//! [`SliderMessage`]s.

use web_time::Instant;

use crate::callback::Callback;
use crate::constants::{
    COMPACT_ITEM_GAP, INDICATOR_ACTIVE_COLOR, INDICATOR_COLOR, INDICATOR_HEIGHT,
    INDICATOR_HIT_SLOP, INDICATOR_MARGIN_TOP,
};
use crate::slider::indicator::{self, IndicatorControl};
use crate::slider::keyboard;
use crate::slider::responsive::{LayoutConfig, LayoutMode, UtilityClasses};
use crate::state::{CardSliderState, SliderGeometry, SliderMessage};
use crate::units::ResolveContext;
use crate::widget::EventResult;
use crate::{Color, Element, Event, Limits, MouseButton, Point, Rectangle, Renderer, Size, Widget};

const FOCUS_RING_COLOR: Color = Color::rgb(0.15, 0.39, 0.92);

/// Geometry of one layout pass, relative to the widget origin.
#[derive(Debug, Clone)]
struct SliderLayout {
    mode: LayoutMode,
    /// Item wrapper rectangles in content space (before scrolling)
    wrappers: Vec<Rectangle>,
    /// Where each child is drawn inside its wrapper
    items: Vec<Rectangle>,
    /// Visible area of the card row
    row: Rectangle,
    /// Indicator strip area; empty in expanded mode
    strip: Rectangle,
    controls: Vec<IndicatorControl>,
    content_width: f32,
    height: f32,
}

impl SliderLayout {
    fn geometry(&self) -> SliderGeometry {
        let max_scroll = if self.mode.is_scrollable() {
            (self.content_width - self.row.width).max(0.0)
        } else {
            0.0
        };
        SliderGeometry {
            unit_size: self.wrappers.first().map_or(0.0, |w| w.width),
            max_scroll,
        }
    }
}

/// A slider of cards that turns into a grid on wide viewports.
pub struct CardSlider<'a, M> {
    children: Vec<Element<'a, M>>,
    config: &'a LayoutConfig,
    state: &'a CardSliderState,
    /// Override for the card row height
    row_height: Option<f32>,
    on_message: Callback<SliderMessage, M>,
}

impl<'a, M> CardSlider<'a, M> {
    pub fn new(config: &'a LayoutConfig, state: &'a CardSliderState) -> Self {
        Self {
            children: Vec::new(),
            config,
            state,
            row_height: None,
            on_message: Callback::none(),
        }
    }

    /// Append a slide.
    pub fn push(mut self, child: impl Into<Element<'a, M>>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several slides.
    pub fn extend<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Element<'a, M>>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Fix the height of the card row instead of sizing to the tallest card.
    pub fn row_height(mut self, height: f32) -> Self {
        self.row_height = Some(height);
        self
    }

    /// Set the callback receiving slider messages.
    pub fn on_message<F>(mut self, f: F) -> Self
    where
        F: Fn(SliderMessage) -> M + 'static,
    {
        self.on_message = Callback::new(f);
        self
    }

    fn viewport_width(&self, container_width: f32) -> f32 {
        let width = self.state.viewport_width();
        if width > 0.0 {
            width
        } else {
            container_width
        }
    }

    fn compute(&self, container_width: f32) -> SliderLayout {
        self.compute_for(container_width, self.viewport_width(container_width))
    }

    fn compute_for(&self, container_width: f32, viewport_width: f32) -> SliderLayout {
        let mode = self.config.mode_for(viewport_width);
        match mode {
            LayoutMode::Compact => self.compute_compact(container_width, viewport_width),
            LayoutMode::Expanded => self.compute_expanded(container_width, viewport_width),
        }
    }

    fn compute_compact(&self, container_width: f32, viewport_width: f32) -> SliderLayout {
        let ctx = ResolveContext {
            container_width,
            viewport_width,
        };
        let mut wrappers = Vec::with_capacity(self.children.len());
        let mut items = Vec::with_capacity(self.children.len());
        let mut x = 0.0;
        let mut tallest: f32 = 0.0;

        for (index, child) in self.children.iter().enumerate() {
            let rule = self.config.item_layout(LayoutMode::Compact, index);
            let width = match rule.width.resolve(ctx) {
                Some(width) => width,
                None => {
                    child
                        .layout(&Limits::with_range(0.0, f32::INFINITY, 0.0, f32::INFINITY))
                        .width
                        + COMPACT_ITEM_GAP
                }
            };
            // The gap is trailing padding inside the wrapper, so the wrapper
            // width is the scroll pitch.
            let inner_width = (width - COMPACT_ITEM_GAP).max(0.0);
            let size = child.layout(&Limits::fixed_width(inner_width, f32::INFINITY));
            tallest = tallest.max(size.height);
            wrappers.push(Rectangle::new(x, 0.0, width, 0.0));
            items.push(Rectangle::new(x, 0.0, inner_width, 0.0));
            x += width;
        }

        let row_height = self.row_height.unwrap_or(tallest);
        for rect in wrappers.iter_mut().chain(items.iter_mut()) {
            rect.height = row_height;
        }

        let controls = indicator::indicator_controls(self.state.slider(), LayoutMode::Compact);
        let strip = if controls.is_empty() {
            Rectangle::new(0.0, row_height, container_width, 0.0)
        } else {
            Rectangle::new(
                0.0,
                row_height + INDICATOR_MARGIN_TOP,
                container_width,
                INDICATOR_HEIGHT + INDICATOR_HIT_SLOP * 2.0,
            )
        };

        // Trailing space lets the last slide reach the leading edge, so every
        // index has an offset of exactly `index * unit`.
        let trailing = wrappers
            .first()
            .map_or(0.0, |first| (container_width - first.width).max(0.0));

        SliderLayout {
            mode: LayoutMode::Compact,
            wrappers,
            items,
            row: Rectangle::new(0.0, 0.0, container_width, row_height),
            height: strip.bottom(),
            strip,
            controls,
            content_width: x + trailing,
        }
    }

    fn compute_expanded(&self, container_width: f32, viewport_width: f32) -> SliderLayout {
        let grid = self.config.grid(viewport_width);
        let columns = grid.columns_or_default().max(1);
        let gap = grid.gap_or_default();
        let cell = ((container_width - gap * (columns - 1) as f32) / columns as f32).max(0.0);

        let mut wrappers = Vec::with_capacity(self.children.len());
        let mut items = Vec::with_capacity(self.children.len());
        let mut column = 0;
        let mut y = 0.0;
        let mut row_tallest: f32 = 0.0;

        for (index, child) in self.children.iter().enumerate() {
            let rule = self.config.item_layout(LayoutMode::Expanded, index);
            let span = rule
                .class_name
                .as_deref()
                .and_then(|class| UtilityClasses::parse(class, viewport_width).col_span)
                .unwrap_or(1)
                .min(columns);
            if column + span > columns {
                y += row_tallest + gap;
                row_tallest = 0.0;
                column = 0;
            }
            let x = column as f32 * (cell + gap);
            let area = cell * span as f32 + gap * (span - 1) as f32;
            let ctx = ResolveContext {
                container_width: area,
                viewport_width,
            };
            let width = rule.width.resolve(ctx).unwrap_or(area);
            let size = child.layout(&Limits::fixed_width(width, f32::INFINITY));
            let height = self.row_height.unwrap_or(size.height);
            row_tallest = row_tallest.max(height);

            wrappers.push(Rectangle::new(x, y, area, height));
            items.push(Rectangle::new(x, y, width, height));
            column += span;
        }

        let height = if self.children.is_empty() {
            0.0
        } else {
            y + row_tallest
        };

        SliderLayout {
            mode: LayoutMode::Expanded,
            wrappers,
            items,
            row: Rectangle::new(0.0, 0.0, container_width, height),
            strip: Rectangle::new(0.0, height, container_width, 0.0),
            controls: Vec::new(),
            content_width: container_width,
            height,
        }
    }

    fn emit(&self, message: SliderMessage) -> EventResult<M> {
        EventResult::Captured(self.on_message.call(message))
    }

    fn route_to_child(
        &mut self,
        layout: &SliderLayout,
        event: &Event,
        bounds: Rectangle,
        position: Point,
    ) -> EventResult<M> {
        let scroll = if layout.mode.is_scrollable() {
            self.state.scroll_offset()
        } else {
            0.0
        };
        let content = Point::new(position.x - bounds.x + scroll, position.y - bounds.y);
        let Some(index) = layout.items.iter().position(|r| r.contains(content)) else {
            return EventResult::Ignored;
        };
        let item = layout.items[index].translate(bounds.x, bounds.y);
        let translated = match event {
            Event::MousePressed { button, .. } => Event::MousePressed {
                button: *button,
                position: Point::new(position.x + scroll, position.y),
            },
            Event::MouseReleased { button, .. } => Event::MouseReleased {
                button: *button,
                position: Point::new(position.x + scroll, position.y),
            },
            other => other.clone(),
        };
        self.children[index].on_event(&translated, item)
    }
}

impl<'a, M> Widget<M> for CardSlider<'a, M> {
    fn layout(&self, limits: &Limits) -> Size {
        let width = if limits.is_width_bounded() {
            limits.max_width
        } else {
            self.viewport_width(limits.min_width)
        };
        let layout = self.compute(width);
        limits.resolve(width, layout.height)
    }

    fn draw(&self, renderer: &mut Renderer, bounds: Rectangle) {
        let layout = self.compute(bounds.width);
        let row = layout.row.translate(bounds.x, bounds.y);

        if layout.mode.is_scrollable() {
            renderer.push_clip(row);
            renderer.push_scroll_offset_x(self.state.scroll_offset());
        }
        for (child, item) in self.children.iter().zip(&layout.items) {
            child.draw(renderer, item.translate(bounds.x, bounds.y));
        }
        if layout.mode.is_scrollable() {
            renderer.pop_scroll_offset_x();
            renderer.pop_clip();
        }

        if self.state.is_focused() {
            renderer.stroke_rect(row, FOCUS_RING_COLOR, 2.0);
        }

        let strip = layout.strip.translate(bounds.x, bounds.y);
        let rects = indicator::control_rects(&layout.controls, strip);
        for (control, rect) in layout.controls.iter().zip(rects) {
            let color = if control.is_current {
                INDICATOR_ACTIVE_COLOR
            } else {
                INDICATOR_COLOR
            };
            renderer.fill_rect(rect, color);
        }
    }

    fn on_event(&mut self, event: &Event, bounds: Rectangle) -> EventResult<M> {
        let layout = self.compute(bounds.width);

        match event {
            Event::Tick { now } => self.emit(SliderMessage::Frame {
                geometry: layout.geometry(),
                now: *now,
            }),
            Event::Resized { width, .. } => self.emit(SliderMessage::Resized {
                viewport_width: *width,
                geometry: self.compute_for(bounds.width, *width).geometry(),
            }),
            Event::KeyPressed { key, .. } => {
                if !layout.mode.is_scrollable() {
                    return EventResult::Ignored;
                }
                match keyboard::target_for_key(self.state.slider(), self.state.is_focused(), *key) {
                    Some(target) => self.emit(SliderMessage::Navigate(target)),
                    None => EventResult::Ignored,
                }
            }
            Event::MouseWheel {
                delta_x,
                delta_y,
                position,
                modifiers,
            } => {
                let row = layout.row.translate(bounds.x, bounds.y);
                if !layout.mode.is_scrollable() || !row.contains(*position) {
                    return EventResult::Ignored;
                }
                let delta = if *delta_x != 0.0 {
                    *delta_x
                } else if modifiers.shift {
                    *delta_y
                } else {
                    0.0
                };
                if delta == 0.0 || layout.geometry().max_scroll <= 0.0 {
                    return EventResult::Ignored;
                }
                self.emit(SliderMessage::Scrolled {
                    delta,
                    at: Instant::now(),
                })
            }
            Event::MousePressed {
                button: MouseButton::Left,
                position,
            } => {
                let strip = layout.strip.translate(bounds.x, bounds.y);
                let rects = indicator::control_rects(&layout.controls, strip);
                if let Some(index) = indicator::hit_test(&layout.controls, &rects, *position) {
                    log::debug!("indicator {} activated", index);
                    return self.emit(SliderMessage::Navigate(index as isize));
                }

                let row = layout.row.translate(bounds.x, bounds.y);
                if row.contains(*position) {
                    let routed = self.route_to_child(&layout, event, bounds, *position);
                    if routed.is_captured() || self.state.is_focused() {
                        return routed;
                    }
                    return self.emit(SliderMessage::Focus(true));
                }
                if self.state.is_focused() {
                    return self.emit(SliderMessage::Focus(false));
                }
                EventResult::Ignored
            }
            Event::MouseReleased { position, .. } => {
                self.route_to_child(&layout, event, bounds, *position)
            }
            _ => EventResult::Ignored,
        }
    }
}

impl<'a, M: 'a> From<CardSlider<'a, M>> for Element<'a, M> {
    fn from(slider: CardSlider<'a, M>) -> Self {
        Element::new(slider)
    }
}

/// Helper function to create a card slider.
pub fn card_slider<'a, M>(config: &'a LayoutConfig, state: &'a CardSliderState) -> CardSlider<'a, M> {
    CardSlider::new(config, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Key, Modifiers};
    use crate::units::CssSize;
    use crate::widgets::card;

    fn config() -> LayoutConfig {
        LayoutConfig::new().mobile_item_width(CssSize::px(300.0))
    }

    fn slider<'a>(
        config: &'a LayoutConfig,
        state: &'a CardSliderState,
    ) -> CardSlider<'a, SliderMessage> {
        card_slider(config, state)
            .extend((0..5).map(|i| card(format!("Card {i}"), "Body")))
            .on_message(|message| message)
    }

    fn tick() -> Event {
        Event::Tick {
            now: Instant::now(),
        }
    }

    fn bounds(width: f32) -> Rectangle {
        Rectangle::new(0.0, 0.0, width, 400.0)
    }

    fn message(result: EventResult<SliderMessage>) -> SliderMessage {
        match result.into_message() {
            Some(message) => message,
            None => panic!("expected a slider message"),
        }
    }

    #[test]
    fn compact_geometry_uses_wrapper_width_as_unit() {
        let config = config();
        let state = CardSliderState::new(5, 375.0);
        let mut widget = slider(&config, &state);

        match message(widget.on_event(&tick(), bounds(375.0))) {
            SliderMessage::Frame { geometry, .. } => {
                assert_eq!(geometry.unit_size, 300.0);
                // The last card can scroll all the way to the leading edge.
                assert_eq!(geometry.max_scroll, 4.0 * 300.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wide_compact_row_still_reaches_last_card() {
        let config = config();
        let state = CardSliderState::new(5, 700.0);
        let mut widget = slider(&config, &state);

        match message(widget.on_event(&tick(), bounds(700.0))) {
            SliderMessage::Frame { geometry, .. } => {
                assert_eq!(geometry.unit_size, 300.0);
                assert_eq!(geometry.max_scroll, 1200.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn expanded_layout_is_a_static_grid() {
        let config = config();
        let state = CardSliderState::new(5, 1280.0);
        let mut widget = slider(&config, &state);

        let layout = widget.compute(1280.0);
        assert_eq!(layout.mode, LayoutMode::Expanded);
        assert!(layout.controls.is_empty());
        // grid-cols-3 gap-6: three 24px-separated columns
        let cell = (1280.0 - 48.0) / 3.0;
        assert_eq!(layout.items[1].x, cell + 24.0);
        assert_eq!(layout.items[3].x, 0.0);
        assert!(layout.items[3].y > 0.0);

        match message(widget.on_event(&tick(), bounds(1280.0))) {
            SliderMessage::Frame { geometry, .. } => assert_eq!(geometry.max_scroll, 0.0),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn col_span_classes_widen_items() {
        let config = config()
            .desktop_class_name("md:grid-cols-4 md:gap-4")
            .desktop_item_class(crate::slider::ItemClass::per_index(|i| {
                if i == 0 {
                    "md:col-span-2".to_string()
                } else {
                    String::new()
                }
            }));
        let state = CardSliderState::new(5, 1000.0);
        let widget = slider(&config, &state);

        let layout = widget.compute(1000.0);
        let cell = (1000.0 - 48.0) / 4.0;
        assert_eq!(layout.items[0].width, cell * 2.0 + 16.0);
        assert_eq!(layout.items[1].x, 2.0 * (cell + 16.0));
    }

    #[test]
    fn draw_clips_row_and_shows_indicators() {
        let config = config();
        let state = CardSliderState::new(5, 375.0);
        let widget = slider(&config, &state);
        let mut renderer = Renderer::new(375, 400);

        Widget::draw(&widget, &mut renderer, bounds(375.0));

        let texts: Vec<_> = renderer.texts().collect();
        assert!(texts.contains(&"Card 0"));
        assert!(texts.contains(&"Card 1"));
        assert!(!texts.contains(&"Card 2"));

        let dots = renderer
            .commands()
            .iter()
            .filter(|cmd| {
                matches!(cmd, crate::renderer::DrawCommand::FillRect { color, .. }
                    if *color == INDICATOR_COLOR || *color == INDICATOR_ACTIVE_COLOR)
            })
            .count();
        assert_eq!(dots, 5);
    }

    #[test]
    fn arrow_keys_navigate_only_when_focused() {
        let config = config();
        let mut state = CardSliderState::new(5, 375.0);
        let right = Event::KeyPressed {
            key: Key::Right,
            modifiers: Modifiers::default(),
        };

        let mut widget = slider(&config, &state);
        assert!(!widget.on_event(&right, bounds(375.0)).is_captured());
        drop(widget);

        state.update(SliderMessage::Focus(true));
        let mut widget = slider(&config, &state);
        assert_eq!(
            message(widget.on_event(&right, bounds(375.0))),
            SliderMessage::Navigate(1)
        );
    }

    #[test]
    fn click_on_indicator_navigates() {
        let config = config();
        let state = CardSliderState::new(5, 375.0);
        let mut widget = slider(&config, &state);

        let layout = widget.compute(375.0);
        let rects = indicator::control_rects(&layout.controls, layout.strip);
        let target = rects[3];
        let click = Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(target.x + target.width / 2.0, target.y + target.height / 2.0),
        };
        assert_eq!(
            message(widget.on_event(&click, bounds(375.0))),
            SliderMessage::Navigate(3)
        );
    }

    #[test]
    fn click_in_row_focuses_and_outside_blurs() {
        let config = config();
        let mut state = CardSliderState::new(5, 375.0);
        let inside = Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(100.0, 50.0),
        };
        let outside = Event::MousePressed {
            button: MouseButton::Left,
            position: Point::new(100.0, 390.0),
        };

        let mut widget = slider(&config, &state);
        assert_eq!(
            message(widget.on_event(&inside, bounds(375.0))),
            SliderMessage::Focus(true)
        );
        drop(widget);
        state.update(SliderMessage::Focus(true));

        let mut widget = slider(&config, &state);
        assert_eq!(
            message(widget.on_event(&outside, bounds(375.0))),
            SliderMessage::Focus(false)
        );
    }

    #[test]
    fn horizontal_wheel_scrolls_and_vertical_passes_through() {
        let config = config();
        let state = CardSliderState::new(5, 375.0);
        let mut widget = slider(&config, &state);
        let wheel = |delta_x, delta_y, shift| Event::MouseWheel {
            delta_x,
            delta_y,
            position: Point::new(100.0, 50.0),
            modifiers: Modifiers {
                shift,
                ..Modifiers::default()
            },
        };

        match message(widget.on_event(&wheel(40.0, 0.0, false), bounds(375.0))) {
            SliderMessage::Scrolled { delta, .. } => assert_eq!(delta, 40.0),
            other => panic!("unexpected {other:?}"),
        }
        match message(widget.on_event(&wheel(0.0, 25.0, true), bounds(375.0))) {
            SliderMessage::Scrolled { delta, .. } => assert_eq!(delta, 25.0),
            other => panic!("unexpected {other:?}"),
        }
        assert!(!widget
            .on_event(&wheel(0.0, 25.0, false), bounds(375.0))
            .is_captured());
    }

    #[test]
    fn resize_reports_geometry_for_new_mode() {
        let config = config();
        let state = CardSliderState::new(5, 375.0);
        let mut widget = slider(&config, &state);
        let resized = Event::Resized {
            width: 1280.0,
            height: 800.0,
        };

        match message(widget.on_event(&resized, bounds(1280.0))) {
            SliderMessage::Resized {
                viewport_width,
                geometry,
            } => {
                assert_eq!(viewport_width, 1280.0);
                assert_eq!(geometry.max_scroll, 0.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
