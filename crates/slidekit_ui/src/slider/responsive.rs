//! Responsive layout switch: compact scroll row versus expanded grid.
//!
//! Mode selection is a pure function of the viewport width and the
//! configured breakpoint. Per-item styling in expanded mode can be a fixed
//! class or a strategy invoked with the item's position.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::constants::{
    BREAKPOINT_2XL, BREAKPOINT_LG, BREAKPOINT_MD, BREAKPOINT_SM, BREAKPOINT_XL,
    EXPANDED_DEFAULT_COLUMNS, EXPANDED_DEFAULT_GAP, SPACING_UNIT,
};
use crate::units::CssSize;

/// Viewport threshold at which the slider turns into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    #[default]
    Md,
    Lg,
}

impl Breakpoint {
    /// Minimum viewport width (px) of this breakpoint.
    pub fn threshold(self) -> f32 {
        match self {
            Breakpoint::Md => BREAKPOINT_MD,
            Breakpoint::Lg => BREAKPOINT_LG,
        }
    }

    /// Utility-class prefix, e.g. `md`.
    pub fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
        }
    }
}

/// The two layout states of the slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Horizontally scrolling, snap-aligned row with indicators
    Compact,
    /// Static grid; no scrolling, no indicators
    Expanded,
}

impl LayoutMode {
    pub fn is_scrollable(self) -> bool {
        self == LayoutMode::Compact
    }

    pub fn shows_indicators(self) -> bool {
        self == LayoutMode::Compact
    }
}

/// Select the layout mode for a viewport width.
pub fn layout_mode(viewport_width: f32, breakpoint: Breakpoint) -> LayoutMode {
    if viewport_width >= breakpoint.threshold() {
        LayoutMode::Expanded
    } else {
        LayoutMode::Compact
    }
}

/// Per-item class applied in expanded mode.
#[derive(Clone, Default)]
pub enum ItemClass {
    #[default]
    None,
    /// Same class for every item
    Fixed(String),
    /// Class computed from the item's index
    PerIndex(Rc<dyn Fn(usize) -> String>),
}

impl ItemClass {
    pub fn per_index<F>(f: F) -> Self
    where
        F: Fn(usize) -> String + 'static,
    {
        ItemClass::PerIndex(Rc::new(f))
    }

    pub fn class_for(&self, index: usize) -> Option<String> {
        match self {
            ItemClass::None => None,
            ItemClass::Fixed(class) => Some(class.clone()),
            ItemClass::PerIndex(f) => Some(f(index)),
        }
    }
}

impl fmt::Debug for ItemClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemClass::None => write!(f, "None"),
            ItemClass::Fixed(class) => f.debug_tuple("Fixed").field(class).finish(),
            ItemClass::PerIndex(_) => write!(f, "PerIndex(..)"),
        }
    }
}

/// Caller-supplied layout configuration, read-only for the widget's lifetime.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub breakpoint: Breakpoint,
    /// Item width in compact mode
    pub mobile_item_width: CssSize,
    /// Item width in expanded mode; `None` sizes to the grid cell
    pub desktop_item_width: Option<CssSize>,
    pub desktop_item_class: ItemClass,
    /// Container classes applied only in expanded mode
    pub desktop_class_name: String,
    /// Outer wrapper classes applied in both modes
    pub class_name: String,
    /// Accessible name of the slider region
    pub label: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::Md,
            mobile_item_width: CssSize::percent(85.0),
            desktop_item_width: None,
            desktop_item_class: ItemClass::None,
            desktop_class_name: "grid-cols-3 gap-6".to_string(),
            class_name: String::new(),
            label: "Carousel".to_string(),
        }
    }
}

/// Resolved styling for one item in a given mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemLayout {
    pub width: CssSize,
    pub class_name: Option<String>,
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn mobile_item_width(mut self, width: CssSize) -> Self {
        self.mobile_item_width = width;
        self
    }

    pub fn desktop_item_width(mut self, width: CssSize) -> Self {
        self.desktop_item_width = Some(width);
        self
    }

    pub fn desktop_item_class(mut self, class: ItemClass) -> Self {
        self.desktop_item_class = class;
        self
    }

    pub fn desktop_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.desktop_class_name = class_name.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn mode_for(&self, viewport_width: f32) -> LayoutMode {
        layout_mode(viewport_width, self.breakpoint)
    }

    /// Styling of the item at `index` in `mode`.
    pub fn item_layout(&self, mode: LayoutMode, index: usize) -> ItemLayout {
        match mode {
            LayoutMode::Compact => ItemLayout {
                width: self.mobile_item_width.clone(),
                class_name: None,
            },
            LayoutMode::Expanded => ItemLayout {
                width: self.desktop_item_width.clone().unwrap_or(CssSize::Auto),
                class_name: self.desktop_item_class.class_for(index),
            },
        }
    }

    /// Container classes in effect for `mode`.
    pub fn container_classes(&self, mode: LayoutMode) -> String {
        match mode {
            LayoutMode::Compact => self.class_name.clone(),
            LayoutMode::Expanded => join_classes(&self.class_name, &self.desktop_class_name),
        }
    }

    /// Grid settings of the expanded container at `viewport_width`.
    pub fn grid(&self, viewport_width: f32) -> UtilityClasses {
        UtilityClasses::parse(&self.desktop_class_name, viewport_width)
    }
}

fn join_classes(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (true, _) => b.to_string(),
        (_, true) => a.to_string(),
        _ => format!("{a} {b}"),
    }
}

/// The subset of utility classes the toolkit renderer understands.
///
/// `grid-cols-N`, `gap-N` and `col-span-N`, optionally behind a responsive
/// prefix such as `md:`. Anything else is ignored here and left for the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UtilityClasses {
    pub columns: Option<usize>,
    pub gap: Option<f32>,
    pub col_span: Option<usize>,
}

/// Minimum viewport width of a responsive prefix; `None` for prefixes that
/// are not width based (`hover:`, `dark:`, ...).
fn prefix_min_width(prefix: &str) -> Option<f32> {
    match prefix {
        "" => Some(0.0),
        "sm" => Some(BREAKPOINT_SM),
        "md" => Some(BREAKPOINT_MD),
        "lg" => Some(BREAKPOINT_LG),
        "xl" => Some(BREAKPOINT_XL),
        "2xl" => Some(BREAKPOINT_2XL),
        _ => None,
    }
}

/// Keep `value` when its prefix is at least as wide as the current winner,
/// so the widest active prefix wins and later classes break ties.
fn cascade<T>(slot: &mut Option<(f32, T)>, min_width: f32, value: Option<T>) {
    let Some(value) = value else { return };
    if slot.as_ref().is_none_or(|(width, _)| min_width >= *width) {
        *slot = Some((min_width, value));
    }
}

impl UtilityClasses {
    /// Parse `classes` as they apply at `viewport_width`.
    ///
    /// Prefixed classes only count once the viewport reaches the prefix's
    /// width, and a wider prefix overrides a narrower one, as in the CSS
    /// cascade the DOM uses.
    pub fn parse(classes: &str, viewport_width: f32) -> Self {
        let mut columns = None;
        let mut gap = None;
        let mut col_span = None;
        for class in classes.split_whitespace() {
            let (prefix, utility) = class.rsplit_once(':').unwrap_or(("", class));
            let Some(min_width) = prefix_min_width(prefix) else {
                continue;
            };
            if viewport_width < min_width {
                continue;
            }
            if let Some(n) = utility.strip_prefix("grid-cols-") {
                cascade(&mut columns, min_width, n.parse().ok().filter(|&n: &usize| n > 0));
            } else if let Some(n) = utility.strip_prefix("col-span-") {
                cascade(&mut col_span, min_width, n.parse().ok().filter(|&n: &usize| n > 0));
            } else if let Some(n) = utility.strip_prefix("gap-") {
                cascade(&mut gap, min_width, n.parse::<f32>().ok().map(|n| n * SPACING_UNIT));
            }
        }
        Self {
            columns: columns.map(|(_, n)| n),
            gap: gap.map(|(_, n)| n),
            col_span: col_span.map(|(_, n)| n),
        }
    }

    pub fn columns_or_default(&self) -> usize {
        self.columns.unwrap_or(EXPANDED_DEFAULT_COLUMNS)
    }

    pub fn gap_or_default(&self) -> f32 {
        self.gap.unwrap_or(EXPANDED_DEFAULT_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_switches_at_threshold() {
        assert_eq!(layout_mode(767.0, Breakpoint::Md), LayoutMode::Compact);
        assert_eq!(layout_mode(768.0, Breakpoint::Md), LayoutMode::Expanded);
        assert_eq!(layout_mode(1023.0, Breakpoint::Lg), LayoutMode::Compact);
        assert_eq!(layout_mode(1024.0, Breakpoint::Lg), LayoutMode::Expanded);
    }

    #[test]
    fn breakpoint_toggle_is_stateless() {
        // 900px sits between md and lg
        for _ in 0..3 {
            assert_eq!(layout_mode(900.0, Breakpoint::Md), LayoutMode::Expanded);
            assert_eq!(layout_mode(900.0, Breakpoint::Lg), LayoutMode::Compact);
        }
    }

    #[test]
    fn compact_items_use_mobile_width() {
        let config = LayoutConfig::new()
            .mobile_item_width(CssSize::px(300.0))
            .desktop_item_class(ItemClass::Fixed("shadow".into()));
        let item = config.item_layout(LayoutMode::Compact, 2);
        assert_eq!(item.width, CssSize::px(300.0));
        assert_eq!(item.class_name, None);
    }

    #[test]
    fn expanded_items_use_desktop_rules() {
        let config = LayoutConfig::new().desktop_item_class(ItemClass::per_index(|i| {
            if i % 3 == 0 {
                "col-span-2".to_string()
            } else {
                "col-span-1".to_string()
            }
        }));
        let first = config.item_layout(LayoutMode::Expanded, 0);
        assert_eq!(first.width, CssSize::Auto);
        assert_eq!(first.class_name.as_deref(), Some("col-span-2"));
        assert_eq!(
            config.item_layout(LayoutMode::Expanded, 1).class_name.as_deref(),
            Some("col-span-1")
        );

        let fixed = LayoutConfig::new().desktop_item_width(CssSize::px(240.0));
        assert_eq!(fixed.item_layout(LayoutMode::Expanded, 4).width, CssSize::px(240.0));
    }

    #[test]
    fn container_classes_depend_on_mode() {
        let config = LayoutConfig::new()
            .class_name("mt-8")
            .desktop_class_name("grid-cols-4");
        assert_eq!(config.container_classes(LayoutMode::Compact), "mt-8");
        assert_eq!(config.container_classes(LayoutMode::Expanded), "mt-8 grid-cols-4");
    }

    #[test]
    fn utility_classes_parse_known_subset() {
        let parsed = UtilityClasses::parse("md:grid-cols-2 lg:grid-cols-4 gap-6 text-sm", 1280.0);
        assert_eq!(parsed.columns, Some(4));
        assert_eq!(parsed.gap, Some(24.0));
        assert_eq!(parsed.col_span, None);

        let empty = UtilityClasses::parse("grid-cols-0 col-span-x", 1280.0);
        assert_eq!(empty.columns_or_default(), EXPANDED_DEFAULT_COLUMNS);
        assert_eq!(empty.col_span, None);
    }

    #[test]
    fn utility_prefixes_follow_the_viewport() {
        let classes = "lg:grid-cols-4 md:grid-cols-2 grid-cols-1";
        assert_eq!(UtilityClasses::parse(classes, 500.0).columns, Some(1));
        assert_eq!(UtilityClasses::parse(classes, 800.0).columns, Some(2));
        assert_eq!(UtilityClasses::parse(classes, 1100.0).columns, Some(4));

        // Non-width prefixes never apply natively.
        let hover = UtilityClasses::parse("hover:col-span-2 gap-2", 1100.0);
        assert_eq!(hover.col_span, None);
        assert_eq!(hover.gap, Some(8.0));
    }
}
