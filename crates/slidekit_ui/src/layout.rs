//! Layout primitives: sizes, points, rectangles and size limits.

/// Size constraints for widget layout.
///
/// Limits define the minimum and maximum size a widget can have. An
/// infinite `max_width` means the widget sits inside a horizontally
/// unbounded parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Limits {
    /// Create limits with fixed size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            min_width: width,
            max_width: width,
            min_height: height,
            max_height: height,
        }
    }

    /// Create limits with a range of sizes.
    pub fn with_range(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Limits with a fixed width and any height up to `max_height`.
    pub fn fixed_width(width: f32, max_height: f32) -> Self {
        Self::with_range(width, width, 0.0, max_height)
    }

    /// Resolve a size within these limits.
    pub fn resolve(&self, width: f32, height: f32) -> Size {
        Size {
            width: width.max(self.min_width).min(self.max_width),
            height: height.max(self.min_height).min(self.max_height),
        }
    }

    /// Check if width is bounded (finite max_width).
    pub fn is_width_bounded(&self) -> bool {
        self.max_width.is_finite()
    }
}

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Translate this rectangle by the given offsets.
    pub fn translate(&self, dx: f32, dy: f32) -> Rectangle {
        Rectangle::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Compute the intersection of two rectangles.
    /// If there's no overlap, the result has zero width or height.
    pub fn intersect(&self, other: &Rectangle) -> Rectangle {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        Rectangle::new(x1, y1, (x2 - x1).max(0.0), (y2 - y1).max(0.0))
    }

    /// Whether the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limits_resolve_clamps_both_axes() {
        let limits = Limits::with_range(10.0, 100.0, 0.0, 50.0);
        assert_eq!(limits.resolve(200.0, 80.0), Size::new(100.0, 50.0));
        assert_eq!(limits.resolve(5.0, 20.0), Size::new(10.0, 20.0));
    }

    #[test]
    fn rectangle_intersection() {
        let a = Rectangle::new(0.0, 0.0, 100.0, 100.0);
        let b = Rectangle::new(50.0, 25.0, 100.0, 50.0);
        assert_eq!(a.intersect(&b), Rectangle::new(50.0, 25.0, 50.0, 50.0));

        let far = Rectangle::new(300.0, 300.0, 10.0, 10.0);
        assert!(a.intersect(&far).is_empty());
    }

    #[test]
    fn rectangle_contains_edges() {
        let r = Rectangle::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(31.0, 15.0)));
    }
}
