use crate::{Point, Rectangle};

/// A draw command recorded during a frame.
///
/// Commands are stored in screen space: the active scroll offset has already
/// been applied and `clip` holds the clip rectangle in effect when the
/// command was recorded.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rectangle,
        color: Color,
        clip: Option<Rectangle>,
    },
    StrokeRect {
        rect: Rectangle,
        color: Color,
        width: f32,
        clip: Option<Rectangle>,
    },
    DrawText {
        text: String,
        position: Point,
        color: Color,
        size: f32,
        clip: Option<Rectangle>,
    },
}

/// The renderer records high-level drawing primitives that widgets emit.
///
/// A backend (terminal dump, canvas, GPU) replays [`Renderer::commands`].
/// Primitives fully outside the active clip are dropped at record time.
#[derive(Debug, Default)]
pub struct Renderer {
    width: u32,
    height: u32,
    draw_commands: Vec<DrawCommand>,
    clip_stack: Vec<Rectangle>,
    scroll_offset_x: Vec<f32>,
}

impl Renderer {
    /// Create a renderer for a surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Resize the target surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Current surface size.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Drop all recorded commands and transform state.
    pub fn begin_frame(&mut self) {
        self.draw_commands.clear();
        self.clip_stack.clear();
        self.scroll_offset_x.clear();
    }

    /// Commands recorded since the last [`Renderer::begin_frame`].
    pub fn commands(&self) -> &[DrawCommand] {
        &self.draw_commands
    }

    /// All text strings drawn this frame, in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.draw_commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Restrict subsequent drawing to `rect` (intersected with any outer clip).
    pub fn push_clip(&mut self, rect: Rectangle) {
        let clip = match self.clip_stack.last() {
            Some(outer) => outer.intersect(&rect),
            None => rect,
        };
        self.clip_stack.push(clip);
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Shift subsequent drawing left by `offset` pixels.
    pub fn push_scroll_offset_x(&mut self, offset: f32) {
        self.scroll_offset_x.push(offset);
    }

    pub fn pop_scroll_offset_x(&mut self) {
        self.scroll_offset_x.pop();
    }

    fn current_clip(&self) -> Option<Rectangle> {
        self.clip_stack.last().copied()
    }

    fn offset_x(&self) -> f32 {
        self.scroll_offset_x.iter().sum()
    }

    fn place(&self, rect: Rectangle) -> Option<Rectangle> {
        let rect = rect.translate(-self.offset_x(), 0.0);
        match self.current_clip() {
            Some(clip) if clip.intersect(&rect).is_empty() => None,
            _ => Some(rect),
        }
    }

    /// Draw a filled rectangle.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        if let Some(rect) = self.place(rect) {
            let clip = self.current_clip();
            self.draw_commands.push(DrawCommand::FillRect { rect, color, clip });
        }
    }

    /// Draw a rectangle outline.
    pub fn stroke_rect(&mut self, rect: Rectangle, color: Color, width: f32) {
        if let Some(rect) = self.place(rect) {
            let clip = self.current_clip();
            self.draw_commands.push(DrawCommand::StrokeRect {
                rect,
                color,
                width,
                clip,
            });
        }
    }

    /// Draw text.
    pub fn draw_text(&mut self, text: &str, position: Point, color: Color, size: f32) {
        let position = Point::new(position.x - self.offset_x(), position.y);
        if let Some(clip) = self.current_clip() {
            if !clip.contains(position) {
                return;
            }
        }
        let clip = self.current_clip();
        self.draw_commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            position,
            color,
            size,
            clip,
        });
    }
}

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}
