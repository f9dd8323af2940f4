//! Renderer interface consumed by the widget tree, plus a recording implementation.

use {crate::error::DisplayError, palette::Srgba};

/// Two-dimensional floating-point absolute point.
pub type Point = euclid::Point2D<f32, euclid::UnknownUnit>;
/// Two-dimensional floating-point relative vector.
pub type Vector = euclid::Vector2D<f32, euclid::UnknownUnit>;
/// Two-dimensional floating-point size.
pub type Size = euclid::Size2D<f32, euclid::UnknownUnit>;
/// Two-dimensional floating-point rectangle.
pub type Rect = euclid::Rect<f32, euclid::UnknownUnit>;

pub type Color = Srgba;

/// A target for GUI drawing.
///
/// The widget tree only ever issues [`translate`](GuiRenderer::translate) and
/// [`push_item`](GuiRenderer::push_item); every translation it issues is undone
/// before the traversal that issued it returns. [`reset`](GuiRenderer::reset) is
/// left to whoever owns the frame loop.
pub trait GuiRenderer {
    /// Moves the origin for subsequent items. Translations accumulate.
    fn translate(&mut self, offset: Vector);

    /// Clears all state, including the origin, ready for a new frame.
    fn reset(&mut self);

    /// Draws an item relative to the current origin.
    fn push_item(&mut self, item: DisplayItem);

    fn fill_rectangle(&mut self, rect: Rect, color: Color) {
        self.push_item(DisplayItem::Rectangle { rect, paint: GraphicsDisplayPaint::Fill(color) });
    }

    fn stroke_rectangle(&mut self, rect: Rect, stroke: GraphicsDisplayStroke) {
        self.push_item(DisplayItem::Rectangle {
            rect,
            paint: GraphicsDisplayPaint::Stroke(stroke),
        });
    }
}

/// Stroke/outline appearance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsDisplayStroke {
    /// The color of the stroke.
    pub color: Color,
    /// How thick the stroke should appear; the stroke width.
    pub thickness: f32,
}

impl Default for GraphicsDisplayStroke {
    fn default() -> Self {
        GraphicsDisplayStroke { color: Color::new(0.0, 0.0, 0.0, 1.0), thickness: 1.0 }
    }
}

/// Appearance of a display item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GraphicsDisplayPaint {
    /// The item is filled with a solid color.
    Fill(Color),
    /// The item is stroked/outlined.
    Stroke(GraphicsDisplayStroke),
}

/// Everything a widget can draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayItem {
    Rectangle {
        /// Rectangle coordinates.
        rect: Rect,
        /// Paint style rectangle.
        paint: GraphicsDisplayPaint,
    },
}

impl DisplayItem {
    /// Returns the maximum boundaries for the item, strokes included.
    pub fn bounds(&self) -> Rect {
        match self {
            DisplayItem::Rectangle { rect, paint } => match paint {
                GraphicsDisplayPaint::Fill(_) => *rect,
                GraphicsDisplayPaint::Stroke(stroke) => {
                    rect.inflate(stroke.thickness / 2.0, stroke.thickness / 2.0)
                }
            },
        }
    }

    /// Returns the same item moved by `offset`.
    pub fn translate(&self, offset: Vector) -> DisplayItem {
        match *self {
            DisplayItem::Rectangle { rect, paint } => {
                DisplayItem::Rectangle { rect: Rect::new(rect.origin + offset, rect.size), paint }
            }
        }
    }
}

/// Describes all possible display commands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayCommand {
    /// Display an item relative to the current origin.
    Item(DisplayItem),
    /// Adds translation to the origin.
    Translate(Vector),
}

/// Returns the total bounds of a list of items.
pub fn display_list_bounds(items: &[DisplayItem]) -> Rect {
    items
        .iter()
        .map(DisplayItem::bounds)
        .fold(None, |rect: Option<Rect>, bounds| Some(rect.map_or(bounds, |rc| rc.union(&bounds))))
        .unwrap_or_default()
}

const ORIGIN_EPSILON: f64 = 1e-6;

/// A [`GuiRenderer`](GuiRenderer) which records every command of a frame.
///
/// The origin is accumulated in double precision so that a translation followed by
/// its exact inverse always lands back on zero.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
    origin: (f64, f64),
}

impl DisplayList {
    pub fn new() -> Self {
        Default::default()
    }

    /// Commands recorded since the last reset/present.
    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    /// The current cumulative translation.
    pub fn origin(&self) -> Vector {
        Vector::new(self.origin.0 as f32, self.origin.1 as f32)
    }

    /// Items resolved into the frame the list was reset in, in the order they were pushed.
    pub fn absolute_items(&self) -> Vec<DisplayItem> {
        let mut origin = (0.0f64, 0.0f64);
        let mut items = Vec::new();
        for command in &self.commands {
            match command {
                DisplayCommand::Translate(offset) => {
                    origin.0 += offset.x as f64;
                    origin.1 += offset.y as f64;
                }
                DisplayCommand::Item(item) => {
                    items.push(item.translate(Vector::new(origin.0 as f32, origin.1 as f32)))
                }
            }
        }
        items
    }

    /// Total bounds of everything drawn in this frame.
    pub fn bounds(&self) -> Rect {
        display_list_bounds(&self.absolute_items())
    }

    /// Hands out the recorded frame, leaving the list empty.
    ///
    /// Fails, without consuming anything, if the origin was not restored (within rounding).
    pub fn present(&mut self) -> Result<Vec<DisplayCommand>, DisplayError> {
        if self.origin.0.abs() > ORIGIN_EPSILON || self.origin.1.abs() > ORIGIN_EPSILON {
            return Err(DisplayError::UnbalancedTranslation {
                dx: self.origin.0 as f32,
                dy: self.origin.1 as f32,
            });
        }

        Ok(std::mem::take(&mut self.commands))
    }
}

impl GuiRenderer for DisplayList {
    fn translate(&mut self, offset: Vector) {
        self.origin.0 += offset.x as f64;
        self.origin.1 += offset.y as f64;
        self.commands.push(DisplayCommand::Translate(offset));
    }

    fn reset(&mut self) {
        self.commands.clear();
        self.origin = (0.0, 0.0);
    }

    fn push_item(&mut self, item: DisplayItem) {
        self.commands.push(DisplayCommand::Item(item));
    }
}
