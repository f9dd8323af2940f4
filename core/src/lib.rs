//! Core components of trellis: the widget arena, its layout rule and the renderer interface.

pub mod display;
pub mod error;
pub mod layout;
pub mod tree;
pub mod widget;

pub use euclid;
pub use palette;

pub mod prelude {
    pub use crate::{
        display::{Color, GuiRenderer, Point, Rect, Size, Vector},
        layout::{Alignment, Layout},
        tree::{WidgetId, WidgetTree},
        widget::{EventContext, MouseButton, Widget},
    };
}
