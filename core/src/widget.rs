//! The hooks a concrete widget implements, and the context handed to them.

use {
    crate::{
        display::{GuiRenderer, Point},
        layout::Layout,
        tree::WidgetId,
    },
    as_any::AsAny,
};

/// A mouse button, numbered the way windowing backends report them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

impl MouseButton {
    /// Maps a backend button code (1 = left, 2 = middle, 3 = right).
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => MouseButton::Left,
            2 => MouseButton::Middle,
            3 => MouseButton::Right,
            other => MouseButton::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            MouseButton::Left => 1,
            MouseButton::Middle => 2,
            MouseButton::Right => 3,
            MouseButton::Other(other) => other,
        }
    }
}

impl From<u8> for MouseButton {
    fn from(code: u8) -> Self {
        MouseButton::from_code(code)
    }
}

/// Behaviour of a node in a [`WidgetTree`](crate::tree::WidgetTree).
///
/// Structure, geometry and traversal belong to the tree; a widget only supplies what happens
/// when it is clicked, ticked or painted. Every hook defaults to doing nothing, which is all a
/// plain container needs.
///
/// `A` is application state threaded through event dispatch and updating, so that handlers
/// can act on the program that owns the GUI.
pub trait Widget<A>: AsAny {
    /// Invoked when a mouse button event lands inside this widget and no child took it.
    ///
    /// `point` is in the same frame as the widget's [`rect`](Layout::rect). Whether `down`
    /// means anything is entirely up to the widget.
    fn on_mouse_button(
        &mut self,
        _ctx: &mut EventContext<'_, A>,
        _point: Point,
        _button: MouseButton,
        _down: bool,
    ) {
    }

    /// Invoked once per frame, before the widget's children are updated.
    fn on_update(&mut self, _ctx: &mut EventContext<'_, A>, _dt: f64) {}

    /// Paints the widget. The renderer's origin is the frame the widget's layout lives in,
    /// so drawing at [`layout.rect()`](Layout::rect) puts the widget where it is hit-tested.
    fn on_draw(&mut self, _layout: &Layout, _renderer: &mut dyn GuiRenderer) {}
}

/// A structural change requested while the tree was being traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeCommand {
    AddChild { parent: WidgetId, child: WidgetId, index: Option<usize> },
    RemoveChild { parent: WidgetId, child: WidgetId },
    Focus(WidgetId),
    Destroy(WidgetId),
}

/// Handed to [`on_mouse_button`](Widget::on_mouse_button) and
/// [`on_update`](Widget::on_update).
///
/// Structural changes can't be applied while the tree is mid-traversal, so they are queued
/// here and applied, in the order they were requested, once the outermost traversal returns.
pub struct EventContext<'a, A> {
    /// Application state.
    pub aux: &'a mut A,
    id: WidgetId,
    layout: Layout,
    commands: &'a mut Vec<TreeCommand>,
}

impl<'a, A> EventContext<'a, A> {
    pub(crate) fn new(
        aux: &'a mut A,
        id: WidgetId,
        layout: Layout,
        commands: &'a mut Vec<TreeCommand>,
    ) -> Self {
        EventContext { aux, id, layout, commands }
    }

    /// The widget whose hook is running.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// The layout of the widget whose hook is running.
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) {
        self.commands.push(TreeCommand::AddChild { parent, child, index: None });
    }

    pub fn add_child_at(&mut self, parent: WidgetId, child: WidgetId, index: usize) {
        self.commands.push(TreeCommand::AddChild { parent, child, index: Some(index) });
    }

    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) {
        self.commands.push(TreeCommand::RemoveChild { parent, child });
    }

    pub fn focus(&mut self, id: WidgetId) {
        self.commands.push(TreeCommand::Focus(id));
    }

    pub fn destroy(&mut self, id: WidgetId) {
        self.commands.push(TreeCommand::Destroy(id));
    }

    /// Commands queued so far during this traversal, including those from other widgets.
    pub fn pending(&self) -> &[TreeCommand] {
        &self.commands[..]
    }
}
