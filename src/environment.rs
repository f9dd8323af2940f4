use {
    crate::{
        action::Action,
        theme::Theme,
        widgets::{Button, Panel},
    },
    trellis_core::{
        display::{GuiRenderer, Point, Size},
        layout::Layout,
        tree::{WidgetId, WidgetTree},
        widget::{MouseButton, Widget},
    },
};

/// The root of an application's GUI.
///
/// Owns the widget tree and a root panel spanning the window. Widgets added through
/// [`add_widget`](Environment::add_widget) are anchored against the window, so keeping the
/// root's size in step with the window (see [`set_size`](Environment::set_size)) keeps
/// far-aligned widgets pinned to the right/bottom edges.
pub struct Environment<A> {
    tree: WidgetTree<A>,
    root: WidgetId,
    theme: Theme,
}

impl<A: 'static> Environment<A> {
    pub fn new(width: f32, height: f32) -> Self {
        Environment::with_theme(width, height, Theme::default())
    }

    pub fn with_theme(width: f32, height: f32, theme: Theme) -> Self {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Panel::new(theme.background), Layout::new(0.0, 0.0, width, height));
        Environment { tree, root, theme }
    }

    pub fn root(&self) -> WidgetId {
        self.root
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn tree(&self) -> &WidgetTree<A> {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree<A> {
        &mut self.tree
    }

    /// Stores a widget and appends it to the root.
    pub fn add_widget<W: Widget<A> + 'static>(&mut self, widget: W, layout: Layout) -> WidgetId {
        let id = self.tree.insert(widget, layout);
        self.tree.add_child(self.root, id);
        id
    }

    pub fn size(&self) -> Size {
        self.tree.layout(self.root).size
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.tree.set_size(self.root, width, height);
    }

    /// Dispatches a mouse button event at window coordinates.
    pub fn mouse_button(
        &mut self,
        point: Point,
        button: MouseButton,
        down: bool,
        aux: &mut A,
    ) -> bool {
        self.tree.mouse_button(self.root, point, button, down, aux)
    }

    pub fn update(&mut self, dt: f64, aux: &mut A) {
        self.tree.update(self.root, dt, aux);
    }

    /// Paints the whole GUI. Resetting the renderer between frames is left to the caller.
    pub fn draw(&mut self, renderer: &mut dyn GuiRenderer) {
        self.tree.draw(self.root, renderer);
    }

    pub fn focus(&mut self, id: WidgetId) {
        self.tree.focus(id);
    }

    /// Adds a [`Button`](Button) styled after the environment's theme.
    pub fn add_button(
        &mut self,
        label: impl Into<String>,
        action: impl Action<A> + 'static,
        layout: Layout,
    ) -> WidgetId {
        let button = Button::new(label, action).with_style(self.theme.button);
        self.add_widget(button, layout)
    }
}
