//! The widget arena: ownership, geometry, hit-testing and traversal.

use {
    crate::{
        display::{GuiRenderer, Point, Vector},
        layout::{anchor_offset, Alignment, Layout},
        widget::{EventContext, MouseButton, TreeCommand, Widget},
    },
    slotmap::SlotMap,
};

slotmap::new_key_type! {
    /// Stable handle to a widget stored in a [`WidgetTree`](WidgetTree).
    pub struct WidgetId;
}

struct Node<A> {
    layout: Layout,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    widget: Box<dyn Widget<A>>,
}

/// An arena of widgets arranged as a forest.
///
/// Every widget is owned by the tree and addressed through its [`WidgetId`](WidgetId); the
/// parent/child relation is stored as handles, so a widget has at most one parent and appears
/// in exactly that parent's child list.
///
/// Child order carries meaning. Hit-testing visits children first to last and stops at the
/// first one that takes the event, while drawing paints them last to first. Moving a widget to
/// the front of its siblings (see [`focus`](WidgetTree::focus)) therefore gives it input
/// priority and paints it on top.
///
/// Misuse is treated as a bug in the caller: stale ids, out-of-range child indices and
/// inserting a widget beneath itself all panic.
pub struct WidgetTree<A> {
    nodes: SlotMap<WidgetId, Node<A>>,
    pending: Vec<TreeCommand>,
}

impl<A> Default for WidgetTree<A> {
    fn default() -> Self {
        WidgetTree { nodes: SlotMap::with_key(), pending: Vec::new() }
    }
}

impl<A: 'static> WidgetTree<A> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Stores a new, parentless widget.
    pub fn insert<W: Widget<A> + 'static>(&mut self, widget: W, layout: Layout) -> WidgetId {
        self.insert_boxed(Box::new(widget), layout)
    }

    pub fn insert_boxed(&mut self, widget: Box<dyn Widget<A>>, layout: Layout) -> WidgetId {
        let id = self.nodes.insert(Node { layout, parent: None, children: Vec::new(), widget });
        tracing::trace!(?id, "widget inserted");
        id
    }

    /// Detaches a widget from its parent and frees it along with all of its descendants.
    pub fn destroy(&mut self, id: WidgetId) {
        if let Some(parent) = self.nodes[id].parent {
            self.detach(parent, id);
        }

        let mut stack = vec![id];
        let mut freed = 0usize;
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.children);
                freed += 1;
            }
        }

        tracing::trace!(?id, freed, "widget destroyed");
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live widgets, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the widget behind `id` if it is a `W`.
    pub fn widget<W: Widget<A> + 'static>(&self, id: WidgetId) -> Option<&W> {
        let widget: &dyn Widget<A> = &*self.nodes.get(id)?.widget;
        widget.as_any().downcast_ref::<W>()
    }

    pub fn widget_mut<W: Widget<A> + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        let widget: &mut dyn Widget<A> = &mut *self.nodes.get_mut(id)?.widget;
        widget.as_any_mut().downcast_mut::<W>()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes[id].parent
    }

    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        &self.nodes[id].children
    }

    pub fn child(&self, id: WidgetId, index: usize) -> WidgetId {
        self.nodes[id].children[index]
    }

    pub fn child_count(&self, id: WidgetId) -> usize {
        self.nodes[id].children.len()
    }

    /// Number of widgets transitively owned by `id`. Computed on every call.
    pub fn descendant_count(&self, id: WidgetId) -> usize {
        let children = &self.nodes[id].children;
        children.len() + children.iter().map(|&child| self.descendant_count(child)).sum::<usize>()
    }

    /// Whether `id` is `root` or lies somewhere beneath it.
    pub fn is_in_subtree(&self, id: WidgetId, root: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.nodes[id].parent;
        }
        false
    }

    pub fn layout(&self, id: WidgetId) -> &Layout {
        &self.nodes[id].layout
    }

    pub fn set_layout(&mut self, id: WidgetId, layout: Layout) {
        self.nodes[id].layout = layout;
    }

    pub fn set_position(&mut self, id: WidgetId, x: f32, y: f32) {
        self.nodes[id].layout.position = Point::new(x, y);
    }

    pub fn set_size(&mut self, id: WidgetId, width: f32, height: f32) {
        let layout = &mut self.nodes[id].layout;
        layout.size.width = width;
        layout.size.height = height;
    }

    pub fn set_bounds(&mut self, id: WidgetId, x: f32, y: f32, width: f32, height: f32) {
        self.set_position(id, x, y);
        self.set_size(id, width, height);
    }

    pub fn set_alignment(&mut self, id: WidgetId, horizontal: f32, vertical: f32) {
        self.nodes[id].layout.alignment = Alignment::new(horizontal, vertical);
    }

    /// Where the widget's frame sits within its parent's frame, or `None` for a parentless
    /// widget, which is the origin of its own subtree.
    pub fn offset(&self, id: WidgetId) -> Option<Vector> {
        let parent = self.nodes[id].parent?;
        Some(self.child_offset(parent, id))
    }

    /// Tests `point`, given in the frame the widget's layout lives in, against the widget's
    /// own rectangle. Children are not consulted.
    pub fn in_bounds(&self, id: WidgetId, point: Point) -> bool {
        self.nodes[id].layout.in_bounds(point)
    }

    /// Appends `child` to the end of `parent`'s children, detaching it from any previous
    /// parent first.
    pub fn add_child(&mut self, parent: WidgetId, child: WidgetId) {
        let len = self.nodes[parent].children.len();
        let index = if self.nodes[child].parent == Some(parent) { len - 1 } else { len };
        self.add_child_at(parent, child, index);
    }

    /// Inserts `child` at `index` of `parent`'s children, detaching it from any previous
    /// parent first. `index` is interpreted after that detachment.
    ///
    /// # Panics
    ///
    /// If `index` is past the end of the child list, or if `parent` is `child` itself or one of
    /// its descendants.
    pub fn add_child_at(&mut self, parent: WidgetId, child: WidgetId, index: usize) {
        assert!(
            !self.is_in_subtree(parent, child),
            "cannot add widget {:?} beneath itself (parent {:?} is in its subtree)",
            child,
            parent
        );

        let already_child = self.nodes[child].parent == Some(parent);
        let len = self.nodes[parent].children.len() - already_child as usize;
        assert!(index <= len, "child index {} out of range for {} children", index, len);

        if let Some(old_parent) = self.nodes[child].parent {
            self.detach(old_parent, child);
        }

        self.nodes[parent].children.insert(index, child);
        self.nodes[child].parent = Some(parent);

        tracing::trace!(?parent, ?child, index, "child added");
    }

    /// Detaches `child` from `parent`. Does nothing if `child` isn't a child of `parent`.
    pub fn remove_child(&mut self, parent: WidgetId, child: WidgetId) {
        if self.nodes[child].parent != Some(parent) {
            return;
        }

        self.detach(parent, child);
        tracing::trace!(?parent, ?child, "child removed");
    }

    /// Moves the widget to the front of its siblings, then does the same for its parent, and
    /// so on up to the root. The widget ends up first to receive input and last to be painted
    /// at every level.
    pub fn focus(&mut self, id: WidgetId) {
        let mut current = id;
        while let Some(parent) = self.nodes[current].parent {
            let children = &mut self.nodes[parent].children;
            if let Some(position) = children.iter().position(|&child| child == current) {
                children[..=position].rotate_right(1);
            }
            current = parent;
        }

        tracing::trace!(?id, "widget focused");
    }

    /// Routes a mouse button event through the subtree at `id`.
    ///
    /// `point` is in the frame `id`'s layout lives in. Children are offered the event first,
    /// in order, each in its own frame; the first to take it ends the search. Failing that,
    /// the widget takes the event itself if `point` lies within its bounds.
    ///
    /// Returns whether anything took the event. Structural changes requested by handlers are
    /// applied before this returns.
    pub fn mouse_button(
        &mut self,
        id: WidgetId,
        point: Point,
        button: MouseButton,
        down: bool,
        aux: &mut A,
    ) -> bool {
        let consumed = self.dispatch_mouse_button(id, point, button, down, aux);
        tracing::debug!(
            ?id,
            x = point.x,
            y = point.y,
            button = button.code(),
            down,
            consumed,
            "mouse button dispatched"
        );
        self.apply_pending();
        consumed
    }

    /// Ticks the widget at `id`, then its children, depth-first in child order.
    ///
    /// Structural changes requested by handlers are applied before this returns.
    pub fn update(&mut self, id: WidgetId, dt: f64, aux: &mut A) {
        self.dispatch_update(id, dt, aux);
        self.apply_pending();
    }

    /// Paints the widget at `id`, then its children from last to first, each with the
    /// renderer's origin moved to the child's frame. The origin is restored after every child.
    pub fn draw(&mut self, id: WidgetId, renderer: &mut dyn GuiRenderer) {
        let node = &mut self.nodes[id];
        node.widget.on_draw(&node.layout, renderer);

        for index in (0..self.nodes[id].children.len()).rev() {
            let child = self.nodes[id].children[index];
            let offset = self.child_offset(id, child);

            renderer.translate(offset);
            self.draw(child, renderer);
            renderer.translate(-offset);
        }
    }

    /// Applies a structural change. Changes naming widgets that no longer exist are dropped.
    pub fn apply(&mut self, command: TreeCommand) {
        let live = match command {
            TreeCommand::AddChild { parent, child, .. }
            | TreeCommand::RemoveChild { parent, child } => {
                self.contains(parent) && self.contains(child)
            }
            TreeCommand::Focus(id) | TreeCommand::Destroy(id) => self.contains(id),
        };

        if !live {
            tracing::warn!(?command, "dropping tree command for a destroyed widget");
            return;
        }

        match command {
            TreeCommand::AddChild { parent, child, index: Some(index) } => {
                self.add_child_at(parent, child, index)
            }
            TreeCommand::AddChild { parent, child, index: None } => self.add_child(parent, child),
            TreeCommand::RemoveChild { parent, child } => self.remove_child(parent, child),
            TreeCommand::Focus(id) => self.focus(id),
            TreeCommand::Destroy(id) => self.destroy(id),
        }
    }

    fn apply_pending(&mut self) {
        for command in std::mem::take(&mut self.pending) {
            self.apply(command);
        }
    }

    fn detach(&mut self, parent: WidgetId, child: WidgetId) {
        self.nodes[child].parent = None;
        let children = &mut self.nodes[parent].children;
        if let Some(position) = children.iter().position(|&c| c == child) {
            children.remove(position);
        }
    }

    fn child_offset(&self, parent: WidgetId, child: WidgetId) -> Vector {
        anchor_offset(&self.nodes[parent].layout, &self.nodes[child].layout)
    }

    fn dispatch_mouse_button(
        &mut self,
        id: WidgetId,
        point: Point,
        button: MouseButton,
        down: bool,
        aux: &mut A,
    ) -> bool {
        // handlers can only queue changes, so the child list is stable for the whole loop
        for index in 0..self.nodes[id].children.len() {
            let child = self.nodes[id].children[index];
            let offset = self.child_offset(id, child);
            if self.dispatch_mouse_button(child, point - offset, button, down, aux) {
                return true;
            }
        }

        let node = &mut self.nodes[id];
        if !node.layout.in_bounds(point) {
            return false;
        }

        let mut ctx = EventContext::new(aux, id, node.layout, &mut self.pending);
        node.widget.on_mouse_button(&mut ctx, point, button, down);
        true
    }

    fn dispatch_update(&mut self, id: WidgetId, dt: f64, aux: &mut A) {
        let node = &mut self.nodes[id];
        let mut ctx = EventContext::new(aux, id, node.layout, &mut self.pending);
        node.widget.on_update(&mut ctx, dt);

        for index in 0..self.nodes[id].children.len() {
            let child = self.nodes[id].children[index];
            self.dispatch_update(child, dt, aux);
        }
    }
}
