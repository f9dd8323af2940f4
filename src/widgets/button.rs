use {
    crate::{action::Action, theme::ButtonStyle},
    palette::Mix,
    trellis_core::{
        display::{Color, GuiRenderer, Point},
        layout::Layout,
        widget::{EventContext, MouseButton, Widget},
    },
};

/// A clickable rectangle which runs an [`Action`](Action) on every left-button press.
///
/// Pressing flashes the button towards its pressed colour; the flash fades out over the
/// following updates.
pub struct Button<A> {
    label: String,
    action: Box<dyn Action<A>>,
    style: ButtonStyle,
    highlight: f32,
    clicks: u32,
}

impl<A> Button<A> {
    pub fn new(label: impl Into<String>, action: impl Action<A> + 'static) -> Self {
        Button {
            label: label.into(),
            action: Box::new(action),
            style: ButtonStyle::default(),
            highlight: 0.0,
            clicks: 0,
        }
    }

    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of times the action has run.
    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    /// Remaining press highlight, from `1.0` right after a press down to `0.0`.
    pub fn highlight(&self) -> f32 {
        self.highlight
    }

    fn fill(&self) -> Color {
        let idle = self.style.idle.into_linear();
        let pressed = self.style.pressed.into_linear();
        Color::from_linear(idle.mix(&pressed, self.highlight))
    }
}

impl<A: 'static> Widget<A> for Button<A> {
    fn on_mouse_button(
        &mut self,
        ctx: &mut EventContext<'_, A>,
        _point: Point,
        button: MouseButton,
        down: bool,
    ) {
        if button != MouseButton::Left || !down {
            return;
        }

        self.clicks += 1;
        self.highlight = 1.0;
        tracing::debug!(label = %self.label, clicks = self.clicks, "button pressed");

        self.action.perform(ctx);
    }

    fn on_update(&mut self, _ctx: &mut EventContext<'_, A>, dt: f64) {
        self.highlight = (self.highlight - self.style.fade_rate * dt as f32).max(0.0);
    }

    fn on_draw(&mut self, layout: &Layout, renderer: &mut dyn GuiRenderer) {
        let rect = layout.rect();
        renderer.fill_rectangle(rect, self.fill());
        renderer.stroke_rectangle(rect, self.style.border);
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        float_cmp::approx_eq,
        trellis_core::{
            display::{DisplayItem, DisplayList, GraphicsDisplayPaint},
            tree::{WidgetId, WidgetTree},
        },
    };

    fn tree_with_button() -> (WidgetTree<Vec<&'static str>>, WidgetId) {
        let mut tree = WidgetTree::new();
        let button = tree.insert(
            Button::new("Load", |ctx: &mut EventContext<'_, Vec<&'static str>>| {
                ctx.aux.push("load")
            }),
            Layout::new(10.0, 10.0, 80.0, 40.0),
        );
        (tree, button)
    }

    fn press(
        tree: &mut WidgetTree<Vec<&'static str>>,
        id: WidgetId,
        button: MouseButton,
        down: bool,
        log: &mut Vec<&'static str>,
    ) -> bool {
        tree.mouse_button(id, Point::new(20.0, 20.0), button, down, log)
    }

    #[test]
    fn test_left_press_runs_action() {
        let (mut tree, id) = tree_with_button();
        let mut log = Vec::new();

        assert!(press(&mut tree, id, MouseButton::Left, true, &mut log));
        assert_eq!(log, vec!["load"]);
        assert_eq!(tree.widget::<Button<_>>(id).unwrap().clicks(), 1);
        assert_eq!(tree.widget::<Button<_>>(id).unwrap().label(), "Load");
    }

    #[test]
    fn test_release_and_other_buttons_are_consumed_but_ignored() {
        let (mut tree, id) = tree_with_button();
        let mut log = Vec::new();

        assert!(press(&mut tree, id, MouseButton::Left, false, &mut log));
        assert!(press(&mut tree, id, MouseButton::Right, true, &mut log));
        assert!(log.is_empty());
        assert_eq!(tree.widget::<Button<_>>(id).unwrap().clicks(), 0);
    }

    #[test]
    fn test_highlight_fades() {
        let (mut tree, id) = tree_with_button();
        let mut log = Vec::new();

        press(&mut tree, id, MouseButton::Left, true, &mut log);
        assert!(approx_eq!(f32, tree.widget::<Button<_>>(id).unwrap().highlight(), 1.0));

        tree.update(id, 0.125, &mut log);
        let highlight = tree.widget::<Button<_>>(id).unwrap().highlight();
        assert!(approx_eq!(f32, highlight, 0.5, epsilon = 0.0001));

        tree.update(id, 1.0, &mut log);
        assert!(approx_eq!(f32, tree.widget::<Button<_>>(id).unwrap().highlight(), 0.0));
    }

    #[test]
    fn test_draw_fill_tracks_highlight() {
        let (mut tree, id) = tree_with_button();
        let mut log = Vec::new();
        let style = ButtonStyle::default();

        let fill_of = |tree: &mut WidgetTree<Vec<&'static str>>| {
            let mut display = DisplayList::new();
            tree.draw(id, &mut display);
            match display.absolute_items()[0] {
                DisplayItem::Rectangle { rect, paint: GraphicsDisplayPaint::Fill(color) } => {
                    assert_eq!(rect, Layout::new(10.0, 10.0, 80.0, 40.0).rect());
                    color
                }
                ref other => panic!("expected a filled rectangle, got {:?}", other),
            }
        };

        let idle = fill_of(&mut tree);
        assert!(approx_eq!(f32, idle.red, style.idle.red, epsilon = 0.001));

        press(&mut tree, id, MouseButton::Left, true, &mut log);
        let pressed = fill_of(&mut tree);
        assert!(approx_eq!(f32, pressed.red, style.pressed.red, epsilon = 0.001));
        assert!(approx_eq!(f32, pressed.blue, style.pressed.blue, epsilon = 0.001));
    }
}
