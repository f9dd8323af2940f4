use trellis_core::{
    display::{Color, GuiRenderer},
    layout::Layout,
    widget::Widget,
};

/// A plain container, optionally filled with a solid colour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Panel {
    pub background: Option<Color>,
}

impl Panel {
    pub fn new(background: Option<Color>) -> Self {
        Panel { background }
    }
}

impl<A> Widget<A> for Panel {
    fn on_draw(&mut self, layout: &Layout, renderer: &mut dyn GuiRenderer) {
        if let Some(background) = self.background {
            renderer.fill_rectangle(layout.rect(), background);
        }
    }
}
