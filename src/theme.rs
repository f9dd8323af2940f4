//! Colours and timings shared by the stock widgets.

use trellis_core::display::{Color, GraphicsDisplayStroke};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonStyle {
    /// Fill when the button is at rest.
    pub idle: Color,
    /// Fill right after a press; fades back to `idle`.
    pub pressed: Color,
    pub border: GraphicsDisplayStroke,
    /// How much of the press highlight fades per second.
    pub fade_rate: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            idle: Color::new(0.20, 0.55, 0.65, 1.0),
            pressed: Color::new(0.85, 0.90, 0.95, 1.0),
            border: GraphicsDisplayStroke { color: Color::new(0.1, 0.1, 0.1, 1.0), thickness: 1.0 },
            fade_rate: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Theme {
    pub button: ButtonStyle,
    /// Fill for the environment's root panel, if any.
    pub background: Option<Color>,
}
