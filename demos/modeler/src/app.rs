use {
    crate::config::{Input, ModelerConfig},
    std::path::Path,
    tracing::{debug, info},
    trellis::{
        display::{DisplayCommand, DisplayList},
        error::DisplayError,
        prelude::*,
    },
};

/// State of the model viewer the GUI drives.
#[derive(Debug, Clone, PartialEq)]
pub struct Modeler {
    zoom: i32,
    angle: f64,
    requested: Option<String>,
}

impl Default for Modeler {
    fn default() -> Self {
        Modeler { zoom: 2, angle: 0.0, requested: None }
    }
}

impl Modeler {
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: i32) {
        self.zoom = zoom;
    }

    /// Rotation of the model in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The model file most recently asked for.
    pub fn requested_model(&self) -> Option<&str> {
        self.requested.as_deref()
    }

    pub fn request_load(&mut self, file: &str) {
        self.requested = Some(file.to_owned());
    }

    pub fn advance(&mut self, dt: f64) {
        self.angle += dt;
    }

    /// Scrolling away (positive) pulls the camera in by `2^amount`, scrolling back pushes it
    /// out by the same step. Zoom never drops below 1.
    pub fn apply_scroll(&mut self, amount: i32) {
        let step = 2i32.saturating_pow(amount.unsigned_abs());
        if amount > 0 {
            self.zoom = self.zoom.saturating_sub(step);
        } else if amount < 0 {
            self.zoom = self.zoom.saturating_add(step);
        }
        self.zoom = self.zoom.max(1);
    }
}

pub struct LoadAction {
    file: String,
}

impl LoadAction {
    pub fn new(file: impl Into<String>) -> Self {
        LoadAction { file: file.into() }
    }
}

impl Action<Modeler> for LoadAction {
    fn perform(&mut self, ctx: &mut EventContext<'_, Modeler>) {
        info!(file = %self.file, "loading model");
        ctx.aux.request_load(&self.file);
    }
}

pub struct ZoomAction {
    level: i32,
}

impl ZoomAction {
    pub fn new(level: i32) -> Self {
        ZoomAction { level }
    }
}

impl Action<Modeler> for ZoomAction {
    fn perform(&mut self, ctx: &mut EventContext<'_, Modeler>) {
        info!(zoom = self.level, "zoom set");
        ctx.aux.set_zoom(self.level);
    }
}

fn slot(index: usize, alignment: Alignment) -> Layout {
    Layout::new(10.0, 10.0 + 50.0 * index as f32, 80.0, 40.0).with_alignment(alignment)
}

/// Load buttons stack up from the bottom-left corner, zoom buttons from the bottom-right.
pub fn build_gui(env: &mut Environment<Modeler>, config: &ModelerConfig) -> Vec<WidgetId> {
    let mut buttons = Vec::with_capacity(config.models.len() + config.zoom_levels.len());

    for (i, file) in config.models.iter().enumerate() {
        let label = Path::new(file)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());
        let layout = slot(i, Alignment::BOTTOM_LEFT);
        buttons.push(env.add_button(label, LoadAction::new(file.as_str()), layout));
    }

    for (i, &level) in config.zoom_levels.iter().enumerate() {
        let layout = slot(i, Alignment::BOTTOM_RIGHT);
        buttons.push(env.add_button(format!("zoom {}", level), ZoomAction::new(level), layout));
    }

    buttons
}

/// What a scripted session left behind.
#[derive(Debug)]
pub struct Session {
    pub modeler: Modeler,
    pub frames: u32,
    /// Commands presented on the last frame.
    pub last_frame: Vec<DisplayCommand>,
}

/// Runs the viewer headless for `config.frames` frames, feeding it the scripted input.
pub fn run(config: &ModelerConfig) -> Result<Session, DisplayError> {
    let mut modeler = Modeler::default();
    let mut env = Environment::new(config.width, config.height);
    let buttons = build_gui(&mut env, config);
    debug!(buttons = buttons.len(), "gui built");

    let mut window = (config.width, config.height);
    let mut display = DisplayList::new();
    let mut last_frame = Vec::new();

    for frame in 0..config.frames {
        let mut scroll = 0;
        for input in config.inputs_at(frame) {
            match input {
                Input::Resize { width, height } => window = (width, height),
                Input::Click { x, y, button } => {
                    let point = Point::new(x, y);
                    let button = MouseButton::from_code(button);
                    let consumed = env.mouse_button(point, button, true, &mut modeler);
                    env.mouse_button(point, button, false, &mut modeler);
                    debug!(frame, x, y, consumed, "click");
                }
                Input::Scroll { amount } => scroll += amount,
            }
        }

        modeler.advance(config.frame_time);
        env.set_size(window.0, window.1);
        env.update(config.frame_time, &mut modeler);

        // the wheel only steers the camera once there is a model to look at
        if scroll != 0 && modeler.requested_model().is_some() {
            modeler.apply_scroll(scroll);
            debug!(frame, zoom = modeler.zoom(), "scrolled");
        }

        display.reset();
        env.draw(&mut display);
        last_frame = display.present()?;
    }

    Ok(Session { modeler, frames: config.frames, last_frame })
}

#[cfg(test)]
mod tests {
    use {super::*, crate::config::ScriptStep, float_cmp::approx_eq};

    #[test]
    fn test_scroll_steps_by_powers_of_two() {
        let mut modeler = Modeler::default();
        assert_eq!(modeler.zoom(), 2);

        modeler.apply_scroll(-3);
        assert_eq!(modeler.zoom(), 10);
        modeler.apply_scroll(2);
        assert_eq!(modeler.zoom(), 6);
        modeler.apply_scroll(0);
        assert_eq!(modeler.zoom(), 6);
        modeler.apply_scroll(4);
        assert_eq!(modeler.zoom(), 1);
        modeler.apply_scroll(40);
        assert_eq!(modeler.zoom(), 1);
    }

    #[test]
    fn test_default_layout() {
        let config = ModelerConfig::default();
        let mut env = Environment::new(800.0, 600.0);
        let buttons = build_gui(&mut env, &config);
        assert_eq!(buttons.len(), 8);

        let tree = env.tree();
        assert_eq!(tree.widget::<Button<Modeler>>(buttons[0]).unwrap().label(), "bunny");
        assert_eq!(tree.widget::<Button<Modeler>>(buttons[7]).unwrap().label(), "zoom 2500");

        // bottom-left stack, lowest slot nearest the edge
        assert_eq!(tree.offset(buttons[0]), Some(Vector::new(0.0, 540.0)));
        assert_eq!(tree.offset(buttons[3]), Some(Vector::new(0.0, 240.0)));
        // bottom-right stack
        assert_eq!(tree.offset(buttons[4]), Some(Vector::new(700.0, 540.0)));
        assert_eq!(tree.offset(buttons[6]), Some(Vector::new(700.0, 340.0)));
    }

    #[test]
    fn test_buttons_drive_modeler() {
        let config = ModelerConfig::default();
        let mut env = Environment::new(800.0, 600.0);
        build_gui(&mut env, &config);
        let mut modeler = Modeler::default();

        // "cube" sits in slot 1: [10, 90) x [500, 540)
        assert!(env.mouse_button(Point::new(50.0, 520.0), MouseButton::Left, true, &mut modeler));
        assert_eq!(modeler.requested_model(), Some("Assets/cube.obj"));

        // "zoom 1000" sits in slot 2 on the right: [710, 790) x [450, 490)
        assert!(env.mouse_button(Point::new(750.0, 470.0), MouseButton::Left, true, &mut modeler));
        assert_eq!(modeler.zoom(), 1000);
    }

    #[test]
    fn test_scripted_session() {
        let config = ModelerConfig {
            frames: 6,
            frame_time: 0.5,
            script: vec![
                ScriptStep { frame: 1, input: Input::Click { x: 50.0, y: 570.0, button: 1 } },
                ScriptStep { frame: 2, input: Input::Resize { width: 1024.0, height: 768.0 } },
                // the zoom 100 button has followed the corner
                ScriptStep { frame: 3, input: Input::Click { x: 950.0, y: 690.0, button: 1 } },
                ScriptStep { frame: 4, input: Input::Scroll { amount: 2 } },
                ScriptStep { frame: 4, input: Input::Scroll { amount: 1 } },
            ],
            ..ModelerConfig::default()
        };

        let session = run(&config).unwrap();
        assert_eq!(session.frames, 6);
        assert_eq!(session.modeler.requested_model(), Some("Assets/bunny.obj"));
        assert_eq!(session.modeler.zoom(), 92);
        assert!(approx_eq!(f64, session.modeler.angle(), 3.0, epsilon = 0.000001));

        let items = session
            .last_frame
            .iter()
            .filter(|command| matches!(command, DisplayCommand::Item(_)))
            .count();
        // fill and border for each of the eight buttons
        assert_eq!(items, 16);
    }

    #[test]
    fn test_scroll_ignored_until_model_requested() {
        let config = ModelerConfig {
            frames: 4,
            script: vec![
                ScriptStep { frame: 0, input: Input::Scroll { amount: -3 } },
                ScriptStep { frame: 2, input: Input::Click { x: 50.0, y: 570.0, button: 1 } },
                ScriptStep { frame: 3, input: Input::Scroll { amount: -3 } },
            ],
            ..ModelerConfig::default()
        };

        let session = run(&config).unwrap();
        assert_eq!(session.modeler.requested_model(), Some("Assets/bunny.obj"));
        assert_eq!(session.modeler.zoom(), 10);

        let idle = ModelerConfig { frames: 2, script: config.script[..1].to_vec(), ..config };
        let session = run(&idle).unwrap();
        assert_eq!(session.modeler.requested_model(), None);
        assert_eq!(session.modeler.zoom(), 2);
    }
}
