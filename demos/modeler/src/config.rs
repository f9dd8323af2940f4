use {
    serde::Deserialize,
    std::{fs, io, path::Path},
    thiserror::Error,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("malformed modeler configuration")]
    Parse(#[from] toml::de::Error),
    #[error("window size must be positive, got {width}x{height}")]
    EmptyWindow { width: f32, height: f32 },
    #[error("frame time must be positive, got {0}")]
    FrameTime(f64),
}

/// Scripted input, standing in for the window's event pump.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Input {
    Resize {
        width: f32,
        height: f32,
    },
    /// A press followed by a release at window coordinates.
    Click {
        x: f32,
        y: f32,
        #[serde(default = "left_button")]
        button: u8,
    },
    Scroll {
        amount: i32,
    },
}

fn left_button() -> u8 {
    1
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScriptStep {
    pub frame: u32,
    #[serde(flatten)]
    pub input: Input,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModelerConfig {
    pub width: f32,
    pub height: f32,
    pub frames: u32,
    /// Seconds per frame.
    pub frame_time: f64,
    pub models: Vec<String>,
    pub zoom_levels: Vec<i32>,
    pub script: Vec<ScriptStep>,
}

impl Default for ModelerConfig {
    fn default() -> Self {
        ModelerConfig {
            width: 800.0,
            height: 600.0,
            frames: 120,
            frame_time: 1.0 / 60.0,
            models: ["bunny", "cube", "dragon", "pencil"]
                .iter()
                .map(|name| format!("Assets/{}.obj", name))
                .collect(),
            zoom_levels: vec![1, 100, 1000, 2500],
            script: Vec::new(),
        }
    }
}

impl ModelerConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: ModelerConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.display().to_string(), source })?;
        ModelerConfig::from_toml(&source)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::EmptyWindow { width: self.width, height: self.height });
        }
        if !(self.frame_time > 0.0) {
            return Err(ConfigError::FrameTime(self.frame_time));
        }
        Ok(())
    }

    /// Inputs scheduled for `frame`, in file order.
    pub fn inputs_at(&self, frame: u32) -> impl Iterator<Item = Input> + '_ {
        self.script.iter().filter(move |step| step.frame == frame).map(|step| step.input)
    }
}
