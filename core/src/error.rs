use thiserror::Error;

/// An error raised while handing a recorded frame over to whoever consumes it.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DisplayError {
    #[error("the origin was left translated by ({dx}, {dy}) at the end of the frame")]
    UnbalancedTranslation { dx: f32, dy: f32 },
}
