//! Stock leaf widgets.

mod button;
mod panel;

pub use self::{button::Button, panel::Panel};
