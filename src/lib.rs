//! A retained widget tree for small desktop tools: aligned layout, hit-testing, focus ordering
//! and painter-ordered drawing, plus a handful of stock widgets.
//!
//! The tree itself lives in [`trellis_core`](trellis_core) and is re-exported here.

pub mod action;
pub mod environment;
pub mod theme;
pub mod widgets;

pub use palette;
pub use trellis_core::{display, error, euclid, layout, tree, widget};

pub mod prelude {
    pub use crate::{
        action::Action,
        environment::Environment,
        theme::{ButtonStyle, Theme},
        widgets::{Button, Panel},
    };
    pub use trellis_core::prelude::*;
}
