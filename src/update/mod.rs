//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. `update` is the
//! single mutation entry point: the event loop serializes every message
//! through it, so the model has exactly one writer.

mod app;
mod frame;
mod pointer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

pub use app::update_app;
pub use frame::update_frame;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Frame(m) => frame::update_frame(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}
