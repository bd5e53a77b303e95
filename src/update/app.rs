//! App message handling - viewport size tracking

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle an app message
///
/// A resize only records the latest width; the carousel keeps using its last
/// known panel width until the next drop sample carries the new one. The
/// strip itself is laid out at the new width immediately, so a repaint is
/// still needed.
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resized(width) => {
            model.viewport_width = width;
            Some(Cmd::Redraw)
        }
    }
}
