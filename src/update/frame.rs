//! Frame message handling - advancing an in-flight glide

use crate::animation::GlideFrame;
use crate::commands::Cmd;
use crate::messages::FrameMsg;
use crate::model::AppModel;

/// Handle an animation tick
///
/// Samples the active glide at the tick's timestamp and publishes the frame
/// as the displayed offset. The terminal frame lands exactly on the target
/// and drops the glide; ticks arriving with no glide active do nothing.
pub fn update_frame(model: &mut AppModel, msg: FrameMsg) -> Option<Cmd> {
    let FrameMsg::Tick(now) = msg;
    let glide = model.glide.as_mut()?;

    match glide.frame(now) {
        GlideFrame::Running(offset) => {
            model.displayed_offset = offset;
            Some(Cmd::Animate)
        }
        GlideFrame::Done(offset) => {
            model.displayed_offset = offset;
            model.glide = None;
            Some(Cmd::Redraw)
        }
    }
}
