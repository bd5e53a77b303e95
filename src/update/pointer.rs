//! Pointer message handling - drag tracking, drop resolution, and settling
//!
//! This is where the three pointer signals become samples for the carousel
//! fold. Press opens a session, each move produces a live sample, and the
//! release produces the one drop sample (enriched with the latest viewport
//! width) before handing the new state to the offset player.

use tracing::debug;

use crate::animation::{Glide, GLIDE_DURATION};
use crate::commands::Cmd;
use crate::messages::PointerMsg;
use crate::model::{AppModel, Sample};

/// Handle a pointer message
pub fn update_pointer(model: &mut AppModel, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Pressed(position) => {
            // A press only opens the session. An in-flight glide keeps
            // running until the first move sample replaces the state.
            model.drag.begin(position);
            None
        }
        PointerMsg::Moved(position) => {
            // No session, no sample: a move before any press is dropped.
            let displacement = model.drag.track(position)?;
            model
                .carousel
                .apply(Sample::live(displacement), model.panel_count);

            // Latest state wins: a live sample cancels any running glide
            // and the strip snaps to tracking the pointer 1:1.
            model.glide = None;
            model.displayed_offset = model.carousel.current_offset;
            Some(Cmd::Redraw)
        }
        PointerMsg::Released(_position) => {
            // The drop carries the displacement current at release time,
            // not the release position. A session with no moves yields no
            // drop sample at all.
            let displacement = model.drag.release()?;
            model.carousel.apply(
                Sample::release(displacement, model.viewport_width),
                model.panel_count,
            );

            debug!(
                displacement,
                index = model.carousel.active_index,
                target = model.carousel.target_offset,
                "drop resolved"
            );

            Some(settle(model))
        }
    }
}

/// Offset player entry point: emit the settled value or start a glide
///
/// Called on every drop-produced state. When current and target already
/// agree (spring-back to the same panel) the value is emitted immediately
/// with no animation frames; otherwise a fresh glide replaces whatever was
/// in flight.
fn settle(model: &mut AppModel) -> Cmd {
    let state = &model.carousel;

    if state.is_settled() {
        model.glide = None;
        model.displayed_offset = state.target_offset;
        Cmd::Redraw
    } else {
        model.glide = Some(Glide::new(
            state.current_offset,
            state.target_offset,
            GLIDE_DURATION,
        ));
        Cmd::Animate
    }
}
