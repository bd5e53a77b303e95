//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The carousel has exactly two: repaint, and repaint-plus-keep-ticking while
//! a glide is in flight.

/// Side effect requested by an update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the panel strip
    Redraw,
    /// Request a redraw and schedule animation frame ticks
    ///
    /// The runtime keeps delivering `FrameMsg::Tick` at the frame cadence
    /// until the model reports that no glide is active.
    Animate,
}

impl Cmd {
    /// Whether this command requires a repaint
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Cmd::Redraw | Cmd::Animate)
    }

    /// Whether this command starts (or continues) the frame timer
    pub fn needs_frames(&self) -> bool {
        matches!(self, Cmd::Animate)
    }
}
