//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The platform shell
//! translates raw window events into messages; tests construct them directly
//! with synthetic positions and timestamps.

use std::time::Instant;

/// Pointer messages - the three signals of a drag session
///
/// Each carries the horizontal pixel position of the pointer at the moment
/// the event fired. Vertical position is irrelevant to a horizontal carousel
/// and is dropped before it reaches the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Pointer pressed - starts a new drag session at this origin
    Pressed(f64),
    /// Pointer moved - produces a live drag sample while a session is active
    Moved(f64),
    /// Pointer released - terminates the active session and resolves the drop
    Released(f64),
}

/// Frame messages - the display-refresh timer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameMsg {
    /// One animation tick, carrying the time it fired
    ///
    /// The timestamp travels in the message so the update fold never reads
    /// the wall clock itself, which keeps animation fully deterministic
    /// under test-supplied instants.
    Tick(Instant),
}

/// App messages (window/viewport)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMsg {
    /// Viewport width changed (pixels)
    ///
    /// The shell must send one of these at startup carrying the mount-time
    /// width, so a drop that happens before any resize still has a defined
    /// panel width to work with.
    Resized(f64),
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    /// Pointer messages (press, move, release)
    Pointer(PointerMsg),
    /// Frame messages (animation ticks)
    Frame(FrameMsg),
    /// App messages (viewport size)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a pointer-press message
    pub fn pressed(position: f64) -> Self {
        Msg::Pointer(PointerMsg::Pressed(position))
    }

    /// Create a pointer-move message
    pub fn moved(position: f64) -> Self {
        Msg::Pointer(PointerMsg::Moved(position))
    }

    /// Create a pointer-release message
    pub fn released(position: f64) -> Self {
        Msg::Pointer(PointerMsg::Released(position))
    }

    /// Create a viewport-resize message
    pub fn resized(width: f64) -> Self {
        Msg::App(AppMsg::Resized(width))
    }

    /// Create an animation-tick message
    pub fn tick(now: Instant) -> Self {
        Msg::Frame(FrameMsg::Tick(now))
    }
}
