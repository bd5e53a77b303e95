//! Drag session tracking
//!
//! A session spans one press and its matching release. While a session is
//! active, every pointer move yields a displacement relative to the press
//! origin; the release ends the session and hands the final displacement to
//! the drop resolver. Moves without a session, and moves arriving after the
//! release, produce nothing.

/// One press-to-release interval
#[derive(Debug, Clone, Copy)]
struct Session {
    /// Horizontal position of the press that opened this session
    origin: f64,
    /// Displacement of the most recent move, if any move has happened yet
    ///
    /// A press-and-release with no movement leaves this `None`, and such a
    /// session resolves to no drop at all.
    displacement: Option<f64>,
}

/// Tracks the active drag session, if any
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    session: Option<Session>,
}

impl DragState {
    /// Create a tracker with no active session
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a session is currently held
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Start a new session at the given press position
    ///
    /// A press always supersedes: if a prior session is somehow still open
    /// (a release that never arrived), the newest press wins and the old
    /// session's residual moves attach to the new origin instead.
    pub fn begin(&mut self, origin: f64) {
        self.session = Some(Session {
            origin,
            displacement: None,
        });
    }

    /// Record a pointer move, returning the displacement since the origin
    ///
    /// Returns `None` when no session is active - a move without a press has
    /// nothing to attach to and is silently dropped.
    pub fn track(&mut self, position: f64) -> Option<f64> {
        let session = self.session.as_mut()?;
        let displacement = position - session.origin;
        session.displacement = Some(displacement);
        Some(displacement)
    }

    /// End the active session, returning its final displacement
    ///
    /// The session is cleared unconditionally; the displacement is only
    /// reported when at least one move happened, since a drop sample is
    /// never produced without a preceding drag sample.
    pub fn release(&mut self) -> Option<f64> {
        self.session.take()?.displacement
    }
}
