//! Time-based glide between two offsets
//!
//! A [`Glide`] is a lazy, finite, non-restartable interpolation: constructing
//! one touches no clock, the first sampled frame pins the start time, and the
//! run always terminates on the exact target value no matter how the final
//! frame lands relative to the duration.

use std::time::{Duration, Instant};

/// How long a snap animation takes
pub const GLIDE_DURATION: Duration = Duration::from_millis(300);

/// One sampled frame of a glide
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GlideFrame {
    /// Mid-flight value; more frames follow
    Running(f64),
    /// Terminal frame - always the exact target offset
    Done(f64),
}

impl GlideFrame {
    /// The offset carried by this frame
    pub fn value(&self) -> f64 {
        match *self {
            GlideFrame::Running(v) | GlideFrame::Done(v) => v,
        }
    }
}

/// A linear interpolation from one offset to another over a fixed duration
#[derive(Debug, Clone)]
pub struct Glide {
    from: f64,
    to: f64,
    duration: Duration,
    /// Pinned by the first sampled frame, not at construction
    started: Option<Instant>,
}

impl Glide {
    /// Set up a glide without starting its clock
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            started: None,
        }
    }

    /// The offset this glide terminates on
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Sample the glide at `now`
    ///
    /// The first call pins the start time, so each glide is independently
    /// timed from the moment it is first observed. Once the elapsed time
    /// reaches the duration this returns `Done(to)` - the exact endpoint,
    /// even when the last tick overshoots due to frame-timing jitter.
    pub fn frame(&mut self, now: Instant) -> GlideFrame {
        let started = *self.started.get_or_insert(now);
        let elapsed = now.saturating_duration_since(started);

        if elapsed >= self.duration {
            return GlideFrame::Done(self.to);
        }

        let ratio = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        GlideFrame::Running(self.from + (self.to - self.from) * ratio)
    }
}
