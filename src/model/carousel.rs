//! Carousel offset/index state and its fold step
//!
//! The state machine is a left fold over the time-ordered merge of live drag
//! samples and drop samples. Live samples track the pointer 1:1; the drop
//! sample decides whether the release was a swipe and where the strip should
//! come to rest.

/// Minimum drag distance (pixels) for a release to count as a swipe
///
/// A drag of exactly this distance does change panels; anything shorter
/// springs back to the current one.
pub const SWIPE_THRESHOLD_PX: f64 = 30.0;

/// One element of the merged sample stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Signed horizontal distance from the press origin
    pub displacement: f64,
    /// Absent while the drag is live; the latest viewport width on the
    /// terminal drop sample
    pub viewport_width: Option<f64>,
}

impl Sample {
    /// A live drag sample - the pointer is still held
    pub fn live(displacement: f64) -> Self {
        Self {
            displacement,
            viewport_width: None,
        }
    }

    /// The terminal drop sample, enriched with the latest viewport width
    pub fn release(displacement: f64, viewport_width: f64) -> Self {
        Self {
            displacement,
            viewport_width: Some(viewport_width),
        }
    }
}

/// Offset/index model of the carousel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselState {
    /// Offset the strip currently sits at (glide start on a drop)
    pub current_offset: f64,
    /// Offset the strip should come to rest at
    ///
    /// Equal to `current_offset` exactly when no animation is required.
    pub target_offset: f64,
    /// Index of the active panel, always within `[0, panel_count - 1]`
    pub active_index: usize,
    /// Panel width in pixels; only updated from drop samples
    pub panel_width: f64,
}

impl CarouselState {
    /// The seed state: offset 0, index 0, width 0
    pub fn new() -> Self {
        Self {
            current_offset: 0.0,
            target_offset: 0.0,
            active_index: 0,
            panel_width: 0.0,
        }
    }

    /// Whether current and target offsets agree (no glide needed)
    pub fn is_settled(&self) -> bool {
        self.current_offset == self.target_offset
    }

    /// Fold one sample into the state
    ///
    /// Live samples move current and target together, so the strip follows
    /// the pointer with no smoothing. The drop sample picks the candidate
    /// index from the final displacement, clamped to the panel range, and
    /// leaves `current_offset` at the release-moment position - computed
    /// with the *old* index and width - as the start point of the glide.
    pub fn apply(&mut self, sample: Sample, panel_count: usize) {
        let provisional_from =
            -(self.active_index as f64 * self.panel_width) + sample.displacement;

        match sample.viewport_width {
            None => {
                self.current_offset = provisional_from;
                self.target_offset = provisional_from;
            }
            Some(width) => {
                let candidate = if sample.displacement.abs() < SWIPE_THRESHOLD_PX {
                    self.active_index
                } else if sample.displacement < 0.0 {
                    // Dragged leftward: advance, pinned to the last panel
                    (self.active_index + 1).min(panel_count.saturating_sub(1))
                } else {
                    // Dragged rightward: retreat, pinned to the first panel
                    self.active_index.saturating_sub(1)
                };

                self.active_index = candidate;
                self.panel_width = width;
                self.current_offset = provisional_from;
                self.target_offset = -(candidate as f64 * width);
            }
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}
