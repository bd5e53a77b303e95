//! Application model - the complete state of the carousel
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. `AppModel` is the single owner of mutable state; everything else
//! in the pipeline is a pure function over its inputs.

pub mod carousel;
pub mod drag;

pub use carousel::{CarouselState, Sample, SWIPE_THRESHOLD_PX};
pub use drag::DragState;

use crate::animation::Glide;
use crate::config::CarouselConfig;
use crate::theme::Theme;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Offset/index state maintained by the fold step
    pub carousel: CarouselState,
    /// Active drag session, if any
    pub drag: DragState,
    /// In-flight snap animation, if any
    pub glide: Option<Glide>,
    /// The offset currently applied to the panel strip (pixels)
    ///
    /// This is the single output of the pipeline: updated once per settle
    /// and once per glide frame, and read by the renderer as a horizontal
    /// translation.
    pub displayed_offset: f64,
    /// Most recently reported viewport width (pixels)
    ///
    /// Seeded with the mount-time width at construction so a drop that
    /// happens before any resize never sees an undefined width.
    pub viewport_width: f64,
    /// Number of panels in the strip
    pub panel_count: usize,
    /// Panel palette and indicator colors
    pub theme: Theme,
    /// Persisted user configuration
    pub config: CarouselConfig,
}

impl AppModel {
    /// Create the initial model
    ///
    /// The panel count is the length of the theme's palette; the viewport
    /// width signal is seeded with the mount-time width.
    pub fn new(viewport_width: f64, theme: Theme, config: CarouselConfig) -> Self {
        Self {
            carousel: CarouselState::new(),
            drag: DragState::new(),
            glide: None,
            displayed_offset: 0.0,
            viewport_width,
            panel_count: theme.panels.len(),
            theme,
            config,
        }
    }

    /// Whether a snap animation is in flight
    pub fn is_animating(&self) -> bool {
        self.glide.is_some()
    }
}
