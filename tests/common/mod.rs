//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::{Duration, Instant};

use swipe::commands::Cmd;
use swipe::config::CarouselConfig;
use swipe::messages::Msg;
use swipe::model::AppModel;
use swipe::theme::{Color, IndicatorColors, Theme};
use swipe::update::update;

/// Build a throwaway theme with the given number of panels
pub fn test_theme(panel_count: usize) -> Theme {
    let gray = Color {
        r: 0x80,
        g: 0x80,
        b: 0x80,
    };
    Theme {
        name: "Test".to_string(),
        background: Color { r: 0, g: 0, b: 0 },
        panels: vec![gray; panel_count],
        indicator: IndicatorColors {
            active: Color {
                r: 0xFF,
                g: 0xFF,
                b: 0xFF,
            },
            inactive: gray,
        },
    }
}

/// Create a test model with the given panel count and seeded viewport width
pub fn test_model(panel_count: usize, viewport_width: f64) -> AppModel {
    AppModel::new(
        viewport_width,
        test_theme(panel_count),
        CarouselConfig::default(),
    )
}

/// Dispatch a pointer press
pub fn press(model: &mut AppModel, x: f64) -> Option<Cmd> {
    update(model, Msg::pressed(x))
}

/// Dispatch a pointer move
pub fn move_to(model: &mut AppModel, x: f64) -> Option<Cmd> {
    update(model, Msg::moved(x))
}

/// Dispatch a pointer release
pub fn release(model: &mut AppModel, x: f64) -> Option<Cmd> {
    update(model, Msg::released(x))
}

/// Dispatch a viewport resize
pub fn resize(model: &mut AppModel, width: f64) -> Option<Cmd> {
    update(model, Msg::resized(width))
}

/// Dispatch an animation tick at `epoch + ms`
pub fn tick_at(model: &mut AppModel, epoch: Instant, ms: u64) -> Option<Cmd> {
    update(model, Msg::tick(epoch + Duration::from_millis(ms)))
}

/// Perform a full drag gesture: press at `origin`, one move to `end`, release
pub fn swipe(model: &mut AppModel, origin: f64, end: f64) -> Option<Cmd> {
    press(model, origin);
    move_to(model, end);
    release(model, end)
}

/// Run an in-flight glide to completion
///
/// Ticks once to pin the glide's start time, then once far past the
/// duration so the terminal frame lands.
pub fn finish_glide(model: &mut AppModel) {
    let epoch = Instant::now();
    tick_at(model, epoch, 0);
    tick_at(model, epoch, 1_000);
    assert!(
        !model.is_animating(),
        "glide should have completed after a full duration"
    );
}
