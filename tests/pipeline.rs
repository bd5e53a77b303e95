//! End-to-end pipeline tests - full gestures through the update fold

mod common;

use std::time::Instant;

use common::{move_to, press, release, swipe, test_model, tick_at};
use swipe::commands::Cmd;

#[test]
fn test_swipe_advances_and_glides_to_target() {
    let mut model = test_model(5, 300.0);
    let epoch = Instant::now();

    press(&mut model, 200.0);
    move_to(&mut model, 150.0);
    assert_eq!(model.displayed_offset, -50.0);

    let cmd = release(&mut model, 150.0);
    assert_eq!(cmd, Some(Cmd::Animate));
    assert_eq!(model.carousel.active_index, 1);
    assert_eq!(model.carousel.target_offset, -300.0);
    assert!(model.is_animating());

    // First tick pins the start; the glide departs from the release offset
    assert_eq!(tick_at(&mut model, epoch, 0), Some(Cmd::Animate));
    assert_eq!(model.displayed_offset, -50.0);

    tick_at(&mut model, epoch, 150);
    assert_eq!(model.displayed_offset, -175.0);

    // Past the duration: the terminal frame is the exact target
    assert_eq!(tick_at(&mut model, epoch, 350), Some(Cmd::Redraw));
    assert_eq!(model.displayed_offset, -300.0);
    assert!(!model.is_animating());
}

#[test]
fn test_settled_drop_emits_single_value_without_frames() {
    let mut model = test_model(5, 300.0);

    // Drag out and back so the final displacement is exactly zero
    press(&mut model, 100.0);
    move_to(&mut model, 60.0);
    move_to(&mut model, 100.0);

    let cmd = release(&mut model, 100.0);

    // current == target: one settle emission, no animation frames
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(!model.is_animating());
    assert_eq!(model.displayed_offset, 0.0);
    assert_eq!(model.carousel.active_index, 0);
}

#[test]
fn test_subthreshold_release_glides_back_home() {
    let mut model = test_model(5, 300.0);
    let epoch = Instant::now();

    swipe(&mut model, 100.0, 90.0); // displacement -10

    assert_eq!(model.carousel.active_index, 0);
    assert!(model.is_animating());

    tick_at(&mut model, epoch, 0);
    assert_eq!(model.displayed_offset, -10.0);

    tick_at(&mut model, epoch, 400);
    assert_eq!(model.displayed_offset, 0.0);
    assert!(!model.is_animating());
}

#[test]
fn test_clamped_swipe_at_last_panel_keeps_target() {
    let mut model = test_model(5, 300.0);
    let epoch = Instant::now();

    for _ in 0..4 {
        swipe(&mut model, 200.0, 150.0);
        common::finish_glide(&mut model);
    }
    assert_eq!(model.displayed_offset, -1200.0);

    // Past the threshold at the last panel: index stays, target stays
    swipe(&mut model, 200.0, 120.0);
    assert_eq!(model.carousel.active_index, 4);
    assert_eq!(model.carousel.target_offset, -1200.0);

    tick_at(&mut model, epoch, 0);
    tick_at(&mut model, epoch, 500);
    assert_eq!(model.displayed_offset, -1200.0);
}

#[test]
fn test_new_drag_interrupts_glide() {
    let mut model = test_model(5, 300.0);
    let epoch = Instant::now();

    swipe(&mut model, 200.0, 150.0);
    tick_at(&mut model, epoch, 0);
    tick_at(&mut model, epoch, 150);
    assert_eq!(model.displayed_offset, -175.0);

    // Press alone leaves the glide running...
    press(&mut model, 100.0);
    assert!(model.is_animating());

    // ...but the first live sample replaces the state and cancels it
    move_to(&mut model, 80.0);
    assert!(!model.is_animating());
    assert_eq!(model.displayed_offset, -320.0); // -(1 * 300) + (-20)

    // Stale ticks from the abandoned run change nothing
    assert_eq!(tick_at(&mut model, epoch, 200), None);
    assert_eq!(model.displayed_offset, -320.0);
}

#[test]
fn test_consecutive_swipes_walk_the_strip() {
    let mut model = test_model(5, 300.0);

    let expected_targets = [-300.0, -600.0, -900.0, -1200.0];
    for target in expected_targets {
        swipe(&mut model, 200.0, 150.0);
        common::finish_glide(&mut model);
        assert_eq!(model.displayed_offset, target);
    }

    // And back down
    swipe(&mut model, 150.0, 200.0);
    common::finish_glide(&mut model);
    assert_eq!(model.carousel.active_index, 3);
    assert_eq!(model.displayed_offset, -900.0);
}
